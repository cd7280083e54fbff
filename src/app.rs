//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::config::SiteConfig;
use crate::pages::home::HomePage;
use crate::state::contact::ContactState;
use crate::state::ui::UiState;
use crate::util::{observe, scroll, theme};

/// Root application component.
///
/// Resolves the startup theme, provides shared state as context, and once
/// mounted installs the page-wide browser behaviors (smooth scroll, lazy
/// images, section reveal, system theme tracking).
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::from_build_env();
    log::debug!("contact relay: {:?}", config.relay.kind());

    let initial_theme = theme::read_preference();
    theme::apply(initial_theme);

    let ui = RwSignal::new(UiState {
        theme: initial_theme,
        ..UiState::default()
    });
    let contact = RwSignal::new(ContactState::default());

    provide_context(config);
    provide_context(ui);
    provide_context(contact);

    // Runs once after the first render; reads no signals.
    Effect::new(move || {
        scroll::install_smooth_scroll();
        observe::lazy_load_images();
        observe::reveal_sections();
        theme::watch_system_preference(move |t| ui.update(|u| u.theme = t));
        log::info!("portfolio initialized");
    });

    view! {
        <Title text="Portfolio"/>
        <Meta name="description" content="Personal portfolio: projects and contact"/>
        <HomePage/>
    }
}
