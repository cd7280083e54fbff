//! Top navigation with the mobile menu toggle.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::ui::UiState;

const NAV_LINKS: [(&str, &str); 4] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

/// Site navigation.
///
/// On narrow screens the links collapse behind a menu button; following any
/// link closes the menu again. Scrolling itself is handled by the
/// document-level smooth-scroll listener.
#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let links_class = move || {
        if ui.with(|u| u.nav_open) {
            "nav-links active"
        } else {
            "nav-links"
        }
    };

    view! {
        <nav class="navbar glass">
            <a href="#home" class="logo">"Portfolio"</a>
            <ul class=links_class>
                {NAV_LINKS
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <li>
                                <a href=href on:click=move |_| ui.update(UiState::close_nav)>
                                    {label}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <ThemeToggle/>
            <button class="menu-toggle" title="Menu" on:click=move |_| ui.update(UiState::toggle_nav)>
                "\u{2630}"
            </button>
        </nav>
    }
}
