//! Light/dark theme switch button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

/// Button flipping the page theme; shows the glyph of the other theme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_click = move |_| {
        ui.update(|u| u.theme = theme::toggle(u.theme));
    };

    view! {
        <button id="themeToggle" class="theme-toggle" title="Toggle theme" on:click=on_click>
            {move || ui.with(|u| u.theme.icon())}
        </button>
    }
}
