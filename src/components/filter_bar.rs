//! Tag filter buttons above the project grid.

use leptos::prelude::*;

use crate::state::projects::ProjectsState;

/// One button per filter control; clicking sends its label to `on_select`.
#[component]
pub fn FilterBar(projects: RwSignal<ProjectsState>, on_select: Callback<String>) -> impl IntoView {
    view! {
        <div class="filter-container">
            {move || {
                projects
                    .with(|p| p.controls.clone())
                    .into_iter()
                    .map(|control| {
                        let class = if control.active { "filter-btn active" } else { "filter-btn" };
                        let label = control.label.clone();
                        view! {
                            <button class=class on:click=move |_| on_select.run(label.clone())>
                                {control.label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
