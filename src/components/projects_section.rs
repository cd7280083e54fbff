//! Projects section: owns the page's tag filter.

use leptos::prelude::*;

use crate::components::filter_bar::FilterBar;
use crate::components::project_grid::ProjectGrid;
use crate::state::projects::{self, ProjectsState};

/// Loads the bundled catalog, mounts the filter, and routes filter-button
/// clicks into it. Each click runs one full transition before returning.
#[component]
pub fn ProjectsSection() -> impl IntoView {
    let view_state = RwSignal::new(ProjectsState::default());
    let filter = StoredValue::new(projects::mount_filter(projects::load_catalog(), view_state));

    let on_select = Callback::new(move |label: String| {
        filter.update_value(|f| f.select_tag(&label));
    });

    view! {
        <section id="projects" class="projects">
            <h2 class="section-title">"Projects"</h2>
            <FilterBar projects=view_state on_select/>
            <ProjectGrid projects=view_state/>
        </section>
    }
}
