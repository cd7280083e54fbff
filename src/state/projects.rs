//! Project grid view state and the signal-backed filter sinks.
//!
//! The `catalog` crate's filter pushes controls and cards into whatever
//! implements its host traits. Here those traits are implemented for
//! [`ProjectsState`], and the sinks handed to the filter wrap the page's
//! `RwSignal<ProjectsState>` so every push re-renders the filter bar and
//! grid.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use catalog::{Catalog, ControlHost, FilterControl, ProjectCard, ProjectFilter, RenderTarget};
use leptos::prelude::*;

/// What the filter bar and project grid display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectsState {
    pub controls: Vec<FilterControl>,
    pub cards: Vec<ProjectCard>,
}

impl ControlHost for ProjectsState {
    fn show_controls(&mut self, controls: Vec<FilterControl>) {
        self.controls = controls;
    }
}

impl RenderTarget for ProjectsState {
    fn replace(&mut self, cards: Vec<ProjectCard>) {
        self.cards = cards;
    }
}

/// Control host writing into the shared projects signal.
#[derive(Clone, Copy)]
pub struct ControlSink(pub RwSignal<ProjectsState>);

/// Render target writing into the shared projects signal.
#[derive(Clone, Copy)]
pub struct GridSink(pub RwSignal<ProjectsState>);

impl ControlHost for ControlSink {
    fn show_controls(&mut self, controls: Vec<FilterControl>) {
        self.0.update(|state| state.show_controls(controls));
    }
}

impl RenderTarget for GridSink {
    fn replace(&mut self, cards: Vec<ProjectCard>) {
        self.0.update(|state| state.replace(cards));
    }
}

/// The filter as wired into the page.
pub type SiteFilter = ProjectFilter<ControlSink, GridSink>;

/// Build the page filter over `catalog` and show the unfiltered grid.
pub fn mount_filter(catalog: Catalog, view: RwSignal<ProjectsState>) -> SiteFilter {
    let mut filter = ProjectFilter::initialize(catalog, Some(ControlSink(view)), Some(GridSink(view)));
    filter.refresh();
    filter
}

/// The bundled catalog, or an empty one if it fails to load.
pub fn load_catalog() -> Catalog {
    Catalog::builtin().unwrap_or_else(|err| {
        log::error!("projects: {err}");
        Catalog::default()
    })
}
