//! Tag filter state machine and its host seams.
//!
//! DESIGN
//! ======
//! The filter owns the catalog, the derived [`TagIndex`], and the single
//! active [`FilterState`]. Hosts drive it with explicit commands
//! ([`ProjectFilter::select_tag`]) instead of subscribing to DOM events, and
//! receive output through two sinks:
//!
//! - a [`ControlHost`] that shows one control per tag label, and
//! - a [`RenderTarget`] that replaces the grid with fresh [`ProjectCard`]s.
//!
//! Either sink may be absent; the matching side effect is then skipped.
//!
//! Every tag value is a valid transition. A label missing from the index
//! leaves no control active and renders an empty grid.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::catalog::{Catalog, TagIndex};
use crate::consts::SENTINEL_TAG;
use crate::record::ProjectRecord;
use crate::render::{ProjectCard, render};

/// The active selector: no filter, or one exact tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FilterState {
    #[default]
    All,
    Tag(String),
}

impl FilterState {
    /// Map a control label to a state. The sentinel label means no filter.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == SENTINEL_TAG {
            Self::All
        } else {
            Self::Tag(label.to_owned())
        }
    }

    /// The control label that is active in this state.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => SENTINEL_TAG,
            Self::Tag(tag) => tag,
        }
    }

    #[must_use]
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => record.has_tag(tag),
        }
    }
}

/// One selectable filter control as handed to the control host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    pub label: String,
    pub active: bool,
}

/// Sink that displays the filter controls.
///
/// Receives the full control set on every change; the host calls
/// [`ProjectFilter::select_tag`] with a control's label when it is clicked.
pub trait ControlHost {
    fn show_controls(&mut self, controls: Vec<FilterControl>);
}

/// Sink that displays the project grid. Each call replaces the previous
/// contents entirely.
pub trait RenderTarget {
    fn replace(&mut self, cards: Vec<ProjectCard>);
}

impl ControlHost for Vec<FilterControl> {
    fn show_controls(&mut self, controls: Vec<FilterControl>) {
        *self = controls;
    }
}

impl RenderTarget for Vec<ProjectCard> {
    fn replace(&mut self, cards: Vec<ProjectCard>) {
        *self = cards;
    }
}

/// Filterable view over a fixed catalog.
#[derive(Debug)]
pub struct ProjectFilter<C, R> {
    catalog: Catalog,
    index: TagIndex,
    state: FilterState,
    host: Option<C>,
    target: Option<R>,
}

impl<C: ControlHost, R: RenderTarget> ProjectFilter<C, R> {
    /// Derive the tag index, reset to the unfiltered state, and push the
    /// initial controls with only the sentinel active.
    ///
    /// Does not render; call [`Self::refresh`] to fill the grid.
    #[must_use]
    pub fn initialize(catalog: Catalog, host: Option<C>, target: Option<R>) -> Self {
        let index = catalog.tag_index();
        let mut filter = Self {
            catalog,
            index,
            state: FilterState::All,
            host,
            target,
        };
        filter.push_controls();
        filter
    }

    /// Switch to `tag`, refresh the controls, and re-render the grid.
    pub fn select_tag(&mut self, tag: &str) {
        self.state = FilterState::from_label(tag);
        if !self.index.contains(tag) {
            log::debug!("filter: tag {tag:?} is not in the index");
        }
        self.push_controls();
        self.refresh();
    }

    /// Re-render the subset for the current state.
    pub fn refresh(&mut self) {
        let cards = render(&self.subset());
        log::debug!("filter: {:?} -> {} projects", self.state.label(), cards.len());
        if let Some(target) = self.target.as_mut() {
            target.replace(cards);
        }
    }

    fn push_controls(&mut self) {
        let controls = self.controls();
        if let Some(host) = self.host.as_mut() {
            host.show_controls(controls);
        }
    }
}

impl<C, R> ProjectFilter<C, R> {
    #[must_use]
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn tag_index(&self) -> &TagIndex {
        &self.index
    }

    /// Controls in index order; exactly the one labelled like the current
    /// state is active (none when that label is unknown).
    #[must_use]
    pub fn controls(&self) -> Vec<FilterControl> {
        let active = self.state.label();
        self.index
            .labels()
            .map(|label| FilterControl {
                label: label.to_owned(),
                active: label == active,
            })
            .collect()
    }

    /// Records visible in the current state, in catalog order.
    #[must_use]
    pub fn subset(&self) -> Vec<&ProjectRecord> {
        self.catalog.filter(&self.state)
    }

    #[must_use]
    pub fn control_host(&self) -> Option<&C> {
        self.host.as_ref()
    }

    #[must_use]
    pub fn render_target(&self) -> Option<&R> {
        self.target.as_ref()
    }
}
