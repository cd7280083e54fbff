//! Errors raised while building a catalog.
//!
//! Filtering itself never fails; only record construction and catalog
//! parsing can reject input.

use thiserror::Error;

/// Reasons a project record or catalog document is rejected.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("project {id}: title must not be blank")]
    BlankTitle { id: String },

    #[error("project {id}: tag list must not be empty")]
    NoTags { id: String },

    #[error("project {id}: tag at position {position} is empty")]
    EmptyTag { id: String, position: usize },

    #[error("project {id}: tag \"{tag}\" is reserved for the unfiltered view")]
    ReservedTag { id: String, tag: String },

    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}
