//! The fixed project catalog and the tag index derived from it.
//!
//! A [`Catalog`] is loaded once at startup and never mutated. The
//! [`TagIndex`] lists every distinct tag in first-seen order (record order,
//! then tag order within a record) behind the sentinel.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashSet;

use crate::consts::SENTINEL_TAG;
use crate::error::CatalogError;
use crate::filter::FilterState;
use crate::record::ProjectRecord;

const BUILTIN_CATALOG: &str = include_str!("../data/projects.json");

/// Ordered, read-only collection of project records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
}

impl Catalog {
    #[must_use]
    pub fn new(records: Vec<ProjectRecord>) -> Self {
        Self { records }
    }

    /// Parse a JSON array of project records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] when the document is malformed or any
    /// record fails validation.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let records: Vec<ProjectRecord> = serde_json::from_str(raw)?;
        log::debug!("catalog loaded: {} projects", records.len());
        Ok(Self::new(records))
    }

    /// The sample projects bundled with the site.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the bundled document does not validate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    #[must_use]
    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching `state`, in catalog order.
    #[must_use]
    pub fn filter(&self, state: &FilterState) -> Vec<&ProjectRecord> {
        self.records.iter().filter(|r| state.matches(r)).collect()
    }

    #[must_use]
    pub fn tag_index(&self) -> TagIndex {
        TagIndex::from_records(&self.records)
    }
}

/// Distinct tags of a catalog in first-seen order.
///
/// The sentinel is not stored; [`TagIndex::labels`] yields it first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    tags: Vec<String>,
}

impl TagIndex {
    #[must_use]
    pub fn from_records(records: &[ProjectRecord]) -> Self {
        let mut seen = HashSet::new();
        let mut tags = Vec::new();
        for tag in records.iter().flat_map(ProjectRecord::tags) {
            if seen.insert(tag.as_str()) {
                tags.push(tag.clone());
            }
        }
        Self { tags }
    }

    /// Control labels: the sentinel, then each distinct tag.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        std::iter::once(SENTINEL_TAG).chain(self.tags.iter().map(String::as_str))
    }

    /// Distinct concrete tags, without the sentinel.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Whether `label` names a control (the sentinel included).
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        label == SENTINEL_TAG || self.tags.iter().any(|t| t == label)
    }

    /// Number of controls, the sentinel included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len() + 1
    }

    /// Never true: the sentinel is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}
