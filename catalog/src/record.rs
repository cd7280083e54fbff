//! Project records: the immutable rows of the catalog.
//!
//! Records arrive either from the embedded JSON document or from code, and in
//! both cases go through the same validation in [`ProjectRecord::new`]. Once
//! built, a record is read-only; accessors hand out borrowed views.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::SENTINEL_TAG;
use crate::error::CatalogError;

/// Identifier of a project. Integer or free-form text, used as a render key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectId {
    Int(i64),
    Text(String),
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ProjectId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ProjectId {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ProjectId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One project shown in the portfolio grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProjectRecord")]
pub struct ProjectRecord {
    id: ProjectId,
    title: String,
    description: String,
    image: String,
    tags: Vec<String>,
    link: String,
}

/// Unchecked wire shape; converted through [`ProjectRecord::new`].
#[derive(Deserialize)]
struct RawProjectRecord {
    id: ProjectId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: String,
    tags: Vec<String>,
    #[serde(default = "default_link")]
    link: String,
}

fn default_link() -> String {
    "#".to_owned()
}

impl TryFrom<RawProjectRecord> for ProjectRecord {
    type Error = CatalogError;

    fn try_from(raw: RawProjectRecord) -> Result<Self, Self::Error> {
        Self::new(raw.id, raw.title, raw.description, raw.image, raw.tags, raw.link)
    }
}

impl ProjectRecord {
    /// Build a record, rejecting shapes the filter cannot present sensibly.
    ///
    /// Tags are kept exactly as given: no trimming, no case folding.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the title is blank, the tag list is
    /// empty, a tag is the empty string, or a tag collides with the
    /// sentinel label.
    pub fn new(
        id: impl Into<ProjectId>,
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        tags: Vec<String>,
        link: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let id = id.into();
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CatalogError::BlankTitle { id: id.to_string() });
        }
        if tags.is_empty() {
            return Err(CatalogError::NoTags { id: id.to_string() });
        }
        for (position, tag) in tags.iter().enumerate() {
            if tag.is_empty() {
                return Err(CatalogError::EmptyTag { id: id.to_string(), position });
            }
            if tag == SENTINEL_TAG {
                return Err(CatalogError::ReservedTag {
                    id: id.to_string(),
                    tag: tag.clone(),
                });
            }
        }
        Ok(Self {
            id,
            title,
            description: description.into(),
            image: image.into(),
            tags,
            link: link.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Emoji or short glyph used as the card's placeholder image.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Exact, case-sensitive tag membership.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
