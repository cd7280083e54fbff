//! Display items for the project grid.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::{CARD_ANIMATION, CARD_STAGGER_MS};
use crate::record::ProjectRecord;

/// One rendered project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    /// Stable key for keyed list rendering, from the record id.
    pub key: String,
    pub title: String,
    pub description: String,
    pub image: String,
    /// Every tag of the record, not only the one being filtered on.
    pub tags: Vec<String>,
    pub link: String,
    pub animation_delay_ms: u32,
}

impl ProjectCard {
    /// Inline style for the staggered entrance animation.
    #[must_use]
    pub fn animation_style(&self) -> String {
        format!(
            "animation: {CARD_ANIMATION}; animation-delay: {}ms",
            self.animation_delay_ms
        )
    }
}

/// Turn a subset into cards, keeping its order.
#[must_use]
pub fn render(subset: &[&ProjectRecord]) -> Vec<ProjectCard> {
    subset
        .iter()
        .zip((0u32..).map(|i| i.saturating_mul(CARD_STAGGER_MS)))
        .map(|(record, delay)| ProjectCard {
            key: record.id().to_string(),
            title: record.title().to_owned(),
            description: record.description().to_owned(),
            image: record.image().to_owned(),
            tags: record.tags().to_vec(),
            link: record.link().to_owned(),
            animation_delay_ms: delay,
        })
        .collect()
}
