//! Shared constants for the catalog crate.

// ── Filtering ───────────────────────────────────────────────────

/// Label of the synthetic "no filter" tag. Always the first control.
pub const SENTINEL_TAG: &str = "All";

// ── Card animation ──────────────────────────────────────────────

/// Entrance animation applied to every project card.
pub const CARD_ANIMATION: &str = "fadeInUp 0.6s ease forwards";

/// Delay added per card position so the grid fades in one card at a time.
pub const CARD_STAGGER_MS: u32 = 100;
