//! Browser helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, media queries,
//! observers, scrolling) from component logic. Each helper no-ops outside
//! the `csr` build.

pub mod observe;
pub mod scroll;
pub mod theme;
