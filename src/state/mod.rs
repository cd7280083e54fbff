//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui`, `projects`, `contact`) so each component
//! depends on a small focused model held in an `RwSignal`.

pub mod contact;
pub mod projects;
pub mod ui;
