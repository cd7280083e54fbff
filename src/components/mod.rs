//! Leptos components for the portfolio page.

pub mod contact_form;
pub mod filter_bar;
pub mod nav_bar;
pub mod project_grid;
pub mod projects_section;
pub mod theme_toggle;
