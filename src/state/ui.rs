//! Page chrome state: theme and the mobile navigation menu.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// UI state shared by the navigation bar and the theme toggle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    /// Whether the mobile nav-links menu is expanded.
    pub nav_open: bool,
}

impl UiState {
    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }

    /// Following a nav link always collapses the menu.
    pub fn close_nav(&mut self) {
        self.nav_open = false;
    }
}
