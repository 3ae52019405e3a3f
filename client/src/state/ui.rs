//! Local UI chrome state (theme, mobile menu).
//!
//! DESIGN
//! ======
//! Kept apart from the session so presentation toggles never touch auth
//! state. `App` provides it as `RwSignal<UiState>`.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub menu_open: bool,
}

impl UiState {
    /// Initial state with the resolved theme preference.
    #[must_use]
    pub fn with_dark_mode(dark_mode: bool) -> Self {
        Self { dark_mode, menu_open: false }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the mobile menu, e.g. after following a link.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
