//! # Panel Controller
//!
//! Open/closed state of the sidebar. Background scroll is locked exactly
//! while the panel is open.

use serde::{Deserialize, Serialize};

/// Key that always closes the panel
pub const CLOSE_KEY: &str = "Escape";

/// Visual state of the cart sidebar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

impl PanelState {
    pub fn is_open(&self) -> bool {
        matches!(self, PanelState::Open)
    }

    /// Whether the page behind the panel must not scroll
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    /// CSS `overflow` value for the page body
    pub fn body_overflow(&self) -> &'static str {
        if self.scroll_locked() {
            "hidden"
        } else {
            "auto"
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Panel {
    state: PanelState,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn open(&mut self) -> PanelState {
        self.state = PanelState::Open;
        self.state
    }

    pub fn close(&mut self) -> PanelState {
        self.state = PanelState::Closed;
        self.state
    }

    /// Feed a key press; returns true if it closed the panel
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == CLOSE_KEY {
            self.close();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let panel = Panel::new();
        assert_eq!(panel.state(), PanelState::Closed);
        assert!(!panel.state().scroll_locked());
        assert_eq!(panel.state().body_overflow(), "auto");
    }

    #[test]
    fn test_open_close() {
        let mut panel = Panel::new();
        assert_eq!(panel.open(), PanelState::Open);
        assert!(panel.state().scroll_locked());
        assert_eq!(panel.state().body_overflow(), "hidden");

        assert_eq!(panel.close(), PanelState::Closed);
        assert_eq!(panel.close(), PanelState::Closed);
    }

    #[test]
    fn test_escape_closes_from_any_state() {
        let mut panel = Panel::new();
        assert!(panel.handle_key("Escape"));
        assert_eq!(panel.state(), PanelState::Closed);

        panel.open();
        assert!(!panel.handle_key("Enter"));
        assert!(panel.state().is_open());
        assert!(panel.handle_key("Escape"));
        assert!(!panel.state().is_open());
    }
}
