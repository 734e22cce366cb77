//! # Display Surface
//!
//! The page side of the widget. The controller pushes fully rendered state
//! through this trait; implementations decide how to show it and treat a
//! missing page element as a no-op.
//!
//! Every method has a logging default, so a surface only overrides what it
//! can actually display.

use crate::config::IconPulse;
use crate::panel::PanelState;
use crate::render::CartView;
use tracing::{debug, info, warn};

#[allow(unused_variables)]
pub trait CartSurface {
    /// Replace badge count, item list and total
    fn show_view(&mut self, view: &CartView) {
        debug!(
            "Cart view: {} items, total={}",
            view.item_count, view.total
        );
    }

    /// Reflect the panel state (sidebar, overlay, page scroll)
    fn show_panel(&mut self, state: PanelState) {
        debug!("Panel: {:?}", state);
    }

    /// Present a message to the shopper and return once it is dismissed
    fn notify(&mut self, message: &str) {
        info!("Notice: {}", message);
    }

    /// Play the "item added" acknowledgment on the cart icon
    fn pulse_icon(&mut self, pulse: &IconPulse) {
        debug!("Icon pulse: {}", pulse.transform());
    }

    /// Developer-facing diagnostic (bad input from the page)
    fn diagnostic(&mut self, message: &str) {
        warn!("{}", message);
    }
}

/// In-memory surface that keeps everything it was asked to display
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// Last rendered view
    pub view: Option<CartView>,
    /// Number of `show_view` calls
    pub renders: usize,
    /// Last panel state shown
    pub panel: PanelState,
    pub notices: Vec<String>,
    pub pulses: usize,
    pub diagnostics: Vec<String>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_notice(&self) -> Option<&str> {
        self.notices.last().map(String::as_str)
    }
}

impl CartSurface for RecordingSurface {
    fn show_view(&mut self, view: &CartView) {
        self.view = Some(view.clone());
        self.renders += 1;
    }

    fn show_panel(&mut self, state: PanelState) {
        self.panel = state;
    }

    fn notify(&mut self, message: &str) {
        info!("Notice: {}", message);
        self.notices.push(message.to_string());
    }

    fn pulse_icon(&mut self, _pulse: &IconPulse) {
        self.pulses += 1;
    }

    fn diagnostic(&mut self, message: &str) {
        warn!("{}", message);
        self.diagnostics.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_surface() {
        let mut surface = RecordingSurface::new();
        surface.show_panel(PanelState::Open);
        surface.notify("hello");
        surface.pulse_icon(&IconPulse::default());
        surface.diagnostic("bad price");

        assert_eq!(surface.panel, PanelState::Open);
        assert_eq!(surface.last_notice(), Some("hello"));
        assert_eq!(surface.pulses, 1);
        assert_eq!(surface.diagnostics, vec!["bad price".to_string()]);
        assert!(surface.view.is_none());
    }

    #[test]
    fn test_default_methods_only_log() {
        struct Headless;
        impl CartSurface for Headless {}

        let mut surface = Headless;
        surface.show_panel(PanelState::Closed);
        surface.notify("ignored");
        surface.diagnostic("ignored");
    }
}
