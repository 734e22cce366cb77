//! # Session Scripts
//!
//! A session is the list of page events a shopper would produce, written
//! as TOML:
//!
//! ```toml
//! [[events]]
//! action = "add"
//! name = "Mug"
//! price = 25
//!
//! [[events]]
//! action = "set_quantity"
//! index = 0
//! quantity = 3
//!
//! [[events]]
//! action = "checkout"
//! ```

use cart_core::{CartSurface, CartWidget, PriceInput};
use serde::Deserialize;
use tracing::info;

/// One page event
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SessionEvent {
    Add { name: String, price: PriceInput },
    Remove { index: i64 },
    SetQuantity { index: i64, quantity: f64 },
    Open,
    Close,
    Key { key: String },
    Checkout,
}

/// Ordered list of events to replay
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub events: Vec<SessionEvent>,
}

impl Session {
    pub fn from_toml(toml_str: &str) -> anyhow::Result<Self> {
        toml::from_str(toml_str).map_err(|e| anyhow::anyhow!("Invalid session script: {}", e))
    }
}

/// Feed every event to the widget in order
pub fn replay<S: CartSurface>(widget: &mut CartWidget<S>, session: &Session) {
    for (step, event) in session.events.iter().enumerate() {
        info!("Step {}: {:?}", step + 1, event);
        match event {
            SessionEvent::Add { name, price } => {
                widget.add_to_cart(name.clone(), price.clone());
            }
            SessionEvent::Remove { index } => {
                widget.remove_from_cart(*index);
            }
            SessionEvent::SetQuantity { index, quantity } => {
                widget.update_quantity(*index, *quantity);
            }
            SessionEvent::Open => {
                widget.open_cart();
            }
            SessionEvent::Close => {
                widget.close_cart();
            }
            SessionEvent::Key { key } => {
                widget.handle_key(key);
            }
            SessionEvent::Checkout => {
                widget.checkout();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_core::{Money, PanelState, RecordingSurface};

    const SCRIPT: &str = r#"
        [[events]]
        action = "add"
        name = "Mug"
        price = 25

        [[events]]
        action = "add"
        name = "Shirt"
        price = "10,50"

        [[events]]
        action = "set_quantity"
        index = 0
        quantity = 3

        [[events]]
        action = "remove"
        index = 9

        [[events]]
        action = "key"
        key = "Escape"
    "#;

    #[test]
    fn test_parse_session() {
        let session = Session::from_toml(SCRIPT).unwrap();
        assert_eq!(session.events.len(), 5);
        assert_eq!(
            session.events[1],
            SessionEvent::Add {
                name: "Shirt".into(),
                price: PriceInput::Text("10,50".into())
            }
        );
        assert_eq!(
            session.events[2],
            SessionEvent::SetQuantity {
                index: 0,
                quantity: 3.0
            }
        );
    }

    #[test]
    fn test_replay() {
        let session = Session::from_toml(SCRIPT).unwrap();
        let mut widget = CartWidget::new(RecordingSurface::new());
        replay(&mut widget, &session);

        assert_eq!(widget.cart().len(), 2);
        assert_eq!(widget.cart().total(), Money::from_minor(8550));
        assert_eq!(widget.panel_state(), PanelState::Closed);
    }

    #[test]
    fn test_checkout_event() {
        let session = Session::from_toml(
            "[[events]]\naction = \"add\"\nname = \"Mug\"\nprice = 25\n\n[[events]]\naction = \"checkout\"\n",
        )
        .unwrap();
        let mut widget = CartWidget::new(RecordingSurface::new());
        replay(&mut widget, &session);

        assert!(widget.cart().is_empty());
        assert!(widget.surface().last_notice().unwrap().contains("1x Mug"));
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        assert!(Session::from_toml("[[events]]\naction = \"teleport\"\n").is_err());
    }
}
