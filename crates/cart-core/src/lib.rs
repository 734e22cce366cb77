//! # cart-core
//!
//! Core of the sidebar cart widget.
//!
//! This crate provides:
//! - `Cart` and `LineItem`, the insertion-ordered cart store
//! - `Money` and `MoneyFormat` for locale price parsing and display
//! - `render`, which turns a cart into badge count, item markup and total
//! - `Panel` for the open/closed sidebar state
//! - `Receipt` for the mock checkout
//! - `CartWidget`, which ties the above to a `CartSurface`
//! - `CartError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use cart_core::{CartWidget, CheckoutOutcome, PanelState, RecordingSurface};
//!
//! let mut widget = CartWidget::new(RecordingSurface::new());
//! widget.add_to_cart("Shirt", "10,50");
//! widget.add_to_cart("Mug", 25);
//!
//! assert!(matches!(widget.checkout(), CheckoutOutcome::Completed(_)));
//! assert!(widget.cart().is_empty());
//! assert_eq!(widget.panel_state(), PanelState::Closed);
//! ```

pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod money;
pub mod panel;
pub mod render;
pub mod surface;
pub mod widget;

// Re-exports for convenience
pub use cart::{AddOutcome, Cart, LineItem, QuantityChange};
pub use checkout::{CheckoutOutcome, Receipt, ReceiptLine};
pub use config::{Anchors, IconPulse, Messages, WidgetConfig};
pub use error::{CartError, CartResult};
pub use money::{Money, MoneyFormat, PriceInput};
pub use panel::{Panel, PanelState, CLOSE_KEY};
pub use render::{render, render_items, CartView, RowAction};
pub use surface::{CartSurface, RecordingSurface};
pub use widget::CartWidget;
