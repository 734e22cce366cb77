//! # Cart Widget
//!
//! One widget instance owns the cart, the panel and the surface it draws
//! on. The page holds the instance and routes its events to the methods
//! below; there is no global state.
//!
//! ```rust
//! use cart_core::{CartWidget, RecordingSurface};
//!
//! let mut widget = CartWidget::new(RecordingSurface::new());
//! widget.add_to_cart("Mug", 25);
//! widget.add_to_cart("Mug", 25);
//!
//! assert_eq!(widget.cart().items()[0].quantity, 2);
//! assert_eq!(widget.view().total, "R$\u{a0}50,00");
//! ```
//!
//! None of the page operations fail: bad prices are reported through
//! [`CartSurface::diagnostic`], bad positions are ignored, and an empty
//! checkout becomes a shopper notice.

use crate::cart::{AddOutcome, Cart, LineItem, QuantityChange};
use crate::checkout::{CheckoutOutcome, Receipt};
use crate::config::WidgetConfig;
use crate::money::PriceInput;
use crate::panel::{Panel, PanelState};
use crate::render::{render, CartView, RowAction};
use crate::surface::CartSurface;
use tracing::{debug, info, warn};

pub struct CartWidget<S: CartSurface> {
    cart: Cart,
    panel: Panel,
    config: WidgetConfig,
    surface: S,
}

impl<S: CartSurface> CartWidget<S> {
    /// Create a widget with the default configuration
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, WidgetConfig::default())
    }

    /// Create a widget and draw the initial (empty) cart
    pub fn with_config(surface: S, config: WidgetConfig) -> Self {
        let mut widget = Self {
            cart: Cart::new(),
            panel: Panel::new(),
            config,
            surface,
        };
        widget.refresh();
        widget
    }

    /// Add one unit of `name`, then refresh and acknowledge.
    ///
    /// Returns `None` when the price is rejected; the cart is untouched.
    pub fn add_to_cart(
        &mut self,
        name: impl Into<String>,
        price: impl Into<PriceInput>,
    ) -> Option<AddOutcome> {
        let name = name.into();
        let price = price.into();

        let unit_price = match self.config.money.parse_input(&price) {
            Ok(p) => p,
            Err(e) => {
                warn!(item = %name, "Rejected add: {}", e);
                self.surface
                    .diagnostic(&format!("Invalid price {:?} for item {:?}", price.to_string(), name));
                return None;
            }
        };

        let outcome = self.cart.add(name, unit_price);
        debug!("Added to cart: {:?}", outcome);
        self.refresh();
        self.acknowledge_add();
        Some(outcome)
    }

    /// Remove the entry at `index`; out-of-range positions are ignored
    pub fn remove_from_cart(&mut self, index: i64) -> Option<LineItem> {
        match self.cart.remove(index) {
            Ok(item) => {
                self.refresh();
                Some(item)
            }
            Err(e) => {
                debug!("Ignored remove: {}", e);
                None
            }
        }
    }

    /// Set the quantity at `index`; a non-positive or non-finite request
    /// removes the entry, a positive fraction keeps at least one unit,
    /// out-of-range positions are ignored
    pub fn update_quantity(&mut self, index: i64, requested: f64) -> Option<QuantityChange> {
        match self.cart.set_quantity(index, requested) {
            Ok(change) => {
                self.refresh();
                Some(change)
            }
            Err(e) => {
                debug!("Ignored quantity update: {}", e);
                None
            }
        }
    }

    /// Mock checkout: confirm, empty the cart, close the panel
    pub fn checkout(&mut self) -> CheckoutOutcome {
        let receipt = match Receipt::from_cart(&self.cart) {
            Ok(r) => r,
            Err(e) => {
                debug!("Checkout refused: {}", e);
                if e.is_user_visible() {
                    let notice = self.config.messages.empty_checkout.clone();
                    self.surface.notify(&notice);
                }
                return CheckoutOutcome::EmptyCart;
            }
        };

        info!(
            "Checkout: {} lines, {} items, total={}",
            receipt.lines.len(),
            receipt.item_count(),
            self.config.money.format(receipt.total)
        );

        let summary = receipt.summary(&self.config.money, &self.config.messages);
        self.surface.notify(&summary);

        self.cart.clear();
        self.refresh();
        self.close_cart();
        CheckoutOutcome::Completed(receipt)
    }

    pub fn open_cart(&mut self) -> PanelState {
        let state = self.panel.open();
        self.surface.show_panel(state);
        state
    }

    pub fn close_cart(&mut self) -> PanelState {
        let state = self.panel.close();
        self.surface.show_panel(state);
        state
    }

    /// Key press from the page; Escape closes the panel
    pub fn handle_key(&mut self, key: &str) -> bool {
        if self.panel.handle_key(key) {
            self.surface.show_panel(self.panel.state());
            true
        } else {
            false
        }
    }

    /// Run the operation behind a clicked row control
    pub fn dispatch(&mut self, action: RowAction) {
        match action {
            RowAction::SetQuantity { index, quantity } => {
                self.update_quantity(index, quantity);
            }
            RowAction::Remove { index } => {
                self.remove_from_cart(index);
            }
        }
    }

    /// Re-render everything and push it to the surface
    pub fn refresh(&mut self) {
        let view = self.view();
        self.surface.show_view(&view);
    }

    /// Render the current state without touching the surface
    pub fn view(&self) -> CartView {
        render(&self.cart, &self.config)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn panel_state(&self) -> PanelState {
        self.panel.state()
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn acknowledge_add(&mut self) {
        if self.config.open_on_add {
            self.open_cart();
        }
        let pulse = self.config.pulse.clone();
        self.surface.pulse_icon(&pulse);
    }
}
