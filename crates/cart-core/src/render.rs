//! # Renderer
//!
//! Turns the cart into the three things the sidebar shows: badge count,
//! item-list markup and formatted total. Always a full recomputation.
//!
//! Row controls carry `data-cart-action` attributes instead of inline
//! handlers; [`RowAction::from_attributes`] maps a clicked control back to
//! a cart operation.

use crate::cart::{Cart, LineItem};
use crate::config::{Messages, WidgetConfig};
use crate::error::CartResult;
use askama::Template;
use serde::Serialize;
use tracing::error;

/// Attribute naming the operation of a row control
pub const ACTION_ATTR: &str = "data-cart-action";
/// Attribute holding the row position
pub const INDEX_ATTR: &str = "data-index";
/// Attribute holding the quantity a stepper button requests
pub const QUANTITY_ATTR: &str = "data-quantity";

/// Snapshot of what the sidebar displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    /// Sum of quantities
    pub item_count: u64,
    /// Item-list markup (placeholder when empty)
    pub items_html: String,
    /// Formatted grand total
    pub total: String,
    pub is_empty: bool,
}

/// One line item as the template sees it
struct RowView {
    index: usize,
    name: String,
    price: String,
    quantity: u32,
    less: i64,
    more: i64,
}

impl RowView {
    fn new(index: usize, item: &LineItem, config: &WidgetConfig) -> Self {
        Self {
            index,
            name: item.name.clone(),
            price: config.money.format(item.unit_price),
            quantity: item.quantity,
            less: i64::from(item.quantity) - 1,
            more: i64::from(item.quantity) + 1,
        }
    }
}

#[derive(Template)]
#[template(path = "cart_items.html")]
struct CartItemsTemplate<'a> {
    rows: Vec<RowView>,
    messages: &'a Messages,
}

/// Render the whole sidebar from cart state
pub fn render(cart: &Cart, config: &WidgetConfig) -> CartView {
    let items_html = render_items(cart, config).unwrap_or_else(|e| {
        error!("Failed to render cart items: {}", e);
        String::new()
    });

    CartView {
        item_count: cart.item_count(),
        items_html,
        total: config.money.format(cart.total()),
        is_empty: cart.is_empty(),
    }
}

/// Item-list markup: one row per line item, or the empty placeholder
pub fn render_items(cart: &Cart, config: &WidgetConfig) -> CartResult<String> {
    let template = CartItemsTemplate {
        rows: cart
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| RowView::new(index, item, config))
            .collect(),
        messages: &config.messages,
    };
    Ok(template.render()?)
}

/// Operation requested by a rendered row control
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowAction {
    SetQuantity { index: i64, quantity: f64 },
    Remove { index: i64 },
}

impl RowAction {
    /// Decode the `data-*` attributes of a clicked control.
    /// Returns `None` for elements that are not row controls.
    pub fn from_attributes(
        action: Option<&str>,
        index: Option<&str>,
        quantity: Option<&str>,
    ) -> Option<Self> {
        let index: i64 = index?.trim().parse().ok()?;
        match action? {
            "set-quantity" => Some(RowAction::SetQuantity {
                index,
                quantity: quantity?.trim().parse().ok()?,
            }),
            "remove" => Some(RowAction::Remove { index }),
            _ => None,
        }
    }
}
