//! # Checkout
//!
//! Mock checkout: captures the cart as a receipt and renders the
//! confirmation text. No payment provider is contacted.

use crate::cart::Cart;
use crate::config::Messages;
use crate::error::{CartError, CartResult};
use crate::money::{Money, MoneyFormat};
use serde::Serialize;

/// One receipt line (`2x Mug`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptLine {
    pub quantity: u32,
    pub name: String,
}

/// Cart contents captured at checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub total: Money,
}

impl Receipt {
    /// Capture a non-empty cart
    pub fn from_cart(cart: &Cart) -> CartResult<Self> {
        if cart.is_empty() {
            return Err(CartError::EmptyCart);
        }
        Ok(Self {
            lines: cart
                .items()
                .iter()
                .map(|item| ReceiptLine {
                    quantity: item.quantity,
                    name: item.name.clone(),
                })
                .collect(),
            total: cart.total(),
        })
    }

    /// Total number of units
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Confirmation text shown to the shopper
    pub fn summary(&self, money: &MoneyFormat, messages: &Messages) -> String {
        let items = self
            .lines
            .iter()
            .map(|line| format!("{}x {}", line.quantity, line.name))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "{}\n\n{}\n{}\n\n{} {}\n\n{}",
            messages.checkout_header,
            messages.items_label,
            items,
            messages.total_label,
            money.format(self.total),
            messages.thanks,
        )
    }
}

/// Result of a checkout attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Cart was captured and cleared
    Completed(Receipt),
    /// Nothing to check out; the shopper was told so
    EmptyCart,
}

impl CheckoutOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, CheckoutOutcome::Completed(_))
    }
}
