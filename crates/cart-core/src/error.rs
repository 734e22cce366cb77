//! # Cart Error Types
//!
//! Typed errors for the cart store and configuration loading.
//! The widget controller swallows these at its boundary; page-facing
//! operations never return them.

use thiserror::Error;

/// Core error type for cart operations
#[derive(Debug, Error)]
pub enum CartError {
    /// Price could not be parsed, or is negative / non-finite
    #[error("Invalid price: {input:?}")]
    InvalidPrice { input: String },

    /// Position does not address an existing line item
    #[error("Index {index} out of range for cart of {len} items")]
    IndexOutOfRange { index: i64, len: usize },

    /// Checkout attempted on an empty cart
    #[error("Cart is empty")]
    EmptyCart,

    /// Configuration values that parse but make no sense
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML configuration could not be parsed
    #[error("Configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Item-list template failed to render
    #[error("Template error: {0}")]
    Render(#[from] askama::Error),
}

impl CartError {
    /// Returns true if this error is reported to the shopper as a notice
    /// rather than only logged
    pub fn is_user_visible(&self) -> bool {
        matches!(self, CartError::EmptyCart)
    }
}

/// Result type alias for cart operations
pub type CartResult<T> = Result<T, CartError>;
