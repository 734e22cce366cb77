//! # Widget Configuration
//!
//! Anchor ids, locale, shopper-facing text and animation settings.
//! Every field has a default, so an empty TOML document is a valid config.

use crate::error::{CartError, CartResult};
use crate::money::MoneyFormat;
use serde::{Deserialize, Serialize};

/// Ids / selectors of the page elements the widget writes to.
/// Any of them may be missing from the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Anchors {
    /// Item-count badge
    pub count_id: String,
    /// Item-list container
    pub items_id: String,
    /// Total display
    pub total_id: String,
    /// Sidebar panel
    pub sidebar_id: String,
    /// Dimming overlay
    pub overlay_id: String,
    /// Clickable cart icon (CSS selector)
    pub icon_selector: String,
    /// Class added to the sidebar while open
    pub open_class: String,
    /// Class added to the overlay while open
    pub active_class: String,
}

impl Default for Anchors {
    fn default() -> Self {
        Self {
            count_id: "cartCount".to_string(),
            items_id: "cartItems".to_string(),
            total_id: "cartTotal".to_string(),
            sidebar_id: "cartSidebar".to_string(),
            overlay_id: "cartOverlay".to_string(),
            icon_selector: ".cart-icon".to_string(),
            open_class: "open".to_string(),
            active_class: "active".to_string(),
        }
    }
}

/// Shopper-facing text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub empty_headline: String,
    pub empty_hint: String,
    /// Notice shown when checking out an empty cart
    pub empty_checkout: String,
    pub checkout_header: String,
    pub items_label: String,
    pub total_label: String,
    pub thanks: String,
    pub remove_label: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            empty_headline: "Your bag is empty".to_string(),
            empty_hint: "Add products to continue".to_string(),
            empty_checkout: "Your cart is empty!".to_string(),
            checkout_header: "Completing your purchase!".to_string(),
            items_label: "Items:".to_string(),
            total_label: "Total:".to_string(),
            thanks: "Thank you for shopping with us!".to_string(),
            remove_label: "Remove".to_string(),
        }
    }
}

/// Cart icon "item added" pulse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconPulse {
    /// Scale applied to the icon when an item is added
    pub scale: f64,
    /// Delay before the icon scale is reset
    pub duration_ms: u32,
}

impl Default for IconPulse {
    fn default() -> Self {
        Self {
            scale: 1.2,
            duration_ms: 300,
        }
    }
}

impl IconPulse {
    /// CSS transform applied at the start of the pulse
    pub fn transform(&self) -> String {
        format!("scale({})", self.scale)
    }

    /// CSS transform restored after `duration_ms`
    pub fn reset_transform(&self) -> &'static str {
        "scale(1)"
    }
}

/// Complete widget configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub anchors: Anchors,
    pub money: MoneyFormat,
    pub messages: Messages,
    pub pulse: IconPulse,
    /// Open the sidebar after a successful add
    pub open_on_add: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            anchors: Anchors::default(),
            money: MoneyFormat::default(),
            messages: Messages::default(),
            pulse: IconPulse::default(),
            open_on_add: true,
        }
    }
}

impl WidgetConfig {
    /// Load configuration from a TOML string and validate it
    pub fn from_toml(toml_str: &str) -> CartResult<Self> {
        let config: WidgetConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CartResult<()> {
        self.money.validate()?;
        if !self.pulse.scale.is_finite() || self.pulse.scale <= 0.0 {
            return Err(CartError::Config(format!(
                "pulse.scale must be a positive number, got {}",
                self.pulse.scale
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = WidgetConfig::from_toml("").unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.anchors.items_id, "cartItems");
        assert!(config.open_on_add);
    }

    #[test]
    fn test_partial_override() {
        let config = WidgetConfig::from_toml(
            r##"
            open_on_add = false

            [anchors]
            icon_selector = "#bag"

            [money]
            symbol = "€"

            [messages]
            empty_checkout = "Seu carrinho está vazio!"
            "##,
        )
        .unwrap();

        assert!(!config.open_on_add);
        assert_eq!(config.anchors.icon_selector, "#bag");
        assert_eq!(config.anchors.count_id, "cartCount");
        assert_eq!(config.money.symbol, "€");
        assert_eq!(config.money.decimal, ',');
        assert_eq!(config.messages.empty_checkout, "Seu carrinho está vazio!");
        assert_eq!(config.messages.remove_label, "Remove");
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            WidgetConfig::from_toml("[money]\nthousands = \",\""),
            Err(CartError::Config(_))
        ));
        assert!(matches!(
            WidgetConfig::from_toml("[pulse]\nscale = -1.0"),
            Err(CartError::Config(_))
        ));
        assert!(matches!(
            WidgetConfig::from_toml("open_on_add = \"yes\""),
            Err(CartError::Parse(_))
        ));
    }

    #[test]
    fn test_pulse_transform() {
        let pulse = IconPulse::default();
        assert_eq!(pulse.transform(), "scale(1.2)");
        assert_eq!(pulse.reset_transform(), "scale(1)");
    }
}
