//! # Preview Configuration
//!
//! Environment-driven settings for the preview binary and loading of the
//! widget configuration file.

use cart_core::WidgetConfig;
use std::path::PathBuf;

/// Output format of the preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Standalone HTML page with the sidebar
    Html,
    /// JSON snapshot of cart, view and notices
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "html" => Some(OutputFormat::Html),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Preview settings
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// Explicit widget config path (`CART_CONFIG`)
    pub widget_config: Option<PathBuf>,
    /// Output format (`CART_PREVIEW_FORMAT`, default html)
    pub format: OutputFormat,
}

impl PreviewConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            widget_config: std::env::var("CART_CONFIG").ok().map(PathBuf::from),
            format: std::env::var("CART_PREVIEW_FORMAT")
                .ok()
                .and_then(|f| OutputFormat::parse(&f))
                .unwrap_or(OutputFormat::Html),
        }
    }
}

/// Load the widget configuration.
///
/// An explicit path must exist; otherwise the conventional locations are
/// tried and defaults are used when none is found.
pub fn load_widget_config(explicit: Option<&PathBuf>) -> anyhow::Result<WidgetConfig> {
    if let Some(path) = explicit {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config = WidgetConfig::from_toml(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.display(), e))?;
        tracing::info!("Loaded widget config from {}", path.display());
        return Ok(config);
    }

    let config_paths = [
        "config/widget.toml",
        "../config/widget.toml",
        "../../config/widget.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            let config = WidgetConfig::from_toml(&content)
                .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path, e))?;
            tracing::info!("Loaded widget config from {}", path);
            return Ok(config);
        }
    }

    tracing::warn!("No widget config found, using defaults");
    Ok(WidgetConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format() {
        assert_eq!(OutputFormat::parse("html"), Some(OutputFormat::Html));
        assert_eq!(OutputFormat::parse(" JSON "), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("pdf"), None);
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let path = PathBuf::from("does/not/exist/widget.toml");
        assert!(load_widget_config(Some(&path)).is_err());
    }
}
