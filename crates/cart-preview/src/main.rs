//! # Cart Preview
//!
//! Replays a session script against the cart widget without a browser and
//! prints the resulting sidebar.
//!
//! ## Usage
//!
//! ```bash
//! # Optional: widget config (anchors, locale, messages)
//! export CART_CONFIG=config/widget.toml
//! # Optional: html (default) or json
//! export CART_PREVIEW_FORMAT=json
//!
//! cart-preview config/session.toml > preview.html
//! ```

mod config;
mod page;
mod session;

use cart_core::{CartWidget, RecordingSurface};
use config::{OutputFormat, PreviewConfig};
use session::Session;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays a clean document
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let script_path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: cart-preview <session.toml>"))?;

    let preview = PreviewConfig::from_env();
    let widget_config = config::load_widget_config(preview.widget_config.as_ref())?;

    let script = std::fs::read_to_string(&script_path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", script_path, e))?;
    let session = Session::from_toml(&script)?;
    info!("Replaying {} events from {}", session.events.len(), script_path);

    let mut widget = CartWidget::with_config(RecordingSurface::new(), widget_config);
    session::replay(&mut widget, &session);

    info!(
        "Final cart: {} lines, {} items, total={}",
        widget.cart().len(),
        widget.cart().item_count(),
        widget.view().total
    );

    let output = match preview.format {
        OutputFormat::Html => page::render_page(&widget)?,
        OutputFormat::Json => page::render_json(&widget)?,
    };
    println!("{}", output);

    Ok(())
}
