//! # Page Output
//!
//! Wraps the recorded sidebar state in a minimal page using the configured
//! anchor ids, or exports it as JSON.

use askama::Template;
use cart_core::{Anchors, CartView, CartWidget, RecordingSurface};
use serde::Serialize;

#[derive(Template)]
#[template(path = "preview.html")]
struct PreviewPage<'a> {
    anchors: &'a Anchors,
    view: CartView,
    overflow: &'static str,
    sidebar_class: String,
    overlay_class: String,
    total_label: &'a str,
}

/// Standalone HTML page showing the widget as the surface last saw it
pub fn render_page(widget: &CartWidget<RecordingSurface>) -> anyhow::Result<String> {
    let anchors = &widget.config().anchors;
    let surface = widget.surface();
    let open = surface.panel.is_open();

    let page = PreviewPage {
        anchors,
        view: surface.view.clone().unwrap_or_else(|| widget.view()),
        overflow: surface.panel.body_overflow(),
        sidebar_class: state_class("cart-sidebar", &anchors.open_class, open),
        overlay_class: state_class("cart-overlay", &anchors.active_class, open),
        total_label: &widget.config().messages.total_label,
    };
    Ok(page.render()?)
}

fn state_class(base: &str, state: &str, on: bool) -> String {
    if on {
        format!("{} {}", base, state)
    } else {
        base.to_string()
    }
}

#[derive(Serialize)]
struct Snapshot<'a> {
    items: &'a [cart_core::LineItem],
    view: &'a CartView,
    panel: cart_core::PanelState,
    notices: &'a [String],
    diagnostics: &'a [String],
}

/// JSON snapshot of the widget state and everything shown to the shopper
pub fn render_json(widget: &CartWidget<RecordingSurface>) -> anyhow::Result<String> {
    let surface = widget.surface();
    let view = surface.view.clone().unwrap_or_else(|| widget.view());
    let snapshot = Snapshot {
        items: widget.cart().items(),
        view: &view,
        panel: surface.panel,
        notices: &surface.notices,
        diagnostics: &surface.diagnostics,
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}
