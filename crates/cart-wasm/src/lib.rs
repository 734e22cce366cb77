//! # cart-wasm
//!
//! WebAssembly bindings for the sidebar cart widget.
//!
//! This crate provides:
//! - `SidebarCart`, a JS class owning one widget instance drawn on the page
//! - Escape-to-close and delegated handling of the rendered row controls
//! - Price parsing / formatting helpers in the widget's locale
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { SidebarCart } from 'cart-wasm';
//!
//! await init();
//!
//! const cart = new SidebarCart();            // or new SidebarCart(tomlString | configObject)
//! document.querySelectorAll('[data-product]').forEach((btn) =>
//!   btn.addEventListener('click', () => cart.addToCart(btn.dataset.name, btn.dataset.price)),
//! );
//! document.querySelector('#checkoutBtn').addEventListener('click', () => cart.checkout());
//! ```
//!
//! ## Building
//!
//! ```bash
//! wasm-pack build --target web crates/cart-wasm
//! ```

pub mod dom;

use cart_core::{CartWidget, MoneyFormat, PriceInput, RowAction, WidgetConfig};
use dom::DomSurface;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, KeyboardEvent};

type SharedWidget = Rc<RefCell<CartWidget<DomSurface>>>;

/// Initialize the WASM module (called automatically)
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Event listener kept alive for the lifetime of the widget
struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target,
            event,
            closure,
        })
    }

    fn detach(&self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Cart widget bound to the current page
#[wasm_bindgen]
pub struct SidebarCart {
    widget: SharedWidget,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl SidebarCart {
    /// Create the widget, draw the empty cart and hook page events.
    ///
    /// `config` may be omitted, a TOML string, or a plain object with the
    /// same shape.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<SidebarCart, JsValue> {
        let config = config_from_js(config)?;
        let surface = DomSurface::from_window(config.anchors.clone())?;
        let widget: SharedWidget = Rc::new(RefCell::new(CartWidget::with_config(surface, config)));

        let mut cart = SidebarCart {
            widget,
            listeners: Vec::new(),
        };
        cart.bind_page_events()?;
        Ok(cart)
    }

    #[wasm_bindgen(js_name = addToCart)]
    pub fn add_to_cart(&self, name: String, price: JsValue) -> bool {
        let price = price_from_js(&price);
        self.widget.borrow_mut().add_to_cart(name, price).is_some()
    }

    #[wasm_bindgen(js_name = removeFromCart)]
    pub fn remove_from_cart(&self, index: f64) {
        if let Some(index) = index_from_js(index) {
            self.widget.borrow_mut().remove_from_cart(index);
        }
    }

    #[wasm_bindgen(js_name = updateQuantity)]
    pub fn update_quantity(&self, index: f64, new_quantity: f64) {
        if let Some(index) = index_from_js(index) {
            self.widget.borrow_mut().update_quantity(index, new_quantity);
        }
    }

    /// Returns true when an order was confirmed
    #[wasm_bindgen]
    pub fn checkout(&self) -> bool {
        self.widget.borrow_mut().checkout().is_completed()
    }

    #[wasm_bindgen(js_name = openCart)]
    pub fn open_cart(&self) {
        self.widget.borrow_mut().open_cart();
    }

    #[wasm_bindgen(js_name = closeCart)]
    pub fn close_cart(&self) {
        self.widget.borrow_mut().close_cart();
    }

    #[wasm_bindgen(getter, js_name = itemCount)]
    pub fn item_count(&self) -> f64 {
        self.widget.borrow().cart().item_count() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn total(&self) -> String {
        self.widget.borrow().view().total
    }

    #[wasm_bindgen(getter, js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.widget.borrow().panel_state().is_open()
    }

    /// Current line items as plain objects
    #[wasm_bindgen]
    pub fn items(&self) -> Result<JsValue, JsValue> {
        let widget = self.widget.borrow();
        serde_wasm_bindgen::to_value(widget.cart().items())
            .map_err(|e| JsValue::from_str(&format!("Failed to export cart: {}", e)))
    }

    /// Remove page listeners; the widget stops reacting to page events
    #[wasm_bindgen]
    pub fn destroy(&mut self) {
        for listener in self.listeners.drain(..) {
            listener.detach();
        }
    }
}

impl SidebarCart {
    fn bind_page_events(&mut self) -> Result<(), JsValue> {
        let (document, anchors) = {
            let widget = self.widget.borrow();
            let surface = widget.surface();
            (surface.document().clone(), surface.anchors().clone())
        };

        let widget = Rc::clone(&self.widget);
        self.listeners.push(Listener::attach(
            document.clone().into(),
            "keydown",
            move |event: Event| {
                let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if let Ok(mut w) = widget.try_borrow_mut() {
                    w.handle_key(&key_event.key());
                }
            },
        )?);

        if let Some(items) = document.get_element_by_id(&anchors.items_id) {
            let widget = Rc::clone(&self.widget);
            self.listeners.push(Listener::attach(
                items.into(),
                "click",
                move |event: Event| {
                    let Some(action) = row_action_for(&event) else {
                        return;
                    };
                    event.prevent_default();
                    if let Ok(mut w) = widget.try_borrow_mut() {
                        w.dispatch(action);
                    }
                },
            )?);
        }

        if let Ok(Some(icon)) = document.query_selector(&anchors.icon_selector) {
            let widget = Rc::clone(&self.widget);
            self.listeners.push(Listener::attach(icon.into(), "click", move |_| {
                if let Ok(mut w) = widget.try_borrow_mut() {
                    w.open_cart();
                }
            })?);
        }

        if let Some(overlay) = document.get_element_by_id(&anchors.overlay_id) {
            let widget = Rc::clone(&self.widget);
            self.listeners.push(Listener::attach(overlay.into(), "click", move |_| {
                if let Ok(mut w) = widget.try_borrow_mut() {
                    w.close_cart();
                }
            })?);
        }

        Ok(())
    }
}

impl Drop for SidebarCart {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Resolve the row control a click landed on
fn row_action_for(event: &Event) -> Option<RowAction> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let control = target
        .closest(&format!("[{}]", cart_core::render::ACTION_ATTR))
        .ok()
        .flatten()?;

    RowAction::from_attributes(
        control.get_attribute(cart_core::render::ACTION_ATTR).as_deref(),
        control.get_attribute(cart_core::render::INDEX_ATTR).as_deref(),
        control.get_attribute(cart_core::render::QUANTITY_ATTR).as_deref(),
    )
}

fn config_from_js(value: JsValue) -> Result<WidgetConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(WidgetConfig::default());
    }

    let config = match value.as_string() {
        Some(toml) => WidgetConfig::from_toml(&toml)
            .map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => {
            let config: WidgetConfig = serde_wasm_bindgen::from_value(value)
                .map_err(|e| JsValue::from_str(&format!("Invalid cart config: {}", e)))?;
            config
                .validate()
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            config
        }
    };
    Ok(config)
}

/// Map a JS price argument (string or number) to the core input type
fn price_from_js(value: &JsValue) -> PriceInput {
    if let Some(text) = value.as_string() {
        PriceInput::Text(text)
    } else if let Some(n) = value.as_f64() {
        PriceInput::Number(n)
    } else {
        PriceInput::Text(describe_js(value))
    }
}

/// JSON text of a JS value, or its `typeof` name when it has none
fn describe_js(value: &JsValue) -> String {
    js_sys::JSON::stringify(value)
        .ok()
        .and_then(|json| json.as_string())
        .or_else(|| value.js_typeof().as_string())
        .unwrap_or_default()
}

/// Convert a JS position to a cart index.
///
/// Negative, non-finite and out-of-`i64` numbers give `None`; the rest are
/// truncated toward zero like `Array.prototype.splice` does.
fn index_from_js(index: f64) -> Option<i64> {
    if !index.is_finite() || index < 0.0 || index >= i64::MAX as f64 {
        return None;
    }
    Some(index.trunc() as i64)
}

/// Format an amount in minor units using the default locale (`R$ 1.234,56`)
#[wasm_bindgen(js_name = formatPrice)]
pub fn format_price(minor_units: i64) -> String {
    MoneyFormat::default().format(cart_core::Money::from_minor(minor_units))
}

/// Parse locale price text into minor units; `undefined` when invalid
#[wasm_bindgen(js_name = parsePrice)]
pub fn parse_price(text: &str) -> Option<i64> {
    MoneyFormat::default()
        .parse(text)
        .ok()
        .map(|m| m.minor_units())
}

/// Get library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
