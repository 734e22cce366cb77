//! # DOM Surface
//!
//! `CartSurface` backed by the live page. Elements are looked up on every
//! call, so anchors inserted or removed after start-up are picked up; a
//! missing anchor turns the corresponding update into a no-op.

use cart_core::{Anchors, CartSurface, CartView, IconPulse, PanelState};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

pub struct DomSurface {
    window: Window,
    document: Document,
    anchors: Anchors,
}

impl DomSurface {
    pub fn new(window: Window, document: Document, anchors: Anchors) -> Self {
        Self {
            window,
            document,
            anchors,
        }
    }

    /// Surface for the global `window.document`
    pub fn from_window(anchors: Anchors) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document available"))?;
        Ok(Self::new(window, document, anchors))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn anchors(&self) -> &Anchors {
        &self.anchors
    }

    pub(crate) fn by_id(&self, id: &str) -> Option<Element> {
        if id.is_empty() {
            return None;
        }
        self.document.get_element_by_id(id)
    }

    pub(crate) fn icon(&self) -> Option<HtmlElement> {
        if self.anchors.icon_selector.is_empty() {
            return None;
        }
        self.document
            .query_selector(&self.anchors.icon_selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn toggle_class(&self, id: &str, class: &str, on: bool) {
        if let Some(el) = self.by_id(id) {
            let list = el.class_list();
            let _ = if on {
                list.add_1(class)
            } else {
                list.remove_1(class)
            };
        }
    }
}

impl CartSurface for DomSurface {
    fn show_view(&mut self, view: &CartView) {
        // the list is only touched when all three anchors exist
        let (Some(count), Some(items), Some(total)) = (
            self.by_id(&self.anchors.count_id),
            self.by_id(&self.anchors.items_id),
            self.by_id(&self.anchors.total_id),
        ) else {
            return;
        };

        count.set_text_content(Some(&view.item_count.to_string()));
        items.set_inner_html(&view.items_html);
        total.set_text_content(Some(&view.total));
    }

    fn show_panel(&mut self, state: PanelState) {
        let open = state.is_open();
        self.toggle_class(&self.anchors.sidebar_id, &self.anchors.open_class, open);
        self.toggle_class(&self.anchors.overlay_id, &self.anchors.active_class, open);

        if let Some(body) = self.document.body() {
            let _ = body.style().set_property("overflow", state.body_overflow());
        }
    }

    fn notify(&mut self, message: &str) {
        if self.window.alert_with_message(message).is_err() {
            web_sys::console::log_1(&JsValue::from_str(message));
        }
    }

    fn pulse_icon(&mut self, pulse: &IconPulse) {
        let Some(icon) = self.icon() else {
            return;
        };
        let _ = icon.style().set_property("transform", &pulse.transform());

        // reset is fire-and-forget; whichever write lands last wins
        let reset = pulse.reset_transform();
        let callback = Closure::once_into_js(move || {
            let _ = icon.style().set_property("transform", reset);
        });
        let delay = i32::try_from(pulse.duration_ms).unwrap_or(i32::MAX);
        let _ = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref::<js_sys::Function>(),
                delay,
            );
    }

    fn diagnostic(&mut self, message: &str) {
        web_sys::console::warn_1(&JsValue::from_str(message));
    }
}
