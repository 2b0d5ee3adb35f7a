use folio_core::{Navigator, PageScroller};
use wasm_bindgen::JsValue;
use web_sys as web;

/// Section navigation delegated to a host-page callback `(id: string) => void`.
#[derive(Clone)]
pub struct JsNavigator {
    handler: js_sys::Function,
}

impl JsNavigator {
    pub fn new(handler: js_sys::Function) -> Self {
        Self { handler }
    }
}

impl Navigator for JsNavigator {
    fn scroll_to_section(&self, id: &str) {
        if let Err(e) = self.handler.call1(&JsValue::NULL, &JsValue::from_str(id)) {
            log::error!("[nav] handler failed for #{}: {:?}", id, e);
        }
    }
}

pub struct WindowScroller;

impl PageScroller for WindowScroller {
    fn scroll_to_top(&self) {
        if let Some(window) = web::window() {
            let opts = web::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(web::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }
}
