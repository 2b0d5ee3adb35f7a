#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod navigation;
mod render;
mod root_attrs;
mod storage;
mod view;

use view::View;

thread_local! {
    static MOUNTED: RefCell<Option<Rc<View>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let root: web::Element = match document.get_element_by_id(constants::ROOT_ID) {
        Some(el) => el,
        None => {
            log::warn!("missing #{}; mounting into <body>", constants::ROOT_ID);
            document
                .body()
                .ok_or_else(|| anyhow::anyhow!("no <body>"))?
                .unchecked_into()
        }
    };

    if MOUNTED.with(|m| m.borrow().is_some()) {
        log::warn!("[mount] already mounted");
        return Ok(());
    }
    let view = View::mount(&window, &document, &root)?;
    MOUNTED.with(|m| *m.borrow_mut() = Some(view));
    Ok(())
}

/// Route logo clicks to `handler(sectionId)` instead of scrolling to the top.
/// Passing `undefined` restores the scroll-to-top fallback.
#[wasm_bindgen]
pub fn set_navigation_handler(handler: Option<js_sys::Function>) {
    match MOUNTED.with(|m| m.borrow().clone()) {
        Some(view) => view.set_navigator(handler.map(navigation::JsNavigator::new)),
        None => log::warn!("[nav] no mounted page for navigation handler"),
    }
}

/// Tear down the page: removes every listener and the mounted nodes.
#[wasm_bindgen]
pub fn unmount() {
    if let Some(view) = MOUNTED.with(|m| m.borrow_mut().take()) {
        view.unmount();
    }
}
