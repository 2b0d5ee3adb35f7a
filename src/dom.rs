use folio_core::ViewportSize;
use web_sys as web;

use crate::constants::DARK_CLASS;
use crate::root_attrs::RootAttributes;

/// Create an element, optionally with a class attribute, and append it to `parent`.
pub fn append_element(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    class: Option<&str>,
) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?;
    if let Some(class) = class {
        _ = el.set_attribute("class", class);
    }
    parent
        .append_child(&el)
        .map_err(|e| anyhow::anyhow!("append <{}>: {:?}", tag, e))?;
    Ok(el)
}

#[inline]
pub fn set_style(el: &web::Element, style: &str) {
    _ = el.set_attribute("style", style);
}

#[inline]
pub fn set_text(el: &web::Element, text: &str) {
    if el.text_content().as_deref() != Some(text) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_visible(el: &web::Element, visible: bool) {
    if visible {
        _ = el.remove_attribute("hidden");
    } else {
        _ = el.set_attribute("hidden", "");
    }
}

pub fn toggle_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    if on {
        _ = cl.add_1(class);
    } else {
        _ = cl.remove_1(class);
    }
}

/// Current layout viewport in CSS pixels. Unmeasurable dimensions read as 0.
pub fn viewport_size(window: &web::Window) -> ViewportSize {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    ViewportSize::new(read(window.inner_width()), read(window.inner_height()))
}

pub fn root_attributes(document: &web::Document) -> RootAttributes {
    match document.document_element() {
        Some(html) => RootAttributes::capture(
            html.get_attribute("class").as_deref(),
            html.get_attribute("lang"),
            DARK_CLASS,
        ),
        None => RootAttributes::default(),
    }
}

pub fn restore_root_attributes(document: &web::Document, attrs: &RootAttributes) {
    let Some(html) = document.document_element() else {
        return;
    };
    toggle_class(&html, DARK_CLASS, attrs.had_dark_class);
    let restored = match &attrs.lang {
        Some(lang) => html.set_attribute("lang", lang),
        None => html.remove_attribute("lang"),
    };
    if let Err(e) = restored {
        log::warn!("[mount] could not restore <html lang>: {:?}", e);
    }
}
