// Host-side tests for DOM hooks and injected CSS.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod root_attrs {
    include!("../src/root_attrs.rs");
}

use constants::*;
use root_attrs::RootAttributes;

#[test]
fn section_id_matches_logo_target() {
    assert_eq!(format!("#{}", SECTION_ID), folio_core::MAIN_SECTION_HREF);
    assert_eq!(SECTION_ID, folio_core::MAIN_SECTION_ID);
}

#[test]
fn element_ids_are_distinct() {
    let ids = [ROOT_ID, SECTION_ID, LANGUAGE_BUTTON_ID, THEME_BUTTON_ID];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn keyframes_define_pulse_between_blob_opacities() {
    use folio_core::constants::{BLOB_BASE_OPACITY, BLOB_PEAK_OPACITY};
    assert!(KEYFRAMES_CSS.contains("@keyframes pulse"));
    assert!(KEYFRAMES_CSS.contains(&format!("opacity: {};", BLOB_BASE_OPACITY)));
    assert!(KEYFRAMES_CSS.contains(&format!("opacity: {};", BLOB_PEAK_OPACITY)));
    assert!(KEYFRAMES_CSS.contains("@keyframes floatUp"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn stacking_order_keeps_background_behind_content() {
    assert!(BACKGROUND_Z_INDEX < CONTENT_Z_INDEX);
    assert!(CONTENT_Z_INDEX < LOGO_Z_INDEX);
    assert!(LOGO_Z_INDEX < FOLLOWER_Z_INDEX);
    assert!(folio_core::constants::BLOB_Z_INDEX < BACKGROUND_Z_INDEX);
}

#[test]
fn blob_styles_reference_injected_keyframes() {
    let blobs = folio_core::layout_blobs(&folio_core::LayoutInput {
        pointer: folio_core::PointerPosition::default(),
        viewport: folio_core::ViewportSize::new(1000.0, 800.0),
        class: folio_core::ViewportClass::Desktop,
        flags: folio_core::PreferenceFlags::default(),
    });
    for blob in &blobs {
        assert!(blob.style().contains("animation:pulse 4s ease-in-out infinite;"));
    }
}

#[test]
fn root_attributes_record_host_dark_class() {
    let attrs = RootAttributes::capture(Some("js dark  theme"), Some("fr".into()), DARK_CLASS);
    assert!(attrs.had_dark_class);
    assert_eq!(attrs.lang.as_deref(), Some("fr"));

    // Only a whole class token counts.
    let attrs = RootAttributes::capture(Some("darker"), None, DARK_CLASS);
    assert!(!attrs.had_dark_class);
}

#[test]
fn root_attributes_remember_missing_lang() {
    let attrs = RootAttributes::capture(None, None, DARK_CLASS);
    assert_eq!(attrs, RootAttributes::default());
    assert!(attrs.lang.is_none());
}
