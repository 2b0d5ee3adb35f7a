// Tests for viewport classification and tracking.

use folio_core::*;

#[test]
fn breakpoint_is_inclusive_on_desktop_side() {
    assert_eq!(ViewportClass::classify(767.0), ViewportClass::Mobile);
    assert_eq!(ViewportClass::classify(767.9), ViewportClass::Mobile);
    assert_eq!(ViewportClass::classify(768.0), ViewportClass::Desktop);
    assert_eq!(ViewportClass::classify(0.0), ViewportClass::Mobile);
}

#[test]
fn initial_class_comes_from_initial_size() {
    assert!(ViewportTracker::new(ViewportSize::new(500.0, 900.0)).is_mobile());
    assert!(!ViewportTracker::new(ViewportSize::new(1024.0, 768.0)).is_mobile());
}

#[test]
fn resize_across_breakpoint_flips_class() {
    let mut vt = ViewportTracker::new(ViewportSize::new(1024.0, 768.0));
    assert_eq!(vt.class(), ViewportClass::Desktop);
    assert!(vt.resize(ViewportSize::new(500.0, 768.0)));
    assert_eq!(vt.class(), ViewportClass::Mobile);
    assert_eq!(vt.size(), ViewportSize::new(500.0, 768.0));
}

#[test]
fn resize_within_class_keeps_class() {
    let mut vt = ViewportTracker::new(ViewportSize::new(1024.0, 768.0));
    assert!(!vt.resize(ViewportSize::new(1300.0, 900.0)));
    assert_eq!(vt.class(), ViewportClass::Desktop);
    // size still updates
    assert_eq!(vt.size().width, 1300.0);
}

#[test]
fn one_pixel_oscillation_flips_every_time() {
    let mut vt = ViewportTracker::new(ViewportSize::new(768.0, 600.0));
    for _ in 0..4 {
        assert!(vt.resize(ViewportSize::new(767.0, 600.0)));
        assert!(vt.is_mobile());
        assert!(vt.resize(ViewportSize::new(768.0, 600.0)));
        assert!(!vt.is_mobile());
    }
}

#[test]
fn resize_changes_blob_sizes_on_next_layout() {
    let mut vt = ViewportTracker::new(ViewportSize::new(1024.0, 768.0));
    let layout = |vt: &ViewportTracker| {
        layout_blobs(&LayoutInput {
            pointer: PointerPosition::default(),
            viewport: vt.size(),
            class: vt.class(),
            flags: PreferenceFlags::default(),
        })
    };
    let before = layout(&vt);
    vt.resize(ViewportSize::new(500.0, 768.0));
    let after = layout(&vt);
    assert_eq!(before[0].size.to_string(), "min(85vw, 1300px)");
    assert_eq!(after[0].size.to_string(), "min(120vw, 1300px)");
    assert_eq!(after[4].size.to_string(), "min(150vw, 1600px)");
}
