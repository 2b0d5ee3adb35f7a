// Tests for the blob layout: parallax math, sizing, insets and colors.

use folio_core::*;

fn input(px: f32, py: f32, w: f32, h: f32, dark_mode: bool) -> LayoutInput {
    LayoutInput {
        pointer: PointerPosition::new(px, py),
        viewport: ViewportSize::new(w, h),
        class: ViewportClass::classify(w),
        flags: PreferenceFlags {
            dark_mode,
            french: false,
        },
    }
}

#[test]
fn offset_at_top_left_corner() {
    let off = parallax_offset(PointerPosition::new(0.0, 0.0), ViewportSize::new(1000.0, 800.0));
    assert_eq!(off.x, -50.0);
    assert_eq!(off.y, -50.0);
}

#[test]
fn offset_at_bottom_right_corner() {
    let off = parallax_offset(
        PointerPosition::new(1000.0, 800.0),
        ViewportSize::new(1000.0, 800.0),
    );
    assert_eq!(off.x, 50.0);
    assert_eq!(off.y, 50.0);
}

#[test]
fn offset_is_zero_at_viewport_center() {
    let off = parallax_offset(PointerPosition::new(640.0, 360.0), ViewportSize::new(1280.0, 720.0));
    assert_eq!(off.x, 0.0);
    assert_eq!(off.y, 0.0);
}

#[test]
fn offset_is_monotonic_in_pointer_x() {
    let vp = ViewportSize::new(1000.0, 800.0);
    let mut prev = f32::NEG_INFINITY;
    for x in (0..=1000).step_by(25) {
        let off = parallax_offset(PointerPosition::new(x as f32, 400.0), vp);
        let expected = (x as f32 / 1000.0 - 0.5) * 100.0;
        assert!((off.x - expected).abs() < 1e-4, "x={x}: {} vs {}", off.x, expected);
        assert!(off.x > prev);
        prev = off.x;
    }
}

#[test]
fn zero_viewport_yields_finite_offset() {
    let off = parallax_offset(PointerPosition::new(10.0, 20.0), ViewportSize::new(0.0, 0.0));
    assert!(off.x.is_finite() && off.y.is_finite());
    // denominator clamps to 1
    assert_eq!(off.x, (10.0 - 0.5) * 100.0);
    assert_eq!(off.y, (20.0 - 0.5) * 100.0);
}

#[test]
fn always_five_blobs_four_corners_one_center() {
    let cases = [
        input(0.0, 0.0, 1000.0, 800.0, false),
        input(300.0, 100.0, 500.0, 900.0, true),
        input(5.0, 5.0, 0.0, 0.0, false),
        input(1920.0, 1080.0, 1920.0, 1080.0, true),
    ];
    for case in &cases {
        let blobs = layout_blobs(case);
        assert_eq!(blobs.len(), 5);
        let corners: Vec<Anchor> = blobs.iter().map(|b| b.anchor).filter(|a| a.is_corner()).collect();
        assert_eq!(
            corners,
            vec![
                Anchor::TopLeft,
                Anchor::TopRight,
                Anchor::BottomLeft,
                Anchor::BottomRight
            ]
        );
        assert_eq!(blobs.iter().filter(|b| b.anchor == Anchor::Center).count(), 1);
    }
}

#[test]
fn every_blob_shares_the_same_offset() {
    let blobs = layout_blobs(&input(250.0, 600.0, 1000.0, 800.0, false));
    let first = blobs[0].offset;
    assert!(blobs.iter().all(|b| b.offset == first));
    assert_eq!(first, parallax_offset(PointerPosition::new(250.0, 600.0), ViewportSize::new(1000.0, 800.0)));
}

#[test]
fn desktop_sizes_and_insets() {
    let blobs = layout_blobs(&input(0.0, 0.0, 1024.0, 768.0, false));
    for b in &blobs[..4] {
        assert_eq!(b.size.to_string(), "min(85vw, 1300px)");
        assert_eq!(b.inset.to_string(), "min(-5vw, -100px)");
    }
    assert_eq!(blobs[4].size.to_string(), "min(100vw, 1600px)");
    assert_eq!(blobs[4].inset.to_string(), "50%");
}

#[test]
fn mobile_sizes_and_insets() {
    let blobs = layout_blobs(&input(0.0, 0.0, 390.0, 844.0, false));
    for b in &blobs[..4] {
        assert_eq!(b.size.to_string(), "min(120vw, 1300px)");
        assert_eq!(b.inset.to_string(), "-10vw");
    }
    assert_eq!(blobs[4].size.to_string(), "min(150vw, 1600px)");
}

#[test]
fn desktop_inset_resolves_to_css_min() {
    // min(-5vw, -100px) picks the more negative value, as the browser would
    let inset = corner_inset(ViewportClass::Desktop);
    assert_eq!(inset.resolve(ViewportSize::new(1000.0, 800.0), 0.0), -100.0);
    assert_eq!(inset.resolve(ViewportSize::new(4000.0, 800.0), 0.0), -200.0);
}

#[test]
fn dark_mode_flips_every_gradient() {
    let light = layout_blobs(&input(120.0, 80.0, 1000.0, 800.0, false));
    let dark = layout_blobs(&input(120.0, 80.0, 1000.0, 800.0, true));
    for (i, (l, d)) in light.iter().zip(dark.iter()).enumerate() {
        assert_ne!(l.gradient, d.gradient, "blob {i}");
        assert_eq!(l.gradient, BLOB_SCHEMES[i].1.light);
        assert_eq!(d.gradient, BLOB_SCHEMES[i].1.dark);
        assert_eq!(l.offset, d.offset);
        assert_eq!(l.size, d.size);
    }
}

#[test]
fn gradient_choice_ignores_pointer_and_viewport() {
    let a = layout_blobs(&input(0.0, 0.0, 400.0, 800.0, true));
    let b = layout_blobs(&input(900.0, 700.0, 1600.0, 900.0, true));
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.gradient, y.gradient);
    }
}

#[test]
fn animation_delays_are_staggered() {
    let blobs = layout_blobs(&input(0.0, 0.0, 1000.0, 800.0, false));
    let delays: Vec<f32> = blobs.iter().map(|b| b.animation_delay_sec).collect();
    assert_eq!(delays, vec![0.0, -1.0, -2.0, -3.0, -1.5]);
}

#[test]
fn gradient_css_is_left_to_right() {
    let blobs = layout_blobs(&input(0.0, 0.0, 1000.0, 800.0, false));
    assert_eq!(
        blobs[0].gradient.css(),
        "linear-gradient(to right, #3b82f6, #93c5fd)"
    );
    assert!(blobs[0].style().contains("background:linear-gradient(to right, #3b82f6, #93c5fd);"));
}
