//! Blob layout: maps pointer, viewport and preference state to the five
//! decorative background blobs.
//!
//! Everything here is pure and recomputed on every render. Blobs have no
//! identity beyond their position in the returned array.

use std::fmt::Write as _;

use glam::Vec2;

use crate::constants::*;
use crate::css::CssLength;
use crate::pointer::PointerPosition;
use crate::preferences::PreferenceFlags;
use crate::viewport::{ViewportClass, ViewportSize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

impl Anchor {
    #[inline]
    pub fn is_corner(self) -> bool {
        self != Anchor::Center
    }

    /// CSS inset properties this anchor positions against.
    fn sides(self) -> (&'static str, &'static str) {
        match self {
            Anchor::TopLeft | Anchor::Center => ("left", "top"),
            Anchor::TopRight => ("right", "top"),
            Anchor::BottomLeft => ("left", "bottom"),
            Anchor::BottomRight => ("right", "bottom"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientPair {
    pub from: &'static str,
    pub to: &'static str,
}

impl GradientPair {
    pub const fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }

    pub fn css(&self) -> String {
        format!("linear-gradient(to right, {}, {})", self.from, self.to)
    }
}

/// Fixed light/dark gradient choice for one blob.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorScheme {
    pub light: GradientPair,
    pub dark: GradientPair,
}

impl ColorScheme {
    #[inline]
    pub fn select(&self, dark_mode: bool) -> GradientPair {
        if dark_mode {
            self.dark
        } else {
            self.light
        }
    }
}

const BLUE: ColorScheme = ColorScheme {
    light: GradientPair::new("#3b82f6", "#93c5fd"),
    dark: GradientPair::new("#020617", "#172554"),
};
const VIOLET: ColorScheme = ColorScheme {
    light: GradientPair::new("#8b5cf6", "#d946ef"),
    dark: GradientPair::new("#1e1b4b", "#312e81"),
};
const TEAL: ColorScheme = ColorScheme {
    light: GradientPair::new("#2dd4bf", "#34d399"),
    dark: GradientPair::new("#042f2e", "#134e4a"),
};

/// Design-time table, in layout order.
pub const BLOB_SCHEMES: [(Anchor, ColorScheme); BLOB_COUNT] = [
    (Anchor::TopLeft, BLUE),
    (Anchor::TopRight, VIOLET),
    (Anchor::BottomLeft, TEAL),
    (Anchor::BottomRight, VIOLET),
    (Anchor::Center, BLUE),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutInput {
    pub pointer: PointerPosition,
    pub viewport: ViewportSize,
    pub class: ViewportClass,
    pub flags: PreferenceFlags,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlobDirective {
    pub anchor: Anchor,
    /// Used for both width and height.
    pub size: CssLength,
    /// Distance from the anchored edges. Center blobs use `50%`.
    pub inset: CssLength,
    pub gradient: GradientPair,
    pub offset: Vec2,
    pub animation_delay_sec: f32,
}

/// Pointer-driven shift shared by every blob. Zero at the viewport center,
/// `±PARALLAX_SCALE_PX / 2` at the edges.
pub fn parallax_offset(pointer: PointerPosition, viewport: ViewportSize) -> Vec2 {
    let w = viewport.width.max(MIN_VIEWPORT_DENOMINATOR);
    let h = viewport.height.max(MIN_VIEWPORT_DENOMINATOR);
    Vec2::new(
        (pointer.x / w - 0.5) * PARALLAX_SCALE_PX,
        (pointer.y / h - 0.5) * PARALLAX_SCALE_PX,
    )
}

pub fn blob_size(anchor: Anchor, class: ViewportClass) -> CssLength {
    let (vw, px) = match (anchor.is_corner(), class) {
        (true, ViewportClass::Desktop) => CORNER_SIZE_DESKTOP,
        (true, ViewportClass::Mobile) => CORNER_SIZE_MOBILE,
        (false, ViewportClass::Desktop) => CENTER_SIZE_DESKTOP,
        (false, ViewportClass::Mobile) => CENTER_SIZE_MOBILE,
    };
    CssLength::MinVwPx { vw, px }
}

pub fn corner_inset(class: ViewportClass) -> CssLength {
    match class {
        ViewportClass::Mobile => CssLength::Vw(CORNER_INSET_MOBILE_VW),
        ViewportClass::Desktop => {
            let (vw, px) = CORNER_INSET_DESKTOP;
            CssLength::MinVwPx { vw, px }
        }
    }
}

pub fn layout_blobs(input: &LayoutInput) -> [BlobDirective; BLOB_COUNT] {
    let offset = parallax_offset(input.pointer, input.viewport);
    let inset = corner_inset(input.class);
    std::array::from_fn(|i| {
        let (anchor, scheme) = BLOB_SCHEMES[i];
        BlobDirective {
            anchor,
            size: blob_size(anchor, input.class),
            inset: if anchor.is_corner() {
                inset
            } else {
                CssLength::Percent(50.0)
            },
            gradient: scheme.select(input.flags.dark_mode),
            offset,
            animation_delay_sec: BLOB_ANIMATION_DELAYS_SEC[i],
        }
    })
}

impl BlobDirective {
    /// Inline style for the blob element.
    pub fn style(&self) -> String {
        let (h_side, v_side) = self.anchor.sides();
        let mut s = String::with_capacity(512);
        _ = write!(
            s,
            "position:fixed;border-radius:50%;filter:blur({BLOB_BLUR_PX}px);\
             opacity:{BLOB_BASE_OPACITY};pointer-events:none;\
             transition:transform {BLOB_TRANSITION_SEC}s ease-out;"
        );
        _ = write!(s, "width:{0};height:{0};", self.size);
        _ = write!(s, "background:{};", self.gradient.css());
        _ = write!(s, "{h_side}:{0};{v_side}:{0};", self.inset);
        _ = write!(
            s,
            "z-index:{BLOB_Z_INDEX};animation:pulse {PULSE_PERIOD_SEC}s ease-in-out infinite;\
             animation-delay:{}s;",
            self.animation_delay_sec
        );
        _ = write!(s, "transform:{};", self.transform());
        s
    }

    pub fn transform(&self) -> String {
        let parallax = format!("translate({}px, {}px)", self.offset.x, self.offset.y);
        match self.anchor {
            Anchor::Center => format!("translate(-50%, -50%) {parallax}"),
            _ => parallax,
        }
    }
}
