//! CSS length expressions used by the blob layout.
//!
//! Lengths are kept symbolic so the browser resolves them against the live
//! viewport, and rendered verbatim into inline styles. [`CssLength::resolve`]
//! evaluates the same expression in pixels for a given viewport.

use std::fmt;

use crate::viewport::ViewportSize;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CssLength {
    Px(f32),
    Vw(f32),
    Percent(f32),
    /// `min(<vw>vw, <px>px)`
    MinVwPx { vw: f32, px: f32 },
}

impl CssLength {
    /// Evaluate in pixels. `Percent` is taken relative to `reference`, which is
    /// the containing block's extent along the relevant axis.
    pub fn resolve(&self, viewport: ViewportSize, reference: f32) -> f32 {
        match *self {
            CssLength::Px(px) => px,
            CssLength::Vw(vw) => vw_to_px(vw, viewport),
            CssLength::Percent(p) => reference * p / 100.0,
            CssLength::MinVwPx { vw, px } => vw_to_px(vw, viewport).min(px),
        }
    }
}

#[inline]
fn vw_to_px(vw: f32, viewport: ViewportSize) -> f32 {
    viewport.width * vw / 100.0
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssLength::Px(px) => write!(f, "{px}px"),
            CssLength::Vw(vw) => write!(f, "{vw}vw"),
            CssLength::Percent(p) => write!(f, "{p}%"),
            CssLength::MinVwPx { vw, px } => write!(f, "min({vw}vw, {px}px)"),
        }
    }
}
