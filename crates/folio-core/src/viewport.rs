//! Viewport size tracking and the coarse Mobile/Desktop classification that
//! selects blob size and inset constants.

use crate::constants::MOBILE_BREAKPOINT_PX;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    Mobile,
    Desktop,
}

impl ViewportClass {
    /// Widths strictly below the breakpoint are Mobile; the breakpoint itself is Desktop.
    #[inline]
    pub fn classify(width: f32) -> Self {
        if width < MOBILE_BREAKPOINT_PX {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }

    #[inline]
    pub fn is_mobile(self) -> bool {
        self == ViewportClass::Mobile
    }
}

/// Current viewport extent plus its derived class.
///
/// The class is computed at construction from the initial size, then on every
/// [`ViewportTracker::resize`]. There is no hysteresis band.
#[derive(Clone, Debug)]
pub struct ViewportTracker {
    size: ViewportSize,
    class: ViewportClass,
}

impl ViewportTracker {
    pub fn new(size: ViewportSize) -> Self {
        Self {
            size,
            class: ViewportClass::classify(size.width),
        }
    }

    #[inline]
    pub fn size(&self) -> ViewportSize {
        self.size
    }

    #[inline]
    pub fn class(&self) -> ViewportClass {
        self.class
    }

    #[inline]
    pub fn is_mobile(&self) -> bool {
        self.class.is_mobile()
    }

    /// Store the new size and reclassify. Returns `true` when the class flipped.
    pub fn resize(&mut self, size: ViewportSize) -> bool {
        self.size = size;
        let next = ViewportClass::classify(size.width);
        if next == self.class {
            return false;
        }
        log::debug!(
            "[viewport] {:?} -> {:?} at {}x{}",
            self.class,
            next,
            size.width,
            size.height
        );
        self.class = next;
        true
    }
}
