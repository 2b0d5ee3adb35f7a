use glam::Vec2;

/// Viewport-relative pointer coordinates in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

impl PointerPosition {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Holds the most recent pointer sample. No history is kept; every sample
/// overwrites the previous one.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    position: PointerPosition,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn position(&self) -> PointerPosition {
        self.position
    }

    /// Record a pointer-move sample. Returns `true` when the stored value changed.
    pub fn update(&mut self, x: f32, y: f32) -> bool {
        let next = PointerPosition::new(x, y);
        if next == self.position {
            return false;
        }
        self.position = next;
        true
    }
}
