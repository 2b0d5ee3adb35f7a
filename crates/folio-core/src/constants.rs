// Layout and breakpoint tuning shared by the core and the web frontend.

// Viewport classification
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0; // widths below this are Mobile

// Parallax
pub const PARALLAX_SCALE_PX: f32 = 100.0; // full-width pointer sweep moves blobs by this much
pub const MIN_VIEWPORT_DENOMINATOR: f32 = 1.0; // guards degenerate 0x0 viewports

// Blob count: four corners plus one center
pub const BLOB_COUNT: usize = 5;

// Blob sizing, as (viewport-width percent, pixel cap)
pub const CORNER_SIZE_DESKTOP: (f32, f32) = (85.0, 1300.0);
pub const CORNER_SIZE_MOBILE: (f32, f32) = (120.0, 1300.0);
pub const CENTER_SIZE_DESKTOP: (f32, f32) = (100.0, 1600.0);
pub const CENTER_SIZE_MOBILE: (f32, f32) = (150.0, 1600.0);

// Corner insets
pub const CORNER_INSET_MOBILE_VW: f32 = -10.0;
pub const CORNER_INSET_DESKTOP: (f32, f32) = (-5.0, -100.0); // min(-5vw, -100px)

// Blob appearance
pub const BLOB_BLUR_PX: f32 = 20.0;
pub const BLOB_BASE_OPACITY: f32 = 0.6;
pub const BLOB_PEAK_OPACITY: f32 = 0.8; // top of the pulse keyframe
pub const BLOB_TRANSITION_SEC: f32 = 0.3;
pub const BLOB_Z_INDEX: i32 = -1;
pub const PULSE_PERIOD_SEC: f32 = 4.0;

// Per-blob pulse delays (seconds), in layout order TL, TR, BL, BR, center
pub const BLOB_ANIMATION_DELAYS_SEC: [f32; BLOB_COUNT] = [0.0, -1.0, -2.0, -3.0, -1.5];

// Background texture
pub const TEXTURE_OPACITY_DARK: f32 = 0.08;
pub const TEXTURE_OPACITY_LIGHT: f32 = 0.2;

// Pointer follower
pub const FOLLOWER_SIZE_PX: f32 = 24.0;
pub const FOLLOWER_COLOR_LIGHT: &str = "rgba(59, 130, 246, 0.45)";
pub const FOLLOWER_COLOR_DARK: &str = "rgba(255, 255, 255, 0.35)";
