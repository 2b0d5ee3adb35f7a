//! Scene composition: everything the page draws, derived from tracker and
//! preference state in one pass.
//!
//! The web frontend owns the DOM nodes and copies a [`Scene`] onto them; no
//! business logic lives there beyond that mapping.

use crate::constants::*;
use crate::layout::{layout_blobs, BlobDirective, LayoutInput};
use crate::navigation::MAIN_SECTION_HREF;
use crate::pointer::PointerPosition;
use crate::preferences::PreferenceFlags;
use crate::translations::{lookup, Locale, Translations};
use crate::viewport::{ViewportClass, ViewportSize};

/// Hoverable names in the hero heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeroName {
    Name,
    Nickname,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneInput {
    pub pointer: PointerPosition,
    pub viewport: ViewportSize,
    pub class: ViewportClass,
    pub flags: PreferenceFlags,
    pub hovered: Option<HeroName>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextureLayer {
    pub opacity: f32,
}

impl TextureLayer {
    pub fn for_theme(dark_mode: bool) -> Self {
        Self {
            opacity: if dark_mode {
                TEXTURE_OPACITY_DARK
            } else {
                TEXTURE_OPACITY_LIGHT
            },
        }
    }

    /// 60x60 tiled plus pattern, URL-encoded for an inline `background-image`.
    pub fn background_image(&self) -> String {
        format!(
            "url(\"data:image/svg+xml,%3Csvg width='60' height='60' viewBox='0 0 60 60' \
             xmlns='http://www.w3.org/2000/svg'%3E%3Cg fill='none' fill-rule='evenodd'%3E\
             %3Cg fill='%23a0aec0' fill-opacity='{}'%3E%3Cpath d='M36 34v-4h-2v4h-4v2h4v4h2v-4h4v-2h-4zm0-30V0h-2v4h-4v2h4v4h2V6h4V4h-4zM6 \
             34v-4H4v4H0v2h4v4h2v-4h4v-2H6zM6 4V0H4v4H0v2h4v4h2V6h4V4H6z'/%3E%3C/g%3E%3C/g%3E%3C/svg%3E\")",
            self.opacity
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogoView {
    pub href: &'static str,
    pub alt: &'static str,
    /// Soft white halo behind the logo, dark mode only.
    pub glow: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowerView {
    pub x: f32,
    pub y: f32,
    pub dark_mode: bool,
}

impl FollowerView {
    /// Circle centered on the pointer.
    pub fn transform(&self) -> String {
        let half = FOLLOWER_SIZE_PX / 2.0;
        format!("translate({}px, {}px)", self.x - half, self.y - half)
    }

    pub fn color(&self) -> &'static str {
        if self.dark_mode {
            FOLLOWER_COLOR_DARK
        } else {
            FOLLOWER_COLOR_LIGHT
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroView {
    pub text: &'static Translations,
    pub hovered: Option<HeroName>,
    pub theme_icon: &'static str,
}

impl HeroView {
    #[inline]
    pub fn is_hovered(&self, name: HeroName) -> bool {
        self.hovered == Some(name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub dark_mode: bool,
    pub locale: Locale,
    pub texture: TextureLayer,
    pub blobs: [BlobDirective; BLOB_COUNT],
    pub logo: LogoView,
    pub follower: FollowerView,
    pub hero: HeroView,
}

pub fn compose(input: &SceneInput) -> Scene {
    let dark_mode = input.flags.dark_mode;
    let locale = input.flags.locale();
    let blobs = layout_blobs(&LayoutInput {
        pointer: input.pointer,
        viewport: input.viewport,
        class: input.class,
        flags: input.flags,
    });
    Scene {
        dark_mode,
        locale,
        texture: TextureLayer::for_theme(dark_mode),
        blobs,
        logo: LogoView {
            href: MAIN_SECTION_HREF,
            alt: "Eowin Logo",
            glow: dark_mode,
        },
        follower: FollowerView {
            x: input.pointer.x,
            y: input.pointer.y,
            dark_mode,
        },
        hero: HeroView {
            text: lookup(locale),
            hovered: input.hovered,
            theme_icon: if dark_mode { "☀️" } else { "🌙" },
        },
    }
}
