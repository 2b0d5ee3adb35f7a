// DOM hooks, storage keys and injected CSS for the landing page.
//
// Kept free of web-sys types so the host-side tests can include this file.

// Mount point supplied by the host page; falls back to <body>
pub const ROOT_ID: &str = "app";

// Element ids created at mount
pub const SECTION_ID: &str = "main";
pub const LANGUAGE_BUTTON_ID: &str = "folio-language";
pub const THEME_BUTTON_ID: &str = "folio-theme";

// Class toggled on <html> in dark mode
pub const DARK_CLASS: &str = "dark";

// Session storage
pub const PREFS_STORAGE_KEY: &str = "folio.preferences";

// Logo
pub const LOGO_SRC: &str = "/logo512.png";
pub const LOGO_GLOW_SIZE_PX: u32 = 48;

// Decoration shown next to a hovered name
pub const HOVER_EMOJI: &str = "🦁";

// Stacking
pub const BACKGROUND_Z_INDEX: i32 = 0;
pub const CONTENT_Z_INDEX: i32 = 10;
pub const LOGO_Z_INDEX: i32 = 20;
pub const FOLLOWER_Z_INDEX: i32 = 50;

// Keyframes referenced by blob and hover styles
pub const KEYFRAMES_CSS: &str = "\
@keyframes pulse { 0%, 100% { opacity: 0.6; } 50% { opacity: 0.8; } }
@keyframes floatUp { 0% { opacity: 0; transform: translate(-50%, 0); } \
20% { opacity: 1; } 100% { opacity: 0; transform: translate(-50%, -2em); } }
.animate-floatUp { animation: floatUp 1.5s ease-out infinite; }";

// Hero and menu classes, matching the host stylesheet
pub const SECTION_CLASS: &str =
    "relative w-full h-screen flex items-center justify-center transition-colors duration-300";
pub const CONTENT_CLASS: &str = "relative z-10 text-center px-4 scale-75 md:scale-100 transform-gpu";
pub const HEADING_CLASS: &str = "text-2xl md:text-5xl font-bold text-gray-800 dark:text-white mb-1 md:mb-2";
pub const SUBHEADING_CLASS: &str =
    "text-lg md:text-3xl font-medium text-gray-600 dark:text-gray-300 mb-2 md:mb-4";
pub const DESCRIPTION_CLASS: &str = "text-sm md:text-xl text-gray-600 dark:text-gray-300 mb-6 md:mb-8";
pub const LINK_ROW_CLASS: &str = "flex gap-4 md:gap-6 justify-center";
pub const LINK_CLASS: &str = "text-xs md:text-base text-gray-600 dark:text-gray-300 \
hover:text-blue-600 dark:hover:text-blue-400 transition-colors";
pub const MENU_CLASS: &str = "absolute top-4 md:top-6 right-4 md:right-6 flex items-center \
gap-3 md:gap-4 scale-75 md:scale-100";
pub const MENU_BUTTON_CLASS: &str = "text-gray-600 dark:text-gray-300 hover:text-blue-600 \
dark:hover:text-blue-400 transition-colors";
pub const NAME_CLASS: &str =
    "relative inline-block text-blue-600 dark:text-blue-400 transition-all duration-300";
pub const NAME_HOVER_CLASS: &str = "scale-105";
