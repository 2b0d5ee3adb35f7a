pub mod constants;
pub mod css;
pub mod error;
pub mod layout;
pub mod navigation;
pub mod pointer;
pub mod preferences;
pub mod scene;
pub mod translations;
pub mod viewport;

pub use css::CssLength;
pub use error::CoreError;
pub use layout::*;
pub use navigation::*;
pub use pointer::*;
pub use preferences::*;
pub use scene::*;
pub use translations::{lookup, Locale, Translations};
pub use viewport::*;
