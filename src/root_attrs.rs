// What the page writes on <html>, captured before mount so unmount can put
// the host document back. Pure data so the host-side tests can include it.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RootAttributes {
    pub had_dark_class: bool,
    // None when the host page had no lang attribute at all
    pub lang: Option<String>,
}

impl RootAttributes {
    pub fn capture(class_attr: Option<&str>, lang: Option<String>, dark_class: &str) -> Self {
        Self {
            had_dark_class: class_attr
                .map(|c| c.split_ascii_whitespace().any(|t| t == dark_class))
                .unwrap_or(false),
            lang,
        }
    }
}
