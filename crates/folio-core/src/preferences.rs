use serde::{Deserialize, Serialize};

use crate::translations::Locale;

/// The two UI preferences the page reacts to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceFlags {
    pub dark_mode: bool,
    pub french: bool,
}

impl PreferenceFlags {
    #[inline]
    pub fn locale(&self) -> Locale {
        if self.french {
            Locale::Fr
        } else {
            Locale::En
        }
    }
}

/// Read/toggle contract for theme and language flags.
///
/// Implementations decide where the flags live; the composition only reads
/// them through [`PreferenceStore::flags`].
pub trait PreferenceStore {
    fn dark_mode(&self) -> bool;
    fn toggle_dark_mode(&mut self);
    fn french(&self) -> bool;
    fn toggle_language(&mut self);

    fn flags(&self) -> PreferenceFlags {
        PreferenceFlags {
            dark_mode: self.dark_mode(),
            french: self.french(),
        }
    }
}

/// In-memory store; lives as long as the page session.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferences {
    flags: PreferenceFlags,
}

impl MemoryPreferences {
    pub fn new(flags: PreferenceFlags) -> Self {
        Self { flags }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn dark_mode(&self) -> bool {
        self.flags.dark_mode
    }

    fn toggle_dark_mode(&mut self) {
        self.flags.dark_mode = !self.flags.dark_mode;
    }

    fn french(&self) -> bool {
        self.flags.french
    }

    fn toggle_language(&mut self) {
        self.flags.french = !self.flags.french;
    }

    fn flags(&self) -> PreferenceFlags {
        self.flags
    }
}

/// Somewhere to keep flags between page loads.
pub trait FlagBackend {
    fn load(&self) -> Option<PreferenceFlags>;
    fn save(&self, flags: PreferenceFlags);
}

/// Write-through store. Without a backend it is a plain [`MemoryPreferences`].
#[derive(Clone, Debug)]
pub struct PersistedPreferences<B> {
    inner: MemoryPreferences,
    backend: Option<B>,
}

impl<B: FlagBackend> PersistedPreferences<B> {
    /// Saved flags win; `fallback` is used when there is no backend or nothing saved.
    pub fn new(backend: Option<B>, fallback: PreferenceFlags) -> Self {
        let flags = backend
            .as_ref()
            .and_then(|b| b.load())
            .unwrap_or(fallback);
        Self {
            inner: MemoryPreferences::new(flags),
            backend,
        }
    }

    #[inline]
    pub fn is_persistent(&self) -> bool {
        self.backend.is_some()
    }

    fn persist(&self) {
        if let Some(backend) = &self.backend {
            backend.save(self.inner.flags());
        }
    }
}

impl<B: FlagBackend> PreferenceStore for PersistedPreferences<B> {
    fn dark_mode(&self) -> bool {
        self.inner.dark_mode()
    }

    fn toggle_dark_mode(&mut self) {
        self.inner.toggle_dark_mode();
        self.persist();
    }

    fn french(&self) -> bool {
        self.inner.french()
    }

    fn toggle_language(&mut self) {
        self.inner.toggle_language();
        self.persist();
    }

    fn flags(&self) -> PreferenceFlags {
        self.inner.flags()
    }
}
