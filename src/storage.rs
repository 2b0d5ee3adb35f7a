use folio_core::{FlagBackend, Locale, PersistedPreferences, PreferenceFlags};
use gloo::storage::{SessionStorage, Storage};
use web_sys as web;

use crate::constants::PREFS_STORAGE_KEY;

/// Preference store that writes through to `sessionStorage` when the browser
/// provides one, and keeps flags in memory otherwise.
pub type SessionPreferences = PersistedPreferences<SessionBackend>;

/// `sessionStorage` access. Only constructed once the storage object is known
/// to exist, since gloo throws into JS when it is missing.
pub struct SessionBackend(());

impl SessionBackend {
    pub fn open(window: &web::Window) -> Option<Self> {
        match window.session_storage() {
            Ok(Some(_)) => Some(Self(())),
            Ok(None) => {
                log::warn!("[prefs] sessionStorage unavailable; preferences stay in memory");
                None
            }
            Err(e) => {
                log::warn!("[prefs] sessionStorage blocked ({:?}); preferences stay in memory", e);
                None
            }
        }
    }
}

impl FlagBackend for SessionBackend {
    fn load(&self) -> Option<PreferenceFlags> {
        match SessionStorage::get::<PreferenceFlags>(PREFS_STORAGE_KEY) {
            Ok(flags) => {
                log::info!("[prefs] restored {:?}", flags);
                Some(flags)
            }
            Err(e) => {
                log::debug!("[prefs] no saved preferences ({})", e);
                None
            }
        }
    }

    fn save(&self, flags: PreferenceFlags) {
        if let Err(e) = SessionStorage::set(PREFS_STORAGE_KEY, flags) {
            log::warn!("[prefs] could not save preferences: {}", e);
        }
    }
}

/// Restore saved flags, or start light-mode with the document language.
pub fn load(window: &web::Window, document: &web::Document) -> SessionPreferences {
    let fallback = PreferenceFlags {
        dark_mode: false,
        french: document_locale(document) == Locale::Fr,
    };
    SessionPreferences::new(SessionBackend::open(window), fallback)
}

fn document_locale(document: &web::Document) -> Locale {
    let Some(lang) = document
        .document_element()
        .and_then(|el| el.get_attribute("lang"))
    else {
        return Locale::default();
    };
    lang.parse().unwrap_or_else(|e| {
        log::debug!("[prefs] {}; using {:?}", e, Locale::default());
        Locale::default()
    })
}
