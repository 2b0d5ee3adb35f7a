use std::str::FromStr;

use crate::error::CoreError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    /// BCP 47 primary language subtag, suitable for `<html lang>`.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Fr,
            Locale::Fr => Locale::En,
        }
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    /// Accepts a bare language code or a region-qualified tag (`fr-CA`, `en_GB`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            _ => Err(CoreError::UnknownLocale(s.to_string())),
        }
    }
}

/// Display strings for the hero section and top-right menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Translations {
    pub greeting: &'static str,
    pub name: &'static str,
    pub nickname: &'static str,
    pub nickname_value: &'static str,
    pub description: &'static str,
    pub projects: &'static str,
    pub about: &'static str,
    /// Label of the language toggle; names the locale it switches to.
    pub language: &'static str,
}

pub const EN: Translations = Translations {
    greeting: "Hi, I'm",
    name: "Eowin",
    nickname: "But you can call me",
    nickname_value: "Leo",
    description: "Software developer building fast, thoughtful things for the web.",
    projects: "Projects",
    about: "About",
    language: "FR",
};

pub const FR: Translations = Translations {
    greeting: "Salut, je suis",
    name: "Eowin",
    nickname: "Mais tu peux m'appeler",
    nickname_value: "Leo",
    description: "Développeur logiciel qui construit des choses rapides et soignées pour le web.",
    projects: "Projets",
    about: "À propos",
    language: "EN",
};

#[inline]
pub fn lookup(locale: Locale) -> &'static Translations {
    match locale {
        Locale::En => &EN,
        Locale::Fr => &FR,
    }
}
