//! Thin localization context: supported languages, preference resolution and
//! a small built-in message catalog with fallback.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::Script;
use crate::settings::{settings, LocalizationSettings};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    #[error("unsupported language: {0}")]
    Unsupported(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Am,
    Om,
    Fr,
    Ti,
    So,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::En,
        Language::Am,
        Language::Om,
        Language::Fr,
        Language::Ti,
        Language::So,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Am => "am",
            Language::Om => "om",
            Language::Fr => "fr",
            Language::Ti => "ti",
            Language::So => "so",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Am => "አማርኛ",
            Language::Om => "Afaan Oromoo",
            Language::Fr => "Français",
            Language::Ti => "ትግርኛ",
            Language::So => "Soomaali",
        }
    }

    /// Script used for calendar month and weekday names.
    pub fn script(self) -> Script {
        match self {
            Language::Am | Language::Ti => Script::Ethiopic,
            _ => Script::Latin,
        }
    }
}

impl FromStr for Language {
    type Err = LocaleError;

    /// Accepts a bare code or a region-tagged one (`am-ET`, `fr_FR`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s.split(['-', '_']).next().unwrap_or_default();
        let primary = primary.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == primary)
            .ok_or_else(|| LocaleError::Unsupported(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Pick the active language: a supported `preferred` code, then the
/// configured default.
pub fn resolve_language_with(preferred: Option<&str>, config: &LocalizationSettings) -> Language {
    match preferred.map(str::parse::<Language>) {
        Some(Ok(lang)) if config.is_supported(lang) => lang,
        Some(Ok(lang)) => {
            debug!(%lang, "preferred language not enabled, using default");
            config.default_language
        }
        Some(Err(e)) => {
            debug!("{e}, using default");
            config.default_language
        }
        None => config.default_language,
    }
}

/// [`resolve_language_with`] against the global settings.
pub fn resolve_language(preferred: Option<&str>) -> Language {
    resolve_language_with(preferred, &settings().localization)
}

const BUILTIN: [(Language, [(&str, &str); 4]); 6] = [
    (
        Language::En,
        [
            ("welcome", "Welcome"),
            ("hello", "Hello"),
            ("goodbye", "Goodbye"),
            ("loading", "Loading..."),
        ],
    ),
    (
        Language::Am,
        [
            ("welcome", "እንኳን ደህና መጡ"),
            ("hello", "ሰላም"),
            ("goodbye", "ደህና ሁኑ"),
            ("loading", "በመጫን ላይ..."),
        ],
    ),
    (
        Language::Om,
        [
            ("welcome", "Baga nagaan dhuftan"),
            ("hello", "Akkam"),
            ("goodbye", "Nagaatti"),
            ("loading", "Fe'amuu keessatti..."),
        ],
    ),
    (
        Language::Fr,
        [
            ("welcome", "Bienvenue"),
            ("hello", "Bonjour"),
            ("goodbye", "Au revoir"),
            ("loading", "Chargement..."),
        ],
    ),
    (
        Language::Ti,
        [
            ("welcome", "እንቋዕ ብደሓን መጻእኩም"),
            ("hello", "ሰላም"),
            ("goodbye", "ደሓን ኩን"),
            ("loading", "ይጽዕን ኣሎ..."),
        ],
    ),
    (
        Language::So,
        [
            ("welcome", "Soo dhowow"),
            ("hello", "Salaam"),
            ("goodbye", "Nabad gelyo"),
            ("loading", "Soo dejinaya..."),
        ],
    ),
];

/// Per-language message table.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    messages: HashMap<Language, HashMap<String, String>>,
}

impl Catalog {
    pub fn builtin() -> &'static Catalog {
        static INSTANCE: OnceLock<Catalog> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let mut catalog = Catalog::default();
            for (lang, entries) in BUILTIN {
                for (key, text) in entries {
                    catalog.insert(lang, key, text);
                }
            }
            catalog
        })
    }

    pub fn insert(&mut self, lang: Language, key: impl Into<String>, text: impl Into<String>) {
        self.messages
            .entry(lang)
            .or_default()
            .insert(key.into(), text.into());
    }

    pub fn get(&self, lang: Language, key: &str) -> Option<&str> {
        self.messages.get(&lang)?.get(key).map(String::as_str)
    }

    /// Message for `key` in `lang`, else in `fallback`, else the key itself.
    pub fn translate<'a>(&'a self, lang: Language, fallback: Language, key: &'a str) -> &'a str {
        if let Some(text) = self.get(lang, key) {
            return text;
        }
        if let Some(text) = self.get(fallback, key) {
            debug!(%lang, %fallback, key, "missing translation, using fallback language");
            return text;
        }
        debug!(%lang, key, "missing translation");
        key
    }
}

/// Translate `key` with the built-in catalog and the configured fallback language.
pub fn translate<'a>(lang: Language, key: &'a str) -> &'a str {
    let fallback = settings().localization.fallback_language;
    Catalog::builtin().translate(lang, fallback, key)
}
