//! Global settings loaded from TOML, following the same OnceLock pattern as the glyph map.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::locale::Language;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub localization: LocalizationSettings,
    #[serde(default)]
    pub transliteration: TransliterationSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalizationSettings {
    pub default_language: Language,
    pub fallback_language: Language,
    pub supported_languages: Vec<Language>,
}

impl LocalizationSettings {
    pub fn is_supported(&self, lang: Language) -> bool {
        self.supported_languages.contains(&lang)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransliterationSettings {
    pub case_sensitive: bool,
    pub digraphs: bool,
}

impl Default for TransliterationSettings {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            digraphs: true,
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    let loc = &s.localization;
    if loc.supported_languages.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "localization.supported_languages".to_string(),
            reason: "must list at least one language".to_string(),
        });
    }

    macro_rules! check_supported {
        ($field:ident) => {
            if !loc.is_supported(loc.$field) {
                return Err(SettingsError::InvalidValue {
                    field: concat!("localization.", stringify!($field)).to_string(),
                    reason: format!("{} is not in supported_languages", loc.$field.code()),
                });
            }
        };
    }

    check_supported!(default_language);
    check_supported!(fallback_language);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.localization.default_language, Language::En);
        assert_eq!(s.localization.fallback_language, Language::En);
        assert_eq!(s.localization.supported_languages.len(), 6);
        assert!(s.localization.is_supported(Language::Am));
        assert!(!s.transliteration.case_sensitive);
        assert!(s.transliteration.digraphs);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[localization]
default_language = "am"
fallback_language = "en"
supported_languages = ["am", "en"]

[transliteration]
digraphs = false
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.localization.default_language, Language::Am);
        assert!(!s.localization.is_supported(Language::Fr));
        assert!(!s.transliteration.digraphs);
        // omitted fields keep their defaults
        assert!(!s.transliteration.case_sensitive);
    }

    #[test]
    fn transliteration_section_is_optional() {
        let toml = r#"
[localization]
default_language = "en"
fallback_language = "en"
supported_languages = ["en"]
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.transliteration, TransliterationSettings::default());
    }

    #[test]
    fn error_default_not_supported() {
        let toml = r#"
[localization]
default_language = "fr"
fallback_language = "en"
supported_languages = ["en", "am"]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("localization.default_language"));
    }

    #[test]
    fn error_fallback_not_supported() {
        let toml = r#"
[localization]
default_language = "en"
fallback_language = "ti"
supported_languages = ["en"]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("localization.fallback_language"));
    }

    #[test]
    fn error_empty_supported_list() {
        let toml = r#"
[localization]
default_language = "en"
fallback_language = "en"
supported_languages = []
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("supported_languages"));
    }

    #[test]
    fn error_unknown_language() {
        let toml = r#"
[localization]
default_language = "xx"
fallback_language = "en"
supported_languages = ["en"]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
