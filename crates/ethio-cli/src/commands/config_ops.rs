use std::fs;

use ethio_core::locale::{self, Language};
use ethio_core::settings::{parse_settings_toml, settings};
use ethio_core::transliterate::parse_glyph_toml;

use super::pad;

pub fn glyphs_export() {
    print!("{}", ethio_core::transliterate::default_toml());
}

pub fn check_glyphs(file: &str) -> Result<String, String> {
    let content = fs::read_to_string(file).map_err(|e| format!("Error reading {file}: {e}"))?;
    let table = parse_glyph_toml(&content).map_err(|e| format!("Error: {e}"))?;
    Ok(format!(
        "OK: {} consonant rows, {} vowels, {} punctuation marks",
        table.consonants.len(),
        table.vowels.len(),
        table.punctuation.len()
    ))
}

pub fn glyphs_validate(file: &str) {
    let summary = die!(check_glyphs(file), "{}");
    println!("{summary}");
}

pub fn settings_export() {
    print!("{}", ethio_core::settings::default_toml());
}

pub fn check_settings(file: &str) -> Result<String, String> {
    let content = fs::read_to_string(file).map_err(|e| format!("Error reading {file}: {e}"))?;
    let s = parse_settings_toml(&content).map_err(|e| format!("Error: {e}"))?;
    let supported: Vec<&str> = s
        .localization
        .supported_languages
        .iter()
        .map(|l| l.code())
        .collect();
    Ok(format!(
        "OK: default_language={}, fallback_language={}, supported=[{}], digraphs={}",
        s.localization.default_language,
        s.localization.fallback_language,
        supported.join(", "),
        s.transliteration.digraphs
    ))
}

pub fn settings_validate(file: &str) {
    let summary = die!(check_settings(file), "{}");
    println!("{summary}");
}

/// One line per language: code, native name, month-name script and whether
/// the active settings enable it.
pub fn render_languages() -> Vec<String> {
    let config = &settings().localization;
    Language::ALL
        .into_iter()
        .map(|lang| {
            let marker = if config.is_supported(lang) { "" } else { "  (disabled)" };
            format!(
                "{}  {}  {:?}{marker}",
                lang.code(),
                pad(lang.native_name(), 14),
                lang.script()
            )
        })
        .collect()
}

pub fn languages() {
    for line in render_languages() {
        println!("{line}");
    }
}

pub fn translate(lang: &str, key: &str) {
    let lang: Language = die!(lang.parse::<Language>(), "Error: {}");
    println!("{}", locale::translate(lang, key));
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn temp_toml(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn validate_default_glyphs() {
        let f = temp_toml(ethio_core::transliterate::DEFAULT_TOML);
        let summary = check_glyphs(f.path().to_str().unwrap()).unwrap();
        assert!(summary.starts_with("OK: "), "{summary}");
        assert!(summary.contains("5 vowels"));
    }

    #[test]
    fn validate_broken_glyphs() {
        let f = temp_toml("[consonants.h]\nbase = \"ህ\"\n");
        let err = check_glyphs(f.path().to_str().unwrap()).unwrap_err();
        assert!(err.starts_with("Error: TOML parse error"), "{err}");
    }

    #[test]
    fn validate_default_settings() {
        let f = temp_toml(ethio_core::settings::DEFAULT_SETTINGS_TOML);
        let summary = check_settings(f.path().to_str().unwrap()).unwrap();
        assert_eq!(
            summary,
            "OK: default_language=en, fallback_language=en, supported=[en, am, om, fr, ti, so], digraphs=true"
        );
    }

    #[test]
    fn validate_settings_with_unsupported_default() {
        let f = temp_toml(
            "[localization]\ndefault_language = \"am\"\nfallback_language = \"en\"\nsupported_languages = [\"en\"]\n",
        );
        let err = check_settings(f.path().to_str().unwrap()).unwrap_err();
        assert!(err.contains("localization.default_language"), "{err}");
    }

    #[test]
    fn languages_show_native_names() {
        let lines = render_languages();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("en  English"), "{}", lines[0]);
        assert!(lines[1].starts_with("am  አማርኛ"), "{}", lines[1]);
        assert!(lines[1].ends_with("Ethiopic"), "{}", lines[1]);
        assert!(lines[3].contains("Français"));
        assert!(lines.iter().all(|l| !l.contains("disabled")));
    }

    #[test]
    fn validate_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = check_settings(path.to_str().unwrap()).unwrap_err();
        assert!(err.starts_with("Error reading"), "{err}");
    }
}
