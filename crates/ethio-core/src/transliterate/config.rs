use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

#[derive(Deserialize)]
struct GlyphConfig {
    #[serde(default)]
    vowels: BTreeMap<String, String>,
    #[serde(default)]
    punctuation: BTreeMap<String, String>,
    #[serde(default)]
    consonants: BTreeMap<String, RowConfig>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RowConfig {
    ae: String,
    u: String,
    i: String,
    a: String,
    e: String,
    base: String,
    o: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GlyphConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[consonants] table is empty")]
    Empty,
    #[error("non-ASCII key: {0}")]
    NonAsciiKey(String),
    #[error("[{section}] key must be a single character: {key:?}")]
    InvalidKey { section: &'static str, key: String },
    #[error("value for {key} must be exactly one glyph, got {value:?}")]
    NotSingleGlyph { key: String, value: String },
    #[error("glyph {0} is mapped more than once")]
    DuplicateGlyph(char),
    #[error("key {0:?} is defined in more than one section")]
    KeyCollision(String),
    #[error("glyph map already initialized")]
    AlreadyInitialized,
}

/// One syllabary row: the seven vowel orders of a consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphRow {
    pub ae: char,
    pub u: char,
    pub i: char,
    pub a: char,
    pub e: char,
    pub base: char,
    pub o: char,
}

/// Validated glyph table. Every glyph appears exactly once across all sections.
#[derive(Debug, Clone)]
pub struct GlyphTable {
    pub vowels: BTreeMap<char, char>,
    pub punctuation: BTreeMap<char, char>,
    pub consonants: BTreeMap<String, GlyphRow>,
}

fn single_glyph(key: &str, value: &str) -> Result<char, GlyphConfigError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(GlyphConfigError::NotSingleGlyph {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

fn single_key(section: &'static str, key: &str) -> Result<char, GlyphConfigError> {
    if !key.is_ascii() {
        return Err(GlyphConfigError::NonAsciiKey(key.to_string()));
    }
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(GlyphConfigError::InvalidKey {
            section,
            key: key.to_string(),
        }),
    }
}

fn single_map(
    section: &'static str,
    raw: BTreeMap<String, String>,
) -> Result<BTreeMap<char, char>, GlyphConfigError> {
    raw.iter()
        .map(|(key, value)| -> Result<_, GlyphConfigError> {
            Ok((single_key(section, key)?, single_glyph(key, value)?))
        })
        .collect()
}

impl RowConfig {
    fn into_row(self, key: &str) -> Result<GlyphRow, GlyphConfigError> {
        let glyph = |order: &str, value: &str| single_glyph(&format!("{key}.{order}"), value);
        Ok(GlyphRow {
            ae: glyph("ae", &self.ae)?,
            u: glyph("u", &self.u)?,
            i: glyph("i", &self.i)?,
            a: glyph("a", &self.a)?,
            e: glyph("e", &self.e)?,
            base: glyph("base", &self.base)?,
            o: glyph("o", &self.o)?,
        })
    }
}

/// Parse and validate glyph-table TOML.
pub fn parse_glyph_toml(toml_str: &str) -> Result<GlyphTable, GlyphConfigError> {
    let config: GlyphConfig =
        toml::from_str(toml_str).map_err(|e| GlyphConfigError::Parse(e.to_string()))?;

    if config.consonants.is_empty() {
        return Err(GlyphConfigError::Empty);
    }

    let vowels = single_map("vowels", config.vowels)?;
    let punctuation = single_map("punctuation", config.punctuation)?;

    let mut consonants = BTreeMap::new();
    for (key, row) in config.consonants {
        if !key.is_ascii() {
            return Err(GlyphConfigError::NonAsciiKey(key));
        }
        if key.is_empty() {
            return Err(GlyphConfigError::InvalidKey {
                section: "consonants",
                key,
            });
        }
        let row = row.into_row(&key)?;
        consonants.insert(key, row);
    }

    let mut keys = HashSet::new();
    let single_keys = vowels.keys().chain(punctuation.keys()).map(char::to_string);
    for key in single_keys.chain(consonants.keys().cloned()) {
        if !keys.insert(key.clone()) {
            return Err(GlyphConfigError::KeyCollision(key));
        }
    }

    let mut seen = HashSet::new();
    let row_glyphs = consonants
        .values()
        .flat_map(|r| [r.ae, r.u, r.i, r.a, r.e, r.base, r.o]);
    let all = vowels.values().chain(punctuation.values()).copied();
    for glyph in all.chain(row_glyphs) {
        if !seen.insert(glyph) {
            return Err(GlyphConfigError::DuplicateGlyph(glyph));
        }
    }

    Ok(GlyphTable {
        vowels,
        punctuation,
        consonants,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const H_ROW: &str = r#"
[consonants.h]
ae = "ሀ"
u = "ሁ"
i = "ሂ"
a = "ሃ"
e = "ሄ"
base = "ህ"
o = "ሆ"
"#;

    #[test]
    fn parse_valid_toml() {
        let toml = format!("[vowels]\na = \"አ\"\n{H_ROW}");
        let table = parse_glyph_toml(&toml).unwrap();
        assert_eq!(table.vowels[&'a'], 'አ');
        assert_eq!(table.consonants["h"].base, 'ህ');
        assert_eq!(table.consonants["h"].u, 'ሁ');
        assert!(table.punctuation.is_empty());
    }

    #[test]
    fn parse_default_toml() {
        let table = parse_glyph_toml(super::super::table::DEFAULT_TOML).unwrap();
        assert!(
            table.consonants.len() >= 29,
            "expected 29+ rows, got {}",
            table.consonants.len()
        );
        assert_eq!(table.vowels.len(), 5);
        assert_eq!(table.punctuation[&'.'], '።');
    }

    #[test]
    fn error_empty_consonants() {
        let err = parse_glyph_toml("[vowels]\na = \"አ\"\n").unwrap_err();
        assert!(matches!(err, GlyphConfigError::Empty));
    }

    #[test]
    fn error_non_ascii_key() {
        let toml = H_ROW.replace("consonants.h", "consonants.\"ሀ\"");
        let err = parse_glyph_toml(&toml).unwrap_err();
        assert!(matches!(err, GlyphConfigError::NonAsciiKey(_)));
    }

    #[test]
    fn error_multi_char_vowel_key() {
        let toml = format!("[vowels]\naa = \"አ\"\n{H_ROW}");
        let err = parse_glyph_toml(&toml).unwrap_err();
        assert!(matches!(
            err,
            GlyphConfigError::InvalidKey {
                section: "vowels",
                ..
            }
        ));
    }

    #[test]
    fn error_not_single_glyph() {
        let toml = H_ROW.replace("base = \"ህ\"", "base = \"ህህ\"");
        let err = parse_glyph_toml(&toml).unwrap_err();
        match err {
            GlyphConfigError::NotSingleGlyph { key, .. } => assert_eq!(key, "h.base"),
            other => panic!("expected NotSingleGlyph, got {other:?}"),
        }
    }

    #[test]
    fn error_duplicate_glyph() {
        let toml = format!("[vowels]\na = \"ሀ\"\n{H_ROW}");
        let err = parse_glyph_toml(&toml).unwrap_err();
        assert!(matches!(err, GlyphConfigError::DuplicateGlyph('ሀ')));
    }

    #[test]
    fn error_key_collision() {
        let toml = format!("[vowels]\nh = \"አ\"\n{H_ROW}");
        let err = parse_glyph_toml(&toml).unwrap_err();
        assert!(matches!(err, GlyphConfigError::KeyCollision(ref k) if k == "h"));
    }

    #[test]
    fn error_missing_order() {
        let toml = H_ROW.replace("o = \"ሆ\"\n", "");
        let err = parse_glyph_toml(&toml).unwrap_err();
        assert!(matches!(err, GlyphConfigError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_glyph_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, GlyphConfigError::Parse(_)));
    }
}
