use std::collections::HashMap;
use std::sync::OnceLock;

use super::config::{parse_glyph_toml, GlyphConfigError, GlyphRow, GlyphTable};
use super::table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Vowel order within a syllabary row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelOrder {
    /// First order, the mid-central "ä".
    Ae,
    U,
    I,
    A,
    E,
    /// Sixth order: the bare consonant.
    Base,
    O,
}

impl VowelOrder {
    /// Order selected by a single vowel keystroke. A lone `e` selects the
    /// first order; `ee` is resolved by the state machine.
    pub fn from_vowel_key(key: char) -> Option<Self> {
        match key {
            'a' => Some(Self::A),
            'u' => Some(Self::U),
            'i' => Some(Self::I),
            'e' => Some(Self::Ae),
            'o' => Some(Self::O),
            _ => None,
        }
    }
}

impl GlyphRow {
    pub fn get(&self, order: VowelOrder) -> char {
        match order {
            VowelOrder::Ae => self.ae,
            VowelOrder::U => self.u,
            VowelOrder::I => self.i,
            VowelOrder::A => self.a,
            VowelOrder::E => self.e,
            VowelOrder::Base => self.base,
            VowelOrder::O => self.o,
        }
    }
}

/// What a keystroke or rendered glyph stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlyphKind {
    Consonant { key: String, order: VowelOrder },
    Vowel(char),
    Punctuation(char),
}

/// Latin key → Ethiopic glyph table together with its exact inverse.
pub struct GlyphMap {
    rows: HashMap<String, GlyphRow>,
    vowels: HashMap<char, char>,
    punctuation: HashMap<char, char>,
    inverse: HashMap<char, GlyphKind>,
}

impl GlyphMap {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), GlyphConfigError> {
        // Validate eagerly
        parse_glyph_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| GlyphConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static GlyphMap {
        static INSTANCE: OnceLock<GlyphMap> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let table = parse_glyph_toml(toml_str).expect("glyph TOML must be valid");
            GlyphMap::from_table(table)
        })
    }

    /// Build a standalone map, independent of the global one.
    pub fn from_toml(toml_str: &str) -> Result<GlyphMap, GlyphConfigError> {
        parse_glyph_toml(toml_str).map(GlyphMap::from_table)
    }

    pub fn from_table(table: GlyphTable) -> GlyphMap {
        let mut inverse = HashMap::new();
        for (&key, &glyph) in &table.vowels {
            inverse.insert(glyph, GlyphKind::Vowel(key));
        }
        for (&key, &glyph) in &table.punctuation {
            inverse.insert(glyph, GlyphKind::Punctuation(key));
        }
        for (key, row) in &table.consonants {
            for order in [
                VowelOrder::Ae,
                VowelOrder::U,
                VowelOrder::I,
                VowelOrder::A,
                VowelOrder::E,
                VowelOrder::Base,
                VowelOrder::O,
            ] {
                let kind = GlyphKind::Consonant {
                    key: key.clone(),
                    order,
                };
                inverse.insert(row.get(order), kind);
            }
        }
        GlyphMap {
            rows: table.consonants.into_iter().collect(),
            vowels: table.vowels.into_iter().collect(),
            punctuation: table.punctuation.into_iter().collect(),
            inverse,
        }
    }

    pub fn row(&self, key: &str) -> Option<&GlyphRow> {
        self.rows.get(key)
    }

    pub fn base_glyph(&self, key: &str) -> Option<char> {
        self.row(key).map(|r| r.base)
    }

    pub fn vowel_glyph(&self, key: char) -> Option<char> {
        self.vowels.get(&key).copied()
    }

    pub fn punctuation_glyph(&self, key: char) -> Option<char> {
        self.punctuation.get(&key).copied()
    }

    /// Recover the key and vowel order behind a rendered glyph.
    pub fn inverse(&self, glyph: char) -> Option<&GlyphKind> {
        self.inverse.get(&glyph)
    }

    /// Classify a single keystroke. With `case_sensitive` the exact key wins
    /// and the lowercase key is the fallback; otherwise only lowercase keys match.
    pub fn classify_key(&self, key: char, case_sensitive: bool) -> Option<(char, GlyphKind)> {
        let lower = key.to_ascii_lowercase();
        let exact = (case_sensitive && key != lower).then_some(key);
        exact
            .into_iter()
            .chain(std::iter::once(lower))
            .find_map(|k| self.classify_exact(k).map(|kind| (k, kind)))
    }

    fn classify_exact(&self, key: char) -> Option<GlyphKind> {
        let mut buf = [0u8; 4];
        if self.rows.contains_key(&*key.encode_utf8(&mut buf)) {
            return Some(GlyphKind::Consonant {
                key: key.to_string(),
                order: VowelOrder::Base,
            });
        }
        if self.vowels.contains_key(&key) {
            return Some(GlyphKind::Vowel(key));
        }
        if self.punctuation.contains_key(&key) {
            return Some(GlyphKind::Punctuation(key));
        }
        None
    }

    /// Glyph a classified keystroke renders as on its own.
    pub fn standalone_glyph(&self, kind: &GlyphKind) -> Option<char> {
        match kind {
            GlyphKind::Consonant { key, order } => self.row(key).map(|r| r.get(*order)),
            GlyphKind::Vowel(k) => self.vowel_glyph(*k),
            GlyphKind::Punctuation(k) => self.punctuation_glyph(*k),
        }
    }

    pub fn consonant_count(&self) -> usize {
        self.rows.len()
    }
}
