//! Latin-keystroke to Ethiopic transliteration.
//!
//! A TOML glyph table maps consonant keys to the seven vowel orders of a
//! syllabary row. The session state machine appends a consonant's bare form
//! and replaces it with the fused syllable when a vowel follows, so one
//! syllable is always one rendered glyph.

mod config;
mod glyph_map;
mod state;
mod table;

pub use config::{parse_glyph_toml, GlyphConfigError, GlyphRow, GlyphTable};
pub use glyph_map::{GlyphKind, GlyphMap, VowelOrder};
pub use state::{
    transliterate_full_text, transliterate_with, Keystroke, Phase, TransliterationState,
};
pub use table::{default_toml, DEFAULT_TOML};
