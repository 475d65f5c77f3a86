/// Embedded default glyph table (Amharic syllabary, vowels, punctuation).
pub const DEFAULT_TOML: &str = include_str!("default_glyphs.toml");

/// Returns the embedded default glyph TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
