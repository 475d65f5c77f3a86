//! Collaborator-facing functions: plain calls a UI or localization layer can
//! make without touching the core module structure.

mod types;

pub use types::EthioError;

use std::path::Path;

use time::Date;

use ethio_core::calendar::{self, EthiopianDate, EthiopianDateComponents};
use ethio_core::locale::{self, Language};
use ethio_core::numeral;
use ethio_core::transliterate::{self, GlyphMap, TransliterationState};

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

/// Formatted Ethiopian date, e.g. `"Meskerem 1, 2018"` or `"መስከረም 1, 2018"`.
pub fn to_ethiopian_date(date: Date, lang: Language) -> Result<String, EthioError> {
    Ok(to_ethiopian_date_components(date, lang)?.full_date)
}

pub fn to_ethiopian_date_components(
    date: Date,
    lang: Language,
) -> Result<EthiopianDateComponents, EthioError> {
    Ok(calendar::to_ethiopian_components(date, lang.script())?)
}

pub fn to_gregorian_date(year: i32, month: u8, day: u8) -> Result<Date, EthioError> {
    let date = EthiopianDate::new(year, month, day)?;
    Ok(calendar::to_gregorian(date)?)
}

pub fn current_ethiopian_date() -> Result<EthiopianDate, EthioError> {
    Ok(calendar::current_ethiopian_date()?)
}

pub fn is_ethiopian_leap_year(year: i32) -> bool {
    calendar::is_ethiopian_leap_year(year)
}

pub fn days_in_ethiopian_month(year: i32, month: u8) -> Result<u8, EthioError> {
    Ok(calendar::days_in_ethiopian_month(year, month)?)
}

// ---------------------------------------------------------------------------
// Numerals
// ---------------------------------------------------------------------------

pub fn encode_geez_numeral(value: i64) -> Result<String, EthioError> {
    Ok(numeral::encode(value)?)
}

/// Like [`encode_geez_numeral`] for callers holding a float; fractions are a domain error.
pub fn encode_geez_numeral_f64(value: f64) -> Result<String, EthioError> {
    Ok(numeral::encode_f64(value)?)
}

/// Best-effort decode. Malformed input yields an unspecified value; check
/// it with [`is_valid_geez_glyph_string`] first.
pub fn decode_geez_numeral(glyphs: &str) -> u64 {
    numeral::decode(glyphs)
}

pub fn format_geez_numeral(value: i64) -> String {
    numeral::format(value)
}

pub fn is_valid_geez_glyph_string(candidate: &str) -> bool {
    numeral::is_valid_glyph_string(candidate)
}

// ---------------------------------------------------------------------------
// Transliteration
// ---------------------------------------------------------------------------

pub fn transliterate_full_text(latin_text: &str) -> String {
    transliterate::transliterate_full_text(latin_text)
}

pub fn step_transliteration(state: TransliterationState, keystroke: char) -> TransliterationState {
    state.step(keystroke)
}

pub fn step_backspace(state: TransliterationState) -> TransliterationState {
    state.backspace()
}

// ---------------------------------------------------------------------------
// Localization
// ---------------------------------------------------------------------------

pub fn resolve_language(preferred: Option<&str>) -> Language {
    locale::resolve_language(preferred)
}

pub fn translate(lang: Language, key: &str) -> String {
    locale::translate(lang, key).to_string()
}

// ---------------------------------------------------------------------------
// Configuration and diagnostics
// ---------------------------------------------------------------------------

pub fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn read_config(path: &Path) -> Result<String, EthioError> {
    std::fs::read_to_string(path).map_err(|e| EthioError::Io {
        msg: format!("{}: {e}", path.display()),
    })
}

/// Install a custom glyph table. Must run before the first transliteration.
pub fn glyph_load_config(path: &Path) -> Result<(), EthioError> {
    let content = read_config(path)?;
    GlyphMap::init_custom(content)?;
    Ok(())
}

/// Install custom settings. Must run before the first settings lookup.
pub fn settings_load_config(path: &Path) -> Result<(), EthioError> {
    let content = read_config(path)?;
    ethio_core::settings::init_custom(content)?;
    Ok(())
}

pub fn glyph_default_config() -> String {
    transliterate::default_toml().to_string()
}

pub fn settings_default_config() -> String {
    ethio_core::settings::default_toml().to_string()
}

pub fn trace_init(log_dir: &Path) {
    crate::trace_init::init_tracing(log_dir);
}
