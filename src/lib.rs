//! Ethiopian calendar conversion, Ge'ez numerals and Ethiopic transliteration
//! for multi-language UIs.
//!
//! The algorithms live in `ethio_core`; this crate is the flat surface a UI or
//! localization layer calls into.

pub mod api;
mod trace_init;

pub use api::*;
pub use ethio_core::calendar::{EthiopianDate, EthiopianDateComponents, GregorianDate, Script};
pub use ethio_core::locale::Language;
pub use ethio_core::transliterate::{Keystroke, TransliterationState};
pub use ethio_core::{calendar, locale, numeral, settings, transliterate, unicode};
