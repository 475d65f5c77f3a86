//! Ethiopian calendar, Ge'ez numeral, and Ethiopic transliteration primitives.

pub mod calendar;
pub mod locale;
pub mod numeral;
pub mod settings;
pub mod transliterate;
pub mod unicode;
