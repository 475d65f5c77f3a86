use ethio_core::calendar::CalendarError;
use ethio_core::locale::LocaleError;
use ethio_core::numeral::NumeralError;
use ethio_core::settings::SettingsError;
use ethio_core::transliterate::GlyphConfigError;

/// Single error type surfaced to collaborators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EthioError {
    /// Caller input outside the legal range.
    #[error("domain error: {msg}")]
    Domain { msg: String },
    /// A conversion produced an out-of-bounds result. Indicates a defect, not bad input.
    #[error("range inconsistency: {msg}")]
    RangeInconsistency { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("IO error: {msg}")]
    Io { msg: String },
}

impl From<CalendarError> for EthioError {
    fn from(e: CalendarError) -> Self {
        let msg = e.to_string();
        if e.is_domain() {
            EthioError::Domain { msg }
        } else {
            EthioError::RangeInconsistency { msg }
        }
    }
}

impl From<NumeralError> for EthioError {
    fn from(e: NumeralError) -> Self {
        EthioError::Domain { msg: e.to_string() }
    }
}

impl From<LocaleError> for EthioError {
    fn from(e: LocaleError) -> Self {
        EthioError::Domain { msg: e.to_string() }
    }
}

impl From<GlyphConfigError> for EthioError {
    fn from(e: GlyphConfigError) -> Self {
        EthioError::InvalidData { msg: e.to_string() }
    }
}

impl From<SettingsError> for EthioError {
    fn from(e: SettingsError) -> Self {
        EthioError::InvalidData { msg: e.to_string() }
    }
}
