//! Gregorian ⇄ Ethiopian calendar conversion.
//!
//! The Ethiopian year has twelve 30-day months followed by Pagume, which has
//! 5 days, or 6 in a leap year (`year % 4 == 3`). Conversion anchors on the
//! Gregorian date of the Ethiopian New Year (Meskerem 1) and counts days from it.

mod convert;
mod names;


use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use time::{Date, Month};

pub use convert::{
    current_ethiopian_date, ethiopian_new_year, to_ethiopian, to_ethiopian_components,
    to_gregorian,
};
pub use names::{
    format_ethiopian_date, month_name, month_names, weekday_name, weekday_names, Script,
};

/// Number of regular 30-day months before Pagume.
pub const REGULAR_MONTHS: u8 = 12;
pub const DAYS_PER_MONTH: u8 = 30;
pub const PAGUME: u8 = 13;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("invalid Ethiopian month {0} (expected 1..=13)")]
    InvalidMonth(u8),
    #[error("invalid day {day} for month {month} of Ethiopian year {year}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[error("invalid Gregorian date: {0}")]
    InvalidGregorian(String),
    #[error("conversion produced month {month}, day {day}, outside the calendar")]
    RangeInconsistency { month: i64, day: i64 },
}

impl CalendarError {
    /// Bad caller input, as opposed to an internal conversion defect.
    pub fn is_domain(&self) -> bool {
        !matches!(self, Self::RangeInconsistency { .. })
    }
}

pub fn is_ethiopian_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 3
}

/// Length of Pagume in `year`.
pub fn pagume_length(year: i32) -> u8 {
    if is_ethiopian_leap_year(year) {
        6
    } else {
        5
    }
}

/// Number of days in `month` of Ethiopian `year`.
pub fn days_in_ethiopian_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    match month {
        1..=REGULAR_MONTHS => Ok(DAYS_PER_MONTH),
        PAGUME => Ok(pagume_length(year)),
        _ => Err(CalendarError::InvalidMonth(month)),
    }
}

/// A validated Ethiopian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EthiopianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl EthiopianDate {
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let days = days_in_ethiopian_month(year, month)?;
        if day == 0 || day > days {
            return Err(CalendarError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Zero-based day index counted from Meskerem 1.
    pub fn day_of_year(&self) -> u16 {
        u16::from(self.month - 1) * u16::from(DAYS_PER_MONTH) + u16::from(self.day - 1)
    }

    pub fn is_leap_year(&self) -> bool {
        is_ethiopian_leap_year(self.year)
    }
}

impl fmt::Display for EthiopianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Structured conversion result with the rendered month name and full date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EthiopianDateComponents {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub month_name: &'static str,
    pub full_date: String,
}

/// Proleptic Gregorian civil date as received at the system boundary.
///
/// Parsed from `YYYY-MM-DD` and validated into a [`time::Date`] before any
/// conversion runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GregorianDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl GregorianDate {
    pub fn to_date(self) -> Result<Date, CalendarError> {
        let month = Month::try_from(self.month)
            .map_err(|e| CalendarError::InvalidGregorian(e.to_string()))?;
        Date::from_calendar_date(self.year, month, self.day)
            .map_err(|e| CalendarError::InvalidGregorian(e.to_string()))
    }
}

impl From<Date> for GregorianDate {
    fn from(date: Date) -> Self {
        Self {
            year: date.year(),
            month: u8::from(date.month()),
            day: date.day(),
        }
    }
}

impl TryFrom<GregorianDate> for Date {
    type Error = CalendarError;

    fn try_from(value: GregorianDate) -> Result<Self, Self::Error> {
        value.to_date()
    }
}

impl FromStr for GregorianDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidGregorian(format!("expected YYYY-MM-DD, got {s:?}"));
        // A leading '-' belongs to the year, so split from the right.
        let mut parts = s.trim().rsplitn(3, '-');
        let day = parts.next().ok_or_else(invalid)?;
        let month = parts.next().ok_or_else(invalid)?;
        let year = parts.next().ok_or_else(invalid)?;
        let date = Self {
            year: year.parse().map_err(|_| invalid())?,
            month: month.parse().map_err(|_| invalid())?,
            day: day.parse().map_err(|_| invalid())?,
        };
        date.to_date()?;
        Ok(date)
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
