use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::Date;

use super::EthiopianDate;

/// Which month/weekday name table to render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// Latin transliteration ("Meskerem").
    #[default]
    Latin,
    /// Native Ethiopic script ("መስከረም").
    Ethiopic,
}

impl FromStr for Script {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latin" | "en" => Ok(Self::Latin),
            "ethiopic" | "am" => Ok(Self::Ethiopic),
            other => Err(format!("unknown script: {other}")),
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Latin => "latin",
            Self::Ethiopic => "ethiopic",
        })
    }
}

const MONTHS_LATIN: [&str; 13] = [
    "Meskerem", "Tikimt", "Hidar", "Tahsas", "Tir", "Yekatit", "Megabit", "Miazia", "Genbot",
    "Sene", "Hamle", "Nehase", "Pagume",
];

const MONTHS_ETHIOPIC: [&str; 13] = [
    "መስከረም",
    "ጥቅምት",
    "ህዳር",
    "ታህሳስ",
    "ጥር",
    "የካቲት",
    "መጋቢት",
    "ሚያዝያ",
    "ግንቦት",
    "ሰኔ",
    "ሐምሌ",
    "ነሐሴ",
    "ጳጉሜ",
];

// Sunday first, matching `Weekday::number_days_from_sunday`.
const WEEKDAYS_LATIN: [&str; 7] = [
    "Ehud", "Segno", "Maksegno", "Rebu", "Hamus", "Arb", "Kidame",
];

const WEEKDAYS_ETHIOPIC: [&str; 7] = ["እሑድ", "ሰኞ", "ማክሰኞ", "ረቡዕ", "ሐሙስ", "ዓርብ", "ቅዳሜ"];

pub fn month_names(script: Script) -> &'static [&'static str; 13] {
    match script {
        Script::Latin => &MONTHS_LATIN,
        Script::Ethiopic => &MONTHS_ETHIOPIC,
    }
}

/// Name of Ethiopian `month` (1..=13), or `None` outside that range.
pub fn month_name(script: Script, month: u8) -> Option<&'static str> {
    let index = usize::from(month).checked_sub(1)?;
    month_names(script).get(index).copied()
}

pub fn weekday_names(script: Script) -> &'static [&'static str; 7] {
    match script {
        Script::Latin => &WEEKDAYS_LATIN,
        Script::Ethiopic => &WEEKDAYS_ETHIOPIC,
    }
}

/// Weekday name for a Gregorian date. Weekdays are shared by both calendars.
pub fn weekday_name(date: Date, script: Script) -> &'static str {
    weekday_names(script)[usize::from(date.weekday().number_days_from_sunday())]
}

/// Render as `"<MonthName> <day>, <year>"`.
pub fn format_ethiopian_date(date: &EthiopianDate, script: Script) -> String {
    // EthiopianDate is validated on construction, so the month is always in the table.
    let name = month_name(script, date.month()).unwrap_or_default();
    format!("{} {}, {}", name, date.day(), date.year())
}
