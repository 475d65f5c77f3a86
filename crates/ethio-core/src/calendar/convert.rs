use time::macros::time;
use time::util::is_leap_year;
use time::{Date, Duration, Month, OffsetDateTime, Time};
use tracing::{debug, debug_span};

use super::names::{format_ethiopian_date, month_name, Script};
use super::{
    pagume_length, CalendarError, EthiopianDate, EthiopianDateComponents, DAYS_PER_MONTH, PAGUME,
    REGULAR_MONTHS,
};

/// Gregorian year minus this is the Ethiopian year from Meskerem 1 onwards.
const YEAR_OFFSET_AFTER_NEW_YEAR: i32 = 7;
const YEAR_OFFSET_BEFORE_NEW_YEAR: i32 = 8;

const DAYS_BEFORE_PAGUME: i64 = REGULAR_MONTHS as i64 * DAYS_PER_MONTH as i64;

/// Day differences are taken between instants pinned to 12:00 UTC so that
/// no offset or DST transition can shift a date across midnight.
const NOON: Time = time!(12:00);

fn at_noon_utc(date: Date) -> OffsetDateTime {
    date.with_time(NOON).assume_utc()
}

/// Gregorian date of the Ethiopian New Year (Meskerem 1) falling in
/// `gregorian_year`: September 12 in Gregorian leap years, September 11 otherwise.
pub fn ethiopian_new_year(gregorian_year: i32) -> Result<Date, CalendarError> {
    let day = if is_leap_year(gregorian_year) { 12 } else { 11 };
    Date::from_calendar_date(gregorian_year, Month::September, day)
        .map_err(|e| CalendarError::InvalidGregorian(e.to_string()))
}

/// Convert a Gregorian date to the Ethiopian calendar.
///
/// Dates before the current Gregorian year's New Year belong to the Ethiopian
/// year that began the previous September. A day count past the end of Pagume
/// rolls into Meskerem of the following Ethiopian year.
pub fn to_ethiopian(date: Date) -> Result<EthiopianDate, CalendarError> {
    let _span = debug_span!("to_ethiopian", %date).entered();
    let year = date.year();
    let input = at_noon_utc(date);
    let new_year = ethiopian_new_year(year)?;

    let (eth_year, anchor) = if input >= at_noon_utc(new_year) {
        (year - YEAR_OFFSET_AFTER_NEW_YEAR, new_year)
    } else {
        (
            year - YEAR_OFFSET_BEFORE_NEW_YEAR,
            ethiopian_new_year(year - 1)?,
        )
    };

    let days = (input - at_noon_utc(anchor)).whole_days();
    let dpm = i64::from(DAYS_PER_MONTH);
    let (eth_year, month, day) = if days < DAYS_BEFORE_PAGUME {
        (eth_year, days / dpm + 1, days % dpm + 1)
    } else {
        let pagume_days = days - DAYS_BEFORE_PAGUME;
        let pagume_len = i64::from(pagume_length(eth_year));
        if pagume_days < pagume_len {
            (eth_year, i64::from(PAGUME), pagume_days + 1)
        } else {
            debug!(eth_year, pagume_days, "past end of Pagume, rolling into next year");
            (eth_year + 1, 1, pagume_days - pagume_len + 1)
        }
    };

    let inconsistent = || CalendarError::RangeInconsistency { month, day };
    let (m, d) = match (u8::try_from(month), u8::try_from(day)) {
        (Ok(m), Ok(d)) => (m, d),
        _ => return Err(inconsistent()),
    };
    EthiopianDate::new(eth_year, m, d).map_err(|_| inconsistent())
}

/// Convert a Gregorian date and render it in `script`.
pub fn to_ethiopian_components(
    date: Date,
    script: Script,
) -> Result<EthiopianDateComponents, CalendarError> {
    let eth = to_ethiopian(date)?;
    let name = month_name(script, eth.month()).ok_or(CalendarError::RangeInconsistency {
        month: i64::from(eth.month()),
        day: i64::from(eth.day()),
    })?;
    Ok(EthiopianDateComponents {
        year: eth.year(),
        month: eth.month(),
        day: eth.day(),
        month_name: name,
        full_date: format_ethiopian_date(&eth, script),
    })
}

/// Convert an Ethiopian date back to Gregorian, anchored on the same New Year
/// rule as [`to_ethiopian`].
pub fn to_gregorian(date: EthiopianDate) -> Result<Date, CalendarError> {
    let _span = debug_span!("to_gregorian", %date).entered();
    let gregorian_year = date
        .year()
        .checked_add(YEAR_OFFSET_AFTER_NEW_YEAR)
        .ok_or_else(|| CalendarError::InvalidGregorian(format!("year {} overflows", date.year())))?;
    let anchor = ethiopian_new_year(gregorian_year)?;
    anchor
        .checked_add(Duration::days(i64::from(date.day_of_year())))
        .ok_or_else(|| {
            CalendarError::InvalidGregorian(format!("{date} is outside the supported range"))
        })
}

/// Today's Ethiopian date in the local time zone, or UTC when the local
/// offset cannot be determined.
pub fn current_ethiopian_date() -> Result<EthiopianDate, CalendarError> {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    to_ethiopian(now.date())
}
