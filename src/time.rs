//! Calendar and time-of-day calculations.
//!
//! Provides the proleptic Gregorian [`CalendarDate`], the ordinal day-of-year
//! used by the declination formula, and the conversion of decimal hours into
//! a [`ClockTime`].

use core::fmt;
use core::str::FromStr;

use crate::math::floor;
use crate::types::ClockTime;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::Datelike;

/// Days elapsed before the first of each month in a common year.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: i64 = 86_400;

/// A date in the proleptic Gregorian calendar, without a time of day.
///
/// Construction validates the month and the day against the month's length,
/// so every `CalendarDate` maps to exactly one ordinal day of its year.
///
/// # Example
/// ```
/// # use simple_sunrise::time::CalendarDate;
/// let date = CalendarDate::new(2015, 11, 16).unwrap();
/// assert_eq!(date.day_of_year(), 320);
///
/// let parsed: CalendarDate = "15/04/2013".parse().unwrap();
/// assert_eq!(parsed, CalendarDate::new(2013, 4, 15).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Creates a calendar date from year, month and day.
    ///
    /// # Arguments
    /// * `year` - Year (proleptic Gregorian, may be zero or negative)
    /// * `month` - Month (1-12)
    /// * `day` - Day of month (1 to the month's length)
    ///
    /// # Errors
    /// Returns `InvalidDate` if the month is outside 1-12 or the day does not exist in that month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_date("month must be between 1 and 12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::invalid_date("day is out of range for month"));
        }
        Ok(Self { year, month, day })
    }

    /// Creates a calendar date from any chrono date-like value.
    ///
    /// Only the calendar fields are used; any time-of-day or timezone is ignored.
    ///
    /// # Errors
    /// Never fails for dates produced by chrono; the signature mirrors [`CalendarDate::new`].
    #[cfg(feature = "chrono")]
    pub fn from_date_like<D: Datelike>(date: &D) -> Result<Self> {
        Self::new(date.year(), date.month(), date.day())
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Gets the 1-based ordinal day within the year (1 to 365, or 366 in leap years).
    #[must_use]
    pub fn day_of_year(&self) -> u32 {
        day_of_year(*self)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}-{:02}-{:02}", -i64::from(self.year), self.month, self.day)
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    /// Parses `DD/MM/YYYY` or ISO `YYYY-MM-DD` (with an optional leading `-` for negative years).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.contains('/') {
            let [day, month, year] = split_three(s, '/')?;
            return Self::new(parse_field(year)?, parse_field(month)?, parse_field(day)?);
        }

        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let [year, month, day] = split_three(rest, '-')?;
        let year: i32 = parse_field(year)?;
        let year = if negative { -year } else { year };
        Self::new(year, parse_field(month)?, parse_field(day)?)
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for CalendarDate {
    fn from(date: chrono::NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

fn split_three(s: &str, separator: char) -> Result<[&str; 3]> {
    let mut parts = s.split(separator);
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), Some(c), None) => Ok([a, b, c]),
        _ => Err(Error::invalid_date("expected DD/MM/YYYY or YYYY-MM-DD")),
    }
}

fn parse_field<T: FromStr>(field: &str) -> Result<T> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::invalid_date("date fields must be decimal digits"));
    }
    field
        .parse()
        .map_err(|_| Error::invalid_date("date field out of range"))
}

/// Checks whether a year is a leap year in the proleptic Gregorian calendar.
///
/// # Example
/// ```
/// # use simple_sunrise::time::is_leap_year;
/// assert!(is_leap_year(2024));
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// ```
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Gets the number of days in a month, or 0 if the month is outside 1-12.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Gets the 1-based ordinal position of a date within its year.
///
/// January 1 is day 1; December 31 is day 365, or 366 in leap years.
#[must_use]
pub fn day_of_year(date: CalendarDate) -> u32 {
    let leap_day = u32::from(date.month > 2 && is_leap_year(date.year));
    DAYS_BEFORE_MONTH[(date.month - 1) as usize] + leap_day + date.day
}

/// Hours since local midnight, before normalization to a single day.
///
/// Negative values fall on the previous day, values of 24 or more on the next.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub(crate) struct DecimalHour(f64);

impl DecimalHour {
    pub(crate) const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    pub(crate) const fn hours(self) -> f64 {
        self.0
    }

    pub(crate) fn to_clock_time(self) -> ClockTime {
        decimal_to_time(self.0)
    }
}

/// Converts decimal hours since midnight into a clock time.
///
/// The value is floored once to whole seconds, wrapped into one day
/// (`floor(h * 3600) mod 86400`) and split into hour, minute and second, so
/// the three fields always describe the same instant. Inputs outside `[0, 24)`
/// wrap around midnight. Non-finite input yields midnight.
///
/// # Example
/// ```
/// # use simple_sunrise::time::decimal_to_time;
/// assert_eq!(decimal_to_time(1.0).to_string(), "01:00:00");
/// assert_eq!(decimal_to_time(23.45).to_string(), "23:27:00");
/// assert_eq!(decimal_to_time(-0.5).to_string(), "23:30:00");
/// assert_eq!(decimal_to_time(24.25).to_string(), "00:15:00");
/// ```
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn decimal_to_time(decimal: f64) -> ClockTime {
    if !decimal.is_finite() {
        return ClockTime::MIDNIGHT;
    }

    let total = (floor(decimal * SECONDS_PER_HOUR) as i64).rem_euclid(SECONDS_PER_DAY);

    ClockTime::from_parts(
        (total / 3_600) as u32,
        (total / 60 % 60) as u32,
        (total % 60) as u32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_date_creation() {
        let date = CalendarDate::new(2013, 4, 15).unwrap();
        assert_eq!(date.year(), 2013);
        assert_eq!(date.month(), 4);
        assert_eq!(date.day(), 15);

        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert!(CalendarDate::new(-44, 3, 15).is_ok());
    }

    #[test]
    fn test_calendar_date_validation() {
        assert!(CalendarDate::new(2023, 0, 1).is_err());
        assert!(CalendarDate::new(2023, 13, 1).is_err());
        assert!(CalendarDate::new(2023, 1, 0).is_err());
        assert!(CalendarDate::new(2023, 2, 29).is_err());
        assert!(CalendarDate::new(1900, 2, 29).is_err());
        assert!(CalendarDate::new(2023, 4, 31).is_err());
    }

    #[test]
    fn test_proleptic_calendar_has_no_gap() {
        // The Julian-to-Gregorian switch is not modelled.
        assert!(CalendarDate::new(1582, 10, 10).is_ok());
        assert_eq!(CalendarDate::new(1582, 10, 10).unwrap().day_of_year(), 283);
    }

    #[test]
    fn test_day_of_year() {
        let cases = [
            ((2015, 11, 16), 320),
            ((2013, 4, 15), 105),
            ((2023, 1, 1), 1),
            ((2023, 12, 31), 365),
            ((2024, 12, 31), 366),
            ((2024, 2, 29), 60),
            ((2024, 3, 1), 61),
            ((2023, 3, 1), 60),
            ((2000, 12, 31), 366),
            ((1900, 12, 31), 365),
        ];

        for ((year, month, day), expected) in cases {
            let date = CalendarDate::new(year, month, day).unwrap();
            assert_eq!(day_of_year(date), expected, "{date}");
        }
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));

        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 13), 0);
    }

    #[test]
    fn test_parse_legacy_format() {
        let date: CalendarDate = "15/04/2013".parse().unwrap();
        assert_eq!(date, CalendarDate::new(2013, 4, 15).unwrap());

        let date: CalendarDate = " 1/1/2000 ".parse().unwrap();
        assert_eq!(date, CalendarDate::new(2000, 1, 1).unwrap());
    }

    #[test]
    fn test_parse_iso_format() {
        let date: CalendarDate = "2015-11-16".parse().unwrap();
        assert_eq!(date, CalendarDate::new(2015, 11, 16).unwrap());

        let date: CalendarDate = "-0044-03-15".parse().unwrap();
        assert_eq!(date.year(), -44);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for text in [
            "",
            "2013",
            "15/04",
            "15/04/2013/1",
            "31/02/2013",
            "aa/bb/cccc",
            "+15/04/2013",
            "2013-4-x",
            "2013--04-15",
        ] {
            assert!(text.parse::<CalendarDate>().is_err(), "{text:?}");
        }
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_display_round_trips_through_parse() {
        let date = CalendarDate::new(2013, 4, 15).unwrap();
        assert_eq!(date.to_string(), "2013-04-15");
        assert_eq!(date.to_string().parse::<CalendarDate>().unwrap(), date);

        let ancient = CalendarDate::new(-44, 3, 15).unwrap();
        assert_eq!(ancient.to_string(), "-0044-03-15");
    }

    #[test]
    fn test_decimal_to_time_basic() {
        assert_eq!(decimal_to_time(0.0), ClockTime::from_parts(0, 0, 0));
        assert_eq!(decimal_to_time(1.0), ClockTime::from_parts(1, 0, 0));
        assert_eq!(decimal_to_time(12.5), ClockTime::from_parts(12, 30, 0));
        assert_eq!(decimal_to_time(23.45), ClockTime::from_parts(23, 27, 0));
        assert_eq!(
            decimal_to_time(6.638_917_237_786_099),
            ClockTime::from_parts(6, 38, 20)
        );
    }

    #[test]
    fn test_decimal_to_time_truncates() {
        // 59.9 seconds past the minute stays in that minute
        let decimal = 10.0 + 59.9 / 3600.0;
        assert_eq!(decimal_to_time(decimal), ClockTime::from_parts(10, 0, 59));

        let just_before_midnight = 24.0 - 0.1 / 3600.0;
        assert_eq!(
            decimal_to_time(just_before_midnight),
            ClockTime::from_parts(23, 59, 59)
        );

        // 4.35 h is a hair below 4:21:00 in binary, so every field floors
        assert_eq!(decimal_to_time(4.35), ClockTime::from_parts(4, 20, 59));
        assert_eq!(
            decimal_to_time(1.083_333_333_333_333_3),
            ClockTime::from_parts(1, 4, 59)
        );
    }

    #[test]
    fn test_decimal_to_time_wraps_outside_day() {
        assert_eq!(decimal_to_time(-0.5), ClockTime::from_parts(23, 30, 0));
        assert_eq!(decimal_to_time(-0.25), ClockTime::from_parts(23, 45, 0));
        assert_eq!(decimal_to_time(24.0), ClockTime::from_parts(0, 0, 0));
        assert_eq!(decimal_to_time(24.25), ClockTime::from_parts(0, 15, 0));
        assert_eq!(decimal_to_time(49.75), ClockTime::from_parts(1, 45, 0));
        assert_eq!(decimal_to_time(-25.5), ClockTime::from_parts(22, 30, 0));
    }

    #[test]
    fn test_decimal_to_time_non_finite() {
        assert_eq!(decimal_to_time(f64::NAN), ClockTime::MIDNIGHT);
        assert_eq!(decimal_to_time(f64::INFINITY), ClockTime::MIDNIGHT);
    }

    #[test]
    fn test_decimal_hour() {
        let sunrise = DecimalHour::from_hours(-0.129_510_112_930_319_78);
        assert!(sunrise.hours() < 0.0);
        assert_eq!(sunrise.to_clock_time(), ClockTime::from_parts(23, 52, 13));
    }
}
