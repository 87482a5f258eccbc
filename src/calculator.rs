//! Sunrise and sunset from the simplified solar declination formula.
//!
//! The calculation runs in a fixed order:
//!
//! 1. ordinal day of the year ([`crate::time::day_of_year`])
//! 2. solar declination for that day ([`solar_declination`])
//! 3. sunshine duration at the latitude ([`sunshine_duration`])
//! 4. offset of the longitude from its 15° zone meridian ([`longitude_correction`])
//! 5. sunrise/sunset as decimal hours around noon, converted to clock times
//!
//! Step 4 depends on the longitude only. The declination formula ignores the
//! equation of time and leap-year drift, so results are accurate to a few
//! minutes at best.

use crate::error::check_hour_angle_argument;
use crate::math::{acos, degrees_to_radians, radians_to_degrees, sin, tan, trunc};
use crate::time::{CalendarDate, DecimalHour, day_of_year};
use crate::types::{SolarInput, SolarResult};
use crate::Result;
#[cfg(feature = "chrono")]
use chrono::Datelike;

/// Maximum declination in degrees (Earth's axial tilt).
pub const AXIAL_TILT: f64 = 23.45;

/// Day offset that puts the declination's zero crossing at the March equinox.
const EQUINOX_OFFSET_DAYS: f64 = 284.0;

const DAYS_PER_YEAR: f64 = 365.0;

/// Degrees of longitude per hour of solar time.
const DEGREES_PER_HOUR: f64 = 15.0;

/// Minutes of solar time per degree of longitude.
const MINUTES_PER_DEGREE: f64 = 4.0;

const NOON: f64 = 12.0;

/// Calculates the solar declination in degrees for an ordinal day of the year.
///
/// Uses `δ = 23.45° · sin(360/365 · (284 + d))`. The result lies within
/// ±[`AXIAL_TILT`]. The formula assumes a 365-day year, so day 366 repeats
/// day 1 and the values at the year boundary do not join up smoothly.
///
/// # Example
/// ```
/// # use simple_sunrise::calculator::solar_declination;
/// // Near the June solstice
/// assert!((solar_declination(172) - 23.45).abs() < 0.01);
/// // Near the March equinox
/// assert!(solar_declination(81).abs() < 0.5);
/// ```
#[must_use]
pub fn solar_declination(day_of_year: u32) -> f64 {
    let angle = 360.0 / DAYS_PER_YEAR * (EQUINOX_OFFSET_DAYS + f64::from(day_of_year));
    AXIAL_TILT * sin(degrees_to_radians(angle))
}

/// Calculates how many hours the sun spends above the horizon.
///
/// `duration = 2/15 · arccos(-tan δ · tan φ)` with the arccos taken in degrees.
///
/// # Arguments
/// * `declination` - Solar declination in degrees
/// * `latitude` - Observer latitude in degrees
///
/// # Errors
/// Returns `UndefinedSolarGeometry` when the sun stays above (polar day) or
/// below (polar night) the horizon for the whole day.
///
/// # Example
/// ```
/// # use simple_sunrise::calculator::sunshine_duration;
/// let equator = sunshine_duration(23.45, 0.0).unwrap();
/// assert!((equator - 12.0).abs() < 1e-9);
///
/// let arctic_summer = sunshine_duration(23.45, 80.0).unwrap_err();
/// assert!(arctic_summer.is_polar_day());
/// ```
pub fn sunshine_duration(declination: f64, latitude: f64) -> Result<f64> {
    let x = tan(degrees_to_radians(declination));
    let y = tan(degrees_to_radians(latitude));
    let argument = -x * y;
    log::trace!(
        "hour angle argument {argument} (declination {declination}°, latitude {latitude}°)"
    );

    let argument = check_hour_angle_argument(argument).inspect_err(|err| {
        log::debug!(
            "no sunrise/sunset at latitude {latitude}° with declination {declination}°: {err}"
        );
    })?;

    Ok(2.0 / DEGREES_PER_HOUR * radians_to_degrees(acos(argument)))
}

/// Calculates half the sunshine duration, i.e. the hours from sunrise to solar noon.
///
/// # Errors
/// Returns `UndefinedSolarGeometry` for polar day or polar night.
pub fn half_day_length(declination: f64, latitude: f64) -> Result<f64> {
    Ok(sunshine_duration(declination, latitude)? / 2.0)
}

/// Gets the index of the nominal 15° timezone containing a longitude.
///
/// The index is truncated toward zero, so longitudes within ±15° of Greenwich
/// all fall in zone 0.
///
/// # Example
/// ```
/// # use simple_sunrise::calculator::timezone_offset;
/// assert_eq!(timezone_offset(52.1421448), 3);
/// assert_eq!(timezone_offset(-3.7), 0);
/// assert_eq!(timezone_offset(-122.4), -8);
/// ```
#[must_use]
pub fn timezone_offset(longitude: f64) -> i32 {
    trunc(longitude / DEGREES_PER_HOUR) as i32
}

/// Gets the central meridian, in degrees, of the longitude's nominal timezone.
#[must_use]
pub fn timezone_meridian(longitude: f64) -> f64 {
    trunc(longitude / DEGREES_PER_HOUR) * DEGREES_PER_HOUR
}

/// Calculates the hours between solar noon at a longitude and noon on its zone meridian.
///
/// Each degree east of the meridian moves solar time forward by four minutes.
/// The result has the sign of the longitude and is always within (-1, 1).
///
/// # Example
/// ```
/// # use simple_sunrise::calculator::longitude_correction;
/// assert!((longitude_correction(52.5) - 0.5).abs() < 1e-12);
/// assert!((longitude_correction(-7.5) + 0.5).abs() < 1e-12);
/// assert_eq!(longitude_correction(45.0), 0.0);
/// ```
#[must_use]
pub fn longitude_correction(longitude: f64) -> f64 {
    (longitude - timezone_meridian(longitude)) * MINUTES_PER_DEGREE / 60.0
}

/// Decimal-hour events of one day, before conversion to clock times.
struct SunDecimals {
    sunrise: DecimalHour,
    noon: DecimalHour,
    sunset: DecimalHour,
    duration: f64,
}

fn sun_decimals(input: &SolarInput) -> Result<SunDecimals> {
    let location = input.location();
    let day = day_of_year(input.date());
    let declination = solar_declination(day);
    let duration = sunshine_duration(declination, location.latitude())?;
    let half = duration / 2.0;
    let correction = longitude_correction(location.longitude());

    log::trace!(
        "day {day}: declination {declination}°, sunshine {duration} h, correction {correction} h"
    );

    Ok(SunDecimals {
        sunrise: DecimalHour::from_hours(NOON - half + correction),
        noon: DecimalHour::from_hours(NOON + correction),
        sunset: DecimalHour::from_hours(NOON + half + correction),
        duration,
    })
}

/// Calculates sunrise and sunset for a validated input.
///
/// # Errors
/// Returns `UndefinedSolarGeometry` for polar day or polar night.
pub fn compute(input: SolarInput) -> Result<SolarResult> {
    let SunDecimals { sunrise, noon, sunset, duration } = sun_decimals(&input)?;

    log::debug!(
        "{} at ({}, {}): sunrise {:.6} h, sunset {:.6} h",
        input.date(),
        input.location().latitude(),
        input.location().longitude(),
        sunrise.hours(),
        sunset.hours()
    );

    Ok(SolarResult::new(
        sunrise.to_clock_time(),
        sunset.to_clock_time(),
        noon.to_clock_time(),
        duration,
    ))
}

/// Calculates local sunrise and sunset times of day.
///
/// Times are expressed in the longitude's nominal timezone (`trunc(λ/15)` hours
/// from UTC), not in any political timezone.
///
/// # Arguments
/// * `date` - Calendar date (proleptic Gregorian)
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates,
/// and `UndefinedSolarGeometry` when the sun does not rise or does not set.
///
/// # Example
/// ```
/// use simple_sunrise::{compute_sun_times, time::CalendarDate};
///
/// let date = CalendarDate::new(2013, 4, 15).unwrap();
/// let result = compute_sun_times(date, -14.408749, 52.1421448).unwrap();
///
/// assert_eq!(result.sunrise().to_string(), "06:38:20");
/// assert_eq!(result.sunset().to_string(), "18:18:48");
/// ```
pub fn compute_sun_times(date: CalendarDate, latitude: f64, longitude: f64) -> Result<SolarResult> {
    compute(SolarInput::from_coordinates(date, latitude, longitude)?)
}

/// Calculates local sunrise and sunset times of day for a chrono date.
///
/// # Errors
/// Same as [`compute_sun_times`].
///
/// # Example
/// ```
/// # #[cfg(feature = "chrono")] {
/// use chrono::NaiveDate;
/// use simple_sunrise::calculator::compute_sun_times_for_date;
///
/// let date = NaiveDate::from_ymd_opt(2013, 4, 15).unwrap();
/// let result = compute_sun_times_for_date(&date, -14.408749, 52.1421448).unwrap();
/// assert_eq!(result.sunrise().to_string(), "06:38:20");
/// # }
/// ```
#[cfg(feature = "chrono")]
pub fn compute_sun_times_for_date<D: Datelike>(
    date: &D,
    latitude: f64,
    longitude: f64,
) -> Result<SolarResult> {
    compute_sun_times(CalendarDate::from_date_like(date)?, latitude, longitude)
}
