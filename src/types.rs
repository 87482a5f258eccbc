//! Core data types for sunrise/sunset calculations.

use core::fmt;

use crate::error::check_coordinates;
use crate::time::CalendarDate;
use crate::Result;

/// Geographic position of the observer.
///
/// # Example
/// ```
/// # use simple_sunrise::types::Location;
/// let location = Location::new(-14.408749, 52.1421448).unwrap();
/// assert_eq!(location.latitude(), -14.408749);
/// assert_eq!(location.longitude(), 52.1421448);
///
/// assert!(Location::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude in degrees (-90° to +90°, positive north)
    latitude: f64,
    /// Longitude in degrees (-180° to +180°, positive east)
    longitude: f64,
}

impl Location {
    /// Creates a new location from latitude and longitude in decimal degrees.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range or non-finite values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Everything a sunrise/sunset calculation depends on: a date and a location.
///
/// Both parts are validated when constructed, so computing from a `SolarInput`
/// can only fail on polar geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarInput {
    date: CalendarDate,
    location: Location,
}

impl SolarInput {
    /// Combines an already validated date and location.
    #[must_use]
    pub const fn new(date: CalendarDate, location: Location) -> Self {
        Self { date, location }
    }

    /// Validates raw coordinates and pairs them with a date.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
    pub fn from_coordinates(date: CalendarDate, latitude: f64, longitude: f64) -> Result<Self> {
        Ok(Self::new(date, Location::new(latitude, longitude)?))
    }

    /// Gets the calendar date.
    #[must_use]
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// Gets the observer location.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }
}

/// A time of day with whole-second resolution.
///
/// Fields are always within range: hour 0-23, minute 0-59, second 0-59.
/// Displays as `HH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
    second: u32,
}

impl ClockTime {
    /// 00:00:00
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Creates a clock time, returning `None` if any field is out of range.
    ///
    /// # Example
    /// ```
    /// # use simple_sunrise::types::ClockTime;
    /// let time = ClockTime::new(6, 38, 20).unwrap();
    /// assert_eq!(time.to_string(), "06:38:20");
    /// assert!(ClockTime::new(24, 0, 0).is_none());
    /// ```
    #[must_use]
    pub const fn new(hour: u32, minute: u32, second: u32) -> Option<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return None;
        }
        Some(Self {
            hour,
            minute,
            second,
        })
    }

    /// Callers guarantee the fields are already reduced into range.
    pub(crate) const fn from_parts(hour: u32, minute: u32, second: u32) -> Self {
        debug_assert!(hour < 24 && minute < 60 && second < 60);
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Gets the hour (0-23).
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Gets the minute (0-59).
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Gets the second (0-59).
    #[must_use]
    pub const fn second(&self) -> u32 {
        self.second
    }

    /// Gets the number of seconds since midnight.
    #[must_use]
    pub const fn seconds_from_midnight(&self) -> u32 {
        self.hour * 3_600 + self.minute * 60 + self.second
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

#[cfg(feature = "chrono")]
impl From<ClockTime> for chrono::NaiveTime {
    fn from(time: ClockTime) -> Self {
        Self::from_num_seconds_from_midnight_opt(time.seconds_from_midnight(), 0)
            .unwrap_or(Self::MIN)
    }
}

/// Sunrise and sunset times of day for one date and location.
///
/// Times are local mean time of the longitude's nominal 15° zone, not civil
/// time of a political timezone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarResult {
    sunrise: ClockTime,
    sunset: ClockTime,
    solar_noon: ClockTime,
    day_length: f64,
}

impl SolarResult {
    pub(crate) const fn new(
        sunrise: ClockTime,
        sunset: ClockTime,
        solar_noon: ClockTime,
        day_length: f64,
    ) -> Self {
        Self {
            sunrise,
            sunset,
            solar_noon,
            day_length,
        }
    }

    /// Gets the sunrise time of day.
    #[must_use]
    pub const fn sunrise(&self) -> ClockTime {
        self.sunrise
    }

    /// Gets the sunset time of day.
    #[must_use]
    pub const fn sunset(&self) -> ClockTime {
        self.sunset
    }

    /// Gets the time of day at which the sun crosses the local meridian.
    #[must_use]
    pub const fn solar_noon(&self) -> ClockTime {
        self.solar_noon
    }

    /// Gets the sunshine duration in hours (sunset minus sunrise, before wrapping).
    #[must_use]
    pub const fn day_length(&self) -> f64 {
        self.day_length
    }
}
