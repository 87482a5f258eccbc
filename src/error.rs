//! Error types for sunrise/sunset calculations.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while validating input or computing sun times.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Structurally invalid calendar date or unparseable date text.
    InvalidDate {
        /// Description of the date constraint violation.
        message: &'static str,
    },
    /// The sunrise hour angle is undefined because the sun never crosses the horizon.
    ///
    /// Happens when `-tan(declination) * tan(latitude)` falls outside `[-1, 1]`.
    UndefinedSolarGeometry {
        /// The out-of-range arccos argument.
        argument: f64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidDate { message } => write!(f, "invalid date: {message}"),
            Self::UndefinedSolarGeometry { argument } => {
                let case = if *argument < 0.0 {
                    "polar day, sun never sets"
                } else {
                    "polar night, sun never rises"
                };
                write!(f, "undefined solar geometry: ")?;
                write!(f, "hour angle argument {argument} outside [-1, 1] ({case})")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }

    /// Creates an undefined solar geometry error.
    #[must_use]
    pub const fn undefined_solar_geometry(argument: f64) -> Self {
        Self::UndefinedSolarGeometry { argument }
    }

    /// Checks if this error reports a polar day (sun above the horizon all day).
    #[must_use]
    pub fn is_polar_day(&self) -> bool {
        matches!(self, Self::UndefinedSolarGeometry { argument } if *argument < -1.0)
    }

    /// Checks if this error reports a polar night (sun below the horizon all day).
    #[must_use]
    pub fn is_polar_night(&self) -> bool {
        matches!(self, Self::UndefinedSolarGeometry { argument } if *argument > 1.0)
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees or not finite.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees or not finite.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates the argument passed to arccos when computing the sunrise hour angle.
///
/// # Errors
/// Returns `UndefinedSolarGeometry` if the argument is outside `[-1, 1]` or not finite.
pub fn check_hour_angle_argument(argument: f64) -> Result<f64> {
    if !(-1.0..=1.0).contains(&argument) {
        return Err(Error::undefined_solar_geometry(argument));
    }
    Ok(argument)
}
