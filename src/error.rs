//! Error types for the solar calculation pipeline.

use crate::types::PolarCondition;
use core::fmt;

/// Crate-wide result type.
pub type Result<T> = core::result::Result<T, Error>;

/// Largest accepted UTC offset magnitude, in hours.
pub const MAX_UTC_OFFSET_HOURS: f64 = 18.0;

/// Errors that can occur during solar calculations.
///
/// Everything except [`Error::NoSunriseOrSunset`] is detected before any
/// computation starts; see [`Error::is_invalid_input`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// Latitude outside [-90, 90] degrees, or not finite.
    InvalidLatitude {
        /// Rejected latitude.
        value: f64,
    },
    /// Longitude outside [-180, 180] degrees, or not finite.
    InvalidLongitude {
        /// Rejected longitude.
        value: f64,
    },
    /// UTC offset beyond ±18 hours, or not finite.
    InvalidUtcOffset {
        /// Rejected offset in hours.
        value: f64,
    },
    /// Calendar date that does not exist.
    InvalidDate {
        /// Which part of the date is wrong.
        message: &'static str,
    },
    /// Time-of-day outside 00:00:00 to 23:59:59.999….
    InvalidTime {
        /// Which part of the time is wrong.
        message: &'static str,
    },
    /// Custom horizon elevation outside [-90, 90] degrees.
    InvalidElevationAngle {
        /// Rejected elevation angle.
        value: f64,
    },
    /// The sun does not cross the horizon on this date at this latitude.
    NoSunriseOrSunset {
        /// Whether the sun stays up or down all day.
        condition: PolarCondition,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(f, "latitude {value}° out of range [-90°, 90°]")
            }
            Self::InvalidLongitude { value } => {
                write!(f, "longitude {value}° out of range [-180°, 180°]")
            }
            Self::InvalidUtcOffset { value } => {
                write!(f, "UTC offset {value} h out of range [-18 h, 18 h]")
            }
            Self::InvalidDate { message } => write!(f, "invalid date: {message}"),
            Self::InvalidTime { message } => write!(f, "invalid time: {message}"),
            Self::InvalidElevationAngle { value } => {
                write!(f, "horizon elevation {value}° out of range [-90°, 90°]")
            }
            Self::NoSunriseOrSunset { condition } => match condition {
                PolarCondition::PolarDay => {
                    write!(f, "no sunrise or sunset: the sun stays above the horizon")
                }
                PolarCondition::PolarNight => {
                    write!(f, "no sunrise or sunset: the sun stays below the horizon")
                }
            },
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// UTC offset error.
    #[must_use]
    pub const fn invalid_utc_offset(value: f64) -> Self {
        Self::InvalidUtcOffset { value }
    }

    /// Date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }

    /// Time-of-day error.
    #[must_use]
    pub const fn invalid_time(message: &'static str) -> Self {
        Self::InvalidTime { message }
    }

    /// Horizon elevation error.
    #[must_use]
    pub const fn invalid_elevation_angle(value: f64) -> Self {
        Self::InvalidElevationAngle { value }
    }

    /// Polar day or night.
    #[must_use]
    pub const fn no_sunrise_or_sunset(condition: PolarCondition) -> Self {
        Self::NoSunriseOrSunset { condition }
    }

    /// Returns true for errors caused by out-of-range input values.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::NoSunriseOrSunset { .. })
    }

    /// Returns the polar condition if this is a [`Error::NoSunriseOrSunset`].
    #[must_use]
    pub const fn polar_condition(&self) -> Option<PolarCondition> {
        match self {
            Self::NoSunriseOrSunset { condition } => Some(*condition),
            _ => None,
        }
    }
}

/// Checks a latitude in degrees.
///
/// # Errors
/// `InvalidLatitude` outside [-90, 90]; NaN and infinities are outside too.
pub fn check_latitude(latitude: f64) -> Result<()> {
    (-90.0..=90.0)
        .contains(&latitude)
        .then_some(())
        .ok_or(Error::invalid_latitude(latitude))
}

/// Checks a longitude in degrees.
///
/// # Errors
/// `InvalidLongitude` outside [-180, 180].
pub fn check_longitude(longitude: f64) -> Result<()> {
    (-180.0..=180.0)
        .contains(&longitude)
        .then_some(())
        .ok_or(Error::invalid_longitude(longitude))
}

/// Checks an observer position, latitude first.
///
/// # Errors
/// See [`check_latitude`] and [`check_longitude`].
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude).and_then(|()| check_longitude(longitude))
}

/// Checks a UTC offset in hours.
///
/// # Errors
/// `InvalidUtcOffset` beyond ±18 hours or not finite.
pub fn check_utc_offset(hours: f64) -> Result<()> {
    (-MAX_UTC_OFFSET_HOURS..=MAX_UTC_OFFSET_HOURS)
        .contains(&hours)
        .then_some(())
        .ok_or(Error::invalid_utc_offset(hours))
}

/// Checks the elevation angle of a horizon.
///
/// # Errors
/// `InvalidElevationAngle` outside [-90, 90].
pub fn check_elevation_angle(elevation: f64) -> Result<()> {
    (-90.0..=90.0)
        .contains(&elevation)
        .then_some(())
        .ok_or(Error::invalid_elevation_angle(elevation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_bounds() {
        for latitude in [-90.0, -41.0, 0.0, 66.56, 90.0] {
            assert_eq!(check_latitude(latitude), Ok(()));
        }
        for latitude in [-90.000_1, 91.0, f64::NAN, f64::INFINITY] {
            assert!(check_latitude(latitude).is_err(), "{latitude}");
        }

        for longitude in [-180.0, -0.0, 29.0, 180.0] {
            assert_eq!(check_longitude(longitude), Ok(()));
        }
        for longitude in [180.5, -181.0, f64::NAN, f64::NEG_INFINITY] {
            assert!(check_longitude(longitude).is_err(), "{longitude}");
        }

        assert_eq!(
            check_coordinates(95.0, 200.0),
            Err(Error::invalid_latitude(95.0))
        );
        assert_eq!(
            check_coordinates(45.0, 200.0),
            Err(Error::invalid_longitude(200.0))
        );
    }

    #[test]
    fn test_utc_offset_bounds() {
        for hours in [0.0, 5.75, -9.5, 14.0, -18.0, 18.0] {
            assert_eq!(check_utc_offset(hours), Ok(()));
        }
        assert_eq!(check_utc_offset(18.5), Err(Error::invalid_utc_offset(18.5)));
        assert!(check_utc_offset(f64::NAN).is_err());
    }

    #[test]
    fn test_elevation_angle_bounds() {
        assert!(check_elevation_angle(-0.833).is_ok());
        assert!(check_elevation_angle(-18.0).is_ok());
        assert!(check_elevation_angle(95.0).is_err());
        assert!(check_elevation_angle(f64::NAN).is_err());
    }

    #[test]
    fn test_error_classification() {
        assert!(Error::invalid_latitude(95.0).is_invalid_input());
        assert!(Error::invalid_date("month must be between 1 and 12").is_invalid_input());

        let polar = Error::no_sunrise_or_sunset(PolarCondition::PolarNight);
        assert!(!polar.is_invalid_input());
        assert_eq!(polar.polar_condition(), Some(PolarCondition::PolarNight));
        assert_eq!(Error::invalid_longitude(200.0).polar_condition(), None);
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_messages() {
        assert_eq!(
            Error::invalid_latitude(95.0).to_string(),
            "latitude 95° out of range [-90°, 90°]"
        );
        assert_eq!(
            Error::invalid_utc_offset(19.0).to_string(),
            "UTC offset 19 h out of range [-18 h, 18 h]"
        );
        assert_eq!(
            Error::invalid_date("day is out of range for month").to_string(),
            "invalid date: day is out of range for month"
        );
        assert_eq!(
            Error::no_sunrise_or_sunset(PolarCondition::PolarDay).to_string(),
            "no sunrise or sunset: the sun stays above the horizon"
        );
    }
}
