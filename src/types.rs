//! Core data types shared by the calculation stages.

use crate::error::check_elevation_angle;
use crate::Result;

/// Solar elevation that counts as "the sun crossing the horizon".
///
/// [`Horizon::SunriseSunset`] is the 90.833° zenith of the NOAA calculator: the
/// upper limb of the sun touching a refracted horizon. The twilight variants
/// push the crossing further below.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Horizon {
    /// Zenith 90.833°
    #[default]
    SunriseSunset,
    /// Centre of the sun at -6°
    CivilTwilight,
    /// Centre of the sun at -12°
    NauticalTwilight,
    /// Centre of the sun at -18°
    AstronomicalTwilight,
    /// Any elevation in degrees; build it with [`Horizon::custom`] to have it checked
    Custom(f64),
}

impl Horizon {
    /// Elevation of the crossing in degrees, negative below the geometric horizon.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => -0.833,
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
            Self::Custom(angle) => *angle,
        }
    }

    /// Zenith of the crossing in degrees, `90 - elevation`.
    #[must_use]
    pub const fn zenith_angle(&self) -> f64 {
        90.0 - self.elevation_angle()
    }

    /// Checked [`Horizon::Custom`].
    ///
    /// # Errors
    /// `InvalidElevationAngle` outside [-90, 90].
    pub fn custom(elevation_degrees: f64) -> Result<Self> {
        check_elevation_angle(elevation_degrees)?;
        Ok(Self::Custom(elevation_degrees))
    }
}

/// Instant at which the solar geometry is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeometryEpoch {
    /// 0h UT of the calendar date (Julian Day from the date alone).
    #[default]
    StartOfDate,
    /// The observation instant: date plus local time-of-day, shifted to UT.
    ObservationTime,
}

/// Why a date has no sunrise or sunset at a latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PolarCondition {
    /// The sun stays above the horizon for the whole day.
    PolarDay,
    /// The sun stays below the horizon for the whole day.
    PolarNight,
}

/// Sunrise, solar noon and sunset for one local day.
///
/// Solar noon is always defined; sunrise and sunset only exist on a regular day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SunEvents<T> {
    /// The sun crosses the horizon twice.
    RegularDay {
        /// Upward crossing
        sunrise: T,
        /// Transit
        solar_noon: T,
        /// Downward crossing
        sunset: T,
    },
    /// Midnight sun.
    AllDay {
        /// Transit
        solar_noon: T,
    },
    /// The sun never rises.
    AllNight {
        /// Transit, with the sun still below the horizon
        solar_noon: T,
    },
}

impl<T> SunEvents<T> {
    /// Solar noon, present in every variant.
    pub const fn solar_noon(&self) -> &T {
        match self {
            Self::RegularDay { solar_noon, .. }
            | Self::AllDay { solar_noon }
            | Self::AllNight { solar_noon } => solar_noon,
        }
    }

    /// True when sunrise and sunset exist.
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// `None` on a regular day.
    pub const fn polar_condition(&self) -> Option<PolarCondition> {
        match self {
            Self::RegularDay { .. } => None,
            Self::AllDay { .. } => Some(PolarCondition::PolarDay),
            Self::AllNight { .. } => Some(PolarCondition::PolarNight),
        }
    }

    /// Sunrise on a regular day.
    pub const fn sunrise(&self) -> Option<&T> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(sunrise)
        } else {
            None
        }
    }

    /// Sunset on a regular day.
    pub const fn sunset(&self) -> Option<&T> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(sunset)
        } else {
            None
        }
    }

    /// Maps every contained time with `f`.
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> SunEvents<U> {
        match self {
            Self::RegularDay {
                sunrise,
                solar_noon,
                sunset,
            } => SunEvents::RegularDay {
                sunrise: f(sunrise),
                solar_noon: f(solar_noon),
                sunset: f(sunset),
            },
            Self::AllDay { solar_noon } => SunEvents::AllDay {
                solar_noon: f(solar_noon),
            },
            Self::AllNight { solar_noon } => SunEvents::AllNight {
                solar_noon: f(solar_noon),
            },
        }
    }
}
