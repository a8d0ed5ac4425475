//! Equation of time, sunrise hour angle, solar noon, sunrise, sunset and day length.

use crate::clock::DayFraction;
use crate::geometry::SolarGeometry;
use crate::math::{acos, cos, degrees_to_radians, powi, radians_to_degrees, sin, tan};
use crate::time::UtcOffset;
use crate::types::{Horizon, PolarCondition, SunEvents};
use crate::{Error, Result};

/// Minutes in a day.
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Minutes of time per degree of Earth rotation.
const MINUTES_PER_DEGREE: f64 = 4.0;

/// Calculates the equation of time in minutes.
///
/// Positive values mean true solar time runs ahead of mean solar time.
#[must_use]
pub fn equation_of_time(geometry: &SolarGeometry) -> f64 {
    let y = powi(tan(degrees_to_radians(geometry.obliquity_correction() / 2.0)), 2);
    let l0 = degrees_to_radians(geometry.geometric_mean_longitude());
    let m = degrees_to_radians(geometry.geometric_mean_anomaly());
    let e = geometry.eccentricity();

    MINUTES_PER_DEGREE
        * radians_to_degrees(
            y * sin(2.0 * l0) - 2.0 * e * sin(m) + 4.0 * e * y * sin(m) * cos(2.0 * l0)
                - 0.5 * y * y * sin(4.0 * l0)
                - 1.25 * e * e * sin(2.0 * m),
        )
}

/// Argument of the hour-angle arccosine.
///
/// Written as a single fraction. `cos(latitude)` stays positive even at the poles
/// (about 6e-17 in floating point), so the sign of the result is that of the
/// numerator and polar classification stays correct there.
fn hour_angle_argument(latitude: f64, declination: f64, horizon: Horizon) -> f64 {
    let phi = degrees_to_radians(latitude);
    let delta = degrees_to_radians(declination);
    let zenith = degrees_to_radians(horizon.zenith_angle());

    (cos(zenith) - sin(phi) * sin(delta)) / (cos(phi) * cos(delta))
}

fn classify(argument: f64) -> core::result::Result<f64, PolarCondition> {
    if argument < -1.0 {
        Err(PolarCondition::PolarDay)
    } else if argument > 1.0 {
        Err(PolarCondition::PolarNight)
    } else {
        Ok(radians_to_degrees(acos(argument)))
    }
}

/// Calculates the hour angle of sunrise in degrees, in [0, 180].
///
/// The hour angle of sunset is its negation.
///
/// # Errors
/// Returns `NoSunriseOrSunset` when the sun does not cross the horizon: with
/// `PolarDay` if it stays above, `PolarNight` if it stays below.
///
/// # Example
/// ```
/// # use noaa_solar::{timing, Horizon};
/// let ha = timing::hour_angle_sunrise(0.0, 0.0, Horizon::SunriseSunset).unwrap();
/// assert!(ha > 90.0 && ha < 91.0);
/// assert!(timing::hour_angle_sunrise(80.0, 23.0, Horizon::SunriseSunset).is_err());
/// ```
pub fn hour_angle_sunrise(latitude: f64, declination: f64, horizon: Horizon) -> Result<f64> {
    classify(hour_angle_argument(latitude, declination, horizon))
        .map_err(Error::no_sunrise_or_sunset)
}

/// Calculates local solar noon as a fraction of the local day.
#[must_use]
pub fn solar_noon(longitude: f64, equation_of_time: f64, utc_offset: UtcOffset) -> DayFraction {
    DayFraction::new(
        (MINUTES_PER_DAY / 2.0 - MINUTES_PER_DEGREE * longitude - equation_of_time
            + utc_offset.minutes())
            / MINUTES_PER_DAY,
    )
}

/// Sunrise, noon and sunset for a day, polar days and nights included.
#[must_use]
pub fn sun_events(
    geometry: &SolarGeometry,
    latitude: f64,
    longitude: f64,
    utc_offset: UtcOffset,
    horizon: Horizon,
) -> SunEvents<DayFraction> {
    let eot = equation_of_time(geometry);
    let noon = solar_noon(longitude, eot, utc_offset);

    match classify(hour_angle_argument(latitude, geometry.declination(), horizon)) {
        Ok(hour_angle) => SunEvents::RegularDay {
            sunrise: crossing(noon, hour_angle),
            solar_noon: noon,
            sunset: crossing(noon, -hour_angle),
        },
        Err(PolarCondition::PolarDay) => SunEvents::AllDay { solar_noon: noon },
        Err(PolarCondition::PolarNight) => SunEvents::AllNight { solar_noon: noon },
    }
}

fn crossing(noon: DayFraction, hour_angle: f64) -> DayFraction {
    DayFraction::new((noon.minutes() - hour_angle * MINUTES_PER_DEGREE) / MINUTES_PER_DAY)
}

/// Day timing for a regular day: everything between the geometry and the clock output.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayTiming {
    equation_of_time: f64,
    hour_angle_sunrise: f64,
    solar_noon: DayFraction,
    sunrise: DayFraction,
    sunset: DayFraction,
    sunlight_duration: f64,
    night_duration: f64,
}

impl DayTiming {
    /// Computes the day timing for an observer.
    ///
    /// # Errors
    /// Returns `NoSunriseOrSunset` on a polar day or night.
    pub fn new(
        geometry: &SolarGeometry,
        latitude: f64,
        longitude: f64,
        utc_offset: UtcOffset,
        horizon: Horizon,
    ) -> Result<Self> {
        let equation_of_time = equation_of_time(geometry);
        let hour_angle_sunrise = hour_angle_sunrise(latitude, geometry.declination(), horizon)?;
        let solar_noon = solar_noon(longitude, equation_of_time, utc_offset);

        let sunlight_duration = 2.0 * MINUTES_PER_DEGREE * hour_angle_sunrise;

        log::trace!(
            "day timing: eot={equation_of_time} ha={hour_angle_sunrise} noon={}",
            solar_noon.fraction()
        );

        Ok(Self {
            equation_of_time,
            hour_angle_sunrise,
            solar_noon,
            sunrise: crossing(solar_noon, hour_angle_sunrise),
            sunset: crossing(solar_noon, -hour_angle_sunrise),
            sunlight_duration,
            night_duration: MINUTES_PER_DAY - sunlight_duration,
        })
    }

    /// Equation of time in minutes.
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }

    /// Hour angle of sunrise in degrees.
    #[must_use]
    pub const fn hour_angle_sunrise(&self) -> f64 {
        self.hour_angle_sunrise
    }

    /// Hour angle of sunset in degrees (negated sunrise hour angle).
    #[must_use]
    pub const fn hour_angle_sunset(&self) -> f64 {
        -self.hour_angle_sunrise
    }

    /// Solar noon.
    #[must_use]
    pub const fn solar_noon(&self) -> DayFraction {
        self.solar_noon
    }

    /// Sunrise.
    #[must_use]
    pub const fn sunrise(&self) -> DayFraction {
        self.sunrise
    }

    /// Sunset.
    #[must_use]
    pub const fn sunset(&self) -> DayFraction {
        self.sunset
    }

    /// Sunlight duration in minutes.
    #[must_use]
    pub const fn sunlight_duration(&self) -> f64 {
        self.sunlight_duration
    }

    /// Night duration in minutes; adds up with the sunlight duration to exactly 1440.
    #[must_use]
    pub const fn night_duration(&self) -> f64 {
        self.night_duration
    }

    /// Sunrise, noon and sunset of this day.
    #[must_use]
    pub const fn sun_events(&self) -> SunEvents<DayFraction> {
        SunEvents::RegularDay {
            sunrise: self.sunrise,
            solar_noon: self.solar_noon,
            sunset: self.sunset,
        }
    }
}
