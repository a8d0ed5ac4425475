//! Topocentric sun position at one local instant.
//!
//! Hour angle, zenith, elevation and azimuth follow the NOAA solar calculator.
//! Refraction uses the piecewise approximation of Saemundsson/Bennett used there.

use crate::geometry::SolarGeometry;
use crate::math::{
    acos_clamped, cos, degrees_to_radians, normalize_degrees_0_to_360, normalize_to_period,
    radians_to_degrees, sin, tan,
};
use crate::time::{LocalTime, UtcOffset};
use crate::timing::MINUTES_PER_DAY;

/// Atmospheric refraction for an uncorrected elevation, in degrees.
///
/// Zero above 85°, always positive below.
///
/// # Example
/// ```
/// # use noaa_solar::position::atmospheric_refraction;
/// assert_eq!(atmospheric_refraction(89.0), 0.0);
/// // About half a degree at the horizon
/// assert!((atmospheric_refraction(0.0) - 0.482).abs() < 0.001);
/// ```
#[must_use]
pub fn atmospheric_refraction(elevation: f64) -> f64 {
    let arc_seconds = if elevation > 85.0 {
        0.0
    } else if elevation > 5.0 {
        let t = tan(degrees_to_radians(elevation));
        58.1 / t - 0.07 / (t * t * t) + 0.000_086 / (t * t * t * t * t)
    } else if elevation > -0.575 {
        let e = elevation;
        1735.0 + e * (-518.2 + e * (103.4 + e * (-12.79 + e * 0.711)))
    } else {
        -20.772 / tan(degrees_to_radians(elevation))
    };
    arc_seconds / 3600.0
}

/// Sun position in the sky of an observer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstantPosition {
    true_solar_time: f64,
    hour_angle: f64,
    zenith: f64,
    elevation: f64,
    refraction: f64,
    azimuth: f64,
}

impl InstantPosition {
    /// Computes the position for a local time-of-day.
    ///
    /// `equation_of_time` is in minutes and has to come from the same geometry.
    #[must_use]
    pub fn new(
        geometry: &SolarGeometry,
        equation_of_time: f64,
        latitude: f64,
        longitude: f64,
        utc_offset: UtcOffset,
        time: LocalTime,
    ) -> Self {
        let true_solar_time = normalize_to_period(
            time.day_fraction() * MINUTES_PER_DAY + equation_of_time + 4.0 * longitude
                - utc_offset.minutes(),
            MINUTES_PER_DAY,
        );

        let quarter = true_solar_time / 4.0;
        let hour_angle = if quarter < 0.0 {
            quarter + 180.0
        } else {
            quarter - 180.0
        };

        let phi = degrees_to_radians(latitude);
        let delta = degrees_to_radians(geometry.declination());

        let zenith = radians_to_degrees(acos_clamped(
            sin(phi) * sin(delta) + cos(phi) * cos(delta) * cos(degrees_to_radians(hour_angle)),
        ));
        let elevation = 90.0 - zenith;
        let refraction = atmospheric_refraction(elevation);

        let theta = degrees_to_radians(zenith);
        // 0/0 with the sun in the zenith or the observer on a pole; clamped to 1
        let azimuth_angle = radians_to_degrees(acos_clamped(
            (sin(phi) * cos(theta) - sin(delta)) / (cos(phi) * sin(theta)),
        ));
        let azimuth = if hour_angle > 0.0 {
            normalize_degrees_0_to_360(azimuth_angle + 180.0)
        } else {
            normalize_degrees_0_to_360(540.0 - azimuth_angle)
        };

        log::trace!(
            "position: tst={true_solar_time} ha={hour_angle} zenith={zenith} azimuth={azimuth}"
        );

        Self {
            true_solar_time,
            hour_angle,
            zenith,
            elevation,
            refraction,
            azimuth,
        }
    }

    /// True solar time in minutes, in [0, 1440).
    #[must_use]
    pub const fn true_solar_time(&self) -> f64 {
        self.true_solar_time
    }

    /// Hour angle in degrees, negative before solar noon.
    #[must_use]
    pub const fn hour_angle(&self) -> f64 {
        self.hour_angle
    }

    /// Zenith angle without refraction, in [0, 180].
    #[must_use]
    pub const fn zenith_angle(&self) -> f64 {
        self.zenith
    }

    /// Elevation without refraction, in [-90, 90].
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        self.elevation
    }

    /// Refraction correction in degrees.
    #[must_use]
    pub const fn refraction(&self) -> f64 {
        self.refraction
    }

    /// Elevation with refraction applied.
    #[must_use]
    pub const fn corrected_elevation_angle(&self) -> f64 {
        self.elevation + self.refraction
    }

    /// Azimuth clockwise from north, in [0, 360).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{CalendarDate, JulianMoment};
    use crate::timing::equation_of_time;

    fn position_at(
        moment: JulianMoment,
        latitude: f64,
        longitude: f64,
        offset_hours: f64,
        time: LocalTime,
    ) -> InstantPosition {
        let geometry = SolarGeometry::from_julian_moment(&moment);
        InstantPosition::new(
            &geometry,
            equation_of_time(&geometry),
            latitude,
            longitude,
            UtcOffset::from_hours(offset_hours).unwrap(),
            time,
        )
    }

    #[test]
    fn test_refraction_regimes() {
        assert_eq!(atmospheric_refraction(85.0001), 0.0);
        assert_eq!(atmospheric_refraction(90.0), 0.0);

        // Continuous enough at the regime boundaries
        assert!((atmospheric_refraction(85.0) - atmospheric_refraction(84.999)).abs() < 1e-5);
        assert!((atmospheric_refraction(5.0) - atmospheric_refraction(5.0001)).abs() < 1e-3);
        assert!((atmospheric_refraction(-0.575) - atmospheric_refraction(-0.5749)).abs() < 1e-2);

        assert!((atmospheric_refraction(0.0) - 1735.0 / 3600.0).abs() < 1e-12);
        assert!(atmospheric_refraction(-5.0) > 0.0);
        assert!(atmospheric_refraction(-89.0) > 0.0);
    }

    #[test]
    fn test_refraction_decreases_with_elevation() {
        let mut previous = f64::INFINITY;
        for tenth in -5..=850 {
            let r = atmospheric_refraction(f64::from(tenth) / 10.0);
            assert!(r <= previous);
            previous = r;
        }
    }

    #[test]
    fn test_position_istanbul_observation_time() {
        let date = CalendarDate::new(2016, 1, 1).unwrap();
        let noon = LocalTime::new(12, 0, 0.0).unwrap();
        let offset = UtcOffset::from_hours(2.0).unwrap();
        let moment = JulianMoment::from_local_time(date, noon, offset);

        let p = position_at(moment, 41.0, 29.0, 2.0, noon);

        assert!((p.true_solar_time() - 712.720_392_077_802_4).abs() < 1e-8);
        assert!((p.hour_angle() - (-1.819_901_980_549_389)).abs() < 1e-9);
        assert!((p.zenith_angle() - 64.048_884_467_611_09).abs() < 1e-8);
        assert!((p.elevation_angle() - 25.951_115_532_388_91).abs() < 1e-8);
        assert!((p.refraction() - 0.032_993_596_214_354_14).abs() < 1e-10);
        assert!((p.azimuth() - 178.137_263_859_540_67).abs() < 1e-7);
        assert_eq!(
            p.corrected_elevation_angle(),
            p.elevation_angle() + p.refraction()
        );
    }

    #[test]
    fn test_azimuth_morning_and_afternoon() {
        let date = CalendarDate::new(2024, 9, 22).unwrap();
        let moment = JulianMoment::from_date(date);

        let morning = position_at(moment, 48.2, 16.4, 2.0, LocalTime::new(9, 0, 0.0).unwrap());
        assert!(morning.hour_angle() < 0.0);
        assert!(morning.azimuth() > 90.0 && morning.azimuth() < 180.0);

        let afternoon = position_at(moment, 48.2, 16.4, 2.0, LocalTime::new(17, 0, 0.0).unwrap());
        assert!(afternoon.hour_angle() > 0.0);
        assert!(afternoon.azimuth() > 180.0 && afternoon.azimuth() < 270.0);
    }

    #[test]
    fn test_southern_hemisphere_noon_sun_in_the_north() {
        let moment = JulianMoment::from_date(CalendarDate::new(2024, 6, 21).unwrap());
        let p = position_at(moment, -33.9, 18.4, 2.0, LocalTime::new(13, 0, 0.0).unwrap());
        assert!(p.azimuth() < 20.0 || p.azimuth() > 340.0);
        assert!(p.elevation_angle() > 0.0);
    }

    #[test]
    fn test_degenerate_geometry_stays_finite() {
        let moment = JulianMoment::from_date(CalendarDate::new(2024, 6, 21).unwrap());
        for latitude in [90.0, -90.0] {
            for hour in [0, 6, 12, 18] {
                let p = position_at(
                    moment,
                    latitude,
                    0.0,
                    0.0,
                    LocalTime::new(hour, 0, 0.0).unwrap(),
                );
                assert!(p.azimuth().is_finite());
                assert!((0.0..360.0).contains(&p.azimuth()));
                assert!((0.0..=180.0).contains(&p.zenith_angle()));
            }
        }
    }

    #[test]
    fn test_true_solar_time_wraps() {
        let moment = JulianMoment::from_date(CalendarDate::new(2024, 3, 1).unwrap());
        let p = position_at(moment, 0.0, 179.0, -12.0, LocalTime::new(23, 59, 0.0).unwrap());
        assert!((0.0..MINUTES_PER_DAY).contains(&p.true_solar_time()));
        let p = position_at(moment, 0.0, -179.0, 14.0, LocalTime::MIDNIGHT);
        assert!((0.0..MINUTES_PER_DAY).contains(&p.true_solar_time()));
        assert!((-180.0..180.0).contains(&p.hour_angle()));
    }
}
