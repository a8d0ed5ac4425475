//! Solar geometry for one Julian Century value.
//!
//! Low-precision solar coordinates after Meeus, "Astronomical Algorithms",
//! chapter 25, in the form used by the NOAA solar calculator. Each quantity
//! only depends on the ones computed before it.

#![allow(clippy::unreadable_literal)]

use crate::math::{
    asin_clamped, atan2, cos, degrees_to_radians, normalize_degrees_0_to_360, polynomial,
    radians_to_degrees, sin,
};
use crate::time::JulianMoment;

/// Solar orbital and equatorial quantities, immutable once computed.
///
/// All angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarGeometry {
    julian_century: f64,
    geometric_mean_longitude: f64,
    geometric_mean_anomaly: f64,
    eccentricity: f64,
    equation_of_center: f64,
    true_longitude: f64,
    true_anomaly: f64,
    radius_vector: f64,
    apparent_longitude: f64,
    mean_obliquity: f64,
    obliquity_correction: f64,
    right_ascension: f64,
    declination: f64,
}

impl SolarGeometry {
    /// Computes the solar geometry for a Julian Century (centuries since J2000.0).
    ///
    /// # Example
    /// ```
    /// # use noaa_solar::geometry::SolarGeometry;
    /// let geometry = SolarGeometry::from_julian_century(0.0);
    /// assert!((geometry.geometric_mean_longitude() - 280.46646).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn from_julian_century(jc: f64) -> Self {
        let geometric_mean_longitude = normalize_degrees_0_to_360(polynomial(
            &[280.46646, 36000.76983, 0.0003032],
            jc,
        ));
        // Not normalized: only its sine and cosine are consumed
        let geometric_mean_anomaly = polynomial(&[357.52911, 35999.05029, -0.0001537], jc);
        let eccentricity = polynomial(&[0.016708634, -0.000042037, -0.0000001267], jc);

        let m = degrees_to_radians(geometric_mean_anomaly);
        let equation_of_center = sin(m) * polynomial(&[1.914602, -0.004817, -0.000014], jc)
            + sin(2.0 * m) * polynomial(&[0.019993, -0.000101], jc)
            + sin(3.0 * m) * 0.000289;

        let true_longitude = geometric_mean_longitude + equation_of_center;
        let true_anomaly = geometric_mean_anomaly + equation_of_center;

        let radius_vector = (1.000001018 * (1.0 - eccentricity * eccentricity))
            / (1.0 + eccentricity * cos(degrees_to_radians(true_anomaly)));

        // Longitude of the ascending node of the Moon's mean orbit
        let omega = degrees_to_radians(125.04 - 1934.136 * jc);
        let apparent_longitude = true_longitude - 0.00569 - 0.00478 * sin(omega);

        // 23°26'21.448" minus the secular drift, in arcseconds
        let obliquity_seconds = polynomial(&[21.448, -46.815, -0.00059, 0.001813], jc);
        let mean_obliquity = 23.0 + (26.0 + obliquity_seconds / 60.0) / 60.0;
        let obliquity_correction = mean_obliquity + 0.00256 * cos(omega);

        let epsilon = degrees_to_radians(obliquity_correction);
        let lambda = degrees_to_radians(apparent_longitude);

        // Left in (-180, 180]; nothing downstream reads it
        let right_ascension =
            radians_to_degrees(atan2(cos(epsilon) * sin(lambda), cos(lambda)));
        let declination = radians_to_degrees(asin_clamped(sin(epsilon) * sin(lambda)));

        log::trace!(
            "solar geometry at JC {jc}: L0={geometric_mean_longitude} M={geometric_mean_anomaly} \
             lambda={apparent_longitude} epsilon={obliquity_correction} delta={declination}"
        );

        Self {
            julian_century: jc,
            geometric_mean_longitude,
            geometric_mean_anomaly,
            eccentricity,
            equation_of_center,
            true_longitude,
            true_anomaly,
            radius_vector,
            apparent_longitude,
            mean_obliquity,
            obliquity_correction,
            right_ascension,
            declination,
        }
    }

    /// Computes the solar geometry for a Julian moment.
    #[must_use]
    pub fn from_julian_moment(moment: &JulianMoment) -> Self {
        Self::from_julian_century(moment.julian_century())
    }

    /// Julian Century the geometry was computed for.
    #[must_use]
    pub const fn julian_century(&self) -> f64 {
        self.julian_century
    }

    /// Geometric mean longitude, in [0, 360).
    #[must_use]
    pub const fn geometric_mean_longitude(&self) -> f64 {
        self.geometric_mean_longitude
    }

    /// Geometric mean anomaly (not normalized).
    #[must_use]
    pub const fn geometric_mean_anomaly(&self) -> f64 {
        self.geometric_mean_anomaly
    }

    /// Eccentricity of Earth's orbit (dimensionless).
    #[must_use]
    pub const fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Equation of center.
    #[must_use]
    pub const fn equation_of_center(&self) -> f64 {
        self.equation_of_center
    }

    /// True longitude.
    #[must_use]
    pub const fn true_longitude(&self) -> f64 {
        self.true_longitude
    }

    /// True anomaly.
    #[must_use]
    pub const fn true_anomaly(&self) -> f64 {
        self.true_anomaly
    }

    /// Sun-Earth distance in astronomical units.
    #[must_use]
    pub const fn radius_vector(&self) -> f64 {
        self.radius_vector
    }

    /// Apparent longitude.
    #[must_use]
    pub const fn apparent_longitude(&self) -> f64 {
        self.apparent_longitude
    }

    /// Mean obliquity of the ecliptic.
    #[must_use]
    pub const fn mean_obliquity(&self) -> f64 {
        self.mean_obliquity
    }

    /// Corrected obliquity of the ecliptic.
    #[must_use]
    pub const fn obliquity_correction(&self) -> f64 {
        self.obliquity_correction
    }

    /// Right ascension in (-180, 180].
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Declination.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }
}
