//! # NOAA Solar Calculator
//!
//! Sunrise, sunset, day length and sun position after the NOAA solar calculator
//! (Meeus, "Astronomical Algorithms", low-precision solar coordinates).

#![cfg_attr(not(any(feature = "std", test)), no_std)]
//!
//! For an observer (latitude, longitude), a local UTC offset, a calendar date and a
//! local time-of-day, the calculator produces:
//! - the Julian Day and Julian Century the geometry was evaluated at
//! - solar geometry: mean longitude and anomaly, eccentricity, equation of center,
//!   true and apparent longitude, radius vector, obliquity, right ascension, declination
//! - equation of time, sunrise hour angle, solar noon, sunrise, sunset and both
//!   day-length durations
//! - true solar time, hour angle, zenith, elevation, refraction and azimuth at the input time
//! - `HH:MM:SS` clock values for the sunrise, sunset and durations
//!
//! Every stage is a pure function of the previous stage's output. Polar days and
//! nights are reported explicitly, never as NaN.
//!
//! ## Feature Flags
//!
//! - `std` (default): float methods from the standard library, plus `std::error::Error`
//! - `chrono` (default): build a [`SolarInput`] from any `DateTime<Tz>`
//! - `libm`: trigonometry through `libm`, for `no_std` targets
//! - `serde`: `Serialize`/`Deserialize` on inputs, reports and errors
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! noaa-solar = "0.1"
//!
//! # Minimal std
//! noaa-solar = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! noaa-solar = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Full report (numeric API)
//! ```rust
//! use noaa_solar::{CalendarDate, LocalTime, Observer, SolarInput, UtcOffset};
//!
//! let input = SolarInput::new(
//!     Observer::new(41.0, 29.0).unwrap(),
//!     UtcOffset::from_hours(2.0).unwrap(),
//!     CalendarDate::new(2016, 1, 1).unwrap(),
//!     LocalTime::new(12, 0, 0.0).unwrap(),
//! );
//!
//! let report = noaa_solar::calculate(&input).unwrap();
//! println!("Sunrise:  {}", report.sunrise());
//! println!("Sunset:   {}", report.sunset());
//! println!("Sunlight: {}", report.sunlight_duration());
//! println!("Azimuth:  {:.3}°", report.position().azimuth());
//! ```
//!
//! ### Sun events (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use noaa_solar::{SolarInput, SolarPositionCalculator, SunEvents};
//! use chrono::{DateTime, FixedOffset};
//!
//! let datetime = "2023-06-21T12:00:00+01:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let input = SolarInput::from_datetime(&datetime, 78.22, 15.65).unwrap(); // Longyearbyen
//!
//! match SolarPositionCalculator::new().sun_events(&input).unwrap() {
//!     SunEvents::RegularDay { sunrise, sunset, .. } => {
//!         println!("{} - {}", sunrise.clock_time(), sunset.clock_time());
//!     }
//!     SunEvents::AllDay { solar_noon } => println!("Midnight sun, noon at {}", solar_noon.clock_time()),
//!     SunEvents::AllNight { .. } => println!("Polar night"),
//! }
//! # }
//! ```
//!
//! ## Coordinate System
//!
//! Latitudes are positive north, longitudes positive east and UTC offsets positive
//! east of Greenwich. Azimuth runs clockwise from north in [0°, 360°). Zenith is
//! measured from straight up, so elevation is `90° - zenith`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Re-exports
pub use crate::calculator::{Observer, SolarInput, SolarPositionCalculator, SolarReport, calculate};
pub use crate::clock::{ClockTime, DayFraction};
pub use crate::error::{Error, Result};
pub use crate::geometry::SolarGeometry;
pub use crate::position::InstantPosition;
pub use crate::time::{CalendarDate, JulianMoment, LocalTime, UtcOffset};
pub use crate::timing::DayTiming;
pub use crate::types::{GeometryEpoch, Horizon, PolarCondition, SunEvents};

// Pipeline stages
pub mod calculator;
pub mod geometry;
pub mod position;
pub mod timing;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod clock;
pub mod time;
