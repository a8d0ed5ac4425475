//! The orchestrating calculator: inputs in, a full report out.
//!
//! Each stage takes the previous stage's output explicitly:
//! Julian moment → solar geometry → day timing → instant position → clock times.

use crate::clock::{ClockTime, DayFraction};
use crate::error::{check_coordinates, check_elevation_angle};
use crate::geometry::SolarGeometry;
use crate::position::InstantPosition;
use crate::time::{CalendarDate, JulianMoment, LocalTime, UtcOffset};
use crate::timing::{self, DayTiming};
use crate::types::{GeometryEpoch, Horizon, SunEvents};
use crate::Result;
#[cfg(feature = "chrono")]
use chrono::{DateTime, Offset, TimeZone};

/// Geographic position of an observer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Observer {
    latitude: f64,
    longitude: f64,
}

impl Observer {
    /// Creates an observer at the given coordinates.
    ///
    /// # Arguments
    /// * `latitude` - Observer latitude in degrees (-90 to +90, north positive)
    /// * `longitude` - Observer longitude in degrees (-180 to +180, east positive)
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

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Observer {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> core::result::Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Fields {
            latitude: f64,
            longitude: f64,
        }

        let Fields {
            latitude,
            longitude,
        } = Fields::deserialize(deserializer)?;
        Self::new(latitude, longitude).map_err(serde::de::Error::custom)
    }
}

/// The complete, validated input of one calculation.
///
/// Deserializing validates every part the way the constructors do.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarInput {
    observer: Observer,
    utc_offset: UtcOffset,
    date: CalendarDate,
    time: LocalTime,
}

impl SolarInput {
    /// Bundles already validated parts into an input.
    #[must_use]
    pub const fn new(
        observer: Observer,
        utc_offset: UtcOffset,
        date: CalendarDate,
        time: LocalTime,
    ) -> Self {
        Self {
            observer,
            utc_offset,
            date,
            time,
        }
    }

    /// Takes local date, time and UTC offset from a chrono date-time in any time zone.
    ///
    /// # Errors
    /// Returns an error for invalid coordinates or an offset beyond ±18 hours.
    ///
    /// # Example
    /// ```
    /// # use noaa_solar::SolarInput;
    /// use chrono::{DateTime, FixedOffset};
    ///
    /// let datetime = "2016-01-01T12:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
    /// let input = SolarInput::from_datetime(&datetime, 41.0, 29.0).unwrap();
    /// assert_eq!(input.utc_offset().hours(), 2.0);
    /// ```
    #[cfg(feature = "chrono")]
    pub fn from_datetime<Tz: TimeZone>(
        datetime: &DateTime<Tz>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self> {
        let observer = Observer::new(latitude, longitude)?;
        let utc_offset = UtcOffset::from_seconds(datetime.offset().fix().local_minus_utc())?;
        let date = CalendarDate::from_naive_date(datetime.date_naive())?;
        let time = LocalTime::from_naive_time(datetime.time())?;
        Ok(Self::new(observer, utc_offset, date, time))
    }

    /// Gets the observer.
    #[must_use]
    pub const fn observer(&self) -> Observer {
        self.observer
    }

    /// Gets the UTC offset of the local clock.
    #[must_use]
    pub const fn utc_offset(&self) -> UtcOffset {
        self.utc_offset
    }

    /// Gets the local calendar date.
    #[must_use]
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// Gets the local time-of-day.
    #[must_use]
    pub const fn time(&self) -> LocalTime {
        self.time
    }
}

/// Everything one calculation produces, from the Julian moment to formatted clock times.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarReport {
    input: SolarInput,
    moment: JulianMoment,
    geometry: SolarGeometry,
    timing: DayTiming,
    position: InstantPosition,
    sunrise: ClockTime,
    solar_noon: ClockTime,
    sunset: ClockTime,
    sunlight_duration: ClockTime,
    night_duration: ClockTime,
}

impl SolarReport {
    /// Input the report was computed for.
    #[must_use]
    pub const fn input(&self) -> &SolarInput {
        &self.input
    }

    /// Julian moment the geometry was evaluated at.
    #[must_use]
    pub const fn moment(&self) -> &JulianMoment {
        &self.moment
    }

    /// Solar geometry.
    #[must_use]
    pub const fn geometry(&self) -> &SolarGeometry {
        &self.geometry
    }

    /// Equation of time, hour angles, sunrise/sunset fractions and durations.
    #[must_use]
    pub const fn timing(&self) -> &DayTiming {
        &self.timing
    }

    /// Sun position at the input time.
    #[must_use]
    pub const fn position(&self) -> &InstantPosition {
        &self.position
    }

    /// Sunrise clock time within its day.
    #[must_use]
    pub const fn sunrise(&self) -> ClockTime {
        self.sunrise
    }

    /// Solar noon clock time.
    #[must_use]
    pub const fn solar_noon(&self) -> ClockTime {
        self.solar_noon
    }

    /// Sunset clock time within its day.
    #[must_use]
    pub const fn sunset(&self) -> ClockTime {
        self.sunset
    }

    /// Sunlight duration as a clock value.
    #[must_use]
    pub const fn sunlight_duration(&self) -> ClockTime {
        self.sunlight_duration
    }

    /// Night duration as a clock value.
    #[must_use]
    pub const fn night_duration(&self) -> ClockTime {
        self.night_duration
    }
}

/// Configured NOAA solar calculator.
///
/// The default uses the standard sunrise/sunset horizon and evaluates the geometry
/// at 0h UT of the input date.
///
/// # Example
/// ```
/// use noaa_solar::{CalendarDate, LocalTime, Observer, SolarInput, SolarPositionCalculator, UtcOffset};
///
/// let input = SolarInput::new(
///     Observer::new(41.0, 29.0).unwrap(),
///     UtcOffset::from_hours(2.0).unwrap(),
///     CalendarDate::new(2016, 1, 1).unwrap(),
///     LocalTime::new(12, 0, 0.0).unwrap(),
/// );
///
/// let report = SolarPositionCalculator::new().calculate(&input).unwrap();
/// assert_eq!(report.sunrise().to_string(), "07:28:49");
/// assert_eq!(report.sunset().to_string(), "16:45:21");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarPositionCalculator {
    horizon: Horizon,
    epoch: GeometryEpoch,
}

impl SolarPositionCalculator {
    /// Creates a calculator with the default horizon and geometry epoch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            horizon: Horizon::SunriseSunset,
            epoch: GeometryEpoch::StartOfDate,
        }
    }

    /// Uses another horizon for sunrise and sunset.
    #[must_use]
    pub const fn with_horizon(mut self, horizon: Horizon) -> Self {
        self.horizon = horizon;
        self
    }

    /// Uses another instant for the solar geometry.
    #[must_use]
    pub const fn with_epoch(mut self, epoch: GeometryEpoch) -> Self {
        self.epoch = epoch;
        self
    }

    /// Gets the configured horizon.
    #[must_use]
    pub const fn horizon(&self) -> Horizon {
        self.horizon
    }

    /// Gets the configured geometry epoch.
    #[must_use]
    pub const fn epoch(&self) -> GeometryEpoch {
        self.epoch
    }

    /// Julian moment the geometry is evaluated at.
    #[must_use]
    pub fn julian_moment(&self, input: &SolarInput) -> JulianMoment {
        match self.epoch {
            GeometryEpoch::StartOfDate => JulianMoment::from_date(input.date),
            GeometryEpoch::ObservationTime => {
                JulianMoment::from_local_time(input.date, input.time, input.utc_offset)
            }
        }
    }

    /// Solar geometry for the input.
    #[must_use]
    pub fn geometry(&self, input: &SolarInput) -> SolarGeometry {
        SolarGeometry::from_julian_moment(&self.julian_moment(input))
    }

    /// Sun position at the input time. Never fails, polar days and nights included.
    #[must_use]
    pub fn position(&self, input: &SolarInput) -> InstantPosition {
        let geometry = self.geometry(input);
        instant_position(&geometry, input)
    }

    /// Sunrise, solar noon and sunset, reporting polar days and nights as variants.
    ///
    /// # Errors
    /// Returns `InvalidElevationAngle` if a custom horizon is outside -90 to +90 degrees.
    pub fn sun_events(&self, input: &SolarInput) -> Result<SunEvents<DayFraction>> {
        check_elevation_angle(self.horizon.elevation_angle())?;
        let geometry = self.geometry(input);
        Ok(timing::sun_events(
            &geometry,
            input.observer.latitude,
            input.observer.longitude,
            input.utc_offset,
            self.horizon,
        ))
    }

    /// Sun events for several horizons, sharing one geometry calculation.
    ///
    /// # Example
    /// ```
    /// # use noaa_solar::{CalendarDate, Horizon, LocalTime, Observer, SolarInput, SolarPositionCalculator, UtcOffset};
    /// let input = SolarInput::new(
    ///     Observer::new(60.17, 24.94).unwrap(),
    ///     UtcOffset::from_hours(3.0).unwrap(),
    ///     CalendarDate::new(2024, 6, 21).unwrap(),
    ///     LocalTime::MIDNIGHT,
    /// );
    /// let horizons = [Horizon::SunriseSunset, Horizon::CivilTwilight];
    /// for result in SolarPositionCalculator::new().sun_events_multiple(&input, horizons) {
    ///     let (horizon, events) = result.unwrap();
    ///     println!("{horizon:?}: regular day = {}", events.is_regular_day());
    /// }
    /// ```
    pub fn sun_events_multiple<H>(
        &self,
        input: &SolarInput,
        horizons: H,
    ) -> impl Iterator<Item = Result<(Horizon, SunEvents<DayFraction>)>>
    where
        H: IntoIterator<Item = Horizon>,
    {
        let geometry = self.geometry(input);
        let observer = input.observer;
        let utc_offset = input.utc_offset;

        horizons.into_iter().map(move |horizon| {
            check_elevation_angle(horizon.elevation_angle())?;
            let events = timing::sun_events(
                &geometry,
                observer.latitude,
                observer.longitude,
                utc_offset,
                horizon,
            );
            Ok((horizon, events))
        })
    }

    /// Runs the full pipeline.
    ///
    /// # Errors
    /// Returns `NoSunriseOrSunset` on a polar day or night, without partial results,
    /// and `InvalidElevationAngle` for an out-of-range custom horizon.
    pub fn calculate(&self, input: &SolarInput) -> Result<SolarReport> {
        check_elevation_angle(self.horizon.elevation_angle())?;

        let moment = self.julian_moment(input);
        let geometry = SolarGeometry::from_julian_moment(&moment);

        log::debug!(
            "calculating at JD {} for ({}, {}): declination {}",
            moment.julian_day(),
            input.observer.latitude,
            input.observer.longitude,
            geometry.declination()
        );

        let timing = DayTiming::new(
            &geometry,
            input.observer.latitude,
            input.observer.longitude,
            input.utc_offset,
            self.horizon,
        )
        .inspect_err(|err| log::debug!("no report for JD {}: {err}", moment.julian_day()))?;

        let position = instant_position(&geometry, input);

        let report = SolarReport {
            input: *input,
            moment,
            geometry,
            timing,
            position,
            sunrise: timing.sunrise().clock_time(),
            solar_noon: timing.solar_noon().clock_time(),
            sunset: timing.sunset().clock_time(),
            sunlight_duration: ClockTime::from_minutes(timing.sunlight_duration()),
            night_duration: ClockTime::from_minutes(timing.night_duration()),
        };

        log::debug!(
            "sunrise {} sunset {} sunlight {}",
            report.sunrise,
            report.sunset,
            report.sunlight_duration
        );

        Ok(report)
    }
}

fn instant_position(geometry: &SolarGeometry, input: &SolarInput) -> InstantPosition {
    InstantPosition::new(
        geometry,
        timing::equation_of_time(geometry),
        input.observer.latitude,
        input.observer.longitude,
        input.utc_offset,
        input.time,
    )
}

/// Runs the full pipeline with the default calculator.
///
/// # Errors
/// Returns `NoSunriseOrSunset` on a polar day or night.
pub fn calculate(input: &SolarInput) -> Result<SolarReport> {
    SolarPositionCalculator::new().calculate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PolarCondition;
    use crate::Error;

    fn istanbul() -> SolarInput {
        SolarInput::new(
            Observer::new(41.0, 29.0).unwrap(),
            UtcOffset::from_hours(2.0).unwrap(),
            CalendarDate::new(2016, 1, 1).unwrap(),
            LocalTime::new(12, 0, 0.0).unwrap(),
        )
    }

    fn svalbard(month: u32, day: u32) -> SolarInput {
        SolarInput::new(
            Observer::new(78.0, 15.0).unwrap(),
            UtcOffset::from_hours(1.0).unwrap(),
            CalendarDate::new(2023, month, day).unwrap(),
            LocalTime::new(12, 0, 0.0).unwrap(),
        )
    }

    #[test]
    fn test_observer_validation() {
        assert!(Observer::new(91.0, 0.0).is_err());
        assert!(Observer::new(0.0, -180.5).is_err());
        assert!(Observer::new(f64::NAN, 0.0).is_err());
        assert!(Observer::new(-90.0, 180.0).is_ok());
    }

    #[test]
    fn test_calculate_start_of_date() {
        let report = calculate(&istanbul()).unwrap();

        assert_eq!(report.moment().julian_day(), 2_457_388.5);
        assert_eq!(report.sunrise().to_string(), "07:28:49");
        assert_eq!(report.sunset().to_string(), "16:45:21");
        assert_eq!(report.sunlight_duration().to_string(), "09:16:32");
        assert_eq!(report.night_duration().to_string(), "14:43:28");
        assert!((report.timing().equation_of_time() - (-3.082_222_060_963)).abs() < 1e-8);
    }

    #[test]
    fn test_calculate_observation_time() {
        let calculator = SolarPositionCalculator::new().with_epoch(GeometryEpoch::ObservationTime);
        let report = calculator.calculate(&istanbul()).unwrap();

        assert!((report.moment().julian_day() - 2_457_388.916_666_666_5).abs() < 1e-6);
        assert_eq!(report.sunrise().to_string(), "07:28:52");
        assert_eq!(report.sunset().to_string(), "16:45:41");
        assert_eq!(report.sunlight_duration().to_string(), "09:16:49");
        assert_eq!(report.night_duration().to_string(), "14:43:11");
        assert_eq!(report.solar_noon().to_string(), "12:07:17");
        assert!((report.position().azimuth() - 178.137_263_859_540_67).abs() < 1e-7);
    }

    #[test]
    fn test_polar_failure_has_no_partial_result() {
        let err = calculate(&svalbard(6, 21)).unwrap_err();
        assert_eq!(err, Error::no_sunrise_or_sunset(PolarCondition::PolarDay));

        let err = calculate(&svalbard(12, 21)).unwrap_err();
        assert_eq!(err.polar_condition(), Some(PolarCondition::PolarNight));
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_position_and_events_survive_polar_inputs() {
        let calculator = SolarPositionCalculator::new();

        let summer = calculator.position(&svalbard(6, 21));
        assert!(summer.elevation_angle() > 0.0);
        let events = calculator.sun_events(&svalbard(6, 21)).unwrap();
        assert_eq!(events.polar_condition(), Some(PolarCondition::PolarDay));

        let winter = calculator.position(&svalbard(12, 21));
        assert!(winter.elevation_angle() < 0.0);
        let events = calculator.sun_events(&svalbard(12, 21)).unwrap();
        assert!(matches!(events, SunEvents::AllNight { .. }));
    }

    #[test]
    fn test_position_matches_report() {
        let calculator = SolarPositionCalculator::new();
        let report = calculator.calculate(&istanbul()).unwrap();
        assert_eq!(calculator.position(&istanbul()), *report.position());
    }

    #[test]
    fn test_horizon_configuration() {
        let input = istanbul();
        let standard = calculate(&input).unwrap();
        let civil = SolarPositionCalculator::new()
            .with_horizon(Horizon::CivilTwilight)
            .calculate(&input)
            .unwrap();
        assert!(civil.timing().sunrise() < standard.timing().sunrise());
        assert!(civil.timing().sunset() > standard.timing().sunset());

        let invalid = SolarPositionCalculator::new().with_horizon(Horizon::Custom(120.0));
        assert_eq!(
            invalid.calculate(&input),
            Err(Error::invalid_elevation_angle(120.0))
        );
        assert!(invalid.sun_events(&input).is_err());
    }

    #[test]
    fn test_sun_events_multiple() {
        let input = istanbul();
        let horizons = [
            Horizon::SunriseSunset,
            Horizon::CivilTwilight,
            Horizon::NauticalTwilight,
            Horizon::AstronomicalTwilight,
            Horizon::Custom(f64::NAN),
        ];
        let results: Vec<_> = SolarPositionCalculator::new()
            .sun_events_multiple(&input, horizons)
            .collect();

        assert_eq!(results.len(), 5);
        let (horizon, events) = results[0].unwrap();
        assert_eq!(horizon, Horizon::SunriseSunset);
        assert_eq!(events, SolarPositionCalculator::new().sun_events(&input).unwrap());

        let sunrises: Vec<f64> = results[..4]
            .iter()
            .map(|r| r.unwrap().1.sunrise().unwrap().fraction())
            .collect();
        assert!(sunrises.windows(2).all(|pair| pair[0] > pair[1]));
        assert!(results[4].is_err());
    }

    #[test]
    fn test_extreme_years_run_through() {
        for (year, month, day) in [(i32::MIN, 1, 1), (i32::MAX, 12, 31)] {
            let input = SolarInput::new(
                Observer::new(41.0, 29.0).unwrap(),
                UtcOffset::from_hours(2.0).unwrap(),
                CalendarDate::new(year, month, day).unwrap(),
                LocalTime::new(12, 0, 0.0).unwrap(),
            );

            for calculator in [
                SolarPositionCalculator::new(),
                SolarPositionCalculator::new().with_epoch(GeometryEpoch::ObservationTime),
            ] {
                assert!(calculator.julian_moment(&input).julian_day().is_finite());
                let position = calculator.position(&input);
                assert!((0.0..360.0).contains(&position.azimuth()));
                // Whatever the geometry says, no arithmetic overflow on the way
                let _ = calculator.calculate(&input);
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let first = calculate(&istanbul()).unwrap();
        let second = calculate(&istanbul()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_from_datetime() {
        use chrono::{FixedOffset, TimeZone};

        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let datetime = tz.with_ymd_and_hms(2016, 1, 1, 12, 0, 0).unwrap();
        let input = SolarInput::from_datetime(&datetime, 41.0, 29.0).unwrap();
        assert_eq!(input, istanbul());

        assert!(SolarInput::from_datetime(&datetime, 95.0, 29.0).is_err());
    }
}
