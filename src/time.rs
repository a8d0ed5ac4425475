//! Calendar, clock and Julian date inputs of the solar pipeline.
//!
//! Dates are proleptic Gregorian. The Julian Day follows Meeus, "Astronomical
//! Algorithms", with January and February counted as months 13 and 14 of the
//! previous year.

#![allow(clippy::unreadable_literal)]

use crate::error::check_utc_offset;
use crate::math::floor;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{Datelike, Timelike};

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UT)
pub const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

const HOURS_PER_DAY: f64 = 24.0;

/// A validated proleptic Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Creates a calendar date.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the month is outside 1-12 or the day does not exist
    /// in that month of that year.
    ///
    /// # Example
    /// ```
    /// # use noaa_solar::time::CalendarDate;
    /// assert!(CalendarDate::new(2024, 2, 29).is_ok());
    /// assert!(CalendarDate::new(2023, 2, 29).is_err());
    /// ```
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_date("month must be between 1 and 12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::invalid_date("day is out of range for month"));
        }
        Ok(Self { year, month, day })
    }

    /// Creates a calendar date from a chrono `NaiveDate`.
    ///
    /// # Errors
    /// Never fails for dates chrono can represent; kept fallible for symmetry with [`CalendarDate::new`].
    #[cfg(feature = "chrono")]
    pub fn from_naive_date(date: chrono::NaiveDate) -> Result<Self> {
        Self::new(date.year(), date.month(), date.day())
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }
}

/// Elapsed time past local midnight.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LocalTime {
    hour: u32,
    minute: u32,
    second: f64,
}

impl LocalTime {
    /// Local midnight.
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0.0,
    };

    /// Creates a local time-of-day.
    ///
    /// # Errors
    /// Returns `InvalidTime` if hour is outside 0-23, minute outside 0-59 or second
    /// outside [0, 60).
    ///
    /// # Example
    /// ```
    /// # use noaa_solar::time::LocalTime;
    /// let noon = LocalTime::new(12, 0, 0.0).unwrap();
    /// assert_eq!(noon.day_fraction(), 0.5);
    /// ```
    pub fn new(hour: u32, minute: u32, second: f64) -> Result<Self> {
        if hour > 23 {
            return Err(Error::invalid_time("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_time("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_time("second must be between 0 and 59.999..."));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Creates a local time from a chrono `NaiveTime`.
    ///
    /// A leap second is folded into the last second of its minute.
    ///
    /// # Errors
    /// Never fails for times chrono can represent; kept fallible for symmetry with [`LocalTime::new`].
    #[cfg(feature = "chrono")]
    pub fn from_naive_time(time: chrono::NaiveTime) -> Result<Self> {
        let nanos = time.nanosecond().min(999_999_999);
        Self::new(
            time.hour(),
            time.minute(),
            f64::from(time.second()) + f64::from(nanos) / 1e9,
        )
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

    /// Gets the second, including any fraction.
    #[must_use]
    pub const fn second(&self) -> f64 {
        self.second
    }

    /// Fraction of the local day elapsed, in [0, 1).
    #[must_use]
    pub fn day_fraction(&self) -> f64 {
        (f64::from(self.hour) + f64::from(self.minute) / 60.0 + self.second / 3600.0)
            / HOURS_PER_DAY
    }
}

/// Offset of local clock time from UTC, in hours (east positive).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UtcOffset(f64);

impl UtcOffset {
    /// UTC itself.
    pub const UTC: Self = Self(0.0);

    /// Creates an offset from signed, possibly fractional hours.
    ///
    /// # Errors
    /// Returns `InvalidUtcOffset` if the offset is not finite or beyond ±18 hours.
    ///
    /// # Example
    /// ```
    /// # use noaa_solar::time::UtcOffset;
    /// let india = UtcOffset::from_hours(5.5).unwrap();
    /// assert_eq!(india.minutes(), 330.0);
    /// ```
    pub fn from_hours(hours: f64) -> Result<Self> {
        check_utc_offset(hours)?;
        Ok(Self(hours))
    }

    /// Creates an offset from whole seconds east of UTC.
    ///
    /// # Errors
    /// Returns `InvalidUtcOffset` if the offset is beyond ±18 hours.
    pub fn from_seconds(seconds: i32) -> Result<Self> {
        Self::from_hours(f64::from(seconds) / 3600.0)
    }

    /// Gets the offset in hours.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Gets the offset in minutes.
    #[must_use]
    pub const fn minutes(&self) -> f64 {
        self.0 * 60.0
    }
}

/// Julian Day and Julian Century of one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianMoment {
    julian_day: f64,
    julian_century: f64,
}

impl JulianMoment {
    /// Julian moment of 0h UT on a calendar date.
    ///
    /// # Example
    /// ```
    /// # use noaa_solar::time::{CalendarDate, JulianMoment};
    /// let date = CalendarDate::new(2016, 1, 1).unwrap();
    /// assert_eq!(JulianMoment::from_date(date).julian_day(), 2_457_388.5);
    /// ```
    #[must_use]
    pub fn from_date(date: CalendarDate) -> Self {
        Self::from_julian_day(calculate_julian_day(date))
    }

    /// Julian moment of a local clock time on a calendar date.
    ///
    /// JD = JD(date) + fraction of the local day − offset / 24.
    #[must_use]
    pub fn from_local_time(date: CalendarDate, time: LocalTime, offset: UtcOffset) -> Self {
        Self::from_julian_day(
            calculate_julian_day(date) + time.day_fraction() - offset.hours() / HOURS_PER_DAY,
        )
    }

    /// Julian moment of a raw Julian Day value.
    #[must_use]
    pub fn from_julian_day(julian_day: f64) -> Self {
        Self {
            julian_day,
            julian_century: (julian_day - J2000_JDN) / DAYS_PER_CENTURY,
        }
    }

    /// Gets the Julian Day.
    #[must_use]
    pub const fn julian_day(&self) -> f64 {
        self.julian_day
    }

    /// Gets the Julian Century since J2000.0.
    #[must_use]
    pub const fn julian_century(&self) -> f64 {
        self.julian_century
    }
}

// Deserialized values go through the same checks as the constructors.

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> core::result::Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Fields {
            year: i32,
            month: u32,
            day: u32,
        }

        let Fields { year, month, day } = Fields::deserialize(deserializer)?;
        Self::new(year, month, day).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LocalTime {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> core::result::Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Fields {
            hour: u32,
            minute: u32,
            second: f64,
        }

        let Fields {
            hour,
            minute,
            second,
        } = Fields::deserialize(deserializer)?;
        Self::new(hour, minute, second).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UtcOffset {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> core::result::Result<Self, D::Error> {
        let hours = f64::deserialize(deserializer)?;
        Self::from_hours(hours).map_err(serde::de::Error::custom)
    }
}

/// Julian Day at 0h UT of a proleptic Gregorian date.
fn calculate_julian_day(date: CalendarDate) -> f64 {
    // January and February are months 13 and 14 of the previous year.
    // Shifted in f64 so that i32::MIN stays representable.
    let (y, m) = if date.month <= 2 {
        (f64::from(date.year) - 1.0, f64::from(date.month) + 12.0)
    } else {
        (f64::from(date.year), f64::from(date.month))
    };

    let a = floor(y / 100.0);
    let b = 2.0 - a + floor(a / 4.0);

    floor(365.25 * (y + 4716.0)) + floor(30.6001 * (m + 1.0)) + f64::from(date.day) + b - 1524.5
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}
