//! Fractional-day values and their `HH:MM:SS` rendering.

use crate::math::{floor, round};
use core::fmt;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// A fraction of a 24-hour local day.
///
/// Values normally lie in [0, 1). Events that fall on the previous or the next local
/// day are negative or ≥ 1.
///
/// # Example
/// ```
/// # use noaa_solar::clock::DayFraction;
/// let sunset = DayFraction::new(1.0 + 1.0 / 48.0); // 00:30 next day
/// let (day_offset, clock) = sunset.day_and_clock();
/// assert_eq!(day_offset, 1);
/// assert_eq!(clock.to_string(), "00:30:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayFraction(f64);

impl DayFraction {
    /// Wraps a raw day fraction.
    #[must_use]
    pub const fn new(fraction: f64) -> Self {
        Self(fraction)
    }

    /// Gets the raw fraction.
    #[must_use]
    pub const fn fraction(&self) -> f64 {
        self.0
    }

    /// Gets the value in minutes past local midnight.
    #[must_use]
    pub const fn minutes(&self) -> f64 {
        self.0 * 1440.0
    }

    /// Checks whether the value falls on the local day itself.
    #[must_use]
    pub fn is_within_day(&self) -> bool {
        (0.0..1.0).contains(&self.0)
    }

    /// Splits into a whole-day offset and a clock time inside that day.
    ///
    /// Rounding to the second happens first, so 23:59:59.6 becomes 00:00:00 of the
    /// following day.
    #[must_use]
    pub fn day_and_clock(&self) -> (i32, ClockTime) {
        let total = round(self.0 * SECONDS_PER_DAY);
        if !total.is_finite() {
            return (0, ClockTime::ZERO);
        }

        let day_offset = floor(total / SECONDS_PER_DAY);
        let within_day = total - day_offset * SECONDS_PER_DAY;

        let day_offset = if day_offset >= f64::from(i32::MAX) {
            i32::MAX
        } else if day_offset <= f64::from(i32::MIN) {
            i32::MIN
        } else {
            day_offset as i32
        };

        (day_offset, ClockTime::from_whole_seconds(within_day as u64))
    }

    /// Clock time inside the local day, dropping any day offset.
    #[must_use]
    pub fn clock_time(&self) -> ClockTime {
        self.day_and_clock().1
    }
}

/// A time or duration rounded to whole seconds, displayed as `HH:MM:SS`.
///
/// Hours are not wrapped, so durations of a full day render as `24:00:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockTime {
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl ClockTime {
    /// 00:00:00
    pub const ZERO: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Creates a clock time from a non-negative number of seconds.
    ///
    /// The total is rounded once, half away from zero, before it is split, so a
    /// remainder of 59.5 s or more carries into the minutes (and on into the hours).
    /// Negative and non-finite inputs give 00:00:00.
    ///
    /// # Example
    /// ```
    /// # use noaa_solar::clock::ClockTime;
    /// let t = ClockTime::from_seconds(7.0 * 3600.0 + 28.0 * 60.0 + 59.6);
    /// assert_eq!(t.to_string(), "07:29:00");
    /// ```
    #[must_use]
    pub fn from_seconds(seconds: f64) -> Self {
        let total = round(seconds);
        if !total.is_finite() || total <= 0.0 {
            return Self::ZERO;
        }
        Self::from_whole_seconds(total as u64)
    }

    /// Creates a clock time from a number of minutes.
    #[must_use]
    pub fn from_minutes(minutes: f64) -> Self {
        Self::from_seconds(minutes * 60.0)
    }

    /// Creates a clock time from a fraction of a day, without wrapping.
    #[must_use]
    pub fn from_day_fraction(fraction: f64) -> Self {
        Self::from_seconds(fraction * SECONDS_PER_DAY)
    }

    fn from_whole_seconds(total: u64) -> Self {
        let hours = u32::try_from(total / 3600).unwrap_or(u32::MAX);
        // Both remainders are below 60
        let minutes = ((total % 3600) / 60) as u32;
        let seconds = (total % 60) as u32;
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Gets the hours (not wrapped at 24).
    #[must_use]
    pub const fn hours(&self) -> u32 {
        self.hours
    }

    /// Gets the minutes (0-59).
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Gets the seconds (0-59).
    #[must_use]
    pub const fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Gets the total number of seconds.
    #[must_use]
    pub const fn total_seconds(&self) -> u64 {
        self.hours as u64 * 3600 + self.minutes as u64 * 60 + self.seconds as u64
    }

    /// Converts to a chrono `NaiveTime`, if the value lies inside one day.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn to_naive_time(&self) -> Option<chrono::NaiveTime> {
        chrono::NaiveTime::from_hms_opt(self.hours, self.minutes, self.seconds)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}
