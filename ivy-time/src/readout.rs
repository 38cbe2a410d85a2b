use std::fmt::Display;

use crate::TimeUnit;

/// An elapsed time broken down into every [`TimeUnit`], all derived from the
/// same nanosecond reading.
///
/// Each unit is truncated, not rounded, so `minutes` holds the whole minutes
/// elapsed while `seconds` still holds *all* the elapsed seconds.
///
/// Serializes as the nanosecond count alone.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u64", into = "u64"))]
pub struct Readout {
    pub nanoseconds: u64,
    pub microseconds: u64,
    pub milliseconds: u64,
    pub seconds: u64,
    pub minutes: u64,
    pub hours: u64,
}

impl Readout {
    pub fn from_nanos(nanoseconds: u64) -> Self {
        Self {
            nanoseconds,
            microseconds: TimeUnit::Microseconds.from_nanos(nanoseconds),
            milliseconds: TimeUnit::Milliseconds.from_nanos(nanoseconds),
            seconds: TimeUnit::Seconds.from_nanos(nanoseconds),
            minutes: TimeUnit::Minutes.from_nanos(nanoseconds),
            hours: TimeUnit::Hours.from_nanos(nanoseconds),
        }
    }

    pub fn get(&self, unit: TimeUnit) -> u64 {
        match unit {
            TimeUnit::Nanoseconds => self.nanoseconds,
            TimeUnit::Microseconds => self.microseconds,
            TimeUnit::Milliseconds => self.milliseconds,
            TimeUnit::Seconds => self.seconds,
            TimeUnit::Minutes => self.minutes,
            TimeUnit::Hours => self.hours,
        }
    }
}

impl From<u64> for Readout {
    fn from(nanoseconds: u64) -> Self {
        Self::from_nanos(nanoseconds)
    }
}

impl From<Readout> for u64 {
    fn from(readout: Readout) -> Self {
        readout.nanoseconds
    }
}

impl Display for Readout {
    /// Formats the coarsest non-zero unit as `<whole>.<fraction> <symbol>`.
    ///
    /// The fraction is the remainder in the next finer unit, except for hours
    /// where it is the whole minutes divided by 60 once more.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (whole, fraction, unit) = if self.hours > 0 {
            (self.hours, self.minutes / 60, TimeUnit::Hours)
        } else if self.minutes > 0 {
            (self.minutes, self.seconds % 60, TimeUnit::Minutes)
        } else if self.seconds > 0 {
            (self.seconds, self.milliseconds % 1000, TimeUnit::Seconds)
        } else if self.milliseconds > 0 {
            (
                self.milliseconds,
                self.microseconds % 1000,
                TimeUnit::Milliseconds,
            )
        } else if self.microseconds > 0 {
            (
                self.microseconds,
                self.nanoseconds % 1000,
                TimeUnit::Microseconds,
            )
        } else {
            return write!(f, "{} {}", self.nanoseconds, TimeUnit::Nanoseconds.symbol());
        };

        write!(f, "{whole}.{fraction} {}", unit.symbol())
    }
}
