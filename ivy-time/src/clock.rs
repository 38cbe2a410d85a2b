//! Monotonic time sources a [`Stopwatch`](crate::Stopwatch) samples from.
use std::{collections::VecDeque, sync::Arc, time::Instant};

use once_cell::sync::Lazy;
use parking_lot::Mutex;

/// Process wide epoch so that every [`SystemClock`] agrees on its readings
static EPOCH: Lazy<Instant> = Lazy::new(Instant::now);

/// A source of monotonic, non-decreasing instants.
///
/// Readings are nanoseconds from an arbitrary epoch, and are only meaningful
/// relative to other readings of the same source.
pub trait MonotonicClock: Clone {
    /// Returns the current instant in nanoseconds
    fn now(&self) -> u64;
}

/// Reads the monotonic clock of the host through [`Instant`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock;

impl MonotonicClock for SystemClock {
    fn now(&self) -> u64 {
        // Saturates after ~584 years of uptime
        u64::try_from(EPOCH.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

#[derive(Debug, Default)]
struct Script {
    readings: VecDeque<u64>,
    last: u64,
}

/// A clock which yields a scripted sequence of readings.
///
/// Every call to [`MonotonicClock::now`] consumes the next reading. Once the
/// sequence is exhausted the last reading is repeated. Clones share the same
/// sequence, so a stopwatch and its copies advance the script together.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    script: Arc<Mutex<Script>>,
}

impl ManualClock {
    pub fn new(readings: impl IntoIterator<Item = u64>) -> Self {
        let clock = Self::default();
        clock.extend(readings);
        clock
    }

    /// Appends a reading to the end of the script
    pub fn push(&self, reading: u64) {
        self.script.lock().readings.push_back(reading);
    }

    pub fn extend(&self, readings: impl IntoIterator<Item = u64>) {
        self.script.lock().readings.extend(readings);
    }

    /// Returns the number of scripted readings not yet consumed
    pub fn remaining(&self) -> usize {
        self.script.lock().readings.len()
    }
}

impl MonotonicClock for ManualClock {
    fn now(&self) -> u64 {
        let mut script = self.script.lock();
        if let Some(reading) = script.readings.pop_front() {
            script.last = reading;
        }

        script.last
    }
}
