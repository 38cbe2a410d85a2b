use std::{fmt::Display, time::Duration};

use crate::{Error, MonotonicClock, Readout, Result, SystemClock, TimeUnit};

/// Measures elapsed time with support for stopping, pausing and resuming.
///
/// The elapsed time is measured from the start anchor up to the first of:
/// - the pause anchor, while paused
/// - the stop anchor, once stopped
/// - the current instant of the clock
///
/// Resuming moves the start anchor forward by the time spent paused, which
/// hides the paused interval from every reading.
#[derive(Debug)]
pub struct Stopwatch<C = SystemClock> {
    start: u64,
    stop: Option<u64>,
    pause: Option<u64>,
    clock: C,
}

impl Stopwatch {
    /// Creates and starts a new stopwatch on the system clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: MonotonicClock> Stopwatch<C> {
    /// Creates and starts a new stopwatch reading from `clock`
    pub fn with_clock(clock: C) -> Self {
        Self {
            start: clock.now(),
            stop: None,
            pause: None,
            clock,
        }
    }

    /// Restarts the stopwatch from the current instant.
    ///
    /// An existing stop or pause anchor is kept, and keeps freezing the
    /// elapsed time.
    pub fn start(&mut self) -> &mut Self {
        self.start = self.clock.now();
        self
    }

    /// Freezes the elapsed time at the current instant.
    ///
    /// Stopping again moves the stop anchor to the later instant.
    pub fn stop(&mut self) -> &mut Self {
        self.stop = Some(self.clock.now());
        self
    }

    /// Freezes the elapsed time until [`Self::resume`] is called
    pub fn pause(&mut self) -> &mut Self {
        let now = self.clock.now();
        if let Some(previous) = self.pause.replace(now) {
            tracing::warn!(previous, now, "Stopwatch paused while already paused");
        }

        self
    }

    /// Continues a paused stopwatch, excluding the paused interval from the
    /// elapsed time.
    ///
    /// Fails without touching the stopwatch if it is not paused.
    pub fn resume(&mut self) -> Result<&mut Self> {
        let pause = self.pause.ok_or(Error::ResumeWithoutPause)?;

        let paused_for = self.clock.now().saturating_sub(pause);
        tracing::trace!(paused_for, "Resuming stopwatch");

        self.start = self.start.saturating_add(paused_for);
        self.pause = None;
        Ok(self)
    }

    /// Returns a stopwatch with the same start and stop anchors.
    ///
    /// The pause state is not carried over, so the copy is running unless the
    /// source was stopped. Anchors are independent afterwards, but the clock
    /// is cloned: for a [`ManualClock`](crate::ManualClock) both stopwatches
    /// consume readings from the one shared script.
    pub fn copy(&self) -> Self {
        Self {
            start: self.start,
            stop: self.stop,
            pause: None,
            clock: self.clock.clone(),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_some()
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_some()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn effective_stop(&self) -> u64 {
        self.pause
            .or(self.stop)
            .unwrap_or_else(|| self.clock.now())
    }

    /// Returns the elapsed time in nanoseconds.
    ///
    /// Reads as zero if the start anchor lies after a frozen stop anchor.
    pub fn nanoseconds(&self) -> u64 {
        self.effective_stop().saturating_sub(self.start)
    }

    /// Returns the elapsed time in whole microseconds
    pub fn microseconds(&self) -> u64 {
        self.in_unit(TimeUnit::Microseconds)
    }

    /// Returns the elapsed time in whole milliseconds
    pub fn milliseconds(&self) -> u64 {
        self.in_unit(TimeUnit::Milliseconds)
    }

    /// Returns the elapsed time in whole seconds
    pub fn seconds(&self) -> u64 {
        self.in_unit(TimeUnit::Seconds)
    }

    /// Returns the elapsed time in whole minutes
    pub fn minutes(&self) -> u64 {
        self.in_unit(TimeUnit::Minutes)
    }

    /// Returns the elapsed time in whole hours
    pub fn hours(&self) -> u64 {
        self.in_unit(TimeUnit::Hours)
    }

    /// Returns the elapsed time in `unit`, truncated
    pub fn in_unit(&self, unit: TimeUnit) -> u64 {
        unit.from_nanos(self.nanoseconds())
    }

    /// Looks up the elapsed time by unit name, e.g. `"seconds"`
    pub fn get(&self, name: &str) -> Result<u64> {
        let unit = name.parse::<TimeUnit>()?;
        Ok(self.in_unit(unit))
    }

    /// Samples the elapsed time once in every unit
    pub fn readout(&self) -> Readout {
        Readout::from_nanos(self.nanoseconds())
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.nanoseconds())
    }
}

impl<C: MonotonicClock> Display for Stopwatch<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.readout(), f)
    }
}

#[cfg(test)]
mod tests {
    use crate::ManualClock;

    use super::*;

    fn stopped(start: u64, stop: u64) -> Stopwatch<ManualClock> {
        let mut stopwatch = Stopwatch::with_clock(ManualClock::new([start, stop]));
        stopwatch.stop();
        stopwatch
    }

    #[test]
    fn units() {
        let stopwatch = stopped(10_000_000_000_000, 20_000_000_000_000);

        assert_eq!(stopwatch.nanoseconds(), 10_000_000_000_000);
        assert_eq!(stopwatch.microseconds(), 10_000_000_000);
        assert_eq!(stopwatch.milliseconds(), 10_000_000);
        assert_eq!(stopwatch.seconds(), 10_000);
        assert_eq!(stopwatch.minutes(), 166);
        assert_eq!(stopwatch.hours(), 2);
        assert_eq!(stopwatch.elapsed(), Duration::from_secs(10_000));
        assert!(stopwatch.is_stopped());
    }

    #[test]
    fn accessors_match_units() {
        let stopwatch = stopped(3, 7_384_123_456_789);
        let readout = stopwatch.readout();

        assert_eq!(stopwatch.hours(), 2);
        assert_eq!(stopwatch.minutes(), 123);
        for unit in TimeUnit::ALL {
            assert_eq!(stopwatch.in_unit(unit), readout.get(unit));
            assert_eq!(stopwatch.in_unit(unit), unit.from_nanos(7_384_123_456_786));
        }
    }

    #[test]
    fn named_lookup() {
        let stopwatch = stopped(1_000, 3_100);

        assert_eq!(stopwatch.get("nanoseconds"), Ok(2_100));
        assert_eq!(stopwatch.get("microseconds"), Ok(2));
        assert_eq!(stopwatch.get("hours"), Ok(0));
        assert_eq!(
            stopwatch.get("days"),
            Err(Error::InvalidPropertyName("days".into()))
        );
    }

    #[test]
    fn stop_overwrites() {
        let mut stopwatch = Stopwatch::with_clock(ManualClock::new([0, 10, 25]));
        stopwatch.stop();
        assert_eq!(stopwatch.nanoseconds(), 10);

        stopwatch.stop();
        assert_eq!(stopwatch.nanoseconds(), 25);
    }

    #[test]
    fn pause() {
        let clock = ManualClock::new([10, 20, 30, 40, 50]);
        let mut stopwatch = Stopwatch::with_clock(clock.clone());
        stopwatch.pause();

        assert!(stopwatch.is_paused());
        assert_eq!(stopwatch.nanoseconds(), 10);
        assert_eq!(stopwatch.nanoseconds(), 10);

        // Paused readings never sample the clock
        assert_eq!(clock.remaining(), 3);
    }

    #[test]
    fn resume() {
        let mut stopwatch = Stopwatch::with_clock(ManualClock::new([10, 20, 30, 40]));
        stopwatch.pause();
        assert_eq!(stopwatch.nanoseconds(), 10);

        stopwatch.resume().unwrap();
        assert!(!stopwatch.is_paused());
        assert_eq!(stopwatch.nanoseconds(), 20);
    }

    #[test]
    fn resume_without_pause() {
        let clock = ManualClock::new([10, 20]);
        let mut stopwatch = Stopwatch::with_clock(clock.clone());

        assert_eq!(stopwatch.resume().err(), Some(Error::ResumeWithoutPause));
        // Nothing was sampled
        assert_eq!(clock.remaining(), 1);
        assert_eq!(stopwatch.nanoseconds(), 10);
    }

    #[test]
    fn pause_takes_precedence_over_stop() {
        let mut stopwatch = Stopwatch::with_clock(ManualClock::new([0, 5, 9]));
        stopwatch.pause().stop();

        assert_eq!(stopwatch.nanoseconds(), 5);

        stopwatch.resume().unwrap();
        // Resume sampled the repeated last reading, 9, moving start to 4
        assert_eq!(stopwatch.nanoseconds(), 5);
    }

    #[test]
    fn start_keeps_stop() {
        let mut stopwatch = Stopwatch::with_clock(ManualClock::new([0, 10, 20]));
        stopwatch.stop().start();

        assert!(stopwatch.is_stopped());
        assert_eq!(stopwatch.nanoseconds(), 0);
    }

    #[test]
    fn format() {
        assert_eq!(stopped(1, 31).to_string(), "30 ns");
        assert_eq!(stopped(1_000, 3_100).to_string(), "2.100 us");
        assert_eq!(stopped(1_000_000, 3_100_000).to_string(), "2.100 ms");
    }
}
