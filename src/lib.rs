//! # Ivy Stopwatch
//!
//! ## What it is
//!
//! A monotonic stopwatch which can be stopped, paused and resumed, and which
//! reports the elapsed time in any unit from nanoseconds to hours.
//!
//! ## How it works
//!
//! A [`Stopwatch`] keeps three readings of a [`MonotonicClock`]: when it was
//! started, when it was stopped, and when it was paused. The elapsed time
//! always runs from the start reading to the pause reading if paused, else the
//! stop reading if stopped, else the current instant.
//!
//! Resuming pushes the start reading forward by however long the stopwatch was
//! paused, so paused time never shows up in a reading.
//!
//! ```
//! use ivy_stopwatch::{ManualClock, Stopwatch};
//!
//! let mut stopwatch = Stopwatch::with_clock(ManualClock::new([10, 20, 30, 40]));
//! stopwatch.pause();
//! assert_eq!(stopwatch.nanoseconds(), 10);
//!
//! stopwatch.resume()?;
//! assert_eq!(stopwatch.nanoseconds(), 20);
//! assert_eq!(stopwatch.to_string(), "20 ns");
//! # Ok::<_, ivy_stopwatch::Error>(())
//! ```
//!
//! The clock is injected, which makes every state transition reproducible in
//! tests through [`ManualClock`]. [`Stopwatch::new`] uses the [`SystemClock`].

pub use ivy_time as time;

pub use ivy_time::{
    Error, ManualClock, MonotonicClock, Readout, Result, Stopwatch,
    SystemClock, TimeUnit, TimedScope,
};
