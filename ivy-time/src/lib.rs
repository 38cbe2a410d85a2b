//! Monotonic elapsed time measurement.
//!
//! The [`Stopwatch`] samples a [`MonotonicClock`] and reports the elapsed time
//! in any [`TimeUnit`], or formatted through [`Readout`].
mod clock;
mod error;
mod readout;
mod scope;
mod stopwatch;
mod unit;

pub use clock::{ManualClock, MonotonicClock, SystemClock};
pub use error::{Error, Result};
pub use readout::Readout;
pub use scope::TimedScope;
pub use stopwatch::Stopwatch;
pub use unit::TimeUnit;
