use crate::{MonotonicClock, Stopwatch, SystemClock};

/// Times the execution of a scope and executes the provided function with the
/// stopped stopwatch when dropped
pub struct TimedScope<F: FnOnce(&Stopwatch<C>), C: MonotonicClock = SystemClock> {
    func: Option<F>,
    stopwatch: Stopwatch<C>,
}

impl<F: FnOnce(&Stopwatch)> TimedScope<F> {
    pub fn new(func: F) -> Self {
        Self::with_clock(SystemClock, func)
    }
}

impl<F: FnOnce(&Stopwatch<C>), C: MonotonicClock> TimedScope<F, C> {
    pub fn with_clock(clock: C, func: F) -> Self {
        TimedScope {
            func: Some(func),
            stopwatch: Stopwatch::with_clock(clock),
        }
    }

    pub fn stopwatch(&self) -> &Stopwatch<C> {
        &self.stopwatch
    }
}

impl TimedScope<Box<dyn FnOnce(&Stopwatch)>> {
    /// Logs the elapsed time of the scope at debug level
    pub fn logged(label: impl Into<String>) -> Self {
        let label = label.into();
        Self::new(Box::new(move |stopwatch| {
            tracing::debug!(%label, elapsed = %stopwatch, "Scope finished");
        }))
    }
}

impl<F: FnOnce(&Stopwatch<C>), C: MonotonicClock> Drop for TimedScope<F, C> {
    fn drop(&mut self) {
        self.stopwatch.stop();
        if let Some(f) = self.func.take() {
            f(&self.stopwatch)
        }
    }
}
