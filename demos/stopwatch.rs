use std::{thread, time::Duration};

use ivy_stopwatch::{Stopwatch, TimeUnit, TimedScope};
use tracing_subscriber::{layer::SubscriberExt, registry, util::SubscriberInitExt, EnvFilter};
use tracing_tree::HierarchicalLayer;

pub fn main() -> anyhow::Result<()> {
    registry()
        .with(EnvFilter::from_default_env())
        .with(
            HierarchicalLayer::default()
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_span_retrace(true),
        )
        .init();

    let _scope = TimedScope::logged("demo");

    let mut stopwatch = Stopwatch::new();
    thread::sleep(Duration::from_millis(25));

    stopwatch.pause();
    tracing::info!(elapsed = %stopwatch, "Paused");

    // Not counted
    thread::sleep(Duration::from_millis(100));

    stopwatch.resume()?;
    thread::sleep(Duration::from_millis(500));
    stopwatch.stop();

    let lap = stopwatch.copy();
    for unit in TimeUnit::ALL {
        tracing::info!("{unit}: {}", lap.in_unit(unit));
    }

    tracing::info!(milliseconds = stopwatch.get("milliseconds")?, elapsed = %stopwatch, "Stopped");

    Ok(())
}
