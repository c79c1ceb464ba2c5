//! The emission loop.
//!
//! One iteration: bump the loop counter, generate, emit, then sleep a whole
//! number of seconds. The sleep races the cancellation token so shutdown
//! never waits out a full pause.

use crate::config::GeneratorConfig;
use crate::emitter::Emitter;
use crate::error::Result;
use crate::simulation::{EngineStats, LogEngine};
use std::future::Future;
use std::io::Write;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Outcome of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Loop iterations completed, excluding the startup entry
    pub iterations: u64,
    pub stats: EngineStats,
    pub cancelled: bool,
}

/// Cancel `cancel` once `signal` resolves. A signal that fails to install
/// is logged and leaves the token alone, so the run keeps going.
pub async fn shutdown_on<F>(signal: F, cancel: CancellationToken)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => {
            info!("Interrupt received, shutting down.");
            cancel.cancel();
        }
        Err(e) => error!(error = %e, "Failed to install interrupt handler."),
    }
}

pub async fn run<P: Write, D: Write>(
    config: &GeneratorConfig,
    engine: &mut LogEngine,
    emitter: &mut Emitter<P, D>,
    cancel: CancellationToken,
) -> Result<RunSummary> {
    config.validate()?;

    emitter.emit(&engine.startup_entry())?;
    info!(
        min_delay_secs = config.min_delay_secs,
        max_delay_secs = config.max_delay_secs,
        max_entries = ?config.max_entries,
        "Log generator running."
    );

    let mut counter: u64 = 0;
    let mut cancelled = false;

    loop {
        if cancel.is_cancelled() {
            cancelled = true;
            break;
        }

        counter += 1;
        let entry = engine.tick(counter)?;
        emitter.emit(&entry)?;
        debug!(iteration = counter, level = %entry.level, "Entry emitted.");

        if config.max_entries.is_some_and(|max| counter >= max) {
            break;
        }

        let delay = Duration::from_secs(engine.draw_delay_secs(config.delay_range()));
        tokio::select! {
            _ = cancel.cancelled() => {
                cancelled = true;
                break;
            }
            _ = tokio::time::sleep(delay) => {}
        }
    }

    info!(iterations = counter, cancelled, "Log generator stopped.");

    Ok(RunSummary {
        iterations: counter,
        stats: engine.stats().clone(),
        cancelled,
    })
}
