//! log_gen - synthetic log traffic for pipeline testing
//!
//! Takes no arguments. Runs until the process is stopped from outside.

use loggen::{Emitter, GeneratorConfig, LogEngine, run, shutdown_on};
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // stdout carries the generated stream; only our own failures reach stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();

    let config = GeneratorConfig::default();

    let cancel = CancellationToken::new();
    tokio::spawn(shutdown_on(tokio::signal::ctrl_c(), cancel.clone()));

    let mut engine = match LogEngine::from_seed(config.seed) {
        Ok(engine) => engine,
        Err(e) => {
            error!(error = %e, "Failed to build log engine.");
            return ExitCode::FAILURE;
        }
    };
    let mut emitter = Emitter::stdio();

    match run(&config, &mut engine, &mut emitter, cancel).await {
        Ok(summary) => {
            info!(
                iterations = summary.iterations,
                errors = summary.stats.error,
                "Run complete."
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Log generator failed.");
            ExitCode::FAILURE
        }
    }
}
