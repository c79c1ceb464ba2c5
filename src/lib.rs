//! # loggen - synthetic log traffic
//!
//! Emits an endless stream of structured log lines for exercising log
//! collection pipelines:
//!
//! ```text
//! [2024-03-09 07:05:03] INFO: User activity: login {"user":"alice","action":"login",...}
//! [2024-03-09 07:05:06] ERROR: Timeout occurred {"error_code":503,"request_id":"..."}
//! ```
//!
//! Each iteration draws a category (60% activity, 20% warning, 10% error,
//! 10% debug), writes the line to the primary stream, mirrors ERROR lines to
//! the diagnostic stream, then pauses 2 to 5 seconds.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use loggen::{Emitter, GeneratorConfig, LogEngine, run};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn demo() -> loggen::Result<()> {
//! let config = GeneratorConfig::default();
//! let mut engine = LogEngine::from_seed(config.seed)?;
//! let mut emitter = Emitter::stdio();
//! run(&config, &mut engine, &mut emitter, CancellationToken::new()).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod emitter;
pub mod error;
pub mod runner;
pub mod simulation;

pub use config::GeneratorConfig;
pub use emitter::{Emitter, format_line};
pub use error::{LogGenError, Result};
pub use runner::{RunSummary, run, shutdown_on};
pub use simulation::{
    ActivitySample, Category, Context, EngineStats, Level, LogEntry, LogEngine, WeightedTable,
    scenarios::{self, Scenario, create_scenario, sample_activity, sample_error_message},
};
