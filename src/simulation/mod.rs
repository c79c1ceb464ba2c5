//! Synthetic entry generation: types, weighted category draw, per-category
//! scenarios and the engine tying them together.

pub mod engine;
pub mod scenarios;
pub mod types;
pub mod weighted;

pub use engine::{EngineStats, LogEngine, STARTUP_MESSAGE};
pub use types::{ActivitySample, Category, Context, Level, LogEntry};
pub use weighted::WeightedTable;
