//! Log Engine
//!
//! Picks a category per iteration from the weighted table and hands the
//! iteration to that category's scenario. No I/O happens here.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 LogEngine                    │
//! │  ┌──────────────┐      ┌──────────────────┐  │
//! │  │ WeightedTable│─────▶│ Scenarios (x4)   │  │
//! │  │  6 / 2 / 1 / 1      │ activity, warn.. │  │
//! │  └──────────────┘      └──────────────────┘  │
//! │                               │              │
//! │                               ▼              │
//! │                          LogEntry            │
//! └──────────────────────────────────────────────┘
//! ```

use crate::error::Result;
use crate::simulation::scenarios::{self, Scenario};
use crate::simulation::types::{Category, Context, Level, LogEntry};
use crate::simulation::weighted::WeightedTable;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

pub const STARTUP_MESSAGE: &str = "Log generator started";

pub struct LogEngine {
    rng: StdRng,
    table: WeightedTable<Category>,
    scenarios: Vec<Box<dyn Scenario>>,
    stats: EngineStats,
}

/// Entry counts since the engine was created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineStats {
    pub total: u64,
    pub info: u64,
    pub warning: u64,
    pub error: u64,
    pub debug: u64,
}

impl EngineStats {
    fn record(&mut self, level: Level) {
        self.total += 1;
        match level {
            Level::Info => self.info += 1,
            Level::Warning => self.warning += 1,
            Level::Error => self.error += 1,
            Level::Debug => self.debug += 1,
        }
    }
}

impl LogEngine {
    /// Engine seeded from OS entropy
    pub fn new() -> Result<Self> {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Engine with a reproducible sequence of draws
    pub fn seeded(seed: u64) -> Result<Self> {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_seed(seed: Option<u64>) -> Result<Self> {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }

    fn with_rng(rng: StdRng) -> Result<Self> {
        Ok(Self {
            rng,
            table: Category::default_table()?,
            scenarios: Category::ALL
                .into_iter()
                .map(scenarios::create_scenario)
                .collect(),
            stats: EngineStats::default(),
        })
    }

    pub fn table(&self) -> &WeightedTable<Category> {
        &self.table
    }

    pub fn draw_category(&mut self) -> Category {
        self.table.sample(&mut self.rng)
    }

    /// Whole-second pause before the next iteration.
    pub fn draw_delay_secs(&mut self, range: RangeInclusive<u64>) -> u64 {
        self.rng.random_range(range)
    }

    /// Generate the entry for one loop iteration (1-based).
    pub fn tick(&mut self, iteration: u64) -> Result<LogEntry> {
        let category = self.draw_category();
        self.tick_category(category, iteration)
    }

    /// Generate an entry for a fixed category, bypassing the draw.
    pub fn tick_category(&mut self, category: Category, iteration: u64) -> Result<LogEntry> {
        let entry = match self.scenarios.iter_mut().find(|s| s.category() == category) {
            Some(scenario) => scenario.generate(&mut self.rng, iteration)?,
            None => scenarios::create_scenario(category).generate(&mut self.rng, iteration)?,
        };
        self.stats.record(entry.level);
        Ok(entry)
    }

    /// Announcement printed once before the first iteration.
    pub fn startup_entry(&mut self) -> LogEntry {
        let entry = LogEntry::now(Level::Info, STARTUP_MESSAGE, Context::new());
        self.stats.record(entry.level);
        entry
    }

    pub fn stats(&self) -> &EngineStats {
        &self.stats
    }
}
