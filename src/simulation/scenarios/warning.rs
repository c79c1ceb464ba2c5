use crate::error::Result;
use crate::simulation::scenarios::{Scenario, to_context};
use crate::simulation::types::{Category, LogEntry};
use rand::prelude::*;
use rand::rngs::StdRng;
use serde::Serialize;
use std::ops::RangeInclusive;

pub const MEMORY_WARNING_MESSAGE: &str = "High memory usage detected";

#[derive(Serialize)]
struct MemoryContext {
    memory_usage: String,
    threshold: String,
}

pub struct MemoryWarning {
    pub usage_pct: RangeInclusive<u32>,
    pub threshold_pct: u32,
}

impl Default for MemoryWarning {
    fn default() -> Self {
        Self {
            usage_pct: 70..=90,
            threshold_pct: 85,
        }
    }
}

impl Scenario for MemoryWarning {
    fn category(&self) -> Category {
        Category::Warning
    }

    fn generate(&mut self, rng: &mut StdRng, _iteration: u64) -> Result<LogEntry> {
        let usage = rng.random_range(self.usage_pct.clone());
        let context = MemoryContext {
            memory_usage: format!("{usage}%"),
            threshold: format!("{}%", self.threshold_pct),
        };
        Ok(LogEntry::now(
            Category::Warning.level(),
            MEMORY_WARNING_MESSAGE,
            to_context(&context, "memory warning")?,
        ))
    }
}
