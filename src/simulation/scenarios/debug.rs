use crate::error::Result;
use crate::simulation::scenarios::{Scenario, to_context};
use crate::simulation::types::{Category, LogEntry};
use rand::prelude::*;
use rand::rngs::StdRng;
use serde::Serialize;
use std::ops::RangeInclusive;

pub const REQUEST_DEBUG_MESSAGE: &str = "Processing request";

#[derive(Serialize)]
struct RequestContext {
    request_count: u64,
    processing_time: String,
}

pub struct RequestDebug {
    pub processing_ms: RangeInclusive<u32>,
}

impl Default for RequestDebug {
    fn default() -> Self {
        Self {
            processing_ms: 10..=500,
        }
    }
}

impl Scenario for RequestDebug {
    fn category(&self) -> Category {
        Category::Debug
    }

    fn generate(&mut self, rng: &mut StdRng, iteration: u64) -> Result<LogEntry> {
        let context = RequestContext {
            request_count: iteration,
            processing_time: format!("{}ms", rng.random_range(self.processing_ms.clone())),
        };
        Ok(LogEntry::now(
            Category::Debug.level(),
            REQUEST_DEBUG_MESSAGE,
            to_context(&context, "request debug")?,
        ))
    }
}
