//! Entry scenarios, one per category:
//! - **activity**: simulated user actions (INFO)
//! - **warning**: memory pressure warnings (WARNING)
//! - **error**: canned service failures (ERROR)
//! - **debug**: request processing traces (DEBUG)

pub mod activity;
pub mod debug;
pub mod error;
pub mod warning;

use crate::error::{LogGenError, Result};
use crate::simulation::types::{Category, Context, LogEntry};
use rand::rngs::StdRng;
use serde::Serialize;
use serde_json::Value;

/// Trait for entry scenarios
///
/// A scenario turns one loop iteration into exactly one entry of its category.
/// `iteration` is the 1-based loop counter owned by the caller.
pub trait Scenario: Send {
    fn category(&self) -> Category;

    fn generate(&mut self, rng: &mut StdRng, iteration: u64) -> Result<LogEntry>;
}

pub use activity::{UserActivity, sample_activity};
pub use debug::RequestDebug;
pub use error::{ServiceError, request_id, sample_error_message};
pub use warning::MemoryWarning;

/// Create the default scenario for a category
pub fn create_scenario(category: Category) -> Box<dyn Scenario> {
    match category {
        Category::Activity => Box::new(UserActivity),
        Category::Warning => Box::new(MemoryWarning::default()),
        Category::Error => Box::new(ServiceError::default()),
        Category::Debug => Box::new(RequestDebug::default()),
    }
}

/// Serialize a struct into an ordered context object.
pub(crate) fn to_context<T: Serialize>(value: &T, what: &str) -> Result<Context> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(LogGenError::config(format!(
            "{what} context must be an object, got {other}"
        ))),
        Err(source) => Err(LogGenError::Serialization {
            context: what.to_string(),
            source,
        }),
    }
}
