use crate::error::Result;
use crate::simulation::scenarios::{Scenario, to_context};
use crate::simulation::types::{Category, ERROR_MESSAGES, LogEntry};
use rand::prelude::*;
use rand::rngs::StdRng;
use serde::Serialize;
use std::ops::RangeInclusive;
use uuid::Builder;

#[derive(Serialize)]
struct ErrorContext {
    error_code: u16,
    request_id: String,
}

pub fn sample_error_message<R: Rng>(rng: &mut R) -> &'static str {
    ERROR_MESSAGES.choose(rng).copied().unwrap_or(ERROR_MESSAGES[0])
}

/// Fresh request token: a v4 UUID from the given RNG, as 32 lowercase hex chars.
pub fn request_id<R: Rng>(rng: &mut R) -> String {
    Builder::from_random_bytes(rng.random())
        .into_uuid()
        .simple()
        .to_string()
}

pub struct ServiceError {
    pub status_codes: RangeInclusive<u16>,
}

impl Default for ServiceError {
    fn default() -> Self {
        Self {
            status_codes: 500..=599,
        }
    }
}

impl Scenario for ServiceError {
    fn category(&self) -> Category {
        Category::Error
    }

    fn generate(&mut self, rng: &mut StdRng, _iteration: u64) -> Result<LogEntry> {
        let message = sample_error_message(rng);
        let context = ErrorContext {
            error_code: rng.random_range(self.status_codes.clone()),
            request_id: request_id(rng),
        };
        Ok(LogEntry::now(
            Category::Error.level(),
            message,
            to_context(&context, "service error")?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_error_message_from_pool() {
        let mut rng = StdRng::seed_from_u64(11);
        let seen: HashSet<&str> = (0..500).map(|_| sample_error_message(&mut rng)).collect();
        assert!(seen.iter().all(|m| ERROR_MESSAGES.contains(m)));
        assert_eq!(seen.len(), ERROR_MESSAGES.len());
    }

    #[test]
    fn test_error_code_range_and_unique_request_ids() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut scenario = ServiceError::default();
        let mut ids = HashSet::new();

        for _ in 0..1_000 {
            let entry = scenario.generate(&mut rng, 1).unwrap();
            let code = entry.get("error_code").and_then(|v| v.as_u64()).unwrap();
            assert!((500..=599).contains(&code));

            let id = entry.get("request_id").and_then(|v| v.as_str()).unwrap();
            assert_eq!(id.len(), 32);
            assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
            assert!(ids.insert(id.to_string()), "duplicate request id {id}");
        }
    }
}
