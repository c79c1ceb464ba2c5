use crate::error::{LogGenError, Result};

/// Runtime settings. The binary always runs with the defaults: a pause of
/// 2 to 5 whole seconds between entries, OS entropy, and no iteration limit.
/// Other values exist for tests driving the loop directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub min_delay_secs: u64,
    pub max_delay_secs: u64,
    /// Fixed RNG seed for reproducible output
    pub seed: Option<u64>,
    /// Stop after this many loop iterations
    pub max_entries: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_delay_secs: 2,
            max_delay_secs: 5,
            seed: None,
            max_entries: None,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_delay_secs > self.max_delay_secs {
            return Err(LogGenError::config(format!(
                "min_delay_secs ({}) exceeds max_delay_secs ({})",
                self.min_delay_secs, self.max_delay_secs
            )));
        }
        Ok(())
    }

    pub fn delay_range(&self) -> std::ops::RangeInclusive<u64> {
        self.min_delay_secs..=self.max_delay_secs
    }
}
