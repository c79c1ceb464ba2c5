use crate::error::Result;
use crate::simulation::scenarios::{Scenario, to_context};
use crate::simulation::types::{
    ACTIONS, ActivitySample, Category, IP_PREFIX, LogEntry, PAGES, USER_AGENT, USERS,
};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Draw one simulated user action. Each field is sampled independently.
pub fn sample_activity<R: Rng>(rng: &mut R) -> ActivitySample {
    // pools are non-empty consts
    let user = USERS.choose(rng).copied().unwrap_or(USERS[0]);
    let action = ACTIONS.choose(rng).copied().unwrap_or(ACTIONS[0]);
    let page = PAGES.choose(rng).copied().unwrap_or(PAGES[0]);

    ActivitySample {
        user: user.to_string(),
        action: action.to_string(),
        page: page.to_string(),
        ip: format!("{}.{}", IP_PREFIX, rng.random_range(1..=254u8)),
        user_agent: USER_AGENT.to_string(),
    }
}

pub struct UserActivity;

impl Scenario for UserActivity {
    fn category(&self) -> Category {
        Category::Activity
    }

    fn generate(&mut self, rng: &mut StdRng, _iteration: u64) -> Result<LogEntry> {
        let sample = sample_activity(rng);
        let message = format!("User activity: {}", sample.action);
        Ok(LogEntry::now(
            Category::Activity.level(),
            message,
            to_context(&sample, "activity")?,
        ))
    }
}
