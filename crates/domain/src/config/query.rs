use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Timeout of the first attempt, in seconds. Doubled after each timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Largest timeout that is still attempted, in seconds.
    #[serde(default = "default_max_timeout_secs")]
    pub max_timeout_secs: u64,

    /// Force TTLs to 0 before comparing answers
    #[serde(default)]
    pub ignore_ttl: bool,
}

impl QueryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn max_timeout(&self) -> Duration {
        Duration::from_secs(self.max_timeout_secs)
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_timeout_secs: default_max_timeout_secs(),
            ignore_ttl: false,
        }
    }
}

fn default_timeout_secs() -> u64 {
    2
}

fn default_max_timeout_secs() -> u64 {
    8
}
