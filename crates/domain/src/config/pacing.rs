use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delay inserted between records to stay under authoritative rate limits
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PacingConfig {
    /// Upper bound in seconds of the random pause after each record.
    /// `None` disables pausing.
    #[serde(default)]
    pub max_delay_secs: Option<f64>,
}

impl PacingConfig {
    pub fn max_delay(&self) -> Option<Duration> {
        self.max_delay_secs
            .filter(|secs| *secs > 0.0)
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
    }
}
