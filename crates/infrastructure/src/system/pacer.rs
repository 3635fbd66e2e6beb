use async_trait::async_trait;
use std::time::Duration;
use tracing::trace;
use zonediff_application::ports::Pacer;

/// Sleeps a uniformly random duration in `[0, max]`, at nanosecond resolution.
#[derive(Debug, Default, Clone, Copy)]
pub struct JitterPacer;

impl JitterPacer {
    pub fn new() -> Self {
        Self
    }

    fn pick(max: Duration) -> Duration {
        let ceiling = u64::try_from(max.as_nanos()).unwrap_or(u64::MAX);
        Duration::from_nanos(fastrand::u64(..=ceiling))
    }
}

#[async_trait]
impl Pacer for JitterPacer {
    async fn pause(&self, max: Duration) {
        let delay = Self::pick(max);
        trace!(delay_ms = delay.as_millis() as u64, "Pacing");
        tokio::time::sleep(delay).await;
    }
}
