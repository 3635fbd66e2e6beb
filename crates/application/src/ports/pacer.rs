use async_trait::async_trait;
use std::time::Duration;

/// Inter-record delay, injectable so tests never sleep.
#[async_trait]
pub trait Pacer: Send + Sync {
    /// Pause for some duration in `[0, max]`.
    async fn pause(&self, max: Duration);
}
