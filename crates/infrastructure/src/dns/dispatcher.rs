use crate::dns::transport::{DnsTransport, TransportResponse};
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use zonediff_domain::DomainError;

/// Bounded timeout-doubling ladder.
///
/// The first attempt waits `initial`; each timeout doubles the wait, and an
/// attempt is only made while the wait does not exceed `ceiling`. With the
/// defaults (2s, 8s) that is three attempts: 2s, 4s, 8s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    initial: Duration,
    ceiling: Duration,
}

impl RetryPolicy {
    pub fn new(initial: Duration, ceiling: Duration) -> Self {
        Self {
            initial,
            ceiling: ceiling.max(initial),
        }
    }

    /// The timeouts that will be attempted, in order.
    pub fn ladder(&self) -> Vec<Duration> {
        let mut steps = Vec::new();
        let mut timeout = Some(self.initial);
        while let Some(step) = timeout.filter(|t| *t <= self.ceiling && !t.is_zero()) {
            steps.push(step);
            timeout = step.checked_mul(2);
        }
        steps
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Duration::from_secs(2), Duration::from_secs(8))
    }
}

/// Sends one query, retrying only on timeout, along the policy's ladder.
///
/// Non-timeout failures are returned as-is after the first attempt. When the
/// last rung also times out the error names `server` and the attempt count.
pub async fn dispatch(
    transport: &dyn DnsTransport,
    server: &str,
    query_bytes: &[u8],
    policy: &RetryPolicy,
) -> Result<TransportResponse, DomainError> {
    let ladder = policy.ladder();
    let mut attempts = 0u32;

    for timeout in ladder {
        attempts += 1;
        let start = Instant::now();

        match transport.send(query_bytes, timeout).await {
            Ok(response) => {
                debug!(
                    server,
                    protocol = transport.protocol_name(),
                    attempt = attempts,
                    latency_ms = start.elapsed().as_millis() as u64,
                    "Query answered"
                );
                return Ok(response);
            }
            Err(e) if e.is_timeout() => {
                warn!(
                    server,
                    attempt = attempts,
                    timeout_secs = timeout.as_secs_f64(),
                    "Query timed out"
                );
            }
            Err(e) => return Err(e),
        }
    }

    Err(DomainError::QueryTimeout {
        server: server.to_string(),
        attempts,
    })
}
