pub mod udp;

use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;
use zonediff_domain::DomainError;

/// Result of a raw DNS transport operation
#[derive(Debug)]
pub struct TransportResponse {
    /// Raw DNS response bytes (wire format)
    pub bytes: Bytes,
    /// Which protocol was used
    pub protocol_used: &'static str,
}

/// Trait for sending raw DNS messages over the wire
///
/// A single call is a single attempt. An attempt that sees no reply within
/// `timeout` fails with `DomainError::QueryTimeout`; retrying is the
/// dispatcher's job.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

pub use udp::UdpTransport;
