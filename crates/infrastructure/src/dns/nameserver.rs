use crate::dns::dispatcher::{self, RetryPolicy};
use crate::dns::forwarding::{AnswerExtractor, MessageBuilder};
use crate::dns::transport::{DnsTransport, UdpTransport};
use async_trait::async_trait;
use hickory_proto::op::Message;
use std::sync::Arc;
use tracing::{debug, warn};
use zonediff_application::ports::AnswerSource;
use zonediff_domain::{DomainError, HostEndpoint, NormalizedAnswer, QueryKey};

/// One target nameserver: build → dispatch → decode → extract.
pub struct NameserverClient {
    endpoint: HostEndpoint,
    transport: Arc<dyn DnsTransport>,
    policy: RetryPolicy,
    ignore_ttl: bool,
}

impl NameserverClient {
    /// Client talking UDP to `endpoint`.
    pub fn new(endpoint: HostEndpoint, policy: RetryPolicy) -> Self {
        let transport = Arc::new(UdpTransport::new(endpoint.socket_addr()));
        Self {
            endpoint,
            transport,
            policy,
            ignore_ttl: false,
        }
    }

    pub fn with_transport(mut self, transport: Arc<dyn DnsTransport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_ignore_ttl(mut self, ignore_ttl: bool) -> Self {
        self.ignore_ttl = ignore_ttl;
        self
    }

    fn decode(&self, id: u16, bytes: &[u8]) -> Result<Message, DomainError> {
        let message = Message::from_vec(bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!(
                "Failed to parse response from {}: {}",
                self.endpoint, e
            ))
        })?;

        if message.id() != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response from {} has ID {}, expected {}",
                self.endpoint,
                message.id(),
                id
            )));
        }

        if message.truncated() {
            warn!(
                server = %self.endpoint,
                "Response truncated (TC bit), comparing partial answer"
            );
        }

        Ok(message)
    }
}

#[async_trait]
impl AnswerSource for NameserverClient {
    async fn fetch(&self, key: &QueryKey) -> Result<Option<NormalizedAnswer>, DomainError> {
        let (id, query_bytes) = MessageBuilder::build_query(key)?;

        let server = self.endpoint.to_string();
        let response =
            dispatcher::dispatch(self.transport.as_ref(), &server, &query_bytes, &self.policy)
                .await?;

        let message = self.decode(id, &response.bytes)?;

        let answer = AnswerExtractor::extract(
            &message,
            &self.endpoint.display_name,
            key,
            self.ignore_ttl,
        )?;

        debug!(
            server = %self.endpoint,
            name = %key.name,
            record_type = %key.record_type,
            lines = answer.as_ref().map_or(0, NormalizedAnswer::len),
            "Answer extracted"
        );

        Ok(answer)
    }

    fn endpoint(&self) -> &HostEndpoint {
        &self.endpoint
    }
}
