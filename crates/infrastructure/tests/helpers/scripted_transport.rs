use async_trait::async_trait;
use bytes::Bytes;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use zonediff_domain::DomainError;
use zonediff_infrastructure::dns::transport::{DnsTransport, TransportResponse};

/// Transport that replays a script of outcomes and records every timeout it
/// was asked to wait. Once the script runs out every attempt times out.
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Result<Vec<u8>, DomainError>>>,
    timeouts: Mutex<Vec<Duration>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            timeouts: Mutex::new(Vec::new()),
        }
    }

    pub fn then_timeout(self) -> Self {
        self.push(Err(DomainError::QueryTimeout {
            server: "scripted".to_string(),
            attempts: 1,
        }))
    }

    pub fn then_reply(self, bytes: Vec<u8>) -> Self {
        self.push(Ok(bytes))
    }

    pub fn then_error(self, error: DomainError) -> Self {
        self.push(Err(error))
    }

    pub fn timeouts(&self) -> Vec<Duration> {
        self.timeouts.lock().unwrap().clone()
    }

    fn push(self, outcome: Result<Vec<u8>, DomainError>) -> Self {
        self.script.lock().unwrap().push_back(outcome);
        self
    }
}

#[async_trait]
impl DnsTransport for ScriptedTransport {
    async fn send(
        &self,
        _message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        self.timeouts.lock().unwrap().push(timeout);

        let outcome = self.script.lock().unwrap().pop_front();
        match outcome {
            Some(Ok(bytes)) => Ok(TransportResponse {
                bytes: Bytes::from(bytes),
                protocol_used: "SCRIPTED",
            }),
            Some(Err(e)) => Err(e),
            None => Err(DomainError::QueryTimeout {
                server: "scripted".to_string(),
                attempts: 1,
            }),
        }
    }

    fn protocol_name(&self) -> &'static str {
        "SCRIPTED"
    }
}
