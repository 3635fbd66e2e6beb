use async_trait::async_trait;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use zonediff_application::ports::{AnswerSource, DiffSink, Pacer};
use zonediff_domain::{DomainError, HostEndpoint, NormalizedAnswer, QueryKey, RecordType};

/// Shared, ordered record of which server was asked what.
pub type CallLog = Arc<Mutex<Vec<String>>>;

// ============================================================================
// Mock AnswerSource
// ============================================================================

#[derive(Clone)]
enum Scripted {
    Answer(NormalizedAnswer),
    Absent,
    Timeout,
}

pub struct MockAnswerSource {
    endpoint: HostEndpoint,
    responses: Mutex<HashMap<(String, RecordType), Scripted>>,
    calls: CallLog,
}

impl MockAnswerSource {
    pub fn new(name: &str, port: u16, calls: CallLog) -> Self {
        Self {
            endpoint: HostEndpoint::new(Ipv4Addr::LOCALHOST, name, port),
            responses: Mutex::new(HashMap::new()),
            calls,
        }
    }

    /// Configures the lines this server answers for a name/type
    pub fn set_answer(&self, name: &str, record_type: RecordType, lines: &[&str]) {
        self.responses.lock().unwrap().insert(
            (name.to_string(), record_type),
            Scripted::Answer(NormalizedAnswer::from_lines(lines.iter())),
        );
    }

    /// Configures a NOERROR/empty response for a name/type
    pub fn set_absent(&self, name: &str, record_type: RecordType) {
        self.responses
            .lock()
            .unwrap()
            .insert((name.to_string(), record_type), Scripted::Absent);
    }

    /// Configures the server to never answer a name/type
    pub fn set_timeout(&self, name: &str, record_type: RecordType) {
        self.responses
            .lock()
            .unwrap()
            .insert((name.to_string(), record_type), Scripted::Timeout);
    }
}

#[async_trait]
impl AnswerSource for MockAnswerSource {
    async fn fetch(&self, key: &QueryKey) -> Result<Option<NormalizedAnswer>, DomainError> {
        self.calls.lock().unwrap().push(format!(
            "{} {} {}",
            self.endpoint.display_name, key.name, key.record_type
        ));

        let scripted = self
            .responses
            .lock()
            .unwrap()
            .get(&(key.name.to_string(), key.record_type))
            .cloned()
            .unwrap_or(Scripted::Absent);

        match scripted {
            Scripted::Answer(answer) => Ok(Some(answer)),
            Scripted::Absent => Ok(None),
            Scripted::Timeout => Err(DomainError::QueryTimeout {
                server: self.endpoint.to_string(),
                attempts: 3,
            }),
        }
    }

    fn endpoint(&self) -> &HostEndpoint {
        &self.endpoint
    }
}

// ============================================================================
// Recording Pacer
// ============================================================================

#[derive(Default)]
pub struct RecordingPacer {
    pauses: Mutex<Vec<Duration>>,
}

impl RecordingPacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }
}

#[async_trait]
impl Pacer for RecordingPacer {
    async fn pause(&self, max: Duration) {
        self.pauses.lock().unwrap().push(max);
    }
}

// ============================================================================
// Capturing DiffSink
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Header(String, String),
    Removed(String),
    Added(String),
}

#[derive(Default)]
pub struct CapturingSink {
    pub events: Vec<SinkEvent>,
}

impl CapturingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SinkEvent::Header(_, _)))
            .count()
    }
}

impl DiffSink for CapturingSink {
    fn header(&mut self, first: &str, second: &str) -> Result<(), DomainError> {
        self.events
            .push(SinkEvent::Header(first.to_string(), second.to_string()));
        Ok(())
    }

    fn removed(&mut self, line: &str) -> Result<(), DomainError> {
        self.events.push(SinkEvent::Removed(line.to_string()));
        Ok(())
    }

    fn added(&mut self, line: &str) -> Result<(), DomainError> {
        self.events.push(SinkEvent::Added(line.to_string()));
        Ok(())
    }
}
