//! zonediff domain layer
pub mod answer;
pub mod config;
pub mod diff;
pub mod dns_record;
pub mod errors;
pub mod host;
pub mod query_key;
pub mod zone;

pub use answer::NormalizedAnswer;
pub use config::{CliOverrides, Config, ConfigError};
pub use diff::DiffResult;
pub use dns_record::RecordType;
pub use errors::DomainError;
pub use host::{HostEndpoint, HostSpec, DEFAULT_DNS_PORT};
pub use query_key::QueryKey;
pub use zone::ZoneEntry;
