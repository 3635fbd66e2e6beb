use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid host specification '{0}': expected HOST or HOST:PORT")]
    InvalidHost(String),

    #[error("Could not resolve {host} to an IPv4 address: {reason}")]
    HostResolution { host: String, reason: String },

    #[error("Unable to parse zonefile {path}: {reason}")]
    ZoneParse { path: String, reason: String },

    #[error("Unable to determine the origin of zonefile {0}, use --origin to set it")]
    MissingOrigin(String),

    #[error(
        "Timed out after {attempts} attempts querying {server}, \
         consider throttling queries with --delay"
    )]
    QueryTimeout { server: String, attempts: u32 },

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Unexpected response from {server} for {name} {record_type}: {rcode}")]
    UnexpectedResponse {
        server: String,
        name: String,
        record_type: String,
        rcode: String,
    },

    #[error("{name} {record_type} exists in zonefile but not on either server")]
    MissingFromBoth { name: String, record_type: String },

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, DomainError::QueryTimeout { .. })
    }
}
