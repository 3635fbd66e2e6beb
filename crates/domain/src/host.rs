use super::DomainError;
use std::fmt;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::str::FromStr;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// A nameserver as given on the command line: `HOST` or `HOST:PORT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSpec {
    pub host: String,
    pub port: u16,
}

impl FromStr for HostSpec {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || DomainError::InvalidHost(s.to_string());

        let (host, port) = match trimmed.split_once(':') {
            None => (trimmed, DEFAULT_DNS_PORT),
            Some((host, port)) => {
                let port = port.parse::<u16>().map_err(|_| invalid())?;
                if port == 0 {
                    return Err(invalid());
                }
                (host, port)
            }
        };

        if host.is_empty() || host.contains(':') {
            return Err(invalid());
        }

        Ok(Self {
            host: host.to_string(),
            port,
        })
    }
}

/// A resolved nameserver, fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEndpoint {
    pub address: Ipv4Addr,
    pub display_name: String,
    pub port: u16,
}

impl HostEndpoint {
    pub fn new(address: Ipv4Addr, display_name: impl Into<String>, port: u16) -> Self {
        Self {
            address,
            display_name: display_name.into(),
            port,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(self.address, self.port))
    }

    pub fn uses_default_port(&self) -> bool {
        self.port == DEFAULT_DNS_PORT
    }

    /// Label for the diff header. Ports are shown on both sides as soon as
    /// either server listens on a non-standard one.
    pub fn header_labels(first: &HostEndpoint, second: &HostEndpoint) -> (String, String) {
        if first.uses_default_port() && second.uses_default_port() {
            (first.display_name.clone(), second.display_name.clone())
        } else {
            (first.to_string(), second.to_string())
        }
    }
}

impl fmt::Display for HostEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.display_name, self.port)
    }
}
