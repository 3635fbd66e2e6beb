use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::debug;
use zonediff_domain::{DomainError, HostEndpoint, HostSpec};

/// Turns a `host[:port]` argument into an IPv4 endpoint.
///
/// Literal IPv4 addresses are used as given; anything else goes through the
/// system resolver and the first IPv4 result wins. The original host text is
/// kept as the display name for the report header and NS self-reference check.
pub struct HostResolver;

impl HostResolver {
    pub async fn resolve(spec: &HostSpec) -> Result<HostEndpoint, DomainError> {
        if let Ok(address) = spec.host.parse::<Ipv4Addr>() {
            return Ok(HostEndpoint::new(address, spec.host.clone(), spec.port));
        }

        let addresses = tokio::net::lookup_host((spec.host.as_str(), spec.port))
            .await
            .map_err(|e| DomainError::HostResolution {
                host: spec.host.clone(),
                reason: e.to_string(),
            })?;

        let address = Self::first_ipv4(addresses).ok_or_else(|| DomainError::HostResolution {
            host: spec.host.clone(),
            reason: "no IPv4 address found".to_string(),
        })?;

        debug!(host = %spec.host, address = %address, "Host resolved");

        Ok(HostEndpoint::new(address, spec.host.clone(), spec.port))
    }

    fn first_ipv4(addresses: impl IntoIterator<Item = SocketAddr>) -> Option<Ipv4Addr> {
        addresses.into_iter().find_map(|addr| match addr.ip() {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(_) => None,
        })
    }
}
