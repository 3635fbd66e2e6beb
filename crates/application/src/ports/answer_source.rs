use async_trait::async_trait;
use zonediff_domain::{DomainError, HostEndpoint, NormalizedAnswer, QueryKey};

/// One nameserver, asked what it claims for a name and type.
#[async_trait]
pub trait AnswerSource: Send + Sync {
    /// `Ok(None)` is a well-formed "no usable answer" (NOERROR, nothing
    /// relevant in the response). Any failure to get a recognizable answer
    /// is an error and aborts the run.
    async fn fetch(&self, key: &QueryKey) -> Result<Option<NormalizedAnswer>, DomainError>;

    fn endpoint(&self) -> &HostEndpoint;
}
