use zonediff_domain::DomainError;

/// Receives rendered diff output in order.
pub trait DiffSink: Send {
    /// Called once per run, before the first body line.
    fn header(&mut self, first: &str, second: &str) -> Result<(), DomainError>;

    fn removed(&mut self, line: &str) -> Result<(), DomainError>;

    fn added(&mut self, line: &str) -> Result<(), DomainError>;
}
