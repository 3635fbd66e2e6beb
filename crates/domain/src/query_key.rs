use super::RecordType;
use std::fmt;
use std::sync::Arc;

/// Name and type of one zone record-set, queried identically on both servers.
/// Uses `Arc<str>` so the key clones cheaply into log fields and errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl QueryKey {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.record_type)
    }
}
