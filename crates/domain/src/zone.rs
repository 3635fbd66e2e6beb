use super::{QueryKey, RecordType};
use std::sync::Arc;

/// One record-set declared in the reference zone.
#[derive(Debug, Clone)]
pub struct ZoneEntry {
    pub key: QueryKey,
    /// Presentation lines of the declared records, as parsed.
    pub records: Arc<[String]>,
}

impl ZoneEntry {
    pub fn new(
        name: impl Into<Arc<str>>,
        record_type: RecordType,
        records: impl Into<Arc<[String]>>,
    ) -> Self {
        Self {
            key: QueryKey::new(name, record_type),
            records: records.into(),
        }
    }
}
