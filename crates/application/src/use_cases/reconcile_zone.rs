use crate::ports::{AnswerSource, DiffSink, Pacer};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use zonediff_domain::{DiffResult, DomainError, HostEndpoint, ZoneEntry};

/// Totals for one completed pass over the zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub records_checked: usize,
    pub differences: usize,
}

/// Walks the zone's record-sets, asks both servers about each one and emits
/// a unified-diff style report of what differs.
///
/// Records are handled strictly one at a time: both servers answer before the
/// next record starts, and output follows the order of the entries.
pub struct ReconcileZoneUseCase {
    first: Arc<dyn AnswerSource>,
    second: Arc<dyn AnswerSource>,
    pacer: Arc<dyn Pacer>,
    max_delay: Option<Duration>,
    header_printed: bool,
}

impl ReconcileZoneUseCase {
    pub fn new(
        first: Arc<dyn AnswerSource>,
        second: Arc<dyn AnswerSource>,
        pacer: Arc<dyn Pacer>,
    ) -> Self {
        Self {
            first,
            second,
            pacer,
            max_delay: None,
            header_printed: false,
        }
    }

    pub fn with_max_delay(mut self, max_delay: Option<Duration>) -> Self {
        self.max_delay = max_delay.filter(|d| !d.is_zero());
        self
    }

    pub fn header_printed(&self) -> bool {
        self.header_printed
    }

    pub async fn execute<I>(
        &mut self,
        entries: I,
        sink: &mut dyn DiffSink,
    ) -> Result<ReconcileReport, DomainError>
    where
        I: IntoIterator<Item = ZoneEntry>,
    {
        info!(
            from = %self.first.endpoint(),
            to = %self.second.endpoint(),
            "Comparing nameservers"
        );

        let mut report = ReconcileReport::default();

        for entry in entries {
            let result = self.reconcile_entry(&entry, sink).await?;

            report.records_checked += 1;
            if !result.is_unchanged() {
                report.differences += 1;
            }

            if let Some(max) = self.max_delay {
                self.pacer.pause(max).await;
            }
        }

        info!(
            records = report.records_checked,
            differences = report.differences,
            "Zone comparison complete"
        );

        Ok(report)
    }

    /// Compares a single record-set and renders it if it differs.
    pub async fn reconcile_entry(
        &mut self,
        entry: &ZoneEntry,
        sink: &mut dyn DiffSink,
    ) -> Result<DiffResult, DomainError> {
        let key = &entry.key;

        let first = self.first.fetch(key).await?;
        let second = self.second.fetch(key).await?;

        let result = DiffResult::classify(first, second);

        debug!(
            name = %key.name,
            record_type = %key.record_type,
            declared = entry.records.len(),
            outcome = result.label(),
            "Record compared"
        );

        match &result {
            DiffResult::Unchanged => {}
            DiffResult::MissingFromBoth => {
                return Err(DomainError::MissingFromBoth {
                    name: key.name.to_string(),
                    record_type: key.record_type.to_string(),
                });
            }
            diff => self.render(diff, sink)?,
        }

        Ok(result)
    }

    fn render(&mut self, diff: &DiffResult, sink: &mut dyn DiffSink) -> Result<(), DomainError> {
        if !self.header_printed {
            let (first, second) =
                HostEndpoint::header_labels(self.first.endpoint(), self.second.endpoint());
            sink.header(&first, &second)?;
            self.header_printed = true;
        }

        for line in diff.removed() {
            sink.removed(line)?;
        }
        for line in diff.added() {
            sink.added(line)?;
        }

        Ok(())
    }
}
