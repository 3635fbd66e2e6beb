use super::NormalizedAnswer;

/// Outcome of comparing what two servers claim for one record-set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffResult {
    Unchanged,
    Changed {
        old: NormalizedAnswer,
        new: NormalizedAnswer,
    },
    OnlyOnFirst(NormalizedAnswer),
    OnlyOnSecond(NormalizedAnswer),
    MissingFromBoth,
}

impl DiffResult {
    /// Classifies a pair of answers; `None` means the server had no usable answer.
    pub fn classify(first: Option<NormalizedAnswer>, second: Option<NormalizedAnswer>) -> Self {
        match (first, second) {
            (Some(old), Some(new)) if old == new => DiffResult::Unchanged,
            (Some(old), Some(new)) => DiffResult::Changed { old, new },
            (Some(old), None) => DiffResult::OnlyOnFirst(old),
            (None, Some(new)) => DiffResult::OnlyOnSecond(new),
            (None, None) => DiffResult::MissingFromBoth,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, DiffResult::Unchanged)
    }

    /// Lines rendered with a `-` prefix (present on the first server).
    pub fn removed(&self) -> &[String] {
        match self {
            DiffResult::Changed { old, .. } | DiffResult::OnlyOnFirst(old) => old.lines(),
            _ => &[],
        }
    }

    /// Lines rendered with a `+` prefix (present on the second server).
    pub fn added(&self) -> &[String] {
        match self {
            DiffResult::Changed { new, .. } | DiffResult::OnlyOnSecond(new) => new.lines(),
            _ => &[],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DiffResult::Unchanged => "unchanged",
            DiffResult::Changed { .. } => "changed",
            DiffResult::OnlyOnFirst(_) => "only_on_first",
            DiffResult::OnlyOnSecond(_) => "only_on_second",
            DiffResult::MissingFromBoth => "missing_from_both",
        }
    }
}
