use std::sync::Arc;

/// Presentation-form lines of one record-set, sorted lexically.
///
/// Sorting makes equality order-independent: two servers returning the same
/// records in a different order normalize to the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedAnswer {
    lines: Arc<[String]>,
}

impl NormalizedAnswer {
    /// Builds an answer from rendered record text.
    ///
    /// Each input may itself span several lines; every line becomes one
    /// entry. Blank lines are dropped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut collected: Vec<String> = lines
            .into_iter()
            .flat_map(|text| {
                text.as_ref()
                    .lines()
                    .map(str::trim_end)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();
        collected.sort();

        Self {
            lines: collected.into(),
        }
    }

    /// Re-applies normalization. Idempotent.
    pub fn normalize(&self) -> Self {
        Self::from_lines(self.lines.iter())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
