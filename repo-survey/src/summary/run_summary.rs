//! Run summary types.

use tracing::info;

/// Counts describing how a run narrowed the search results down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Repositories returned by the search.
    pub repositories_discovered: usize,

    /// Repositories dropped by exclusion rules.
    pub repositories_excluded: usize,

    /// Repositories enriched with languages and commit dates.
    pub repositories_enriched: usize,

    /// Rows in the final report.
    pub repositories_reported: usize,
}

impl RunSummary {
    /// Creates a summary from the sizes of each stage's output.
    #[must_use]
    pub fn new(discovered: usize, kept: usize, reported: usize) -> Self {
        Self {
            repositories_discovered: discovered,
            repositories_excluded: discovered.saturating_sub(kept),
            repositories_enriched: kept,
            repositories_reported: reported,
        }
    }

    /// Repositories enriched but cut by the report limit.
    #[must_use]
    pub fn repositories_truncated(&self) -> usize {
        self.repositories_enriched
            .saturating_sub(self.repositories_reported)
    }

    /// Emits the summary as a single log event.
    pub fn log(&self) {
        info!(
            discovered = self.repositories_discovered,
            excluded = self.repositories_excluded,
            enriched = self.repositories_enriched,
            reported = self.repositories_reported,
            truncated = self.repositories_truncated(),
            "Survey complete"
        );
    }
}
