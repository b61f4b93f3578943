use jiff::SignedDuration;
use serde::Serialize;

/// Counters collected while a search runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct SearchStatistics {
    /// Nodes popped from the frontier whose actions were enumerated.
    pub expanded: usize,
    /// Child nodes created, whether or not they improved on a reached state.
    pub generated: usize,
    /// Frontier entries dropped on pop because a cheaper node superseded them.
    pub stale_skipped: usize,
    /// Distinct states present in the reached map when the search stopped.
    pub reached: usize,
    pub elapsed: SignedDuration,
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "expanded={} generated={} stale_skipped={} reached={} elapsed={:?}",
            self.expanded, self.generated, self.stale_skipped, self.reached, self.elapsed
        )
    }
}
