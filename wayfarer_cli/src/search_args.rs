use clap::Args;
use wayfarer_search::{SearchParams, Termination};

use crate::parsers;

/// Budgets shared by every command that runs a search.
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Stop after expanding this many nodes
    #[arg(long, env = "WAYFARER_MAX_EXPANSIONS")]
    max_expansions: Option<usize>,

    /// Stop after this wall-clock time (e.g., "30s", "5m", "PT1M")
    #[arg(long, env = "WAYFARER_TIMEOUT", value_parser = parsers::parse_duration)]
    timeout: Option<jiff::SignedDuration>,
}

impl SearchArgs {
    pub fn params(&self) -> SearchParams {
        let mut params = SearchParams::default();
        if let Some(max_expansions) = self.max_expansions {
            params = params.with_termination(Termination::Expansions(max_expansions));
        }
        if let Some(timeout) = self.timeout {
            params = params.with_termination(Termination::Duration(timeout));
        }
        params
    }
}
