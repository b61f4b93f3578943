use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

/// A budget after which a search gives up and reports a cut-off.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Termination {
    /// Maximum number of nodes popped from the frontier and expanded.
    Expansions(usize),
    /// Wall-clock budget measured from the start of the search.
    Duration(SignedDuration),
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Termination::Expansions(max) => write!(f, "{max} expansions"),
            Termination::Duration(duration) => write!(f, "{duration:#}"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub terminations: Vec<Termination>,
}

impl SearchParams {
    pub fn exhaustive() -> Self {
        SearchParams::default()
    }

    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.terminations.push(termination);
        self
    }

    /// First termination met after `expanded` expansions in a search that
    /// started at `start`.
    pub(crate) fn reached_termination(
        &self,
        expanded: usize,
        start: Timestamp,
    ) -> Option<Termination> {
        self.terminations
            .iter()
            .find(|termination| match termination {
                Termination::Expansions(max_expansions) => expanded >= *max_expansions,
                Termination::Duration(max_duration) => {
                    Timestamp::now().duration_since(start) >= *max_duration
                }
            })
            .copied()
    }
}
