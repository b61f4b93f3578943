pub mod error;
pub mod node;
pub mod outcome;
pub mod priority_queue;
pub mod problem;
pub mod search;
pub mod statistics;
pub mod termination;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::SearchError;
pub use node::{Node, NodeId, SearchTree};
pub use outcome::{SearchOutcome, SearchStatus};
pub use priority_queue::PriorityQueue;
pub use problem::Problem;
pub use search::{best_first_search, best_first_search_with_params, uniform_cost_search};
pub use statistics::SearchStatistics;
pub use termination::{SearchParams, Termination};
