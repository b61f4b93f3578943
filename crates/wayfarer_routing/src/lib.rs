pub mod error;
pub mod graph;
pub mod route;
pub mod route_problem;
pub mod sample;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{GraphError, RouteError};
pub use graph::{Graph, GraphBuilder};
pub use route::{Route, RouteLeg, RouteOutcome, RoutePlan, plan_route, plan_routes};
pub use route_problem::{RouteProblem, RouteProblemConfig};
