use std::{fmt::Debug, hash::Hash, iter::Cloned, slice};

use geo::{Distance, Euclidean, Point};
use serde::{Deserialize, Serialize};
use wayfarer_search::{Node, Problem, SearchError};

use crate::{error::RouteError, graph::Graph};

/// Endpoints of one route query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteProblemConfig<V> {
    pub initial: V,
    pub goal: V,
}

impl<V> RouteProblemConfig<V> {
    pub fn new(initial: V, goal: V) -> Self {
        RouteProblemConfig { initial, goal }
    }
}

/// Shortest route between two vertices of a [`Graph`].
///
/// States are vertices and the action from a vertex is the neighbor to move
/// to, so both associated types are `V`.
#[derive(Debug)]
pub struct RouteProblem<'g, V> {
    graph: &'g Graph<V>,
    config: RouteProblemConfig<V>,
}

impl<'g, V> RouteProblem<'g, V>
where
    V: Clone + Eq + Hash + Debug,
{
    pub fn new(graph: &'g Graph<V>, config: RouteProblemConfig<V>) -> Result<Self, RouteError> {
        for vertex in [&config.initial, &config.goal] {
            if !graph.contains(vertex) {
                return Err(RouteError::UnknownVertex(format!("{vertex:?}")));
            }
        }

        Ok(RouteProblem { graph, config })
    }

    pub fn graph(&self) -> &'g Graph<V> {
        self.graph
    }

    pub fn config(&self) -> &RouteProblemConfig<V> {
        &self.config
    }

    /// Straight-line distance from the node's vertex to the goal.
    ///
    /// Vertices without a recorded location are placed at the origin. This is
    /// an admissible estimate only when edge weights are at least the distance
    /// between their endpoints.
    pub fn straight_line_distance(&self, node: &Node<V, V>) -> f64 {
        let origin = Point::new(0.0, 0.0);
        let from = self.graph.location(node.state()).unwrap_or(origin);
        let to = self.graph.location(&self.config.goal).unwrap_or(origin);

        Euclidean.distance(&from, &to)
    }
}

impl<'g, V> Problem for RouteProblem<'g, V>
where
    V: Clone + Eq + Hash + Debug,
{
    type State = V;
    type Action = V;
    type Actions<'a>
        = Cloned<slice::Iter<'a, V>>
    where
        Self: 'a;

    fn initial(&self) -> &V {
        &self.config.initial
    }

    fn goal(&self) -> &V {
        &self.config.goal
    }

    fn actions<'a>(&'a self, state: &V) -> Self::Actions<'a> {
        self.graph.neighbors(state).iter().cloned()
    }

    fn result(&self, state: &V, action: &V) -> Result<V, SearchError> {
        if self.graph.distance(state, action).is_some() {
            Ok(action.clone())
        } else {
            Err(SearchError::invalid_action(state, action))
        }
    }

    fn action_cost(&self, state: &V, _action: &V, next_state: &V) -> Result<f64, SearchError> {
        self.graph
            .distance(state, next_state)
            .ok_or_else(|| SearchError::missing_transition(state, next_state))
    }
}
