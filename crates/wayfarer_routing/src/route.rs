use std::{fmt::Debug, hash::Hash};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};
use wayfarer_search::{
    Node, SearchError, SearchOutcome, SearchParams, SearchStatistics, SearchStatus, Termination,
    best_first_search_with_params,
};

use crate::{
    error::RouteError,
    graph::Graph,
    route_problem::{RouteProblem, RouteProblemConfig},
};

/// One hop of a route.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteLeg<V> {
    pub from: V,
    pub to: V,
    pub weight: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Route<V> {
    /// Vertices from the start to the destination, both included.
    pub states: Vec<V>,
    /// Vertex moved to at each step.
    pub actions: Vec<V>,
    pub legs: Vec<RouteLeg<V>>,
    pub cost: f64,
}

impl<V> Route<V> {
    pub fn hops(&self) -> usize {
        self.legs.len()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteOutcome<V> {
    Found(Route<V>),
    /// Every vertex reachable from the start was explored.
    NoRoute,
    CutOff { termination: Termination },
}

#[derive(Clone, Debug, Serialize)]
pub struct RoutePlan<V> {
    pub config: RouteProblemConfig<V>,
    pub outcome: RouteOutcome<V>,
    pub statistics: SearchStatistics,
}

impl<V> RoutePlan<V> {
    pub fn route(&self) -> Option<&Route<V>> {
        match &self.outcome {
            RouteOutcome::Found(route) => Some(route),
            RouteOutcome::NoRoute | RouteOutcome::CutOff { .. } => None,
        }
    }

    /// Hops of the route, empty when none was found.
    pub fn legs(&self) -> &[RouteLeg<V>] {
        self.route().map(|route| route.legs.as_slice()).unwrap_or(&[])
    }

    /// Route cost, infinite when none was found.
    pub fn cost(&self) -> f64 {
        self.route().map_or(f64::INFINITY, |route| route.cost)
    }
}

/// Cheapest route for `config` by uniform-cost search.
pub fn plan_route<V>(
    graph: &Graph<V>,
    config: &RouteProblemConfig<V>,
    params: &SearchParams,
) -> Result<RoutePlan<V>, RouteError>
where
    V: Clone + Eq + Hash + Debug,
{
    let problem = RouteProblem::new(graph, config.clone())?;
    let outcome = best_first_search_with_params(
        &problem,
        |node: &Node<V, V>| node.path_cost(),
        params,
    )?;

    let route_outcome = match outcome.status() {
        SearchStatus::GoalFound(_) => RouteOutcome::Found(extract_route(graph, &outcome)?),
        SearchStatus::Exhausted => RouteOutcome::NoRoute,
        SearchStatus::CutOff(termination) => RouteOutcome::CutOff { termination },
    };

    debug!(
        initial = ?config.initial,
        goal = ?config.goal,
        cost = outcome.path_cost(),
        statistics = %outcome.statistics(),
        "Planned route"
    );

    Ok(RoutePlan {
        config: config.clone(),
        outcome: route_outcome,
        statistics: *outcome.statistics(),
    })
}

/// Plans every query in parallel over the shared graph. Results keep the
/// order of `configs`.
pub fn plan_routes<V>(
    graph: &Graph<V>,
    configs: &[RouteProblemConfig<V>],
    params: &SearchParams,
) -> Result<Vec<RoutePlan<V>>, RouteError>
where
    V: Clone + Eq + Hash + Debug + Send + Sync,
{
    info!("Planning {} routes", configs.len());

    configs
        .par_iter()
        .map(|config| plan_route(graph, config, params))
        .collect()
}

fn extract_route<V>(graph: &Graph<V>, outcome: &SearchOutcome<V, V>) -> Result<Route<V>, RouteError>
where
    V: Clone + Eq + Hash + Debug,
{
    let states = outcome.path_states();
    let legs = states
        .windows(2)
        .map(|pair| {
            let (from, to) = (&pair[0], &pair[1]);
            graph
                .distance(from, to)
                .map(|weight| RouteLeg {
                    from: from.clone(),
                    to: to.clone(),
                    weight,
                })
                .ok_or_else(|| SearchError::missing_transition(from, to))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Route {
        actions: outcome.path_actions(),
        cost: outcome.path_cost(),
        states,
        legs,
    })
}
