use fxhash::FxHashMap;
use jiff::Timestamp;
use tracing::{debug, trace, warn};

use crate::{
    error::SearchError,
    node::{Node, NodeId, SearchTree},
    outcome::{SearchOutcome, SearchStatus},
    priority_queue::PriorityQueue,
    problem::Problem,
    statistics::SearchStatistics,
    termination::SearchParams,
};

/// Best-first search expanding the frontier node with the lowest `f`.
///
/// With `f = path_cost` this is uniform-cost search (Dijkstra) and the
/// returned path is a cheapest one, provided every `action_cost` is
/// non-negative. Negative or non-finite costs are rejected with
/// [`SearchError::InvalidCost`] as soon as they are generated.
///
/// Among frontier nodes with the same `f`, the one added first is expanded
/// first, so ties between equally cheap paths resolve in action order.
pub fn best_first_search<P, E>(
    problem: &P,
    f: E,
) -> Result<SearchOutcome<P::State, P::Action>, SearchError>
where
    P: Problem,
    E: Fn(&Node<P::State, P::Action>) -> f64,
{
    best_first_search_with_params(problem, f, &SearchParams::default())
}

/// [`best_first_search`] ordered by path cost.
pub fn uniform_cost_search<P>(problem: &P) -> Result<SearchOutcome<P::State, P::Action>, SearchError>
where
    P: Problem,
{
    best_first_search(problem, |node: &Node<P::State, P::Action>| node.path_cost())
}

/// [`best_first_search`] that stops with [`SearchStatus::CutOff`] as soon as
/// one of `params.terminations` is met while a node is still waiting to be
/// expanded. Terminations are checked once per loop iteration.
pub fn best_first_search_with_params<P, E>(
    problem: &P,
    f: E,
    params: &SearchParams,
) -> Result<SearchOutcome<P::State, P::Action>, SearchError>
where
    P: Problem,
    E: Fn(&Node<P::State, P::Action>) -> f64,
{
    let start = Timestamp::now();
    let mut statistics = SearchStatistics::default();

    debug!(
        initial = ?problem.initial(),
        goal = ?problem.goal(),
        "Starting best-first search"
    );

    let (mut tree, root) = SearchTree::with_root(problem.initial().clone());

    let mut frontier = PriorityQueue::new(&f);
    frontier.add(tree[root].clone());

    let mut reached: FxHashMap<P::State, NodeId> = FxHashMap::default();
    reached.insert(problem.initial().clone(), root);

    let status = loop {
        let Some(node) = frontier.pop() else {
            break SearchStatus::Exhausted;
        };

        // A cheaper node for the same state was found after this one was queued.
        if reached.get(node.state()) != Some(&node.id()) {
            statistics.stale_skipped += 1;
            continue;
        }

        if problem.is_goal(node.state()) {
            break SearchStatus::GoalFound(node.id());
        }

        if let Some(termination) = params.reached_termination(statistics.expanded, start) {
            warn!(
                "Search cut off by {} after {} expansions",
                termination, statistics.expanded
            );
            break SearchStatus::CutOff(termination);
        }

        statistics.expanded += 1;
        trace!(
            state = ?node.state(),
            path_cost = node.path_cost(),
            "Expanding node"
        );

        for action in problem.actions(node.state()) {
            let next_state = problem.result(node.state(), &action)?;
            let step_cost = problem.action_cost(node.state(), &action, &next_state)?;
            if !step_cost.is_finite() || step_cost < 0.0 {
                return Err(SearchError::invalid_cost(
                    node.state(),
                    &next_state,
                    step_cost,
                ));
            }

            statistics.generated += 1;

            let child_cost = node.path_cost() + step_cost;
            let improves = match reached.get(&next_state) {
                None => true,
                Some(&known) => child_cost < tree[known].path_cost(),
            };

            if improves {
                let child = tree.add_child(node.id(), action, next_state.clone(), step_cost);
                reached.insert(next_state, child);
                frontier.add(tree[child].clone());
            }
        }
    };

    statistics.reached = reached.len();
    statistics.elapsed = Timestamp::now().duration_since(start);

    debug!("Best-first search finished with {:?}: {}", status, statistics);

    Ok(SearchOutcome::new(status, tree, statistics))
}
