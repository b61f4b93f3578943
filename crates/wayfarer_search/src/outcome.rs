use crate::{
    node::{Node, NodeId, SearchTree},
    statistics::SearchStatistics,
    termination::Termination,
};

/// How a search run ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SearchStatus {
    /// A node satisfying the goal test was popped from the frontier.
    GoalFound(NodeId),
    /// The frontier emptied without reaching a goal: no path exists.
    Exhausted,
    /// A budget ran out while unexplored states remained.
    CutOff(Termination),
}

/// Result of one search run: its status, the tree it built and counters.
///
/// When no goal was found the path accessors behave like a failure marker:
/// no states, no actions and an infinite cost.
#[derive(Debug, Clone)]
pub struct SearchOutcome<S, A> {
    status: SearchStatus,
    tree: SearchTree<S, A>,
    statistics: SearchStatistics,
}

impl<S, A> SearchOutcome<S, A>
where
    S: Clone,
    A: Clone,
{
    pub(crate) fn new(
        status: SearchStatus,
        tree: SearchTree<S, A>,
        statistics: SearchStatistics,
    ) -> Self {
        SearchOutcome {
            status,
            tree,
            statistics,
        }
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn is_found(&self) -> bool {
        matches!(self.status, SearchStatus::GoalFound(_))
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self.status, SearchStatus::Exhausted)
    }

    pub fn is_cut_off(&self) -> bool {
        matches!(self.status, SearchStatus::CutOff(_))
    }

    pub fn goal_node(&self) -> Option<&Node<S, A>> {
        match self.status {
            SearchStatus::GoalFound(id) => self.tree.node(id),
            SearchStatus::Exhausted | SearchStatus::CutOff(_) => None,
        }
    }

    /// Total cost of the path to the goal, infinite when none was found.
    pub fn path_cost(&self) -> f64 {
        self.goal_node()
            .map_or(f64::INFINITY, |node| node.path_cost())
    }

    /// States from the initial state to the goal, both included.
    pub fn path_states(&self) -> Vec<S> {
        self.goal_node()
            .map(|node| self.tree.path_states(node.id()))
            .unwrap_or_default()
    }

    /// Actions leading from the initial state to the goal.
    pub fn path_actions(&self) -> Vec<A> {
        self.goal_node()
            .map(|node| self.tree.path_actions(node.id()))
            .unwrap_or_default()
    }

    pub fn tree(&self) -> &SearchTree<S, A> {
        &self.tree
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}
