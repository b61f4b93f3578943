use std::{fmt::Debug, hash::Hash};

use crate::error::SearchError;

/// A state space that can be explored by [`crate::search::best_first_search`].
///
/// Implementations describe which actions are available in a state, the state
/// an action leads to and what the transition costs. The search never looks at
/// anything else, so a problem is free to keep whatever configuration it needs
/// (a bound graph, a rule table, ...) in its own fields.
pub trait Problem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;

    /// Iterator over the actions applicable in a state.
    type Actions<'a>: Iterator<Item = Self::Action>
    where
        Self: 'a;

    fn initial(&self) -> &Self::State;

    fn goal(&self) -> &Self::State;

    /// Enumerates the actions applicable in `state`. Must be finite and
    /// deterministic.
    fn actions<'a>(&'a self, state: &Self::State) -> Self::Actions<'a>;

    /// The state reached by applying `action` in `state`.
    ///
    /// Returns [`SearchError::InvalidAction`] when `action` is not one of the
    /// actions enumerated for `state`.
    fn result(&self, state: &Self::State, action: &Self::Action)
    -> Result<Self::State, SearchError>;

    fn is_goal(&self, state: &Self::State) -> bool {
        state == self.goal()
    }

    /// Cost of moving from `state` to `next_state` through `action`.
    ///
    /// Must never be negative, otherwise the search loses its optimality
    /// guarantee. The default charges one unit per step.
    fn action_cost(
        &self,
        _state: &Self::State,
        _action: &Self::Action,
        _next_state: &Self::State,
    ) -> Result<f64, SearchError> {
        Ok(1.0)
    }
}
