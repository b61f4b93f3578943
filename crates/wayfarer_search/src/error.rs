use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("Action {action} cannot be applied in state {state}")]
    InvalidAction { state: String, action: String },
    #[error("No transition defined from {from} to {to}")]
    MissingTransition { from: String, to: String },
    #[error("Transition from {from} to {to} has an invalid cost {cost}")]
    InvalidCost { from: String, to: String, cost: f64 },
}

impl SearchError {
    pub fn invalid_action(state: &impl std::fmt::Debug, action: &impl std::fmt::Debug) -> Self {
        SearchError::InvalidAction {
            state: format!("{state:?}"),
            action: format!("{action:?}"),
        }
    }

    pub fn missing_transition(from: &impl std::fmt::Debug, to: &impl std::fmt::Debug) -> Self {
        SearchError::MissingTransition {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub fn invalid_cost(
        from: &impl std::fmt::Debug,
        to: &impl std::fmt::Debug,
        cost: f64,
    ) -> Self {
        SearchError::InvalidCost {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
            cost,
        }
    }
}
