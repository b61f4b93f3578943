use thiserror::Error;
use wayfarer_search::SearchError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Edge {from} -> {to} has a negative weight {weight}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },
    #[error("Edge {from} -> {to} has a weight that is not finite: {weight}")]
    NonFiniteWeight {
        from: String,
        to: String,
        weight: f64,
    },
    #[error("Undirected edge {from} <-> {to} was given two weights: {first} and {second}")]
    ConflictingWeight {
        from: String,
        to: String,
        first: f64,
        second: f64,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error("Vertex {0} is not part of the graph")]
    UnknownVertex(String),
    #[error(transparent)]
    Search(#[from] SearchError),
}
