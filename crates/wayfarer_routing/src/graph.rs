use std::{fmt::Debug, hash::Hash};

use fxhash::{FxHashMap, FxHashSet};
use geo::Point;
use tracing::debug;

use crate::error::GraphError;

/// Weight given to every edge of an unweighted edge list.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Immutable weighted graph over vertex identifiers `V`.
///
/// Undirected graphs store both directions of every edge with the same
/// weight. Neighbor lists follow the order in which edges were inserted.
#[derive(Clone, Debug)]
pub struct Graph<V> {
    directed: bool,
    vertices: Vec<V>,
    vertex_set: FxHashSet<V>,
    edges: Vec<(V, V)>,
    distances: FxHashMap<V, FxHashMap<V, f64>>,
    neighbors: FxHashMap<V, Vec<V>>,
    locations: FxHashMap<V, Point>,
}

impl<V> Graph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    pub fn builder() -> GraphBuilder<V> {
        GraphBuilder::default()
    }

    /// Undirected graph where every edge weighs [`DEFAULT_WEIGHT`].
    pub fn from_edges<I>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (V, V)>,
    {
        edges
            .into_iter()
            .fold(GraphBuilder::default(), |builder, (from, to)| {
                builder.with_unweighted_edge(from, to)
            })
            .build()
    }

    /// Undirected graph from an edge to weight mapping.
    pub fn from_weighted_edges<I>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = ((V, V), f64)>,
    {
        edges
            .into_iter()
            .fold(GraphBuilder::default(), |builder, ((from, to), weight)| {
                builder.with_edge(from, to, weight)
            })
            .build()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Vertices in order of first appearance.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored directed edges, mirrored edges included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.vertex_set.contains(vertex)
    }

    /// Stored edges with their weights, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, f64)> + '_ {
        self.edges
            .iter()
            .filter_map(|(from, to)| self.distance(from, to).map(|weight| (from, to, weight)))
    }

    pub fn distance(&self, from: &V, to: &V) -> Option<f64> {
        self.distances.get(from)?.get(to).copied()
    }

    /// Vertices reachable from `vertex` by one edge. Unknown vertices have none.
    pub fn neighbors(&self, vertex: &V) -> &[V] {
        self.neighbors
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Recorded coordinate of `vertex`, if any.
    pub fn location(&self, vertex: &V) -> Option<Point> {
        self.locations.get(vertex).copied()
    }
}

#[derive(Clone, Debug)]
pub struct GraphBuilder<V> {
    directed: bool,
    edges: Vec<(V, V, f64)>,
    vertices: Vec<V>,
    locations: Vec<(V, Point)>,
}

impl<V> Default for GraphBuilder<V> {
    fn default() -> Self {
        GraphBuilder {
            directed: false,
            edges: Vec::new(),
            vertices: Vec::new(),
            locations: Vec::new(),
        }
    }
}

impl<V> GraphBuilder<V>
where
    V: Clone + Eq + Hash + Debug,
{
    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    pub fn with_edge(mut self, from: V, to: V, weight: f64) -> Self {
        self.edges.push((from, to, weight));
        self
    }

    pub fn with_unweighted_edge(self, from: V, to: V) -> Self {
        self.with_edge(from, to, DEFAULT_WEIGHT)
    }

    /// Registers a vertex that may have no edges.
    pub fn with_vertex(mut self, vertex: V) -> Self {
        self.vertices.push(vertex);
        self
    }

    pub fn with_location(mut self, vertex: V, x: f64, y: f64) -> Self {
        self.locations.push((vertex, Point::new(x, y)));
        self
    }

    pub fn build(self) -> Result<Graph<V>, GraphError> {
        let mut distances: FxHashMap<V, FxHashMap<V, f64>> = FxHashMap::default();
        let mut edges: Vec<(V, V)> = Vec::with_capacity(self.edges.len() * 2);

        for (from, to, weight) in &self.edges {
            validate_weight(from, to, *weight)?;
            if distances
                .entry(from.clone())
                .or_default()
                .insert(to.clone(), *weight)
                .is_none()
            {
                edges.push((from.clone(), to.clone()));
            }
        }

        // Mirror only after every explicit edge is in, so a reverse edge given
        // with another weight is detected regardless of input order.
        if !self.directed {
            let original = edges.len();
            for index in 0..original {
                let (from, to) = edges[index].clone();
                let Some(weight) = distances.get(&from).and_then(|row| row.get(&to)).copied()
                else {
                    continue;
                };

                let row = distances.entry(to.clone()).or_default();
                match row.get(&from).copied() {
                    Some(existing) if existing != weight => {
                        return Err(GraphError::ConflictingWeight {
                            from: format!("{from:?}"),
                            to: format!("{to:?}"),
                            first: weight,
                            second: existing,
                        });
                    }
                    Some(_) => {}
                    None => {
                        row.insert(from.clone(), weight);
                        edges.push((to, from));
                    }
                }
            }
        }

        let mut vertices: Vec<V> = Vec::new();
        let mut vertex_set: FxHashSet<V> = FxHashSet::default();
        let mut register = |vertex: &V| {
            if vertex_set.insert(vertex.clone()) {
                vertices.push(vertex.clone());
            }
        };

        for (from, to, _) in &self.edges {
            register(from);
            register(to);
        }
        for vertex in &self.vertices {
            register(vertex);
        }
        for (vertex, _) in &self.locations {
            register(vertex);
        }

        let mut neighbors: FxHashMap<V, Vec<V>> = FxHashMap::default();
        for (from, to) in &edges {
            neighbors.entry(from.clone()).or_default().push(to.clone());
        }

        let locations: FxHashMap<V, Point> = self.locations.into_iter().collect();

        debug!(
            vertices = vertices.len(),
            edges = edges.len(),
            directed = self.directed,
            "Built graph"
        );

        Ok(Graph {
            directed: self.directed,
            vertices,
            vertex_set,
            edges,
            distances,
            neighbors,
            locations,
        })
    }
}

fn validate_weight<V: Debug>(from: &V, to: &V, weight: f64) -> Result<(), GraphError> {
    if !weight.is_finite() {
        return Err(GraphError::NonFiniteWeight {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
            weight,
        });
    }

    if weight < 0.0 {
        return Err(GraphError::NegativeWeight {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
            weight,
        });
    }

    Ok(())
}
