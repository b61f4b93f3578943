use std::{fmt::Debug, hash::Hash};

use fxhash::FxHashSet;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::graph::{Graph, GraphBuilder};

/// Undirected graph over `0..vertices` where each pair is joined with
/// probability `density`, weights drawn from `0.0..10.0` with one decimal.
pub fn random_graph(seed: u64, vertices: usize, density: f64) -> Graph<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = GraphBuilder::default();

    for vertex in 0..vertices {
        builder = builder.with_vertex(vertex);
    }

    for from in 0..vertices {
        for to in (from + 1)..vertices {
            if rng.random_bool(density) {
                let weight = f64::from(rng.random_range(0..100u32)) / 10.0;
                builder = builder.with_edge(from, to, weight);
            }
        }
    }

    builder.build().unwrap()
}

/// Cheapest cost among all simple paths from `initial` to `goal`, by
/// exhaustive enumeration.
pub fn brute_force_shortest<V>(graph: &Graph<V>, initial: &V, goal: &V) -> Option<f64>
where
    V: Clone + Eq + Hash + Debug,
{
    fn walk<V>(
        graph: &Graph<V>,
        current: &V,
        goal: &V,
        cost: f64,
        visited: &mut FxHashSet<V>,
        best: &mut Option<f64>,
    ) where
        V: Clone + Eq + Hash + Debug,
    {
        if current == goal {
            if best.is_none_or(|best| cost < best) {
                *best = Some(cost);
            }
            return;
        }

        for next in graph.neighbors(current) {
            if visited.contains(next) {
                continue;
            }
            let Some(weight) = graph.distance(current, next) else {
                continue;
            };
            visited.insert(next.clone());
            walk(graph, next, goal, cost + weight, visited, best);
            visited.remove(next);
        }
    }

    let mut visited = FxHashSet::default();
    visited.insert(initial.clone());
    let mut best = None;
    walk(graph, initial, goal, 0.0, &mut visited, &mut best);

    best
}
