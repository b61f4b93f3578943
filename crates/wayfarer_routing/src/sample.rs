//! Bundled village road network around Hosur, with planar coordinates in km.

use crate::{
    error::GraphError,
    graph::{Graph, GraphBuilder},
    route_problem::RouteProblemConfig,
};

const HOSUR_ROADS: [(&str, &str, f64); 28] = [
    ("Gudichettulu", "Mathigiri", 2.5),
    ("Mathigiri", "Hosur", 2.0),
    ("Hosur", "Mugalpalli", 2.5),
    ("Gudichettulu", "Kelamangalam", 5.9),
    ("Kelamangalam", "Mugalpalli", 3.5),
    ("Mugalpalli", "Sonnepuram", 3.6),
    ("Kelamangalam", "Sonnepuram", 6.8),
    ("Sonnepuram", "Denkanikottai", 4.4),
    ("Kelamangalam", "Denkanikottai", 5.1),
    ("Achandaram", "Berigai", 1.5),
    ("Berigai", "Bennagatta", 1.8),
    ("Achandaram", "Bennagatta", 3.6),
    ("Bagalur", "Sulagiri", 3.1),
    ("Sulagiri", "Nandimangalam", 5.3),
    ("Bagalur", "Berigai", 4.6),
    ("Berigai", "Nandimangalam", 6.2),
    ("Bagalur", "Hosur", 4.2),
    ("Hosur", "Attibele", 3.9),
    ("Attibele", "Bagalur", 5.5),
    ("Lingapuram", "Zuzuvadi", 2.0),
    ("Zuzuvadi", "Mallasandiram", 3.3),
    ("Lingapuram", "Mallasandiram", 5.9),
    ("Zuzuvadi", "Hosur", 4.8),
    ("Mallasandiram", "Thally", 3.7),
    ("Thally", "Denkanikottai", 2.6),
    ("Lingapuram", "Mathigiri", 3.4),
    ("Sulagiri", "Achandaram", 4.1),
    ("Nandimangalam", "Hosur", 10.4),
];

const HOSUR_LOCATIONS: [(&str, f64, f64); 18] = [
    ("Hosur", 0.0, 0.0),
    ("Mathigiri", -1.6, 1.0),
    ("Gudichettulu", -3.5, 2.2),
    ("Mugalpalli", 1.8, -1.5),
    ("Kelamangalam", -1.0, -3.0),
    ("Sonnepuram", 3.2, -4.5),
    ("Denkanikottai", 0.5, -7.5),
    ("Thally", -2.0, -8.0),
    ("Mallasandiram", -4.5, -6.0),
    ("Zuzuvadi", -3.8, -2.8),
    ("Lingapuram", -4.2, -0.9),
    ("Attibele", -1.5, 3.4),
    ("Bagalur", 2.5, 3.0),
    ("Sulagiri", 5.0, 4.2),
    ("Berigai", 6.0, 1.0),
    ("Achandaram", 6.8, 2.1),
    ("Bennagatta", 7.2, -0.2),
    ("Nandimangalam", 8.5, 5.6),
];

/// Reference queries over [`hosur_region`] with their optimal cost.
pub const HOSUR_SCENARIOS: [(&str, &str, f64); 5] = [
    ("Gudichettulu", "Sonnepuram", 10.6),
    ("Achandaram", "Bennagatta", 3.3),
    ("Bagalur", "Nandimangalam", 8.4),
    ("Gudichettulu", "Mugalpalli", 7.0),
    ("Lingapuram", "Mallasandiram", 5.3),
];

/// Undirected road network of 18 villages.
pub fn hosur_region() -> Result<Graph<&'static str>, GraphError> {
    let builder = HOSUR_ROADS
        .iter()
        .fold(GraphBuilder::default(), |builder, &(from, to, weight)| {
            builder.with_edge(from, to, weight)
        });

    HOSUR_LOCATIONS
        .iter()
        .fold(builder, |builder, &(vertex, x, y)| {
            builder.with_location(vertex, x, y)
        })
        .build()
}

pub fn hosur_scenarios() -> Vec<RouteProblemConfig<&'static str>> {
    HOSUR_SCENARIOS
        .iter()
        .map(|&(initial, goal, _)| RouteProblemConfig::new(initial, goal))
        .collect()
}

/// Undirected `width` x `height` lattice with unit spacing. Horizontal roads
/// weigh 1, vertical roads weigh 1.5.
pub fn grid_graph(width: usize, height: usize) -> Result<Graph<(usize, usize)>, GraphError> {
    let mut builder = GraphBuilder::default();

    for y in 0..height {
        for x in 0..width {
            builder = builder.with_location((x, y), x as f64, y as f64);
            if x + 1 < width {
                builder = builder.with_edge((x, y), (x + 1, y), 1.0);
            }
            if y + 1 < height {
                builder = builder.with_edge((x, y), (x, y + 1), 1.5);
            }
        }
    }

    builder.build()
}
