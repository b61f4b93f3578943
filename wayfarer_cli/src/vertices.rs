use wayfarer_routing::sample::hosur_region;

use crate::tables::{format_cost, new_table};

pub fn run() -> Result<(), anyhow::Error> {
    let graph = hosur_region()?;

    let mut table = new_table(["Village", "x (km)", "y (km)", "Neighbors"]);
    for vertex in graph.vertices() {
        let (x, y) = graph
            .location(vertex)
            .map(|point| (format_cost(point.x()), format_cost(point.y())))
            .unwrap_or_else(|| (String::from("-"), String::from("-")));

        let neighbors = graph
            .neighbors(vertex)
            .iter()
            .map(|neighbor| {
                let distance = graph.distance(vertex, neighbor).unwrap_or(f64::INFINITY);
                format!("{neighbor} ({})", format_cost(distance))
            })
            .collect::<Vec<_>>()
            .join(", ");

        table.add_row(vec![vertex.to_string(), x, y, neighbors]);
    }

    println!("{table}");
    println!(
        "{} villages, {} roads",
        graph.vertex_count(),
        graph.edge_count() / 2
    );

    Ok(())
}
