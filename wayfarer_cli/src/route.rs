use anyhow::Context;
use clap::Args;
use tracing::info;
use wayfarer_routing::{Graph, RouteProblemConfig, plan_route, sample::hosur_region};

use crate::{
    search_args::SearchArgs,
    tables::{format_cost, new_table, outcome_label},
};

#[derive(Args)]
pub struct RouteArgs {
    /// Starting village
    #[arg(short, long)]
    from: String,

    /// Destination village
    #[arg(short, long)]
    to: String,

    #[command(flatten)]
    search: SearchArgs,

    /// Print the plan as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn run(args: RouteArgs) -> Result<(), anyhow::Error> {
    let graph = hosur_region()?;
    let from = resolve_vertex(&graph, &args.from)?;
    let to = resolve_vertex(&graph, &args.to)?;

    let plan = plan_route(&graph, &RouteProblemConfig::new(from, to), &args.search.params())
        .with_context(|| format!("Failed to plan route from {from} to {to}"))?;

    info!("{} -> {}: {}", from, to, outcome_label(&plan));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let mut table = new_table(["#", "From", "To", "Distance (km)"]);
    for (index, leg) in plan.legs().iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            leg.from.to_string(),
            leg.to.to_string(),
            format_cost(leg.weight),
        ]);
    }

    println!("{table}");
    println!("Total: {} km, {}", format_cost(plan.cost()), outcome_label(&plan));
    println!("{}", plan.statistics);

    Ok(())
}

/// Matches a village name case-insensitively.
pub fn resolve_vertex(graph: &Graph<&'static str>, name: &str) -> Result<&'static str, anyhow::Error> {
    graph
        .vertices()
        .iter()
        .find(|vertex| vertex.eq_ignore_ascii_case(name))
        .copied()
        .with_context(|| format!("Unknown village {name}, run `wayfarer vertices` to list them"))
}
