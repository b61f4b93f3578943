use clap::Args;
use tracing::warn;
use wayfarer_routing::{
    plan_routes,
    sample::{HOSUR_SCENARIOS, hosur_region, hosur_scenarios},
};

use crate::{
    search_args::SearchArgs,
    tables::{format_cost, new_table, outcome_label},
};

#[derive(Args)]
pub struct ScenariosArgs {
    #[command(flatten)]
    search: SearchArgs,
}

pub fn run(args: ScenariosArgs) -> Result<(), anyhow::Error> {
    let graph = hosur_region()?;
    let plans = plan_routes(&graph, &hosur_scenarios(), &args.search.params())?;

    let mut table = new_table(["From", "To", "Cost (km)", "Expected (km)", "Outcome", "Path"]);
    for (plan, (_, _, expected)) in plans.iter().zip(HOSUR_SCENARIOS) {
        if plan.route().is_some() && (plan.cost() - expected).abs() > 1e-9 {
            warn!(
                "{} -> {} cost {} differs from expected {}",
                plan.config.initial,
                plan.config.goal,
                plan.cost(),
                expected
            );
        }

        let path = plan
            .route()
            .map(|route| route.states.join(" -> "))
            .unwrap_or_default();

        table.add_row(vec![
            plan.config.initial.to_string(),
            plan.config.goal.to_string(),
            format_cost(plan.cost()),
            format_cost(expected),
            outcome_label(plan),
            path,
        ]);
    }

    println!("{table}");

    Ok(())
}
