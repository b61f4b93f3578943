use comfy_table::{Table, presets::UTF8_FULL};
use wayfarer_routing::{RouteOutcome, RoutePlan};

pub fn new_table<I, S>(header: I) -> Table
where
    I: IntoIterator<Item = S>,
    S: Into<comfy_table::Cell>,
{
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);
    table
}

pub fn format_cost(cost: f64) -> String {
    if cost.is_finite() {
        format!("{cost:.1}")
    } else {
        String::from("-")
    }
}

pub fn outcome_label(plan: &RoutePlan<&str>) -> String {
    match &plan.outcome {
        RouteOutcome::Found(route) => format!("found ({} hops)", route.hops()),
        RouteOutcome::NoRoute => String::from("no route"),
        RouteOutcome::CutOff { termination } => format!("cut off ({termination})"),
    }
}
