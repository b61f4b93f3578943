use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{route::RouteArgs, scenarios::ScenariosArgs};

mod parsers;
mod route;
mod scenarios;
mod search_args;
mod tables;
mod vertices;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Cheapest route between two villages of the bundled map
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    /// List villages with their coordinates and roads
    Vertices,
    /// Solve the reference queries in parallel
    Scenarios {
        #[command(flatten)]
        args: ScenariosArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Route { args } => route::run(args)?,
        Commands::Vertices => vertices::run()?,
        Commands::Scenarios { args } => scenarios::run(args)?,
    }

    Ok(())
}
