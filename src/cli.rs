use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: compute the least-cost 24-hour schedule and render it.
    #[clap(name = "plan")]
    Plan(PlanArgs),

    /// Expand the tariff spans and print the hourly rate table.
    #[clap(name = "rates")]
    Rates(RatesArgs),
}

#[derive(Parser)]
pub struct PlanArgs {
    #[clap(flatten)]
    pub input: InputArgs,

    /// Which schedulable appliance claims a contested cheap slot first.
    #[clap(long, value_enum, default_value = "power-descending")]
    pub order: PlacementOrder,

    /// Print the raw output document as JSON instead of the tables.
    #[clap(long)]
    pub json: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum PlacementOrder {
    /// Most power-hungry appliance first.
    PowerDescending,

    /// Least power-hungry appliance first.
    PowerAscending,
}

#[derive(Parser)]
pub struct RatesArgs {
    #[clap(flatten)]
    pub input: InputArgs,
}

#[derive(Parser)]
pub struct InputArgs {
    /// Path to the request document: JSON, or TOML for a `.toml` extension.
    #[clap(long = "input", env = "HEARTH_INPUT")]
    pub path: PathBuf,
}
