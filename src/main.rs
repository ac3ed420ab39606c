mod cli;
mod core;
mod prelude;
mod quantity;
mod tables;

use std::{fs, path::Path};

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, Command, PlacementOrder},
    core::{ApplianceIndex, HourlyRates, PlanRequest, Planner, power_ascending},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    match Args::parse().command {
        Command::Plan(args) => {
            let request = load_request(&args.input.path)?;
            info!(
                n_rates = request.rates.len(),
                n_devices = request.devices.len(),
                max_power = %request.max_power,
                "loaded the request",
            );

            let planner = match args.order {
                PlacementOrder::PowerDescending => Planner::try_new(&request)?,
                PlacementOrder::PowerAscending => {
                    Planner::try_new(&request)?.with_ordering(power_ascending)
                }
            };
            let plan = planner.plan()?;
            info!(total = %plan.consumed_energy.value, "planned");

            if args.json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                let rates = HourlyRates::expand(&request.rates)?;
                let index = ApplianceIndex::new(&request.devices);
                println!("{}", tables::build_plan_table(&plan, &rates, &index));
                println!("{}", tables::build_cost_table(&plan));
            }
            Ok(())
        }

        Command::Rates(args) => {
            let request = load_request(&args.input.path)?;
            let rates = HourlyRates::expand(&request.rates)?;
            println!("{}", tables::build_rates_table(&rates));
            Ok(())
        }
    }
}

/// Load the request document: JSON by default, TOML for `.toml` files.
fn load_request(path: &Path) -> Result<PlanRequest> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;
    if path.extension().is_some_and(|extension| extension.eq_ignore_ascii_case("toml")) {
        toml::from_str(&raw).context("failed to parse the TOML request")
    } else {
        serde_json::from_str(&raw).context("failed to parse the JSON request")
    }
}
