use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::{
    core::{ApplianceIndex, HOURS_PER_DAY, HourlyRates, Plan},
    quantity::{power::Watts, rate::KilowattHourRate},
};

/// Hour-by-hour view of the finished plan.
pub fn build_plan_table(plan: &Plan, rates: &HourlyRates, index: &ApplianceIndex) -> Table {
    let median_rate = median(rates);
    let mut table = new_table();
    table.set_header(vec!["Hour", "Rate", "Appliances", "Load"]);
    for hour in 0..HOURS_PER_DAY {
        let ids = plan.schedule.at(hour);
        let load: Watts = ids.iter().map(|id| index[id].power).sum();
        table.add_row(vec![
            Cell::new(format!("{hour:02}:00")),
            Cell::new(rates[hour]).fg(if rates[hour] >= median_rate {
                Color::Red
            } else {
                Color::Green
            }),
            Cell::new(ids.iter().join(", ")),
            Cell::new(load).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Per-appliance cost breakdown with the grand total as the last row.
pub fn build_cost_table(plan: &Plan) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Appliance", "Cost"]);
    for (id, cost) in &plan.consumed_energy.devices {
        table.add_row(vec![
            Cell::new(id),
            Cell::new(cost).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(plan.consumed_energy.value)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

/// Expanded hourly tariff table.
pub fn build_rates_table(rates: &HourlyRates) -> Table {
    let median_rate = median(rates);
    let mut table = new_table();
    table.set_header(vec!["Hour", "Rate"]);
    for (hour, rate) in rates.iter() {
        table.add_row(vec![
            Cell::new(format!("{hour:02}:00")),
            Cell::new(rate).fg(if rate >= median_rate { Color::Red } else { Color::Green }),
        ]);
    }
    table
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

fn median(rates: &HourlyRates) -> KilowattHourRate {
    let sorted: Vec<_> = rates.iter().map(|(_, rate)| rate).sorted().collect();
    sorted[sorted.len() / 2]
}
