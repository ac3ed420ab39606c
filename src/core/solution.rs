use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    core::{
        appliance::{ApplianceId, ApplianceIndex},
        schedule::HourlySchedule,
        tariff::HourlyRates,
    },
    quantity::cost::Cost,
};

/// Finished schedule with its cost breakdown, handed back to the caller
/// as the output document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub schedule: HourlySchedule,
    pub consumed_energy: ConsumedEnergy,
}

/// Grand total and per-appliance energy cost of a finished schedule.
#[derive(Debug, Eq, PartialEq, Serialize)]
pub struct ConsumedEnergy {
    pub value: Cost,
    pub devices: BTreeMap<ApplianceId, Cost>,
}

impl ConsumedEnergy {
    /// Walk the finished schedule once, summing `rate × power` per hour and
    /// per appliance. Figures are rounded to a fixed precision before being
    /// returned.
    #[must_use]
    pub fn tally(
        schedule: &HourlySchedule,
        rates: &HourlyRates,
        index: &ApplianceIndex,
    ) -> Self {
        let mut value = Cost::ZERO;
        let mut devices = BTreeMap::<ApplianceId, Cost>::new();
        for (hour, ids) in schedule.iter() {
            for id in ids {
                let cost = rates[hour] * index[id].power;
                value += cost;
                *devices.entry(id.clone()).or_insert(Cost::ZERO) += cost;
            }
        }
        Self {
            value: value.round_to_precision(),
            devices: devices
                .into_iter()
                .map(|(id, cost)| (id, cost.round_to_precision()))
                .collect(),
        }
    }
}
