mod appliance;
mod error;
mod ledger;
mod planner;
mod schedule;
mod solution;
mod tariff;

pub use self::{
    appliance::{Appliance, ApplianceId, ApplianceIndex, Mode, classify},
    error::ScheduleError,
    ledger::ConsumptionLedger,
    planner::{OrderingPolicy, PlanRequest, Planner, power_ascending, power_descending},
    schedule::HourlySchedule,
    solution::{ConsumedEnergy, Plan},
    tariff::{HourlyRates, RateSpan},
};

/// Number of one-hour slots in a scheduling day.
pub const HOURS_PER_DAY: usize = 24;
