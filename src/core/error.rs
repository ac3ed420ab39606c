use crate::{core::appliance::ApplianceId, quantity::power::Watts};

/// Everything that can abort a scheduling run.
///
/// Every variant is fatal: there is no partial-schedule recovery, the caller
/// adjusts the input and retries the whole computation.
#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    /// No tariff spans were supplied at all.
    #[error("no tariff spans supplied")]
    EmptyInput,

    /// A tariff span lies outside the hour range of a day.
    #[error("tariff span {from}..{to} is outside the hours of a day")]
    InvalidSpan { from: usize, to: usize },

    /// After applying every span, an hour is left without a positive rate.
    #[error("no positive rate covers hour {hour}")]
    InvalidCoverage { hour: usize },

    /// The always-on load alone breaches the ceiling, and always-on
    /// appliances can never be shed.
    #[error("always-on load of {load} exceeds the {max_power} ceiling")]
    PowerExceeded { load: Watts, max_power: Watts },

    /// No start hour admits the appliance's full run under the ceiling.
    #[error("no feasible slot for appliance `{id}`")]
    NoFeasibleSlot { id: ApplianceId },
}
