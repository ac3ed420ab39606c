use std::{collections::HashMap, ops::Index};

use serde::{Deserialize, Serialize};

use crate::{core::HOURS_PER_DAY, quantity::power::Watts};

/// Unique appliance identifier.
///
/// Uniqueness across the request is the invariant the ledger and the schedule
/// rely on for lookup.
#[derive(
    Clone,
    Debug,
    Deserialize,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Display,
    derive_more::From,
)]
#[from(forward)]
pub struct ApplianceId(String);

/// Time-of-day restriction for a schedulable appliance.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// May only run within hours 7..=20.
    Day,

    /// May only run within hours 21..=6, wrapping past midnight.
    Night,
}

impl Mode {
    /// Whether the appliance may be running during the given hour.
    #[must_use]
    pub const fn admits(self, hour: usize) -> bool {
        match self {
            Self::Day => 7 <= hour && hour <= 20,
            Self::Night => hour <= 6 || 21 <= hour,
        }
    }
}

/// Household appliance record from the request document.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Appliance {
    pub id: ApplianceId,

    /// Power draw while running. Assumed positive, not validated here.
    pub power: Watts,

    /// Run cycle length in hours, `1..=24`. A duration of 24 marks the
    /// appliance as always-on.
    pub duration: usize,

    /// Optional time-of-day restriction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
}

impl Appliance {
    /// Runs every hour of the day regardless of cost.
    #[must_use]
    pub const fn is_always_on(&self) -> bool {
        self.duration == HOURS_PER_DAY
    }
}

/// Partition the appliances into always-on and schedulable ones,
/// preserving the request order within each group.
#[must_use]
pub fn classify(devices: &[Appliance]) -> (Vec<Appliance>, Vec<Appliance>) {
    devices.iter().cloned().partition(Appliance::is_always_on)
}

/// Id-keyed lookup table used by every step that needs an appliance's
/// power or duration.
pub struct ApplianceIndex(HashMap<ApplianceId, Appliance>);

impl ApplianceIndex {
    #[must_use]
    pub fn new(devices: &[Appliance]) -> Self {
        Self(devices.iter().map(|appliance| (appliance.id.clone(), appliance.clone())).collect())
    }
}

impl Index<&ApplianceId> for ApplianceIndex {
    type Output = Appliance;

    /// Panics if the id was not part of the request the index was built from.
    fn index(&self, id: &ApplianceId) -> &Self::Output {
        &self.0[id]
    }
}
