use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::core::{
    HOURS_PER_DAY,
    appliance::{Appliance, ApplianceId},
};

/// Appliance ids active at each hour of the day.
///
/// Order within an hour reflects placement order, not start time.
#[derive(Debug)]
pub struct HourlySchedule([Vec<ApplianceId>; HOURS_PER_DAY]);

impl HourlySchedule {
    /// Start with every always-on appliance scheduled for the whole day.
    #[must_use]
    pub fn new(always_on: &[Appliance]) -> Self {
        Self(std::array::from_fn(|_| {
            always_on.iter().map(|appliance| appliance.id.clone()).collect()
        }))
    }

    /// Append an id to the hour's running set.
    pub fn assign(&mut self, hour: usize, id: ApplianceId) {
        self.0[hour].push(id);
    }

    #[must_use]
    pub fn at(&self, hour: usize) -> &[ApplianceId] {
        &self.0[hour]
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[ApplianceId])> {
        self.0.iter().enumerate().map(|(hour, ids)| (hour, ids.as_slice()))
    }
}

/// Serialized as an object keyed `"0"` through `"23"`, the shape the output
/// document promises to callers.
impl Serialize for HourlySchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(HOURS_PER_DAY))?;
        for (hour, ids) in self.iter() {
            map.serialize_entry(&hour, ids)?;
        }
        map.end()
    }
}
