use std::cmp::Ordering;

use serde::Deserialize;

use crate::{
    core::{
        HOURS_PER_DAY,
        appliance::{Appliance, ApplianceIndex, Mode, classify},
        error::ScheduleError,
        ledger::ConsumptionLedger,
        schedule::HourlySchedule,
        solution::{ConsumedEnergy, Plan},
        tariff::{HourlyRates, RateSpan},
    },
    prelude::*,
    quantity::{cost::Cost, power::Watts},
};

/// Scheduling request supplied by the caller.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub rates: Vec<RateSpan>,
    pub devices: Vec<Appliance>,

    /// Ceiling on the total power draw of simultaneously running appliances.
    pub max_power: Watts,
}

/// Comparator deciding which schedulable appliance gets to claim a contested
/// cheap slot first.
pub type OrderingPolicy = fn(&Appliance, &Appliance) -> Ordering;

/// Default policy: most power-hungry first.
///
/// Once the high-draw appliances hold the cheapest feasible slots, the
/// low-draw ones are boxed into whatever capacity remains. Greedy, not
/// optimal.
pub fn power_descending(left: &Appliance, right: &Appliance) -> Ordering {
    right.power.cmp(&left.power)
}

/// Alternative policy: least power-hungry first.
pub fn power_ascending(left: &Appliance, right: &Appliance) -> Ordering {
    left.power.cmp(&right.power)
}

/// One scheduling run: owns the price tables, the appliance index, and the
/// two structures mutated during placement, the schedule and the ledger.
pub struct Planner {
    rates: HourlyRates,
    day_rates: HourlyRates,
    night_rates: HourlyRates,
    index: ApplianceIndex,
    schedulable: Vec<Appliance>,
    schedule: HourlySchedule,
    ledger: ConsumptionLedger,
    ordering: OrderingPolicy,
}

impl Planner {
    /// Build every table and the seeded ledger from the request.
    pub fn try_new(request: &PlanRequest) -> Result<Self, ScheduleError> {
        let rates = HourlyRates::expand(&request.rates)?;
        let (always_on, schedulable) = classify(&request.devices);
        let ledger = ConsumptionLedger::try_new(request.max_power, &always_on)?;
        Ok(Self {
            day_rates: rates.restricted_to(Mode::Day),
            night_rates: rates.restricted_to(Mode::Night),
            rates,
            index: ApplianceIndex::new(&request.devices),
            schedulable,
            schedule: HourlySchedule::new(&always_on),
            ledger,
            ordering: power_descending,
        })
    }

    /// Replace the placement ordering policy.
    #[must_use]
    pub fn with_ordering(mut self, ordering: OrderingPolicy) -> Self {
        self.ordering = ordering;
        self
    }

    /// Place every schedulable appliance, then tally the cost.
    ///
    /// Placement is strictly sequential: one appliance is fully committed
    /// before the next one's search begins, and a failed search aborts the
    /// whole run.
    #[instrument(skip_all)]
    pub fn plan(mut self) -> Result<Plan, ScheduleError> {
        let mut schedulable = std::mem::take(&mut self.schedulable);
        schedulable.sort_by(self.ordering);

        for appliance in &schedulable {
            let start = self.find_start(appliance)?;
            debug!(id = %appliance.id, start, "placed");
            self.place(appliance, start);
        }

        let consumed_energy = ConsumedEnergy::tally(&self.schedule, &self.rates, &self.index);
        Ok(Plan { schedule: self.schedule, consumed_energy })
    }

    const fn rates_for(&self, mode: Option<Mode>) -> &HourlyRates {
        match mode {
            None => &self.rates,
            Some(Mode::Day) => &self.day_rates,
            Some(Mode::Night) => &self.night_rates,
        }
    }

    /// Cheapest feasible start hour for the appliance's full run window.
    ///
    /// Ties resolve to the earliest start hour.
    fn find_start(&self, appliance: &Appliance) -> Result<usize, ScheduleError> {
        let rates = self.rates_for(appliance.mode);
        (0..HOURS_PER_DAY)
            .filter_map(|start| {
                self.window_cost(rates, appliance, start).map(|cost| (start, cost))
            })
            .min_by_key(|(_, cost)| *cost)
            .map(|(start, _)| start)
            .ok_or_else(|| ScheduleError::NoFeasibleSlot { id: appliance.id.clone() })
    }

    /// Cost of running the appliance's window from `start`, or `None` when
    /// the window breaches the ceiling at any touched hour or crosses an
    /// hour its mode forbids.
    fn window_cost(
        &self,
        rates: &HourlyRates,
        appliance: &Appliance,
        start: usize,
    ) -> Option<Cost> {
        let mut cost = Cost::ZERO;
        for offset in 0..appliance.duration {
            let hour = (start + offset) % HOURS_PER_DAY;
            if !self.ledger.fits(hour, appliance.power) {
                return None;
            }
            cost += rates[hour] * appliance.power;
        }
        cost.is_finite().then_some(cost)
    }

    /// Commit the chosen start: credit the ledger and extend the schedule at
    /// every touched hour.
    fn place(&mut self, appliance: &Appliance, start: usize) {
        for offset in 0..appliance.duration {
            let hour = (start + offset) % HOURS_PER_DAY;
            self.ledger.credit(hour, appliance.power);
            self.schedule.assign(hour, appliance.id.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::appliance::ApplianceId;

    fn appliance(id: &str, power: f64, duration: usize, mode: Option<Mode>) -> Appliance {
        Appliance { id: id.into(), power: Watts::from(power), duration, mode }
    }

    fn span(from: usize, to: usize, value: f64) -> RateSpan {
        RateSpan { from, to, value: value.into() }
    }

    /// Hours at which the given appliance is scheduled.
    fn hours_of(plan: &Plan, id: &str) -> Vec<usize> {
        let id = ApplianceId::from(id);
        plan.schedule
            .iter()
            .filter(|(_, ids)| ids.contains(&id))
            .map(|(hour, _)| hour)
            .collect()
    }

    #[test]
    fn test_single_appliance_takes_the_cheap_hour() {
        let request = PlanRequest {
            rates: vec![span(0, 1, 1.0), span(1, 24, 2.0)],
            devices: vec![appliance("washer", 100.0, 1, None)],
            max_power: Watts::from(1000.0),
        };
        let plan = Planner::try_new(&request).unwrap().plan().unwrap();
        assert_eq!(hours_of(&plan, "washer"), [0]);
    }

    #[test]
    fn test_window_wraps_past_midnight() {
        let request = PlanRequest {
            rates: vec![span(22, 1, 1.0), span(1, 22, 10.0)],
            devices: vec![appliance("boiler", 100.0, 3, None)],
            max_power: Watts::from(1000.0),
        };
        let plan = Planner::try_new(&request).unwrap().plan().unwrap();
        // Exactly 3 distinct touched hours, wrapped modulo 24.
        assert_eq!(hours_of(&plan, "boiler"), [0, 22, 23]);
    }

    #[test]
    fn test_equal_rates_resolve_to_the_earliest_hour() {
        let request = PlanRequest {
            rates: vec![span(0, 0, 3.0)],
            devices: vec![appliance("washer", 100.0, 2, None)],
            max_power: Watts::from(1000.0),
        };
        let plan = Planner::try_new(&request).unwrap().plan().unwrap();
        assert_eq!(hours_of(&plan, "washer"), [0, 1]);
    }

    #[test]
    fn test_higher_draw_claims_the_contested_slot() {
        let request = PlanRequest {
            rates: vec![span(0, 1, 1.0), span(1, 24, 2.0)],
            devices: vec![
                appliance("kettle", 500.0, 1, None),
                appliance("oven", 1000.0, 1, None),
            ],
            max_power: Watts::from(1000.0),
        };
        let plan = Planner::try_new(&request).unwrap().plan().unwrap();
        assert_eq!(hours_of(&plan, "oven"), [0]);
        assert_eq!(hours_of(&plan, "kettle"), [1]);
    }

    #[test]
    fn test_ordering_policy_is_pluggable() {
        let request = PlanRequest {
            rates: vec![span(0, 1, 1.0), span(1, 24, 2.0)],
            devices: vec![
                appliance("kettle", 500.0, 1, None),
                appliance("oven", 1000.0, 1, None),
            ],
            max_power: Watts::from(1000.0),
        };
        let plan =
            Planner::try_new(&request).unwrap().with_ordering(power_ascending).plan().unwrap();
        assert_eq!(hours_of(&plan, "kettle"), [0]);
        assert_eq!(hours_of(&plan, "oven"), [1]);
    }

    #[test]
    fn test_no_feasible_slot() {
        let request = PlanRequest {
            rates: vec![span(0, 0, 1.0)],
            devices: vec![
                appliance("heater", 1000.0, 24, None),
                appliance("sauna", 1500.0, 2, None),
            ],
            max_power: Watts::from(2000.0),
        };
        assert_eq!(
            Planner::try_new(&request).unwrap().plan().unwrap_err(),
            ScheduleError::NoFeasibleSlot { id: "sauna".into() },
        );
    }

    /// Night admits only 10 hours, so an 11-hour night appliance cannot be
    /// placed even though the ledger has room everywhere.
    #[test]
    fn test_mode_window_too_narrow() {
        let request = PlanRequest {
            rates: vec![span(0, 0, 1.0)],
            devices: vec![appliance("boiler", 100.0, 11, Some(Mode::Night))],
            max_power: Watts::from(1000.0),
        };
        assert_eq!(
            Planner::try_new(&request).unwrap().plan().unwrap_err(),
            ScheduleError::NoFeasibleSlot { id: "boiler".into() },
        );
    }

    #[test]
    fn test_household_day() {
        let request = PlanRequest {
            rates: vec![
                span(23, 7, 1.79),
                span(7, 10, 6.46),
                span(10, 17, 5.38),
                span(17, 21, 6.46),
                span(21, 23, 5.38),
            ],
            devices: vec![
                appliance("fridge", 50.0, 24, None),
                appliance("router", 50.0, 24, None),
                appliance("heater", 950.0, 3, Some(Mode::Night)),
                appliance("vacuum", 2000.0, 2, Some(Mode::Day)),
                appliance("washer", 850.0, 1, None),
            ],
            max_power: Watts::from(2100.0),
        };
        let plan = Planner::try_new(&request).unwrap().plan().unwrap();
        let index = ApplianceIndex::new(&request.devices);

        // The ceiling holds at every hour and always-on appliances never
        // leave the schedule.
        for (_, ids) in plan.schedule.iter() {
            let load: Watts = ids.iter().map(|id| index[id].power).sum();
            assert!(load <= request.max_power);
            assert!(ids.contains(&"fridge".into()));
            assert!(ids.contains(&"router".into()));
        }

        // Restricted appliances stay inside their period.
        assert!(hours_of(&plan, "heater").iter().all(|hour| Mode::Night.admits(*hour)));
        assert!(hours_of(&plan, "vacuum").iter().all(|hour| Mode::Day.admits(*hour)));

        // The greedy pass is deterministic, so the exact placements hold:
        // the vacuum takes the first cheap daytime window, the heater the
        // first cheap night window, and the washer squeezes in beside it.
        assert_eq!(hours_of(&plan, "vacuum"), [10, 11]);
        assert_eq!(hours_of(&plan, "heater"), [0, 1, 2]);
        assert_eq!(hours_of(&plan, "washer"), [0]);
    }
}
