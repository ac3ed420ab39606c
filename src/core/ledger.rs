use crate::{
    core::{HOURS_PER_DAY, appliance::Appliance, error::ScheduleError},
    quantity::power::Watts,
};

/// Running per-hour power totals enforcing the simultaneous-draw ceiling.
///
/// Monotonically increasing: appliances are never unscheduled once placed,
/// so no decrement operation exists.
#[derive(Debug)]
pub struct ConsumptionLedger {
    load: [Watts; HOURS_PER_DAY],
    max_power: Watts,
}

impl ConsumptionLedger {
    /// Seed every hour with the total always-on load.
    ///
    /// Always-on appliances can never be shed, so a ceiling breach here is
    /// fatal rather than a mere infeasible placement.
    pub fn try_new(max_power: Watts, always_on: &[Appliance]) -> Result<Self, ScheduleError> {
        let base_load: Watts = always_on.iter().map(|appliance| appliance.power).sum();
        if base_load > max_power {
            return Err(ScheduleError::PowerExceeded { load: base_load, max_power });
        }
        Ok(Self { load: [base_load; HOURS_PER_DAY], max_power })
    }

    /// Whether the given extra draw still fits under the ceiling at the hour.
    #[must_use]
    pub fn fits(&self, hour: usize, power: Watts) -> bool {
        self.load(hour) + power <= self.max_power
    }

    /// Add a placed appliance's draw to the hour's running total.
    pub fn credit(&mut self, hour: usize, power: Watts) {
        self.load[hour] += power;
    }

    /// Current total draw at the hour.
    #[must_use]
    pub fn load(&self, hour: usize) -> Watts {
        self.load[hour]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::appliance::ApplianceId;

    fn always_on(id: &str, power: f64) -> Appliance {
        Appliance {
            id: ApplianceId::from(id),
            power: Watts::from(power),
            duration: HOURS_PER_DAY,
            mode: None,
        }
    }

    #[test]
    fn test_seeds_every_hour() {
        let ledger = ConsumptionLedger::try_new(
            Watts::from(500.0),
            &[always_on("fridge", 100.0), always_on("router", 50.0)],
        )
        .unwrap();
        for hour in 0..HOURS_PER_DAY {
            assert_eq!(ledger.load(hour), Watts::from(150.0));
        }
    }

    #[test]
    fn test_always_on_overload_is_fatal() {
        assert_eq!(
            ConsumptionLedger::try_new(Watts::from(100.0), &[always_on("heater", 150.0)])
                .unwrap_err(),
            ScheduleError::PowerExceeded {
                load: Watts::from(150.0),
                max_power: Watts::from(100.0),
            },
        );
    }

    #[test]
    fn test_fits_up_to_the_ceiling() {
        let mut ledger =
            ConsumptionLedger::try_new(Watts::from(1000.0), &[always_on("fridge", 100.0)])
                .unwrap();
        assert!(ledger.fits(3, Watts::from(900.0)));
        assert!(!ledger.fits(3, Watts::from(901.0)));

        ledger.credit(3, Watts::from(500.0));
        assert!(ledger.fits(3, Watts::from(400.0)));
        assert!(!ledger.fits(3, Watts::from(401.0)));
        // Other hours are unaffected.
        assert!(ledger.fits(4, Watts::from(900.0)));
    }
}
