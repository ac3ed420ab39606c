use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use ordered_float::OrderedFloat;

use crate::quantity::{Quantity, cost::Cost, power::Watts};

const WATTS_PER_KILOWATT: f64 = 1000.0;

/// Price of one kilowatt-hour.
pub type KilowattHourRate = Quantity<-1, -1, 1>;

impl KilowattHourRate {
    /// Sentinel for hours at which a restricted appliance may not run:
    /// infinitely expensive, hence never picked by the cost minimization.
    pub const INFINITY: Self = Self(OrderedFloat(f64::INFINITY));
}

impl Display for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} €/kWh", self.0)
    }
}

impl Debug for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}€/kWh", self.0)
    }
}

impl Mul<Watts> for KilowattHourRate {
    type Output = Cost;

    /// Cost of running the load at this rate for one 1-hour slot.
    fn mul(self, rhs: Watts) -> Self::Output {
        Cost::from(self.0 * rhs.0 / WATTS_PER_KILOWATT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_cost() {
        assert_eq!(KilowattHourRate::from(2.0) * Watts::from(500.0), Cost::from(1.0));
    }

    #[test]
    fn test_infinite_rate_never_minimal() {
        assert!(KilowattHourRate::INFINITY > KilowattHourRate::from(f64::MAX));
        assert!(!(KilowattHourRate::INFINITY * Watts::from(1.0)).is_finite());
    }
}
