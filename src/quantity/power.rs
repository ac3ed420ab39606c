use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Instantaneous power draw in watts.
pub type Watts = Quantity<1, 0, 0>;

impl Display for Watts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} W", self.0)
    }
}

impl Debug for Watts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}W", self.0)
    }
}
