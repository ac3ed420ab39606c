use std::fmt::{Debug, Display, Formatter};

use ordered_float::OrderedFloat;

use crate::quantity::Quantity;

/// Monetary cost in euros.
pub type Cost = Quantity<0, 0, 1>;

impl Cost {
    /// Round to 10 significant digits.
    ///
    /// Callers compare aggregated figures for exact equality, so the tally
    /// must not leak accumulated floating-point drift.
    #[must_use]
    pub fn round_to_precision(self) -> Self {
        // 9 fractional digits in scientific notation make 10 significant ones.
        Self(OrderedFloat(format!("{:.9e}", self.0.0).parse().unwrap_or(self.0.0)))
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} €", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}€", self.0)
    }
}
