use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Generator fuel consumption per unit of electrical energy drawn.
pub type LitresPerKilowattHour = Quantity<f64, -1, -1, -1, 1>;

impl Display for LitresPerKilowattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} L/kWh", self.0)
    }
}

impl Debug for LitresPerKilowattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}L/kWh", self.0)
    }
}
