use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, energy::WattHours, voltage::Volts};

pub type Amperes = Quantity<f64, 0, 1, 0, 0>;

impl Display for Amperes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} A", self.0)
    }
}

impl Debug for Amperes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}A", self.0)
    }
}

/// Rated charge capacity.
pub type AmpereHours = Quantity<f64, 0, 1, 1, 0>;

impl Display for AmpereHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} Ah", self.0)
    }
}

impl Debug for AmpereHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}Ah", self.0)
    }
}

impl Mul<Volts> for AmpereHours {
    type Output = WattHours;

    fn mul(self, rhs: Volts) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}
