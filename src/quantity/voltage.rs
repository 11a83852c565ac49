use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, current::Amperes, power::Watts};

pub type Volts = Quantity<f64, 1, 0, 0, 0>;

impl Display for Volts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} V", self.0)
    }
}

impl Debug for Volts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}V", self.0)
    }
}

impl Mul<Amperes> for Volts {
    type Output = Watts;

    fn mul(self, rhs: Amperes) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}
