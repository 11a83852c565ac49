use std::{
    fmt::{Debug, Display, Formatter},
    ops::{Div, Mul},
};

use crate::quantity::{
    Quantity,
    fuel::Litres,
    power::Watts,
    rate::LitresPerKilowattHour,
    time::Hours,
};

pub type WattHours = Quantity<f64, 1, 1, 1, 0>;

impl Display for WattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} Wh", self.0)
    }
}

impl Debug for WattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}Wh", self.0)
    }
}

impl Div<Watts> for WattHours {
    type Output = Hours;

    fn div(self, rhs: Watts) -> Self::Output {
        Quantity(self.0 / rhs.0)
    }
}

impl Mul<LitresPerKilowattHour> for WattHours {
    type Output = Litres;

    fn mul(self, rhs: LitresPerKilowattHour) -> Self::Output {
        // The rate is per kilowatt-hour.
        Quantity(self.0 * 0.001 * rhs.0)
    }
}
