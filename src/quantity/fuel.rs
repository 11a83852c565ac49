use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

pub type Litres = Quantity<f64, 0, 0, 0, 1>;

impl Display for Litres {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} L", self.0)
    }
}

impl Debug for Litres {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}L", self.0)
    }
}
