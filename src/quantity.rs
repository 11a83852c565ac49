pub mod current;
pub mod energy;
pub mod fuel;
pub mod power;
pub mod rate;
pub mod time;
pub mod voltage;

use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

/// Physical quantity with compile-time dimension exponents.
///
/// The exponents track volts, amperes, hours, and litres, so energy is
/// `V¹·A¹·h¹` and charge capacity is `A¹·h¹`. Cross-unit products and
/// quotients are spelled out per alias in the submodules.
#[derive(
    Clone,
    Copy,
    Deserialize,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
pub struct Quantity<
    T,
    const VOLTAGE: isize,
    const CURRENT: isize,
    const TIME: isize,
    const FUEL: isize,
>(pub T);

impl<const VOLTAGE: isize, const CURRENT: isize, const TIME: isize, const FUEL: isize>
    Quantity<f64, VOLTAGE, CURRENT, TIME, FUEL>
{
    pub const ZERO: Self = Self(0.0);
}

impl<T, const VOLTAGE: isize, const CURRENT: isize, const TIME: isize, const FUEL: isize> Mul<T>
    for Quantity<T, VOLTAGE, CURRENT, TIME, FUEL>
where
    T: Mul<T>,
{
    type Output = Quantity<T::Output, VOLTAGE, CURRENT, TIME, FUEL>;

    fn mul(self, rhs: T) -> Self::Output {
        Quantity(self.0 * rhs)
    }
}

impl<T, const VOLTAGE: isize, const CURRENT: isize, const TIME: isize, const FUEL: isize> Div<T>
    for Quantity<T, VOLTAGE, CURRENT, TIME, FUEL>
where
    T: Div<T>,
{
    type Output = Quantity<T::Output, VOLTAGE, CURRENT, TIME, FUEL>;

    fn div(self, rhs: T) -> Self::Output {
        Quantity(self.0 / rhs)
    }
}
