pub mod curve;
pub mod fields;

use self::curve::ChargeCurve;
use crate::quantity::{
    current::{AmpereHours, Amperes},
    energy::WattHours,
    fuel::Litres,
    power::Watts,
    rate::LitresPerKilowattHour,
    time::Hours,
    voltage::Volts,
};

/// Share of the needed energy replenished during the constant-current phase.
///
/// The 0.6 / 0.2 split is a fixed heuristic allocation, not battery
/// chemistry.
const CC_ENERGY_SHARE: f64 = 0.6;

/// Share of the needed energy replenished during the constant-voltage phase.
const CV_ENERGY_SHARE: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChargeInputs {
    /// Rated capacity per battery.
    pub battery_capacity: AmpereHours,

    /// Nominal voltage per battery.
    pub battery_voltage: Volts,

    /// Number of batteries in the bank.
    pub battery_count: u32,

    /// Fraction of the capacity to be replenished.
    pub depth_of_discharge_percent: f64,

    pub cc_current: Amperes,
    pub cc_voltage: Volts,
    pub cv_voltage: Volts,
    pub cv_current: Amperes,

    /// DC→AC conversion efficiency of the inverter.
    pub inverter_efficiency_percent: f64,

    /// Generator fuel consumption per unit of electrical energy drawn.
    pub fuel_rate: LitresPerKilowattHour,

    /// Continuous load power draw when running off the battery alone.
    pub load_power: Watts,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EstimateError {
    #[error("`{field}` is not a number: `{value}`")]
    InvalidInput { field: &'static str, value: String },

    #[error("{denominator} is zero")]
    DivisionByZero { denominator: &'static str },
}

/// One charge phase of the two-segment curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseEstimate {
    pub charge_power: Watts,
    pub generator_draw: Watts,
    pub time: Hours,
    pub fuel: Litres,
}

/// Immutable result of one calculation, recreated wholesale per request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChargeEstimate {
    pub total_energy: WattHours,
    pub needed_energy: WattHours,
    pub cc: PhaseEstimate,
    pub cv: PhaseEstimate,
    pub total_time: Hours,
    pub total_fuel: Litres,
    pub autonomy_time: Hours,
    pub curve: ChargeCurve,
}

/// Compute the charge-cycle figures for the given bank and generator.
///
/// Pure and deterministic. Out-of-range numeric inputs (negative currents,
/// DoD above 100%) propagate through the formulas untouched; only exact-zero
/// denominators are rejected.
pub fn estimate(inputs: &ChargeInputs) -> Result<ChargeEstimate, EstimateError> {
    let efficiency = inputs.inverter_efficiency_percent / 100.0;
    if efficiency == 0.0 {
        return Err(EstimateError::DivisionByZero { denominator: "inverter efficiency" });
    }
    if inputs.load_power == Watts::ZERO {
        return Err(EstimateError::DivisionByZero { denominator: "load power" });
    }

    let total_energy =
        inputs.battery_capacity * f64::from(inputs.battery_count) * inputs.battery_voltage;
    let needed_energy = total_energy * (inputs.depth_of_discharge_percent / 100.0);

    let cc = estimate_phase(
        needed_energy,
        CC_ENERGY_SHARE,
        inputs.cc_voltage,
        inputs.cc_current,
        efficiency,
        inputs.fuel_rate,
        "CC charge power",
    )?;
    let cv = estimate_phase(
        needed_energy,
        CV_ENERGY_SHARE,
        inputs.cv_voltage,
        inputs.cv_current,
        efficiency,
        inputs.fuel_rate,
        "CV charge power",
    )?;

    Ok(ChargeEstimate {
        total_energy,
        needed_energy,
        total_time: cc.time + cv.time,
        total_fuel: cc.fuel + cv.fuel,
        autonomy_time: needed_energy / inputs.load_power,
        curve: ChargeCurve::new(cc.time, cv.time, inputs.cc_voltage, inputs.cv_voltage),
        cc,
        cv,
    })
}

fn estimate_phase(
    needed_energy: WattHours,
    energy_share: f64,
    voltage: Volts,
    current: Amperes,
    efficiency: f64,
    fuel_rate: LitresPerKilowattHour,
    denominator: &'static str,
) -> Result<PhaseEstimate, EstimateError> {
    let charge_power = voltage * current;
    if charge_power == Watts::ZERO {
        return Err(EstimateError::DivisionByZero { denominator });
    }
    let time = needed_energy * energy_share / charge_power;
    let generator_draw = charge_power / efficiency;

    // Litres = hours × kilowatts × L/kWh, so the fuel burnt in a phase is
    // the generator-side energy of that phase times the rate.
    let fuel = generator_draw * time * fuel_rate;

    Ok(PhaseEstimate { charge_power, generator_draw, time, fuel })
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn default_scenario() {
        let estimate = estimate(&ChargeInputs::default()).unwrap();

        assert_abs_diff_eq!(estimate.total_energy.0, 6240.0);
        assert_abs_diff_eq!(estimate.needed_energy.0, 5304.0, epsilon = 1e-9);

        assert_abs_diff_eq!(estimate.cc.charge_power.0, 1068.0);
        assert_abs_diff_eq!(estimate.cc.generator_draw.0, 1068.0 / 0.92, epsilon = 1e-9);
        assert_abs_diff_eq!(estimate.cc.time.0, 5304.0 * 0.6 / 1068.0, epsilon = 1e-9);
        assert_abs_diff_eq!(estimate.cc.fuel.0, 3182.4 / 0.92 * 0.001 * 0.5, epsilon = 1e-9);

        assert_abs_diff_eq!(estimate.cv.charge_power.0, 107.0);
        assert_abs_diff_eq!(estimate.cv.generator_draw.0, 107.0 / 0.92, epsilon = 1e-9);
        assert_abs_diff_eq!(estimate.cv.time.0, 5304.0 * 0.2 / 107.0, epsilon = 1e-9);
        assert_abs_diff_eq!(estimate.cv.fuel.0, 1060.8 / 0.92 * 0.001 * 0.5, epsilon = 1e-9);

        assert_abs_diff_eq!(estimate.autonomy_time.0, 5304.0 / 170.0, epsilon = 1e-9);
    }

    #[test]
    fn totals_are_sums_of_phases() {
        let estimate = estimate(&ChargeInputs::default()).unwrap();
        assert_abs_diff_eq!(estimate.total_time.0, estimate.cc.time.0 + estimate.cv.time.0);
        assert_abs_diff_eq!(estimate.total_fuel.0, estimate.cc.fuel.0 + estimate.cv.fuel.0);
    }

    #[test]
    fn needed_energy_is_bounded_by_total() {
        for dod in [0.1, 50.0, 85.0, 100.0] {
            let inputs =
                ChargeInputs { depth_of_discharge_percent: dod, ..ChargeInputs::default() };
            let estimate = estimate(&inputs).unwrap();
            assert!(estimate.needed_energy <= estimate.total_energy);
        }
    }

    #[test]
    fn idempotent() {
        let inputs = ChargeInputs::default();
        assert_eq!(estimate(&inputs).unwrap(), estimate(&inputs).unwrap());
    }

    #[test]
    fn zero_inverter_efficiency_is_rejected() {
        let inputs =
            ChargeInputs { inverter_efficiency_percent: 0.0, ..ChargeInputs::default() };
        assert_eq!(
            estimate(&inputs).unwrap_err(),
            EstimateError::DivisionByZero { denominator: "inverter efficiency" },
        );
    }

    #[test]
    fn zero_load_power_is_rejected() {
        let inputs = ChargeInputs { load_power: Watts::ZERO, ..ChargeInputs::default() };
        assert_eq!(
            estimate(&inputs).unwrap_err(),
            EstimateError::DivisionByZero { denominator: "load power" },
        );
    }

    #[test]
    fn zero_cc_current_is_rejected() {
        let inputs = ChargeInputs { cc_current: Amperes::ZERO, ..ChargeInputs::default() };
        assert_eq!(
            estimate(&inputs).unwrap_err(),
            EstimateError::DivisionByZero { denominator: "CC charge power" },
        );
    }

    #[test]
    fn zero_cv_current_is_rejected() {
        let inputs = ChargeInputs { cv_current: Amperes::ZERO, ..ChargeInputs::default() };
        assert_eq!(
            estimate(&inputs).unwrap_err(),
            EstimateError::DivisionByZero { denominator: "CV charge power" },
        );
    }

    #[test]
    fn negative_current_propagates_silently() {
        let inputs =
            ChargeInputs { cc_current: Amperes::from(-40.0), ..ChargeInputs::default() };
        let estimate = estimate(&inputs).unwrap();
        assert!(estimate.cc.time.0 < 0.0);
    }
}
