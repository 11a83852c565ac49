use serde::Deserialize;

use crate::{
    estimator::{ChargeInputs, EstimateError},
    quantity::{
        Quantity,
        current::{AmpereHours, Amperes},
        power::Watts,
        rate::LitresPerKilowattHour,
        voltage::Volts,
    },
};

const DEFAULT_BATTERY_CAPACITY: AmpereHours = Quantity(130.0);
const DEFAULT_BATTERY_VOLTAGE: Volts = Quantity(24.0);
const DEFAULT_BATTERY_COUNT: u32 = 2;
const DEFAULT_DEPTH_OF_DISCHARGE_PERCENT: f64 = 85.0;
const DEFAULT_CC_CURRENT: Amperes = Quantity(40.0);
const DEFAULT_CC_VOLTAGE: Volts = Quantity(26.7);
const DEFAULT_CV_VOLTAGE: Volts = Quantity(26.75);
const DEFAULT_CV_CURRENT: Amperes = Quantity(4.0);
const DEFAULT_INVERTER_EFFICIENCY_PERCENT: f64 = 92.0;
const DEFAULT_FUEL_RATE: LitresPerKilowattHour = Quantity(0.5);
const DEFAULT_LOAD_POWER: Watts = Quantity(170.0);

/// The input fields, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    BatteryCapacity,
    BatteryVoltage,
    BatteryCount,
    DepthOfDischargePercent,
    CcCurrent,
    CcVoltage,
    CvVoltage,
    CvCurrent,
    InverterEfficiencyPercent,
    FuelRate,
    LoadPower,
}

impl Field {
    pub const ALL: [Self; 11] = [
        Self::BatteryCapacity,
        Self::BatteryVoltage,
        Self::BatteryCount,
        Self::DepthOfDischargePercent,
        Self::CcCurrent,
        Self::CcVoltage,
        Self::CvVoltage,
        Self::CvCurrent,
        Self::InverterEfficiencyPercent,
        Self::FuelRate,
        Self::LoadPower,
    ];

    /// Human-readable form label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::BatteryCapacity => "Ёмкость АКБ (А·ч)",
            Self::BatteryVoltage => "Напряжение АКБ (В)",
            Self::BatteryCount => "Количество АКБ",
            Self::DepthOfDischargePercent => "Глубина разряда (DoD, %)",
            Self::CcCurrent => "Ток заряда (CC, А)",
            Self::CcVoltage => "Напряжение при CC (В)",
            Self::CvVoltage => "Напряжение при CV (В)",
            Self::CvCurrent => "Ток при CV (А)",
            Self::InverterEfficiencyPercent => "КПД инвертора (%)",
            Self::FuelRate => "Расход топлива (л/кВт·ч)",
            Self::LoadPower => "Мощность нагрузки (Вт)",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::BatteryCapacity => "battery_capacity",
            Self::BatteryVoltage => "battery_voltage",
            Self::BatteryCount => "battery_count",
            Self::DepthOfDischargePercent => "depth_of_discharge_percent",
            Self::CcCurrent => "cc_current",
            Self::CcVoltage => "cc_voltage",
            Self::CvVoltage => "cv_voltage",
            Self::CvCurrent => "cv_current",
            Self::InverterEfficiencyPercent => "inverter_efficiency_percent",
            Self::FuelRate => "fuel_rate",
            Self::LoadPower => "load_power",
        }
    }
}

/// One optional slot per input field; a blank field falls back to the
/// documented default when the form is turned into [`ChargeInputs`].
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct InputForm {
    pub battery_capacity: Option<AmpereHours>,
    pub battery_voltage: Option<Volts>,
    pub battery_count: Option<u32>,
    pub depth_of_discharge_percent: Option<f64>,
    pub cc_current: Option<Amperes>,
    pub cc_voltage: Option<Volts>,
    pub cv_voltage: Option<Volts>,
    pub cv_current: Option<Amperes>,
    pub inverter_efficiency_percent: Option<f64>,
    pub fuel_rate: Option<LitresPerKilowattHour>,
    pub load_power: Option<Watts>,
}

impl InputForm {
    /// Load a saved form from TOML text. Absent keys keep their defaults.
    pub fn from_toml(text: &str) -> crate::prelude::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Assign a raw form field. Blank text keeps the default.
    pub fn set(&mut self, field: Field, raw: &str) -> Result<(), EstimateError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(());
        }
        match field {
            Field::BatteryCapacity => self.battery_capacity = Some(parse(field, raw)?),
            Field::BatteryVoltage => self.battery_voltage = Some(parse(field, raw)?),
            Field::BatteryCount => self.battery_count = Some(parse(field, raw)?),
            Field::DepthOfDischargePercent => {
                self.depth_of_discharge_percent = Some(parse(field, raw)?);
            }
            Field::CcCurrent => self.cc_current = Some(parse(field, raw)?),
            Field::CcVoltage => self.cc_voltage = Some(parse(field, raw)?),
            Field::CvVoltage => self.cv_voltage = Some(parse(field, raw)?),
            Field::CvCurrent => self.cv_current = Some(parse(field, raw)?),
            Field::InverterEfficiencyPercent => {
                self.inverter_efficiency_percent = Some(parse(field, raw)?);
            }
            Field::FuelRate => self.fuel_rate = Some(parse(field, raw)?),
            Field::LoadPower => self.load_power = Some(parse(field, raw)?),
        }
        Ok(())
    }

    #[must_use]
    pub fn into_inputs(self) -> ChargeInputs {
        ChargeInputs {
            battery_capacity: self.battery_capacity.unwrap_or(DEFAULT_BATTERY_CAPACITY),
            battery_voltage: self.battery_voltage.unwrap_or(DEFAULT_BATTERY_VOLTAGE),
            battery_count: self.battery_count.unwrap_or(DEFAULT_BATTERY_COUNT),
            depth_of_discharge_percent: self
                .depth_of_discharge_percent
                .unwrap_or(DEFAULT_DEPTH_OF_DISCHARGE_PERCENT),
            cc_current: self.cc_current.unwrap_or(DEFAULT_CC_CURRENT),
            cc_voltage: self.cc_voltage.unwrap_or(DEFAULT_CC_VOLTAGE),
            cv_voltage: self.cv_voltage.unwrap_or(DEFAULT_CV_VOLTAGE),
            cv_current: self.cv_current.unwrap_or(DEFAULT_CV_CURRENT),
            inverter_efficiency_percent: self
                .inverter_efficiency_percent
                .unwrap_or(DEFAULT_INVERTER_EFFICIENCY_PERCENT),
            fuel_rate: self.fuel_rate.unwrap_or(DEFAULT_FUEL_RATE),
            load_power: self.load_power.unwrap_or(DEFAULT_LOAD_POWER),
        }
    }
}

impl Default for ChargeInputs {
    fn default() -> Self {
        InputForm::default().into_inputs()
    }
}

fn parse<T: std::str::FromStr>(field: Field, raw: &str) -> Result<T, EstimateError> {
    raw.parse()
        .map_err(|_| EstimateError::InvalidInput { field: field.name(), value: raw.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_yields_documented_defaults() {
        let inputs = InputForm::default().into_inputs();
        assert_eq!(inputs.battery_capacity.0, 130.0);
        assert_eq!(inputs.battery_voltage, Volts::from(24.0));
        assert_eq!(inputs.battery_count, 2);
        assert_eq!(inputs.depth_of_discharge_percent, 85.0);
        assert_eq!(inputs.cc_current.0, 40.0);
        assert_eq!(inputs.cc_voltage, Volts::from(26.7));
        assert_eq!(inputs.cv_voltage, Volts::from(26.75));
        assert_eq!(inputs.cv_current.0, 4.0);
        assert_eq!(inputs.inverter_efficiency_percent, 92.0);
        assert_eq!(inputs.fuel_rate.0, 0.5);
        assert_eq!(inputs.load_power, Watts::from(170.0));
    }

    #[test]
    fn blank_field_keeps_the_default() {
        let mut form = InputForm::default();
        form.set(Field::BatteryCapacity, "   ").unwrap();
        assert_eq!(form.into_inputs().battery_capacity.0, 130.0);
    }

    #[test]
    fn assigned_field_overrides_the_default() {
        let mut form = InputForm::default();
        form.set(Field::BatteryCapacity, "200").unwrap();
        form.set(Field::BatteryCount, "3").unwrap();
        let inputs = form.into_inputs();
        assert_eq!(inputs.battery_capacity.0, 200.0);
        assert_eq!(inputs.battery_count, 3);
    }

    #[test]
    fn garbage_is_an_invalid_input() {
        let mut form = InputForm::default();
        assert_eq!(
            form.set(Field::FuelRate, "a lot").unwrap_err(),
            EstimateError::InvalidInput { field: "fuel_rate", value: "a lot".to_string() },
        );
        // The form itself is untouched.
        assert_eq!(form, InputForm::default());
    }

    #[test]
    fn from_toml_with_a_subset_of_keys() {
        let form = InputForm::from_toml("battery_capacity = 200\nbattery_count = 3\n").unwrap();
        let inputs = form.into_inputs();
        assert_eq!(inputs.battery_capacity.0, 200.0);
        assert_eq!(inputs.battery_count, 3);
        assert_eq!(inputs.battery_voltage, Volts::from(24.0));
    }

    #[test]
    fn from_toml_rejects_unknown_keys() {
        assert!(InputForm::from_toml("battery_size = 1\n").is_err());
    }
}
