use std::io::{BufRead, Write};

use crate::{
    estimator::{
        ChargeInputs,
        fields::{Field, InputForm},
    },
    prelude::*,
};

/// Prompt for every input field in form order, one line each.
///
/// A blank line (or end of input) keeps the documented default. Non-numeric
/// text aborts the form with `InvalidInput`, leaving no partial result
/// behind.
pub fn read_form(input: &mut impl BufRead, output: &mut impl Write) -> Result<InputForm> {
    let defaults = ChargeInputs::default();
    let mut form = InputForm::default();
    for field in Field::ALL {
        write!(output, "{} [{}]: ", field.label(), default_hint(field, &defaults))?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        form.set(field, &line)?;
    }
    Ok(form)
}

fn default_hint(field: Field, defaults: &ChargeInputs) -> String {
    match field {
        Field::BatteryCapacity => defaults.battery_capacity.0.to_string(),
        Field::BatteryVoltage => defaults.battery_voltage.0.to_string(),
        Field::BatteryCount => defaults.battery_count.to_string(),
        Field::DepthOfDischargePercent => defaults.depth_of_discharge_percent.to_string(),
        Field::CcCurrent => defaults.cc_current.0.to_string(),
        Field::CcVoltage => defaults.cc_voltage.0.to_string(),
        Field::CvVoltage => defaults.cv_voltage.0.to_string(),
        Field::CvCurrent => defaults.cv_current.0.to_string(),
        Field::InverterEfficiencyPercent => defaults.inverter_efficiency_percent.to_string(),
        Field::FuelRate => defaults.fuel_rate.0.to_string(),
        Field::LoadPower => defaults.load_power.0.to_string(),
    }
}
