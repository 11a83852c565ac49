use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    estimator::ChargeInputs,
    quantity::{
        current::{AmpereHours, Amperes},
        power::Watts,
        rate::LitresPerKilowattHour,
        voltage::Volts,
    },
};

#[derive(Parser)]
#[command(version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute the charge estimate from command-line parameters.
    Estimate(Box<EstimateArgs>),

    /// Fill in the input form interactively, or load it from a TOML file.
    Form(Box<FormArgs>),
}

#[derive(Parser)]
pub struct EstimateArgs {
    #[clap(flatten)]
    pub battery: BatteryArgs,

    #[clap(flatten)]
    pub cc: ConstantCurrentArgs,

    #[clap(flatten)]
    pub cv: ConstantVoltageArgs,

    #[clap(flatten)]
    pub supply: SupplyArgs,

    #[clap(flatten)]
    pub output: OutputArgs,
}

impl EstimateArgs {
    #[must_use]
    pub fn inputs(&self) -> ChargeInputs {
        ChargeInputs {
            battery_capacity: self.battery.capacity,
            battery_voltage: self.battery.voltage,
            battery_count: self.battery.count,
            depth_of_discharge_percent: self.battery.depth_of_discharge_percent,
            cc_current: self.cc.current,
            cc_voltage: self.cc.voltage,
            cv_voltage: self.cv.voltage,
            cv_current: self.cv.current,
            inverter_efficiency_percent: self.supply.inverter_efficiency_percent,
            fuel_rate: self.supply.fuel_rate,
            load_power: self.supply.load_power,
        }
    }
}

#[derive(Copy, Clone, Parser)]
pub struct BatteryArgs {
    /// Rated capacity per battery in ampere-hours.
    #[clap(long = "battery-capacity", default_value = "130", env = "BATTERY_CAPACITY")]
    pub capacity: AmpereHours,

    /// Nominal voltage per battery.
    #[clap(id = "battery-voltage", long = "battery-voltage", default_value = "24", env = "BATTERY_VOLTAGE")]
    pub voltage: Volts,

    /// Number of batteries in the bank.
    #[clap(long = "battery-count", default_value = "2", env = "BATTERY_COUNT")]
    pub count: u32,

    /// Fraction of the capacity to be replenished, in percent.
    #[clap(
        long = "depth-of-discharge-percent",
        default_value = "85",
        env = "DEPTH_OF_DISCHARGE_PERCENT"
    )]
    pub depth_of_discharge_percent: f64,
}

#[derive(Copy, Clone, Parser)]
pub struct ConstantCurrentArgs {
    /// Charging current during the constant-current phase.
    #[clap(id = "cc-current", long = "cc-current", default_value = "40", env = "CC_CURRENT")]
    pub current: Amperes,

    /// Charging voltage during the constant-current phase.
    #[clap(id = "cc-voltage", long = "cc-voltage", default_value = "26.7", env = "CC_VOLTAGE")]
    pub voltage: Volts,
}

#[derive(Copy, Clone, Parser)]
pub struct ConstantVoltageArgs {
    /// Charging voltage during the constant-voltage phase.
    #[clap(id = "cv-voltage", long = "cv-voltage", default_value = "26.75", env = "CV_VOLTAGE")]
    pub voltage: Volts,

    /// Charging current during the constant-voltage phase.
    #[clap(id = "cv-current", long = "cv-current", default_value = "4", env = "CV_CURRENT")]
    pub current: Amperes,
}

#[derive(Copy, Clone, Parser)]
pub struct SupplyArgs {
    /// DC→AC conversion efficiency of the inverter, in percent.
    #[clap(
        long = "inverter-efficiency-percent",
        default_value = "92",
        env = "INVERTER_EFFICIENCY_PERCENT"
    )]
    pub inverter_efficiency_percent: f64,

    /// Generator fuel consumption per kilowatt-hour drawn.
    #[clap(long = "fuel-rate-per-kwh", default_value = "0.5", env = "FUEL_RATE_PER_KWH")]
    pub fuel_rate: LitresPerKilowattHour,

    /// Continuous load power draw when running off the battery alone, in watts.
    #[clap(long = "load-power-watts", default_value = "170", env = "LOAD_POWER_WATTS")]
    pub load_power: Watts,
}

#[derive(Clone, Parser)]
pub struct OutputArgs {
    /// Save the results to a `.txt` or `.csv` file.
    #[clap(long = "save")]
    pub save: Option<PathBuf>,
}

#[derive(Parser)]
pub struct FormArgs {
    /// Read the form from a TOML file instead of prompting.
    #[clap(long = "input-file", env = "INPUT_FILE")]
    pub input_file: Option<PathBuf>,

    #[clap(flatten)]
    pub output: OutputArgs,
}
