mod cli;
mod estimator;
mod export;
mod form;
mod prelude;
mod quantity;
mod tables;

use std::{
    fs,
    io::{stdin, stdout},
    path::Path,
};

use chrono::Local;
use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    estimator::{ChargeInputs, estimate, fields::InputForm},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Estimate(args) => {
            run(&args.inputs(), args.output.save.as_deref())?;
        }
        Command::Form(args) => {
            let input_form = match &args.input_file {
                Some(path) => {
                    let text = fs::read_to_string(path)
                        .with_context(|| format!("failed to read `{}`", path.display()))?;
                    InputForm::from_toml(&text)?
                }
                None => form::read_form(&mut stdin().lock(), &mut stdout())?,
            };
            run(&input_form.into_inputs(), args.output.save.as_deref())?;
        }
    }

    info!("done!");
    Ok(())
}

fn run(inputs: &ChargeInputs, save: Option<&Path>) -> Result {
    let estimate = estimate(inputs)?;
    info!(
        total_energy = ?estimate.total_energy,
        total_time = ?estimate.total_time,
        total_fuel = ?estimate.total_fuel,
        autonomy_time = ?estimate.autonomy_time,
        "estimated",
    );

    println!("{}", tables::build_estimate_table(&estimate));
    println!("{}", tables::build_curve_table(&estimate.curve));

    if let Some(path) = save {
        export::export(Some(&estimate), path, Local::now())?;
    }
    Ok(())
}
