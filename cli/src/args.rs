//! Command-line argument parsing

use crate::config::OutputFormat;
use bmi_calculator_shared::{RawMeasurement, UnitSystem};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Body Mass Index calculator
#[derive(Parser, Debug)]
#[command(name = "bmi")]
#[command(version)]
#[command(about = "Calculate BMI, category and healthy weight range", long_about = None)]
pub struct Cli {
    /// Output format (overrides configuration)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Unit system for displayed values: metric or imperial
    #[arg(short, long, global = true)]
    pub unit: Option<UnitSystem>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity: -v (debug), -vv (trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a measurement in kilograms and centimeters
    Metric {
        /// Weight in kilograms
        #[arg(short, long, allow_negative_numbers = true)]
        weight: f64,
        /// Height in centimeters
        #[arg(long, allow_negative_numbers = true)]
        height: f64,
    },
    /// Evaluate a measurement in pounds, feet and inches
    Imperial {
        /// Weight in pounds
        #[arg(short, long, allow_negative_numbers = true)]
        weight: f64,
        /// Height, whole feet part
        #[arg(long, allow_negative_numbers = true)]
        feet: Option<f64>,
        /// Height, inches part
        #[arg(long, allow_negative_numbers = true)]
        inches: Option<f64>,
    },
    /// Evaluate the default measurement for the selected unit system
    Reset,
    /// Display current configuration
    Config,
}

impl Commands {
    /// Measurement given on the command line, if the command carries one
    pub fn measurement(&self) -> Option<RawMeasurement> {
        match *self {
            Commands::Metric { weight, height } => Some(RawMeasurement::metric(weight, height)),
            Commands::Imperial {
                weight,
                feet,
                inches,
            } => Some(RawMeasurement::imperial(
                weight,
                feet.unwrap_or(f64::NAN),
                inches.unwrap_or(f64::NAN),
            )),
            Commands::Reset | Commands::Config => None,
        }
    }
}
