//! BMI Calculator CLI
//!
//! Terminal front-end over the shared evaluation core. Reads a measurement from
//! the command line, evaluates it and prints the result as text or JSON.

pub mod args;
pub mod config;
pub mod render;

use crate::args::{Cli, Commands};
use crate::config::{AppConfig, OutputFormat};
use anyhow::Result;
use bmi_calculator_shared::{evaluate, UnitSystem};
use std::io::Write;
use tracing::{debug, info};

/// Outcome of a command, mapped to the process exit status by `main`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Valid,
    InvalidMeasurement,
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Valid => 0,
            Outcome::InvalidMeasurement => 2,
        }
    }
}

/// Run a parsed command against the loaded configuration
pub fn run(cli: &Cli, config: &AppConfig, out: &mut impl Write) -> Result<Outcome> {
    let format = cli.format.unwrap_or(config.display.format);

    let raw = match &cli.command {
        Commands::Config => {
            writeln!(out, "{}", serde_json::to_string_pretty(config)?)?;
            return Ok(Outcome::Valid);
        }
        Commands::Reset => {
            let unit = cli.unit.unwrap_or(config.display.unit);
            info!(%unit, "Evaluating reset defaults");
            config.defaults.measurement(unit)
        }
        command => match command.measurement() {
            Some(raw) => raw,
            None => return Ok(Outcome::Valid),
        },
    };

    // Show values in the units they were entered in unless told otherwise
    let unit: UnitSystem = cli.unit.unwrap_or_else(|| raw.unit_system());
    debug!(?raw, %unit, "Evaluating measurement");

    let result = evaluate(&raw);
    let outcome = if result.is_ok() {
        Outcome::Valid
    } else {
        Outcome::InvalidMeasurement
    };

    match format {
        OutputFormat::Json => {
            let output = render::JsonOutput::new(result, unit);
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Text => match result {
            Ok(assessment) => writeln!(out, "{}", render::render_text(&assessment, unit))?,
            Err(err) => writeln!(out, "{}", render::render_invalid(&err))?,
        },
    }

    Ok(outcome)
}
