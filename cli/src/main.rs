//! `bmi` command-line entry point

use anyhow::Result;
use bmi_calculator_cli::args::Cli;
use bmi_calculator_cli::config::{AppConfig, LogFormat, LoggingConfig};
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    init_tracing(&config.logging, cli.verbose);

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        env = %AppConfig::environment(),
        "Configuration loaded"
    );

    let stdout = std::io::stdout();
    let outcome = bmi_calculator_cli::run(&cli, &config, &mut stdout.lock())?;

    Ok(ExitCode::from(outcome.exit_code()))
}

/// Initialize tracing/logging. Logs go to stderr so stdout stays parseable.
fn init_tracing(logging: &LoggingConfig, verbose: u8) {
    let level = match verbose {
        0 => logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("bmi_calculator_cli={level},bmi_calculator_shared={level},bmi={level}").into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    match logging.format {
        LogFormat::Json => subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init(),
    }
}
