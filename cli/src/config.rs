//! Configuration management for the BMI CLI
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config file (config/development.toml or config/production.toml)
//! 3. A file passed with `--config`
//! 4. Environment variables (prefix: BMI__)

use anyhow::Result;
use bmi_calculator_shared::{
    RawMeasurement, UnitSystem, DEFAULT_HEIGHT_CM, DEFAULT_HEIGHT_FEET, DEFAULT_HEIGHT_INCHES,
    DEFAULT_WEIGHT_KG, DEFAULT_WEIGHT_LB,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// How results are shown
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Unit system used when a command does not imply one
    pub unit: UnitSystem,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Default filter level when RUST_LOG is unset
    pub level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            level: "warn".to_string(),
        }
    }
}

/// Field values restored by `bmi reset`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub weight_lb: f64,
    pub height_feet: f64,
    pub height_inches: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            weight_kg: DEFAULT_WEIGHT_KG,
            height_cm: DEFAULT_HEIGHT_CM,
            weight_lb: DEFAULT_WEIGHT_LB,
            height_feet: DEFAULT_HEIGHT_FEET,
            height_inches: DEFAULT_HEIGHT_INCHES,
        }
    }
}

impl DefaultsConfig {
    pub fn measurement(&self, unit: UnitSystem) -> RawMeasurement {
        match unit {
            UnitSystem::Metric => RawMeasurement::metric(self.weight_kg, self.height_cm),
            UnitSystem::Imperial => {
                RawMeasurement::imperial(self.weight_lb, self.height_feet, self.height_inches)
            }
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on BMI_ENV (development.toml or production.toml)
    /// 3. `explicit` file, which must exist when given
    /// 4. Environment variables with BMI__ prefix
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config_file = format!("config/{}.toml", Self::environment());

        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        // e.g., BMI__DISPLAY__UNIT=imperial sets display.unit
        let config = builder
            .add_source(config::Environment::with_prefix("BMI").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Defaults overlaid with an inline TOML document
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Name of the active config environment
    pub fn environment() -> String {
        env::var("BMI_ENV").unwrap_or_else(|_| "development".to_string())
    }
}
