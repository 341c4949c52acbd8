//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::Path;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use crate::lifecycle::DateKey;
use crate::utils::errors::Result;
use crate::utils::helpers::parse_instant;

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub board: BoardConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for daily rolling log files; stdout only when unset
    pub file_dir: Option<String>,
    pub json: bool,
}

/// Event board configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoardConfig {
    pub date_key: DateKey,
    /// Pins the evaluation instant, e.g. for reproducing a report
    pub fixed_now: Option<String>,
    pub snapshot_path: String,
}

impl BoardConfig {
    /// The instant to evaluate a pass at
    pub fn now(&self) -> NaiveDateTime {
        self.fixed_now
            .as_deref()
            .and_then(parse_instant)
            .unwrap_or_else(|| Local::now().naive_local())
    }
}

impl Settings {
    /// Load settings from configuration file and environment variables
    ///
    /// Environment keys use a double underscore between sections, e.g.
    /// `VOLUNTEERHUB__LOGGING__LEVEL=debug`.
    pub fn new() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("VOLUNTEERHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load settings from an explicit file layered over the defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::from(path.as_ref()))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "info".to_string(),
                file_dir: None,
                json: false,
            },
            board: BoardConfig {
                date_key: DateKey::StartDate,
                fixed_now: None,
                snapshot_path: "events.json".to_string(),
            },
        }
    }
}
