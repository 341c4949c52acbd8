//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{VolunteerHubError, Result};
use crate::utils::helpers::parse_instant;
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_logging_config(&settings.logging)?;
    validate_board_config(&settings.board)?;

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(VolunteerHubError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(VolunteerHubError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if config.file_dir.as_deref().is_some_and(|dir| dir.trim().is_empty()) {
        return Err(VolunteerHubError::Config(
            "Log directory cannot be blank".to_string()
        ));
    }

    Ok(())
}

/// Validate event board configuration
fn validate_board_config(config: &super::BoardConfig) -> Result<()> {
    if config.snapshot_path.trim().is_empty() {
        return Err(VolunteerHubError::Config(
            "Snapshot path is required".to_string()
        ));
    }

    if let Some(fixed_now) = &config.fixed_now {
        if parse_instant(fixed_now).is_none() {
            return Err(VolunteerHubError::Config(
                format!("Invalid fixed_now instant: {}", fixed_now)
            ));
        }
    }

    Ok(())
}
