//! Error handling for Volunteer Hub
//!
//! This module defines the main error types used throughout the crate
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the Volunteer Hub core
#[derive(Error, Debug)]
pub enum VolunteerHubError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid registration schedule: {0}")]
    InvalidSchedule(String),

    #[error("Join rejected: {0}")]
    JoinRejected(String),

    #[error("Attendance locked: {0}")]
    AttendanceLocked(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Volunteer Hub operations
pub type Result<T> = std::result::Result<T, VolunteerHubError>;

impl VolunteerHubError {
    /// Check if the error is recoverable
    ///
    /// Join and attendance rejections depend on the clock, so retrying
    /// later can succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            VolunteerHubError::Config(_) => false,
            VolunteerHubError::ConfigLoad(_) => false,
            VolunteerHubError::InvalidInput(_) => false,
            VolunteerHubError::InvalidSchedule(_) => false,
            VolunteerHubError::JoinRejected(_) => true,
            VolunteerHubError::AttendanceLocked(_) => true,
            VolunteerHubError::Serialization(_) => false,
            VolunteerHubError::Io(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            VolunteerHubError::Config(_) => ErrorSeverity::Critical,
            VolunteerHubError::ConfigLoad(_) => ErrorSeverity::Critical,
            VolunteerHubError::JoinRejected(_) => ErrorSeverity::Info,
            VolunteerHubError::AttendanceLocked(_) => ErrorSeverity::Info,
            VolunteerHubError::InvalidInput(_) => ErrorSeverity::Warning,
            VolunteerHubError::InvalidSchedule(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// One-line report for a failed run, tagged with the severity of the
/// underlying crate error when there is one
pub fn failure_summary(err: &anyhow::Error) -> String {
    match err.downcast_ref::<VolunteerHubError>() {
        Some(hub_err) => format!(
            "[{}] {:#}{}",
            hub_err.severity(),
            err,
            if hub_err.is_recoverable() { " (retrying may succeed)" } else { "" }
        ),
        None => format!("[{}] {:#}", ErrorSeverity::Error, err),
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
