//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the Volunteer Hub core.

use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{Result, VolunteerHubError};

/// Initialize logging based on configuration
///
/// Console output goes to stderr so stdout stays clean for board rows. The
/// returned guard must be held for as long as file logging should keep
/// flushing.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| VolunteerHubError::Config(format!("Invalid log filter: {}", e)))?;

    let console_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    let (file_layer, guard) = match config.file_dir.as_deref() {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "volunteer-hub.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| VolunteerHubError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a completed ranking pass
pub fn log_ranking_pass(records: usize, date_key: &str, now: &str) {
    debug!(
        records = records,
        date_key = date_key,
        now = now,
        "Ranking pass completed"
    );
}

/// Log a date or time field that could not be parsed
pub fn log_malformed_field(field: &str, value: &str, fallback: &str) {
    warn!(
        field = field,
        value = value,
        fallback = fallback,
        "Malformed temporal field, using fallback"
    );
}

/// Log a refused sign-up
pub fn log_join_rejected(event_id: Option<i64>, reason: &str) {
    info!(
        event_id = event_id,
        reason = reason,
        "Join request rejected"
    );
}
