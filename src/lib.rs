//! Volunteer Hub lifecycle core
//!
//! Derives the effective status of volunteer events (upcoming, live,
//! completed, or an administrative override) and ranks event and
//! participation lists by urgency, then recency. Every dashboard goes through
//! these functions so a record looks the same on every screen.

pub mod config;
pub mod lifecycle;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{VolunteerHubError, Result};

pub use lifecycle::{rank, rank_entries, resolve_status, DateKey, Priority, Rankable};
pub use models::{EffectiveStatus, EventRecord, ParticipationRecord, ParticipationStatus, PersistedStatus};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
