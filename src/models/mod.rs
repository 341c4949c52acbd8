//! Data models module
//!
//! Backend snapshots and the status vocabularies the lifecycle engine works with

pub mod event;
pub mod status;

// Re-export commonly used models
pub use event::{EventRecord, EventSchedule, ParticipationRecord};
pub use status::{EffectiveStatus, ParticipationStatus, PersistedStatus};
