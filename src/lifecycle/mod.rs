//! Event lifecycle engine
//!
//! Status derivation and list ranking shared by every dashboard. Everything
//! here is pure: callers sample `now` once per render or poll and pass it to
//! every function in that pass.

pub mod attendance;
pub mod ranking;
pub mod registration;
pub mod resolver;

pub use attendance::check_attendance_open;
pub use ranking::{
    priority_of, rank, rank_entries, rank_now, sort_key, DateKey, Priority, RankedEntry, Rankable,
};
pub use registration::{
    check_join_eligibility, is_registration_open, registration_state,
    validate_registration_schedule, RegistrationState, RegistrationWindow,
};
pub use resolver::{resolve_record, resolve_status};
