//! Attendance gate

use chrono::NaiveDateTime;
use crate::models::{EffectiveStatus, EventRecord, PersistedStatus};
use crate::utils::errors::{Result, VolunteerHubError};

/// Attendance can only be marked while the event is live and the backend
/// has not already closed it out.
pub fn check_attendance_open(record: &EventRecord, now: NaiveDateTime) -> Result<()> {
    let status = record.effective_status(now)?;
    let closed_out = record.status == Some(PersistedStatus::Completed);

    match status {
        EffectiveStatus::Live if !closed_out => Ok(()),
        EffectiveStatus::Upcoming if !closed_out => Err(VolunteerHubError::AttendanceLocked(
            "Attendance cannot be taken for upcoming events yet".to_string(),
        )),
        _ => Err(VolunteerHubError::AttendanceLocked(
            "Attendance cannot be modified for completed events".to_string(),
        )),
    }
}
