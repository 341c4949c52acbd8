//! Effective status resolution
//!
//! An event's effective status is a pure function of its persisted status,
//! its time window and the evaluation instant. Callers pass `now` explicitly
//! so one render pass sees a single consistent clock.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::trace;
use crate::models::{EffectiveStatus, EventRecord, EventSchedule, PersistedStatus};
use crate::utils::errors::{Result, VolunteerHubError};

/// Last instant covered by an event with no end time
fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("23:59:59.999 is a valid time")
}

impl EventSchedule {
    /// Inclusive `(start, end)` instants of the event.
    ///
    /// A missing end date reuses the start date; an end time without an end
    /// date applies to the start date. The range is not checked for inversion.
    pub fn window(&self) -> (NaiveDateTime, NaiveDateTime) {
        let start = self
            .start_date
            .and_time(self.start_time.unwrap_or(NaiveTime::MIN));
        let end = self
            .end_date
            .unwrap_or(self.start_date)
            .and_time(self.end_time.unwrap_or_else(end_of_day));
        (start, end)
    }

    /// Time-derived status at `now`, ignoring any persisted status
    pub fn status_at(&self, now: NaiveDateTime) -> EffectiveStatus {
        let (start, end) = self.window();
        if now < start {
            EffectiveStatus::Upcoming
        } else if now <= end {
            EffectiveStatus::Live
        } else {
            EffectiveStatus::Completed
        }
    }
}

/// Compute the effective status from typed fields.
///
/// Terminal persisted statuses win without looking at the clock. Otherwise a
/// start date is required.
pub fn resolve_status(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
    persisted_status: Option<&PersistedStatus>,
    now: NaiveDateTime,
) -> Result<EffectiveStatus> {
    if let Some(status) = persisted_status.and_then(PersistedStatus::terminal_override) {
        trace!(status = %status, "Persisted status overrides time window");
        return Ok(status);
    }

    let start_date = start_date.ok_or_else(|| {
        VolunteerHubError::InvalidInput("Event start date is required".to_string())
    })?;

    let schedule = EventSchedule {
        start_date,
        end_date,
        start_time,
        end_time,
    };
    Ok(schedule.status_at(now))
}

/// Compute the effective status of a backend record
pub fn resolve_record(record: &EventRecord, now: NaiveDateTime) -> Result<EffectiveStatus> {
    if let Some(status) = record.status.as_ref().and_then(PersistedStatus::terminal_override) {
        trace!(event_id = record.id, status = %status, "Persisted status overrides time window");
        return Ok(status);
    }

    let schedule = record.schedule()?;
    resolve_status(
        Some(schedule.start_date),
        schedule.end_date,
        schedule.start_time,
        schedule.end_time,
        record.status.as_ref(),
        now,
    )
}
