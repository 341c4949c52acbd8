//! Registration window gate
//!
//! Whether new sign-ups are accepted is independent of the event's own
//! lifecycle: an upcoming event can be closed for registration, and a live
//! event with no close time still counts as open.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::models::EventRecord;
use crate::utils::errors::{Result, VolunteerHubError};
use crate::utils::logging::log_join_rejected;

/// Optional bounds on the sign-up period
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistrationWindow {
    pub open: Option<NaiveDateTime>,
    pub close: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationState {
    NotYetOpen,
    Open,
    Closed,
}

impl RegistrationState {
    pub fn label(&self) -> &'static str {
        match self {
            RegistrationState::NotYetOpen => "opens soon",
            RegistrationState::Open => "open",
            RegistrationState::Closed => "closed",
        }
    }
}

impl RegistrationWindow {
    pub fn state_at(&self, now: NaiveDateTime) -> RegistrationState {
        registration_state(now, self.open, self.close)
    }

    pub fn is_open_at(&self, now: NaiveDateTime) -> bool {
        self.state_at(now) == RegistrationState::Open
    }
}

/// Where `now` falls relative to the sign-up bounds (both inclusive)
pub fn registration_state(
    now: NaiveDateTime,
    open: Option<NaiveDateTime>,
    close: Option<NaiveDateTime>,
) -> RegistrationState {
    if open.is_some_and(|open| now < open) {
        RegistrationState::NotYetOpen
    } else if close.is_some_and(|close| now > close) {
        RegistrationState::Closed
    } else {
        RegistrationState::Open
    }
}

pub fn is_registration_open(
    now: NaiveDateTime,
    open: Option<NaiveDateTime>,
    close: Option<NaiveDateTime>,
) -> bool {
    registration_state(now, open, close) == RegistrationState::Open
}

/// Check that a sign-up period is coherent with the event it belongs to.
///
/// Registration must close no later than the event starts, and must open no
/// later than it closes.
pub fn validate_registration_schedule(
    event_start: Option<NaiveDateTime>,
    open: Option<NaiveDateTime>,
    close: Option<NaiveDateTime>,
) -> Result<()> {
    if let (Some(close), Some(start)) = (close, event_start) {
        if close > start {
            return Err(VolunteerHubError::InvalidSchedule(
                "Registration close date must be before event start date/time".to_string(),
            ));
        }
    }

    if let (Some(open), Some(close)) = (open, close) {
        if open > close {
            return Err(VolunteerHubError::InvalidSchedule(
                "Registration open date must be before registration close date".to_string(),
            ));
        }
    }

    Ok(())
}

/// Decide whether a volunteer may sign up for `record` at `now`
pub fn check_join_eligibility(record: &EventRecord, now: NaiveDateTime) -> Result<()> {
    let reason = if !record.status.as_ref().is_some_and(|s| s.is_published()) {
        Some("Cannot join non-published events")
    } else {
        match record.registration_window().state_at(now) {
            RegistrationState::NotYetOpen => Some("Registration for this event has not opened yet"),
            RegistrationState::Closed => Some("Registration for this event is closed"),
            RegistrationState::Open => None,
        }
    };

    match reason {
        Some(reason) => {
            log_join_rejected(record.id, reason);
            Err(VolunteerHubError::JoinRejected(reason.to_string()))
        }
        None => Ok(()),
    }
}
