//! Event model

use serde::{Deserialize, Deserializer, Serialize};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use crate::lifecycle::{resolver, RegistrationWindow};
use crate::models::status::{EffectiveStatus, ParticipationStatus, PersistedStatus};
use crate::utils::errors::{Result, VolunteerHubError};
use crate::utils::helpers::{epoch, parse_date, parse_instant, parse_time};
use crate::utils::logging::log_malformed_field;

/// Event snapshot as delivered by the backend.
///
/// Temporal fields stay in their wire form; use [`EventRecord::schedule`] and
/// [`EventRecord::registration_window`] for typed access.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventRecord {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub registration_open_date_time: Option<String>,
    pub registration_close_date_time: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub status: Option<PersistedStatus>,
    pub created_at: Option<String>,
}

/// An event as seen by one volunteer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipationRecord {
    #[serde(flatten)]
    pub event: EventRecord,
    #[serde(deserialize_with = "blank_as_none")]
    pub participation_status: Option<ParticipationStatus>,
    pub registration_id: Option<i64>,
    pub joined_at: Option<String>,
}

/// Typed temporal fields of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSchedule {
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
}

/// Read an optional status string, treating `""` like a missing value
fn blank_as_none<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .filter(|raw| !raw.trim().is_empty())
        .map(T::from))
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn date_or_epoch(field: &str, raw: &str) -> NaiveDate {
    parse_date(raw).unwrap_or_else(|| {
        log_malformed_field(field, raw, "epoch");
        epoch().date()
    })
}

fn time_or_default(field: &str, raw: &str) -> Option<NaiveTime> {
    let parsed = parse_time(raw);
    if parsed.is_none() {
        log_malformed_field(field, raw, "default");
    }
    parsed
}

fn instant_or_epoch(field: &str, raw: &str) -> NaiveDateTime {
    parse_instant(raw).unwrap_or_else(|| {
        log_malformed_field(field, raw, "epoch");
        epoch()
    })
}

impl EventRecord {
    /// Parse the event's dates and times.
    ///
    /// Only a missing start date is an error. Malformed dates fall back to
    /// the epoch and malformed times to the full-day defaults.
    pub fn schedule(&self) -> Result<EventSchedule> {
        let raw_start = present(&self.start_date).ok_or_else(|| {
            VolunteerHubError::InvalidInput("Event start date is required".to_string())
        })?;

        Ok(EventSchedule {
            start_date: date_or_epoch("startDate", raw_start),
            end_date: present(&self.end_date).map(|raw| date_or_epoch("endDate", raw)),
            start_time: present(&self.start_time).and_then(|raw| time_or_default("startTime", raw)),
            end_time: present(&self.end_time).and_then(|raw| time_or_default("endTime", raw)),
        })
    }

    /// Sign-up window; absent bounds are unbounded
    pub fn registration_window(&self) -> RegistrationWindow {
        RegistrationWindow {
            open: present(&self.registration_open_date_time)
                .map(|raw| instant_or_epoch("registrationOpenDateTime", raw)),
            close: present(&self.registration_close_date_time)
                .map(|raw| instant_or_epoch("registrationCloseDateTime", raw)),
        }
    }

    /// Effective status at `now`
    pub fn effective_status(&self, now: NaiveDateTime) -> Result<EffectiveStatus> {
        resolver::resolve_record(self, now)
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled event")
    }
}

impl ParticipationRecord {
    pub fn new(event: EventRecord, participation_status: Option<ParticipationStatus>) -> Self {
        Self {
            event,
            participation_status,
            ..Default::default()
        }
    }
}
