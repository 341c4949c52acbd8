//! Test data helpers for building event and participation records

use chrono::NaiveDateTime;
use volunteer_hub::utils::helpers::parse_instant;
use volunteer_hub::{EventRecord, ParticipationRecord, ParticipationStatus, PersistedStatus};

/// Parse an instant literal such as `2025-01-01T09:00:00`
pub fn at(value: &str) -> NaiveDateTime {
    parse_instant(value).unwrap_or_else(|| panic!("bad test instant: {}", value))
}

/// A published, all-day event on `start_date`
pub fn published_event(title: &str, start_date: &str) -> EventRecord {
    EventRecord {
        title: Some(title.to_string()),
        start_date: Some(start_date.to_string()),
        status: Some(PersistedStatus::Published),
        ..Default::default()
    }
}

/// A published event with explicit times on a single day
pub fn timed_event(title: &str, date: &str, start_time: &str, end_time: &str) -> EventRecord {
    EventRecord {
        start_time: Some(start_time.to_string()),
        end_time: Some(end_time.to_string()),
        ..published_event(title, date)
    }
}

pub fn with_status(mut event: EventRecord, status: PersistedStatus) -> EventRecord {
    event.status = Some(status);
    event
}

pub fn participation(event: EventRecord, status: &str) -> ParticipationRecord {
    ParticipationRecord::new(event, Some(ParticipationStatus::from(status)))
}

pub fn titles<T: volunteer_hub::Rankable>(records: &[T]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.event().display_title().to_string())
        .collect()
}
