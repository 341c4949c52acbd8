//! Chronological prioritization of event lists
//!
//! Records are bucketed by [`Priority`] and then ordered by a date key:
//! soonest first for the urgent buckets, most recent first for everything
//! else. The sort is stable, so equal rows keep their input order.

use std::cmp::Ordering;
use std::fmt;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use crate::models::{
    EffectiveStatus, EventRecord, ParticipationRecord, ParticipationStatus, PersistedStatus,
};
use crate::utils::helpers::{epoch, parse_instant};
use crate::utils::logging::log_ranking_pass;

/// Sort bucket; lower values are shown first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    Live,
    Upcoming,
    AwaitingApproval,
    Draft,
    Settled,
    Terminated,
    /// The volunteer's own participation is not active
    Withdrawn,
    /// Status outside the known vocabularies
    Unknown,
}

impl Priority {
    pub fn value(&self) -> u8 {
        match self {
            Priority::Live => 1,
            Priority::Upcoming => 2,
            Priority::AwaitingApproval => 3,
            Priority::Draft => 4,
            Priority::Settled => 5,
            Priority::Terminated => 6,
            Priority::Withdrawn => 10,
            Priority::Unknown => 99,
        }
    }

    /// Urgent buckets sort soonest first
    pub fn is_urgent(&self) -> bool {
        self.value() <= 3
    }

    fn from_effective(status: EffectiveStatus) -> Self {
        match status {
            EffectiveStatus::Live => Priority::Live,
            EffectiveStatus::Upcoming => Priority::Upcoming,
            EffectiveStatus::PendingApproval => Priority::AwaitingApproval,
            EffectiveStatus::Draft => Priority::Draft,
            EffectiveStatus::Completed => Priority::Settled,
            EffectiveStatus::Cancelled | EffectiveStatus::Rejected => Priority::Terminated,
        }
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

/// Record field used to order rows within a priority bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateKey {
    #[default]
    #[serde(rename = "startDate")]
    StartDate,
    #[serde(rename = "endDate")]
    EndDate,
    #[serde(rename = "createdAt")]
    CreatedAt,
    #[serde(rename = "registrationOpenDateTime")]
    RegistrationOpen,
    #[serde(rename = "registrationCloseDateTime")]
    RegistrationClose,
    #[serde(rename = "joinedAt")]
    JoinedAt,
}

impl DateKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateKey::StartDate => "startDate",
            DateKey::EndDate => "endDate",
            DateKey::CreatedAt => "createdAt",
            DateKey::RegistrationOpen => "registrationOpenDateTime",
            DateKey::RegistrationClose => "registrationCloseDateTime",
            DateKey::JoinedAt => "joinedAt",
        }
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything the dashboards list and rank
pub trait Rankable {
    fn event(&self) -> &EventRecord;

    fn participation_status(&self) -> Option<&ParticipationStatus> {
        None
    }

    /// Raw value of the field named by `key`, if the record carries it
    fn date_field(&self, key: DateKey) -> Option<&str> {
        let event = self.event();
        let value = match key {
            DateKey::StartDate => &event.start_date,
            DateKey::EndDate => &event.end_date,
            DateKey::CreatedAt => &event.created_at,
            DateKey::RegistrationOpen => &event.registration_open_date_time,
            DateKey::RegistrationClose => &event.registration_close_date_time,
            DateKey::JoinedAt => return None,
        };
        value.as_deref()
    }
}

impl Rankable for EventRecord {
    fn event(&self) -> &EventRecord {
        self
    }
}

impl Rankable for ParticipationRecord {
    fn event(&self) -> &EventRecord {
        &self.event
    }

    fn participation_status(&self) -> Option<&ParticipationStatus> {
        self.participation_status.as_ref()
    }

    fn date_field(&self, key: DateKey) -> Option<&str> {
        match key {
            DateKey::JoinedAt => self.joined_at.as_deref(),
            other => self.event.date_field(other),
        }
    }
}

/// Effective status of the record's event, if it can be derived
fn effective_status_of(event: &EventRecord, now: NaiveDateTime) -> Option<EffectiveStatus> {
    match &event.status {
        None | Some(PersistedStatus::Published) | Some(PersistedStatus::Approved) => {
            event.effective_status(now).ok()
        }
        Some(other) => other.terminal_override(),
    }
}

/// Priority bucket of one record at `now`.
///
/// An inactive participation outranks everything the event itself says.
pub fn priority_of<T: Rankable + ?Sized>(record: &T, now: NaiveDateTime) -> Priority {
    if record.participation_status().is_some_and(|p| !p.is_active()) {
        return Priority::Withdrawn;
    }

    let event = record.event();
    match &event.status {
        None | Some(PersistedStatus::Published) | Some(PersistedStatus::Approved) => event
            .effective_status(now)
            .map(Priority::from_effective)
            .unwrap_or(Priority::Unknown),
        Some(PersistedStatus::Ongoing) => Priority::Upcoming,
        Some(PersistedStatus::Pending) | Some(PersistedStatus::PendingApproval) => {
            Priority::AwaitingApproval
        }
        Some(PersistedStatus::Draft) => Priority::Draft,
        Some(PersistedStatus::Completed) => Priority::Settled,
        Some(PersistedStatus::Cancelled) | Some(PersistedStatus::Rejected) => Priority::Terminated,
        Some(PersistedStatus::Unknown(_)) => Priority::Unknown,
    }
}

/// Tie-break instant; falls back to the start date, then to the epoch
pub fn sort_key<T: Rankable + ?Sized>(record: &T, key: DateKey) -> NaiveDateTime {
    let present = |raw: &&str| !raw.trim().is_empty();
    record
        .date_field(key)
        .filter(present)
        .or_else(|| record.event().start_date.as_deref().filter(present))
        .and_then(parse_instant)
        .unwrap_or_else(epoch)
}

/// One ranked row with the values computed for it
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry<'a, T> {
    pub record: &'a T,
    pub priority: Priority,
    pub sort_key: NaiveDateTime,
    pub effective_status: Option<EffectiveStatus>,
}

fn compare_entries<T>(a: &RankedEntry<'_, T>, b: &RankedEntry<'_, T>) -> Ordering {
    a.priority.cmp(&b.priority).then_with(|| {
        if a.priority.is_urgent() {
            a.sort_key.cmp(&b.sort_key)
        } else {
            b.sort_key.cmp(&a.sort_key)
        }
    })
}

/// Rank `records` and keep the per-row priority, key and status
pub fn rank_entries<T: Rankable>(
    records: &[T],
    key: DateKey,
    now: NaiveDateTime,
) -> Vec<RankedEntry<'_, T>> {
    let mut entries: Vec<RankedEntry<'_, T>> = records
        .iter()
        .map(|record| RankedEntry {
            record,
            priority: priority_of(record, now),
            sort_key: sort_key(record, key),
            effective_status: effective_status_of(record.event(), now),
        })
        .collect();

    entries.sort_by(|a, b| compare_entries(a, b));
    log_ranking_pass(entries.len(), key.as_str(), &now.to_string());
    entries
}

/// Return a new, ranked copy of `records`
pub fn rank<T: Rankable + Clone>(records: &[T], key: DateKey, now: NaiveDateTime) -> Vec<T> {
    rank_entries(records, key, now)
        .into_iter()
        .map(|entry| entry.record.clone())
        .collect()
}

/// Rank against the local wall clock, sampled once for the whole pass
pub fn rank_now<T: Rankable + Clone>(records: &[T], key: DateKey) -> Vec<T> {
    let now = Local::now().naive_local();
    rank(records, key, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(start: &str, status: Option<PersistedStatus>) -> EventRecord {
        EventRecord {
            start_date: Some(start.to_string()),
            status,
            ..Default::default()
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 5).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn test_priority_values_are_ordered() {
        assert!(Priority::Live < Priority::Upcoming);
        assert!(Priority::Terminated < Priority::Withdrawn);
        assert!(Priority::Withdrawn < Priority::Unknown);
        assert!(Priority::AwaitingApproval.is_urgent());
        assert!(!Priority::Draft.is_urgent());
    }

    #[test]
    fn test_priority_of_persisted_statuses() {
        let cases = [
            (Some(PersistedStatus::Ongoing), Priority::Upcoming),
            (Some(PersistedStatus::Pending), Priority::AwaitingApproval),
            (Some(PersistedStatus::PendingApproval), Priority::AwaitingApproval),
            (Some(PersistedStatus::Draft), Priority::Draft),
            (Some(PersistedStatus::Completed), Priority::Settled),
            (Some(PersistedStatus::Cancelled), Priority::Terminated),
            (Some(PersistedStatus::Rejected), Priority::Terminated),
            (Some(PersistedStatus::from("ARCHIVED")), Priority::Unknown),
            (Some(PersistedStatus::Published), Priority::Live),
            (None, Priority::Live),
        ];
        for (status, expected) in cases {
            assert_eq!(priority_of(&event("2025-04-05", status), now()), expected);
        }
    }

    #[test]
    fn test_missing_start_date_ranks_unknown() {
        let record = EventRecord {
            status: Some(PersistedStatus::Published),
            ..Default::default()
        };
        assert_eq!(priority_of(&record, now()), Priority::Unknown);
    }

    #[test]
    fn test_sort_key_fallbacks() {
        let mut record = event("2025-04-01", None);
        assert_eq!(
            sort_key(&record, DateKey::CreatedAt),
            parse_instant("2025-04-01").unwrap()
        );
        record.created_at = Some("2025-02-01T10:00:00".to_string());
        assert_eq!(
            sort_key(&record, DateKey::CreatedAt),
            parse_instant("2025-02-01T10:00:00").unwrap()
        );
        assert_eq!(sort_key(&event("bogus", None), DateKey::StartDate), epoch());
    }

    #[test]
    fn test_blank_date_key_falls_back_to_start_date() {
        let mut record = event("2025-04-01", None);
        record.created_at = Some(String::new());
        assert_eq!(
            sort_key(&record, DateKey::CreatedAt),
            parse_instant("2025-04-01").unwrap()
        );

        record.start_date = Some("  ".to_string());
        assert_eq!(sort_key(&record, DateKey::CreatedAt), epoch());
    }

    #[test]
    fn test_date_key_wire_names() {
        let key: DateKey = serde_json::from_str(r#""createdAt""#).unwrap();
        assert_eq!(key, DateKey::CreatedAt);
        assert_eq!(DateKey::default(), DateKey::StartDate);
    }
}
