//! Status vocabularies
//!
//! The backend stores one set of statuses and the dashboards display another.
//! They are kept as separate types so the only bridge between them is
//! [`PersistedStatus::terminal_override`].

use std::fmt;
use serde::{Deserialize, Serialize};

/// Authoritative event status stored by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PersistedStatus {
    Draft,
    PendingApproval,
    /// Approval-queue rows
    Pending,
    Published,
    Approved,
    Rejected,
    Cancelled,
    Completed,
    /// Legacy display alias still found in older rows
    Ongoing,
    Unknown(String),
}

impl PersistedStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PersistedStatus::Draft => "DRAFT",
            PersistedStatus::PendingApproval => "PENDING_APPROVAL",
            PersistedStatus::Pending => "PENDING",
            PersistedStatus::Published => "PUBLISHED",
            PersistedStatus::Approved => "APPROVED",
            PersistedStatus::Rejected => "REJECTED",
            PersistedStatus::Cancelled => "CANCELLED",
            PersistedStatus::Completed => "COMPLETED",
            PersistedStatus::Ongoing => "ONGOING",
            PersistedStatus::Unknown(raw) => raw,
        }
    }

    /// Administrative decisions that time never reinterprets.
    ///
    /// Returns `None` when the effective status has to be derived from the
    /// event's time window.
    pub fn terminal_override(&self) -> Option<EffectiveStatus> {
        match self {
            PersistedStatus::Cancelled => Some(EffectiveStatus::Cancelled),
            PersistedStatus::Rejected => Some(EffectiveStatus::Rejected),
            PersistedStatus::Draft => Some(EffectiveStatus::Draft),
            PersistedStatus::PendingApproval => Some(EffectiveStatus::PendingApproval),
            PersistedStatus::Pending
            | PersistedStatus::Published
            | PersistedStatus::Approved
            | PersistedStatus::Completed
            | PersistedStatus::Ongoing
            | PersistedStatus::Unknown(_) => None,
        }
    }

    /// Whether the event is visible to volunteers and accepts sign-ups
    pub fn is_published(&self) -> bool {
        matches!(self, PersistedStatus::Published)
    }
}

impl From<String> for PersistedStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "DRAFT" => PersistedStatus::Draft,
            "PENDING_APPROVAL" => PersistedStatus::PendingApproval,
            "PENDING" => PersistedStatus::Pending,
            "PUBLISHED" => PersistedStatus::Published,
            "APPROVED" => PersistedStatus::Approved,
            "REJECTED" => PersistedStatus::Rejected,
            "CANCELLED" => PersistedStatus::Cancelled,
            "COMPLETED" => PersistedStatus::Completed,
            "ONGOING" => PersistedStatus::Ongoing,
            _ => PersistedStatus::Unknown(value),
        }
    }
}

impl From<&str> for PersistedStatus {
    fn from(value: &str) -> Self {
        PersistedStatus::from(value.to_string())
    }
}

impl From<PersistedStatus> for String {
    fn from(value: PersistedStatus) -> Self {
        match value {
            PersistedStatus::Unknown(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for PersistedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display-facing lifecycle state, recomputed on every evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectiveStatus {
    Cancelled,
    Rejected,
    Draft,
    PendingApproval,
    Upcoming,
    Live,
    Completed,
}

impl EffectiveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectiveStatus::Cancelled => "CANCELLED",
            EffectiveStatus::Rejected => "REJECTED",
            EffectiveStatus::Draft => "DRAFT",
            EffectiveStatus::PendingApproval => "PENDING_APPROVAL",
            EffectiveStatus::Upcoming => "UPCOMING",
            EffectiveStatus::Live => "LIVE",
            EffectiveStatus::Completed => "COMPLETED",
        }
    }

    /// Badge text
    pub fn label(&self) -> &'static str {
        match self {
            EffectiveStatus::Cancelled => "Cancelled",
            EffectiveStatus::Rejected => "Rejected",
            EffectiveStatus::Draft => "Draft",
            EffectiveStatus::PendingApproval => "Pending Approval",
            EffectiveStatus::Upcoming => "Upcoming",
            EffectiveStatus::Live => "Live",
            EffectiveStatus::Completed => "Completed",
        }
    }

    /// True for the states computed from the time window
    pub fn is_time_derived(&self) -> bool {
        matches!(
            self,
            EffectiveStatus::Upcoming | EffectiveStatus::Live | EffectiveStatus::Completed
        )
    }
}

impl fmt::Display for EffectiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A volunteer's standing on one event
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParticipationStatus {
    Pending,
    Approved,
    Rejected,
    Attended,
    Removed,
    Unknown(String),
}

impl ParticipationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ParticipationStatus::Pending => "PENDING",
            ParticipationStatus::Approved => "APPROVED",
            ParticipationStatus::Rejected => "REJECTED",
            ParticipationStatus::Attended => "ATTENDED",
            ParticipationStatus::Removed => "REMOVED",
            ParticipationStatus::Unknown(raw) => raw,
        }
    }

    /// Only approved participations follow the event's own priority
    pub fn is_active(&self) -> bool {
        matches!(self, ParticipationStatus::Approved)
    }
}

impl From<String> for ParticipationStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PENDING" => ParticipationStatus::Pending,
            "APPROVED" => ParticipationStatus::Approved,
            "REJECTED" => ParticipationStatus::Rejected,
            "ATTENDED" => ParticipationStatus::Attended,
            "REMOVED" => ParticipationStatus::Removed,
            _ => ParticipationStatus::Unknown(value),
        }
    }
}

impl From<&str> for ParticipationStatus {
    fn from(value: &str) -> Self {
        ParticipationStatus::from(value.to_string())
    }
}

impl From<ParticipationStatus> for String {
    fn from(value: ParticipationStatus) -> Self {
        match value {
            ParticipationStatus::Unknown(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for ParticipationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_override_mapping() {
        assert_eq!(PersistedStatus::Cancelled.terminal_override(), Some(EffectiveStatus::Cancelled));
        assert_eq!(PersistedStatus::Rejected.terminal_override(), Some(EffectiveStatus::Rejected));
        assert_eq!(PersistedStatus::Draft.terminal_override(), Some(EffectiveStatus::Draft));
        assert_eq!(
            PersistedStatus::PendingApproval.terminal_override(),
            Some(EffectiveStatus::PendingApproval)
        );
        assert_eq!(PersistedStatus::Published.terminal_override(), None);
        assert_eq!(PersistedStatus::Completed.terminal_override(), None);
        assert_eq!(PersistedStatus::from("ARCHIVED").terminal_override(), None);
    }

    #[test]
    fn test_persisted_status_wire_format() {
        let parsed: Vec<PersistedStatus> =
            serde_json::from_str(r#"["PUBLISHED", "PENDING_APPROVAL", "ARCHIVED"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                PersistedStatus::Published,
                PersistedStatus::PendingApproval,
                PersistedStatus::Unknown("ARCHIVED".to_string()),
            ]
        );
        assert_eq!(serde_json::to_string(&parsed[2]).unwrap(), r#""ARCHIVED""#);
    }

    #[test]
    fn test_effective_status_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&EffectiveStatus::PendingApproval).unwrap(),
            r#""PENDING_APPROVAL""#
        );
        assert_eq!(EffectiveStatus::Live.to_string(), "LIVE");
        assert!(EffectiveStatus::Completed.is_time_derived());
        assert!(!EffectiveStatus::Draft.is_time_derived());
    }

    #[test]
    fn test_participation_status() {
        assert!(ParticipationStatus::from("APPROVED").is_active());
        assert!(!ParticipationStatus::from("ATTENDED").is_active());
        assert_eq!(
            ParticipationStatus::from("WITHDRAWN"),
            ParticipationStatus::Unknown("WITHDRAWN".to_string())
        );
    }

    #[test]
    fn test_effective_status_badge_labels() {
        assert_eq!(EffectiveStatus::Live.label(), "Live");
        assert_eq!(EffectiveStatus::PendingApproval.label(), "Pending Approval");
        assert_ne!(EffectiveStatus::PendingApproval.label(), EffectiveStatus::PendingApproval.to_string());
    }
}
