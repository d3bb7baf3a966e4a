//! Single-table application record model.
//!
//! # Responsibility
//! - Define the typed per-professor application record behind flat CSV
//!   import/export.
//! - Keep link and interaction sub-entities owned by their record.
//!
//! # Invariants
//! - `id` is stable and never reused for another record.
//! - Unknown status/stage input degrades to `Researching`, never errors.
//! - Links and interactions have no life outside their owning record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pipeline state shared by the `status` and `stage` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Researching,
    DraftingEmail,
    Contacted,
    AwaitingResponse,
    InterviewScheduled,
    Submitted,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    /// Display string used in CSV and pickers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Researching => "Researching",
            Self::DraftingEmail => "Drafting Email",
            Self::Contacted => "Contacted",
            Self::AwaitingResponse => "Awaiting Response",
            Self::InterviewScheduled => "Interview Scheduled",
            Self::Submitted => "Submitted",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Researching" => Some(Self::Researching),
            "Drafting Email" => Some(Self::DraftingEmail),
            "Contacted" => Some(Self::Contacted),
            "Awaiting Response" => Some(Self::AwaitingResponse),
            "Interview Scheduled" => Some(Self::InterviewScheduled),
            "Submitted" => Some(Self::Submitted),
            "Accepted" => Some(Self::Accepted),
            "Rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Parses a display string, degrading unknown input to `Researching`.
    pub fn parse_or_default(value: &str) -> Self {
        Self::parse(value).unwrap_or(Self::Researching)
    }
}

impl Default for ApplicationStatus {
    fn default() -> Self {
        Self::Researching
    }
}

/// Category of one logged interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionKind {
    EmailSent,
    EmailReceived,
    Meeting,
    Note,
}

impl InteractionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmailSent => "Email Sent",
            Self::EmailReceived => "Email Received",
            Self::Meeting => "Meeting",
            Self::Note => "Note",
        }
    }

    /// Parses a display string, degrading unknown input to `Note`.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "Email Sent" => Self::EmailSent,
            "Email Received" => Self::EmailReceived,
            "Meeting" => Self::Meeting,
            _ => Self::Note,
        }
    }
}

/// Titled URL owned by one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    pub id: Uuid,
    pub title: String,
    pub url: String,
}

impl LinkItem {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            url: url.into(),
        }
    }
}

/// One dated interaction entry owned by one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionLog {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub kind: InteractionKind,
    pub notes: String,
}

impl InteractionLog {
    pub fn new(kind: InteractionKind, notes: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: Utc::now(),
            kind,
            notes: notes.into(),
        }
    }
}

/// One tracked application: professor, university, pipeline state, links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: Uuid,
    pub professor_name: String,
    pub email: String,
    pub university_name: String,
    pub department: String,
    pub research_interests: String,
    pub deadline: Option<DateTime<Utc>>,
    pub status: ApplicationStatus,
    pub stage: ApplicationStatus,
    /// 0-5 by convention; not validated at this layer.
    pub priority_level: i32,
    pub color_hex: Option<String>,
    pub notes: String,
    pub links: Vec<LinkItem>,
    pub interactions: Vec<InteractionLog>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ApplicationRecord {
    /// Creates an empty record with fresh identity and audit stamps.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            professor_name: String::new(),
            email: String::new(),
            university_name: String::new(),
            department: String::new(),
            research_interests: String::new(),
            deadline: None,
            status: ApplicationStatus::Researching,
            stage: ApplicationStatus::Researching,
            priority_level: 0,
            color_hex: None,
            notes: String::new(),
            links: Vec::new(),
            interactions: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Calendar-day distance from `today` to the deadline.
    ///
    /// Negative when overdue; `None` when no deadline is set.
    pub fn days_until_deadline(&self, today: NaiveDate) -> Option<i64> {
        self.deadline
            .map(|deadline| (deadline.date_naive() - today).num_days())
    }
}

impl Default for ApplicationRecord {
    fn default() -> Self {
        Self::new()
    }
}
