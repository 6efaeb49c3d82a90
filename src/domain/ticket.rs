use crate::error::KanbanError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon shown for groups that have no dedicated icon
pub const DEFAULT_GROUP_ICON: &str = "📌";

/// Identifier of a ticket as issued by the remote tracker (e.g., CAM-1)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ticket priority, ordered from least to most urgent
///
/// Encoded on the wire as the integers 0 through 4. Any other value is
/// rejected when the snapshot is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub enum Priority {
    NoPriority = 0,
    Low = 1,
    Medium = 2,
    High = 3,
    Urgent = 4,
}

impl Priority {
    /// All priorities, most urgent first
    pub const ALL: [Priority; 5] = [
        Self::Urgent,
        Self::High,
        Self::Medium,
        Self::Low,
        Self::NoPriority,
    ];

    /// Human-readable name used as a group label
    pub fn label(self) -> &'static str {
        match self {
            Self::Urgent => "Urgent",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::NoPriority => "No priority",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Urgent => "🔴",
            Self::High => "🟠",
            Self::Medium => "🟡",
            Self::Low => "🔵",
            Self::NoPriority => "⚪",
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<i64> for Priority {
    type Error = KanbanError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NoPriority),
            1 => Ok(Self::Low),
            2 => Ok(Self::Medium),
            3 => Ok(Self::High),
            4 => Ok(Self::Urgent),
            other => Err(KanbanError::InvalidPriority(other)),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.value()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Statuses that have a dedicated column icon
///
/// The status field of a ticket is free text; statuses outside this set are
/// still valid and fall back to [`DEFAULT_GROUP_ICON`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownStatus {
    Backlog,
    Todo,
    InProgress,
    Done,
    Cancelled,
}

impl KnownStatus {
    /// Matches the exact label used by the tracker
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Backlog" => Some(Self::Backlog),
            "Todo" => Some(Self::Todo),
            "In progress" => Some(Self::InProgress),
            "Done" => Some(Self::Done),
            "Cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::Todo => "Todo",
            Self::InProgress => "In progress",
            Self::Done => "Done",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Backlog => "📋",
            Self::Todo => "📝",
            Self::InProgress => "🔄",
            Self::Done => "✅",
            Self::Cancelled => "❌",
        }
    }
}

/// Icon for a status label, or the default icon for unknown statuses
pub fn status_icon(label: &str) -> &'static str {
    KnownStatus::from_label(label)
        .map(KnownStatus::icon)
        .unwrap_or(DEFAULT_GROUP_ICON)
}

/// A ticket as delivered by the remote tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    #[serde(rename = "tag", default)]
    pub tags: Vec<String>,
    /// Soft reference to [`crate::domain::User::id`]; may point at nobody
    #[serde(rename = "userId")]
    pub user_id: String,
    pub status: String,
    pub priority: Priority,
}

impl Ticket {
    /// Creates a ticket in the "Todo" status with no priority and no owner
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: TicketId::new(id),
            title: title.into(),
            tags: Vec::new(),
            user_id: String::new(),
            status: KnownStatus::Todo.label().to_string(),
            priority: Priority::NoPriority,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}
