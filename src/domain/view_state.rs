use crate::error::KanbanError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Criterion used to partition tickets into columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    #[default]
    Status,
    User,
    Priority,
}

/// Order of tickets inside a column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    #[default]
    Priority,
    Title,
}

impl GroupBy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::User => "user",
            Self::Priority => "priority",
        }
    }
}

impl OrderBy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::Title => "title",
        }
    }
}

impl FromStr for GroupBy {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "status" => Ok(Self::Status),
            "user" => Ok(Self::User),
            "priority" => Ok(Self::Priority),
            _ => Err(KanbanError::InvalidGrouping(s.to_string())),
        }
    }
}

impl FromStr for OrderBy {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "priority" => Ok(Self::Priority),
            "title" => Ok(Self::Title),
            _ => Err(KanbanError::InvalidOrdering(s.to_string())),
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's display preferences: how the board is grouped and ordered
///
/// Serialized as `{"grouping": "...", "sorting": "..."}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewState {
    pub grouping: GroupBy,
    pub sorting: OrderBy,
}

impl ViewState {
    pub fn new(grouping: GroupBy, sorting: OrderBy) -> Self {
        Self { grouping, sorting }
    }
}
