use serde::{Deserialize, Serialize};

/// A member of the tracker that tickets may be assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub available: bool,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            available: true,
        }
    }

    /// First character of the name, upper-cased, for avatar badges
    pub fn initial(&self) -> Option<String> {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
    }
}
