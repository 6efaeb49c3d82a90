use crate::domain::{ticket::Ticket, user::User};
use serde::{Deserialize, Serialize};

/// One fetched copy of the tracker's tickets and users
///
/// A snapshot is never mutated after it is decoded; every board is projected
/// from it by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl Snapshot {
    pub fn new(tickets: Vec<Ticket>, users: Vec<User>) -> Self {
        Self { tickets, users }
    }

    /// Decodes the JSON document served by the tracker endpoint
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Resolves the ticket's owner, if it still exists
    pub fn user_for(&self, ticket: &Ticket) -> Option<&User> {
        self.user(&ticket.user_id)
    }
}
