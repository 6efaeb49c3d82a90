//! # Kanban View
//!
//! Board projection, view state and snapshot loading for a read-only kanban
//! client.
//!
//! A [`Snapshot`] of tickets and users is fetched once through a
//! [`SnapshotSource`], then projected into ordered columns by
//! [`project`] according to the user's [`ViewState`]. The view state is
//! persisted through any [`KeyValueStore`]. Rendering is left to the caller.

pub mod config;
pub mod domain;
pub mod error;
pub mod loader;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use config::AppConfig;
pub use domain::{
    board::{project, Group},
    snapshot::Snapshot,
    ticket::{Priority, Ticket, TicketId},
    user::User,
    view_state::{GroupBy, OrderBy, ViewState},
};
pub use error::{KanbanError, Result};
pub use loader::{LoadState, SnapshotSource};
pub use session::{Board, Session};
pub use storage::{view_state_store::ViewStateStore, KeyValueStore};
