pub mod board;
pub mod snapshot;
pub mod sorting;
pub mod ticket;
pub mod user;
pub mod view_state;

pub use board::{project, Group, UNASSIGNED_LABEL};
pub use snapshot::Snapshot;
pub use sorting::sort_tickets;
pub use ticket::{status_icon, KnownStatus, Priority, Ticket, TicketId, DEFAULT_GROUP_ICON};
pub use user::User;
pub use view_state::{GroupBy, OrderBy, ViewState};
