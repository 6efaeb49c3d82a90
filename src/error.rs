use thiserror::Error;

pub type Result<T> = std::result::Result<T, KanbanError>;

#[derive(Debug, Error)]
pub enum KanbanError {
    #[error("Snapshot fetch failed: {0}")]
    Fetch(String),

    #[error("Snapshot endpoint returned status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid priority {0}, expected a value between 0 and 4")]
    InvalidPriority(i64),

    #[error("Invalid grouping '{0}'. Valid groupings: status, user, priority")]
    InvalidGrouping(String),

    #[error("Invalid ordering '{0}'. Valid orderings: priority, title")]
    InvalidOrdering(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
