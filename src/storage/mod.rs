use crate::error::Result;
use async_trait::async_trait;

pub mod file_storage;
pub mod memory;
pub mod view_state_store;

pub use file_storage::FileStore;
pub use memory::MemoryStore;
pub use view_state_store::{ViewStateStore, VIEW_STATE_KEY};

/// Scoped key-value persistence for small JSON documents
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`, or `None` if nothing was stored
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
