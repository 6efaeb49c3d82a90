use crate::{domain::snapshot::Snapshot, error::Result};
use async_trait::async_trait;
use tracing::{info, warn};

pub mod file;
pub mod http;

pub use file::JsonFileSnapshotSource;
pub use http::HttpSnapshotSource;

/// Where a snapshot of tickets and users comes from
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Fetches one complete snapshot
    async fn fetch(&self) -> Result<Snapshot>;
}

/// Lifecycle of the session's single snapshot load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Snapshot),
    Failed(String),
}

impl LoadState {
    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            Self::Ready(snapshot) => Some(snapshot),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Folds a fetch outcome into the lifecycle
    ///
    /// Only the first outcome counts: a state that has already left
    /// `Loading` is returned unchanged.
    pub fn complete(self, outcome: Result<Snapshot>) -> Self {
        match self {
            Self::Loading => match outcome {
                Ok(snapshot) => Self::Ready(snapshot),
                Err(e) => Self::Failed(e.to_string()),
            },
            settled => settled,
        }
    }
}

/// Performs a single fetch and reports it as a [`LoadState`]
///
/// Failures are logged and turned into [`LoadState::Failed`]; this function
/// never returns an error.
pub async fn load<S: SnapshotSource + ?Sized>(source: &S) -> LoadState {
    let outcome = source.fetch().await;
    match &outcome {
        Ok(snapshot) => info!(
            tickets = snapshot.tickets.len(),
            users = snapshot.users.len(),
            "snapshot loaded"
        ),
        Err(e) => warn!(error = %e, "snapshot load failed"),
    }
    LoadState::Loading.complete(outcome)
}

/// Serves a snapshot that is already in memory
#[derive(Debug, Clone, Default)]
pub struct StaticSnapshotSource {
    snapshot: Snapshot,
}

impl StaticSnapshotSource {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl SnapshotSource for StaticSnapshotSource {
    async fn fetch(&self) -> Result<Snapshot> {
        Ok(self.snapshot.clone())
    }
}
