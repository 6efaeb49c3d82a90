use crate::{domain::snapshot::Snapshot, error::Result, loader::SnapshotSource};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Reads the snapshot document from a local JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSnapshotSource {
    path: PathBuf,
}

impl JsonFileSnapshotSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl SnapshotSource for JsonFileSnapshotSource {
    async fn fetch(&self) -> Result<Snapshot> {
        debug!(path = %self.path.display(), "reading snapshot file");
        let contents = fs::read_to_string(&self.path).await?;
        Snapshot::from_json(&contents)
    }
}
