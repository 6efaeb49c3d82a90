use crate::{
    error::{KanbanError, Result},
    storage::KeyValueStore,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// File-based key-value store, one `<key>.json` file per key
pub struct FileStore {
    root_path: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `root`; the directory is created on first write
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root_path: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root_path
    }

    fn entry_file(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(KanbanError::StorageError(format!(
                "Invalid storage key '{}'",
                key
            )));
        }
        Ok(self.root_path.join(format!("{}.json", key)))
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let file_path = self.entry_file(key)?;

        if !file_path.exists() {
            debug!(key, "no stored value");
            return Ok(None);
        }

        let contents = fs::read_to_string(&file_path).await?;
        debug!(key, path = %file_path.display(), "read stored value");
        Ok(Some(contents))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let file_path = self.entry_file(key)?;
        self.ensure_directory_exists(&self.root_path).await?;

        fs::write(&file_path, value).await?;
        debug!(key, path = %file_path.display(), "wrote stored value");
        Ok(())
    }
}
