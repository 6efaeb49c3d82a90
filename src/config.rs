use crate::error::{KanbanError, Result};
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

pub const DEFAULT_ENDPOINT: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;

pub const ENDPOINT_ENV: &str = "KANBAN_ENDPOINT";
pub const STATE_DIR_ENV: &str = "KANBAN_STATE_DIR";
pub const TIMEOUT_ENV: &str = "KANBAN_TIMEOUT_SECS";

/// Runtime settings for the loader and the view-state store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: String,
    pub state_dir: PathBuf,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            state_dir: default_state_dir(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Per-user data directory, or `./.kanban-view` when the platform has none
fn default_state_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("kanban-view"))
        .unwrap_or_else(|| PathBuf::from(".kanban-view"))
}

impl AppConfig {
    /// Loads settings from an optional TOML file, then the environment
    ///
    /// A path that does not exist yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config
            .with_overrides(|name| std::env::var(name).ok())?
            .validated()
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            KanbanError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&contents).map_err(|e| {
            KanbanError::ConfigError(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| KanbanError::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Applies `KANBAN_*` overrides looked up through `lookup`
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENDPOINT_ENV) {
            self.endpoint = endpoint;
        }
        if let Some(dir) = lookup(STATE_DIR_ENV) {
            self.state_dir = PathBuf::from(dir);
        }
        if let Some(timeout) = lookup(TIMEOUT_ENV) {
            self.request_timeout_secs = timeout.trim().parse().map_err(|_| {
                KanbanError::ConfigError(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    TIMEOUT_ENV, timeout
                ))
            })?;
        }
        Ok(self)
    }

    pub fn validated(self) -> Result<Self> {
        if self.endpoint.trim().is_empty() {
            return Err(KanbanError::ConfigError(
                "endpoint must not be empty".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(KanbanError::ConfigError(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(self)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
