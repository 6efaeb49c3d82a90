use crate::{
    domain::view_state::{GroupBy, OrderBy, ViewState},
    error::Result,
    storage::KeyValueStore,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Fixed key the view state is stored under
pub const VIEW_STATE_KEY: &str = "kanbanState";

/// Loosely-typed form of the persisted document, validated field by field
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StoredViewState {
    grouping: Option<Value>,
    sorting: Option<Value>,
}

/// Persists the user's [`ViewState`] across sessions
pub struct ViewStateStore<S> {
    store: S,
}

impl<S: KeyValueStore> ViewStateStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Restores the last persisted view state
    ///
    /// Never fails. Nothing stored, unreadable storage or an undecodable
    /// document all yield the default view; a single unknown field value
    /// falls back to that field's default only.
    pub async fn restore(&self) -> ViewState {
        let raw = match self.store.get(VIEW_STATE_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no persisted view state, using defaults");
                return ViewState::default();
            }
            Err(e) => {
                warn!(error = %e, "failed to read persisted view state, using defaults");
                return ViewState::default();
            }
        };

        let stored: StoredViewState = match serde_json::from_str(&raw) {
            Ok(stored) => stored,
            Err(e) => {
                warn!(error = %e, "persisted view state is malformed, using defaults");
                return ViewState::default();
            }
        };

        ViewState {
            grouping: parse_or_default::<GroupBy>(stored.grouping.as_ref()),
            sorting: parse_or_default::<OrderBy>(stored.sorting.as_ref()),
        }
    }

    /// Writes the view state under [`VIEW_STATE_KEY`]
    pub async fn persist(&self, view: &ViewState) -> Result<()> {
        let json = serde_json::to_string(view)?;
        self.store.set(VIEW_STATE_KEY, &json).await
    }
}

fn parse_or_default<T>(value: Option<&Value>) -> T
where
    T: std::str::FromStr + Default,
    T::Err: std::fmt::Display,
{
    match value {
        Some(Value::String(value)) => value.parse().unwrap_or_else(|e| {
            warn!(error = %e, "ignoring persisted view setting");
            T::default()
        }),
        None => T::default(),
        Some(other) => {
            warn!(value = %other, "ignoring persisted view setting that is not a string");
            T::default()
        }
    }
}
