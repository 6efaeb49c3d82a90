use crate::{
    config::AppConfig,
    domain::snapshot::Snapshot,
    error::{KanbanError, Result},
    loader::SnapshotSource,
};
use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;
use tracing::debug;

/// Fetches the snapshot document from the tracker's HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpSnapshotSource {
    endpoint: String,
    client: Client,
}

impl HttpSnapshotSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let endpoint = endpoint.into().trim().to_owned();
        if endpoint.is_empty() {
            return Err(KanbanError::ConfigError(
                "Snapshot endpoint is empty".to_owned(),
            ));
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|error| {
                KanbanError::ConfigError(format!("failed to build HTTP client: {error}"))
            })?;

        Ok(Self { endpoint, client })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(config.endpoint.clone(), config.request_timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SnapshotSource for HttpSnapshotSource {
    async fn fetch(&self) -> Result<Snapshot> {
        debug!(endpoint = %self.endpoint, "requesting snapshot");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|error| KanbanError::Fetch(format!("request failed: {error}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| KanbanError::Fetch(format!("response read failed: {error}")))?;

        if !status.is_success() {
            return Err(KanbanError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        Snapshot::from_json(&body)
    }
}
