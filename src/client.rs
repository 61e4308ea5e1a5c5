use anyhow::{anyhow, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::TrackerConfig;
use crate::models::*;

const EXERCISES_PATH: &str = "/api/exercises";
const CALCULATE_PATH: &str = "/api/calculate_target_calories";
const PROJECTION_PATH: &str = "/api/projection";

/// HTTP client for the tracker backend.
///
/// Every call is independent: no retries, no deduplication, no timeout beyond
/// whatever the transport imposes.
#[derive(Clone)]
pub struct TrackerClient {
    client: Client,
    config: TrackerConfig,
}

impl TrackerClient {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Fetch the exercise catalog.
    pub async fn get_exercises(&self) -> Result<Vec<ExerciseCatalogItem>> {
        let resp = self
            .client
            .get(self.config.url(EXERCISES_PATH))
            .send()
            .await?;

        decode(EXERCISES_PATH, resp).await
    }

    /// Ask the backend for maintenance calories. Returns the raw, unrounded value.
    pub async fn calculate_maintenance_calories(&self, profile: &UserProfile) -> Result<f64> {
        let data: MaintenanceResponse = self.post_json(CALCULATE_PATH, profile).await?;
        Ok(data.maintenance_calories)
    }

    /// Request a weight projection for the bundled session data.
    pub async fn get_projection(
        &self,
        request: &ProjectionRequest<'_>,
    ) -> Result<ProjectionResult> {
        self.post_json(PROJECTION_PATH, request).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .client
            .post(self.config.url(path))
            .json(body)
            .send()
            .await?;

        decode(path, resp).await
    }
}

async fn decode<T: DeserializeOwned>(path: &str, resp: Response) -> Result<T> {
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(anyhow!("{} failed: {} - {}", path, status, body));
    }

    let text = resp.text().await?;
    serde_json::from_str(&text)
        .map_err(|e| anyhow!("{} returned an unexpected body: {} - {}", path, e, text))
}
