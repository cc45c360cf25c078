//! HTTP Store API Adapter
//!
//! Implements the StoreApi port against the backend REST interface:
//!   GET    /api/stores
//!   POST   /api/stores
//!   DELETE /api/stores/{id}
//!   GET    /api/stores/{id}/health

use crate::domain::entities::{Store, StoreHealth};
use crate::domain::ports::{ApiError, NewStore, StoreApi};
use async_trait::async_trait;
use std::time::Duration;

/// Configuration for the backend connection.
#[derive(Debug, Clone)]
pub struct HttpApiConfig {
    /// Base URL of the backend (e.g., "http://localhost:8080")
    pub base_url: String,
    /// Per-request timeout; a hung request must not stall a poll cycle forever
    pub request_timeout: Duration,
}

impl Default for HttpApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Reqwest-backed implementation of the StoreApi port.
pub struct HttpStoreApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpStoreApi {
    /// Build the adapter. Fails only if the HTTP client cannot be
    /// constructed, which is a startup-time configuration problem.
    pub fn new(config: HttpApiConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn stores_url(&self) -> String {
        format!("{}/api/stores", self.base_url)
    }

    /// Map a non-success response into ApiError, pulling the backend's
    /// `{"error": ...}` message out of the body when present.
    async fn status_error(response: reqwest::Response) -> ApiError {
        let code = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or(body);

        ApiError::Status { code, message }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

#[async_trait]
impl StoreApi for HttpStoreApi {
    async fn list_stores(&self) -> Result<Vec<Store>, ApiError> {
        let response = self.client.get(self.stores_url()).send().await?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        response
            .json::<Vec<Store>>()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))
    }

    async fn create_store(&self, req: &NewStore) -> Result<Store, ApiError> {
        let response = self
            .client
            .post(self.stores_url())
            .json(req)
            .send()
            .await?;

        // The backend answers 202 Accepted with the Provisioning record
        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        response
            .json::<Store>()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))
    }

    async fn delete_store(&self, id: &str) -> Result<(), ApiError> {
        let url = format!("{}/{}", self.stores_url(), id);
        let response = self.client.delete(url).send().await?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        Ok(())
    }

    async fn check_health(&self, id: &str) -> Result<StoreHealth, ApiError> {
        let url = format!("{}/{}/health", self.stores_url(), id);
        let response = self.client.get(url).send().await?;

        // 503 carries a {"healthy": false, "error": ...} body; treat it as a
        // report, not a request failure
        let status = response.status();
        if status.is_success() || status == reqwest::StatusCode::SERVICE_UNAVAILABLE {
            return response
                .json::<StoreHealth>()
                .await
                .map_err(|e| ApiError::Malformed(e.to_string()));
        }

        Err(Self::status_error(response).await)
    }
}
