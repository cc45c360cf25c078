//! Store API Port
//!
//! Defines the interface to the external provisioning backend that owns the
//! canonical Store records. The only implementation shipped here talks REST,
//! but the domain layer never sees HTTP.

use crate::domain::entities::{Store, StoreHealth};
use crate::domain::value_objects::StoreEngine;
use async_trait::async_trait;
use serde::Serialize;

/// Request body for a store creation.
#[derive(Debug, Clone, Serialize)]
pub struct NewStore {
    /// Display label, already trimmed and validated
    pub name: String,
    /// Engine to provision
    #[serde(rename = "type")]
    pub engine: StoreEngine,
}

/// Failure modes of the backend API, as far as this client distinguishes them.
///
/// 4xx and 5xx are deliberately not told apart beyond the raw code; the
/// dashboard reacts the same way to both.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (DNS, connect, timeout, broken pipe)
    #[error("transport error: {0}")]
    Transport(String),
    /// The backend answered with a non-success status
    #[error("backend rejected request: {code} - {message}")]
    Status { code: u16, message: String },
    /// The backend answered 2xx but the body did not parse
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Outbound port to the store provisioning backend.
///
/// All lifecycle transitions happen on the other side of this interface;
/// the client only lists, requests, and observes.
#[async_trait]
pub trait StoreApi: Send + Sync {
    /// Fetch the full, ordered store collection.
    async fn list_stores(&self) -> Result<Vec<Store>, ApiError>;

    /// Request creation of a new store. The backend answers with the created
    /// record, expected in `Provisioning` status.
    async fn create_store(&self, req: &NewStore) -> Result<Store, ApiError>;

    /// Request deletion of a store by id. Idempotent on the backend side.
    async fn delete_store(&self, id: &str) -> Result<(), ApiError>;

    /// Probe the live health of a single store deployment.
    async fn check_health(&self, id: &str) -> Result<StoreHealth, ApiError>;
}
