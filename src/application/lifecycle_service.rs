//! Store Lifecycle Service - Main application use cases
//!
//! Orchestrates store creation, deletion and health probes against the
//! backend port, and keeps the directory snapshot fresh after every
//! successful mutation. This is the primary interface for the inbound
//! adapter.

use crate::application::errors::DashboardError;
use crate::application::single_flight::{OperationKey, SingleFlight};
use crate::domain::entities::{Store, StoreHealth};
use crate::domain::ports::{NewStore, OperatorPrompt, StoreApi};
use crate::domain::value_objects::StoreEngine;
use crate::infrastructure::poller::DirectoryPoller;
use std::sync::Arc;

/// Shortest accepted store name, after trimming.
pub const NAME_MIN_LEN: usize = 2;
/// Longest accepted store name.
pub const NAME_MAX_LEN: usize = 50;

/// Store lifecycle controller.
///
/// Every mutating use case follows the same shape:
/// 1. Validate client-side (no request leaves on bad input)
/// 2. Acquire the single-flight guard for the operation key
/// 3. Issue the backend request
/// 4. On success, trigger one immediate directory refresh
pub struct StoreLifecycleService {
    api: Arc<dyn StoreApi>,
    poller: Arc<DirectoryPoller>,
    prompt: Arc<dyn OperatorPrompt>,
    in_flight: SingleFlight,
}

impl StoreLifecycleService {
    /// Create a new lifecycle service.
    pub fn new(
        api: Arc<dyn StoreApi>,
        poller: Arc<DirectoryPoller>,
        prompt: Arc<dyn OperatorPrompt>,
    ) -> Self {
        Self {
            api,
            poller,
            prompt,
            in_flight: SingleFlight::new(),
        }
    }

    /// Request creation of a new store.
    ///
    /// The name is trimmed and validated, the engine parsed strictly; both
    /// reject before any request is issued. On backend success the new store
    /// (expected in `Provisioning`) shows up via an immediate refresh instead
    /// of waiting for the next poll tick. Failures are surfaced through the
    /// operator prompt and propagated to the caller.
    pub async fn create_store(
        &self,
        name: &str,
        engine: &str,
    ) -> Result<Store, DashboardError> {
        let name = validate_store_name(name)?;
        let engine = StoreEngine::parse(engine)
            .ok_or_else(|| DashboardError::UnknownEngine(engine.to_string()))?;

        let key = OperationKey::Create;
        let _guard = self
            .in_flight
            .begin(key.clone())
            .ok_or_else(|| DashboardError::OperationInFlight(key.to_string()))?;

        let req = NewStore { name, engine };
        match self.api.create_store(&req).await {
            Ok(store) => {
                tracing::info!("store {} ({}) creation accepted", store.id, store.name);
                self.poller.refresh_now().await;
                Ok(store)
            }
            Err(e) => {
                tracing::error!("failed to create store {}: {}", req.name, e);
                self.prompt
                    .notify_error(&format!("Failed to create store: {}", e));
                Err(e.into())
            }
        }
    }

    /// Request deletion of a store.
    ///
    /// The operator must confirm first; a declined prompt returns `Ok(false)`
    /// with zero requests issued. On backend success one immediate refresh is
    /// triggered. On failure the snapshot is left untouched - the store keeps
    /// showing until the next poll reconciles reality.
    pub async fn delete_store(&self, id: &str) -> Result<bool, DashboardError> {
        let confirmed = self
            .prompt
            .confirm(&format!("Delete store {}? This cannot be undone.", id))
            .await;
        if !confirmed {
            tracing::debug!("deletion of store {} declined by operator", id);
            return Ok(false);
        }

        let key = OperationKey::Delete(id.to_string());
        let _guard = self
            .in_flight
            .begin(key.clone())
            .ok_or_else(|| DashboardError::OperationInFlight(key.to_string()))?;

        match self.api.delete_store(id).await {
            Ok(()) => {
                tracing::info!("store {} deletion accepted", id);
                self.poller.refresh_now().await;
                Ok(true)
            }
            Err(e) => {
                tracing::error!("failed to delete store {}: {}", id, e);
                self.prompt
                    .notify_error(&format!("Failed to delete store {}: {}", id, e));
                Err(e.into())
            }
        }
    }

    /// Probe the live health of a single store deployment.
    pub async fn store_health(&self, id: &str) -> Result<StoreHealth, DashboardError> {
        let health = self.api.check_health(id).await?;
        tracing::debug!("store {} health: healthy={}", id, health.healthy);
        Ok(health)
    }

    /// Current directory snapshot.
    pub async fn stores(&self) -> Vec<Store> {
        self.poller.snapshot().await
    }
}

/// Validate and normalize an operator-supplied store name.
///
/// Rules match the backend so rejection happens before a request is wasted:
/// 2-50 characters after trimming, restricted to letters, digits, spaces,
/// hyphens and underscores.
fn validate_store_name(raw: &str) -> Result<String, DashboardError> {
    let trimmed = raw.trim();

    if trimmed.len() < NAME_MIN_LEN || trimmed.len() > NAME_MAX_LEN {
        return Err(DashboardError::InvalidName(format!(
            "name must be between {} and {} characters",
            NAME_MIN_LEN, NAME_MAX_LEN
        )));
    }

    let allowed = trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-' || c == '_');
    if !allowed {
        return Err(DashboardError::InvalidName(
            "name can only contain letters, numbers, spaces, hyphens, and underscores"
                .to_string(),
        ));
    }

    Ok(trimmed.to_string())
}
