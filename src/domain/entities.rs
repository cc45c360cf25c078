//! Domain Entities - Core business objects
//!
//! These entities represent the core concepts of the store dashboard domain.
//! Store records are owned by the external backend; everything here is a
//! read-only view deserialized from its API.

use crate::domain::value_objects::{StoreEngine, StoreStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A managed e-commerce deployment tracked by the dashboard.
///
/// The backend assigns the id, namespace, status and url; the operator only
/// ever supplies the name and engine at creation time. The local collection
/// of stores is a cache that is fully replaced on every poll cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    /// Opaque unique identifier, assigned by the backend at creation
    pub id: String,
    /// Operator-supplied display label
    pub name: String,
    /// Store engine (woocommerce, medusa)
    #[serde(rename = "type")]
    pub engine: StoreEngine,
    /// Lifecycle status, owned by the backend
    pub status: StoreStatus,
    /// Storefront address; meaningful only once the store is Ready
    #[serde(default)]
    pub url: Option<String>,
    /// Deployment namespace assigned by the backend (store-<id prefix>)
    #[serde(default)]
    pub namespace: Option<String>,
    /// Creation timestamp, used for relative-age display
    pub created_at: DateTime<Utc>,
}

impl Store {
    /// The address an operator may visit, if any.
    ///
    /// A store is visitable only when it is `Ready` and the backend supplied
    /// a non-empty url. The backend sometimes pre-fills `url` while the store
    /// is still provisioning, so status gates the field.
    pub fn visit_url(&self) -> Option<&str> {
        if self.status != StoreStatus::Ready {
            return None;
        }
        self.url.as_deref().filter(|u| !u.is_empty())
    }
}

/// Result of a backend health probe for a single store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreHealth {
    /// Whether the deployment answered its probe
    pub healthy: bool,
    /// Status echo from the backend, when provided
    #[serde(default)]
    pub status: Option<String>,
    /// Probe error, when the backend reported one
    #[serde(default)]
    pub error: Option<String>,
}
