//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

use serde::{Deserialize, Serialize};

/// Store engine powering a deployment.
///
/// The backend only knows how to provision these engines, so parsing is
/// strict: anything else is rejected before a request is ever issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreEngine {
    /// WordPress + WooCommerce
    WooCommerce,
    /// MedusaJS headless commerce
    Medusa,
}

impl StoreEngine {
    /// Parse an engine from its wire representation.
    ///
    /// Returns `None` for unknown engines; the lifecycle controller turns
    /// that into a validation error instead of guessing a default.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "woocommerce" => Some(Self::WooCommerce),
            "medusa" => Some(Self::Medusa),
            _ => None,
        }
    }

    /// Convert to the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WooCommerce => "woocommerce",
            Self::Medusa => "medusa",
        }
    }

    /// All engines the dashboard can request.
    pub fn all() -> &'static [StoreEngine] {
        &[Self::WooCommerce, Self::Medusa]
    }
}

impl std::fmt::Display for StoreEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle state of a store, assigned and transitioned exclusively by the
/// backend. The client only ever observes these values; it never sets them.
///
/// Expected transitions: `Provisioning -> Ready | Failed`, then
/// `Deleting -> removed | DeletionFailed` once a deletion is acknowledged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoreStatus {
    /// Backend is still building the store infrastructure
    Provisioning,
    /// Store is up and reachable at its URL
    Ready,
    /// Provisioning failed
    Failed,
    /// Deletion acknowledged, teardown in progress
    Deleting,
    /// Teardown failed, store left in limbo
    DeletionFailed,
    /// Any status this client version does not know about
    #[serde(other)]
    Unknown,
}

impl StoreStatus {
    /// Wire / display representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Provisioning => "Provisioning",
            Self::Ready => "Ready",
            Self::Failed => "Failed",
            Self::Deleting => "Deleting",
            Self::DeletionFailed => "DeletionFailed",
            Self::Unknown => "Unknown",
        }
    }

    /// Whether the backend is still working on this store.
    pub fn is_transitional(&self) -> bool {
        matches!(self, Self::Provisioning | Self::Deleting)
    }
}

impl std::fmt::Display for StoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== StoreEngine Tests =====

    #[test]
    fn test_engine_parse_known() {
        assert_eq!(StoreEngine::parse("woocommerce"), Some(StoreEngine::WooCommerce));
        assert_eq!(StoreEngine::parse("medusa"), Some(StoreEngine::Medusa));
    }

    #[test]
    fn test_engine_parse_case_insensitive() {
        assert_eq!(StoreEngine::parse("WooCommerce"), Some(StoreEngine::WooCommerce));
        assert_eq!(StoreEngine::parse("MEDUSA"), Some(StoreEngine::Medusa));
    }

    #[test]
    fn test_engine_parse_unknown_rejected() {
        let invalid = vec!["shopify", "magento", "", "woo commerce"];
        for input in invalid {
            assert_eq!(StoreEngine::parse(input), None, "should reject: {}", input);
        }
    }

    #[test]
    fn test_engine_as_str() {
        assert_eq!(StoreEngine::WooCommerce.as_str(), "woocommerce");
        assert_eq!(StoreEngine::Medusa.as_str(), "medusa");
    }

    #[test]
    fn test_engine_display() {
        assert_eq!(format!("{}", StoreEngine::WooCommerce), "woocommerce");
        assert_eq!(format!("{}", StoreEngine::Medusa), "medusa");
    }

    #[test]
    fn test_engine_roundtrip() {
        for engine in StoreEngine::all() {
            assert_eq!(StoreEngine::parse(engine.as_str()), Some(*engine));
        }
    }

    #[test]
    fn test_engine_serde_lowercase() {
        let json = serde_json::to_string(&StoreEngine::WooCommerce).unwrap();
        assert_eq!(json, "\"woocommerce\"");

        let parsed: StoreEngine = serde_json::from_str("\"medusa\"").unwrap();
        assert_eq!(parsed, StoreEngine::Medusa);
    }

    // ===== StoreStatus Tests =====

    #[test]
    fn test_status_as_str() {
        assert_eq!(StoreStatus::Provisioning.as_str(), "Provisioning");
        assert_eq!(StoreStatus::Ready.as_str(), "Ready");
        assert_eq!(StoreStatus::Failed.as_str(), "Failed");
        assert_eq!(StoreStatus::Deleting.as_str(), "Deleting");
        assert_eq!(StoreStatus::DeletionFailed.as_str(), "DeletionFailed");
    }

    #[test]
    fn test_status_serde_pascal_case() {
        let parsed: StoreStatus = serde_json::from_str("\"Provisioning\"").unwrap();
        assert_eq!(parsed, StoreStatus::Provisioning);

        let parsed: StoreStatus = serde_json::from_str("\"Ready\"").unwrap();
        assert_eq!(parsed, StoreStatus::Ready);
    }

    #[test]
    fn test_status_unknown_fallback() {
        // A newer backend may emit statuses this client has never seen
        let parsed: StoreStatus = serde_json::from_str("\"Migrating\"").unwrap();
        assert_eq!(parsed, StoreStatus::Unknown);
    }

    #[test]
    fn test_status_is_transitional() {
        assert!(StoreStatus::Provisioning.is_transitional());
        assert!(StoreStatus::Deleting.is_transitional());
        assert!(!StoreStatus::Ready.is_transitional());
        assert!(!StoreStatus::Failed.is_transitional());
        assert!(!StoreStatus::Unknown.is_transitional());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(format!("{}", StoreStatus::Ready), "Ready");
        assert_eq!(format!("{}", StoreStatus::DeletionFailed), "DeletionFailed");
    }
}
