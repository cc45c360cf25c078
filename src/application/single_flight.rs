//! Single-Flight Guard
//!
//! At most one concurrent execution per operation key. Re-entrant calls are
//! rejected while the first is outstanding, which is what prevents duplicate
//! form submissions and double deletes.

use dashmap::DashMap;
use std::sync::Arc;

/// Key identifying one guarded operation kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OperationKey {
    /// Store creation; one per dashboard, regardless of payload
    Create,
    /// Deletion of a specific store
    Delete(String),
}

impl std::fmt::Display for OperationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Delete(id) => write!(f, "delete({})", id),
        }
    }
}

/// Keyed single-flight registry.
///
/// Cloning shares the underlying key set, so one registry can be handed to
/// several callers.
#[derive(Clone, Default)]
pub struct SingleFlight {
    in_flight: Arc<DashMap<OperationKey, ()>>,
}

impl SingleFlight {
    pub fn new() -> Self {
        Self {
            in_flight: Arc::new(DashMap::new()),
        }
    }

    /// Try to begin an operation. Returns a guard that releases the key on
    /// drop, or `None` when the same operation is already outstanding.
    pub fn begin(&self, key: OperationKey) -> Option<FlightGuard> {
        // entry() holds the shard lock, making check-and-insert atomic
        match self.in_flight.entry(key.clone()) {
            dashmap::mapref::entry::Entry::Occupied(_) => None,
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(());
                Some(FlightGuard {
                    registry: self.in_flight.clone(),
                    key,
                })
            }
        }
    }

    /// Whether an operation with this key is currently outstanding.
    pub fn is_in_flight(&self, key: &OperationKey) -> bool {
        self.in_flight.contains_key(key)
    }

    /// Number of outstanding operations.
    pub fn len(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_empty(&self) -> bool {
        self.in_flight.is_empty()
    }
}

/// RAII guard for one in-flight operation.
///
/// Releases the key when dropped, including on early return and panic.
pub struct FlightGuard {
    registry: Arc<DashMap<OperationKey, ()>>,
    key: OperationKey,
}

impl Drop for FlightGuard {
    fn drop(&mut self) {
        self.registry.remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_and_release() {
        let sf = SingleFlight::new();
        assert!(sf.is_empty());

        {
            let _guard = sf.begin(OperationKey::Create).unwrap();
            assert!(sf.is_in_flight(&OperationKey::Create));
            assert_eq!(sf.len(), 1);
        }

        // Guard dropped, key released
        assert!(!sf.is_in_flight(&OperationKey::Create));
        assert!(sf.is_empty());
    }

    #[test]
    fn test_reentrant_call_rejected() {
        let sf = SingleFlight::new();

        let guard = sf.begin(OperationKey::Create).unwrap();
        assert!(sf.begin(OperationKey::Create).is_none());

        drop(guard);
        assert!(sf.begin(OperationKey::Create).is_some());
    }

    #[test]
    fn test_delete_keyed_by_id() {
        let sf = SingleFlight::new();

        let _g1 = sf.begin(OperationKey::Delete("store-1".to_string())).unwrap();

        // Different store: allowed concurrently
        assert!(sf.begin(OperationKey::Delete("store-2".to_string())).is_some());
        // Same store: rejected
        assert!(sf.begin(OperationKey::Delete("store-1".to_string())).is_none());
    }

    #[test]
    fn test_create_and_delete_independent() {
        let sf = SingleFlight::new();

        let _create = sf.begin(OperationKey::Create).unwrap();
        assert!(sf.begin(OperationKey::Delete("store-1".to_string())).is_some());
    }

    #[test]
    fn test_clone_shares_registry() {
        let sf = SingleFlight::new();
        let cloned = sf.clone();

        let _guard = sf.begin(OperationKey::Create).unwrap();
        assert!(cloned.begin(OperationKey::Create).is_none());
    }

    #[test]
    fn test_operation_key_display() {
        assert_eq!(format!("{}", OperationKey::Create), "create");
        assert_eq!(
            format!("{}", OperationKey::Delete("s-9".to_string())),
            "delete(s-9)"
        );
    }
}
