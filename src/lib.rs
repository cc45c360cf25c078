//! storedash Library
//!
//! This module exposes the store dashboard components for use in
//! integration tests and as a library.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use adapters::inbound::TerminalDashboard;
pub use adapters::outbound::{ConsolePrompt, HttpApiConfig, HttpStoreApi};
pub use application::{DashboardError, SingleFlight, StoreLifecycleService};
pub use config::load_config;
pub use domain::entities::{Store, StoreHealth};
pub use domain::ports::{ApiError, NewStore, OperatorPrompt, StoreApi};
pub use domain::value_objects::{StoreEngine, StoreStatus};
pub use infrastructure::{DirectoryPoller, PollerHandle, ShutdownController};
