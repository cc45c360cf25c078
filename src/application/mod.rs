//! Application Layer
//!
//! Use cases composed from domain ports.

mod errors;
mod lifecycle_service;
mod single_flight;

pub use errors::DashboardError;
pub use lifecycle_service::{StoreLifecycleService, NAME_MAX_LEN, NAME_MIN_LEN};
pub use single_flight::{FlightGuard, OperationKey, SingleFlight};
