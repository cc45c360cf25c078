//! Application error taxonomy
//!
//! Everything the lifecycle use cases can fail with. Nothing here is fatal
//! to the process; callers log, surface, and move on.

use crate::domain::ports::ApiError;

/// Failure of a dashboard use case.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Name rejected client-side before any request was issued
    #[error("invalid store name: {0}")]
    InvalidName(String),

    /// Engine string is not part of the supported set
    #[error("unknown store engine: {0}")]
    UnknownEngine(String),

    /// The same operation is already outstanding (single-flight violation)
    #[error("operation already in flight: {0}")]
    OperationInFlight(String),

    /// The backend call itself failed
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl DashboardError {
    /// Whether the failure happened before any network request was issued.
    pub fn is_client_side(&self) -> bool {
        !matches!(self, Self::Api(_))
    }
}
