//! Infrastructure Layer
//!
//! Cross-cutting concerns and background tasks.

pub mod poller;
pub mod shutdown;

pub use poller::{DirectoryPoller, PollerHandle};
pub use shutdown::{shutdown_signal, ShutdownController};
