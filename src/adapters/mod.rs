//! Adapters Layer
//!
//! Inbound adapters drive the application (terminal dashboard); outbound
//! adapters implement the domain ports (HTTP backend, console prompt).

pub mod inbound;
pub mod outbound;
