//! Domain Layer
//!
//! Entities, value objects and ports. No I/O, no framework types beyond
//! serde derives for the wire shapes.

pub mod entities;
pub mod ports;
pub mod value_objects;
