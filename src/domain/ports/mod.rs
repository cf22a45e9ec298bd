//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod content_store;

pub use content_store::{ContentStore, StoreError, StoreResult};
