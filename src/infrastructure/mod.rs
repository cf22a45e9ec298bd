//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `cosmic/` - HTTP adapter for the remote object store
//! - `memory` - In-process store (fixture files, tests)

pub mod cosmic;
pub mod memory;

// Re-export for convenience
pub use cosmic::{CosmicOptions, CosmicStore};
pub use memory::MemoryStore;
