//! Remote object store adapter
//!
//! - `client` - `CosmicStore`, the `ContentStore` implementation over HTTP
//! - `wire` - response envelopes

mod client;
mod wire;

pub use client::{CosmicOptions, CosmicStore, DEFAULT_API_URL, DEFAULT_WRITE_URL, REQUEST_TIMEOUT_SECS};
