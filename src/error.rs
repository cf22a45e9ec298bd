//! Error types for Vitrine
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::FetchError;
use crate::domain::entities::ContactError;
use crate::domain::ports::StoreError;

/// Result type alias for Vitrine operations
pub type VitrineResult<T> = Result<T, VitrineError>;

/// Main error type for Vitrine operations
#[derive(Error, Debug)]
pub enum VitrineError {
    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// A setting required by the requested operation is missing
    #[error("missing setting '{key}' - set it in vitrine.toml or via {env}")]
    MissingSetting {
        key: &'static str,
        env: &'static str,
    },

    /// Content fixture could not be loaded
    #[error("invalid fixture {file}: {message}")]
    InvalidFixture { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content store error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A content read failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Contact form input was rejected
    #[error("invalid contact form: {0}")]
    Contact(#[from] ContactError),
}
