//! Configuration module for Vitrine
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (VITRINE_*)
//! 3. Project config (./vitrine.toml)
//! 4. User config (<config dir>/vitrine/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator, InvalidEnvValue};
pub use loader::{
    load_layered, with_overrides_from, ConfigWarning, ENV_API_URL, ENV_BUCKET_SLUG, ENV_COLOR,
    ENV_READ_KEY, ENV_WRITE_KEY, ENV_WRITE_URL, PROJECT_CONFIG_FILE,
};
pub use types::{AnimationConfig, ColorMode, Config, OutputConfig, StoreConfig};
