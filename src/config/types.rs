//! Configuration type definitions

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::services::TypingTimings;
use crate::domain::services::typewriter::{DELETE_DELAY_MS, PAUSE_MS, TYPE_DELAY_MS};
use crate::error::{VitrineError, VitrineResult};
use crate::infrastructure::cosmic::{
    CosmicOptions, DEFAULT_API_URL, DEFAULT_WRITE_URL, REQUEST_TIMEOUT_SECS,
};

use super::loader::{self, ConfigWarning};

/// Content store connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub bucket_slug: Option<String>,

    #[serde(default)]
    pub read_key: Option<String>,

    /// Only needed for `contact --send`
    #[serde(default)]
    pub write_key: Option<String>,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_write_url")]
    pub write_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            bucket_slug: None,
            read_key: None,
            write_key: None,
            api_url: default_api_url(),
            write_url: default_write_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_write_url() -> String {
    DEFAULT_WRITE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    REQUEST_TIMEOUT_SECS
}

/// Hero typing animation timings in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_type_ms")]
    pub type_ms: u64,

    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,

    #[serde(default = "default_delete_ms")]
    pub delete_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            type_ms: TYPE_DELAY_MS,
            pause_ms: PAUSE_MS,
            delete_ms: DELETE_DELAY_MS,
        }
    }
}

fn default_type_ms() -> u64 {
    TYPE_DELAY_MS
}

fn default_pause_ms() -> u64 {
    PAUSE_MS
}

fn default_delete_ms() -> u64 {
    DELETE_DELAY_MS
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> VitrineResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> VitrineResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (VITRINE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Connection options for the remote store
    ///
    /// Fails when the bucket slug or read key is missing or blank.
    pub fn to_cosmic_options(&self) -> VitrineResult<CosmicOptions> {
        let bucket_slug = required(
            &self.store.bucket_slug,
            "store.bucket_slug",
            loader::ENV_BUCKET_SLUG,
        )?;
        let read_key = required(&self.store.read_key, "store.read_key", loader::ENV_READ_KEY)?;

        let mut options = CosmicOptions::new(bucket_slug, read_key);
        options.api_url = self.store.api_url.clone();
        options.write_url = self.store.write_url.clone();
        options.timeout = Duration::from_secs(self.store.timeout_secs.max(1));
        if let Some(key) = self.store.write_key.as_deref().filter(|k| !k.trim().is_empty()) {
            options = options.with_write_key(key);
        }
        Ok(options)
    }

    pub fn typing_timings(&self) -> TypingTimings {
        TypingTimings {
            type_delay: Duration::from_millis(self.animation.type_ms),
            pause: Duration::from_millis(self.animation.pause_ms),
            delete_delay: Duration::from_millis(self.animation.delete_ms),
        }
    }
}

fn required(
    value: &Option<String>,
    key: &'static str,
    env: &'static str,
) -> VitrineResult<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(VitrineError::MissingSetting { key, env })
}
