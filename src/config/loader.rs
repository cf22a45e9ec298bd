//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{VitrineError, VitrineResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{ColorMode, Config};

pub const ENV_BUCKET_SLUG: &str = "VITRINE_BUCKET_SLUG";
pub const ENV_READ_KEY: &str = "VITRINE_READ_KEY";
pub const ENV_WRITE_KEY: &str = "VITRINE_WRITE_KEY";
pub const ENV_API_URL: &str = "VITRINE_API_URL";
pub const ENV_WRITE_URL: &str = "VITRINE_WRITE_URL";
pub const ENV_COLOR: &str = "VITRINE_COLOR";

/// Project config file, relative to the working directory
pub const PROJECT_CONFIG_FILE: &str = "vitrine.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> VitrineResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| VitrineError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the file layer: an explicit file, else the project file, else
/// the user file. Environment overrides are applied on top.
///
/// A file that exists but does not parse is an error; a missing one is not.
pub fn load_layered(
    explicit: Option<&Path>,
    project_root: Option<&Path>,
) -> VitrineResult<(Config, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => config_candidates(project_root)
            .into_iter()
            .find(|path| path.exists()),
    };

    let (config, warnings) = match candidate {
        Some(path) => {
            tracing::debug!(file = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config), warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    for path in config_candidates(project_root) {
        if path.exists() {
            if let Ok(config) = Config::load(&path) {
                return with_env_overrides(config);
            }
        }
    }

    with_env_overrides(Config::default())
}

fn config_candidates(project_root: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(root) = project_root {
        candidates.push(root.join(PROJECT_CONFIG_FILE));
    }
    if let Some(user_config_dir) = dirs::config_dir() {
        candidates.push(user_config_dir.join("vitrine").join("config.toml"));
    }
    candidates
}

/// Apply environment variable overrides (VITRINE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |name| std::env::var(name).ok())
}

/// Apply overrides read through `lookup` instead of the process environment
pub fn with_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(slug) = non_blank(ENV_BUCKET_SLUG) {
        config.store.bucket_slug = Some(slug);
    }
    if let Some(key) = non_blank(ENV_READ_KEY) {
        config.store.read_key = Some(key);
    }
    if let Some(key) = non_blank(ENV_WRITE_KEY) {
        config.store.write_key = Some(key);
    }
    if let Some(url) = non_blank(ENV_API_URL) {
        config.store.api_url = url;
    }
    if let Some(url) = non_blank(ENV_WRITE_URL) {
        config.store.write_url = url;
    }

    if let Some(color) = non_blank(ENV_COLOR) {
        let validator = EnvVarValidator::new(ENV_COLOR, &["auto", "always", "never"]);
        config.output.color = validator.parse(&color, ColorMode::parse, config.output.color);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "store",
        "bucket_slug",
        "read_key",
        "write_key",
        "api_url",
        "write_url",
        "timeout_secs",
        "animation",
        "type_ms",
        "pause_ms",
        "delete_ms",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
