//! Service Factory
//!
//! Creates the content service with its store wired up. This is the
//! dependency injection point for the application.

use std::path::Path;
use std::sync::Arc;

use crate::application::ContentService;
use crate::config::Config;
use crate::domain::ports::ContentStore;
use crate::error::VitrineResult;
use crate::infrastructure::{CosmicStore, MemoryStore};

/// Store selected by the CLI flags and configuration
///
/// A fixture file takes precedence and needs no credentials; otherwise the
/// remote store is built from `config.store`.
pub fn create_store(config: &Config, fixture: Option<&Path>) -> VitrineResult<Arc<dyn ContentStore>> {
    if let Some(path) = fixture {
        return Ok(Arc::new(MemoryStore::from_fixture(path)?));
    }

    let options = config.to_cosmic_options()?;
    tracing::debug!(bucket = %options.bucket_slug, api = %options.api_url, "using remote store");
    Ok(Arc::new(CosmicStore::new(options)?))
}

pub fn create_content_service(
    config: &Config,
    fixture: Option<&Path>,
) -> VitrineResult<ContentService> {
    Ok(ContentService::new(create_store(config, fixture)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VitrineError;
    use std::io::Write;

    #[test]
    fn fixture_needs_no_credentials() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        let store = create_store(&Config::default(), Some(file.path())).unwrap();
        assert_eq!(store.name(), "memory");
    }

    #[test]
    fn remote_store_needs_credentials() {
        let result = create_store(&Config::default(), None);
        assert!(matches!(result, Err(VitrineError::MissingSetting { .. })));
    }

    #[test]
    fn remote_store_from_config() {
        let mut config = Config::default();
        config.store.bucket_slug = Some("portfolio".to_string());
        config.store.read_key = Some("rk".to_string());

        let service = create_content_service(&config, None).unwrap();
        assert_eq!(service.store_name(), "cosmic:portfolio");
    }
}
