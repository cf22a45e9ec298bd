//! Content Client use cases
//!
//! Typed reads of the portfolio collections plus the contact submission
//! write. "Not found" is expected on a freshly provisioned store and is
//! turned into an empty value here; every other store failure becomes a
//! [`FetchError`] for the caller to surface or replace with defaults.

use std::sync::Arc;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::entities::{
    ContactForm, ContentObject, Experience, NewSubmission, PortfolioSettings, Project, Skill,
    SETTINGS_SLUG,
};
use crate::domain::ports::{ContentStore, StoreError};
use crate::domain::services::{sort_by_order, sort_experience};
use crate::domain::value_objects::{ContentType, ObjectQuery, LIST_PROPS, SINGLETON_PROPS};

/// Relation depth requested for every read
const DEPTH: u8 = 1;

/// A content read failed for a reason other than "not found"
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to fetch {collection}: {source}")]
pub struct FetchError {
    pub collection: &'static str,
    pub source: StoreError,
}

impl FetchError {
    fn new(collection: &'static str, source: StoreError) -> Self {
        Self { collection, source }
    }
}

/// Result of a contact submission; never an error to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Submitted { id: String },
    Failed { message: String },
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Submitted { .. })
    }
}

/// The Content Client
///
/// Build it once with the configured store and share it by reference.
#[derive(Clone)]
pub struct ContentService {
    store: Arc<dyn ContentStore>,
}

impl ContentService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    pub fn store_name(&self) -> String {
        self.store.name()
    }

    /// The settings singleton, or `None` if the store has none
    pub async fn get_portfolio_settings(&self) -> Result<Option<PortfolioSettings>, FetchError> {
        const COLLECTION: &str = "portfolio settings";
        let query = ObjectQuery::by_slug(ContentType::PortfolioSettings, SETTINGS_SLUG)
            .props(SINGLETON_PROPS)
            .depth(DEPTH);

        match self.store.find_one(&query).await {
            Ok(value) => decode(COLLECTION, value).map(Some),
            Err(StoreError::NotFound) => {
                tracing::info!("no portfolio settings stored");
                Ok(None)
            }
            Err(err) => Err(FetchError::new(COLLECTION, err)),
        }
    }

    /// All projects by display order
    pub async fn get_projects(&self) -> Result<Vec<Project>, FetchError> {
        let query = list_query(ContentType::Projects);
        let mut projects = self.fetch_list("projects", &query).await?;
        sort_by_order(&mut projects);
        Ok(projects)
    }

    /// Projects flagged `featured`, by display order
    pub async fn get_featured_projects(&self) -> Result<Vec<Project>, FetchError> {
        let query = list_query(ContentType::Projects).filter("metadata.featured", true);
        let mut projects = self.fetch_list("featured projects", &query).await?;
        sort_by_order(&mut projects);
        Ok(projects)
    }

    /// All skills by display order
    pub async fn get_skills(&self) -> Result<Vec<Skill>, FetchError> {
        let query = list_query(ContentType::Skills);
        let mut skills = self.fetch_list("skills", &query).await?;
        sort_by_order(&mut skills);
        Ok(skills)
    }

    /// All experience by display order, most recent start first on ties
    pub async fn get_experience(&self) -> Result<Vec<Experience>, FetchError> {
        let query = list_query(ContentType::Experience);
        let mut experience = self.fetch_list("experience", &query).await?;
        sort_experience(&mut experience);
        Ok(experience)
    }

    /// Record a contact submission stamped with the current time
    pub async fn submit_contact_form(&self, form: &ContactForm) -> SubmissionOutcome {
        if let Err(err) = form.validate() {
            return SubmissionOutcome::Failed {
                message: err.to_string(),
            };
        }

        let submission = NewSubmission::from_form(form, Utc::now());
        match self.store.insert_one(&submission).await {
            Ok(object) => match object.get("id").and_then(Value::as_str) {
                Some(id) if !id.is_empty() => {
                    tracing::info!(id, "contact submission created");
                    SubmissionOutcome::Submitted { id: id.to_string() }
                }
                _ => {
                    tracing::error!("contact submission response carried no id");
                    SubmissionOutcome::Failed {
                        message: "Failed to submit form: no id in response".to_string(),
                    }
                }
            },
            Err(err) => {
                tracing::error!(error = %err, "error submitting contact form");
                SubmissionOutcome::Failed {
                    message: err.to_string(),
                }
            }
        }
    }

    async fn fetch_list<M: DeserializeOwned>(
        &self,
        collection: &'static str,
        query: &ObjectQuery,
    ) -> Result<Vec<ContentObject<M>>, FetchError> {
        match self.store.find(query).await {
            Ok(values) => {
                let items = values
                    .into_iter()
                    .map(|value| decode(collection, value))
                    .collect::<Result<Vec<_>, _>>()?;
                tracing::debug!(collection, count = items.len(), "fetched");
                Ok(items)
            }
            Err(StoreError::NotFound) => {
                tracing::debug!(collection, "collection is empty");
                Ok(Vec::new())
            }
            Err(err) => Err(FetchError::new(collection, err)),
        }
    }
}

fn list_query(content_type: ContentType) -> ObjectQuery {
    ObjectQuery::of(content_type).props(LIST_PROPS).depth(DEPTH)
}

fn decode<T: DeserializeOwned>(collection: &'static str, value: Value) -> Result<T, FetchError> {
    serde_json::from_value(value)
        .map_err(|e| FetchError::new(collection, StoreError::Decode(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SkillCategory;
    use crate::infrastructure::MemoryStore;
    use serde_json::json;

    fn service(store: MemoryStore) -> ContentService {
        ContentService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn empty_store_yields_empty_values() {
        let service = service(MemoryStore::new());

        assert!(service.get_portfolio_settings().await.unwrap().is_none());
        assert!(service.get_projects().await.unwrap().is_empty());
        assert!(service.get_featured_projects().await.unwrap().is_empty());
        assert!(service.get_skills().await.unwrap().is_empty());
        assert!(service.get_experience().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn featured_projects_are_filtered_and_sorted() {
        let service = service(MemoryStore::with_objects(vec![
            json!({"id": "a", "type": "projects", "metadata": {"featured": true}}),
            json!({"id": "b", "type": "projects", "metadata": {"featured": false, "order": 1}}),
            json!({"id": "c", "type": "projects", "metadata": {"featured": true, "order": 2}}),
        ]));

        let featured = service.get_featured_projects().await.unwrap();
        let ids: Vec<_> = featured.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["c", "a"]);

        let all = service.get_projects().await.unwrap();
        let ids: Vec<_> = all.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[tokio::test]
    async fn store_failures_become_fetch_errors() {
        let service = service(
            MemoryStore::new().failing_reads(StoreError::Unauthorized {
                message: "bad read key".to_string(),
            }),
        );

        let err = service.get_skills().await.unwrap_err();
        assert_eq!(err.collection, "skills");
        assert_eq!(err.to_string(), "Failed to fetch skills: unauthorized: bad read key");

        assert!(service.get_portfolio_settings().await.is_err());
    }

    #[tokio::test]
    async fn unknown_category_does_not_fail_the_read() {
        let service = service(MemoryStore::with_objects(vec![
            json!({
                "id": "s1",
                "type": "skills",
                "metadata": {"skill_name": "React", "category": {"key": "frontend"}, "order": 1}
            }),
            json!({
                "id": "s2",
                "type": "skills",
                "metadata": {"skill_name": "Figma", "category": {"key": "design"}, "order": 2}
            }),
        ]));

        let skills = service.get_skills().await.unwrap();
        let ids: Vec<_> = skills.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["s1", "s2"]);
        assert_eq!(skills[0].metadata.category(), Some(SkillCategory::Frontend));
        assert_eq!(skills[1].metadata.category(), None);

        let page = crate::application::PageLoader::new(&service).load().await;
        assert_eq!(page.skills.len(), 2);
        assert!(page.warnings.is_empty());
    }

    #[tokio::test]
    async fn malformed_objects_fail_the_read() {
        let service = service(MemoryStore::with_objects(vec![json!({
            "id": "s",
            "type": "skills",
            "metadata": {"skill_name": ["not", "a", "string"]}
        })]));

        let err = service.get_skills().await.unwrap_err();
        assert!(matches!(err.source, StoreError::Decode(_)));
    }

    #[tokio::test]
    async fn invalid_contact_form_is_not_sent() {
        let store = Arc::new(MemoryStore::new());
        let service = ContentService::new(store.clone());

        let outcome = service
            .submit_contact_form(&ContactForm::new("Ada", "not-an-email", "hi"))
            .await;
        assert!(!outcome.is_success());
        assert!(store.objects().is_empty());
    }

    #[tokio::test]
    async fn contact_submission_returns_created_id() {
        let store = Arc::new(MemoryStore::new());
        let service = ContentService::new(store.clone());

        let outcome = service
            .submit_contact_form(&ContactForm::new("Ada", "ada@example.com", "Hello"))
            .await;
        assert_eq!(
            outcome,
            SubmissionOutcome::Submitted {
                id: "mem-1".to_string()
            }
        );

        let stored = store.objects();
        assert_eq!(stored[0]["type"], "contact-submissions");
        assert_eq!(stored[0]["metadata"]["email"], "ada@example.com");
        let stamped = stored[0]["metadata"]["submission_date"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(stamped).is_ok());
    }
}
