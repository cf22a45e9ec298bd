//! Content client against a mock object API.

mod common;

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param, query_param_contains};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vitrine::application::SettingsSource;
use vitrine::{
    ContactForm, ContentService, CosmicOptions, CosmicStore, PageLoader, StoreError,
    SubmissionOutcome,
};

const OBJECTS_PATH: &str = "/buckets/portfolio/objects";

fn service(server: &MockServer, write_key: Option<&str>) -> ContentService {
    let mut options = CosmicOptions::new("portfolio", "rk-123").with_base_url(server.uri());
    if let Some(key) = write_key {
        options = options.with_write_key(key);
    }
    ContentService::new(Arc::new(CosmicStore::new(options).unwrap()))
}

fn not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({"status": 404, "message": "No objects found"}))
}

fn objects(items: Vec<serde_json::Value>) -> ResponseTemplate {
    let total = items.len();
    ResponseTemplate::new(200).set_body_json(json!({"objects": items, "total": total}))
}

#[tokio::test]
async fn missing_collection_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .respond_with(not_found())
        .mount(&server)
        .await;

    let service = service(&server, None);
    assert!(service.get_projects().await.unwrap().is_empty());
    assert!(service.get_skills().await.unwrap().is_empty());
    assert!(service.get_experience().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_settings_are_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .respond_with(not_found())
        .mount(&server)
        .await;

    assert_eq!(service(&server, None).get_portfolio_settings().await.unwrap(), None);
}

#[tokio::test]
async fn settings_query_asks_for_the_singleton() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .and(query_param("read_key", "rk-123"))
        .and(query_param("props", "id,title,metadata"))
        .and(query_param("depth", "1"))
        .and(query_param("limit", "1"))
        .and(query_param_contains("query", "\"slug\":\"portfolio-settings\""))
        .respond_with(objects(vec![common::settings_object()]))
        .expect(1)
        .mount(&server)
        .await;

    let settings = service(&server, None)
        .get_portfolio_settings()
        .await
        .unwrap()
        .unwrap();
    assert_eq!(settings.metadata.full_name, "Ada Lovelace");
    assert_eq!(settings.metadata.subtitles().len(), 2);
}

#[tokio::test]
async fn featured_projects_are_filtered_by_the_store_and_sorted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .and(query_param("props", "id,title,slug,metadata"))
        .and(query_param_contains("query", "\"metadata.featured\":true"))
        .and(query_param_contains("query", "\"type\":\"projects\""))
        .respond_with(objects(vec![
            common::project_object("unordered", json!(null), true),
            common::project_object("second", json!(2), true),
            common::project_object("first", json!("1"), true),
        ]))
        .expect(1)
        .mount(&server)
        .await;

    let projects = service(&server, None).get_featured_projects().await.unwrap();
    let slugs: Vec<&str> = projects.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, ["first", "second", "unordered"]);
}

#[tokio::test]
async fn experience_ties_prefer_recent_start() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .and(query_param_contains("query", "\"type\":\"experience\""))
        .respond_with(objects(vec![
            common::experience_object("undated", json!(1), "someday"),
            common::experience_object("old", json!(1), "2020-01"),
            common::experience_object("new", json!(1), "2023-05-01"),
            common::experience_object("pinned", json!(0), "2010"),
        ]))
        .mount(&server)
        .await;

    let experience = service(&server, None).get_experience().await.unwrap();
    let ids: Vec<&str> = experience.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["pinned", "new", "old", "undated"]);
}

#[tokio::test]
async fn bad_read_key_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"status": 401, "message": "Invalid read key"})),
        )
        .mount(&server)
        .await;

    let err = service(&server, None).get_skills().await.unwrap_err();
    assert_eq!(err.collection, "skills");
    assert_eq!(
        err.source,
        StoreError::Unauthorized {
            message: "Invalid read key".to_string()
        }
    );
    assert_eq!(err.to_string(), "Failed to fetch skills: unauthorized: Invalid read key");
}

#[tokio::test]
async fn server_error_without_body_uses_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = service(&server, None).get_projects().await.unwrap_err();
    assert_eq!(
        err.source,
        StoreError::Api {
            status: 503,
            message: "Service Unavailable".to_string()
        }
    );
}

#[tokio::test]
async fn contact_submission_uses_the_write_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(OBJECTS_PATH))
        .and(header("authorization", "Bearer wk-456"))
        .and(body_partial_json(json!({
            "type": "contact-submissions",
            "title": "Contact from Grace",
            "metadata": {"name": "Grace", "email": "grace@example.com", "message": "Hello"}
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"object": {"id": "sub-1", "title": "Contact from Grace"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let outcome = service(&server, Some("wk-456"))
        .submit_contact_form(&ContactForm::new("Grace", "grace@example.com", "Hello"))
        .await;
    assert_eq!(
        outcome,
        SubmissionOutcome::Submitted {
            id: "sub-1".to_string()
        }
    );
}

#[tokio::test]
async fn failed_submission_carries_the_store_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(OBJECTS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .mount(&server)
        .await;

    let outcome = service(&server, Some("wk-456"))
        .submit_contact_form(&ContactForm::new("Grace", "grace@example.com", "Hello"))
        .await;
    assert_eq!(
        outcome,
        SubmissionOutcome::Failed {
            message: "API error (500): boom".to_string()
        }
    );
}

#[tokio::test]
async fn submission_without_write_key_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let outcome = service(&server, None)
        .submit_contact_form(&ContactForm::new("Grace", "grace@example.com", "Hello"))
        .await;
    assert!(!outcome.is_success());
}

#[tokio::test]
async fn page_load_degrades_per_section() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param_contains("query", "\"type\":\"skills\""))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param_contains("query", "\"type\":\"projects\""))
        .respond_with(objects(vec![common::project_object("alpha", json!(1), true)]))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(not_found())
        .mount(&server)
        .await;

    let service = service(&server, None);
    let page = PageLoader::new(&service).load().await;

    assert_eq!(page.settings_source, SettingsSource::BuiltinDefault);
    assert!(page.settings.is_builtin_default());
    assert_eq!(page.projects.len(), 1);
    assert!(page.skills.is_empty());
    assert!(page.experience.is_empty());
    assert_eq!(page.warnings, ["Failed to fetch skills: API error (500): boom"]);
}
