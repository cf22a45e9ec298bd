//! Shared helpers for the integration tests.
//!
//! - Sample content objects in the store's wire shape
//! - `Fixture`: a content fixture file in a temp directory
//! - `vitrine()`: a command for the built binary with a clean environment

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::{json, Value};
use tempfile::TempDir;

pub fn settings_object() -> Value {
    json!({
        "id": "settings-1",
        "slug": "portfolio-settings",
        "title": "Portfolio Settings",
        "type": "portfolio-settings",
        "metadata": {
            "full_name": "Ada Lovelace",
            "job_title": "Analytical Engineer",
            "animated_subtitles": ["Writing the first program", "Reading Bernoulli numbers"],
            "about_me": "I write notes on engines.",
            "email": "ada@example.com",
            "github_url": "https://github.com/ada",
            "linkedin_url": "",
            "twitter_url": null
        }
    })
}

pub fn project_object(id: &str, order: Value, featured: bool) -> Value {
    json!({
        "id": id,
        "slug": id,
        "title": id,
        "type": "projects",
        "metadata": {
            "project_name": format!("Project {id}"),
            "short_description": format!("About {id}"),
            "technologies": ["Rust", "Tokio", "Serde", "Reqwest"],
            "featured": featured,
            "order": order
        }
    })
}

pub fn skill_object(id: &str, category: &str, order: Value) -> Value {
    json!({
        "id": id,
        "slug": id,
        "title": id,
        "type": "skills",
        "metadata": {
            "skill_name": id,
            "category": {"key": category, "value": category},
            "proficiency_level": 80,
            "order": order
        }
    })
}

pub fn experience_object(id: &str, order: Value, start: &str) -> Value {
    json!({
        "id": id,
        "slug": id,
        "title": id,
        "type": "experience",
        "metadata": {
            "company_name": format!("Company {id}"),
            "role": "Engineer",
            "start_date": start,
            "type": {"key": "fulltime", "value": "Full-Time"},
            "order": order
        }
    })
}

/// A complete small portfolio
pub fn sample_objects() -> Vec<Value> {
    vec![
        settings_object(),
        project_object("beta", json!(2), true),
        project_object("alpha", json!(1), true),
        project_object("hidden", json!(3), false),
        skill_object("rust", "backend", json!(1)),
        skill_object("react", "frontend", json!(2)),
        experience_object("old", json!(1), "2020-01"),
        experience_object("new", json!(1), "2023-05"),
    ]
}

/// Content fixture file in its own temp directory
pub struct Fixture {
    dir: TempDir,
    path: PathBuf,
}

impl Fixture {
    pub fn new(objects: Vec<Value>) -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(&path, serde_json::to_string_pretty(&json!({ "objects": objects })).unwrap())
            .unwrap();
        Self { dir, path }
    }

    pub fn sample() -> Self {
        Self::new(sample_objects())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

/// The vitrine binary, run in `cwd` with no store credentials in the env
pub fn vitrine(cwd: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_vitrine"));
    cmd.current_dir(cwd)
        .env("XDG_CONFIG_HOME", cwd.join("xdg"))
        .env("HOME", cwd)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    for var in [
        "VITRINE_BUCKET_SLUG",
        "VITRINE_READ_KEY",
        "VITRINE_WRITE_KEY",
        "VITRINE_API_URL",
        "VITRINE_WRITE_URL",
        "VITRINE_COLOR",
    ] {
        cmd.env_remove(var);
    }
    cmd
}
