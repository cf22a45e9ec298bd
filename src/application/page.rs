//! Page Loader
//!
//! Loads everything the portfolio page shows in one go. The four reads run
//! concurrently and each falls back on its own: a failed collection renders
//! empty, missing or failed settings render the built-in defaults.

use serde::Serialize;

use super::content::{ContentService, FetchError};
use crate::domain::entities::{Experience, PortfolioSettings, Project, Skill};

/// Where the displayed settings came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsSource {
    Store,
    BuiltinDefault,
}

/// Everything one page render needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageContent {
    pub settings: PortfolioSettings,
    pub settings_source: SettingsSource,
    /// Every project, featured ones badged by the view
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    /// One line per section that fell back after a failed read
    pub warnings: Vec<String>,
}

pub struct PageLoader<'a> {
    service: &'a ContentService,
}

impl<'a> PageLoader<'a> {
    pub fn new(service: &'a ContentService) -> Self {
        Self { service }
    }

    pub async fn load(&self) -> PageContent {
        let (settings, projects, skills, experience) = tokio::join!(
            self.service.get_portfolio_settings(),
            self.service.get_projects(),
            self.service.get_skills(),
            self.service.get_experience(),
        );

        let mut warnings = Vec::new();

        let (settings, settings_source) = match settings {
            Ok(Some(settings)) => (settings, SettingsSource::Store),
            Ok(None) => (PortfolioSettings::builtin_default(), SettingsSource::BuiltinDefault),
            Err(err) => {
                record(&mut warnings, &err);
                (PortfolioSettings::builtin_default(), SettingsSource::BuiltinDefault)
            }
        };

        PageContent {
            settings,
            settings_source,
            projects: or_empty(projects, &mut warnings),
            skills: or_empty(skills, &mut warnings),
            experience: or_empty(experience, &mut warnings),
            warnings,
        }
    }
}

fn or_empty<T>(result: Result<Vec<T>, FetchError>, warnings: &mut Vec<String>) -> Vec<T> {
    result.unwrap_or_else(|err| {
        record(warnings, &err);
        Vec::new()
    })
}

fn record(warnings: &mut Vec<String>, err: &FetchError) {
    tracing::error!(collection = err.collection, error = %err.source, "falling back");
    warnings.push(err.to_string());
}
