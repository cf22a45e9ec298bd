//! Output Rendering
//!
//! Machine-readable shapes of the command results. Text rendering lives
//! with the terminal views in the binary.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::application::{PageContent, SubmissionOutcome};
use crate::domain::entities::{Experience, PortfolioSettings, Project, Skill};
use crate::domain::services::{group_by_category, SkillGroup};
use crate::domain::value_objects::Section;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Skills grouped for display, flattened for JSON
#[derive(Debug, Serialize)]
pub struct SkillGroupJson<'a> {
    pub label: &'static str,
    pub skills: &'a [&'a Skill],
}

fn groups_json(groups: &[SkillGroup<'_>]) -> Value {
    let groups: Vec<SkillGroupJson<'_>> = groups
        .iter()
        .map(|g| SkillGroupJson {
            label: g.label,
            skills: &g.skills,
        })
        .collect();
    serde_json::to_value(groups).unwrap_or(Value::Null)
}

fn to_json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// JSON for the requested page sections, keyed by section anchor
///
/// An empty selection means every section.
pub fn page_json(page: &PageContent, sections: &[Section]) -> Value {
    let selected: Vec<Section> = if sections.is_empty() {
        Section::ALL.to_vec()
    } else {
        let mut s = sections.to_vec();
        s.sort();
        s.dedup();
        s
    };

    let mut out = Map::new();
    for section in selected {
        let value = match section {
            Section::Home => json!({
                "full_name": page.settings.metadata.full_name,
                "job_title": page.settings.metadata.job_title,
                "subtitles": page.settings.metadata.subtitles(),
            }),
            Section::About => json!({
                "about_me": page.settings.metadata.about_me,
                "profile_image": page.settings.metadata.profile_image,
                "resume_pdf": page.settings.metadata.resume_pdf,
            }),
            Section::Skills => groups_json(&group_by_category(&page.skills)),
            Section::Experience => to_json(&page.experience),
            Section::Projects => to_json(&page.projects),
            Section::Contact => json!({
                "email": page.settings.metadata.email,
                "links": page
                    .settings
                    .metadata
                    .social_links()
                    .into_iter()
                    .map(|(label, url)| json!({"label": label, "url": url}))
                    .collect::<Vec<_>>(),
            }),
        };
        out.insert(section.anchor().to_string(), value);
    }

    out.insert("settings_source".to_string(), to_json(&page.settings_source));
    out.insert("warnings".to_string(), to_json(&page.warnings));
    Value::Object(out)
}

pub fn settings_json(settings: &PortfolioSettings, from_store: bool) -> Value {
    json!({
        "source": if from_store { "store" } else { "builtin_default" },
        "settings": settings,
    })
}

pub fn projects_json(projects: &[Project]) -> Value {
    to_json(&projects)
}

pub fn skills_json(skills: &[Skill]) -> Value {
    groups_json(&group_by_category(skills))
}

pub fn experience_json(experience: &[Experience]) -> Value {
    to_json(&experience)
}

pub fn submission_json(outcome: &SubmissionOutcome) -> Value {
    to_json(outcome)
}
