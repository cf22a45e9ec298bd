//! Project Entity

use serde::{Deserialize, Serialize};

use super::content_object::{ContentObject, Ordered};
use crate::domain::value_objects::{optional_media, DisplayOrder, MediaAsset};

/// Technology tags shown on a project card; the detail view shows all
pub const CARD_TECH_LIMIT: usize = 3;

pub type Project = ContentObject<ProjectMetadata>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default, deserialize_with = "tags")]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "optional_media")]
    pub project_image: Option<MediaAsset>,
    #[serde(default)]
    pub live_demo_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order: DisplayOrder,
}

impl Ordered for ProjectMetadata {
    fn display_order(&self) -> DisplayOrder {
        self.order
    }
}

impl ProjectMetadata {
    /// Tags for the compact card view
    pub fn card_technologies(&self) -> &[String] {
        let end = self.technologies.len().min(CARD_TECH_LIMIT);
        &self.technologies[..end]
    }

    /// Long description, or the short one when none was written
    pub fn description(&self) -> &str {
        self.full_description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(&self.short_description)
    }

    pub fn demo_url(&self) -> Option<&str> {
        non_blank(self.live_demo_url.as_deref())
    }

    pub fn repo_url(&self) -> Option<&str> {
        non_blank(self.github_url.as_deref())
    }
}

impl Project {
    /// Name shown for the project (falls back to the object title)
    pub fn display_name(&self) -> &str {
        if self.metadata.project_name.trim().is_empty() {
            &self.title
        } else {
            &self.metadata.project_name
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// Check-box metafields arrive as a list; older objects stored a comma list.
fn tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<String>),
        Text(String),
    }

    let raw = Option::<Raw>::deserialize(deserializer)?;
    let items = match raw {
        None => Vec::new(),
        Some(Raw::List(items)) => items,
        Some(Raw::Text(text)) => text.split(',').map(str::to_string).collect(),
    };
    Ok(items
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect())
}
