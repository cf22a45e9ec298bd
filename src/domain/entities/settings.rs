//! Portfolio Settings Entity
//!
//! Singleton holding identity, contact details and the hero subtitles.

use serde::{Deserialize, Deserializer, Serialize};

use super::content_object::ContentObject;
use crate::domain::value_objects::{optional_media, ContentType, MediaAsset};

/// Fixed slug of the settings singleton
pub const SETTINGS_SLUG: &str = "portfolio-settings";

/// Subtitles typed in the hero when none are configured
pub const DEFAULT_SUBTITLES: [&str; 3] = [
    "Building scalable web applications",
    "Creating interactive digital experiences",
    "Turning ideas into reality with code",
];

pub type PortfolioSettings = ContentObject<SettingsMetadata>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsMetadata {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default, deserialize_with = "string_list")]
    pub animated_subtitles: Vec<String>,
    #[serde(default)]
    pub about_me: String,
    #[serde(default, deserialize_with = "optional_media")]
    pub profile_image: Option<MediaAsset>,
    #[serde(default, deserialize_with = "optional_media")]
    pub resume_pdf: Option<MediaAsset>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub twitter_url: Option<String>,
}

impl SettingsMetadata {
    /// Subtitles for the hero animation, falling back to [`DEFAULT_SUBTITLES`]
    pub fn subtitles(&self) -> Vec<String> {
        if self.animated_subtitles.is_empty() {
            DEFAULT_SUBTITLES.iter().map(|s| s.to_string()).collect()
        } else {
            self.animated_subtitles.clone()
        }
    }

    /// Configured social links as `(label, url)`, skipping blank ones
    pub fn social_links(&self) -> Vec<(&'static str, &str)> {
        [
            ("GitHub", self.github_url.as_deref()),
            ("LinkedIn", self.linkedin_url.as_deref()),
            ("Twitter", self.twitter_url.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| {
            url.map(str::trim)
                .filter(|u| !u.is_empty())
                .map(|u| (label, u))
        })
        .collect()
    }
}

impl PortfolioSettings {
    /// Settings shown when the store has none (or cannot be reached)
    pub fn builtin_default() -> Self {
        ContentObject {
            id: "default".to_string(),
            slug: "default-settings".to_string(),
            title: "Portfolio Settings".to_string(),
            content: None,
            kind: ContentType::PortfolioSettings.as_str().to_string(),
            created_at: None,
            modified_at: None,
            metadata: SettingsMetadata {
                full_name: "Temitope Glover".to_string(),
                job_title: "Full Stack Developer".to_string(),
                animated_subtitles: DEFAULT_SUBTITLES.iter().map(|s| s.to_string()).collect(),
                about_me: "Passionate Full-Stack Developer with expertise in JavaScript, React, \
                           Node.js, and modern web technologies."
                    .to_string(),
                profile_image: Some(MediaAsset {
                    url: "https://cdn.cosmicjs.com/5c293340-f8ad-11f0-a549-3b8c82c059da-WhatsApp-Image-2026-01-21-at-01-19-23.jpeg".to_string(),
                    imgix_url: "https://imgix.cosmicjs.com/5c293340-f8ad-11f0-a549-3b8c82c059da-WhatsApp-Image-2026-01-21-at-01-19-23.jpeg".to_string(),
                }),
                resume_pdf: Some(MediaAsset::from_url("/resume.pdf")),
                email: "Topeglover06@gmail.com".to_string(),
                github_url: Some("https://github.com/Temitope741".to_string()),
                linkedin_url: Some(String::new()),
                twitter_url: Some(String::new()),
            },
        }
    }

    /// True if this is the built-in default rather than stored settings
    pub fn is_builtin_default(&self) -> bool {
        self.id == "default"
    }
}

// Editors sometimes leave a list metafield as `null` or `""`.
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<String>),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(Raw::List(items)) => items
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Raw::Text(text)) if text.trim().is_empty() => Vec::new(),
        Some(Raw::Text(text)) => vec![text.trim().to_string()],
    })
}
