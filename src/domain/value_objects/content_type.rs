//! Content Type Value Object
//!
//! Discriminates the kinds of objects kept in the remote content store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a content object (the store's `type` field)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    /// Singleton site settings
    PortfolioSettings,
    Projects,
    Skills,
    Experience,
    /// Write-only contact form submissions
    ContactSubmissions,
}

impl ContentType {
    /// Slug used by the store for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::PortfolioSettings => "portfolio-settings",
            ContentType::Projects => "projects",
            ContentType::Skills => "skills",
            ContentType::Experience => "experience",
            ContentType::ContactSubmissions => "contact-submissions",
        }
    }

    /// Human label used in error messages ("Failed to fetch <label>")
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::PortfolioSettings => "portfolio settings",
            ContentType::Projects => "projects",
            ContentType::Skills => "skills",
            ContentType::Experience => "experience",
            ContentType::ContactSubmissions => "contact submissions",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
