//! Page Section Value Object

use std::fmt;

use serde::{Deserialize, Serialize};

/// Anchored section of the single-page portfolio, in page order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    /// Anchor id of the section (`#<id>` scrolls to it)
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About Me",
            Section::Skills => "Skills & Expertise",
            Section::Experience => "Experience",
            Section::Projects => "Featured Projects",
            Section::Contact => "Get In Touch",
        }
    }

    /// In-page link to the section
    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}
