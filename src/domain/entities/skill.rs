//! Skill Entity

use serde::{Deserialize, Serialize};

use super::content_object::{ContentObject, Ordered};
use crate::domain::value_objects::{lenient_choice, optional_number, Choice, DisplayOrder};

pub type Skill = ContentObject<SkillMetadata>;

/// Fixed set of skill categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
}

impl SkillCategory {
    /// Display order of the category groups
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Tools,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Tools => "Tools & Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMetadata {
    #[serde(default)]
    pub skill_name: String,
    /// Unrecognized keys decode as `None` and land in the "Other" group
    #[serde(default, deserialize_with = "lenient_choice")]
    pub category: Option<Choice<SkillCategory>>,
    #[serde(default, deserialize_with = "optional_number")]
    pub proficiency_level: Option<f64>,
    #[serde(default)]
    pub icon_emoji: Option<String>,
    #[serde(default)]
    pub order: DisplayOrder,
}

impl Ordered for SkillMetadata {
    fn display_order(&self) -> DisplayOrder {
        self.order
    }
}

impl SkillMetadata {
    pub fn category(&self) -> Option<SkillCategory> {
        self.category.as_ref().map(|c| c.key)
    }

    /// Proficiency as a whole percentage, clamped to 0..=100
    ///
    /// Zero is treated as "not rated".
    pub fn proficiency(&self) -> Option<u8> {
        self.proficiency_level
            .filter(|p| p.is_finite())
            .map(|p| p.round().clamp(0.0, 100.0) as u8)
            .filter(|p| *p > 0)
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon_emoji
            .as_deref()
            .map(str::trim)
            .filter(|i| !i.is_empty())
    }
}
