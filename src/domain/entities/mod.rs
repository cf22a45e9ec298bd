//! Domain Entities
//!
//! Typed views of the records kept in the content store.

mod contact;
mod content_object;
mod experience;
mod project;
mod settings;
mod skill;

pub use contact::{ContactError, ContactForm, ContactMetadata, ContactSubmission, NewSubmission};
pub use content_object::{ContentObject, Ordered};
pub use experience::{Experience, ExperienceKind, ExperienceMetadata};
pub use project::{Project, ProjectMetadata, CARD_TECH_LIMIT};
pub use settings::{PortfolioSettings, SettingsMetadata, DEFAULT_SUBTITLES, SETTINGS_SLUG};
pub use skill::{Skill, SkillCategory, SkillMetadata};
