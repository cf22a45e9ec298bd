//! Experience Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::content_object::{ContentObject, Ordered};
use crate::domain::value_objects::{
    lenient_choice, month_year_label, parse_content_date, Choice, DisplayOrder,
};

pub type Experience = ContentObject<ExperienceMetadata>;

/// Kind of engagement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceKind {
    Internship,
    Project,
    Freelance,
    Fulltime,
}

impl ExperienceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceKind::Internship => "Internship",
            ExperienceKind::Project => "Major Project",
            ExperienceKind::Freelance => "Freelance",
            ExperienceKind::Fulltime => "Full-Time",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceMetadata {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient_choice")]
    pub kind: Option<Choice<ExperienceKind>>,
    #[serde(default)]
    pub order: DisplayOrder,
}

impl Ordered for ExperienceMetadata {
    fn display_order(&self) -> DisplayOrder {
        self.order
    }
}

impl ExperienceMetadata {
    /// No end date means the engagement is still running
    pub fn is_ongoing(&self) -> bool {
        self.end_date
            .as_deref()
            .map(|d| d.trim().is_empty())
            .unwrap_or(true)
    }

    /// Parsed start date; `None` when the field cannot be read as a date
    pub fn start(&self) -> Option<DateTime<Utc>> {
        parse_content_date(&self.start_date)
    }

    pub fn kind(&self) -> Option<ExperienceKind> {
        self.kind.as_ref().map(|k| k.key)
    }

    /// `"Jan 2022 - Present"` style range
    pub fn date_range_label(&self) -> String {
        let start = month_year_label(&self.start_date);
        let end = match self.end_date.as_deref() {
            Some(end) if !end.trim().is_empty() => month_year_label(end),
            _ => "Present".to_string(),
        };
        format!("{start} - {end}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn experience(json: &str) -> Experience {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn missing_end_date_is_ongoing() {
        let e = experience(
            r#"{"id": "e1", "metadata": {"company_name": "Acme", "role": "Engineer", "start_date": "2022-01-10", "type": {"key": "fulltime", "value": "Full-Time"}}}"#,
        );
        assert!(e.metadata.is_ongoing());
        assert_eq!(e.metadata.date_range_label(), "Jan 2022 - Present");
        assert_eq!(e.metadata.kind(), Some(ExperienceKind::Fulltime));
    }

    #[test]
    fn finished_engagement_has_closed_range() {
        let e = experience(
            r#"{"id": "e1", "metadata": {"start_date": "2021-06", "end_date": "2021-09-30", "type": {"key": "internship"}}}"#,
        );
        assert!(!e.metadata.is_ongoing());
        assert_eq!(e.metadata.date_range_label(), "Jun 2021 - Sep 2021");
        assert_eq!(e.metadata.kind().map(|k| k.label()), Some("Internship"));
    }

    #[test]
    fn unknown_kind_is_dropped() {
        let e = experience(
            r#"{"id": "e1", "metadata": {"role": "Mentor", "start_date": "2023-02", "type": {"key": "volunteer", "value": "Volunteer"}}}"#,
        );
        assert_eq!(e.metadata.role, "Mentor");
        assert_eq!(e.metadata.kind(), None);
    }

    #[test]
    fn blank_end_date_is_ongoing() {
        let e = experience(r#"{"id": "e1", "metadata": {"start_date": "2020", "end_date": ""}}"#);
        assert!(e.metadata.is_ongoing());
        assert!(e.metadata.start().is_some());
    }
}
