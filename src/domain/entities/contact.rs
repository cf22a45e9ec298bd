//! Contact Form and Submission Entities
//!
//! A `ContactForm` is what the visitor typed. It either becomes a mail
//! draft (`mailto:` link) or a write-only `contact-submissions` object.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::content_object::ContentObject;
use crate::domain::value_objects::ContentType;

pub type ContactSubmission = ContentObject<ContactMetadata>;

/// Reasons a contact form cannot be sent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("'{email}' is not a valid email address")]
    InvalidEmail { email: String },
}

/// Visitor input from the contact section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Check that every field is filled in and the email looks deliverable
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField { field });
            }
        }

        let email = self.email.trim();
        let valid = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.is_empty()
                    && !domain.contains('@')
                    && !email.contains(char::is_whitespace)
            }
            None => false,
        };
        if !valid {
            return Err(ContactError::InvalidEmail {
                email: email.to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMetadata {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_date: Option<String>,
}

/// Body of the insert request that records a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSubmission {
    #[serde(rename = "type")]
    pub kind: ContentType,
    pub title: String,
    pub metadata: ContactMetadata,
}

impl NewSubmission {
    /// Stamp `form` with `submitted_at` (RFC 3339, millisecond precision, UTC)
    pub fn from_form(form: &ContactForm, submitted_at: DateTime<Utc>) -> Self {
        Self {
            kind: ContentType::ContactSubmissions,
            title: format!("Contact from {}", form.name.trim()),
            metadata: ContactMetadata {
                name: form.name.trim().to_string(),
                email: form.email.trim().to_string(),
                message: form.message.clone(),
                submission_date: Some(submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
            },
        }
    }
}
