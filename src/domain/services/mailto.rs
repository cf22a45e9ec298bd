//! Mail draft composition for the contact section
//!
//! The contact action hands the visitor's message to their own mail client
//! through a `mailto:` link; nothing is sent over the network.

use crate::domain::entities::ContactForm;

pub fn subject(form: &ContactForm) -> String {
    format!("Portfolio Contact from {}", form.name)
}

pub fn body(form: &ContactForm) -> String {
    format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}",
        form.name, form.email, form.message
    )
}

/// Build a `mailto:` link addressed to `recipient`, pre-filled from `form`
pub fn compose_mailto(recipient: &str, form: &ContactForm) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient.trim(),
        urlencoding::encode(&subject(form)),
        urlencoding::encode(&body(form))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_subject_and_body() {
        let form = ContactForm::new("Ada Lovelace", "ada@example.com", "Hi & bye?");
        let link = compose_mailto("me@example.com", &form);

        insta::assert_snapshot!(link, @"mailto:me@example.com?subject=Portfolio%20Contact%20from%20Ada%20Lovelace&body=Name%3A%20Ada%20Lovelace%0AEmail%3A%20ada%40example.com%0A%0AMessage%3A%0AHi%20%26%20bye%3F");
    }

    #[test]
    fn body_layout() {
        let form = ContactForm::new("Ada", "ada@example.com", "line one\nline two");
        assert_eq!(
            body(&form),
            "Name: Ada\nEmail: ada@example.com\n\nMessage:\nline one\nline two"
        );
        assert_eq!(subject(&form), "Portfolio Contact from Ada");
    }
}
