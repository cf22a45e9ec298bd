//! Property tests for contact form validation and mail drafts.

use proptest::prelude::*;

use vitrine::{compose_mailto, ContactForm};

fn field() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 &?=#%+\n]{0,30}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The draft link is a single token with subject and body encoded.
    #[test]
    fn property_mailto_has_no_raw_separators(name in field(), message in field()) {
        let form = ContactForm::new(name, "visitor@example.com", message);
        let link = compose_mailto("owner@example.com", &form);

        prop_assert!(link.starts_with("mailto:owner@example.com?subject="));
        prop_assert!(!link.contains(char::is_whitespace));
        prop_assert_eq!(link.matches('&').count(), 1);
        prop_assert_eq!(link.matches('?').count(), 1);
    }

    /// PROPERTY: A blank field is always rejected, whatever the others hold.
    #[test]
    fn property_blank_fields_are_rejected(
        message in field(),
        blank in proptest::string::string_regex("[ \t\n]{0,4}").unwrap(),
    ) {
        let form = ContactForm::new(blank.clone(), "visitor@example.com", message);
        prop_assert!(form.validate().is_err());

        let form = ContactForm::new("Ada", "visitor@example.com", blank);
        prop_assert!(form.validate().is_err());
    }
}
