use std::collections::BTreeMap;

use email_address::{EmailAddress, Options};

pub const MIN_MESSAGE_CHARS: usize = 30;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 30 characters";
pub const TOKEN_REQUIRED: &str = "Verify that you are not a bot";

/// Field order doubles as display order for errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
    Token,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub token: String,
}

impl ContactSubmission {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
            Field::Token => self.token = value,
        }
    }

    /// Resets what the visitor typed. The token follows the captcha widget's
    /// own lifecycle and is kept.
    pub fn clear_typed_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, &'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.errors.insert(field, message);
    }

    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, *message))
    }
}

fn check_name(name: &str) -> Option<&'static str> {
    name.is_empty().then_some(NAME_REQUIRED)
}

fn email_options() -> Options {
    Options::default()
        .with_required_tld()
        .without_display_text()
        .without_domain_literal()
}

/// Plain `local@host.tld` only: no quoted local part, and a TLD of at least
/// two letters.
fn is_plain_address(email: &str) -> bool {
    let Ok(address) = EmailAddress::parse_with_options(email, email_options()) else {
        return false;
    };
    if address.local_part().starts_with('"') {
        return false;
    }
    address
        .domain()
        .rsplit('.')
        .next()
        .map_or(false, |tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
}

fn check_email(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        return Some(EMAIL_REQUIRED);
    }
    if is_plain_address(email) {
        None
    } else {
        Some(EMAIL_INVALID)
    }
}

fn check_message(message: &str) -> Option<&'static str> {
    if message.is_empty() {
        Some(MESSAGE_REQUIRED)
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        Some(MESSAGE_TOO_SHORT)
    } else {
        None
    }
}

fn check_token(token: &str) -> Option<&'static str> {
    token.is_empty().then_some(TOKEN_REQUIRED)
}

/// Runs every field rule and collects one message per failing field.
pub fn validate(submission: &ContactSubmission) -> FieldErrors {
    let mut errors = FieldErrors::default();
    let checks = [
        (Field::Name, check_name(&submission.name)),
        (Field::Email, check_email(&submission.email)),
        (Field::Message, check_message(&submission.message)),
        (Field::Token, check_token(&submission.token)),
    ];
    for (field, failure) in checks {
        if let Some(message) = failure {
            errors.insert(field, message);
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission() -> ContactSubmission {
        ContactSubmission {
            name: "Tiger Woods".to_string(),
            email: "tiger@example.com".to_string(),
            message: "I would like a custom milled blade putter.".to_string(),
            token: "abc123".to_string(),
        }
    }

    #[test]
    fn accepts_fully_valid_submission() {
        assert!(validate(&valid_submission()).is_empty());
    }

    #[test]
    fn empty_form_reports_required_messages() {
        let errors = validate(&ContactSubmission::default());
        let collected: Vec<_> = errors.iter().collect();
        assert_eq!(
            collected,
            vec![
                (Field::Name, NAME_REQUIRED),
                (Field::Email, EMAIL_REQUIRED),
                (Field::Message, MESSAGE_REQUIRED),
                (Field::Token, TOKEN_REQUIRED),
            ]
        );
    }

    #[test]
    fn malformed_email_is_invalid_not_missing() {
        let malformed = [
            "tiger",
            "tiger@",
            "@example.com",
            "tiger woods@example.com",
            "tiger@localhost",
            "a@b",
            "tiger@[127.0.0.1]",
            "\"tiger woods\"@example.com",
            "tiger@example.c",
            "Tiger Woods <tiger@example.com>",
        ];
        for email in malformed {
            let mut submission = valid_submission();
            submission.email = email.to_string();
            let errors = validate(&submission);
            assert_eq!(errors.len(), 1, "{email}");
            assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID), "{email}");
        }
    }

    #[test]
    fn accepts_common_address_shapes() {
        for email in ["tiger@example.com", "tiger.woods+putters@mail.example.co.uk", "kevin@origingolf.com"] {
            assert_eq!(check_email(email), None, "{email}");
        }
    }

    #[test]
    fn message_length_boundary_is_thirty_characters() {
        let mut submission = valid_submission();
        submission.message = "x".repeat(29);
        let errors = validate(&submission);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Message), Some(MESSAGE_TOO_SHORT));

        submission.message.push('x');
        assert!(validate(&submission).is_empty());
    }

    #[test]
    fn message_length_counts_characters_not_bytes() {
        let mut submission = valid_submission();
        submission.message = "ä".repeat(MIN_MESSAGE_CHARS);
        assert!(validate(&submission).is_empty());

        submission.message = "ä".repeat(MIN_MESSAGE_CHARS - 1);
        assert_eq!(validate(&submission).get(Field::Message), Some(MESSAGE_TOO_SHORT));
    }

    #[test]
    fn short_message_and_missing_token_fail_together() {
        let mut submission = valid_submission();
        submission.message = "Hello golf".to_string();
        submission.token.clear();

        let errors = validate(&submission);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Message), Some(MESSAGE_TOO_SHORT));
        assert_eq!(errors.get(Field::Token), Some(TOKEN_REQUIRED));
    }

    #[test]
    fn passes_iff_every_rule_passes() {
        let names = ["", "Tiger Woods"];
        let emails = ["", "nope", "tiger@example.com"];
        let messages = ["", "too short", "A message that is certainly long enough."];
        let tokens = ["", "abc123"];

        for name in names {
            for email in emails {
                for message in messages {
                    for token in tokens {
                        let submission = ContactSubmission {
                            name: name.to_string(),
                            email: email.to_string(),
                            message: message.to_string(),
                            token: token.to_string(),
                        };
                        let expected = !name.is_empty()
                            && email == "tiger@example.com"
                            && message.chars().count() >= MIN_MESSAGE_CHARS
                            && !token.is_empty();
                        assert_eq!(validate(&submission).is_empty(), expected, "{submission:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn clearing_typed_fields_keeps_token() {
        let mut submission = valid_submission();
        submission.clear_typed_fields();
        assert_eq!(submission.name, "");
        assert_eq!(submission.email, "");
        assert_eq!(submission.message, "");
        assert_eq!(submission.token, "abc123");
    }
}
