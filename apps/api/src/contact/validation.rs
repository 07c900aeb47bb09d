use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const NAME_MAX: usize = 100;
pub const SUBJECT_MAX: usize = 200;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 2000;

struct LengthRule {
    field: &'static str,
    min: usize,
    max: usize,
    too_short: &'static str,
    too_long: &'static str,
}

const NAME_RULE: LengthRule = LengthRule {
    field: "name",
    min: 1,
    max: NAME_MAX,
    too_short: "Name is required",
    too_long: "Name must be less than 100 characters",
};

const SUBJECT_RULE: LengthRule = LengthRule {
    field: "subject",
    min: 1,
    max: SUBJECT_MAX,
    too_short: "Subject is required",
    too_long: "Subject must be less than 200 characters",
};

const MESSAGE_RULE: LengthRule = LengthRule {
    field: "message",
    min: MESSAGE_MIN,
    max: MESSAGE_MAX,
    too_short: "Message must be at least 10 characters",
    too_long: "Message must be less than 2000 characters",
};

/// A contact form submission that passed validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Local part of `[A-Za-z0-9_'+.-]` ending in a non-dot, then one or more
/// alphanumeric-led domain labels and an alphabetic TLD of 2+ letters.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email pattern is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

/// Validates a decoded JSON body, collecting every field error in field order.
pub fn validate_submission(body: &Value) -> Result<ContactSubmission, Vec<FieldError>> {
    if !body.is_object() {
        return Err(vec![FieldError::new("body", "Expected object")]);
    }

    let mut errors = Vec::new();

    let name = string_field(body, "name", &mut errors);
    if let Some(name) = name {
        check_length(name, &NAME_RULE, &mut errors);
    }

    let email = string_field(body, "email", &mut errors);
    if let Some(email) = email {
        if !is_valid_email(email) {
            errors.push(FieldError::new(
                "email",
                "Please enter a valid email address",
            ));
        }
    }

    let subject = string_field(body, "subject", &mut errors);
    if let Some(subject) = subject {
        check_length(subject, &SUBJECT_RULE, &mut errors);
    }

    let message = string_field(body, "message", &mut errors);
    if let Some(message) = message {
        check_length(message, &MESSAGE_RULE, &mut errors);
    }

    match (name, email, subject, message) {
        (Some(name), Some(email), Some(subject), Some(message)) if errors.is_empty() => {
            Ok(ContactSubmission {
                name: name.to_string(),
                email: email.to_string(),
                subject: subject.to_string(),
                message: message.to_string(),
            })
        }
        _ => Err(errors),
    }
}

fn string_field<'a>(body: &'a Value, field: &str, errors: &mut Vec<FieldError>) -> Option<&'a str> {
    match body.get(field) {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(field, "Required"));
            None
        }
        Some(Value::String(s)) => Some(s.as_str()),
        Some(_) => {
            errors.push(FieldError::new(field, "Expected string"));
            None
        }
    }
}

fn check_length(value: &str, rule: &LengthRule, errors: &mut Vec<FieldError>) {
    let len = value.chars().count();
    if len < rule.min {
        errors.push(FieldError::new(rule.field, rule.too_short));
    } else if len > rule.max {
        errors.push(FieldError::new(rule.field, rule.too_long));
    }
}
