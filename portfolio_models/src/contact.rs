use std::fmt;

use chrono::{DateTime, Utc};
use nutype::nutype;
use serde_json::{Map, Value};

use crate::{email_address::EmailAddress, macros::id};

id!(ContactSubmissionId);

/// A contact form entry that has been accepted and recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub id: ContactSubmissionId,
    pub name: ContactSubmissionName,
    pub email: EmailAddress,
    pub subject: ContactSubmissionSubject,
    pub message: ContactSubmissionMessage,
    pub submitted_at: DateTime<Utc>,
}

/// A validated contact form entry which has not been recorded yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmissionRequest {
    pub name: ContactSubmissionName,
    pub email: EmailAddress,
    pub subject: ContactSubmissionSubject,
    pub message: ContactSubmissionMessage,
}

impl ContactSubmission {
    pub fn new(
        id: ContactSubmissionId,
        request: ContactSubmissionRequest,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        let ContactSubmissionRequest {
            name,
            email,
            subject,
            message,
        } = request;

        Self {
            id,
            name,
            email,
            subject,
            message,
            submitted_at,
        }
    }
}

/// Ends up in the `Reply-To` header of the notification email, so control
/// characters like line breaks are rejected.
#[nutype(
    sanitize(trim),
    validate(
        not_empty,
        len_char_max = 256,
        predicate = |name: &str| !name.chars().any(char::is_control)
    ),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactSubmissionName(String);

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactSubmissionSubject(String);

#[nutype(
    validate(len_char_min = 10, len_char_max = 10000),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactSubmissionMessage(String);

impl ContactSubmissionRequest {
    /// Validates an untyped request body.
    ///
    /// Every field is checked, so the returned [`ValidationErrors`] contain all
    /// violated constraints instead of only the first one. Values of the wrong
    /// JSON type are reported like any other violation.
    pub fn validate(input: &Value) -> Result<Self, ValidationErrors> {
        let Some(object) = input.as_object() else {
            return Err(ValidationErrors(vec![ValidationIssue {
                field: None,
                reason: format!("Expected object, received {}", type_name(input)),
            }]));
        };

        let mut issues = Vec::new();

        let name = string_field(object, "name", &mut issues).and_then(|name| {
            ContactSubmissionName::try_new(name)
                .map_err(|err| {
                    let reason = match err {
                        ContactSubmissionNameError::NotEmptyViolated => "Name is required",
                        ContactSubmissionNameError::LenCharMaxViolated => {
                            "Name must be at most 256 characters long"
                        }
                        ContactSubmissionNameError::PredicateViolated => {
                            "Name must not contain line breaks or control characters"
                        }
                    };
                    issues.push(ValidationIssue::new("name", reason));
                })
                .ok()
        });

        let email = string_field(object, "email", &mut issues).and_then(|email| {
            email
                .trim()
                .parse::<EmailAddress>()
                .map_err(|_| {
                    issues.push(ValidationIssue::new(
                        "email",
                        "Please enter a valid email address",
                    ))
                })
                .ok()
        });

        let subject = string_field(object, "subject", &mut issues).and_then(|subject| {
            ContactSubmissionSubject::try_new(subject)
                .map_err(|err| {
                    let reason = match err {
                        ContactSubmissionSubjectError::NotEmptyViolated => "Subject is required",
                        ContactSubmissionSubjectError::LenCharMaxViolated => {
                            "Subject must be at most 256 characters long"
                        }
                    };
                    issues.push(ValidationIssue::new("subject", reason));
                })
                .ok()
        });

        let message = string_field(object, "message", &mut issues).and_then(|message| {
            ContactSubmissionMessage::try_new(message)
                .map_err(|err| {
                    let reason = match err {
                        ContactSubmissionMessageError::LenCharMinViolated => {
                            "Message must be at least 10 characters long"
                        }
                        ContactSubmissionMessageError::LenCharMaxViolated => {
                            "Message must be at most 10000 characters long"
                        }
                    };
                    issues.push(ValidationIssue::new("message", reason));
                })
                .ok()
        });

        match (name, email, subject, message) {
            (Some(name), Some(email), Some(subject), Some(message)) if issues.is_empty() => {
                Ok(Self {
                    name,
                    email,
                    subject,
                    message,
                })
            }
            _ => Err(ValidationErrors(issues)),
        }
    }
}

fn string_field<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<&'a str> {
    match object.get(field) {
        Some(Value::String(value)) => Some(value),
        None => {
            issues.push(ValidationIssue::new(field, "Required"));
            None
        }
        Some(other) => {
            issues.push(ValidationIssue::new(
                field,
                format!("Expected string, received {}", type_name(other)),
            ));
            None
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// All constraint violations of a rejected contact form entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<ValidationIssue>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// `None` if the input as a whole is malformed.
    pub field: Option<&'static str>,
    pub reason: String,
}

impl ValidationIssue {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field: Some(field),
            reason: reason.into(),
        }
    }
}

impl ValidationErrors {
    /// Creates a failure for an input that could not be interpreted at all,
    /// e.g. a body that is not valid JSON.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self(vec![ValidationIssue {
            field: None,
            reason: reason.into(),
        }])
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.0
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field {
            Some(field) => write!(f, "{} at \"{field}\"", self.reason),
            None => f.write_str(&self.reason),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validation error: ")?;
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            issue.fmt(f)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
