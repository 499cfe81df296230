use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use portfolio_models::contact::{ContactSubmission, ContactSubmissionId, ContactSubmissionRequest};

pub static JANE: LazyLock<ContactSubmissionRequest> = LazyLock::new(|| ContactSubmissionRequest {
    name: "Jane".try_into().unwrap(),
    email: "jane@x.com".parse().unwrap(),
    subject: "Hello".try_into().unwrap(),
    message: "This is a sufficiently long message.".try_into().unwrap(),
});

pub static JOHN: LazyLock<ContactSubmissionRequest> = LazyLock::new(|| ContactSubmissionRequest {
    name: "John Doe".try_into().unwrap(),
    email: "john.doe@example.com".parse().unwrap(),
    subject: "Freelance project".try_into().unwrap(),
    message: "Hi!\nAre you available for a short project in June?\n\nBest,\nJohn"
        .try_into()
        .unwrap(),
});

pub static JANE_1: LazyLock<ContactSubmission> = LazyLock::new(|| {
    ContactSubmission::new(
        ContactSubmissionId::new(1),
        JANE.clone(),
        Utc.with_ymd_and_hms(2024, 3, 14, 13, 37, 42).unwrap(),
    )
});

pub static JOHN_2: LazyLock<ContactSubmission> = LazyLock::new(|| {
    ContactSubmission::new(
        ContactSubmissionId::new(2),
        JOHN.clone(),
        Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap(),
    )
});
