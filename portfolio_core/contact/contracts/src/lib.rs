use std::future::Future;

use portfolio_models::contact::{ContactSubmission, ContactSubmissionRequest};
use thiserror::Error;

pub trait ContactFeatureService: Send + Sync + 'static {
    /// Record a validated contact form entry and notify the site owner.
    ///
    /// A failed notification does not fail the submission, it is reported via
    /// [`ContactSubmitted::email_sent`] instead.
    fn submit(
        &self,
        request: ContactSubmissionRequest,
    ) -> impl Future<Output = Result<ContactSubmitted, ContactSubmitError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmitted {
    pub submission: ContactSubmission,
    pub email_sent: bool,
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("Failed to store contact submission.")]
    Storage(#[source] anyhow::Error),
}

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactNotificationService: Send + Sync + 'static {
    /// Email the site owner about a new submission.
    ///
    /// Returns `false` if the email could not be delivered in time.
    fn notify(&self, submission: ContactSubmission) -> impl Future<Output = bool> + Send;
}

#[cfg(feature = "mock")]
impl MockContactNotificationService {
    pub fn with_notify(mut self, submission: ContactSubmission, result: bool) -> Self {
        self.expect_notify()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
