use std::future::Future;

use portfolio_models::contact::{ContactSubmission, ContactSubmissionId, ContactSubmissionRequest};

/// Record keeping for accepted contact form entries.
///
/// Records are immutable once created and are never deleted.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactSubmissionRepository: Send + Sync + 'static {
    /// Store a new submission.
    ///
    /// The repository assigns the next identifier and stamps the current
    /// time. Concurrent calls never receive the same identifier.
    fn create(
        &self,
        request: ContactSubmissionRequest,
    ) -> impl Future<Output = anyhow::Result<ContactSubmission>> + Send;

    /// Return the submission with the given id.
    fn get(
        &self,
        id: ContactSubmissionId,
    ) -> impl Future<Output = anyhow::Result<Option<ContactSubmission>>> + Send;

    /// Return all submissions in the order they were created.
    fn list(&self) -> impl Future<Output = anyhow::Result<Vec<ContactSubmission>>> + Send;
}

#[cfg(feature = "mock")]
impl MockContactSubmissionRepository {
    pub fn with_create(
        mut self,
        request: ContactSubmissionRequest,
        result: Option<ContactSubmission>,
    ) -> Self {
        self.expect_create()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(move |_| {
                Box::pin(std::future::ready(
                    result.ok_or_else(|| anyhow::anyhow!("storage unavailable")),
                ))
            });
        self
    }
}
