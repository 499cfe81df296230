use portfolio_core_contact_contracts::{
    ContactFeatureService, ContactNotificationService, ContactSubmitError, ContactSubmitted,
};
use portfolio_models::contact::ContactSubmissionRequest;
use portfolio_persistence_contracts::contact::ContactSubmissionRepository;
use tracing::{error, info};

pub mod notification;

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Repo, Notification> {
    repo: Repo,
    notification: Notification,
}

impl<Repo, Notification> ContactFeatureServiceImpl<Repo, Notification> {
    pub fn new(repo: Repo, notification: Notification) -> Self {
        Self { repo, notification }
    }
}

impl<Repo, Notification> ContactFeatureService for ContactFeatureServiceImpl<Repo, Notification>
where
    Repo: ContactSubmissionRepository,
    Notification: ContactNotificationService,
{
    #[tracing::instrument(skip_all)]
    async fn submit(
        &self,
        request: ContactSubmissionRequest,
    ) -> Result<ContactSubmitted, ContactSubmitError> {
        let submission = self
            .repo
            .create(request)
            .await
            .inspect_err(|err| error!("Failed to store contact submission: {err:#}"))
            .map_err(ContactSubmitError::Storage)?;

        info!(id = %submission.id, "Contact submission stored");

        let email_sent = self.notification.notify(submission.clone()).await;

        Ok(ContactSubmitted {
            submission,
            email_sent,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use portfolio_core_contact_contracts::MockContactNotificationService;
    use portfolio_demo::contact::{JANE, JANE_1};
    use portfolio_persistence_contracts::contact::MockContactSubmissionRepository;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn ok() {
        // Arrange
        let repo =
            MockContactSubmissionRepository::new().with_create(JANE.clone(), Some(JANE_1.clone()));
        let notification = MockContactNotificationService::new().with_notify(JANE_1.clone(), true);

        let sut = ContactFeatureServiceImpl::new(repo, notification);

        // Act
        let result = sut.submit(JANE.clone()).await;

        // Assert
        assert_eq!(
            result.unwrap(),
            ContactSubmitted {
                submission: JANE_1.clone(),
                email_sent: true,
            }
        );
    }

    #[tokio::test]
    async fn notification_failed() {
        // Arrange
        let repo =
            MockContactSubmissionRepository::new().with_create(JANE.clone(), Some(JANE_1.clone()));
        let notification = MockContactNotificationService::new().with_notify(JANE_1.clone(), false);

        let sut = ContactFeatureServiceImpl::new(repo, notification);

        // Act
        let result = sut.submit(JANE.clone()).await;

        // Assert
        assert_eq!(
            result.unwrap(),
            ContactSubmitted {
                submission: JANE_1.clone(),
                email_sent: false,
            }
        );
    }

    #[tokio::test]
    async fn storage_failed() {
        // Arrange
        let repo = MockContactSubmissionRepository::new().with_create(JANE.clone(), None);
        let notification = MockContactNotificationService::new();

        let sut = ContactFeatureServiceImpl::new(repo, notification);

        // Act
        let result = sut.submit(JANE.clone()).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::Storage(err)) if err.to_string() == "storage unavailable");
    }
}
