use std::time::Duration;

use portfolio_core_contact_contracts::ContactNotificationService;
use portfolio_email_contracts::{Email, EmailService};
use portfolio_models::{contact::ContactSubmission, email_address::EmailAddressWithName};
use portfolio_templates_contracts::{ContactNotificationTemplate, TemplateService};
use tracing::{error, info, warn};

#[derive(Debug, Clone)]
pub struct ContactNotificationServiceImpl<Template, Email> {
    template: Template,
    email: Email,
    config: ContactNotificationConfig,
}

#[derive(Debug, Clone)]
pub struct ContactNotificationConfig {
    pub recipient: EmailAddressWithName,
    pub subject_prefix: String,
    /// Upper bound for a single delivery attempt.
    pub timeout: Duration,
}

impl<Template, Email> ContactNotificationServiceImpl<Template, Email> {
    pub fn new(template: Template, email: Email, config: ContactNotificationConfig) -> Self {
        Self {
            template,
            email,
            config,
        }
    }
}

impl<Template, EmailS> ContactNotificationService
    for ContactNotificationServiceImpl<Template, EmailS>
where
    Template: TemplateService,
    EmailS: EmailService,
{
    #[tracing::instrument(skip_all, fields(id = %submission.id))]
    async fn notify(&self, submission: ContactSubmission) -> bool {
        // plain text only if the html body cannot be rendered
        let html = self
            .template
            .render(&html_template(&submission))
            .inspect_err(|err| error!("Failed to render notification email: {err:#}"))
            .ok();

        let email = Email {
            recipient: self.config.recipient.clone(),
            subject: format!("{}: {}", self.config.subject_prefix, *submission.subject),
            text: text_body(&submission),
            html,
            reply_to: Some(submission.email.with_name(&*submission.name)),
        };

        match tokio::time::timeout(self.config.timeout, self.email.send(email)).await {
            Ok(Ok(true)) => {
                info!("Notification email sent");
                true
            }
            Ok(Ok(false)) => {
                warn!("Notification email was not accepted");
                false
            }
            Ok(Err(err)) => {
                error!("Failed to send notification email: {err:#}");
                false
            }
            Err(_) => {
                error!(timeout = ?self.config.timeout, "Sending notification email timed out");
                false
            }
        }
    }
}

fn text_body(submission: &ContactSubmission) -> String {
    format!(
        "You have received a new message from your portfolio contact form.\n\nName: {}\nEmail: \
         {}\nSubject: {}\n\nMessage:\n{}\n",
        *submission.name, submission.email, *submission.subject, *submission.message
    )
}

fn html_template(submission: &ContactSubmission) -> ContactNotificationTemplate {
    ContactNotificationTemplate {
        name: submission.name.clone().into_inner(),
        email: submission.email.as_str().into(),
        subject: submission.subject.clone().into_inner(),
        message: submission.message.clone().into_inner(),
    }
}
