use anyhow::Context;
use portfolio_config::{EmailConfig, EmailTransportConfig};
use portfolio_email_impl::EmailServiceImpl;

/// Create the email service for the configured transport.
///
/// No connection is established here, use
/// [`EmailService::ping`](portfolio_email_contracts::EmailService::ping) to check
/// reachability.
pub fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    let from = config.from.clone();
    match &config.transport {
        EmailTransportConfig::Smtp { url } => {
            EmailServiceImpl::smtp(url, from).context("Failed to configure smtp transport")
        }
        EmailTransportConfig::File { dir } => Ok(EmailServiceImpl::file(dir, from)),
        EmailTransportConfig::Disabled => Ok(EmailServiceImpl::disabled(from)),
    }
}
