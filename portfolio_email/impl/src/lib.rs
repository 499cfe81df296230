use std::{fmt, path::PathBuf, sync::Arc};

use anyhow::{anyhow, Context};
use lettre::{
    message::{header::ContentType, MessageBuilder, MultiPart},
    AsyncFileTransport, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use portfolio_email_contracts::{Email, EmailService};
use portfolio_models::email_address::EmailAddressWithName;
use portfolio_utils::Apply;
use tracing::{debug, warn};

#[cfg(feature = "stub")]
pub use lettre::transport::stub::AsyncStubTransport;

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddressWithName,
    transport: Arc<Transport>,
}

enum Transport {
    Smtp(AsyncSmtpTransport<Tokio1Executor>),
    File {
        dir: PathBuf,
        transport: AsyncFileTransport<Tokio1Executor>,
    },
    #[cfg(feature = "stub")]
    Stub(AsyncStubTransport),
    Disabled,
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Smtp(_) => f.write_str("Smtp"),
            Self::File { dir, .. } => f.debug_struct("File").field("dir", dir).finish(),
            #[cfg(feature = "stub")]
            Self::Stub(_) => f.write_str("Stub"),
            Self::Disabled => f.write_str("Disabled"),
        }
    }
}

impl EmailServiceImpl {
    /// Deliver emails to the smtp server at `url`.
    ///
    /// `smtp://host:port` connects without encryption, `smtp://host:port?tls=required`
    /// upgrades the connection via STARTTLS and `smtps://host:port` uses implicit tls.
    /// Credentials are passed as url userinfo.
    pub fn smtp(url: &str, from: EmailAddressWithName) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)
            .context("Invalid smtp url")?
            .build();

        Ok(Self::with_transport(from, Transport::Smtp(transport)))
    }

    /// Write every email as an `.eml` file into `dir`.
    pub fn file(dir: impl Into<PathBuf>, from: EmailAddressWithName) -> Self {
        let dir = dir.into();
        let transport = AsyncFileTransport::<Tokio1Executor>::new(&dir);
        Self::with_transport(from, Transport::File { dir, transport })
    }

    /// Drop every email.
    pub fn disabled(from: EmailAddressWithName) -> Self {
        Self::with_transport(from, Transport::Disabled)
    }

    #[cfg(feature = "stub")]
    pub fn stub(from: EmailAddressWithName, transport: AsyncStubTransport) -> Self {
        Self::with_transport(from, Transport::Stub(transport))
    }

    /// Messages recorded by a stub transport, rendered as raw RFC 5322 text.
    #[cfg(feature = "stub")]
    pub async fn stub_messages(&self) -> Vec<String> {
        match &*self.transport {
            Transport::Stub(transport) => transport
                .messages()
                .await
                .into_iter()
                .map(|(_, message)| message)
                .collect(),
            _ => Vec::new(),
        }
    }

    fn with_transport(from: EmailAddressWithName, transport: Transport) -> Self {
        Self {
            from,
            transport: Arc::new(transport),
        }
    }

    fn build_message(&self, email: Email) -> anyhow::Result<Message> {
        let builder = Message::builder()
            .from(self.from.0.clone())
            .to(email.recipient.0)
            .apply_map(email.reply_to.map(|x| x.0), MessageBuilder::reply_to)
            .subject(email.subject);

        let message = match email.html {
            Some(html) => builder.multipart(MultiPart::alternative_plain_html(email.text, html))?,
            None => builder.header(ContentType::TEXT_PLAIN).body(email.text)?,
        };

        Ok(message)
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        if let Transport::Disabled = *self.transport {
            warn!(
                recipient = %email.recipient,
                subject = %email.subject,
                "Email delivery is disabled, dropping email"
            );
            return Ok(false);
        }

        let message = self.build_message(email)?;

        match &*self.transport {
            Transport::Smtp(transport) => transport
                .send(message)
                .await
                .map(|response| response.is_positive())
                .map_err(Into::into),
            Transport::File { transport, .. } => {
                let id = transport.send(message).await?;
                debug!(%id, "Email written to file");
                Ok(true)
            }
            #[cfg(feature = "stub")]
            Transport::Stub(transport) => {
                transport.send(message).await?;
                Ok(true)
            }
            Transport::Disabled => Ok(false),
        }
    }

    async fn ping(&self) -> anyhow::Result<()> {
        match &*self.transport {
            Transport::Smtp(transport) => transport
                .test_connection()
                .await?
                .then_some(())
                .ok_or_else(|| anyhow!("Failed to ping smtp server")),
            Transport::File { dir, .. } => tokio::fs::metadata(dir)
                .await
                .with_context(|| format!("Email directory {} is not accessible", dir.display()))?
                .is_dir()
                .then_some(())
                .ok_or_else(|| anyhow!("{} is not a directory", dir.display())),
            #[cfg(feature = "stub")]
            Transport::Stub(_) => Ok(()),
            Transport::Disabled => Ok(()),
        }
    }
}
