use portfolio_config::Config;
use portfolio_email_contracts::EmailService;
use tracing::{info, warn};

use crate::{email, environment};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Loading catalog");
    let catalog = portfolio_config::load_catalog(config.catalog.path.as_deref())?;
    info!(
        projects = catalog.projects.len(),
        blog_posts = catalog.blog_posts.len(),
        "Catalog loaded"
    );

    info!(transport = ?config.email.transport, "Connecting to email transport");
    let email = email::connect(&config.email)?;
    if let Err(err) = email.ping().await {
        // submissions are still accepted, notifications will report failure
        warn!("Email transport is not reachable: {err:#}");
    }

    let server = environment::rest_server(&config, catalog, email)?;
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
