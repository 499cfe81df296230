use anyhow::Context;
use axum::http::HeaderValue;
use portfolio_api_rest::RestServerConfig;
use portfolio_config::Config;
use portfolio_core_contact_impl::notification::ContactNotificationConfig;
use portfolio_core_health_impl::HealthFeatureConfig;
use portfolio_models::catalog::Catalog;
use types::{
    CatalogFeature, ContactFeature, ContactNotification, ContactRepo, Email, HealthFeature,
    RestServer, Template, Time,
};

pub mod types;

/// Wire up all services of the http server.
///
/// Every service is constructed exactly once. The contact repository lives as
/// long as the returned server.
pub fn rest_server(config: &Config, catalog: Catalog, email: Email) -> anyhow::Result<RestServer> {
    let time = Time::default();
    let template = Template::new()?;

    let rest_server_config = RestServerConfig {
        allowed_origins: config
            .http
            .allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .with_context(|| format!("Invalid allowed origin {origin:?}"))
            })
            .collect::<anyhow::Result<_>>()?,
    };

    let contact_notification_config = ContactNotificationConfig {
        recipient: config.contact.email.clone().into(),
        subject_prefix: config.contact.subject_prefix.clone(),
        timeout: *config.email.timeout,
    };

    let health_feature_config = HealthFeatureConfig {
        cache_ttl: *config.health.cache_ttl,
    };

    let contact_repo = ContactRepo::new(time);
    let contact_notification =
        ContactNotification::new(template, email.clone(), contact_notification_config);

    let health = HealthFeature::new(time, email, health_feature_config);
    let catalog = CatalogFeature::new(catalog);
    let contact = ContactFeature::new(contact_repo, contact_notification);

    Ok(RestServer::new(health, catalog, contact, rest_server_config))
}
