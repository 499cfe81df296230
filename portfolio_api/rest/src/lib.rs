use std::{net::IpAddr, sync::Arc};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use portfolio_core_catalog_contracts::CatalogFeatureService;
use portfolio_core_contact_contracts::ContactFeatureService;
use portfolio_core_health_contracts::HealthFeatureService;
use portfolio_utils::Apply;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Catalog, Contact> {
    health: Health,
    catalog: Catalog,
    contact: Contact,
    config: RestServerConfig,
}

#[derive(Debug, Clone, Default)]
pub struct RestServerConfig {
    /// Origins allowed to call the api from a browser. Cross-origin requests
    /// are not answered with CORS headers if this is empty.
    pub allowed_origins: Vec<HeaderValue>,
}

impl<Health, Catalog, Contact> RestServer<Health, Catalog, Contact>
where
    Health: HealthFeatureService,
    Catalog: CatalogFeatureService,
    Contact: ContactFeatureService,
{
    pub fn new(health: Health, catalog: Catalog, contact: Contact, config: RestServerConfig) -> Self {
        Self {
            health,
            catalog,
            contact,
            config,
        }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        info!("Listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(Into::into)
    }

    pub fn router(self) -> Router<()> {
        let cors = cors_layer(self.config.allowed_origins);

        Router::new()
            .merge(routes::health::router(Arc::new(self.health)))
            .merge(routes::catalog::router(Arc::new(self.catalog)))
            .merge(routes::contact::router(Arc::new(self.contact)))
            .fallback(routes::not_found)
            .apply(middlewares::panic_handler::add)
            .apply(middlewares::trace::add)
            .apply(middlewares::request_id::add)
            .apply_map(cors, Router::layer)
    }
}

fn cors_layer(allowed_origins: Vec<HeaderValue>) -> Option<CorsLayer> {
    (!allowed_origins.is_empty()).then(|| {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed_origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE])
    })
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
