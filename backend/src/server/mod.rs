//! Server construction and wiring.
//!
//! `build_app` assembles the Actix application from an [`HttpState`] so
//! tests can spin up the real route table; [`run`] owns the production
//! lifecycle: pool, migrations, state, bind.

mod config;

pub use config::{AppConfig, ConfigError, DEFAULT_PORT};

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::NormalizePath;
use actix_web::{App, HttpServer, web};
use tracing::info;

use crate::domain::LeadIntakeService;
use crate::inbound::http::leads::submit_lead;
use crate::inbound::http::pages::{healthz, homeowners, index};
use crate::inbound::http::redirects::{download, go};
use crate::inbound::http::state::HttpState;
use crate::outbound::geocode::GoogleGeocoder;
use crate::outbound::persistence::{DbPool, DieselLeadRepository, run_startup_migrations};

/// Wire the production adapters into the handler state.
///
/// # Errors
///
/// Returns an error when the outbound HTTP client cannot be constructed.
pub fn build_state(config: &AppConfig, pool: DbPool) -> Result<HttpState, reqwest::Error> {
    let geocoder = GoogleGeocoder::new(
        config.geocoding_endpoint.clone(),
        config.geocoding_api_key.clone(),
    )?;
    let repository = DieselLeadRepository::new(pool);
    let service = LeadIntakeService::new(Arc::new(geocoder), Arc::new(repository));
    Ok(HttpState::new(Arc::new(service)))
}

/// Assemble the application: path normalization (the form posts to both
/// `/lead` and `/lead/`) plus the full route table.
pub fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(NormalizePath::trim())
        .service(index)
        .service(homeowners)
        .service(healthz)
        .service(submit_lead)
        .service(download)
        .service(go)
}

/// Run the server until shutdown.
///
/// # Errors
///
/// Returns an I/O error when the pool, migrations, state, or bind fail.
pub async fn run(config: AppConfig) -> std::io::Result<()> {
    let pool = DbPool::new(&config.database_url)
        .await
        .map_err(std::io::Error::other)?;
    run_startup_migrations(&config.database_url)
        .await
        .map_err(std::io::Error::other)?;

    let state = web::Data::new(build_state(&config, pool).map_err(std::io::Error::other)?);

    let port = config.port;
    info!(port, "lead-capture backend listening");
    HttpServer::new(move || build_app(state.clone()))
        .bind(("0.0.0.0", port))?
        .run()
        .await
}
