//! Backend entry-point: opens the store, seeds it, then serves the record API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use exchange_backend::inbound::http::health::HealthState;
use exchange_backend::outbound::persistence::{Database, DbConfig, record_stores};
use exchange_backend::seeding::seed_records_on_startup;
use exchange_backend::settings::AppSettings;

use server::{ServerConfig, create_server, drain_on_interrupt};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(format!("configuration error: {err}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let database = Database::open(DbConfig::new(settings.database_url()))
        .await
        .map_err(std::io::Error::other)?;
    let stores = record_stores(&database);

    seed_records_on_startup(&settings.seed_sources(), &stores)
        .await
        .map_err(std::io::Error::other)?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr, stores);
    info!(%bind_addr, "starting record service");
    let server = create_server(health_state.clone(), config)?;
    drain_on_interrupt(health_state, server.handle());
    server.await
}
