//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServerHandle};
use actix_web::{HttpServer, rt, web};
use tracing::{info, warn};

use exchange_backend::inbound::http::health::HealthState;
use exchange_backend::inbound::http::{AppDependencies, build_app};

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// Record services are built once and shared by every worker, so all workers
/// see the same database connection.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, stores } = config;
    let deps = AppDependencies::new(health_state.clone(), &stores);

    let server = HttpServer::new(move || build_app(deps.clone()))
        .bind(bind_addr)?
        .run();

    health_state.mark_ready();
    Ok(server)
}

/// Fail liveness probes, then stop the server once in-flight requests finish.
async fn drain(health_state: web::Data<HealthState>, handle: ServerHandle) {
    health_state.mark_unhealthy();
    info!("shutdown requested; draining connections");
    handle.stop(true).await;
}

/// Drain the server when the process receives Ctrl-C.
pub fn drain_on_interrupt(health_state: web::Data<HealthState>, handle: ServerHandle) {
    rt::spawn(async move {
        match rt::signal::ctrl_c().await {
            Ok(()) => drain(health_state, handle).await,
            Err(error) => warn!(%error, "failed to listen for shutdown signal"),
        }
    });
}

#[cfg(test)]
mod tests {
    //! Server construction against an ephemeral port.
    use super::*;
    use std::net::SocketAddr;

    use exchange_backend::outbound::persistence::{Database, DbConfig, record_stores};
    use rstest::rstest;

    async fn ephemeral_config() -> ServerConfig {
        let database = Database::open(DbConfig::in_memory())
            .await
            .expect("in-memory database opens");
        ServerConfig::new(
            SocketAddr::from(([127, 0, 0, 1], 0)),
            record_stores(&database),
        )
    }

    #[rstest]
    #[actix_web::test]
    async fn create_server_binds_and_marks_ready() {
        let config = ephemeral_config().await;
        assert_eq!(config.bind_addr().port(), 0);
        let health_state = web::Data::new(HealthState::new());

        let server = create_server(health_state.clone(), config).expect("server binds");

        assert!(health_state.is_ready());
        assert!(health_state.is_alive());
        drop(server);
    }

    #[rstest]
    #[actix_web::test]
    async fn drain_fails_liveness_and_stops_the_server() {
        let health_state = web::Data::new(HealthState::new());
        let server =
            create_server(health_state.clone(), ephemeral_config().await).expect("server binds");
        let handle = server.handle();
        let running = rt::spawn(server);

        drain(health_state.clone(), handle).await;

        assert!(!health_state.is_alive());
        running
            .await
            .expect("server task joins")
            .expect("server stops cleanly");
    }
}
