//! HTTP server bootstrap: migrations, pool, and route wiring.

pub mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::domain::UserService;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, delete_user, get_user, list_users, update_user};
use crate::outbound::persistence::{DbPool, DieselUserRepository};

/// Migrations compiled into the binary and applied before serving traffic.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

fn apply_migrations(database_url: &str) -> std::io::Result<()> {
    let mut conn = PgConnection::establish(database_url).map_err(|err| {
        std::io::Error::other(format!("failed to connect for migrations: {err}"))
    })?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| std::io::Error::other(format!("failed to run migrations: {err}")))?;
    if !applied.is_empty() {
        info!(count = applied.len(), "applied pending migrations");
    }
    Ok(())
}

/// Run the HTTP server until shutdown.
///
/// # Errors
///
/// Returns an error when migrations fail, the pool cannot be built, or the
/// listener cannot bind.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let database_url = config.pool.database_url().to_owned();
    tokio::task::spawn_blocking(move || apply_migrations(&database_url))
        .await
        .map_err(|err| std::io::Error::other(format!("migration task panicked: {err}")))??;

    let pool = DbPool::new(config.pool.clone())
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    let service = Arc::new(UserService::new(Arc::new(DieselUserRepository::new(pool))));
    let state = web::Data::new(HttpState::new(service.clone(), service));

    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness flag stays shared.
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(state.clone())
            .app_data(server_health_state.clone())
            .service(create_user)
            .service(list_users)
            .service(get_user)
            .service(update_user)
            .service(delete_user)
            .service(live)
            .service(ready);

        #[cfg(debug_assertions)]
        let app = app.service(crate::doc::openapi_json);

        app
    })
    .bind(config.bind_addr())?;

    info!(addr = %config.bind_addr(), "user records backend listening");
    health_state.mark_ready();
    server.run().await
}
