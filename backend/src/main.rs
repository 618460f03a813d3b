//! Service entry point: configuration, tracing, and server bootstrap.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::outbound::persistence::PoolConfig;
use backend::server::{self, ServerConfig};

/// Command-line and environment configuration.
#[derive(Debug, Parser)]
#[command(name = "backend", about = "User records REST API")]
struct Args {
    /// Address the HTTP server binds to.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:3001")]
    bind_addr: SocketAddr,

    /// PostgreSQL connection string.
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 10)]
    db_max_connections: u32,

    /// Seconds to wait for a pooled connection before failing the request.
    #[arg(long, env = "DB_CONNECT_TIMEOUT_SECS", default_value_t = 30)]
    db_connect_timeout_secs: u64,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = Args::parse();
    let pool = PoolConfig::new(args.database_url)
        .with_max_size(args.db_max_connections)
        .with_connection_timeout(Duration::from_secs(args.db_connect_timeout_secs));
    server::run(ServerConfig::new(args.bind_addr, pool)).await
}
