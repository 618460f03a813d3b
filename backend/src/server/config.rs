//! Server configuration object.

use std::net::SocketAddr;

use crate::outbound::persistence::PoolConfig;

/// Configuration assembled at startup and passed to [`crate::server::run`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) pool: PoolConfig,
}

impl ServerConfig {
    /// Construct a server configuration from a bind address and pool
    /// settings.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, pool: PoolConfig) -> Self {
        Self { bind_addr, pool }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
