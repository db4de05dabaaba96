//! HTTP server configuration object.

use std::net::SocketAddr;
use std::time::Duration;

use todo_backend::domain::DEFAULT_STORE_TIMEOUT;
use todo_backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) store_timeout: Duration,
}

impl ServerConfig {
    /// Serve on `bind_addr` using `db_pool` for both resources.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self {
            bind_addr,
            db_pool,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    /// Override the per-call store deadline.
    #[must_use]
    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }
}
