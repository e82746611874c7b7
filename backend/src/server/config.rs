//! HTTP server configuration object and helpers.

use exchange_backend::domain::ports::RecordStores;
use std::net::SocketAddr;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) stores: RecordStores,
}

impl ServerConfig {
    /// Construct a server configuration serving `stores` on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, stores: RecordStores) -> Self {
        Self { bind_addr, stores }
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Exercised by server tests")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
