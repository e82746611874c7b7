//! Service configuration loaded via OrthoConfig.
//!
//! Values come from `EXCHANGE_*` environment variables, configuration files
//! and command-line flags. Every key has a default, so a bare start needs no
//! configuration at all.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::IN_MEMORY_DATABASE;
use crate::seeding::SeedSources;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_USERS_PATH: &str = "data/users.json";
const DEFAULT_ORDERS_PATH: &str = "data/orders.json";
const DEFAULT_OFFERS_PATH: &str = "data/offers.json";

/// Error raised when the configured listener address is not a socket address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid bind address {value:?}: {message}")]
pub struct InvalidBindAddr {
    /// The rejected value.
    pub value: String,
    /// Parser message.
    pub message: String,
}

/// Configuration values for the records service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXCHANGE")]
pub struct AppSettings {
    /// Listener address, `host:port`.
    #[ortho_config(default = DEFAULT_BIND_ADDR.to_owned())]
    pub bind_addr: String,
    /// SQLite database: `:memory:` or a file path.
    #[ortho_config(default = IN_MEMORY_DATABASE.to_owned())]
    pub database_url: String,
    /// Users seed file.
    #[ortho_config(default = PathBuf::from(DEFAULT_USERS_PATH))]
    pub users_path: PathBuf,
    /// Orders seed file.
    #[ortho_config(default = PathBuf::from(DEFAULT_ORDERS_PATH))]
    pub orders_path: PathBuf,
    /// Offers seed file.
    #[ortho_config(default = PathBuf::from(DEFAULT_OFFERS_PATH))]
    pub offers_path: PathBuf,
}

impl AppSettings {
    /// Parse the listener address.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBindAddr`] when the configured value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, InvalidBindAddr> {
        self.bind_addr
            .parse()
            .map_err(|err: std::net::AddrParseError| InvalidBindAddr {
                value: self.bind_addr.clone(),
                message: err.to_string(),
            })
    }

    /// Return the database URL.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Return the seed file locations.
    #[must_use]
    pub fn seed_sources(&self) -> SeedSources {
        SeedSources {
            users: self.users_path.clone(),
            orders: self.orders_path.clone(),
            offers: self.offers_path.clone(),
        }
    }
}
