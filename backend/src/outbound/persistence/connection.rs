//! Shared SQLite connection for the record repositories.
//!
//! SQLite's `:memory:` databases exist per connection, so the whole process
//! shares exactly one connection. It is wrapped in `diesel-async`'s
//! `SyncConnectionWrapper`, which runs each statement on Tokio's blocking
//! pool, and guarded by an async mutex so one statement runs at a time.
//!
//! The schema is created by embedded migrations when the database is opened.

use std::sync::Arc;
use std::time::Duration;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tokio::sync::{Mutex, MutexGuard};
use tracing::info;

/// Migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Async connection type used by the repositories.
pub type DbConnection = SyncConnectionWrapper<SqliteConnection>;

/// In-memory database URL, the default store.
pub const IN_MEMORY_DATABASE: &str = ":memory:";

/// Errors that can occur while opening or using the database.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DbError {
    /// The database could not be opened.
    #[error("failed to open database {url}: {message}")]
    Open { url: String, message: String },

    /// The schema migrations failed.
    #[error("failed to migrate database: {message}")]
    Migrate { message: String },

    /// The connection was not released within the checkout timeout.
    #[error("failed to get database connection: {message}")]
    Checkout { message: String },
}

impl DbError {
    /// Create an open error for `url`.
    pub fn open(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Open {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a migration error with the given message.
    pub fn migrate(message: impl Into<String>) -> Self {
        Self::Migrate {
            message: message.into(),
        }
    }

    /// Create a checkout error with the given message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }
}

/// Configuration for the shared database connection.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use exchange_backend::outbound::persistence::DbConfig;
///
/// let config = DbConfig::new("records.sqlite3")
///     .with_checkout_timeout(Duration::from_secs(5));
/// assert_eq!(config.database_url(), "records.sqlite3");
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    database_url: String,
    checkout_timeout: Duration,
}

impl DbConfig {
    /// Create a configuration for `database_url` with a 30 second checkout
    /// timeout.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            checkout_timeout: Duration::from_secs(30),
        }
    }

    /// Configuration for a fresh in-memory database.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY_DATABASE)
    }

    /// Set how long callers wait for the connection before failing.
    #[must_use]
    pub fn with_checkout_timeout(mut self, timeout: Duration) -> Self {
        self.checkout_timeout = timeout;
        self
    }

    /// Get the database URL.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Get the checkout timeout.
    #[must_use]
    pub fn checkout_timeout(&self) -> Duration {
        self.checkout_timeout
    }
}

/// Handle to the shared connection. Cloning shares the same connection.
#[derive(Clone)]
pub struct Database {
    connection: Arc<Mutex<DbConnection>>,
    checkout_timeout: Duration,
}

impl Database {
    /// Open the database and apply pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Open`] when SQLite cannot open the URL and
    /// [`DbError::Migrate`] when the schema cannot be created.
    pub async fn open(config: DbConfig) -> Result<Self, DbError> {
        let url = config.database_url.clone();
        let connection = tokio::task::spawn_blocking(move || open_migrated(&url))
            .await
            .map_err(|err| DbError::open(config.database_url.as_str(), err.to_string()))??;

        info!(url = %config.database_url, "database opened");
        Ok(Self {
            connection: Arc::new(Mutex::new(SyncConnectionWrapper::new(connection))),
            checkout_timeout: config.checkout_timeout,
        })
    }

    /// Wait for exclusive use of the connection.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Checkout`] if the connection is not released within
    /// the configured timeout.
    pub async fn connection(&self) -> Result<MutexGuard<'_, DbConnection>, DbError> {
        tokio::time::timeout(self.checkout_timeout, self.connection.lock())
            .await
            .map_err(|_| {
                DbError::checkout(format!(
                    "connection busy for more than {} ms",
                    self.checkout_timeout.as_millis()
                ))
            })
    }
}

fn open_migrated(url: &str) -> Result<SqliteConnection, DbError> {
    let mut connection =
        SqliteConnection::establish(url).map_err(|err| DbError::open(url, err.to_string()))?;
    connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| DbError::migrate(err.to_string()))?;
    Ok(connection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn config_defaults_to_thirty_second_timeout() {
        let config = DbConfig::in_memory();
        assert_eq!(config.database_url(), ":memory:");
        assert_eq!(config.checkout_timeout(), Duration::from_secs(30));
    }

    #[rstest]
    #[case(DbError::open(":memory:", "boom"), "failed to open database :memory:: boom")]
    #[case(DbError::migrate("bad sql"), "failed to migrate database: bad sql")]
    #[case(
        DbError::checkout("busy"),
        "failed to get database connection: busy"
    )]
    fn errors_format_their_context(#[case] error: DbError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn opens_in_memory_database() {
        let database = Database::open(DbConfig::in_memory())
            .await
            .expect("in-memory database opens");
        assert!(database.connection().await.is_ok());
    }

    #[rstest]
    #[tokio::test]
    async fn unreachable_path_fails_to_open() {
        let result = Database::open(DbConfig::new("/nonexistent-dir/records.sqlite3")).await;
        assert!(matches!(result, Err(DbError::Open { .. })));
    }

    #[rstest]
    #[tokio::test]
    async fn checkout_times_out_while_connection_is_held() {
        let database = Database::open(
            DbConfig::in_memory().with_checkout_timeout(Duration::from_millis(20)),
        )
        .await
        .expect("in-memory database opens");

        let _held = database.connection().await.expect("first checkout");
        let second = database.connection().await;

        assert!(matches!(second, Err(DbError::Checkout { .. })));
    }
}
