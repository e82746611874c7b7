//! SQLite persistence adapters using Diesel ORM.
//!
//! This module provides the concrete implementation of the domain's
//! `RecordRepository` port, backed by SQLite through Diesel with async
//! support from `diesel-async`.
//!
//! # Architecture
//!
//! - **Thin adapters**: repository implementations only translate between
//!   Diesel rows and domain records. No business logic resides here.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **One shared connection**: `Database` owns the single SQLite connection
//!   that keeps an in-memory store alive for the process lifetime.
//! - **Strongly typed errors**: Diesel and connection errors are mapped to
//!   `RecordPersistenceError`.
//!
//! # Example
//!
//! ```no_run
//! use exchange_backend::domain::User;
//! use exchange_backend::outbound::persistence::{Database, DbConfig, DieselRecordRepository};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let database = Database::open(DbConfig::in_memory()).await?;
//! let users = DieselRecordRepository::<User>::new(database);
//! # Ok(())
//! # }
//! ```

mod connection;
mod diesel_record_repository;
mod models;
mod schema;

pub use connection::{Database, DbConfig, DbConnection, DbError, IN_MEMORY_DATABASE, MIGRATIONS};
pub use diesel_record_repository::DieselRecordRepository;

use std::sync::Arc;

use crate::domain::ports::RecordStores;
use crate::domain::{Offer, Order, User};

/// Build repositories for every entity over one shared database.
pub fn record_stores(database: &Database) -> RecordStores {
    RecordStores {
        users: Arc::new(DieselRecordRepository::<User>::new(database.clone())),
        orders: Arc::new(DieselRecordRepository::<Order>::new(database.clone())),
        offers: Arc::new(DieselRecordRepository::<Offer>::new(database.clone())),
    }
}
