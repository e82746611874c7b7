//! Shared helpers for backend integration tests.
//!
//! Each integration test compiles as its own crate, so not every helper is
//! used by every test binary.
#![allow(dead_code, reason = "helpers are shared across test crates")]

use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use exchange_backend::domain::ports::{
    RecordPersistenceError, RecordRepository, RecordStores, WriteOutcome,
};
use exchange_backend::domain::{Entity, Record, RecordId, RecordPayload};
use exchange_backend::inbound::http::AppDependencies;
use exchange_backend::inbound::http::health::HealthState;
use exchange_backend::outbound::persistence::{Database, DbConfig, record_stores};

/// Open a fresh in-memory database and return its record stores.
pub async fn in_memory_stores() -> RecordStores {
    let database = Database::open(DbConfig::in_memory())
        .await
        .expect("in-memory database opens");
    record_stores(&database)
}

/// Application dependencies over `stores` with a ready health state.
pub fn dependencies(stores: &RecordStores) -> AppDependencies {
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();
    AppDependencies::new(health_state, stores)
}

/// Which failure a [`FailingRepository`] reports.
#[derive(Debug, Clone, Copy)]
pub enum Failure {
    /// The store cannot be reached.
    Connection,
    /// The statement failed.
    Query,
}

impl Failure {
    fn error(self) -> RecordPersistenceError {
        match self {
            Self::Connection => RecordPersistenceError::connection("store offline"),
            Self::Query => RecordPersistenceError::query("disk I/O error"),
        }
    }
}

/// Repository whose every operation fails.
#[derive(Debug, Clone, Copy)]
pub struct FailingRepository(pub Failure);

#[async_trait]
impl<E: Entity> RecordRepository<E> for FailingRepository {
    async fn list(&self) -> Result<Vec<Record<E>>, RecordPersistenceError> {
        Err(self.0.error())
    }

    async fn find_by_id(&self, _id: RecordId) -> Result<Option<Record<E>>, RecordPersistenceError> {
        Err(self.0.error())
    }

    async fn insert(&self, _payload: &RecordPayload<E>) -> Result<RecordId, RecordPersistenceError> {
        Err(self.0.error())
    }

    async fn update(
        &self,
        _id: RecordId,
        _fields: &E,
    ) -> Result<WriteOutcome, RecordPersistenceError> {
        Err(self.0.error())
    }

    async fn delete(&self, _id: RecordId) -> Result<WriteOutcome, RecordPersistenceError> {
        Err(self.0.error())
    }
}

/// Record stores backed entirely by [`FailingRepository`].
pub fn failing_stores(failure: Failure) -> RecordStores {
    let repository = FailingRepository(failure);
    RecordStores {
        users: Arc::new(repository),
        orders: Arc::new(repository),
        offers: Arc::new(repository),
    }
}
