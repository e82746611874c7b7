//! Port abstraction for record persistence adapters and their errors.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Entity, Offer, Order, Record, RecordId, RecordPayload, User};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by record repository adapters.
    pub enum RecordPersistenceError {
        /// The store could not be reached.
        Connection { message: String } => "record store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "record store query failed: {message}",
    }
}

/// Result of an update or delete addressed by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// A row matched and was changed.
    Applied,
    /// No row has the identifier; nothing changed.
    NoMatch,
}

/// Single-row storage operations for one entity.
#[async_trait]
pub trait RecordRepository<E: Entity>: Send + Sync {
    /// All rows, ordered by identifier.
    async fn list(&self) -> Result<Vec<Record<E>>, RecordPersistenceError>;

    /// The row with `id`, if present.
    async fn find_by_id(&self, id: RecordId) -> Result<Option<Record<E>>, RecordPersistenceError>;

    /// Insert one row and return its identifier.
    ///
    /// An explicit `payload.id` is kept; otherwise the store assigns one.
    async fn insert(&self, payload: &RecordPayload<E>) -> Result<RecordId, RecordPersistenceError>;

    /// Overwrite every column of the row with `id`. Never creates a row.
    async fn update(&self, id: RecordId, fields: &E)
    -> Result<WriteOutcome, RecordPersistenceError>;

    /// Remove the row with `id`.
    async fn delete(&self, id: RecordId) -> Result<WriteOutcome, RecordPersistenceError>;
}

/// Repositories for all three entities, injected into the HTTP layer and
/// the seed loader.
#[derive(Clone)]
pub struct RecordStores {
    /// User rows.
    pub users: Arc<dyn RecordRepository<User>>,
    /// Order rows.
    pub orders: Arc<dyn RecordRepository<Order>>,
    /// Offer rows.
    pub offers: Arc<dyn RecordRepository<Offer>>,
}
