//! Use-case wrapper around a [`RecordRepository`].
//!
//! Reads surface storage failures as [`Error`] values. Mutations never fail
//! towards the caller: storage errors are logged and absorbed, and the
//! outcome is returned only so callers and tests can observe what happened.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::ports::{RecordPersistenceError, RecordRepository, WriteOutcome};
use crate::domain::{Entity, Error, Record, RecordId, RecordPayload};

/// What a create, update or delete request ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The store applied the change.
    Applied,
    /// No row matched the identifier.
    NoMatch,
    /// The store failed; the failure was logged and dropped.
    Absorbed,
}

impl From<WriteOutcome> for MutationOutcome {
    fn from(value: WriteOutcome) -> Self {
        match value {
            WriteOutcome::Applied => Self::Applied,
            WriteOutcome::NoMatch => Self::NoMatch,
        }
    }
}

/// Record operations for one entity, shared across HTTP workers.
pub struct RecordService<E: Entity> {
    repository: Arc<dyn RecordRepository<E>>,
}

impl<E: Entity> Clone for RecordService<E> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

fn map_persistence_error(error: RecordPersistenceError) -> Error {
    match error {
        RecordPersistenceError::Connection { message } => Error::service_unavailable(message),
        RecordPersistenceError::Query { message } => Error::internal(message),
    }
}

impl<E: Entity> RecordService<E> {
    /// Wrap `repository`.
    pub fn new(repository: Arc<dyn RecordRepository<E>>) -> Self {
        Self { repository }
    }

    /// Every stored record, ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] with `service_unavailable` when the store cannot be
    /// reached and `internal_error` when the query fails.
    pub async fn list(&self) -> Result<Vec<Record<E>>, Error> {
        self.repository.list().await.map_err(map_persistence_error)
    }

    /// The record with `id` as a zero- or one-element list.
    ///
    /// # Errors
    ///
    /// Same as [`RecordService::list`]; an unknown id is not an error.
    pub async fn find(&self, id: RecordId) -> Result<Vec<Record<E>>, Error> {
        let found = self
            .repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?;
        Ok(found.into_iter().collect())
    }

    /// Insert `payload` as a new row.
    pub async fn create(&self, payload: RecordPayload<E>) -> MutationOutcome {
        match self.repository.insert(&payload).await {
            Ok(id) => {
                debug!(collection = E::COLLECTION, %id, "{} created", E::LABEL);
                MutationOutcome::Applied
            }
            Err(error) => {
                warn!(
                    collection = E::COLLECTION,
                    requested_id = ?payload.id.map(RecordId::get),
                    %error,
                    "{} create failed; reporting success",
                    E::LABEL
                );
                MutationOutcome::Absorbed
            }
        }
    }

    /// Overwrite every column of the row with `id`. Never creates a row.
    pub async fn replace(&self, id: RecordId, fields: E) -> MutationOutcome {
        match self.repository.update(id, &fields).await {
            Ok(outcome) => {
                if outcome == WriteOutcome::NoMatch {
                    debug!(collection = E::COLLECTION, %id, "{} update matched no row", E::LABEL);
                }
                outcome.into()
            }
            Err(error) => {
                warn!(
                    collection = E::COLLECTION,
                    %id,
                    %error,
                    "{} update failed; reporting success",
                    E::LABEL
                );
                MutationOutcome::Absorbed
            }
        }
    }

    /// Remove the row with `id` if present.
    pub async fn remove(&self, id: RecordId) -> MutationOutcome {
        match self.repository.delete(id).await {
            Ok(outcome) => {
                if outcome == WriteOutcome::NoMatch {
                    debug!(collection = E::COLLECTION, %id, "{} delete matched no row", E::LABEL);
                }
                outcome.into()
            }
            Err(error) => {
                warn!(
                    collection = E::COLLECTION,
                    %id,
                    %error,
                    "{} delete failed; reporting success",
                    E::LABEL
                );
                MutationOutcome::Absorbed
            }
        }
    }
}
