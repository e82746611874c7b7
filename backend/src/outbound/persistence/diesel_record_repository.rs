//! SQLite-backed `RecordRepository` implementations using Diesel ORM.
//!
//! One repository type serves all three entities. The per-entity trait impls
//! differ only in table, row and changeset types, so they are generated by
//! `impl_record_repository!`.

use std::marker::PhantomData;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{RecordPersistenceError, RecordRepository, WriteOutcome};
use crate::domain::{Entity, Offer, Order, Record, RecordId, RecordPayload, User};

use super::connection::{Database, DbError};
use super::models::{
    NewOfferRow, NewOrderRow, NewUserRow, OfferChangeset, OfferRow, OrderChangeset, OrderRow,
    UserChangeset, UserRow,
};
use super::schema::{offers, orders, users};

/// Diesel-backed implementation of the `RecordRepository` port for `E`.
pub struct DieselRecordRepository<E> {
    database: Database,
    entity: PhantomData<fn() -> E>,
}

impl<E> DieselRecordRepository<E> {
    /// Create a repository over the shared database.
    pub fn new(database: Database) -> Self {
        Self {
            database,
            entity: PhantomData,
        }
    }
}

impl<E> Clone for DieselRecordRepository<E> {
    fn clone(&self) -> Self {
        Self::new(self.database.clone())
    }
}

fn map_db_error(error: DbError) -> RecordPersistenceError {
    match error {
        DbError::Checkout { message } | DbError::Migrate { message } => {
            RecordPersistenceError::connection(message)
        }
        DbError::Open { message, .. } => RecordPersistenceError::connection(message),
    }
}

fn map_diesel_error(error: diesel::result::Error) -> RecordPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => {
            RecordPersistenceError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            RecordPersistenceError::query("record id already exists")
        }
        DieselError::DatabaseError(DatabaseErrorKind::NotNullViolation, info) => {
            RecordPersistenceError::query(info.message().to_owned())
        }
        _ => RecordPersistenceError::query("database error"),
    }
}

fn map_changeset_error(error: impl std::fmt::Display) -> RecordPersistenceError {
    debug!(%error, "changeset rejected");
    RecordPersistenceError::query(error.to_string())
}

fn write_outcome(affected: usize) -> WriteOutcome {
    if affected == 0 {
        WriteOutcome::NoMatch
    } else {
        WriteOutcome::Applied
    }
}

/// Generate `RecordRepository<$entity>` for `DieselRecordRepository`.
///
/// Each generated method checks out the shared connection and runs exactly
/// one statement:
/// - `list`: `SELECT .. ORDER BY id`
/// - `find_by_id`: `SELECT .. WHERE id = ?`
/// - `insert`: `INSERT .. RETURNING id`, omitting `id` when not supplied
/// - `update`: `UPDATE .. SET <every column> WHERE id = ?`, unless the
///   changeset cannot be built from the entity
/// - `delete`: `DELETE .. WHERE id = ?`
macro_rules! impl_record_repository {
    ($(
        $entity:ty {
            table: $table:ident,
            row: $row:ty,
            new_row: $new_row:ty,
            changeset: $changeset:ty $(,)?
        }
    ),+ $(,)?) => {
        $(
            #[async_trait]
            impl RecordRepository<$entity> for DieselRecordRepository<$entity> {
                async fn list(&self) -> Result<Vec<Record<$entity>>, RecordPersistenceError> {
                    let mut conn = self.database.connection().await.map_err(map_db_error)?;
                    let rows: Vec<$row> = $table::table
                        .order($table::id.asc())
                        .select(<$row>::as_select())
                        .load(&mut *conn)
                        .await
                        .map_err(map_diesel_error)?;
                    Ok(rows.into_iter().map(Record::from).collect())
                }

                async fn find_by_id(
                    &self,
                    id: RecordId,
                ) -> Result<Option<Record<$entity>>, RecordPersistenceError> {
                    let mut conn = self.database.connection().await.map_err(map_db_error)?;
                    let row: Option<$row> = $table::table
                        .find(id.get())
                        .select(<$row>::as_select())
                        .first(&mut *conn)
                        .await
                        .optional()
                        .map_err(map_diesel_error)?;
                    Ok(row.map(Record::from))
                }

                async fn insert(
                    &self,
                    payload: &RecordPayload<$entity>,
                ) -> Result<RecordId, RecordPersistenceError> {
                    let new_row: $new_row = payload.into();
                    let mut conn = self.database.connection().await.map_err(map_db_error)?;
                    let id: i64 = diesel::insert_into($table::table)
                        .values(&new_row)
                        .returning($table::id)
                        .get_result(&mut *conn)
                        .await
                        .map_err(map_diesel_error)?;
                    debug!(
                        collection = <$entity as Entity>::COLLECTION,
                        id,
                        "row inserted"
                    );
                    Ok(RecordId::new(id))
                }

                async fn update(
                    &self,
                    id: RecordId,
                    fields: &$entity,
                ) -> Result<WriteOutcome, RecordPersistenceError> {
                    let changes: $changeset = fields.try_into().map_err(map_changeset_error)?;
                    let mut conn = self.database.connection().await.map_err(map_db_error)?;
                    let affected = diesel::update($table::table.find(id.get()))
                        .set(&changes)
                        .execute(&mut *conn)
                        .await
                        .map_err(map_diesel_error)?;
                    Ok(write_outcome(affected))
                }

                async fn delete(&self, id: RecordId) -> Result<WriteOutcome, RecordPersistenceError> {
                    let mut conn = self.database.connection().await.map_err(map_db_error)?;
                    let affected = diesel::delete($table::table.find(id.get()))
                        .execute(&mut *conn)
                        .await
                        .map_err(map_diesel_error)?;
                    Ok(write_outcome(affected))
                }
            }
        )+
    };
}

impl_record_repository! {
    User {
        table: users,
        row: UserRow,
        new_row: NewUserRow<'_>,
        changeset: UserChangeset<'_>,
    },
    Order {
        table: orders,
        row: OrderRow,
        new_row: NewOrderRow<'_>,
        changeset: OrderChangeset<'_>,
    },
    Offer {
        table: offers,
        row: OfferRow,
        new_row: NewOfferRow,
        changeset: OfferChangeset,
    },
}
