//! Generic record envelopes shared by every entity.
//!
//! An entity type only describes its own columns. [`Record`] pairs those
//! columns with the store-assigned identifier for responses, and
//! [`RecordPayload`] carries an optional client-supplied identifier for
//! inserts.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Store-assigned record identifier.
///
/// Serialised as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for RecordId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed confirmation strings returned by the mutating endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmations {
    /// Reply to a create request.
    pub added: &'static str,
    /// Reply to an update request.
    pub updated: &'static str,
    /// Reply to a delete request.
    pub deleted: &'static str,
}

/// Describes one stored entity: its column set and how it is presented.
///
/// Implementors are flat structs of optional columns. `Default` yields the
/// all-null row used when an update body omits every field.
pub trait Entity:
    Clone + fmt::Debug + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Collection name used in routes and logs (`users`, `orders`, `offers`).
    const COLLECTION: &'static str;
    /// Singular name used in log messages.
    const LABEL: &'static str;
    /// Replies for create, update and delete.
    const CONFIRMATIONS: Confirmations;
}

/// A stored entity together with its identifier.
///
/// Serialises flat, with `id` first and the entity's columns after it.
///
/// # Examples
/// ```
/// use exchange_backend::domain::{Offer, Record, RecordId};
///
/// let record = Record::new(
///     RecordId::new(3),
///     Offer { order_id: Some(RecordId::new(1)), executor_id: None },
/// );
/// let json = serde_json::to_string(&record).expect("serialise");
/// assert_eq!(json, r#"{"id":3,"order_id":1,"executor_id":null}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "E: Entity")]
pub struct Record<E> {
    /// Store-assigned identifier.
    pub id: RecordId,
    /// Entity columns.
    #[serde(flatten)]
    pub fields: E,
}

impl<E> Record<E> {
    /// Pair `fields` with `id`.
    pub const fn new(id: RecordId, fields: E) -> Self {
        Self { id, fields }
    }
}

/// Entity columns as supplied by a client or a seed file.
///
/// `id` is optional; when present on insert it is kept. Unknown keys are
/// ignored and missing columns decode as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(bound = "E: Entity")]
pub struct RecordPayload<E> {
    /// Identifier requested by the caller, if any.
    #[serde(default)]
    pub id: Option<RecordId>,
    /// Entity columns.
    #[serde(flatten)]
    pub fields: E,
}

impl<E: Entity> RecordPayload<E> {
    /// Payload without an explicit identifier.
    pub fn new(fields: E) -> Self {
        Self { id: None, fields }
    }

    /// Request a specific identifier for the insert.
    #[must_use]
    pub fn with_id(mut self, id: RecordId) -> Self {
        self.id = Some(id);
        self
    }

    /// Decode a request body.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the body is not a JSON object or a
    /// column has the wrong type.
    pub fn from_json_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}
