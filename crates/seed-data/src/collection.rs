//! Parsed seed collections.

use std::collections::HashSet;

use serde::de::DeserializeOwned;

use crate::error::SeedError;
use crate::records::SeedRecord;

/// An ordered list of seed records parsed from one JSON file.
///
/// Records keep their file order, which is also the order they are inserted
/// into the store at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedCollection<T> {
    records: Vec<T>,
}

impl<T> SeedCollection<T>
where
    T: SeedRecord + DeserializeOwned,
{
    /// Parse a collection from JSON text.
    ///
    /// The document must be a JSON array. Records without an `id` are
    /// accepted and receive one from the store on insert.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::ParseError`] when the JSON is malformed, is not an
    /// array, or a record has an unknown or mistyped field. Returns
    /// [`SeedError::DuplicateId`] when two records share an explicit id.
    ///
    /// # Example
    ///
    /// ```
    /// use seed_data::{OfferSeed, SeedCollection, SeedError};
    ///
    /// let err = SeedCollection::<OfferSeed>::from_json(
    ///     r#"[{"id": 1, "order_id": 1}, {"id": 1, "order_id": 2}]"#,
    /// )
    /// .expect_err("duplicate ids");
    /// assert_eq!(err, SeedError::DuplicateId { kind: "offers", id: 1 });
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let records: Vec<T> = serde_json::from_str(json).map_err(|e| SeedError::ParseError {
            kind: T::KIND,
            message: e.to_string(),
        })?;

        let mut seen = HashSet::new();
        for id in records.iter().filter_map(|record| record.id()) {
            if !seen.insert(id) {
                return Err(SeedError::DuplicateId { kind: T::KIND, id });
            }
        }

        Ok(Self { records })
    }
}

impl<T> SeedCollection<T> {
    /// Records in file order.
    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Consume the collection, yielding the records in file order.
    #[must_use]
    pub fn into_records(self) -> Vec<T> {
        self.records
    }

    /// Number of records in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T> IntoIterator for SeedCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
