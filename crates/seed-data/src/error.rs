//! Error types for the seed-data crate.
//!
//! Seed failures are fatal to service startup, so the variants carry enough
//! context to point an operator at the offending file content.

use thiserror::Error;

/// Errors raised while parsing a seed collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    /// The seed JSON is malformed, is not an array, or contains a record
    /// whose fields do not match the collection schema.
    #[error("invalid {kind} seed JSON: {message}")]
    ParseError {
        /// Collection the seed file was parsed for.
        kind: &'static str,
        /// Description of the parse error.
        message: String,
    },

    /// Two records in the same seed file claim the same identifier.
    #[error("duplicate {kind} seed id {id}")]
    DuplicateId {
        /// Collection the seed file was parsed for.
        kind: &'static str,
        /// The repeated identifier.
        id: i64,
    },
}
