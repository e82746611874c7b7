//! Typed seed records for the exchange users, orders and offers collections.
//!
//! Seed files are JSON arrays of flat objects whose keys match one entity's
//! column names exactly. This crate parses them into typed records without
//! depending on backend domain types, so the backend converts them at the
//! point of use.
//!
//! # Example
//!
//! ```
//! use seed_data::{SeedCollection, UserSeed};
//!
//! let json = r#"[
//!     {"id": 1, "first_name": "Ada", "last_name": "Lovelace", "age": 36,
//!      "email": "ada@example.com", "role": "customer", "phone": "+44 20 0000"}
//! ]"#;
//!
//! let users = SeedCollection::<UserSeed>::from_json(json).expect("valid seed file");
//! assert_eq!(users.len(), 1);
//! assert_eq!(users.records()[0].first_name.as_deref(), Some("Ada"));
//! ```

mod collection;
mod error;
mod records;

pub use collection::SeedCollection;
pub use error::SeedError;
pub use records::{OfferSeed, OrderSeed, SeedRecord, UserSeed};
