//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod record_repository;

pub use record_repository::{RecordPersistenceError, RecordRepository, RecordStores, WriteOutcome};
