//! Domain primitives and use cases.
//!
//! Purpose: define the stored entities, the generic record envelopes and the
//! ports adapters implement, independent of HTTP and SQL.
//!
//! Public surface:
//! - `User`, `Order`, `Offer`: the three entities.
//! - `Entity`: descriptor trait binding an entity to its collection name and
//!   confirmation strings.
//! - `Record`, `RecordPayload`, `RecordId`: identifier envelopes.
//! - `RecordService`: reads that can fail and mutations that cannot.
//! - `Error`, `ErrorCode`: transport-agnostic error payload.
//! - `TraceId`: request-scoped correlation identifier.

pub mod entities;
pub mod error;
pub mod ports;
pub mod record;
pub mod record_service;
pub mod trace_id;

pub use self::entities::{Offer, Order, User};
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::record::{Confirmations, Entity, Record, RecordId, RecordPayload};
pub use self::record_service::{MutationOutcome, RecordService};
pub use self::trace_id::TraceId;
