//! Records exchange backend library modules.
//!
//! The crate follows a hexagonal layout: `domain` owns entities, ports and
//! services; `outbound` holds the SQLite adapters; `inbound` exposes the HTTP
//! surface; `seeding` loads the startup data files.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod seeding;
pub mod settings;

pub use domain::TraceId;
pub use middleware::Trace;
