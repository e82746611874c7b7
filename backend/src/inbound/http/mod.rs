//! HTTP inbound adapter exposing the record and health endpoints.

pub mod app;
pub mod error;
pub mod health;
pub mod records;

pub use app::{AppDependencies, build_app};
pub use error::ApiResult;
