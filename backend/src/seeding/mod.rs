//! Startup seeding of the record store from JSON files.

mod conversion;
mod startup;

pub use startup::{SeedSources, SeedSummary, StartupSeedingError, seed_records_on_startup};
