//! Startup seeding orchestration.
//!
//! All three files are read and parsed before anything is written, then rows
//! are inserted in the order users, offers, orders. Any failure aborts
//! startup; rows already written are not rolled back.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use seed_data::{OfferSeed, OrderSeed, SeedCollection, SeedError, SeedRecord, UserSeed};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use crate::domain::ports::{RecordPersistenceError, RecordRepository, RecordStores};
use crate::domain::{Entity, RecordPayload};

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Seed file could not be read.
    #[error("failed to read seed file at {path}: {source}")]
    SeedRead {
        /// Path to the seed file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Seed file content is not a valid collection.
    #[error("failed to parse seed file at {path}: {source}")]
    SeedParse {
        /// Path to the seed file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: SeedError,
    },
    /// A seed row could not be written.
    #[error("failed to seed {collection}: {source}")]
    Persist {
        /// Collection being seeded.
        collection: &'static str,
        /// Underlying persistence error.
        #[source]
        source: RecordPersistenceError,
    },
}

/// Locations of the three seed files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSources {
    /// Users seed file.
    pub users: PathBuf,
    /// Orders seed file.
    pub orders: PathBuf,
    /// Offers seed file.
    pub offers: PathBuf,
}

/// Number of rows written per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Users inserted.
    pub users: usize,
    /// Orders inserted.
    pub orders: usize,
    /// Offers inserted.
    pub offers: usize,
}

/// Load the seed files and insert every record they contain.
///
/// # Errors
///
/// Returns [`StartupSeedingError`] when a file cannot be read or parsed, or
/// when the store rejects a row.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::PathBuf;
///
/// use exchange_backend::outbound::persistence::{Database, DbConfig, record_stores};
/// use exchange_backend::seeding::{SeedSources, seed_records_on_startup};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let database = Database::open(DbConfig::in_memory()).await?;
/// let sources = SeedSources {
///     users: PathBuf::from("data/users.json"),
///     orders: PathBuf::from("data/orders.json"),
///     offers: PathBuf::from("data/offers.json"),
/// };
/// let summary = seed_records_on_startup(&sources, &record_stores(&database)).await?;
/// assert!(summary.users > 0);
/// # Ok(())
/// # }
/// ```
pub async fn seed_records_on_startup(
    sources: &SeedSources,
    stores: &RecordStores,
) -> Result<SeedSummary, StartupSeedingError> {
    let users = load_collection::<UserSeed>(&sources.users)?;
    let orders = load_collection::<OrderSeed>(&sources.orders)?;
    let offers = load_collection::<OfferSeed>(&sources.offers)?;

    let summary = SeedSummary {
        users: insert_all(stores.users.as_ref(), users).await?,
        offers: insert_all(stores.offers.as_ref(), offers).await?,
        orders: insert_all(stores.orders.as_ref(), orders).await?,
    };

    info!(
        users = summary.users,
        orders = summary.orders,
        offers = summary.offers,
        "startup seeding applied"
    );
    Ok(summary)
}

async fn insert_all<E, S>(
    repository: &dyn RecordRepository<E>,
    seeds: SeedCollection<S>,
) -> Result<usize, StartupSeedingError>
where
    E: Entity,
    RecordPayload<E>: From<S>,
{
    let mut written = 0;
    for seed in seeds {
        let payload = RecordPayload::<E>::from(seed);
        repository
            .insert(&payload)
            .await
            .map_err(|source| StartupSeedingError::Persist {
                collection: E::COLLECTION,
                source,
            })?;
        written += 1;
    }
    Ok(written)
}

fn load_collection<T>(path: &Path) -> Result<SeedCollection<T>, StartupSeedingError>
where
    T: SeedRecord + DeserializeOwned,
{
    let contents = read_seed_file(path)?;
    let collection =
        SeedCollection::from_json(&contents).map_err(|source| StartupSeedingError::SeedParse {
            path: path.to_path_buf(),
            source,
        })?;
    info!(
        path = %path.display(),
        kind = T::KIND,
        records = collection.len(),
        "seed file loaded"
    );
    Ok(collection)
}

fn read_seed_file(path: &Path) -> Result<String, StartupSeedingError> {
    let read_error = |source: std::io::Error| StartupSeedingError::SeedRead {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "seed path must name a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let payload = dir.read(Path::new(file_name)).map_err(read_error)?;
    String::from_utf8(payload)
        .map_err(|err| read_error(std::io::Error::new(std::io::ErrorKind::InvalidData, err)))
}
