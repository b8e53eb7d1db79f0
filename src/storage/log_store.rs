//! Daily log persistence.
//!
//! Every backend stores at most one row per `(athlete, date)`; saving a row
//! for a date that already exists replaces it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::{AppConfig, StorageBackend};
use super::csv_store::CsvLogStore;
use super::database::Database;
use super::entry::DailyLogEntry;

/// How loads treat missing or malformed stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Missing files are empty, bad rows are skipped with a warning,
    /// unparsable numbers read as zero
    #[default]
    Lenient,
    /// Any malformed row or value is an error
    Strict,
}

/// Storage for per-athlete daily logs.
pub trait LogStore {
    /// All rows for an athlete, sorted by date.
    fn load(&self, athlete: &str) -> Result<Vec<DailyLogEntry>, StoreError>;

    /// Insert or replace the row for `entry.date`.
    fn save_entry(&self, athlete: &str, entry: &DailyLogEntry) -> Result<(), StoreError>;

    /// The row for one date, if logged.
    fn entry_for(&self, athlete: &str, date: NaiveDate) -> Result<Option<DailyLogEntry>, StoreError> {
        Ok(self.load(athlete)?.into_iter().find(|e| e.date == date))
    }

    /// Rows within `[from, to]`, sorted by date.
    fn range(
        &self,
        athlete: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DailyLogEntry>, StoreError> {
        Ok(self
            .load(athlete)?
            .into_iter()
            .filter(|e| e.date >= from && e.date <= to)
            .collect())
    }

    /// Short description for the status bar.
    fn describe(&self) -> String;
}

/// Open the backend selected in the configuration.
pub fn open_store(config: &AppConfig) -> Result<Box<dyn LogStore>, StoreError> {
    let policy = config.storage.load_policy;
    match config.storage.backend {
        StorageBackend::Csv => {
            let store = CsvLogStore::new(config.data_dir.join("logs"), policy)?;
            Ok(Box::new(store))
        }
        StorageBackend::Sqlite => {
            let db = Database::open(&config.data_dir.join("ironcoach.db"))?.with_policy(policy);
            Ok(Box::new(db))
        }
    }
}

/// Log storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Malformed row {row} in {source_name}: {message}")]
    MalformedRow {
        source_name: String,
        row: u64,
        message: String,
    },

    #[error("Database connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid athlete name: {0:?}")]
    InvalidAthlete(String),
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::IoError(e.to_string())
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::QueryFailed(e.to_string())
    }
}
