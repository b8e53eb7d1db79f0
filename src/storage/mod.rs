//! Storage module for daily logs and configuration.

pub mod config;
pub mod csv_store;
pub mod database;
pub mod entry;
pub mod log_store;
pub mod schema;

pub use config::{AppConfig, ConfigError, LoadedConfig, StorageBackend};
pub use csv_store::CsvLogStore;
pub use database::Database;
pub use entry::DailyLogEntry;
pub use log_store::{open_store, LoadPolicy, LogStore, StoreError};
