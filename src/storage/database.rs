//! SQLite log backend using rusqlite.

use std::cell::RefCell;
use std::path::Path;

use chrono::{NaiveDate, Utc};
use rusqlite::{params, Connection, Result as SqliteResult};

use crate::nutrition::MealSlot;
use crate::storage::entry::DailyLogEntry;
use crate::storage::log_store::{LoadPolicy, LogStore, StoreError};
use crate::storage::schema::{CURRENT_VERSION, SCHEMA, SCHEMA_VERSION_TABLE};

/// Database wrapper for SQLite operations.
pub struct Database {
    conn: RefCell<Connection>,
    label: String,
    policy: LoadPolicy,
}

impl Database {
    /// Open or create a database at the given path.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn =
            Connection::open(path).map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        let db = Self {
            conn: RefCell::new(conn),
            label: path.display().to_string(),
            policy: LoadPolicy::default(),
        };
        db.initialize()?;

        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        let db = Self {
            conn: RefCell::new(conn),
            label: ":memory:".to_string(),
            policy: LoadPolicy::default(),
        };
        db.initialize()?;

        Ok(db)
    }

    /// Set how `load` treats rows it cannot decode.
    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    fn initialize(&self) -> Result<(), StoreError> {
        self.conn
            .borrow()
            .execute_batch(SCHEMA_VERSION_TABLE)
            .map_err(|e| StoreError::MigrationFailed(e.to_string()))?;

        let current_version = self.schema_version()?;
        if current_version < CURRENT_VERSION {
            self.migrate(current_version)?;
        }

        Ok(())
    }

    /// Highest applied schema version, 0 for a fresh file.
    pub fn schema_version(&self) -> Result<i32, StoreError> {
        let result: SqliteResult<i32> = self.conn.borrow().query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        );

        match result {
            Ok(version) => Ok(version),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
            Err(e) => Err(StoreError::QueryFailed(e.to_string())),
        }
    }

    fn migrate(&self, from_version: i32) -> Result<(), StoreError> {
        if from_version < 1 {
            let conn = self.conn.borrow();
            conn.execute_batch(SCHEMA)
                .map_err(|e| StoreError::MigrationFailed(e.to_string()))?;
            conn.execute(
                "INSERT INTO schema_version (version, applied_at) VALUES (?, datetime('now'))",
                [CURRENT_VERSION],
            )
            .map_err(|e| StoreError::MigrationFailed(e.to_string()))?;

            tracing::info!("Database migrated to version {}", CURRENT_VERSION);
        }

        Ok(())
    }
}

fn upsert(conn: &Connection, athlete: &str, entry: &DailyLogEntry) -> Result<(), StoreError> {
    let mut meals = entry.meals_checked.clone();
    meals.sort();
    meals.dedup();
    let meals_json = serde_json::to_string(&meals)
        .map_err(|e| StoreError::SerializationError(e.to_string()))?;

    conn.execute(
        "INSERT INTO daily_logs (athlete, date, run_km, bike_km, swim_km, strength_min,
            protein_g, carbs_g, fat_g, calories, sleep_hours, meals_json, note, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
         ON CONFLICT(athlete, date) DO UPDATE SET
            run_km = excluded.run_km,
            bike_km = excluded.bike_km,
            swim_km = excluded.swim_km,
            strength_min = excluded.strength_min,
            protein_g = excluded.protein_g,
            carbs_g = excluded.carbs_g,
            fat_g = excluded.fat_g,
            calories = excluded.calories,
            sleep_hours = excluded.sleep_hours,
            meals_json = excluded.meals_json,
            note = excluded.note,
            updated_at = excluded.updated_at",
        params![
            athlete,
            entry.date.format("%Y-%m-%d").to_string(),
            entry.run_km,
            entry.bike_km,
            entry.swim_km,
            entry.strength_min,
            entry.protein_g,
            entry.carbs_g,
            entry.fat_g,
            entry.calories,
            entry.sleep_hours,
            meals_json,
            entry.note,
            Utc::now().to_rfc3339(),
        ],
    )
    .map_err(|e| StoreError::QueryFailed(e.to_string()))?;

    Ok(())
}

/// Intermediate struct for reading log rows from the database.
struct LogRow {
    date: String,
    run_km: f32,
    bike_km: f32,
    swim_km: f32,
    strength_min: f32,
    protein_g: f32,
    carbs_g: f32,
    fat_g: f32,
    calories: f32,
    sleep_hours: f32,
    meals_json: String,
    note: String,
}

impl LogRow {
    fn into_entry(self) -> Result<DailyLogEntry, StoreError> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|e| StoreError::SerializationError(format!("Invalid date {}: {}", self.date, e)))?;
        let meals_checked: Vec<MealSlot> = serde_json::from_str(&self.meals_json)
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;

        Ok(DailyLogEntry {
            date,
            run_km: self.run_km,
            bike_km: self.bike_km,
            swim_km: self.swim_km,
            strength_min: self.strength_min,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
            calories: self.calories,
            sleep_hours: self.sleep_hours,
            meals_checked,
            note: self.note,
        })
    }
}

impl LogStore for Database {
    fn load(&self, athlete: &str) -> Result<Vec<DailyLogEntry>, StoreError> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT date, run_km, bike_km, swim_km, strength_min, protein_g, carbs_g, fat_g,
                    calories, sleep_hours, meals_json, note
             FROM daily_logs WHERE athlete = ? ORDER BY date",
        )?;

        let rows = stmt.query_map([athlete], |row| {
            Ok(LogRow {
                date: row.get(0)?,
                run_km: row.get(1)?,
                bike_km: row.get(2)?,
                swim_km: row.get(3)?,
                strength_min: row.get(4)?,
                protein_g: row.get(5)?,
                carbs_g: row.get(6)?,
                fat_g: row.get(7)?,
                calories: row.get(8)?,
                sleep_hours: row.get(9)?,
                meals_json: row.get(10)?,
                note: row.get(11)?,
            })
        })?;

        let mut entries = Vec::new();
        for (index, row) in rows.enumerate() {
            let decoded = row.map_err(StoreError::from).and_then(LogRow::into_entry);
            match (decoded, self.policy) {
                (Ok(entry), _) => entries.push(entry),
                (Err(e), LoadPolicy::Lenient) => {
                    tracing::warn!("Skipping row {} for {} in {}: {}", index + 1, athlete, self.label, e);
                }
                (Err(e), LoadPolicy::Strict) => return Err(e),
            }
        }
        Ok(entries)
    }

    fn save_entry(&self, athlete: &str, entry: &DailyLogEntry) -> Result<(), StoreError> {
        if athlete.trim().is_empty() {
            return Err(StoreError::InvalidAthlete(athlete.to_string()));
        }
        upsert(&self.conn.borrow(), athlete, entry)?;
        tracing::debug!("Saved {} for {}", entry.date, athlete);
        Ok(())
    }

    fn describe(&self) -> String {
        format!("SQLite {}", self.label)
    }
}
