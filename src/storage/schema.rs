//! SQLite schema for the daily log backend.

/// Daily logs, one row per athlete and date.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS daily_logs (
    athlete TEXT NOT NULL,
    date TEXT NOT NULL,
    run_km REAL NOT NULL DEFAULT 0,
    bike_km REAL NOT NULL DEFAULT 0,
    swim_km REAL NOT NULL DEFAULT 0,
    strength_min REAL NOT NULL DEFAULT 0,
    protein_g REAL NOT NULL DEFAULT 0,
    carbs_g REAL NOT NULL DEFAULT 0,
    fat_g REAL NOT NULL DEFAULT 0,
    calories REAL NOT NULL DEFAULT 0,
    sleep_hours REAL NOT NULL DEFAULT 0,
    meals_json TEXT NOT NULL DEFAULT '[]',
    note TEXT NOT NULL DEFAULT '',
    updated_at TEXT NOT NULL,
    PRIMARY KEY (athlete, date)
);

CREATE INDEX IF NOT EXISTS idx_daily_logs_date ON daily_logs(date);
"#;

/// Tracks applied schema versions.
pub const SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
);
"#;

/// Current schema version
pub const CURRENT_VERSION: i32 = 1;
