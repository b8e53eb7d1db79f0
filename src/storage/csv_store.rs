//! Per-athlete CSV logs.
//!
//! Each athlete has `<name>_log.csv` in the log directory with the columns
//! `Date,Run,Bike,Swim,Strength,Protein_g,Carbs_g,Fat_g,Calories,SleepHours,Meals,Note`.
//! Files written by older layouts may lack columns; those read as defaults.
//! Saving rewrites the whole file through a temporary file and a rename.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entry::{decode_meals, encode_meals, DailyLogEntry};
use super::log_store::{LoadPolicy, LogStore, StoreError};

/// On-disk row. Every field is read as text so bad values can be handled
/// according to the load policy.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct CsvRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Run")]
    run: String,
    #[serde(rename = "Bike")]
    bike: String,
    #[serde(rename = "Swim")]
    swim: String,
    #[serde(rename = "Strength")]
    strength: String,
    #[serde(rename = "Protein_g")]
    protein_g: String,
    #[serde(rename = "Carbs_g")]
    carbs_g: String,
    #[serde(rename = "Fat_g")]
    fat_g: String,
    #[serde(rename = "Calories")]
    calories: String,
    #[serde(rename = "SleepHours")]
    sleep_hours: String,
    #[serde(rename = "Meals")]
    meals: String,
    #[serde(rename = "Note")]
    note: String,
}

impl From<&DailyLogEntry> for CsvRow {
    fn from(entry: &DailyLogEntry) -> Self {
        Self {
            date: entry.date.format("%Y-%m-%d").to_string(),
            run: entry.run_km.to_string(),
            bike: entry.bike_km.to_string(),
            swim: entry.swim_km.to_string(),
            strength: entry.strength_min.to_string(),
            protein_g: entry.protein_g.to_string(),
            carbs_g: entry.carbs_g.to_string(),
            fat_g: entry.fat_g.to_string(),
            calories: entry.calories.to_string(),
            sleep_hours: entry.sleep_hours.to_string(),
            meals: encode_meals(&entry.meals_checked),
            note: entry.note.clone(),
        }
    }
}

/// CSV-backed log store.
pub struct CsvLogStore {
    dir: PathBuf,
    policy: LoadPolicy,
}

impl CsvLogStore {
    /// Create a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>, policy: LoadPolicy) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir, policy })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of an athlete's log file.
    pub fn path_for(&self, athlete: &str) -> Result<PathBuf, StoreError> {
        let name = athlete.trim();
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidAthlete(athlete.to_string()));
        }
        Ok(self.dir.join(format!("{}_log.csv", name.replace(' ', "_"))))
    }

    fn parse_row(&self, row: CsvRow, line: u64, source: &str) -> Result<Option<DailyLogEntry>, StoreError> {
        let malformed = |message: String| StoreError::MalformedRow {
            source_name: source.to_string(),
            row: line,
            message,
        };

        let date = match NaiveDate::parse_from_str(row.date.trim(), "%Y-%m-%d") {
            Ok(date) => date,
            Err(e) => {
                return match self.policy {
                    LoadPolicy::Strict => Err(malformed(format!("bad date {:?}: {}", row.date, e))),
                    LoadPolicy::Lenient => {
                        tracing::warn!("Skipping row {} in {}: bad date {:?}", line, source, row.date);
                        Ok(None)
                    }
                };
            }
        };

        let number = |column: &str, raw: &str| -> Result<f32, StoreError> {
            let raw = raw.trim();
            if raw.is_empty() {
                return Ok(0.0);
            }
            match raw.parse::<f32>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => match self.policy {
                    LoadPolicy::Strict => Err(malformed(format!("bad {} value {:?}", column, raw))),
                    LoadPolicy::Lenient => {
                        tracing::warn!("Row {} in {}: {} {:?} read as 0", line, source, column, raw);
                        Ok(0.0)
                    }
                },
            }
        };

        Ok(Some(DailyLogEntry {
            date,
            run_km: number("Run", &row.run)?,
            bike_km: number("Bike", &row.bike)?,
            swim_km: number("Swim", &row.swim)?,
            strength_min: number("Strength", &row.strength)?,
            protein_g: number("Protein_g", &row.protein_g)?,
            carbs_g: number("Carbs_g", &row.carbs_g)?,
            fat_g: number("Fat_g", &row.fat_g)?,
            calories: number("Calories", &row.calories)?,
            sleep_hours: number("SleepHours", &row.sleep_hours)?,
            meals_checked: decode_meals(&row.meals),
            note: row.note,
        }))
    }

    fn read_file(&self, path: &Path) -> Result<Vec<DailyLogEntry>, StoreError> {
        let source = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let file = File::open(path)?;
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let headers = reader
            .headers()
            .map_err(|e| StoreError::MalformedRow {
                source_name: source.clone(),
                row: 1,
                message: e.to_string(),
            })?
            .clone();

        // Later rows for the same date win.
        let mut by_date = BTreeMap::new();
        for result in reader.records() {
            let parsed = result.and_then(|record| {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                record
                    .deserialize::<CsvRow>(Some(&headers))
                    .map(|row| (row, line))
            });
            match parsed {
                Ok((row, line)) => {
                    if let Some(entry) = self.parse_row(row, line, &source)? {
                        by_date.insert(entry.date, entry);
                    }
                }
                Err(e) => {
                    let line = e.position().map(|p| p.line()).unwrap_or(0);
                    match self.policy {
                        LoadPolicy::Strict => {
                            return Err(StoreError::MalformedRow {
                                source_name: source,
                                row: line,
                                message: e.to_string(),
                            })
                        }
                        LoadPolicy::Lenient => {
                            tracing::warn!("Skipping unreadable row {} in {}: {}", line, source, e)
                        }
                    }
                }
            }
        }

        Ok(by_date.into_values().collect())
    }

    fn write_file(&self, path: &Path, entries: &[DailyLogEntry]) -> Result<(), StoreError> {
        let tmp = path.with_extension("csv.tmp");
        {
            let mut writer =
                csv::Writer::from_path(&tmp).map_err(|e| StoreError::IoError(e.to_string()))?;
            for entry in entries {
                writer
                    .serialize(CsvRow::from(entry))
                    .map_err(|e| StoreError::SerializationError(e.to_string()))?;
            }
            writer.flush()?;
        }
        std::fs::rename(&tmp, path)?;
        Ok(())
    }
}

impl LogStore for CsvLogStore {
    fn load(&self, athlete: &str) -> Result<Vec<DailyLogEntry>, StoreError> {
        let path = self.path_for(athlete)?;
        if !path.exists() {
            tracing::debug!("No log yet for {}", athlete);
            return Ok(Vec::new());
        }
        let entries = self.read_file(&path)?;
        tracing::debug!("Loaded {} rows for {}", entries.len(), athlete);
        Ok(entries)
    }

    fn save_entry(&self, athlete: &str, entry: &DailyLogEntry) -> Result<(), StoreError> {
        let path = self.path_for(athlete)?;
        let mut entries = self.load(athlete)?;
        entries.retain(|e| e.date != entry.date);

        let entry_date = entry.date;
        let mut entry = entry.clone();
        entry.normalize_meals();
        entries.push(entry);
        entries.sort_by_key(|e| e.date);

        self.write_file(&path, &entries)?;
        tracing::debug!("Saved {} for {} ({} rows)", entry_date, athlete, entries.len());
        Ok(())
    }

    fn describe(&self) -> String {
        format!("CSV logs in {}", self.dir.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = CsvLogStore::new(dir.path(), LoadPolicy::Strict).unwrap();
        assert!(store.load("Mayur").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_path_like_names() {
        let dir = TempDir::new().unwrap();
        let store = CsvLogStore::new(dir.path(), LoadPolicy::Lenient).unwrap();
        assert!(matches!(store.path_for("../etc"), Err(StoreError::InvalidAthlete(_))));
        assert!(store.path_for("   ").is_err());
        assert!(store
            .path_for("Mary Jane")
            .unwrap()
            .ends_with("Mary_Jane_log.csv"));
    }

    #[test]
    fn test_header_is_written() {
        let dir = TempDir::new().unwrap();
        let store = CsvLogStore::new(dir.path(), LoadPolicy::Lenient).unwrap();
        store.save_entry("Mayur", &DailyLogEntry::new(date(2026, 10, 18))).unwrap();

        let content = std::fs::read_to_string(store.path_for("Mayur").unwrap()).unwrap();
        let header = content.lines().next().unwrap();
        assert_eq!(
            header,
            "Date,Run,Bike,Swim,Strength,Protein_g,Carbs_g,Fat_g,Calories,SleepHours,Meals,Note"
        );
    }

    #[test]
    fn test_missing_columns_backfilled() {
        let dir = TempDir::new().unwrap();
        let store = CsvLogStore::new(dir.path(), LoadPolicy::Strict).unwrap();
        std::fs::write(
            store.path_for("Sudeep").unwrap(),
            "Date,Run,Note\n2026-10-01,5.5,easy\n",
        )
        .unwrap();

        let entries = store.load("Sudeep").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].run_km, 5.5);
        assert_eq!(entries[0].bike_km, 0.0);
        assert_eq!(entries[0].note, "easy");
        assert!(entries[0].meals_checked.is_empty());
    }

    #[test]
    fn test_lenient_coerces_and_skips() {
        let dir = TempDir::new().unwrap();
        let store = CsvLogStore::new(dir.path(), LoadPolicy::Lenient).unwrap();
        std::fs::write(
            store.path_for("Vaishali").unwrap(),
            "Date,Run,Bike\n2026-10-01,abc,12\nnot-a-date,1,1\n",
        )
        .unwrap();

        let entries = store.load("Vaishali").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].run_km, 0.0);
        assert_eq!(entries[0].bike_km, 12.0);
    }

    #[test]
    fn test_strict_reports_bad_values() {
        let dir = TempDir::new().unwrap();
        let store = CsvLogStore::new(dir.path(), LoadPolicy::Strict).unwrap();
        std::fs::write(
            store.path_for("Vaishali").unwrap(),
            "Date,Run\n2026-10-01,abc\n",
        )
        .unwrap();

        let err = store.load("Vaishali").unwrap_err();
        assert!(matches!(err, StoreError::MalformedRow { .. }));
    }

    #[test]
    fn test_duplicate_dates_in_file_keep_last() {
        let dir = TempDir::new().unwrap();
        let store = CsvLogStore::new(dir.path(), LoadPolicy::Lenient).unwrap();
        std::fs::write(
            store.path_for("Mayur").unwrap(),
            "Date,Run\n2026-10-02,3\n2026-10-01,1\n2026-10-02,4\n",
        )
        .unwrap();

        let entries = store.load("Mayur").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].date, date(2026, 10, 1));
        assert_eq!(entries[1].run_km, 4.0);
    }

    #[test]
    fn test_note_with_commas_and_quotes() {
        let dir = TempDir::new().unwrap();
        let store = CsvLogStore::new(dir.path(), LoadPolicy::Strict).unwrap();
        let mut entry = DailyLogEntry::new(date(2026, 10, 18));
        entry.note = "tired, \"heavy\" legs".to_string();
        store.save_entry("Mayur", &entry).unwrap();

        let loaded = store.entry_for("Mayur", entry.date).unwrap().unwrap();
        assert_eq!(loaded.note, entry.note);
    }
}
