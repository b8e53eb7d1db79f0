//! Integration tests for both log backends behind `open_store`.

use chrono::NaiveDate;
use ironcoach::nutrition::MealSlot;
use ironcoach::storage::{open_store, AppConfig, DailyLogEntry, LoadPolicy, StorageBackend};
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn config_for(dir: &TempDir, backend: StorageBackend) -> AppConfig {
    let mut config = AppConfig::default();
    config.data_dir = dir.path().to_path_buf();
    config.storage.backend = backend;
    config
}

fn entry(day: NaiveDate, run_km: f32) -> DailyLogEntry {
    let mut entry = DailyLogEntry::new(day);
    entry.run_km = run_km;
    entry.meals_checked = vec![MealSlot::Dinner, MealSlot::Breakfast];
    entry.sleep_hours = 7.5;
    entry.note = "easy, legs heavy".to_string();
    entry
}

fn check_backend(backend: StorageBackend) {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, backend);
    let store = open_store(&config).unwrap();

    store.save_entry("Mayur", &entry(date(2026, 10, 14), 6.0)).unwrap();
    store.save_entry("Mayur", &entry(date(2026, 10, 12), 4.0)).unwrap();
    // Same date again replaces the earlier row
    store.save_entry("Mayur", &entry(date(2026, 10, 14), 8.0)).unwrap();
    store.save_entry("Sudeep", &entry(date(2026, 10, 14), 10.0)).unwrap();

    let mayur = store.load("Mayur").unwrap();
    assert_eq!(mayur.len(), 2, "{}", store.describe());
    assert_eq!(mayur[0].date, date(2026, 10, 12));
    assert_eq!(mayur[1].run_km, 8.0);
    assert_eq!(mayur[1].meals_checked, vec![MealSlot::Breakfast, MealSlot::Dinner]);
    assert_eq!(mayur[1].note, "easy, legs heavy");

    let sudeep = store.load("Sudeep").unwrap();
    assert_eq!(sudeep.len(), 1);
    assert_eq!(sudeep[0].run_km, 10.0);

    assert!(store.load("Vaishali").unwrap().is_empty());

    let one = store.entry_for("Mayur", date(2026, 10, 12)).unwrap();
    assert_eq!(one.map(|e| e.run_km), Some(4.0));
    let range = store
        .range("Mayur", date(2026, 10, 13), date(2026, 10, 18))
        .unwrap();
    assert_eq!(range.len(), 1);
}

#[test]
fn test_csv_backend() {
    check_backend(StorageBackend::Csv);
}

#[test]
fn test_sqlite_backend() {
    check_backend(StorageBackend::Sqlite);
}

#[test]
fn test_sqlite_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, StorageBackend::Sqlite);
    {
        let store = open_store(&config).unwrap();
        store.save_entry("Vaishali", &entry(date(2026, 10, 16), 5.0)).unwrap();
    }
    let store = open_store(&config).unwrap();
    let log = store.load("Vaishali").unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].sleep_hours, 7.5);
}

#[test]
fn test_csv_files_live_under_logs() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, StorageBackend::Csv);
    let store = open_store(&config).unwrap();
    store.save_entry("Mayur", &entry(date(2026, 10, 14), 6.0)).unwrap();
    assert!(dir.path().join("logs").join("Mayur_log.csv").exists());
}

#[test]
fn test_load_policy_applies_to_hand_edited_csv() {
    let dir = TempDir::new().unwrap();
    let logs = dir.path().join("logs");
    std::fs::create_dir_all(&logs).unwrap();
    std::fs::write(
        logs.join("Mayur_log.csv"),
        "Date,Run,Bike\n2026-10-12,5.5,abc\nnot-a-date,1,1\n",
    )
    .unwrap();

    let mut config = config_for(&dir, StorageBackend::Csv);
    let lenient = open_store(&config).unwrap().load("Mayur").unwrap();
    assert_eq!(lenient.len(), 1);
    assert_eq!(lenient[0].run_km, 5.5);
    assert_eq!(lenient[0].bike_km, 0.0);

    config.storage.load_policy = LoadPolicy::Strict;
    assert!(open_store(&config).unwrap().load("Mayur").is_err());
}
