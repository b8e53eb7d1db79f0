//! Integration tests for the team comparison built from stored logs.

use chrono::NaiveDate;
use ironcoach::coaching::TeamOverview;
use ironcoach::storage::{CsvLogStore, DailyLogEntry, LoadPolicy, LogStore};
use ironcoach::team::Roster;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ride(day: NaiveDate, bike_km: f32) -> DailyLogEntry {
    let mut entry = DailyLogEntry::new(day);
    entry.bike_km = bike_km;
    entry
}

#[test]
fn test_overview_from_csv_logs() {
    let dir = TempDir::new().unwrap();
    let store = CsvLogStore::new(dir.path(), LoadPolicy::Lenient).unwrap();
    let roster = Roster::default();

    store.save_entry("Mayur", &ride(date(2026, 10, 13), 20.0)).unwrap();
    store.save_entry("Mayur", &ride(date(2026, 10, 17), 30.0)).unwrap();
    // Previous week only shows up in the trend
    store.save_entry("Sudeep", &ride(date(2026, 10, 10), 15.0)).unwrap();

    let overview = TeamOverview::build(&roster, &store, date(2026, 10, 18), 2);
    assert_eq!(overview.week_start, date(2026, 10, 12));
    assert!(overview.warnings.is_empty());

    let names: Vec<&str> = overview.this_week.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, roster.names());
    assert_eq!(overview.this_week[0].bike_km, 50.0);
    assert_eq!(overview.this_week[1].bike_km, 0.0);
    assert_eq!(overview.this_week[2].bike_km, 0.0);

    let sudeep = &overview.trends[1];
    assert_eq!(
        sudeep.points,
        vec![(date(2026, 10, 5), 15.0), (date(2026, 10, 12), 0.0)]
    );
}

#[test]
fn test_unreadable_log_becomes_warning() {
    let dir = TempDir::new().unwrap();
    let store = CsvLogStore::new(dir.path(), LoadPolicy::Strict).unwrap();
    std::fs::write(
        dir.path().join("Vaishali_log.csv"),
        "Date,Run\n2026-10-13,fast\n",
    )
    .unwrap();

    let overview = TeamOverview::build(&Roster::default(), &store, date(2026, 10, 18), 4);
    assert_eq!(overview.warnings.len(), 1);
    assert!(overview.warnings[0].starts_with("Vaishali"));
    assert_eq!(overview.this_week.len(), 3);
    assert_eq!(overview.this_week[2].run_km, 0.0);
}
