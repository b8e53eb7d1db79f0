//! Integration tests for the tick-save-reload cycle of a day.

use chrono::NaiveDate;
use ironcoach::nutrition::{day_adherence, weekly_adherence, MealSlot};
use ironcoach::plan::{Discipline, PlanGenerator};
use ironcoach::session::{CheckField, SessionState};
use ironcoach::storage::{CsvLogStore, LoadPolicy, LogStore};
use ironcoach::ui::screens::nutrition::day_in_week;
use ironcoach::team::Roster;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_saved_day_restores_boxes() {
    let dir = TempDir::new().unwrap();
    let store = CsvLogStore::new(dir.path(), LoadPolicy::Lenient).unwrap();
    let generator = PlanGenerator::default();
    let athlete = Roster::default().athletes[1].clone();
    // Tuesday: run and swim
    let day = date(2026, 10, 13);
    let plan = generator.daily_plan(&athlete, day);

    let mut session = SessionState::new();
    session.seed_from_entry(&athlete.name, day, None);
    session.set(&athlete.name, day, CheckField::Run, true);
    session.set(&athlete.name, day, CheckField::Meal(MealSlot::Lunch), true);
    session.set(&athlete.name, day, CheckField::Sleep, true);
    let entry = session.to_entry(&athlete.name, day, &plan, None, 8.0);
    store.save_entry(&athlete.name, &entry).unwrap();

    // A fresh session picks the day up from disk
    let stored = store.entry_for(&athlete.name, day).unwrap().unwrap();
    assert_eq!(stored.run_km, plan.amount(Discipline::Run));
    assert_eq!(stored.swim_km, 0.0);
    assert_eq!(stored.sleep_hours, 8.0);

    let mut restored = SessionState::new();
    assert!(restored.seed_from_entry(&athlete.name, day, Some(&stored)));
    assert!(restored.is_checked(&athlete.name, day, CheckField::Run));
    assert!(!restored.is_checked(&athlete.name, day, CheckField::Swim));
    assert!(restored.slept(&athlete.name, day));
    assert_eq!(restored.meals_done(&athlete.name, day), 1);
}

#[test]
fn test_resave_keeps_note_and_macros() {
    let dir = TempDir::new().unwrap();
    let store = CsvLogStore::new(dir.path(), LoadPolicy::Lenient).unwrap();
    let generator = PlanGenerator::default();
    let athlete = Roster::default().athletes[0].clone();
    let day = date(2026, 10, 18);
    let plan = generator.daily_plan(&athlete, day);

    let mut session = SessionState::new();
    let mut first = session.to_entry(&athlete.name, day, &plan, None, 7.5);
    first.note = "long run, 28C".to_string();
    first.protein_g = 150.0;
    store.save_entry(&athlete.name, &first).unwrap();

    let base = store.entry_for(&athlete.name, day).unwrap();
    session.set(&athlete.name, day, CheckField::Run, true);
    let second = session.to_entry(&athlete.name, day, &plan, base.as_ref(), 7.5);
    store.save_entry(&athlete.name, &second).unwrap();

    let log = store.load(&athlete.name).unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].note, "long run, 28C");
    assert_eq!(log[0].protein_g, 150.0);
    assert!(log[0].run_km > 0.0);
}

#[test]
fn test_ticking_earlier_day_counts_for_the_week() {
    let dir = TempDir::new().unwrap();
    let store = CsvLogStore::new(dir.path(), LoadPolicy::Lenient).unwrap();
    let generator = PlanGenerator::default();
    let athlete = Roster::default().athletes[2].clone();
    // Thursday, editing Monday of the same week
    let today = date(2026, 10, 15);
    let monday = day_in_week(Some(date(2026, 10, 12)), today);
    assert_eq!(monday, date(2026, 10, 12));

    let week = |session: &SessionState| {
        let days: Vec<_> = (12..=15)
            .map(|d| date(2026, 10, d))
            .map(|d| {
                day_adherence(
                    session.meals_done(&athlete.name, d),
                    session.slept(&athlete.name, d),
                )
            })
            .collect();
        weekly_adherence(&days)
    };

    let mut session = SessionState::new();
    let before = week(&session);
    for slot in MealSlot::ALL {
        session.set(&athlete.name, monday, CheckField::Meal(slot), true);
    }
    session.set(&athlete.name, monday, CheckField::Sleep, true);
    let plan = generator.daily_plan(&athlete, monday);
    let entry = session.to_entry(&athlete.name, monday, &plan, None, 8.0);
    store.save_entry(&athlete.name, &entry).unwrap();

    let stored = store.entry_for(&athlete.name, monday).unwrap().unwrap();
    let mut reloaded = SessionState::new();
    reloaded.seed_from_entry(&athlete.name, monday, Some(&stored));
    let after = week(&reloaded);
    assert!(after.meals_pct > before.meals_pct);
    assert!(after.sleep_pct > before.sleep_pct);
    assert_eq!(reloaded.meals_done(&athlete.name, monday), MealSlot::ALL.len());
}
