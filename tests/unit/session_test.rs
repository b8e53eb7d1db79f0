//! Unit tests for turning check boxes into log rows.

use chrono::{Duration, NaiveDate};
use ironcoach::coaching::{training_compliance, ComplianceStatus};
use ironcoach::nutrition::MealSlot;
use ironcoach::plan::{Discipline, PlanGenerator};
use ironcoach::session::{CheckField, SessionState};
use ironcoach::team::Roster;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_ticking_every_session_is_fully_compliant() {
    let generator = PlanGenerator::default();
    let athlete = Roster::default().athletes[2].clone();
    let monday = date(2026, 10, 12);

    let mut state = SessionState::new();
    let mut plans = Vec::new();
    let mut entries = Vec::new();
    for offset in 0..3 {
        let day = monday + Duration::days(offset);
        let plan = generator.daily_plan(&athlete, day);
        for session in &plan.sessions {
            state.set(&athlete.name, day, CheckField::activity(session.discipline), true);
        }
        entries.push(state.to_entry(&athlete.name, day, &plan, None, 7.5));
        plans.push(plan);
    }

    let compliance = training_compliance(&entries, &plans);
    assert!((compliance.overall_pct - 100.0).abs() < 0.01);
    assert_eq!(compliance.status(), ComplianceStatus::OnTrack);
}

#[test]
fn test_unticking_clears_amount() {
    let generator = PlanGenerator::default();
    let athlete = Roster::default().athletes[0].clone();
    // Tuesday: run and swim
    let day = date(2026, 10, 13);
    let plan = generator.daily_plan(&athlete, day);

    let mut state = SessionState::new();
    state.set(&athlete.name, day, CheckField::Swim, true);
    let first = state.to_entry(&athlete.name, day, &plan, None, 7.5);
    assert_eq!(first.swim_km, plan.amount(Discipline::Swim));
    assert_eq!(first.run_km, 0.0);

    state.set(&athlete.name, day, CheckField::Swim, false);
    let second = state.to_entry(&athlete.name, day, &plan, Some(&first), 7.5);
    assert_eq!(second.swim_km, 0.0);
}

#[test]
fn test_athletes_and_days_do_not_share_boxes() {
    let mut state = SessionState::new();
    let day = date(2026, 10, 18);
    state.set("Mayur", day, CheckField::Meal(MealSlot::Lunch), true);

    assert_eq!(state.meals_done("Mayur", day), 1);
    assert_eq!(state.meals_done("Sudeep", day), 0);
    assert_eq!(state.meals_done("Mayur", day + Duration::days(1)), 0);
}
