//! Unit tests for readiness scores and suggestions.

use chrono::NaiveDate;
use ironcoach::coaching::{
    adherence_readiness, phase_readiness, quote_of_the_day, suggestions, training_compliance,
    ComplianceStatus, Severity, COACHING_TIPS, QUOTES,
};
use ironcoach::nutrition::{day_adherence, weekly_adherence};
use ironcoach::plan::{PhaseCalendar, PlanGenerator};
use ironcoach::storage::DailyLogEntry;
use ironcoach::team::Roster;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_phase_readiness_bounds() {
    let cal = PhaseCalendar::default();
    assert_eq!(phase_readiness(&cal.progress(date(2025, 1, 1))), 0.0);
    let done = phase_readiness(&cal.progress(date(2029, 1, 1)));
    assert!((done - 100.0).abs() < 0.01);
}

#[test]
fn test_adherence_readiness_weights() {
    let perfect = weekly_adherence(&[day_adherence(9, true)]);
    assert!((adherence_readiness(&perfect, 100.0) - 100.0).abs() < 0.01);

    let none = weekly_adherence(&[day_adherence(0, false)]);
    assert_eq!(adherence_readiness(&none, 0.0), 0.0);
    // Macro share is capped
    assert!((adherence_readiness(&none, 250.0) - 20.0).abs() < 0.01);
}

#[test]
fn test_nothing_logged_is_behind() {
    let generator = PlanGenerator::default();
    let athlete = Roster::default().athletes[0].clone();
    let plans = generator.week_plan(&athlete, date(2026, 10, 14));
    let compliance = training_compliance(&[], &plans);
    assert_eq!(compliance.overall_pct, 0.0);
    assert_eq!(compliance.status(), ComplianceStatus::Behind);
}

#[test]
fn test_entries_outside_plan_days_ignored() {
    let generator = PlanGenerator::default();
    let athlete = Roster::default().athletes[0].clone();
    let plans = vec![generator.daily_plan(&athlete, date(2026, 10, 12))];

    let mut stray = DailyLogEntry::new(date(2026, 10, 1));
    stray.run_km = 50.0;
    let compliance = training_compliance(&[stray], &plans);
    assert_eq!(compliance.logged_load, 0.0);
}

#[test]
fn test_suggestions_put_warnings_first() {
    let generator = PlanGenerator::default();
    let athlete = Roster::default().athletes[0].clone();
    let plans = generator.week_plan(&athlete, date(2026, 10, 14));
    let compliance = training_compliance(&[], &plans);
    let adherence = weekly_adherence(&[day_adherence(2, false)]);
    let phase = generator.calendar().phase_for(date(2026, 10, 12));

    let tips = suggestions(phase, &compliance, &adherence);
    assert_eq!(tips[0].severity, Severity::Warning);
    assert!(tips[0].text.starts_with("Behind on training"));
    assert_eq!(tips[1].severity, Severity::Warning);

    let last: Vec<&str> = tips[tips.len() - COACHING_TIPS.len()..]
        .iter()
        .map(|s| s.text.as_str())
        .collect();
    assert_eq!(last, COACHING_TIPS.to_vec());
}

#[test]
fn test_quote_is_stable_per_day() {
    let day = date(2026, 10, 18);
    assert_eq!(quote_of_the_day(day), quote_of_the_day(day));
    assert!(QUOTES.contains(&quote_of_the_day(day)));
}
