//! Unit tests for phase lookup and plan generation.

use chrono::{Datelike, NaiveDate, Weekday};
use ironcoach::plan::{week_start, Discipline, LoadBand, PhaseCalendar, PlanGenerator};
use ironcoach::team::Roster;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_week_start_is_monday() {
    assert_eq!(week_start(date(2026, 10, 18)), date(2026, 10, 12));
    assert_eq!(week_start(date(2026, 10, 12)), date(2026, 10, 12));
    assert_eq!(week_start(date(2026, 1, 1)), date(2025, 12, 29));
}

#[test]
fn test_phase_boundaries() {
    let cal = PhaseCalendar::default();
    assert_eq!(cal.phase_for(date(2025, 12, 31)).name, "Base Phase");
    assert_eq!(cal.phase_for(date(2026, 1, 1)).name, "Endurance Build");
    assert_eq!(cal.phase_for(date(2027, 7, 1)).name, "Strength & Long Distance");
    assert_eq!(cal.phase_for(date(2028, 7, 31)).name, "Peak Ironman Prep");

    // Outside every range falls back to the base phase
    assert!(cal.matching_phase(date(2030, 1, 1)).is_none());
    assert_eq!(cal.phase_for(date(2030, 1, 1)).name, "Base Phase");
}

#[test]
fn test_first_week_uses_base_volumes() {
    let generator = PlanGenerator::default();
    let athlete = Roster::default().athletes[0].clone();

    // Monday Sep 29 is before the plan, so the fallback phase applies unscaled
    let targets = generator.weekly_targets(&athlete, date(2025, 10, 1));
    assert_eq!(targets.phase, "Base Phase");
    assert_eq!(targets.week_start, date(2025, 9, 29));
    assert_eq!(targets.weeks_into_phase, 0);
    assert_eq!(targets.volumes.run_km, 5.0);
    assert_eq!(targets.volumes.bike_km, 10.0);
    assert_eq!(targets.volumes.swim_km, 1.0);
    assert_eq!(targets.volumes.strength_min, 20.0);
    assert_eq!(targets.volumes.total_load(), 18.0);
}

#[test]
fn test_growth_capped_at_peak() {
    let generator = PlanGenerator::default();
    let athlete = Roster::default().athletes[0].clone();

    let targets = generator.weekly_targets(&athlete, date(2025, 12, 29));
    assert_eq!(targets.weeks_into_phase, 12);
    // 5 * 1.05^12
    assert!((targets.volumes.run_km - 8.979).abs() < 0.01);
    // Strength would pass its 20 minute peak
    assert_eq!(targets.volumes.strength_min, 20.0);
}

#[test]
fn test_zero_increment_keeps_base() {
    let generator = PlanGenerator::new(PhaseCalendar::default(), 0.0);
    let athlete = Roster::default().athletes[0].clone();
    let targets = generator.weekly_targets(&athlete, date(2025, 12, 29));
    assert_eq!(targets.volumes.run_km, 5.0);
}

#[test]
fn test_daily_plan_follows_template() {
    let generator = PlanGenerator::default();
    let athlete = Roster::default().athletes[0].clone();

    // Week of Oct 6 2025: five days into the base phase, no growth yet
    let monday = generator.daily_plan(&athlete, date(2025, 10, 6));
    assert_eq!(monday.weekday, Weekday::Mon);
    assert_eq!(monday.sessions.len(), 1);
    assert_eq!(monday.amount(Discipline::Strength), 10.0);

    let wednesday = generator.daily_plan(&athlete, date(2025, 10, 8));
    assert!((wednesday.amount(Discipline::Bike) - 3.0).abs() < 1e-4);
    assert_eq!(wednesday.amount(Discipline::Run), 0.0);

    let sunday = generator.daily_plan(&athlete, date(2025, 10, 12));
    assert!((sunday.amount(Discipline::Run) - 2.25).abs() < 1e-4);
    assert!(sunday.sessions.iter().all(|s| !s.brick));
}

#[test]
fn test_brick_run_on_saturday() {
    let generator = PlanGenerator::default();
    let athlete = Roster::default().athletes[0].clone();

    let saturday = generator.daily_plan(&athlete, date(2026, 1, 10));
    assert_eq!(saturday.phase, "Endurance Build");
    assert!((saturday.amount(Discipline::Bike) - 17.5).abs() < 1e-4);
    assert!((saturday.amount(Discipline::Run) - 1.0).abs() < 1e-4);
    assert!(saturday
        .sessions
        .iter()
        .any(|s| s.discipline == Discipline::Run && s.brick));

    let sunday = generator.next_day_plan(&athlete, date(2026, 1, 10));
    assert!((sunday.amount(Discipline::Run) - 3.5).abs() < 1e-4);
}

#[test]
fn test_week_plan_covers_monday_to_sunday() {
    let generator = PlanGenerator::default();
    let athlete = Roster::default().athletes[1].clone();
    let week = generator.week_plan(&athlete, date(2026, 10, 15));
    assert_eq!(week.len(), 7);
    assert_eq!(week[0].date, date(2026, 10, 12));
    assert_eq!(week[6].date, date(2026, 10, 18));
}

#[test]
fn test_calendar_weeks_span_plan() {
    let generator = PlanGenerator::default();
    let athlete = Roster::default().athletes[0].clone();
    let weeks = generator.calendar_weeks(&athlete);

    assert_eq!(weeks.first().map(|w| w.week_start), Some(date(2025, 10, 6)));
    assert_eq!(weeks.last().map(|w| w.week_start), Some(date(2028, 7, 31)));
    assert!(weeks.iter().all(|w| w.week_start.weekday() == Weekday::Mon));
    assert!(weeks.iter().all(|w| w.load_band != LoadBand::Low));
}

#[test]
fn test_current_week_before_plan() {
    let generator = PlanGenerator::default();
    let athlete = Roster::default().athletes[0].clone();
    assert!(generator.current_week(&athlete, date(2025, 9, 1)).is_none());
    let current = generator.current_week(&athlete, date(2026, 10, 18)).unwrap();
    assert_eq!(current.week_start, date(2026, 10, 12));
}

#[test]
fn test_load_bands() {
    assert_eq!(LoadBand::from_load(0.0), LoadBand::Low);
    assert_eq!(LoadBand::from_load(29.9), LoadBand::Medium);
    assert_eq!(LoadBand::from_load(30.0), LoadBand::High);
}

#[test]
fn test_targets_hold_for_every_day() {
    let generator = PlanGenerator::default();
    let calendar = generator.calendar();
    let roster = Roster::default();
    let end = date(2029, 1, 1);

    for athlete in &roster.athletes {
        let mut day = date(2025, 1, 1);
        let mut previous: Option<(NaiveDate, ironcoach::plan::WeeklyTargets)> = None;

        while day <= end {
            let targets = generator.weekly_targets(athlete, day);
            assert_eq!(targets, generator.weekly_targets(athlete, day), "{}", day);
            assert_eq!(
                generator.daily_plan(athlete, day),
                generator.daily_plan(athlete, day),
                "{}",
                day
            );
            assert!(calendar.has_phase(&targets.phase), "{} {}", day, targets.phase);
            for discipline in Discipline::ALL {
                assert!(discipline.amount(&targets.volumes) >= 0.0, "{} {}", day, discipline);
            }

            if let Some((prev_day, prev)) = &previous {
                let in_plan = calendar.matching_phase(*prev_day).is_some()
                    && calendar.matching_phase(day).is_some();
                if in_plan && prev.phase == targets.phase {
                    for discipline in Discipline::ALL {
                        assert!(
                            discipline.amount(&targets.volumes)
                                >= discipline.amount(&prev.volumes),
                            "{} fell on {} for {}",
                            discipline,
                            day,
                            athlete.name
                        );
                    }
                }
            }

            previous = Some((day, targets));
            day += chrono::Duration::days(1);
        }
    }
}
