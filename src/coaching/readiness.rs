//! Race readiness and training compliance.
//!
//! - Phase readiness: weighted sum of phase progress
//! - Adherence readiness: meals, sleep and macros blended into one score
//! - Compliance: logged volume against planned volume for the elapsed week

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::nutrition::WeeklyAdherence;
use crate::plan::{week_start, DailyPlan, Discipline, PhaseProgress, PlanGenerator, Volumes};
use crate::storage::DailyLogEntry;
use crate::team::Athlete;

/// Weight of each phase, in calendar order.
pub const READINESS_WEIGHTS: [f32; 4] = [0.1, 0.4, 0.25, 0.25];

/// Overall compliance below this is flagged as behind on training.
pub const BEHIND_THRESHOLD_PCT: f32 = 70.0;

/// Weighted sum of phase progress percentages. Phases beyond the weight
/// table count as zero.
pub fn phase_readiness(progress: &[PhaseProgress]) -> f32 {
    progress
        .iter()
        .zip(READINESS_WEIGHTS.iter())
        .map(|(p, w)| p.progress_pct * w)
        .sum()
}

/// `0.5 * meals + 0.3 * sleep + 0.2 * macros`, all in percent.
pub fn adherence_readiness(weekly: &WeeklyAdherence, macro_pct: f32) -> f32 {
    0.5 * weekly.meals_pct + 0.3 * weekly.sleep_pct + 0.2 * macro_pct.clamp(0.0, 100.0)
}

/// Compliance classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceStatus {
    /// Under 70% of the planned load
    Behind,
    /// 70% to 110%
    OnTrack,
    /// Over 110%
    Ahead,
}

impl ComplianceStatus {
    pub fn from_pct(pct: f32) -> Self {
        if pct < BEHIND_THRESHOLD_PCT {
            ComplianceStatus::Behind
        } else if pct <= 110.0 {
            ComplianceStatus::OnTrack
        } else {
            ComplianceStatus::Ahead
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComplianceStatus::Behind => "Behind",
            ComplianceStatus::OnTrack => "On track",
            ComplianceStatus::Ahead => "Ahead",
        }
    }
}

/// Logged against planned volume.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingCompliance {
    /// Percent per discipline; absent when nothing was planned
    pub by_discipline: BTreeMap<Discipline, f32>,
    /// Logged load over planned load, in percent
    pub overall_pct: f32,
    pub planned_load: f32,
    pub logged_load: f32,
}

impl TrainingCompliance {
    pub fn status(&self) -> ComplianceStatus {
        ComplianceStatus::from_pct(self.overall_pct)
    }

    pub fn is_behind(&self) -> bool {
        self.status() == ComplianceStatus::Behind
    }
}

fn logged_volumes<'a>(entries: impl Iterator<Item = &'a DailyLogEntry>) -> Volumes {
    entries.fold(Volumes::default(), |acc, e| {
        Volumes::new(
            acc.run_km + e.run_km,
            acc.bike_km + e.bike_km,
            acc.swim_km + e.swim_km,
            acc.strength_min + e.strength_min,
        )
    })
}

/// Compare logged rows with the plans for the same days.
///
/// Only entries dated on one of the plan days count. With nothing planned
/// the week is fully compliant.
pub fn training_compliance(entries: &[DailyLogEntry], plans: &[DailyPlan]) -> TrainingCompliance {
    let mut planned: BTreeMap<Discipline, f32> = BTreeMap::new();
    let mut logged: BTreeMap<Discipline, f32> = BTreeMap::new();

    for plan in plans {
        for discipline in Discipline::ALL {
            *planned.entry(discipline).or_default() += plan.amount(discipline);
        }
        for entry in entries.iter().filter(|e| e.date == plan.date) {
            for discipline in Discipline::ALL {
                *logged.entry(discipline).or_default() += entry.amount(discipline);
            }
        }
    }

    let get = |map: &BTreeMap<Discipline, f32>, d: Discipline| map.get(&d).copied().unwrap_or(0.0);

    let by_discipline = Discipline::ALL
        .into_iter()
        .filter(|d| get(&planned, *d) > 0.0)
        .map(|d| (d, get(&logged, d) / get(&planned, d) * 100.0))
        .collect();

    let volumes = |map: &BTreeMap<Discipline, f32>| {
        Volumes::new(
            get(map, Discipline::Run),
            get(map, Discipline::Bike),
            get(map, Discipline::Swim),
            get(map, Discipline::Strength),
        )
    };
    let planned_load = volumes(&planned).total_load();
    let logged_load = volumes(&logged).total_load();
    let overall_pct = if planned_load > 0.0 {
        logged_load / planned_load * 100.0
    } else {
        100.0
    };

    TrainingCompliance {
        by_discipline,
        overall_pct,
        planned_load,
        logged_load,
    }
}

/// Planned and logged load for one week.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekLoad {
    pub week_start: NaiveDate,
    pub planned: f32,
    pub logged: f32,
}

/// Planned against logged load for the `weeks` weeks ending with the week
/// containing `today`, oldest first.
pub fn load_history(
    generator: &PlanGenerator,
    athlete: &Athlete,
    entries: &[DailyLogEntry],
    today: NaiveDate,
    weeks: u32,
) -> Vec<WeekLoad> {
    let current = week_start(today);
    (0..weeks.max(1) as i64)
        .rev()
        .map(|back| {
            let monday = current - Duration::days(7 * back);
            let sunday = monday + Duration::days(6);
            let logged = logged_volumes(
                entries
                    .iter()
                    .filter(|e| e.date >= monday && e.date <= sunday),
            );
            WeekLoad {
                week_start: monday,
                planned: generator.weekly_targets(athlete, monday).volumes.total_load(),
                logged: logged.total_load(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::PlanGenerator;
    use crate::team::Roster;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn progress(pcts: &[f32]) -> Vec<PhaseProgress> {
        pcts.iter()
            .map(|p| PhaseProgress {
                phase: "x".to_string(),
                start: date(2026, 1, 1),
                end: date(2026, 2, 1),
                progress_pct: *p,
            })
            .collect()
    }

    #[test]
    fn test_phase_readiness_weights() {
        assert!((phase_readiness(&progress(&[100.0, 100.0, 100.0, 100.0])) - 100.0).abs() < 1e-4);
        assert!((phase_readiness(&progress(&[100.0, 50.0, 0.0, 0.0])) - 30.0).abs() < 1e-4);
        // Fifth phase has no weight
        assert!((phase_readiness(&progress(&[0.0, 0.0, 0.0, 0.0, 100.0]))).abs() < 1e-6);
    }

    #[test]
    fn test_adherence_readiness() {
        let weekly = WeeklyAdherence {
            meals_pct: 80.0,
            sleep_pct: 50.0,
        };
        assert!((adherence_readiness(&weekly, 100.0) - 75.0).abs() < 1e-4);
    }

    #[test]
    fn test_compliance_status_bands() {
        assert_eq!(ComplianceStatus::from_pct(69.9), ComplianceStatus::Behind);
        assert_eq!(ComplianceStatus::from_pct(70.0), ComplianceStatus::OnTrack);
        assert_eq!(ComplianceStatus::from_pct(110.0), ComplianceStatus::OnTrack);
        assert_eq!(ComplianceStatus::from_pct(125.0), ComplianceStatus::Ahead);
    }

    #[test]
    fn test_training_compliance() {
        let generator = PlanGenerator::default();
        let athlete = Roster::default().athletes[0].clone();
        // Tuesday and Wednesday of the week of 2026-10-12
        let plans = vec![
            generator.daily_plan(&athlete, date(2026, 10, 13)),
            generator.daily_plan(&athlete, date(2026, 10, 14)),
        ];

        let mut tue = DailyLogEntry::new(date(2026, 10, 13));
        tue.run_km = plans[0].amount(Discipline::Run);
        tue.swim_km = plans[0].amount(Discipline::Swim);
        // Outside the planned days, ignored
        let mut other = DailyLogEntry::new(date(2026, 10, 1));
        other.bike_km = 500.0;

        let compliance = training_compliance(&[tue, other], &plans);
        assert!((compliance.by_discipline[&Discipline::Run] - 100.0).abs() < 1e-3);
        assert_eq!(compliance.by_discipline[&Discipline::Bike], 0.0);
        assert!(!compliance.by_discipline.contains_key(&Discipline::Strength));
        assert!(compliance.overall_pct < 70.0);
        assert!(compliance.is_behind());
    }

    #[test]
    fn test_load_history() {
        let generator = PlanGenerator::default();
        let athlete = Roster::default().athletes[0].clone();
        let mut entry = DailyLogEntry::new(date(2026, 10, 14));
        entry.run_km = 10.0;
        entry.strength_min = 30.0;

        let history = load_history(&generator, &athlete, &[entry], date(2026, 10, 18), 4);
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].week_start, date(2026, 9, 21));
        assert_eq!(history[3].week_start, date(2026, 10, 12));
        assert!((history[3].logged - 13.0).abs() < 1e-4);
        assert_eq!(history[2].logged, 0.0);
        assert!(history.iter().all(|w| w.planned > 0.0));
    }

    #[test]
    fn test_nothing_planned_is_compliant() {
        let compliance = training_compliance(&[], &[]);
        assert_eq!(compliance.overall_pct, 100.0);
        assert_eq!(compliance.status(), ComplianceStatus::OnTrack);
    }
}
