//! Weekly coaching suggestions.

use crate::nutrition::WeeklyAdherence;
use crate::plan::TrainingPhase;

use super::readiness::{ComplianceStatus, TrainingCompliance};

/// Standing advice shown every week.
pub const COACHING_TIPS: [&str; 4] = [
    "Gradually increase mileage by 5-10% per week to avoid injuries.",
    "Incorporate brick sessions (Bike -> Run) starting Endurance Build phase.",
    "Track sleep & meals consistently; low adherence may reduce next week's intensity.",
    "Monitor fatigue and adjust strength sessions if needed.",
];

/// Meal adherence below this earns a nutrition reminder.
pub const LOW_MEALS_PCT: f32 = 60.0;

/// Sleep adherence below this (fewer than five good nights in seven) earns
/// a sleep reminder.
pub const LOW_SLEEP_PCT: f32 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub text: String,
    pub severity: Severity,
}

impl Suggestion {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Info,
        }
    }

    fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Warning,
        }
    }
}

/// Warnings first, then phase notes, then the standing tips.
pub fn suggestions(
    phase: &TrainingPhase,
    compliance: &TrainingCompliance,
    adherence: &WeeklyAdherence,
) -> Vec<Suggestion> {
    let mut out = Vec::new();

    match compliance.status() {
        ComplianceStatus::Behind => out.push(Suggestion::warning(format!(
            "Behind on training: {:.0}% of this week's planned load so far. Prioritise the key sessions.",
            compliance.overall_pct
        ))),
        ComplianceStatus::Ahead => out.push(Suggestion::info(format!(
            "Ahead of plan at {:.0}%. Keep an eye on fatigue before adding more.",
            compliance.overall_pct
        ))),
        ComplianceStatus::OnTrack => {}
    }

    if adherence.meals_pct < LOW_MEALS_PCT {
        out.push(Suggestion::warning(format!(
            "Meal adherence is {:.0}%. Prep tomorrow's meals tonight and tick them off as you go.",
            adherence.meals_pct
        )));
    }
    if adherence.sleep_pct < LOW_SLEEP_PCT {
        out.push(Suggestion::info(
            "Sleep is slipping. Aim for a consistent bedtime this week.",
        ));
    }

    if phase.brick_sessions {
        out.push(Suggestion::info(format!(
            "{}: Saturday's run goes straight off the bike.",
            phase.name
        )));
    }

    out.extend(COACHING_TIPS.iter().map(|tip| Suggestion::info(*tip)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::PhaseCalendar;
    use std::collections::BTreeMap;

    fn compliance(pct: f32) -> TrainingCompliance {
        TrainingCompliance {
            by_discipline: BTreeMap::new(),
            overall_pct: pct,
            planned_load: 10.0,
            logged_load: pct / 10.0,
        }
    }

    fn good_adherence() -> WeeklyAdherence {
        WeeklyAdherence {
            meals_pct: 90.0,
            sleep_pct: 100.0,
        }
    }

    #[test]
    fn test_fixed_tips_always_present() {
        let calendar = PhaseCalendar::default();
        let list = suggestions(calendar.default_phase(), &compliance(100.0), &good_adherence());
        assert_eq!(list.len(), COACHING_TIPS.len());
        assert!(list.iter().all(|s| s.severity == Severity::Info));
    }

    #[test]
    fn test_behind_warning() {
        let calendar = PhaseCalendar::default();
        let list = suggestions(calendar.default_phase(), &compliance(40.0), &good_adherence());
        assert_eq!(list[0].severity, Severity::Warning);
        assert!(list[0].text.starts_with("Behind on training"));
    }

    #[test]
    fn test_low_meals_and_brick_note() {
        let calendar = PhaseCalendar::default();
        let build = &calendar.phases()[1];
        let adherence = WeeklyAdherence {
            meals_pct: 30.0,
            sleep_pct: 100.0,
        };
        let list = suggestions(build, &compliance(90.0), &adherence);
        assert!(list[0].text.starts_with("Meal adherence is 30%"));
        assert!(list.iter().any(|s| s.text.contains("straight off the bike")));
        assert_eq!(list.len(), COACHING_TIPS.len() + 2);
    }

    #[test]
    fn test_sleep_reminder_has_its_own_threshold() {
        let calendar = PhaseCalendar::default();
        let sleep_tip = |sleep_pct: f32| {
            let adherence = WeeklyAdherence {
                meals_pct: 90.0,
                sleep_pct,
            };
            suggestions(calendar.default_phase(), &compliance(100.0), &adherence)
                .iter()
                .any(|s| s.text.starts_with("Sleep is slipping"))
        };
        // Above the meal bar, still under the sleep bar
        assert!(sleep_tip(65.0));
        assert!(!sleep_tip(5.0 / 7.0 * 100.0));
    }
}
