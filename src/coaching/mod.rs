//! Coaching feedback built on top of the plan and the logs.

pub mod quotes;
pub mod readiness;
pub mod suggestions;
pub mod team;

pub use quotes::{quote_of_the_day, QUOTES};
pub use readiness::{
    adherence_readiness, load_history, phase_readiness, training_compliance, ComplianceStatus,
    TrainingCompliance, WeekLoad, READINESS_WEIGHTS,
};
pub use suggestions::{suggestions, Severity, Suggestion, COACHING_TIPS, LOW_MEALS_PCT, LOW_SLEEP_PCT};
pub use team::{AthleteTrend, AthleteWeek, TeamOverview};
