//! Training plan generation.
//!
//! Provides:
//! - The fixed phase calendar and phase progress
//! - Weekly targets with capped geometric progression
//! - Daily, next-day and weekly session plans
//! - The multi-year calendar with load bands

pub mod generator;
pub mod phases;

pub use generator::{
    week_start, CalendarWeek, DailyPlan, Discipline, LoadBand, PlanGenerator, Session,
    WeeklyTargets, DEFAULT_WEEKLY_INCREMENT,
};
pub use phases::{PhaseCalendar, PhaseProgress, TrainingPhase, Volumes};
