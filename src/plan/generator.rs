//! Weekly and daily training targets.
//!
//! Targets are a pure function of athlete and date. The week containing the
//! date is resolved to its Monday, the phase is looked up from that Monday,
//! and volumes grow geometrically from the phase base until they hit the
//! phase peak.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::phases::{PhaseCalendar, TrainingPhase, Volumes};
use crate::team::Athlete;

/// Default week-over-week volume increase.
pub const DEFAULT_WEEKLY_INCREMENT: f32 = 0.05;

/// Training discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Discipline {
    Run,
    Bike,
    Swim,
    Strength,
}

impl Discipline {
    pub const ALL: [Discipline; 4] = [
        Discipline::Run,
        Discipline::Bike,
        Discipline::Swim,
        Discipline::Strength,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Discipline::Run => "Run",
            Discipline::Bike => "Bike",
            Discipline::Swim => "Swim",
            Discipline::Strength => "Strength",
        }
    }

    /// Unit of the planned amount.
    pub fn unit(&self) -> &'static str {
        match self {
            Discipline::Strength => "min",
            _ => "km",
        }
    }

    /// Pick this discipline's amount out of a volume set.
    pub fn amount(&self, volumes: &Volumes) -> f32 {
        match self {
            Discipline::Run => volumes.run_km,
            Discipline::Bike => volumes.bike_km,
            Discipline::Swim => volumes.swim_km,
            Discipline::Strength => volumes.strength_min,
        }
    }
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Share of each weekly volume scheduled per weekday, Monday first.
/// Columns: run, bike, swim, strength.
const WEEK_TEMPLATE: [[f32; 4]; 7] = [
    [0.0, 0.0, 0.0, 0.5],
    [0.3, 0.0, 0.5, 0.0],
    [0.0, 0.3, 0.0, 0.0],
    [0.25, 0.0, 0.0, 0.5],
    [0.0, 0.0, 0.5, 0.0],
    [0.0, 0.7, 0.0, 0.0],
    [0.45, 0.0, 0.0, 0.0],
];

/// Share of the weekly run moved from Sunday to the Saturday brick.
const BRICK_RUN_SHARE: f32 = 0.1;

fn run_share(weekday: Weekday, brick: bool) -> f32 {
    match (weekday, brick) {
        (Weekday::Sat, true) => BRICK_RUN_SHARE,
        (Weekday::Sun, true) => WEEK_TEMPLATE[6][0] - BRICK_RUN_SHARE,
        _ => WEEK_TEMPLATE[weekday.num_days_from_monday() as usize][0],
    }
}

/// One planned session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    pub discipline: Discipline,
    /// Distance in km, or minutes for strength
    pub amount: f32,
    /// Run straight off the bike
    pub brick: bool,
}

impl Session {
    pub fn unit(&self) -> &'static str {
        self.discipline.unit()
    }
}

/// Targets for one training week.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyTargets {
    pub phase: String,
    /// Monday of the week
    pub week_start: NaiveDate,
    /// Completed weeks since the phase started
    pub weeks_into_phase: u32,
    pub volumes: Volumes,
}

/// Sessions planned for a single day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPlan {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub phase: String,
    pub sessions: Vec<Session>,
}

impl DailyPlan {
    /// True when nothing is scheduled.
    pub fn is_rest_day(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Planned amount for a discipline (zero when not scheduled).
    pub fn amount(&self, discipline: Discipline) -> f32 {
        self.sessions
            .iter()
            .filter(|s| s.discipline == discipline)
            .map(|s| s.amount)
            .sum()
    }
}

/// Load classification for the calendar table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadBand {
    Low,
    Medium,
    High,
}

impl LoadBand {
    pub fn from_load(load: f32) -> Self {
        if load <= 0.0 {
            LoadBand::Low
        } else if load < 30.0 {
            LoadBand::Medium
        } else {
            LoadBand::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoadBand::Low => "Low",
            LoadBand::Medium => "Medium",
            LoadBand::High => "High",
        }
    }
}

/// One row of the multi-year calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarWeek {
    pub week_start: NaiveDate,
    pub phase: String,
    pub volumes: Volumes,
    pub total_load: f32,
    pub load_band: LoadBand,
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Produces training targets from the phase calendar.
#[derive(Debug, Clone)]
pub struct PlanGenerator {
    calendar: PhaseCalendar,
    weekly_increment: f32,
}

impl Default for PlanGenerator {
    fn default() -> Self {
        Self::new(PhaseCalendar::default(), DEFAULT_WEEKLY_INCREMENT)
    }
}

impl PlanGenerator {
    /// Create a generator. Negative increments are treated as zero.
    pub fn new(calendar: PhaseCalendar, weekly_increment: f32) -> Self {
        Self {
            calendar,
            weekly_increment: weekly_increment.max(0.0),
        }
    }

    pub fn calendar(&self) -> &PhaseCalendar {
        &self.calendar
    }

    pub fn weekly_increment(&self) -> f32 {
        self.weekly_increment
    }

    /// Phase and completed weeks for `date`.
    ///
    /// Dates outside every phase get the default phase at week 0. Otherwise
    /// a week takes its Monday's phase, or the date's own phase at week 0
    /// when that Monday precedes the plan.
    fn phase_and_weeks(&self, date: NaiveDate) -> (&TrainingPhase, u32) {
        let Some(own) = self.calendar.matching_phase(date) else {
            return (self.calendar.default_phase(), 0);
        };
        let monday = week_start(date);
        match self.calendar.matching_phase(monday) {
            Some(phase) => (phase, phase.weeks_since_start(monday)),
            None => (own, 0),
        }
    }

    /// Weekly targets for the week containing `date`.
    pub fn weekly_targets(&self, athlete: &Athlete, date: NaiveDate) -> WeeklyTargets {
        let (phase, weeks) = self.phase_and_weeks(date);
        let growth = (1.0 + self.weekly_increment).powi(weeks as i32);
        let grow = |base: f32, peak: f32| (base * growth).min(peak.max(base)).max(0.0);

        let volumes = Volumes::new(
            grow(phase.base.run_km, phase.peak.run_km),
            grow(phase.base.bike_km, phase.peak.bike_km),
            grow(phase.base.swim_km, phase.peak.swim_km),
            grow(phase.base.strength_min, phase.peak.strength_min),
        )
        .scaled(athlete.volume_factor.max(0.0));

        WeeklyTargets {
            phase: phase.name.clone(),
            week_start: week_start(date),
            weeks_into_phase: weeks,
            volumes,
        }
    }

    /// Sessions planned for `date`.
    pub fn daily_plan(&self, athlete: &Athlete, date: NaiveDate) -> DailyPlan {
        let (phase, _) = self.phase_and_weeks(date);
        let brick = phase.brick_sessions;
        let targets = self.weekly_targets(athlete, date);
        let weekday = date.weekday();
        let row = WEEK_TEMPLATE[weekday.num_days_from_monday() as usize];

        let mut sessions = Vec::new();
        for (column, discipline) in Discipline::ALL.iter().enumerate() {
            let share = if *discipline == Discipline::Run {
                run_share(weekday, brick)
            } else {
                row[column]
            };
            let amount = discipline.amount(&targets.volumes) * share;
            if amount > 0.0 {
                sessions.push(Session {
                    discipline: *discipline,
                    amount,
                    brick: brick && *discipline == Discipline::Run && weekday == Weekday::Sat,
                });
            }
        }

        DailyPlan {
            date,
            weekday,
            phase: targets.phase,
            sessions,
        }
    }

    /// Plan for the day after `date`.
    pub fn next_day_plan(&self, athlete: &Athlete, date: NaiveDate) -> DailyPlan {
        self.daily_plan(athlete, date + Duration::days(1))
    }

    /// Monday-to-Sunday plans for the week containing `date`.
    pub fn week_plan(&self, athlete: &Athlete, date: NaiveDate) -> Vec<DailyPlan> {
        let monday = week_start(date);
        (0..7)
            .map(|offset| self.daily_plan(athlete, monday + Duration::days(offset)))
            .collect()
    }

    /// One row per Monday from the first Monday on or after the plan start
    /// through the plan end.
    pub fn calendar_weeks(&self, athlete: &Athlete) -> Vec<CalendarWeek> {
        let start = self.calendar.plan_start();
        let end = self.calendar.plan_end();
        let offset = (7 - start.weekday().num_days_from_monday() as i64) % 7;
        let mut monday = start + Duration::days(offset);

        let mut weeks = Vec::new();
        while monday <= end {
            let targets = self.weekly_targets(athlete, monday);
            let total_load = targets.volumes.total_load();
            weeks.push(CalendarWeek {
                week_start: monday,
                phase: targets.phase,
                volumes: targets.volumes,
                total_load,
                load_band: LoadBand::from_load(total_load),
            });
            monday += Duration::days(7);
        }
        weeks
    }

    /// Calendar row for the current week; `None` before the plan starts.
    pub fn current_week(&self, athlete: &Athlete, today: NaiveDate) -> Option<CalendarWeek> {
        self.calendar_weeks(athlete)
            .into_iter()
            .take_while(|w| w.week_start <= today)
            .last()
    }
}
