//! Training phases and phase progress.
//!
//! A phase is a fixed, inclusive calendar range with its own weekly volumes.
//! The current phase is recomputed from the date on every call; nothing about
//! phases is persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Weekly training volumes for one phase.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Volumes {
    /// Running distance in km
    pub run_km: f32,
    /// Cycling distance in km
    pub bike_km: f32,
    /// Swimming distance in km
    pub swim_km: f32,
    /// Strength work in minutes
    pub strength_min: f32,
}

impl Volumes {
    pub const fn new(run_km: f32, bike_km: f32, swim_km: f32, strength_min: f32) -> Self {
        Self {
            run_km,
            bike_km,
            swim_km,
            strength_min,
        }
    }

    /// Multiply every volume by `factor`.
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            run_km: self.run_km * factor,
            bike_km: self.bike_km * factor,
            swim_km: self.swim_km * factor,
            strength_min: self.strength_min * factor,
        }
    }

    /// Combined load: distances plus strength minutes counted at a tenth.
    pub fn total_load(&self) -> f32 {
        self.run_km + self.bike_km + self.swim_km + self.strength_min / 10.0
    }
}

/// A named training block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPhase {
    pub name: String,
    /// First day (inclusive)
    pub start: NaiveDate,
    /// Last day (inclusive)
    pub end: NaiveDate,
    /// Volumes in the first week of the phase
    pub base: Volumes,
    /// Ceiling the weekly progression never exceeds
    pub peak: Volumes,
    /// Whether Saturday rides are followed by a brick run
    pub brick_sessions: bool,
}

impl TrainingPhase {
    /// Whether `date` falls inside the phase.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days in the phase, both ends included.
    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Completed weeks since the phase started (0 before the start).
    pub fn weeks_since_start(&self, date: NaiveDate) -> u32 {
        let days = (date - self.start).num_days();
        if days <= 0 {
            0
        } else {
            (days / 7) as u32
        }
    }

    /// Percentage of the phase elapsed by `today`, clamped to 0..=100 and
    /// rounded to one decimal.
    pub fn progress_pct(&self, today: NaiveDate) -> f32 {
        let done = (today.min(self.end) - self.start).num_days() + 1;
        let pct = (done as f32 / self.total_days() as f32 * 100.0).clamp(0.0, 100.0);
        (pct * 10.0).round() / 10.0
    }
}

/// Progress of a single phase for the phase tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseProgress {
    pub phase: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub progress_pct: f32,
}

/// Ordered phase list with a designated fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseCalendar {
    phases: Vec<TrainingPhase>,
    /// Index of the phase used for dates outside every range
    default_index: usize,
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    // Only called with literal, valid dates.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

impl Default for PhaseCalendar {
    fn default() -> Self {
        let base = Volumes::new(5.0, 10.0, 1.0, 20.0);
        let endurance = Volumes::new(10.0, 25.0, 2.0, 20.0);
        let long = Volumes::new(15.0, 35.0, 3.0, 30.0);
        let prep = Volumes::new(20.0, 45.0, 4.0, 30.0);

        Self {
            phases: vec![
                TrainingPhase {
                    name: "Base Phase".to_string(),
                    start: ymd(2025, 10, 1),
                    end: ymd(2025, 12, 31),
                    base,
                    peak: endurance,
                    brick_sessions: false,
                },
                TrainingPhase {
                    name: "Endurance Build".to_string(),
                    start: ymd(2026, 1, 1),
                    end: ymd(2027, 6, 30),
                    base: endurance,
                    peak: long,
                    brick_sessions: true,
                },
                TrainingPhase {
                    name: "Strength & Long Distance".to_string(),
                    start: ymd(2027, 7, 1),
                    end: ymd(2027, 12, 31),
                    base: long,
                    peak: prep,
                    brick_sessions: true,
                },
                TrainingPhase {
                    name: "Peak Ironman Prep".to_string(),
                    start: ymd(2028, 1, 1),
                    end: ymd(2028, 7, 31),
                    base: prep,
                    peak: Volumes::new(30.0, 70.0, 6.0, 40.0),
                    brick_sessions: true,
                },
            ],
            default_index: 0,
        }
    }
}

impl PhaseCalendar {
    /// Build a calendar from explicit phases. Returns `None` when the list is
    /// empty or the default index is out of range.
    pub fn new(phases: Vec<TrainingPhase>, default_index: usize) -> Option<Self> {
        if default_index >= phases.len() {
            return None;
        }
        Some(Self {
            phases,
            default_index,
        })
    }

    pub fn phases(&self) -> &[TrainingPhase] {
        &self.phases
    }

    /// The fallback phase for dates outside every range.
    pub fn default_phase(&self) -> &TrainingPhase {
        &self.phases[self.default_index]
    }

    /// First phase whose range contains `date`, if any.
    pub fn matching_phase(&self, date: NaiveDate) -> Option<&TrainingPhase> {
        self.phases.iter().find(|p| p.contains(date))
    }

    /// Phase for `date`, falling back to the default phase.
    pub fn phase_for(&self, date: NaiveDate) -> &TrainingPhase {
        self.matching_phase(date)
            .unwrap_or_else(|| self.default_phase())
    }

    /// First day of the earliest phase.
    pub fn plan_start(&self) -> NaiveDate {
        self.phases
            .iter()
            .map(|p| p.start)
            .min()
            .unwrap_or_else(|| self.default_phase().start)
    }

    /// Last day of the latest phase.
    pub fn plan_end(&self) -> NaiveDate {
        self.phases
            .iter()
            .map(|p| p.end)
            .max()
            .unwrap_or_else(|| self.default_phase().end)
    }

    /// Progress of every phase as of `today`.
    pub fn progress(&self, today: NaiveDate) -> Vec<PhaseProgress> {
        self.phases
            .iter()
            .map(|p| PhaseProgress {
                phase: p.name.clone(),
                start: p.start,
                end: p.end,
                progress_pct: p.progress_pct(today),
            })
            .collect()
    }

    /// Whether `name` is one of the calendar's phases.
    pub fn has_phase(&self, name: &str) -> bool {
        self.phases.iter().any(|p| p.name == name)
    }
}
