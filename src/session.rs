//! Checkbox state for the dashboard.
//!
//! Every tick box the UI shows is keyed by `(athlete, date, field)`. The first
//! time a day is viewed its boxes are seeded from the stored log; afterwards the
//! map is the source of truth and is converted back into a log row on change.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::nutrition::MealSlot;
use crate::plan::{DailyPlan, Discipline};
use crate::storage::DailyLogEntry;

/// A single tick box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckField {
    Run,
    Bike,
    Swim,
    Strength,
    Meal(MealSlot),
    Sleep,
}

impl CheckField {
    pub fn activity(discipline: Discipline) -> Self {
        match discipline {
            Discipline::Run => CheckField::Run,
            Discipline::Bike => CheckField::Bike,
            Discipline::Swim => CheckField::Swim,
            Discipline::Strength => CheckField::Strength,
        }
    }

    pub fn discipline(&self) -> Option<Discipline> {
        match self {
            CheckField::Run => Some(Discipline::Run),
            CheckField::Bike => Some(Discipline::Bike),
            CheckField::Swim => Some(Discipline::Swim),
            CheckField::Strength => Some(Discipline::Strength),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CheckKey {
    pub athlete: String,
    pub date: NaiveDate,
    pub field: CheckField,
}

impl CheckKey {
    pub fn new(athlete: &str, date: NaiveDate, field: CheckField) -> Self {
        Self {
            athlete: athlete.to_string(),
            date,
            field,
        }
    }
}

/// All check states for the running session.
#[derive(Debug, Default)]
pub struct SessionState {
    checks: HashMap<CheckKey, bool>,
    seeded: HashSet<(String, NaiveDate)>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_checked(&self, athlete: &str, date: NaiveDate, field: CheckField) -> bool {
        self.checks
            .get(&CheckKey::new(athlete, date, field))
            .copied()
            .unwrap_or(false)
    }

    pub fn set(&mut self, athlete: &str, date: NaiveDate, field: CheckField, checked: bool) {
        self.checks.insert(CheckKey::new(athlete, date, field), checked);
    }

    /// Flip a box and return its new state.
    pub fn toggle(&mut self, athlete: &str, date: NaiveDate, field: CheckField) -> bool {
        let entry = self
            .checks
            .entry(CheckKey::new(athlete, date, field))
            .or_insert(false);
        *entry = !*entry;
        *entry
    }

    pub fn is_seeded(&self, athlete: &str, date: NaiveDate) -> bool {
        self.seeded.contains(&(athlete.to_string(), date))
    }

    /// Fill a day's boxes from its stored row. Only the first call per
    /// athlete and date has any effect; returns whether seeding happened.
    pub fn seed_from_entry(
        &mut self,
        athlete: &str,
        date: NaiveDate,
        entry: Option<&DailyLogEntry>,
    ) -> bool {
        if !self.seeded.insert((athlete.to_string(), date)) {
            return false;
        }
        let Some(entry) = entry else {
            return true;
        };

        for discipline in Discipline::ALL {
            self.set(
                athlete,
                date,
                CheckField::activity(discipline),
                entry.amount(discipline) > 0.0,
            );
        }
        for slot in MealSlot::ALL {
            self.set(
                athlete,
                date,
                CheckField::Meal(slot),
                entry.meals_checked.contains(&slot),
            );
        }
        self.set(athlete, date, CheckField::Sleep, entry.sleep_hours > 0.0);
        true
    }

    /// Build the log row for a day from its boxes.
    ///
    /// Starts from `base` so macros and the note survive. A ticked activity
    /// keeps an already logged amount, otherwise logs the planned one; an
    /// unticked activity logs zero. Ticked sleep logs `sleep_target_hours`
    /// unless hours were already recorded.
    pub fn to_entry(
        &self,
        athlete: &str,
        date: NaiveDate,
        plan: &DailyPlan,
        base: Option<&DailyLogEntry>,
        sleep_target_hours: f32,
    ) -> DailyLogEntry {
        let mut entry = base
            .filter(|b| b.date == date)
            .cloned()
            .unwrap_or_else(|| DailyLogEntry::new(date));

        for discipline in Discipline::ALL {
            let amount = if self.is_checked(athlete, date, CheckField::activity(discipline)) {
                let logged = entry.amount(discipline);
                if logged > 0.0 {
                    logged
                } else {
                    plan.amount(discipline)
                }
            } else {
                0.0
            };
            entry.set_amount(discipline, amount);
        }

        entry.meals_checked = MealSlot::ALL
            .into_iter()
            .filter(|slot| self.is_checked(athlete, date, CheckField::Meal(*slot)))
            .collect();

        entry.sleep_hours = if self.slept(athlete, date) {
            if entry.sleep_hours > 0.0 {
                entry.sleep_hours
            } else {
                sleep_target_hours.max(0.0)
            }
        } else {
            0.0
        };

        entry
    }

    pub fn meals_done(&self, athlete: &str, date: NaiveDate) -> usize {
        MealSlot::ALL
            .iter()
            .filter(|slot| self.is_checked(athlete, date, CheckField::Meal(**slot)))
            .count()
    }

    pub fn slept(&self, athlete: &str, date: NaiveDate) -> bool {
        self.is_checked(athlete, date, CheckField::Sleep)
    }
}
