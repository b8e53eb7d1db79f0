//! One logged day for one athlete.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::nutrition::MealSlot;
use crate::plan::Discipline;

/// Everything an athlete logs for a single day.
///
/// Identified by `(athlete, date)`; the athlete is implied by the store key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLogEntry {
    pub date: NaiveDate,
    pub run_km: f32,
    pub bike_km: f32,
    pub swim_km: f32,
    pub strength_min: f32,
    pub protein_g: f32,
    pub carbs_g: f32,
    pub fat_g: f32,
    pub calories: f32,
    pub sleep_hours: f32,
    /// Meal slots ticked off
    pub meals_checked: Vec<MealSlot>,
    pub note: String,
}

impl DailyLogEntry {
    /// An empty row for `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            run_km: 0.0,
            bike_km: 0.0,
            swim_km: 0.0,
            strength_min: 0.0,
            protein_g: 0.0,
            carbs_g: 0.0,
            fat_g: 0.0,
            calories: 0.0,
            sleep_hours: 0.0,
            meals_checked: Vec::new(),
            note: String::new(),
        }
    }

    /// Logged amount for a discipline.
    pub fn amount(&self, discipline: Discipline) -> f32 {
        match discipline {
            Discipline::Run => self.run_km,
            Discipline::Bike => self.bike_km,
            Discipline::Swim => self.swim_km,
            Discipline::Strength => self.strength_min,
        }
    }

    /// Set the logged amount for a discipline.
    pub fn set_amount(&mut self, discipline: Discipline, amount: f32) {
        let amount = amount.max(0.0);
        match discipline {
            Discipline::Run => self.run_km = amount,
            Discipline::Bike => self.bike_km = amount,
            Discipline::Swim => self.swim_km = amount,
            Discipline::Strength => self.strength_min = amount,
        }
    }

    /// Total distance over run, bike and swim.
    pub fn total_km(&self) -> f32 {
        self.run_km + self.bike_km + self.swim_km
    }

    /// Whether any training was logged.
    pub fn has_training(&self) -> bool {
        Discipline::ALL.iter().any(|d| self.amount(*d) > 0.0)
    }

    /// Calories implied by the logged macros when none were entered.
    pub fn calories_or_estimate(&self) -> f32 {
        if self.calories > 0.0 {
            self.calories
        } else {
            4.0 * self.protein_g + 4.0 * self.carbs_g + 9.0 * self.fat_g
        }
    }

    /// Order and dedupe the meal list.
    pub fn normalize_meals(&mut self) {
        self.meals_checked.sort();
        self.meals_checked.dedup();
    }
}

/// Encode meal slots as `Breakfast;Lunch`.
pub fn encode_meals(meals: &[MealSlot]) -> String {
    meals
        .iter()
        .map(MealSlot::label)
        .collect::<Vec<_>>()
        .join(";")
}

/// Decode a `;`-separated slot list, skipping unknown names.
pub fn decode_meals(raw: &str) -> Vec<MealSlot> {
    let mut meals: Vec<MealSlot> = raw
        .split(';')
        .filter(|s| !s.trim().is_empty())
        .filter_map(|s| match s.parse::<MealSlot>() {
            Ok(slot) => Some(slot),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        })
        .collect();
    meals.sort();
    meals.dedup();
    meals
}
