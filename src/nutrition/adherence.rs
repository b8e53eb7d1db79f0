//! Meal and sleep adherence.

use super::meals::MealSlot;

/// Adherence for one day.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DayAdherence {
    /// Share of meal slots completed, 0-100
    pub meals_pct: f32,
    /// 100 when the sleep target was met, else 0
    pub sleep_pct: f32,
}

/// Score a day from the number of completed meals and the sleep check.
pub fn day_adherence(meals_done: usize, slept: bool) -> DayAdherence {
    let total = MealSlot::ALL.len();
    DayAdherence {
        meals_pct: meals_done.min(total) as f32 / total as f32 * 100.0,
        sleep_pct: if slept { 100.0 } else { 0.0 },
    }
}

/// Averages over a week.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeeklyAdherence {
    pub meals_pct: f32,
    pub sleep_pct: f32,
}

/// Mean meal and sleep adherence over the given days.
pub fn weekly_adherence(days: &[DayAdherence]) -> WeeklyAdherence {
    if days.is_empty() {
        return WeeklyAdherence::default();
    }
    let n = days.len() as f32;
    WeeklyAdherence {
        meals_pct: days.iter().map(|d| d.meals_pct).sum::<f32>() / n,
        sleep_pct: days.iter().map(|d| d.sleep_pct).sum::<f32>() / n,
    }
}
