//! Meal suggestions, macro targets and adherence tracking.

pub mod adherence;
pub mod macros;
pub mod meals;

pub use adherence::{day_adherence, weekly_adherence, DayAdherence, WeeklyAdherence};
pub use macros::{macro_adherence, MacroTargets};
pub use meals::{protein_for, Dish, MealPicker, MealPlan, MealPool, MealSlot, Protein, PROTEIN_CYCLE};
