//! Daily macro targets.

use serde::{Deserialize, Serialize};

use crate::storage::DailyLogEntry;
use crate::team::{Athlete, Gender};

/// Daily macronutrient targets in grams plus the resulting calories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein_g: f32,
    pub carbs_g: f32,
    pub fat_g: f32,
    pub calories: f32,
}

impl MacroTargets {
    /// Build targets from grams; calories are `4p + 4c + 9f`.
    pub fn from_grams(protein_g: f32, carbs_g: f32, fat_g: f32) -> Self {
        Self {
            protein_g,
            carbs_g,
            fat_g,
            calories: 4.0 * protein_g + 4.0 * carbs_g + 9.0 * fat_g,
        }
    }

    /// Targets scaled to body weight and the week's training load.
    ///
    /// Protein steps from 1.6 to 2.0 g/kg as load rises, carbs slide from 5 to
    /// 8 g/kg, fat stays at 1.0 g/kg (0.9 for women).
    pub fn for_athlete(athlete: &Athlete, weekly_load: f32) -> Self {
        let weight = athlete.weight_kg.max(0.0);
        let protein_per_kg = if weekly_load < 30.0 {
            1.6
        } else if weekly_load < 60.0 {
            1.8
        } else {
            2.0
        };
        let carbs_per_kg = (5.0 + weekly_load.max(0.0) / 20.0).clamp(5.0, 8.0);
        let fat_per_kg = match athlete.gender {
            Gender::Male => 1.0,
            Gender::Female => 0.9,
        };

        Self::from_grams(
            weight * protein_per_kg,
            weight * carbs_per_kg,
            weight * fat_per_kg,
        )
    }

    /// Mean of `min(actual / target, 1)` over the three macros, as a percentage.
    pub fn adherence(&self, protein_g: f32, carbs_g: f32, fat_g: f32) -> f32 {
        let ratio = |actual: f32, target: f32| {
            if target <= 0.0 {
                1.0
            } else {
                (actual.max(0.0) / target).min(1.0)
            }
        };
        (ratio(protein_g, self.protein_g) + ratio(carbs_g, self.carbs_g) + ratio(fat_g, self.fat_g))
            / 3.0
            * 100.0
    }
}

/// Macro adherence of a logged day against its targets.
pub fn macro_adherence(entry: &DailyLogEntry, targets: &MacroTargets) -> f32 {
    targets.adherence(entry.protein_g, entry.carbs_g, entry.fat_g)
}
