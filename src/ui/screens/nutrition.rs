//! Meal plan, sleep and macro logging.

use chrono::NaiveDate;
use egui::{RichText, Ui};

use crate::nutrition::{DayAdherence, MacroTargets, MealPlan, MealSlot, WeeklyAdherence};
use crate::plan::week_start;
use crate::session::{CheckField, SessionState};
use crate::storage::DailyLogEntry;
use crate::ui::widgets::{MetricDisplay, MetricSize};

use super::DayAction;

pub struct NutritionView<'a> {
    pub athlete: &'a str,
    /// Day whose meals, sleep and macros are edited
    pub date: NaiveDate,
    pub meal_plan: &'a MealPlan,
    pub targets: MacroTargets,
    pub entry: Option<&'a DailyLogEntry>,
    pub sleep_target_hours: f32,
    /// Monday to Sunday of the current week
    pub week: &'a [(NaiveDate, DayAdherence)],
    pub weekly: WeeklyAdherence,
    pub macro_pct: f32,
}

#[derive(Debug, Default)]
pub struct NutritionScreen {
    selected_day: Option<NaiveDate>,
    macros: [f32; 3],
    macros_for: Option<(String, NaiveDate)>,
}

impl NutritionScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Day being edited, kept inside the week of `today`.
    pub fn selected_day(&self, today: NaiveDate) -> NaiveDate {
        day_in_week(self.selected_day, today)
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        view: &NutritionView<'_>,
        session: &mut SessionState,
    ) -> Option<DayAction> {
        let mut action = None;

        ui.heading(format!("{}: Nutrition & Sleep", view.athlete));
        ui.horizontal(|ui| {
            for (date, _) in view.week {
                let label = date.format("%a %d").to_string();
                if ui.selectable_label(*date == view.date, label).clicked() {
                    self.selected_day = Some(*date);
                }
            }
        });
        ui.label(format!(
            "Protein of the day: {}",
            view.meal_plan.protein_of_the_day.label()
        ));

        egui::Grid::new("meal_plan")
            .num_columns(4)
            .striped(true)
            .show(ui, |ui| {
                ui.strong("Slot");
                ui.strong("Dish");
                ui.strong("Protein");
                ui.strong("Done");
                ui.end_row();

                for slot in MealSlot::ALL {
                    ui.label(slot.label());
                    match view.meal_plan.dish(slot) {
                        Some(dish) => {
                            ui.label(dish.name.as_str());
                            ui.label(RichText::new(dish.protein.label()).weak());
                        }
                        None => {
                            ui.label("-");
                            ui.label("");
                        }
                    }
                    let field = CheckField::Meal(slot);
                    let mut checked = session.is_checked(view.athlete, view.date, field);
                    if ui.checkbox(&mut checked, "").changed() {
                        session.set(view.athlete, view.date, field, checked);
                        action = Some(DayAction::Checked(view.date));
                    }
                    ui.end_row();
                }
            });

        ui.add_space(6.0);
        let mut slept = session.slept(view.athlete, view.date);
        let label = format!("Slept ~{:.1} hrs", view.sleep_target_hours);
        if ui.checkbox(&mut slept, label).changed() {
            session.set(view.athlete, view.date, CheckField::Sleep, slept);
            action = Some(DayAction::Checked(view.date));
        }

        ui.add_space(8.0);
        if let Some(macros) = self.show_macros(ui, view) {
            action = action.or(Some(macros));
        }

        ui.add_space(8.0);
        show_week(ui, view);

        action
    }

    fn show_macros(&mut self, ui: &mut Ui, view: &NutritionView<'_>) -> Option<DayAction> {
        let key = (view.athlete.to_string(), view.date);
        if self.macros_for.as_ref() != Some(&key) {
            self.macros = view
                .entry
                .map(|e| [e.protein_g, e.carbs_g, e.fat_g])
                .unwrap_or_default();
            self.macros_for = Some(key);
        }

        ui.label(RichText::new("Macros").strong());
        ui.horizontal(|ui| {
            MetricDisplay::new(format!("{:.0}", view.targets.protein_g), "g", "Protein target")
                .with_size(MetricSize::Small)
                .show(ui);
            MetricDisplay::new(format!("{:.0}", view.targets.carbs_g), "g", "Carbs target")
                .with_size(MetricSize::Small)
                .show(ui);
            MetricDisplay::new(format!("{:.0}", view.targets.fat_g), "g", "Fat target")
                .with_size(MetricSize::Small)
                .show(ui);
            MetricDisplay::new(format!("{:.0}", view.targets.calories), "kcal", "Calories")
                .with_size(MetricSize::Small)
                .show(ui);
        });

        let mut action = None;
        ui.horizontal(|ui| {
            for (value, name) in self.macros.iter_mut().zip(["Protein", "Carbs", "Fat"]) {
                ui.label(name);
                ui.add(
                    egui::DragValue::new(value)
                        .range(0.0..=2000.0)
                        .speed(1.0)
                        .suffix(" g"),
                );
            }
            if ui.button("Save macros").clicked() {
                action = Some(DayAction::SaveMacros {
                    date: view.date,
                    protein_g: self.macros[0],
                    carbs_g: self.macros[1],
                    fat_g: self.macros[2],
                });
            }
        });
        ui.label(format!(
            "Macro adherence on {}: {:.0}%",
            view.date.format("%a %d %b"),
            view.macro_pct
        ));
        action
    }
}

fn show_week(ui: &mut Ui, view: &NutritionView<'_>) {
    ui.label(RichText::new("This week").strong());
    egui::Grid::new("week_adherence")
        .num_columns(3)
        .striped(true)
        .show(ui, |ui| {
            ui.strong("Day");
            ui.strong("Meals (%)");
            ui.strong("Sleep (%)");
            ui.end_row();
            for (date, day) in view.week {
                ui.label(date.format("%a %d %b").to_string());
                ui.label(format!("{:.1}", day.meals_pct));
                ui.label(format!("{:.0}", day.sleep_pct));
                ui.end_row();
            }
        });
    ui.label(format!(
        "Weekly meals adherence: {:.1}% | Sleep adherence: {:.1}%",
        view.weekly.meals_pct, view.weekly.sleep_pct
    ));
}

/// `selected` when it falls in the same Monday-to-Sunday week as `today`,
/// otherwise `today`.
pub fn day_in_week(selected: Option<NaiveDate>, today: NaiveDate) -> NaiveDate {
    match selected {
        Some(day) if week_start(day) == week_start(today) => day,
        _ => today,
    }
}
