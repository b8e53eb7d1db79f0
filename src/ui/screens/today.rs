//! Single-day plan with activity check boxes. Used for today and tomorrow.

use chrono::NaiveDate;
use egui::{RichText, Ui};

use crate::plan::{DailyPlan, Discipline};
use crate::session::{CheckField, SessionState};
use crate::storage::DailyLogEntry;
use crate::team::{CalendarEvent, EventKind};
use crate::ui::widgets::{MetricDisplay, MetricSize};

use super::DayAction;

/// Inputs for one day.
pub struct DayView<'a> {
    pub heading: &'a str,
    pub athlete: &'a str,
    pub plan: &'a DailyPlan,
    pub events: &'a [CalendarEvent],
    pub entry: Option<&'a DailyLogEntry>,
}

#[derive(Debug, Default)]
pub struct DayPlanScreen {
    note_input: String,
    note_for: Option<(String, NaiveDate)>,
}

impl DayPlanScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        view: &DayView<'_>,
        session: &mut SessionState,
    ) -> Option<DayAction> {
        let plan = view.plan;
        let mut action = None;

        ui.heading(format!(
            "{}: {} {}",
            view.heading,
            plan.weekday,
            plan.date.format("%d %b %Y")
        ));
        ui.label(RichText::new(&plan.phase).weak());

        for event in view.events {
            let text = match event.kind {
                EventKind::Birthday => format!("🎂 {}! Keep it light and celebrate.", event.name),
                EventKind::Festival => format!("🎉 {} today. Plan meals around the festivities.", event.name),
            };
            ui.label(RichText::new(text).strong());
        }

        ui.add_space(8.0);

        if plan.is_rest_day() {
            ui.label("Rest day. Stretch, hydrate and sleep well.");
        } else {
            ui.horizontal_wrapped(|ui| {
                for session in &plan.sessions {
                    MetricDisplay::discipline(session.discipline, session.amount)
                        .with_size(MetricSize::Medium)
                        .show(ui);
                }
            });

            ui.add_space(8.0);
            ui.label(RichText::new("Done?").strong());
            for planned in &plan.sessions {
                let field = CheckField::activity(planned.discipline);
                let mut checked = session.is_checked(view.athlete, plan.date, field);
                let mut label = format!(
                    "{} {:.1} {}",
                    planned.discipline,
                    planned.amount,
                    planned.unit()
                );
                if planned.brick {
                    label.push_str(" (brick: straight off the bike)");
                }
                if ui.checkbox(&mut checked, label).changed() {
                    session.set(view.athlete, plan.date, field, checked);
                    action = Some(DayAction::Checked(plan.date));
                }
            }
        }

        if let Some(entry) = view.entry.filter(|e| e.has_training()) {
            ui.add_space(4.0);
            let logged: Vec<String> = Discipline::ALL
                .iter()
                .filter(|d| entry.amount(**d) > 0.0)
                .map(|d| format!("{} {:.1} {}", d, entry.amount(*d), d.unit()))
                .collect();
            ui.label(RichText::new(format!("Logged: {}", logged.join(", "))).weak());
        }

        ui.add_space(8.0);
        let note_action = self.show_note(ui, view);
        action.or(note_action)
    }

    fn show_note(&mut self, ui: &mut Ui, view: &DayView<'_>) -> Option<DayAction> {
        let key = (view.athlete.to_string(), view.plan.date);
        if self.note_for.as_ref() != Some(&key) {
            self.note_input = view.entry.map(|e| e.note.clone()).unwrap_or_default();
            self.note_for = Some(key);
        }

        let mut action = None;
        ui.horizontal(|ui| {
            ui.label("Note");
            ui.text_edit_singleline(&mut self.note_input);
            if ui.button("Save note").clicked() {
                action = Some(DayAction::SaveNote {
                    date: view.plan.date,
                    note: self.note_input.trim().to_string(),
                });
            }
        });
        action
    }
}
