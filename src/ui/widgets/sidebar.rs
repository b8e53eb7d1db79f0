//! Left-hand sidebar: athlete picker, countdown, quote and calendar.

use chrono::NaiveDate;
use egui::{RichText, Ui};

use crate::team::{Athlete, CalendarEvent, Countdown, EventKind, Roster};

use super::metric_display::{MetricDisplay, MetricSize};

/// What the user did in the sidebar this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarAction {
    SelectAthlete(String),
    SaveTarget { athlete: String, kg: f32 },
}

/// Everything the sidebar displays.
pub struct SidebarView<'a> {
    pub roster: &'a Roster,
    pub selected: &'a str,
    pub race_name: &'a str,
    pub countdown: Countdown,
    pub quote: &'a str,
    pub events: &'a [CalendarEvent],
    pub today: NaiveDate,
}

/// Sidebar state that outlives a frame.
#[derive(Debug, Default)]
pub struct Sidebar {
    target_input: String,
    editing_for: Option<String>,
    error: Option<String>,
}

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a rejected target weight.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn show(&mut self, ui: &mut Ui, view: &SidebarView<'_>) -> Option<SidebarAction> {
        let mut action = None;

        ui.heading("Athlete");
        let mut selected = view.selected.to_string();
        egui::ComboBox::from_id_salt("athlete_select")
            .selected_text(selected.clone())
            .show_ui(ui, |ui| {
                for name in view.roster.names() {
                    ui.selectable_value(&mut selected, name.to_string(), name);
                }
            });
        if selected != view.selected {
            action = Some(SidebarAction::SelectAthlete(selected.clone()));
        }

        if let Some(athlete) = view.roster.get(view.selected) {
            self.show_athlete(ui, athlete, view.today, &mut action);
        }

        ui.separator();
        ui.label(RichText::new(view.race_name).strong());
        if view.countdown.is_over() {
            ui.label("Race day has arrived. Go get it!");
        } else {
            ui.horizontal(|ui| {
                MetricDisplay::count(view.countdown.days, "d", "Days")
                    .with_size(MetricSize::Small)
                    .show(ui);
                MetricDisplay::count(view.countdown.hours, "h", "Hours")
                    .with_size(MetricSize::Small)
                    .show(ui);
                MetricDisplay::count(view.countdown.minutes, "m", "Min")
                    .with_size(MetricSize::Small)
                    .show(ui);
            });
            ui.label(format!("About {} weeks to go", view.countdown.weeks()));
        }

        ui.separator();
        ui.label(RichText::new("Quote of the day").weak());
        ui.label(RichText::new(format!("\"{}\"", view.quote)).italics());

        ui.separator();
        ui.label(RichText::new("Coming up").strong());
        if view.events.is_empty() {
            ui.label(RichText::new("Nothing in the next few weeks").weak());
        }
        for event in view.events {
            let icon = match event.kind {
                EventKind::Festival => "🎉",
                EventKind::Birthday => "🎂",
            };
            let days = (event.date - view.today).num_days();
            let when = match days {
                0 => "today".to_string(),
                1 => "tomorrow".to_string(),
                n => format!("in {} days", n),
            };
            ui.label(format!("{} {} ({}, {})", icon, event.name, event.date.format("%d %b"), when));
        }

        action
    }

    fn show_athlete(
        &mut self,
        ui: &mut Ui,
        athlete: &Athlete,
        today: NaiveDate,
        action: &mut Option<SidebarAction>,
    ) {
        if self.editing_for.as_deref() != Some(athlete.name.as_str()) {
            self.editing_for = Some(athlete.name.clone());
            self.target_input = format!("{:.1}", athlete.target_weight_kg);
            self.error = None;
        }

        ui.label(format!("{} · {} · {} yrs", athlete.name, athlete.gender, athlete.age_on(today)));
        ui.horizontal(|ui| {
            MetricDisplay::weight(athlete.weight_kg, "Weight")
                .with_size(MetricSize::Small)
                .show(ui);
            MetricDisplay::weight(athlete.weight_to_lose(), "To lose")
                .with_size(MetricSize::Small)
                .show(ui);
        });

        ui.horizontal(|ui| {
            ui.label("Target kg");
            ui.add(egui::TextEdit::singleline(&mut self.target_input).desired_width(60.0));
            if ui.button("Save target").clicked() {
                match self.target_input.trim().parse::<f32>() {
                    Ok(kg) if Athlete::validate_weight(kg) => {
                        self.error = None;
                        *action = Some(SidebarAction::SaveTarget {
                            athlete: athlete.name.clone(),
                            kg,
                        });
                    }
                    _ => self.error = Some("Enter a weight between 30 and 200 kg".to_string()),
                }
            }
        });
        if let Some(error) = &self.error {
            ui.colored_label(ui.visuals().warn_fg_color, error.as_str());
        }
    }
}
