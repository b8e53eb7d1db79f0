//! Weekly plan and the multi-year calendar.

use chrono::NaiveDate;
use egui::{RichText, Ui};

use crate::plan::{week_start, CalendarWeek, Discipline, PlanGenerator};
use crate::team::Athlete;
use crate::ui::theme::Palette;
use crate::ui::widgets::{MetricDisplay, MetricSize};

#[derive(Debug, Default)]
pub struct WeeklyScreen {
    show_calendar: bool,
}

impl WeeklyScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        generator: &PlanGenerator,
        athlete: &Athlete,
        today: NaiveDate,
        palette: &Palette,
    ) {
        let calendar = generator.calendar_weeks(athlete);
        let current = calendar
            .iter()
            .take_while(|w| w.week_start <= today)
            .last();

        ui.heading(format!("{}: Weekly Plan", athlete.name));
        match current {
            None => {
                ui.colored_label(
                    palette.warning,
                    "Today's date is before the start of the training plan.",
                );
            }
            Some(week) => {
                ui.label(format!(
                    "Week of {} · {}",
                    week.week_start.format("%d %b %Y"),
                    week.phase
                ));
                ui.horizontal(|ui| {
                    for discipline in Discipline::ALL {
                        MetricDisplay::discipline(discipline, discipline.amount(&week.volumes))
                            .with_size(MetricSize::Small)
                            .show(ui);
                    }
                    MetricDisplay::new(format!("{:.1}", week.total_load), "", "Load")
                        .with_size(MetricSize::Small)
                        .with_color(palette.load_band(week.load_band))
                        .show(ui);
                });
            }
        }

        ui.add_space(8.0);
        self.show_days(ui, generator, athlete, today);

        ui.add_space(8.0);
        ui.checkbox(&mut self.show_calendar, "Show 3-year calendar");
        if self.show_calendar {
            show_calendar(ui, &calendar, week_start(today), palette);
        }
    }

    fn show_days(&self, ui: &mut Ui, generator: &PlanGenerator, athlete: &Athlete, today: NaiveDate) {
        let days = generator.week_plan(athlete, today);
        egui::Grid::new("week_days")
            .striped(true)
            .num_columns(Discipline::ALL.len() + 1)
            .show(ui, |ui| {
                ui.strong("Day");
                for discipline in Discipline::ALL {
                    ui.strong(format!("{} ({})", discipline.label(), discipline.unit()));
                }
                ui.end_row();

                for day in &days {
                    let label = format!("{} {}", day.weekday, day.date.format("%d %b"));
                    if day.date == today {
                        ui.label(RichText::new(label).strong());
                    } else {
                        ui.label(label);
                    }
                    for discipline in Discipline::ALL {
                        let amount = day.amount(discipline);
                        if amount > 0.0 {
                            ui.label(format!("{:.1}", amount));
                        } else {
                            ui.label(RichText::new("-").weak());
                        }
                    }
                    ui.end_row();
                }
            });
    }
}

fn show_calendar(ui: &mut Ui, weeks: &[CalendarWeek], current: NaiveDate, palette: &Palette) {
    egui::ScrollArea::vertical()
        .id_salt("calendar_scroll")
        .max_height(360.0)
        .show(ui, |ui| {
            egui::Grid::new("calendar_grid")
                .striped(true)
                .num_columns(8)
                .show(ui, |ui| {
                    for header in [
                        "Week",
                        "Phase",
                        "Run (km)",
                        "Bike (km)",
                        "Swim (km)",
                        "Strength (min)",
                        "Load",
                        "Band",
                    ] {
                        ui.strong(header);
                    }
                    ui.end_row();

                    for week in weeks {
                        let date = week.week_start.format("%Y-%m-%d").to_string();
                        if week.week_start == current {
                            ui.label(RichText::new(date).strong().color(palette.accent));
                        } else {
                            ui.label(date);
                        }
                        ui.label(week.phase.as_str());
                        ui.label(format!("{:.1}", week.volumes.run_km));
                        ui.label(format!("{:.1}", week.volumes.bike_km));
                        ui.label(format!("{:.1}", week.volumes.swim_km));
                        ui.label(format!("{:.0}", week.volumes.strength_min));
                        ui.label(format!("{:.1}", week.total_load));
                        ui.colored_label(palette.load_band(week.load_band), week.load_band.label());
                        ui.end_row();
                    }
                });
        });
}
