//! Team comparison charts.

use egui::{RichText, Ui};

use crate::coaching::TeamOverview;
use crate::plan::Discipline;
use crate::ui::theme::Palette;
use crate::ui::widgets::{TeamBarChart, WeeklyLineChart};

#[derive(Debug, Default)]
pub struct TeamScreen;

impl TeamScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut Ui, overview: &TeamOverview, palette: &Palette) {
        ui.heading("Team Overview");
        ui.label(format!("Week of {}", overview.week_start.format("%d %b %Y")));

        for warning in &overview.warnings {
            ui.colored_label(palette.warning, format!("Could not load log for {}", warning));
        }

        egui::Grid::new("team_totals")
            .num_columns(Discipline::ALL.len() + 1)
            .striped(true)
            .show(ui, |ui| {
                ui.strong("Athlete");
                for discipline in Discipline::ALL {
                    ui.strong(format!("{} ({})", discipline.label(), discipline.unit()));
                }
                ui.end_row();
                for week in &overview.this_week {
                    ui.label(week.name.as_str());
                    for discipline in Discipline::ALL {
                        ui.label(format!("{:.1}", week.amount(discipline)));
                    }
                    ui.end_row();
                }
            });

        ui.add_space(8.0);
        TeamBarChart::new(overview).height(240.0).show(ui);

        ui.add_space(8.0);
        ui.label(RichText::new("Weekly distance").strong());
        WeeklyLineChart::team_trend(overview)
            .y_label("km")
            .height(220.0)
            .show(ui);
    }
}
