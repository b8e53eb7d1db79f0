//! Phase tracker, readiness and coaching suggestions.

use chrono::NaiveDate;
use egui::{ProgressBar, RichText, Ui};

use crate::coaching::{Suggestion, TrainingCompliance};
use crate::plan::{Discipline, PhaseProgress};
use crate::ui::theme::Palette;
use crate::ui::widgets::{MetricDisplay, MetricSize, WeeklyLineChart};

/// Everything the progress tab shows.
pub struct ProgressView<'a> {
    pub athlete: &'a str,
    pub phases: &'a [PhaseProgress],
    pub phase_readiness: f32,
    pub adherence_readiness: f32,
    pub compliance: &'a TrainingCompliance,
    pub suggestions: &'a [Suggestion],
    pub weeks: Vec<NaiveDate>,
    pub planned_load: Vec<f32>,
    pub logged_load: Vec<f32>,
}

#[derive(Debug, Default)]
pub struct ProgressScreen;

impl ProgressScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut Ui, view: ProgressView<'_>, palette: &Palette) {
        ui.heading(format!("{}: Progress", view.athlete));

        if view.compliance.is_behind() {
            ui.colored_label(
                palette.error,
                RichText::new(format!(
                    "Behind on training this week: {:.0}% of planned load",
                    view.compliance.overall_pct
                ))
                .strong(),
            );
        }

        ui.horizontal(|ui| {
            MetricDisplay::percent(view.phase_readiness, "Race readiness")
                .with_size(MetricSize::Large)
                .with_color(palette.accent)
                .show(ui);
            MetricDisplay::percent(view.adherence_readiness, "Nutrition & sleep")
                .with_size(MetricSize::Medium)
                .show(ui);
            MetricDisplay::percent(view.compliance.overall_pct, "Week compliance")
                .with_size(MetricSize::Medium)
                .with_color(palette.compliance(view.compliance.status()))
                .show(ui);
        });

        ui.add_space(8.0);
        ui.label(RichText::new("Phase tracker").strong());
        egui::Grid::new("phase_tracker")
            .num_columns(3)
            .striped(true)
            .show(ui, |ui| {
                for phase in view.phases {
                    ui.label(phase.phase.as_str());
                    ui.label(format!(
                        "{} to {}",
                        phase.start.format("%d %b %Y"),
                        phase.end.format("%d %b %Y")
                    ));
                    ui.add(
                        ProgressBar::new(phase.progress_pct / 100.0)
                            .desired_width(200.0)
                            .text(format!("{:.1}%", phase.progress_pct)),
                    );
                    ui.end_row();
                }
            });

        ui.add_space(8.0);
        ui.label(RichText::new("This week so far").strong());
        ui.horizontal_wrapped(|ui| {
            for discipline in Discipline::ALL {
                match view.compliance.by_discipline.get(&discipline) {
                    Some(pct) => ui.label(format!("{}: {:.0}%", discipline, pct)),
                    None => ui.label(RichText::new(format!("{}: not planned", discipline)).weak()),
                };
            }
        });

        ui.add_space(8.0);
        WeeklyLineChart::new("load_chart", view.weeks)
            .series("Planned load", view.planned_load)
            .series("Logged load", view.logged_load)
            .y_label("Load")
            .height(200.0)
            .show(ui);

        ui.add_space(8.0);
        ui.label(RichText::new("Coaching suggestions").strong());
        for suggestion in view.suggestions {
            ui.colored_label(
                palette.severity(suggestion.severity),
                format!("• {}", suggestion.text),
            );
        }
    }
}
