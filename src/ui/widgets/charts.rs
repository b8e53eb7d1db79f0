//! Plot widgets for team comparison and training volume.

use chrono::NaiveDate;
use egui::{Response, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::coaching::TeamOverview;
use crate::plan::Discipline;
use crate::ui::theme::discipline_color;

const BAR_GROUP_WIDTH: f64 = 0.8;

/// Grouped bars: one group per athlete, one bar per discipline.
pub struct TeamBarChart<'a> {
    overview: &'a TeamOverview,
    height: f32,
}

impl<'a> TeamBarChart<'a> {
    pub fn new(overview: &'a TeamOverview) -> Self {
        Self {
            overview,
            height: 260.0,
        }
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        let names: Vec<String> = self.overview.this_week.iter().map(|w| w.name.clone()).collect();
        let bar_width = BAR_GROUP_WIDTH / Discipline::ALL.len() as f64;

        let charts: Vec<BarChart> = Discipline::ALL
            .iter()
            .enumerate()
            .map(|(slot, discipline)| {
                let offset = (slot as f64 + 0.5) * bar_width - BAR_GROUP_WIDTH / 2.0;
                let bars = self
                    .overview
                    .this_week
                    .iter()
                    .enumerate()
                    .map(|(i, week)| {
                        Bar::new(i as f64 + offset, week.amount(*discipline) as f64)
                            .width(bar_width)
                            .name(&week.name)
                    })
                    .collect();
                BarChart::new(
                    format!("{} ({})", discipline.label(), discipline.unit()),
                    bars,
                )
                .color(discipline_color(*discipline))
            })
            .collect();

        Plot::new("team_bar_chart")
            .height(self.height)
            .legend(Legend::default())
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .y_axis_label("This week")
            .x_axis_formatter(move |mark, _range| {
                let index = mark.value.round();
                if (mark.value - index).abs() > 1e-6 || index < 0.0 {
                    return String::new();
                }
                names.get(index as usize).cloned().unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                for chart in charts {
                    plot_ui.bar_chart(chart);
                }
            })
            .response
    }
}

/// Named series over consecutive weeks.
pub struct WeeklyLineChart<'a> {
    id: &'a str,
    weeks: Vec<NaiveDate>,
    series: Vec<(String, Vec<f32>)>,
    y_label: &'a str,
    height: f32,
}

impl<'a> WeeklyLineChart<'a> {
    pub fn new(id: &'a str, weeks: Vec<NaiveDate>) -> Self {
        Self {
            id,
            weeks,
            series: Vec::new(),
            y_label: "km",
            height: 240.0,
        }
    }

    /// Add a series; values line up with the weeks by index.
    pub fn series(mut self, name: impl Into<String>, values: Vec<f32>) -> Self {
        self.series.push((name.into(), values));
        self
    }

    /// Build a chart with one line per athlete from the team trends.
    pub fn team_trend(overview: &TeamOverview) -> Self {
        let weeks = overview
            .trends
            .first()
            .map(|t| t.points.iter().map(|(week, _)| *week).collect())
            .unwrap_or_default();
        overview.trends.iter().fold(
            WeeklyLineChart::new("team_trend_chart", weeks),
            |chart, trend| {
                chart.series(
                    trend.name.clone(),
                    trend.points.iter().map(|(_, km)| *km).collect(),
                )
            },
        )
    }

    pub fn y_label(mut self, label: &'a str) -> Self {
        self.y_label = label;
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        if self.weeks.is_empty() {
            return ui.label("Nothing logged yet.");
        }

        let labels: Vec<String> = self
            .weeks
            .iter()
            .map(|w| w.format("%d %b").to_string())
            .collect();

        Plot::new(self.id)
            .height(self.height)
            .legend(Legend::default())
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .y_axis_label(self.y_label)
            .x_axis_formatter(move |mark, _range| {
                let index = mark.value.round();
                if (mark.value - index).abs() > 1e-6 || index < 0.0 {
                    return String::new();
                }
                labels.get(index as usize).cloned().unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                for (name, values) in self.series {
                    let points: Vec<[f64; 2]> = values
                        .iter()
                        .enumerate()
                        .map(|(i, v)| [i as f64, *v as f64])
                        .collect();
                    plot_ui.line(Line::new(name, PlotPoints::new(points)));
                }
            })
            .response
    }
}
