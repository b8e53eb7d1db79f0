//! Large-number tiles for targets, readiness and countdowns.

use egui::{Align, Color32, Layout, RichText, Ui, Vec2};

use crate::plan::Discipline;

/// A single labelled number with a unit.
pub struct MetricDisplay<'a> {
    value: String,
    unit: &'a str,
    label: &'a str,
    color: Option<Color32>,
    size: MetricSize,
}

#[derive(Debug, Clone, Copy, Default)]
pub enum MetricSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl MetricSize {
    fn value_size(&self) -> f32 {
        match self {
            MetricSize::Small => 22.0,
            MetricSize::Medium => 34.0,
            MetricSize::Large => 52.0,
        }
    }

    fn caption_size(&self) -> f32 {
        match self {
            MetricSize::Small => 11.0,
            MetricSize::Medium => 13.0,
            MetricSize::Large => 16.0,
        }
    }

    fn min_size(&self) -> Vec2 {
        match self {
            MetricSize::Small => Vec2::new(72.0, 50.0),
            MetricSize::Medium => Vec2::new(110.0, 70.0),
            MetricSize::Large => Vec2::new(160.0, 96.0),
        }
    }
}

impl<'a> MetricDisplay<'a> {
    pub fn new(value: impl Into<String>, unit: &'a str, label: &'a str) -> Self {
        Self {
            value: value.into(),
            unit,
            label,
            color: None,
            size: MetricSize::default(),
        }
    }

    /// Planned or logged amount in the discipline's unit.
    pub fn discipline(discipline: Discipline, amount: f32) -> Self {
        let value = if discipline == Discipline::Strength {
            format!("{:.0}", amount)
        } else {
            format!("{:.1}", amount)
        };
        Self::new(value, discipline.unit(), discipline.label())
    }

    pub fn percent(pct: f32, label: &'a str) -> Self {
        Self::new(format!("{:.1}", pct), "%", label)
    }

    pub fn weight(kg: f32, label: &'a str) -> Self {
        Self::new(format!("{:.1}", kg), "kg", label)
    }

    pub fn count(value: i64, unit: &'a str, label: &'a str) -> Self {
        Self::new(value.to_string(), unit, label)
    }

    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_size(mut self, size: MetricSize) -> Self {
        self.size = size;
        self
    }

    pub fn show(self, ui: &mut Ui) {
        egui::Frame::new().inner_margin(6.0).show(ui, |ui| {
            ui.set_min_size(self.size.min_size());

            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                ui.label(RichText::new(self.label).size(self.size.caption_size()).weak());

                let mut value = RichText::new(&self.value)
                    .size(self.size.value_size())
                    .strong();
                if let Some(color) = self.color {
                    value = value.color(color);
                }

                ui.horizontal(|ui| {
                    ui.label(value);
                    if !self.unit.is_empty() {
                        ui.label(RichText::new(self.unit).size(self.size.caption_size()).weak());
                    }
                });
            });
        });
    }
}
