//! Colors and egui visuals for the dashboard.

use egui::{Color32, Visuals};
use serde::{Deserialize, Serialize};

use crate::coaching::{ComplianceStatus, Severity};
use crate::plan::{Discipline, LoadBand};

/// Theme preference, persisted in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        let palette = self.palette();
        let mut visuals = match self {
            Theme::Dark => Visuals::dark(),
            Theme::Light => Visuals::light(),
        };

        visuals.window_fill = palette.panel_bg;
        visuals.panel_fill = palette.panel_bg;
        visuals.faint_bg_color = palette.card_bg;
        visuals.extreme_bg_color = palette.background;

        visuals.widgets.noninteractive.bg_fill = palette.card_bg;
        visuals.widgets.inactive.bg_fill = palette.card_bg;
        visuals.widgets.hovered.bg_fill = palette.hover_bg;
        visuals.widgets.active.bg_fill = palette.accent;

        visuals.selection.bg_fill = palette.accent.linear_multiply(palette.selection_alpha);
        visuals.selection.stroke.color = palette.accent;

        visuals.widgets.noninteractive.fg_stroke.color = palette.text_primary;
        visuals.widgets.inactive.fg_stroke.color = palette.text_secondary;
        visuals.widgets.hovered.fg_stroke.color = palette.text_primary;
        visuals.widgets.active.fg_stroke.color = palette.text_on_accent;

        visuals.widgets.noninteractive.bg_stroke.color = palette.border;
        visuals.widgets.inactive.bg_stroke.color = palette.border;

        visuals
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon for the toggle button.
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀",
        }
    }
}

/// Named colors for one theme.
#[derive(Debug)]
pub struct Palette {
    pub background: Color32,
    pub panel_bg: Color32,
    pub card_bg: Color32,
    pub hover_bg: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_on_accent: Color32,
    pub accent: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub border: Color32,
    selection_alpha: f32,
}

pub static DARK: Palette = Palette {
    background: Color32::from_rgb(16, 20, 26),
    panel_bg: Color32::from_rgb(24, 29, 37),
    card_bg: Color32::from_rgb(34, 40, 50),
    hover_bg: Color32::from_rgb(46, 54, 66),
    text_primary: Color32::from_rgb(236, 240, 244),
    text_secondary: Color32::from_rgb(156, 164, 176),
    text_on_accent: Color32::from_rgb(236, 240, 244),
    accent: Color32::from_rgb(255, 122, 26),
    success: Color32::from_rgb(52, 168, 83),
    warning: Color32::from_rgb(251, 188, 4),
    error: Color32::from_rgb(234, 67, 53),
    border: Color32::from_rgb(58, 66, 78),
    selection_alpha: 0.4,
};

pub static LIGHT: Palette = Palette {
    background: Color32::from_rgb(248, 249, 251),
    panel_bg: Color32::from_rgb(255, 255, 255),
    card_bg: Color32::from_rgb(242, 244, 247),
    hover_bg: Color32::from_rgb(228, 231, 236),
    text_primary: Color32::from_rgb(30, 34, 40),
    text_secondary: Color32::from_rgb(92, 98, 108),
    text_on_accent: Color32::WHITE,
    accent: Color32::from_rgb(222, 96, 0),
    success: Color32::from_rgb(24, 128, 56),
    warning: Color32::from_rgb(214, 146, 0),
    error: Color32::from_rgb(200, 50, 40),
    border: Color32::from_rgb(214, 218, 224),
    selection_alpha: 0.2,
};

impl Palette {
    pub fn load_band(&self, band: LoadBand) -> Color32 {
        match band {
            LoadBand::Low => self.success,
            LoadBand::Medium => self.warning,
            LoadBand::High => self.error,
        }
    }

    pub fn compliance(&self, status: ComplianceStatus) -> Color32 {
        match status {
            ComplianceStatus::Behind => self.error,
            ComplianceStatus::OnTrack => self.success,
            ComplianceStatus::Ahead => self.warning,
        }
    }

    pub fn severity(&self, severity: Severity) -> Color32 {
        match severity {
            Severity::Info => self.text_secondary,
            Severity::Warning => self.warning,
        }
    }
}

/// Series colors shared by both themes.
pub fn discipline_color(discipline: Discipline) -> Color32 {
    match discipline {
        Discipline::Run => Color32::from_rgb(234, 84, 85),
        Discipline::Bike => Color32::from_rgb(66, 133, 244),
        Discipline::Swim => Color32::from_rgb(0, 188, 180),
        Discipline::Strength => Color32::from_rgb(156, 104, 220),
    }
}
