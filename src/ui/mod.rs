//! UI module for the egui dashboard.

pub mod screens;
pub mod theme;
pub mod widgets;

pub use screens::DashboardTab;
pub use theme::Theme;
