//! UI widgets for reusable components.

pub mod charts;
pub mod metric_display;
pub mod sidebar;

pub use charts::{TeamBarChart, WeeklyLineChart};
pub use metric_display::{MetricDisplay, MetricSize};
pub use sidebar::{Sidebar, SidebarAction, SidebarView};
