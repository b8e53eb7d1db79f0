//! Dashboard tabs.

pub mod nutrition;
pub mod progress;
pub mod team;
pub mod today;
pub mod weekly;

use chrono::NaiveDate;

pub use nutrition::NutritionScreen;
pub use progress::ProgressScreen;
pub use team::TeamScreen;
pub use today::DayPlanScreen;
pub use weekly::WeeklyScreen;

/// Tab navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Today,
    NextDay,
    Weekly,
    Progress,
    Nutrition,
    Team,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 6] = [
        DashboardTab::Today,
        DashboardTab::NextDay,
        DashboardTab::Weekly,
        DashboardTab::Progress,
        DashboardTab::Nutrition,
        DashboardTab::Team,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Today => "Today's Plan",
            DashboardTab::NextDay => "Next Day",
            DashboardTab::Weekly => "Weekly Plan",
            DashboardTab::Progress => "Progress",
            DashboardTab::Nutrition => "Nutrition & Sleep",
            DashboardTab::Team => "Team Overview",
        }
    }
}

/// A change to one day's log requested by a screen.
#[derive(Debug, Clone, PartialEq)]
pub enum DayAction {
    /// A tick box changed; rebuild the row from the session
    Checked(NaiveDate),
    SaveNote { date: NaiveDate, note: String },
    SaveMacros {
        date: NaiveDate,
        protein_g: f32,
        carbs_g: f32,
        fat_g: f32,
    },
}

impl DayAction {
    pub fn date(&self) -> NaiveDate {
        match self {
            DayAction::Checked(date) => *date,
            DayAction::SaveNote { date, .. } => *date,
            DayAction::SaveMacros { date, .. } => *date,
        }
    }
}
