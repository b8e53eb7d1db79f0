//! Main application state and egui integration.

use std::collections::HashMap;

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime};
use eframe::egui;

use ironcoach::coaching::{
    adherence_readiness, load_history, phase_readiness, quote_of_the_day, suggestions,
    training_compliance, TeamOverview,
};
use ironcoach::nutrition::{
    day_adherence, macro_adherence, weekly_adherence, MacroTargets, MealPicker, MealPlan,
};
use ironcoach::plan::{week_start, PhaseCalendar, PlanGenerator};
use ironcoach::session::SessionState;
use ironcoach::storage::config::{self, LoadedConfig};
use ironcoach::storage::{open_store, DailyLogEntry, LogStore};
use ironcoach::team::{countdown, events_on, upcoming_events, Athlete};
use ironcoach::ui::screens::nutrition::NutritionView;
use ironcoach::ui::screens::progress::ProgressView;
use ironcoach::ui::screens::today::DayView;
use ironcoach::ui::screens::{
    DashboardTab, DayAction, DayPlanScreen, NutritionScreen, ProgressScreen, TeamScreen,
    WeeklyScreen,
};
use ironcoach::ui::theme::Theme;
use ironcoach::ui::widgets::{Sidebar, SidebarAction, SidebarView};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Main application state.
pub struct IronCoachApp {
    /// Configuration and whether it may be written back
    settings: LoadedConfig,
    /// `None` when the configured backend could not be opened
    store: Option<Box<dyn LogStore>>,
    store_status: String,
    generator: PlanGenerator,
    picker: MealPicker,
    session: SessionState,
    /// Loaded logs per athlete
    logs: HashMap<String, Vec<DailyLogEntry>>,
    meal_plans: HashMap<(String, NaiveDate), MealPlan>,
    team_overview: Option<TeamOverview>,
    selected: String,
    tab: DashboardTab,
    theme: Theme,
    sidebar: Sidebar,
    today_screen: DayPlanScreen,
    next_day_screen: DayPlanScreen,
    weekly_screen: WeeklyScreen,
    progress_screen: ProgressScreen,
    nutrition_screen: NutritionScreen,
    team_screen: TeamScreen,
    save_error: Option<String>,
}

impl IronCoachApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = config::load_or_default(&config::get_config_path());
        let config = &settings.config;

        let theme = config.ui.theme;
        cc.egui_ctx.set_visuals(theme.visuals());
        cc.egui_ctx.set_zoom_factor(config.ui.font_scale.clamp(0.5, 3.0));

        let (store, store_status) = match open_store(config) {
            Ok(store) => {
                let status = store.describe();
                tracing::info!("Using {}", status);
                (Some(store), status)
            }
            Err(e) => {
                tracing::error!("Could not open log storage: {}", e);
                (None, format!("Logs unavailable: {}", e))
            }
        };

        let generator = PlanGenerator::new(PhaseCalendar::default(), config.plan.weekly_increment);
        let selected = config
            .team
            .roster
            .athletes
            .first()
            .map(|a| a.name.clone())
            .unwrap_or_default();

        Self {
            settings,
            store,
            store_status,
            generator,
            picker: MealPicker::default(),
            session: SessionState::new(),
            logs: HashMap::new(),
            meal_plans: HashMap::new(),
            team_overview: None,
            selected,
            tab: DashboardTab::default(),
            theme,
            sidebar: Sidebar::new(),
            today_screen: DayPlanScreen::new(),
            next_day_screen: DayPlanScreen::new(),
            weekly_screen: WeeklyScreen::new(),
            progress_screen: ProgressScreen::new(),
            nutrition_screen: NutritionScreen::new(),
            team_screen: TeamScreen::new(),
            save_error: None,
        }
    }

    fn athlete(&self) -> Option<Athlete> {
        self.settings.config.team.roster.get(&self.selected).cloned()
    }

    /// Load an athlete's log into the cache if it isn't there yet.
    fn ensure_log(&mut self, athlete: &str) {
        if self.logs.contains_key(athlete) {
            return;
        }
        let entries = match &self.store {
            Some(store) => match store.load(athlete) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!("Could not load log for {}: {}", athlete, e);
                    self.save_error = Some(format!("Could not load log for {}: {}", athlete, e));
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        self.logs.insert(athlete.to_string(), entries);
    }

    fn log(&self, athlete: &str) -> &[DailyLogEntry] {
        self.logs.get(athlete).map(Vec::as_slice).unwrap_or(&[])
    }

    fn entry(&self, athlete: &str, date: NaiveDate) -> Option<&DailyLogEntry> {
        self.log(athlete).iter().find(|e| e.date == date)
    }

    /// Make sure a day's check boxes reflect the stored row.
    fn ensure_day(&mut self, athlete: &str, date: NaiveDate) {
        self.ensure_log(athlete);
        if !self.session.is_seeded(athlete, date) {
            let entry = self.entry(athlete, date).cloned();
            self.session.seed_from_entry(athlete, date, entry.as_ref());
        }
    }

    fn meal_plan(&mut self, athlete: &str, date: NaiveDate) -> MealPlan {
        let index = self.settings.config.team.roster.index_of(athlete).unwrap_or(0);
        let picker = &self.picker;
        self.meal_plans
            .entry((athlete.to_string(), date))
            .or_insert_with(|| picker.pick(index, date, &mut rand::thread_rng()))
            .clone()
    }

    /// Rebuild a day's row from the session, apply the action and save it.
    fn apply(&mut self, athlete: &Athlete, action: DayAction) {
        let date = action.date();
        let plan = self.generator.daily_plan(athlete, date);
        let base = self.entry(&athlete.name, date).cloned();
        let mut entry = self.session.to_entry(
            &athlete.name,
            date,
            &plan,
            base.as_ref(),
            self.settings.config.nutrition.sleep_target_hours,
        );

        match action {
            DayAction::Checked(_) => {}
            DayAction::SaveNote { note, .. } => entry.note = note,
            DayAction::SaveMacros {
                protein_g,
                carbs_g,
                fat_g,
                ..
            } => {
                entry.protein_g = protein_g;
                entry.carbs_g = carbs_g;
                entry.fat_g = fat_g;
                entry.calories = MacroTargets::from_grams(protein_g, carbs_g, fat_g).calories;
            }
        }

        self.save(&athlete.name, entry);
    }

    fn save(&mut self, athlete: &str, entry: DailyLogEntry) {
        let Some(store) = &self.store else {
            self.save_error = Some(self.store_status.clone());
            return;
        };

        match store.save_entry(athlete, &entry) {
            Ok(()) => {
                let log = self.logs.entry(athlete.to_string()).or_default();
                log.retain(|e| e.date != entry.date);
                log.push(entry);
                log.sort_by_key(|e| e.date);
                self.team_overview = None;
                self.save_error = None;
            }
            Err(e) => {
                tracing::warn!("Save failed for {} on {}: {}", athlete, entry.date, e);
                self.save_error = Some(format!("Could not save {}: {}", entry.date, e));
            }
        }
    }

    fn save_target(&mut self, athlete: &str, kg: f32) {
        if let Err(e) = self.settings.config.team.roster.set_target_weight(athlete, kg) {
            self.sidebar.set_error(e.to_string());
            return;
        }
        tracing::info!("Target weight for {} set to {:.1} kg", athlete, kg);
        if let Err(e) = self.settings.save() {
            tracing::warn!("Could not save config: {}", e);
            self.save_error = Some(format!("Target updated but not saved: {}", e));
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = self.theme.toggled();
        ctx.set_visuals(self.theme.visuals());
        self.settings.config.ui.theme = self.theme;
        if let Err(e) = self.settings.save() {
            tracing::warn!("Could not save theme preference: {}", e);
        }
    }

    fn show_sidebar(&mut self, ui: &mut egui::Ui) {
        let today = today();
        let events = upcoming_events(
            &self.settings.config.team.roster,
            today,
            self.settings.config.ui.event_horizon_days,
        );
        let view = SidebarView {
            roster: &self.settings.config.team.roster,
            selected: &self.selected,
            race_name: &self.settings.config.team.race_name,
            countdown: countdown(now(), self.settings.config.team.race_start),
            quote: quote_of_the_day(today),
            events: &events,
            today,
        };

        match self.sidebar.show(ui, &view) {
            Some(SidebarAction::SelectAthlete(name)) => {
                tracing::debug!("Selected {}", name);
                self.selected = name;
                self.save_error = None;
            }
            Some(SidebarAction::SaveTarget { athlete, kg }) => self.save_target(&athlete, kg),
            None => {}
        }
    }

    fn show_tab(&mut self, ui: &mut egui::Ui) {
        let Some(athlete) = self.athlete() else {
            ui.label("No athletes configured. Add a roster to config.toml.");
            return;
        };
        let today = today();
        let palette = self.theme.palette();

        let action = match self.tab {
            DashboardTab::Today | DashboardTab::NextDay => {
                let (date, heading) = if self.tab == DashboardTab::Today {
                    (today, "Today")
                } else {
                    (today + Duration::days(1), "Next Day")
                };
                self.ensure_day(&athlete.name, date);
                let plan = self.generator.daily_plan(&athlete, date);
                let events = events_on(&self.settings.config.team.roster, date);
                let entry = self.entry(&athlete.name, date).cloned();
                let view = DayView {
                    heading,
                    athlete: &athlete.name,
                    plan: &plan,
                    events: &events,
                    entry: entry.as_ref(),
                };
                let screen = if self.tab == DashboardTab::Today {
                    &mut self.today_screen
                } else {
                    &mut self.next_day_screen
                };
                screen.show(ui, &view, &mut self.session)
            }
            DashboardTab::Weekly => {
                self.weekly_screen
                    .show(ui, &self.generator, &athlete, today, palette);
                None
            }
            DashboardTab::Progress => {
                self.show_progress(ui, &athlete, today);
                None
            }
            DashboardTab::Nutrition => self.show_nutrition(ui, &athlete, today),
            DashboardTab::Team => {
                self.show_team(ui, today);
                None
            }
        };

        if let Some(action) = action {
            self.apply(&athlete, action);
        }
    }

    /// Days of the current week up to and including today.
    fn elapsed_days(today: NaiveDate) -> Vec<NaiveDate> {
        let monday = week_start(today);
        (0..=today.weekday().num_days_from_monday() as i64)
            .map(|i| monday + Duration::days(i))
            .collect()
    }

    fn macro_pct(&self, athlete: &Athlete, date: NaiveDate) -> (MacroTargets, f32) {
        let load = self
            .generator
            .weekly_targets(athlete, date)
            .volumes
            .total_load();
        let targets = MacroTargets::for_athlete(athlete, load);
        let pct = self
            .entry(&athlete.name, date)
            .map(|e| macro_adherence(e, &targets))
            .unwrap_or(0.0);
        (targets, pct)
    }

    fn show_progress(&mut self, ui: &mut egui::Ui, athlete: &Athlete, today: NaiveDate) {
        let elapsed = Self::elapsed_days(today);
        for date in &elapsed {
            self.ensure_day(&athlete.name, *date);
        }

        let plans: Vec<_> = elapsed
            .iter()
            .map(|d| self.generator.daily_plan(athlete, *d))
            .collect();
        let compliance = training_compliance(self.log(&athlete.name), &plans);

        let days: Vec<_> = elapsed
            .iter()
            .map(|d| {
                day_adherence(
                    self.session.meals_done(&athlete.name, *d),
                    self.session.slept(&athlete.name, *d),
                )
            })
            .collect();
        let weekly = weekly_adherence(&days);
        let (_, macro_pct) = self.macro_pct(athlete, today);

        let phases = self.generator.calendar().progress(today);
        let phase = self.generator.calendar().phase_for(week_start(today));
        let tips = suggestions(phase, &compliance, &weekly);

        let history = load_history(
            &self.generator,
            athlete,
            self.log(&athlete.name),
            today,
            self.settings.config.ui.team_trend_weeks,
        );

        let view = ProgressView {
            athlete: &athlete.name,
            phases: &phases,
            phase_readiness: phase_readiness(&phases),
            adherence_readiness: adherence_readiness(&weekly, macro_pct),
            compliance: &compliance,
            suggestions: &tips,
            weeks: history.iter().map(|w| w.week_start).collect(),
            planned_load: history.iter().map(|w| w.planned).collect(),
            logged_load: history.iter().map(|w| w.logged).collect(),
        };
        self.progress_screen.show(ui, view, self.theme.palette());
    }

    fn show_nutrition(
        &mut self,
        ui: &mut egui::Ui,
        athlete: &Athlete,
        today: NaiveDate,
    ) -> Option<DayAction> {
        let monday = week_start(today);
        let week_dates: Vec<NaiveDate> = (0..7).map(|i| monday + Duration::days(i)).collect();
        for date in &week_dates {
            self.ensure_day(&athlete.name, *date);
        }

        let day = self.nutrition_screen.selected_day(today);
        let meal_plan = self.meal_plan(&athlete.name, day);
        let week: Vec<_> = week_dates
            .iter()
            .map(|d| {
                (
                    *d,
                    day_adherence(
                        self.session.meals_done(&athlete.name, *d),
                        self.session.slept(&athlete.name, *d),
                    ),
                )
            })
            .collect();
        let elapsed: Vec<_> = week
            .iter()
            .filter(|(d, _)| *d <= today)
            .map(|(_, a)| *a)
            .collect();
        let (targets, macro_pct) = self.macro_pct(athlete, day);
        let entry = self.entry(&athlete.name, day).cloned();

        let view = NutritionView {
            athlete: &athlete.name,
            date: day,
            meal_plan: &meal_plan,
            targets,
            entry: entry.as_ref(),
            sleep_target_hours: self.settings.config.nutrition.sleep_target_hours,
            week: &week,
            weekly: weekly_adherence(&elapsed),
            macro_pct,
        };
        self.nutrition_screen.show(ui, &view, &mut self.session)
    }

    fn show_team(&mut self, ui: &mut egui::Ui, today: NaiveDate) {
        let Some(store) = &self.store else {
            ui.label(self.store_status.as_str());
            return;
        };
        let overview = self.team_overview.get_or_insert_with(|| {
            TeamOverview::build(
                &self.settings.config.team.roster,
                store.as_ref(),
                today,
                self.settings.config.ui.team_trend_weeks,
            )
        });
        self.team_screen.show(ui, overview, self.theme.palette());
    }
}

impl eframe::App for IronCoachApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Countdown ticks by the minute
        ctx.request_repaint_after(std::time::Duration::from_secs(30));

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Ironcoach");
                ui.separator();
                for tab in DashboardTab::ALL {
                    if ui.selectable_label(self.tab == tab, tab.label()).clicked() {
                        self.tab = tab;
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(self.theme.icon()).clicked() {
                        self.toggle_theme(ctx);
                    }
                    ui.label(self.selected.as_str());
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                ui.separator();
                ui.label(self.store_status.as_str());
            });
        });

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .default_width(260.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.show_sidebar(ui));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(error) = &self.save_error {
                ui.colored_label(self.theme.palette().warning, error.as_str());
                ui.separator();
            }
            egui::ScrollArea::vertical().show(ui, |ui| self.show_tab(ui));
        });
    }
}
