//! Team comparison data for the overview charts.

use chrono::{Duration, NaiveDate};

use crate::plan::{week_start, Discipline};
use crate::storage::{DailyLogEntry, LogStore};
use crate::team::Roster;

/// One athlete's logged totals for the current week.
#[derive(Debug, Clone, PartialEq)]
pub struct AthleteWeek {
    pub name: String,
    pub run_km: f32,
    pub bike_km: f32,
    pub swim_km: f32,
    pub strength_min: f32,
}

impl AthleteWeek {
    fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            run_km: 0.0,
            bike_km: 0.0,
            swim_km: 0.0,
            strength_min: 0.0,
        }
    }

    pub fn amount(&self, discipline: Discipline) -> f32 {
        match discipline {
            Discipline::Run => self.run_km,
            Discipline::Bike => self.bike_km,
            Discipline::Swim => self.swim_km,
            Discipline::Strength => self.strength_min,
        }
    }
}

/// Weekly total distance for one athlete, oldest week first.
#[derive(Debug, Clone, PartialEq)]
pub struct AthleteTrend {
    pub name: String,
    /// `(week start, total km)`
    pub points: Vec<(NaiveDate, f32)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamOverview {
    pub week_start: NaiveDate,
    pub this_week: Vec<AthleteWeek>,
    pub trends: Vec<AthleteTrend>,
    /// One message per athlete whose log could not be read
    pub warnings: Vec<String>,
}

fn sum_week(entries: &[DailyLogEntry], name: &str, monday: NaiveDate) -> AthleteWeek {
    let sunday = monday + Duration::days(6);
    entries
        .iter()
        .filter(|e| e.date >= monday && e.date <= sunday)
        .fold(AthleteWeek::empty(name), |mut acc, e| {
            acc.run_km += e.run_km;
            acc.bike_km += e.bike_km;
            acc.swim_km += e.swim_km;
            acc.strength_min += e.strength_min;
            acc
        })
}

impl TeamOverview {
    /// Current-week totals and a `weeks`-long distance trend per athlete.
    pub fn build(roster: &Roster, store: &dyn LogStore, today: NaiveDate, weeks: u32) -> Self {
        let monday = week_start(today);
        let weeks = weeks.max(1) as i64;

        let mut this_week = Vec::with_capacity(roster.len());
        let mut trends = Vec::with_capacity(roster.len());
        let mut warnings = Vec::new();

        for athlete in &roster.athletes {
            let entries = match store.load(&athlete.name) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!("Could not load log for {}: {}", athlete.name, e);
                    warnings.push(format!("{}: {}", athlete.name, e));
                    Vec::new()
                }
            };

            this_week.push(sum_week(&entries, &athlete.name, monday));

            let points = (0..weeks)
                .rev()
                .map(|back| {
                    let start = monday - Duration::days(7 * back);
                    let week = sum_week(&entries, &athlete.name, start);
                    (start, week.run_km + week.bike_km + week.swim_km)
                })
                .collect();
            trends.push(AthleteTrend {
                name: athlete.name.clone(),
                points,
            });
        }

        Self {
            week_start: monday,
            this_week,
            trends,
            warnings,
        }
    }
}
