//! Race countdown, festivals and birthdays.
//!
//! The sidebar shows the time left to race day plus any team occasions
//! coming up, since festival days usually mean lighter training and
//! heavier meals.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::athlete::Roster;

/// Kind of calendar occasion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Festival,
    Birthday,
}

/// A dated occasion shown in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub name: String,
    pub date: NaiveDate,
    pub kind: EventKind,
}

/// Fixed festival table for the training window.
pub const FESTIVALS: &[(&str, i32, u32, u32)] = &[
    ("Diwali", 2025, 10, 20),
    ("Christmas", 2025, 12, 25),
    ("Makar Sankranti", 2026, 1, 14),
    ("Holi", 2026, 3, 4),
    ("Gudi Padwa", 2026, 3, 19),
    ("Ganesh Chaturthi", 2026, 9, 14),
    ("Dussehra", 2026, 10, 20),
    ("Diwali", 2026, 11, 8),
    ("Christmas", 2026, 12, 25),
    ("Makar Sankranti", 2027, 1, 14),
    ("Holi", 2027, 3, 22),
    ("Gudi Padwa", 2027, 4, 7),
    ("Ganesh Chaturthi", 2027, 9, 4),
    ("Dussehra", 2027, 10, 9),
    ("Diwali", 2027, 10, 29),
    ("Christmas", 2027, 12, 25),
    ("Makar Sankranti", 2028, 1, 15),
    ("Holi", 2028, 3, 11),
    ("Gudi Padwa", 2028, 3, 27),
];

/// Time remaining until race start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl Countdown {
    /// Whole weeks remaining.
    pub fn weeks(&self) -> i64 {
        self.days / 7
    }

    /// True once the race has started.
    pub fn is_over(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0
    }
}

/// Remaining time from `now` to the race start, saturating at zero.
pub fn countdown(now: NaiveDateTime, race_start: NaiveDateTime) -> Countdown {
    let remaining = race_start - now;
    if remaining <= Duration::zero() {
        return Countdown::default();
    }

    let total_minutes = remaining.num_minutes();
    Countdown {
        days: total_minutes / (24 * 60),
        hours: (total_minutes / 60) % 24,
        minutes: total_minutes % 60,
    }
}

fn festivals() -> impl Iterator<Item = CalendarEvent> {
    FESTIVALS.iter().filter_map(|&(name, y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d).map(|date| CalendarEvent {
            name: name.to_string(),
            date,
            kind: EventKind::Festival,
        })
    })
}

/// Festivals and birthdays within `[today, today + horizon_days]`, by date.
pub fn upcoming_events(roster: &Roster, today: NaiveDate, horizon_days: i64) -> Vec<CalendarEvent> {
    let until = today + Duration::days(horizon_days);

    let birthdays = roster.athletes.iter().filter_map(|athlete| {
        athlete.next_birthday(today).map(|date| CalendarEvent {
            name: format!("{}'s birthday", athlete.name),
            date,
            kind: EventKind::Birthday,
        })
    });

    let mut events: Vec<CalendarEvent> = festivals()
        .chain(birthdays)
        .filter(|e| e.date >= today && e.date <= until)
        .collect();
    events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
    events
}

/// Events that fall exactly on `date`.
pub fn events_on(roster: &Roster, date: NaiveDate) -> Vec<CalendarEvent> {
    upcoming_events(roster, date, 0)
}
