//! Quote of the day.

use chrono::{Datelike, NaiveDate};

pub const QUOTES: &[&str] = &[
    "Anything is possible.",
    "Swim, bike, run. Repeat until finished.",
    "The miracle isn't that I finished. The miracle is that I had the courage to start.",
    "Pain is temporary. Pride is forever.",
    "Train the body, then trust it on race day.",
    "Small steps every day add up to 226 kilometres.",
    "Discipline is choosing what you want most over what you want now.",
    "You don't have to go fast, you just have to go.",
    "Tough times don't last. Tough athletes do.",
    "The only bad workout is the one that didn't happen.",
];

/// The same quote all day, cycling through the list by day of year.
pub fn quote_of_the_day(date: NaiveDate) -> &'static str {
    QUOTES[date.ordinal0() as usize % QUOTES.len()]
}
