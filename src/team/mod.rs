//! Team roster, race countdown and calendar occasions.

pub mod athlete;
pub mod events;

pub use athlete::{Athlete, AthleteError, Gender, Roster};
pub use events::{countdown, events_on, upcoming_events, CalendarEvent, Countdown, EventKind};
