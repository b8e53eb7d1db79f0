//! Athlete profiles and the team roster.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Athlete gender, used for macro and calorie estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

/// A team member training for the race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
    /// Display name, also used as the storage key
    pub name: String,
    /// Gender
    pub gender: Gender,
    /// Current body weight in kilograms
    pub weight_kg: f32,
    /// Race-day target weight in kilograms
    pub target_weight_kg: f32,
    /// Date of birth
    pub date_of_birth: NaiveDate,
    /// Multiplier applied to every planned volume
    #[serde(default = "default_volume_factor")]
    pub volume_factor: f32,
}

fn default_volume_factor() -> f32 {
    1.0
}

impl Athlete {
    /// Create an athlete with a neutral volume factor.
    pub fn new(
        name: impl Into<String>,
        gender: Gender,
        weight_kg: f32,
        target_weight_kg: f32,
        date_of_birth: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            gender,
            weight_kg,
            target_weight_kg,
            date_of_birth,
            volume_factor: default_volume_factor(),
        }
    }

    /// Age in whole years on the given date.
    pub fn age_on(&self, date: NaiveDate) -> u32 {
        let mut age = date.year() - self.date_of_birth.year();
        if (date.month(), date.day()) < (self.date_of_birth.month(), self.date_of_birth.day()) {
            age -= 1;
        }
        age.max(0) as u32
    }

    /// Kilograms left to lose before reaching the target weight.
    pub fn weight_to_lose(&self) -> f32 {
        (self.weight_kg - self.target_weight_kg).max(0.0)
    }

    /// Update the target weight.
    pub fn set_target_weight(&mut self, kg: f32) -> Result<(), AthleteError> {
        if !Self::validate_weight(kg) {
            return Err(AthleteError::InvalidWeight(kg));
        }
        self.target_weight_kg = kg;
        Ok(())
    }

    /// Validate a weight value (30-200 kg).
    pub fn validate_weight(kg: f32) -> bool {
        (30.0..=200.0).contains(&kg)
    }

    /// Next birthday on or after `today`.
    pub fn next_birthday(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = birthday_in(self.date_of_birth, today.year())?;
        if this_year >= today {
            Some(this_year)
        } else {
            birthday_in(self.date_of_birth, today.year() + 1)
        }
    }
}

/// Birthday within a given year; Feb 29 birthdays fall on Feb 28 in common years.
fn birthday_in(dob: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, dob.month(), dob.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, dob.month(), 28))
}

/// Ordered list of team members.
///
/// The position of an athlete in the roster is its index for the meal rotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub athletes: Vec<Athlete>,
}

impl Default for Roster {
    fn default() -> Self {
        // Dates are fixed literals and always valid.
        let dob = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
        Self {
            athletes: vec![
                Athlete::new("Mayur", Gender::Male, 82.0, 74.0, dob(1989, 3, 14)),
                Athlete::new("Sudeep", Gender::Male, 78.0, 72.0, dob(1991, 8, 2)),
                Athlete::new("Vaishali", Gender::Female, 64.0, 58.0, dob(1993, 11, 21)),
            ],
        }
    }
}

impl Roster {
    /// Look up an athlete by name.
    pub fn get(&self, name: &str) -> Option<&Athlete> {
        self.athletes.iter().find(|a| a.name == name)
    }

    /// Mutable lookup by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Athlete> {
        self.athletes.iter_mut().find(|a| a.name == name)
    }

    /// Position of an athlete in the roster.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.athletes.iter().position(|a| a.name == name)
    }

    /// Update one athlete's target weight.
    pub fn set_target_weight(&mut self, name: &str, kg: f32) -> Result<(), AthleteError> {
        self.get_mut(name)
            .ok_or_else(|| AthleteError::UnknownAthlete(name.to_string()))?
            .set_target_weight(kg)
    }

    /// Athlete names in roster order.
    pub fn names(&self) -> Vec<&str> {
        self.athletes.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.athletes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.athletes.is_empty()
    }
}

/// Athlete validation errors.
#[derive(Debug, Error)]
pub enum AthleteError {
    #[error("Weight must be between 30 and 200 kg, got {0}")]
    InvalidWeight(f32),

    #[error("Unknown athlete: {0}")]
    UnknownAthlete(String),
}
