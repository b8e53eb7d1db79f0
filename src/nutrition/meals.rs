//! Daily meal suggestions.
//!
//! Each athlete gets a protein of the day from a fixed rotation offset by
//! their roster position. Every slot then draws a dish matching that protein
//! when the slot offers one, and chicken and mutton are never served on the
//! same day.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Time-of-day meal slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MealSlot {
    PreBreakfast,
    Breakfast,
    MidMorningSnack,
    Lunch,
    PreWorkout,
    PostWorkout,
    EveningSnack,
    Dinner,
    BeforeBed,
}

impl MealSlot {
    pub const ALL: [MealSlot; 9] = [
        MealSlot::PreBreakfast,
        MealSlot::Breakfast,
        MealSlot::MidMorningSnack,
        MealSlot::Lunch,
        MealSlot::PreWorkout,
        MealSlot::PostWorkout,
        MealSlot::EveningSnack,
        MealSlot::Dinner,
        MealSlot::BeforeBed,
    ];

    /// Display label, also the stored form.
    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::PreBreakfast => "Pre-Breakfast",
            MealSlot::Breakfast => "Breakfast",
            MealSlot::MidMorningSnack => "Mid-Morning Snack",
            MealSlot::Lunch => "Lunch",
            MealSlot::PreWorkout => "Pre-Workout",
            MealSlot::PostWorkout => "Post-Workout",
            MealSlot::EveningSnack => "Evening Snack",
            MealSlot::Dinner => "Dinner",
            MealSlot::BeforeBed => "Before Bed",
        }
    }
}

impl std::fmt::Display for MealSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for MealSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        MealSlot::ALL
            .iter()
            .copied()
            .find(|slot| slot.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown meal slot: {}", s))
    }
}

/// Main protein source of a dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Protein {
    Chicken,
    Mutton,
    Fish,
    Egg,
    Paneer,
    Legumes,
    None,
}

impl Protein {
    /// Meats that must not share a day with each other.
    pub fn is_exclusive_meat(&self) -> bool {
        matches!(self, Protein::Chicken | Protein::Mutton)
    }

    /// Whether the two proteins must not be served on the same day.
    pub fn conflicts_with(&self, other: Protein) -> bool {
        self.is_exclusive_meat() && other.is_exclusive_meat() && *self != other
    }

    pub fn label(&self) -> &'static str {
        match self {
            Protein::Chicken => "Chicken",
            Protein::Mutton => "Mutton",
            Protein::Fish => "Fish",
            Protein::Egg => "Egg",
            Protein::Paneer => "Paneer",
            Protein::Legumes => "Legumes",
            Protein::None => "None",
        }
    }
}

/// Rotation of the protein of the day.
pub const PROTEIN_CYCLE: [Protein; 6] = [
    Protein::Chicken,
    Protein::Fish,
    Protein::Egg,
    Protein::Mutton,
    Protein::Paneer,
    Protein::Legumes,
];

/// Protein of the day: `(athlete_index + weekday) % cycle_len`, Monday = 0.
pub fn protein_for(athlete_index: usize, date: NaiveDate) -> Protein {
    let weekday = date.weekday().num_days_from_monday() as usize;
    PROTEIN_CYCLE[(athlete_index + weekday) % PROTEIN_CYCLE.len()]
}

/// A dish on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    pub slot: MealSlot,
    pub protein: Protein,
}

const DISHES: &[(&str, MealSlot, Protein)] = &[
    ("Soaked almonds & walnuts", MealSlot::PreBreakfast, Protein::None),
    ("Warm lemon water with dates", MealSlot::PreBreakfast, Protein::None),
    ("Banana with peanut butter", MealSlot::PreBreakfast, Protein::None),
    ("Masala omelette with toast", MealSlot::Breakfast, Protein::Egg),
    ("Boiled eggs with poha", MealSlot::Breakfast, Protein::Egg),
    ("Paneer bhurji with roti", MealSlot::Breakfast, Protein::Paneer),
    ("Moong dal chilla", MealSlot::Breakfast, Protein::Legumes),
    ("Chicken sandwich", MealSlot::Breakfast, Protein::Chicken),
    ("Oats upma", MealSlot::Breakfast, Protein::None),
    ("Greek yogurt with berries", MealSlot::MidMorningSnack, Protein::None),
    ("Sprouts chaat", MealSlot::MidMorningSnack, Protein::Legumes),
    ("Fruit bowl", MealSlot::MidMorningSnack, Protein::None),
    ("Roasted chana", MealSlot::MidMorningSnack, Protein::Legumes),
    ("Chicken curry with brown rice", MealSlot::Lunch, Protein::Chicken),
    ("Grilled chicken salad", MealSlot::Lunch, Protein::Chicken),
    ("Mutton keema with roti", MealSlot::Lunch, Protein::Mutton),
    ("Fish curry with rice", MealSlot::Lunch, Protein::Fish),
    ("Rajma chawal", MealSlot::Lunch, Protein::Legumes),
    ("Paneer tikka with quinoa", MealSlot::Lunch, Protein::Paneer),
    ("Egg curry with rice", MealSlot::Lunch, Protein::Egg),
    ("Dal khichdi", MealSlot::Lunch, Protein::Legumes),
    ("Banana and black coffee", MealSlot::PreWorkout, Protein::None),
    ("Peanut butter toast", MealSlot::PreWorkout, Protein::None),
    ("Dates and oats bar", MealSlot::PreWorkout, Protein::None),
    ("Whey shake with banana", MealSlot::PostWorkout, Protein::None),
    ("Chicken tikka wrap", MealSlot::PostWorkout, Protein::Chicken),
    ("Egg white sandwich", MealSlot::PostWorkout, Protein::Egg),
    ("Paneer wrap", MealSlot::PostWorkout, Protein::Paneer),
    ("Chocolate milk", MealSlot::PostWorkout, Protein::None),
    ("Makhana and green tea", MealSlot::EveningSnack, Protein::None),
    ("Hummus with veggie sticks", MealSlot::EveningSnack, Protein::Legumes),
    ("Boiled eggs", MealSlot::EveningSnack, Protein::Egg),
    ("Handful of nuts", MealSlot::EveningSnack, Protein::None),
    ("Tandoori chicken with veggies", MealSlot::Dinner, Protein::Chicken),
    ("Mutton stew with millet roti", MealSlot::Dinner, Protein::Mutton),
    ("Grilled fish with sweet potato", MealSlot::Dinner, Protein::Fish),
    ("Egg bhurji with roti", MealSlot::Dinner, Protein::Egg),
    ("Palak paneer with roti", MealSlot::Dinner, Protein::Paneer),
    ("Chana masala with rice", MealSlot::Dinner, Protein::Legumes),
    ("Warm turmeric milk", MealSlot::BeforeBed, Protein::None),
    ("Casein pudding", MealSlot::BeforeBed, Protein::None),
    ("Cottage cheese bowl", MealSlot::BeforeBed, Protein::Paneer),
];

/// The menu the picker draws from.
#[derive(Debug, Clone, PartialEq)]
pub struct MealPool {
    dishes: Vec<Dish>,
}

impl Default for MealPool {
    fn default() -> Self {
        Self {
            dishes: DISHES
                .iter()
                .map(|&(name, slot, protein)| Dish {
                    name: name.to_string(),
                    slot,
                    protein,
                })
                .collect(),
        }
    }
}

impl MealPool {
    /// Build a pool. Every slot needs at least one dish without chicken or
    /// mutton so the same-day exclusion can always be satisfied.
    pub fn new(dishes: Vec<Dish>) -> Option<Self> {
        let covered = MealSlot::ALL.iter().all(|slot| {
            dishes
                .iter()
                .any(|d| d.slot == *slot && !d.protein.is_exclusive_meat())
        });
        covered.then_some(Self { dishes })
    }

    /// Dishes served in a slot.
    pub fn for_slot(&self, slot: MealSlot) -> impl Iterator<Item = &Dish> {
        self.dishes.iter().filter(move |d| d.slot == slot)
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }
}

/// Suggested meals for one athlete on one day.
#[derive(Debug, Clone, PartialEq)]
pub struct MealPlan {
    pub date: NaiveDate,
    pub protein_of_the_day: Protein,
    pub meals: BTreeMap<MealSlot, Dish>,
}

impl MealPlan {
    /// Whether any dish uses the given protein.
    pub fn contains_protein(&self, protein: Protein) -> bool {
        self.meals.values().any(|d| d.protein == protein)
    }

    pub fn dish(&self, slot: MealSlot) -> Option<&Dish> {
        self.meals.get(&slot)
    }
}

/// Draws meal plans from a pool.
#[derive(Debug, Clone, Default)]
pub struct MealPicker {
    pool: MealPool,
}

impl MealPicker {
    pub fn new(pool: MealPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MealPool {
        &self.pool
    }

    /// Pick one dish per slot.
    ///
    /// Results are random; only the category rules are stable. Pass a seeded
    /// RNG for reproducible plans.
    pub fn pick<R: Rng + ?Sized>(&self, athlete_index: usize, date: NaiveDate, rng: &mut R) -> MealPlan {
        let protein = protein_for(athlete_index, date);

        let mut meals = BTreeMap::new();
        for slot in MealSlot::ALL {
            let matching: Vec<&Dish> = self
                .pool
                .for_slot(slot)
                .filter(|d| d.protein == protein)
                .collect();
            let candidates = if matching.is_empty() {
                self.pool
                    .for_slot(slot)
                    .filter(|d| !protein.conflicts_with(d.protein))
                    .collect()
            } else {
                matching
            };
            if let Some(dish) = candidates.choose(rng) {
                meals.insert(slot, (*dish).clone());
            }
        }

        self.exclude_conflicting_meats(&mut meals, protein, rng);

        MealPlan {
            date,
            protein_of_the_day: protein,
            meals,
        }
    }

    /// Keep the protein of the day (or else the first exclusive meat in slot
    /// order) and redraw slots that use the other one.
    fn exclude_conflicting_meats<R: Rng + ?Sized>(
        &self,
        meals: &mut BTreeMap<MealSlot, Dish>,
        preferred: Protein,
        rng: &mut R,
    ) {
        let mut kept = preferred.is_exclusive_meat().then_some(preferred);

        for slot in MealSlot::ALL {
            let Some(protein) = meals.get(&slot).map(|d| d.protein) else {
                continue;
            };
            if !protein.is_exclusive_meat() {
                continue;
            }
            match kept {
                None => kept = Some(protein),
                Some(meat) if meat == protein => {}
                Some(meat) => {
                    let allowed: Vec<&Dish> = self
                        .pool
                        .for_slot(slot)
                        .filter(|d| d.protein == meat || !d.protein.is_exclusive_meat())
                        .collect();
                    if let Some(dish) = allowed.choose(rng) {
                        tracing::debug!(
                            "Replaced {} with {} to avoid mixing meats",
                            protein.label(),
                            dish.name
                        );
                        meals.insert(slot, (*dish).clone());
                    } else {
                        meals.remove(&slot);
                    }
                }
            }
        }
    }
}
