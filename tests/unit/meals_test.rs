//! Unit tests for the meal rotation and adherence scoring.

use chrono::NaiveDate;
use ironcoach::nutrition::{
    day_adherence, protein_for, weekly_adherence, MacroTargets, MealPicker, MealSlot, Protein,
};
use ironcoach::team::Roster;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_protein_rotation() {
    // 2026-10-12 is a Monday
    assert_eq!(protein_for(0, date(2026, 10, 12)), Protein::Chicken);
    assert_eq!(protein_for(1, date(2026, 10, 12)), Protein::Fish);
    assert_eq!(protein_for(2, date(2026, 10, 13)), Protein::Mutton);
    // Sunday wraps around the six-protein cycle
    assert_eq!(protein_for(0, date(2026, 10, 18)), Protein::Chicken);
}

#[test]
fn test_every_slot_filled() {
    let picker = MealPicker::default();
    let mut rng = StdRng::seed_from_u64(7);
    let plan = picker.pick(2, date(2026, 10, 14), &mut rng);
    for slot in MealSlot::ALL {
        assert!(plan.dish(slot).is_some(), "no dish for {:?}", slot);
    }
}

#[test]
fn test_never_chicken_and_mutton_together() {
    let picker = MealPicker::default();
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        for athlete in 0..3 {
            for day in 12..19 {
                let plan = picker.pick(athlete, date(2026, 10, day), &mut rng);
                assert!(
                    !(plan.contains_protein(Protein::Chicken)
                        && plan.contains_protein(Protein::Mutton)),
                    "seed {} athlete {} day {}",
                    seed,
                    athlete,
                    day
                );
            }
        }
    }
}

#[test]
fn test_protein_of_the_day_served_at_lunch() {
    let picker = MealPicker::default();
    let mut rng = StdRng::seed_from_u64(3);
    let plan = picker.pick(0, date(2026, 10, 12), &mut rng);
    assert_eq!(plan.protein_of_the_day, Protein::Chicken);
    assert_eq!(plan.dish(MealSlot::Lunch).map(|d| d.protein), Some(Protein::Chicken));
}

#[test]
fn test_weekly_adherence_average() {
    let days = [
        day_adherence(9, true),
        day_adherence(0, false),
        day_adherence(9, true),
    ];
    let week = weekly_adherence(&days);
    assert!((week.meals_pct - 66.666).abs() < 0.01);
    assert!((week.sleep_pct - 66.666).abs() < 0.01);
    assert_eq!(weekly_adherence(&[]).meals_pct, 0.0);
}

#[test]
fn test_macro_targets_scale_with_load() {
    let athlete = Roster::default().athletes[0].clone();
    let easy = MacroTargets::for_athlete(&athlete, 10.0);
    let hard = MacroTargets::for_athlete(&athlete, 80.0);
    assert!(hard.protein_g > easy.protein_g);
    assert!(hard.carbs_g > easy.carbs_g);
    assert_eq!(hard.fat_g, easy.fat_g);

    let full = easy.adherence(easy.protein_g, easy.carbs_g, easy.fat_g);
    assert!((full - 100.0).abs() < 1e-3);
    assert_eq!(easy.adherence(0.0, 0.0, 0.0), 0.0);
}
