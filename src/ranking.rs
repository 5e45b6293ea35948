// ABOUTME: Display-order scoring of generated recipes from ingredient completeness and cooking time
// ABOUTME: Pure functions; the rating is assigned once per generation batch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Ranking
//!
//! `rating = ingredient_score + time_score`, both clamped to `[0, 5]`:
//!
//! - `ingredient_score = max(0, 5 - missing * 1.5)`
//! - `time_score = max(0, 5 * (1 - minutes / 90))`
//!
//! The sum is rounded to one decimal. Recipes are ordered by rating, highest
//! first, keeping the collaborator's order on ties.

use std::cmp::Ordering;

use smartchef_core::constants::ranking::{
    MAX_COMPONENT_SCORE, MAX_STARS, MISSING_INGREDIENT_PENALTY, TIME_SCORE_HORIZON_MINUTES,
};
use smartchef_core::models::Recipe;

/// Score for how few ingredients the user still has to buy
#[must_use]
pub fn ingredient_score(missing: usize) -> f64 {
    let missing = missing as f64;
    missing
        .mul_add(-MISSING_INGREDIENT_PENALTY, MAX_COMPONENT_SCORE)
        .clamp(0.0, MAX_COMPONENT_SCORE)
}

/// Score for how quickly the dish is ready
#[must_use]
pub fn time_score(minutes: u32) -> f64 {
    let fraction = f64::from(minutes) / TIME_SCORE_HORIZON_MINUTES;
    (MAX_COMPONENT_SCORE * (1.0 - fraction)).clamp(0.0, MAX_COMPONENT_SCORE)
}

/// Combined rating of one recipe, rounded to one decimal
#[must_use]
pub fn rating(recipe: &Recipe) -> f64 {
    let raw = ingredient_score(recipe.missing_count()) + time_score(recipe.cooking_time_minutes);
    (raw * 10.0).round() / 10.0
}

/// Assign ratings and sort by rating descending
///
/// The sort is stable, so equally rated recipes keep their input order.
#[must_use]
pub fn rank_recipes(mut recipes: Vec<Recipe>) -> Vec<Recipe> {
    for recipe in &mut recipes {
        recipe.rating = Some(rating(recipe));
    }
    recipes.sort_by(|a, b| compare_ratings(b.rating, a.rating));
    recipes
}

fn compare_ratings(a: Option<f64>, b: Option<f64>) -> Ordering {
    a.unwrap_or(0.0).total_cmp(&b.unwrap_or(0.0))
}

/// Stars shown on a recipe card: `round(rating / 2)`, at most five
#[must_use]
pub fn star_count(rating: f64) -> u8 {
    (rating / 2.0).round().clamp(0.0, f64::from(MAX_STARS)) as u8
}
