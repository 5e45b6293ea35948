// ABOUTME: Terminal output for the smartchef CLI: recipe cards on stdout, dialog on stderr
// ABOUTME: Cards show stars, missing ingredients, steps, and where the image went
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use smartchef::constants::ranking::MAX_STARS;
use smartchef::flow::{AppState, ImageSlot};
use smartchef::models::{IngredientCorrection, Recipe, RecipeId};
use smartchef::ranking::star_count;

/// Everything except recipe cards: progress, errors, and the correction dialog
///
/// Writes to stderr so stdout only carries recipe cards. Write failures are
/// ignored.
pub struct Dialog<W> {
    out: W,
}

impl Dialog<io::Stderr> {
    /// Dialog on the process stderr
    pub fn stderr() -> Self {
        Self { out: io::stderr() }
    }
}

impl<W: Write> Dialog<W> {
    /// Status line
    pub fn progress(&mut self, message: &str) {
        let _ = writeln!(self.out, "{message}");
    }

    /// User-facing error
    pub fn error(&mut self, message: &str) {
        let _ = writeln!(self.out, "Error: {message}");
    }

    /// Hint shown after an unrecognised answer
    pub fn hint(&mut self, message: &str) {
        let _ = writeln!(self.out, "{message}");
    }

    /// Show the corrections suggested for the available ingredients
    pub fn corrections(&mut self, corrections: &[IngredientCorrection]) {
        let _ = writeln!(self.out, "\nSome ingredients look misspelled:");
        for correction in corrections {
            let _ = writeln!(
                self.out,
                "  {} -> {} ({})",
                correction.original, correction.suggested, correction.reason
            );
        }
    }

    /// Ask about one correction
    pub fn question(&mut self, correction: &IngredientCorrection) {
        let _ = writeln!(
            self.out,
            "Replace '{}' with '{}'? [a]ccept / [d]ismiss / [p]roceed with the rest as typed",
            correction.original, correction.suggested
        );
    }
}

/// Print ranked recipe cards
pub fn recipes(state: &AppState, saved: &[(RecipeId, PathBuf)]) {
    if state.recipes.is_empty() {
        println!("No recipes were returned.");
        return;
    }

    for (position, recipe) in state.recipes.iter().enumerate() {
        let saved_path = saved
            .iter()
            .find(|(id, _)| id == &recipe.id)
            .map(|(_, path)| path.as_path());
        card(position + 1, recipe, state.image_slot(&recipe.id), saved_path);
    }
}

fn card(position: usize, recipe: &Recipe, slot: Option<&ImageSlot>, saved: Option<&Path>) {
    let rating = recipe.rating.unwrap_or_default();
    let filled = star_count(rating);

    println!();
    println!("{position}. {}", recipe.title);
    println!(
        "   {}{} {rating:.1}  |  {} min  |  {}{}{}",
        "★".repeat(usize::from(filled)),
        "☆".repeat(usize::from(MAX_STARS - filled)),
        recipe.cooking_time_minutes,
        recipe.temperature,
        if recipe.is_vegan { ", vegan" } else { "" },
        if recipe.is_kosher { ", kosher" } else { "" },
    );
    println!("   {}", recipe.description);

    println!("   Ingredients:");
    for ingredient in &recipe.ingredients {
        let mark = if ingredient.is_available { '+' } else { '-' };
        println!("     {mark} {} ({})", ingredient.name, ingredient.amount);
    }

    let missing: Vec<&str> = recipe
        .missing_ingredients()
        .map(|i| i.name.as_str())
        .collect();
    if missing.is_empty() {
        println!("   You have everything.");
    } else {
        println!("   Missing: {}", missing.join(", "));
    }

    println!("   Steps:");
    for (step, instruction) in recipe.instructions.iter().enumerate() {
        println!("     {}. {instruction}", step + 1);
    }

    match (slot, saved) {
        (_, Some(path)) => println!("   Image: {}", path.display()),
        (Some(ImageSlot::Ready(image)), None) => {
            let uri = image.to_data_uri();
            let preview: String = uri.chars().take(48).collect();
            println!("   Image: {preview}... ({} chars, use --image-dir to save)", uri.len());
        }
        (Some(ImageSlot::Empty), None) => println!("   Image: not available"),
        (Some(ImageSlot::Loading) | None, None) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_writes_prompts_to_its_own_stream() {
        let correction = IngredientCorrection {
            original: "лык".to_owned(),
            suggested: "лук".to_owned(),
            reason: "опечатка".to_owned(),
        };
        let mut dialog = Dialog { out: Vec::new() };

        dialog.corrections(std::slice::from_ref(&correction));
        dialog.question(&correction);
        dialog.hint("Please answer a, d or p.");

        let written = String::from_utf8(dialog.out).unwrap();
        assert!(written.contains("лык -> лук (опечатка)"));
        assert!(written.contains("Replace 'лык' with 'лук'?"));
        assert!(written.ends_with("Please answer a, d or p.\n"));
    }
}
