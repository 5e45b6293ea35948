// ABOUTME: Prompt builders for ingredient validation, recipe generation, and recipe images
// ABOUTME: Encodes the availability-tagging policy the collaborator must follow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use smartchef_core::models::{FilterCriteria, Recipe};

/// Prompt asking the model to flag typos and non-food entries
#[must_use]
pub fn validation_prompt(names: &[String]) -> String {
    format!(
        "Check the following list of ingredients for typos, non-existent products or odd names: {}.\n\
         If a product is misspelled (for example 'lettuse' instead of 'lettuce') or is not edible, \
         suggest a correction. Copy the ingredient into `original` exactly as written in the list.\n\
         Return the corrections as JSON. If everything is correct, return an empty corrections array.",
        names.join(", ")
    )
}

/// Prompt asking for `recipe_count` recipes honouring every filter
#[must_use]
pub fn recipe_prompt(criteria: &FilterCriteria, language: &str) -> String {
    let excluded = if criteria.excluded_ingredients.is_empty() {
        "none".to_owned()
    } else {
        criteria.excluded_ingredients.as_slice().join(", ")
    };

    format!(
        "Generate exactly {count} unique recipes based on the following data:\n\
         Available ingredients: {available}\n\
         Excluded ingredients: {excluded}\n\
         Maximum cooking time: {max_time} minutes\n\
         Temperature preference: {temperature}\n\
         Vegan: {vegan}\n\
         Kosher: {kosher}\n\
         \n\
         For every ingredient of every recipe you MUST check whether it is in the \"Available ingredients\" list.\n\
         If it is, set isAvailable: true.\n\
         If it is not, set isAvailable: false (even salt or water: if they are not in the available list, set false).\n\
         \n\
         Write the result in {language}.",
        count = criteria.recipe_count,
        available = criteria.available_ingredients.as_slice().join(", "),
        max_time = criteria.max_cooking_time,
        temperature = criteria.temperature,
        vegan = criteria.is_vegan,
        kosher = criteria.is_kosher,
    )
}

/// Food-photography prompt built from the recipe title and ingredient names
#[must_use]
pub fn image_prompt(recipe: &Recipe) -> String {
    format!(
        "Professional food photography of \"{title}\".\n\
         The dish consists of: {ingredients}.\n\
         Style: High-end restaurant plating, close-up, soft natural lighting, appetizing, macro photography.\n\
         Ensure the image accurately represents the specific ingredients listed. No people in frame.",
        title = recipe.title,
        ingredients = recipe.ingredient_names().join(", "),
    )
}
