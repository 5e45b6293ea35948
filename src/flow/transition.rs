// ABOUTME: Pure state transition function mapping (state, event) to (state, effects)
// ABOUTME: Effects describe collaborator calls and image task control for the orchestrator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use smartchef_core::constants::messages;
use smartchef_core::errors::AppError;
use smartchef_core::models::{
    FilterCriteria, IngredientCorrection, Recipe, RecipeId, RecipeImage, Temperature,
};

use super::state::{AppState, ImageSlot, Phase};
use crate::chef::sanitize_corrections;
use crate::ranking::rank_recipes;
use crate::tags;

/// Something that happened: a user action or a collaborator result
#[derive(Debug)]
pub enum Event {
    /// Text of the available-ingredients field changed
    AvailableInputChanged(String),
    /// Available-ingredients field submitted (Enter or focus loss)
    AvailableInputSubmitted,
    /// Remove the available ingredient at an index
    RemoveAvailable(usize),
    /// Text of the excluded-ingredients field changed
    ExcludedInputChanged(String),
    /// Excluded-ingredients field submitted
    ExcludedInputSubmitted,
    /// Remove the excluded ingredient at an index
    RemoveExcluded(usize),
    /// Temperature preference selected
    SetTemperature(Temperature),
    /// Vegan flag toggled
    SetVegan(bool),
    /// Kosher flag toggled
    SetKosher(bool),
    /// Cooking time slider moved
    SetMaxCookingTime(u32),
    /// Recipe count slider moved
    SetRecipeCount(u8),
    /// Image display switched on or off
    ToggleImages(bool),
    /// "Find recipes" pressed
    StartGeneration,
    /// Validator finished
    ValidationCompleted(Vec<IngredientCorrection>),
    /// User accepted the correction for an original entry
    AcceptCorrection(String),
    /// User dismissed the correction for an original entry
    DismissCorrection(String),
    /// User chose to generate with the remaining entries as typed
    Proceed,
    /// Generator returned recipes
    GenerationSucceeded(Vec<Recipe>),
    /// Generator failed
    GenerationFailed(AppError),
    /// One image request finished
    ImageResolved {
        /// Recipe batch the request belonged to
        batch: u64,
        /// Recipe the image is for
        recipe_id: RecipeId,
        /// The image, or `None` on failure
        image: Option<RecipeImage>,
    },
}

/// Work the orchestrator must perform after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Ask the collaborator for corrections
    Validate {
        /// Available ingredients as entered
        ingredients: Vec<String>,
    },
    /// Ask the collaborator for recipes
    Generate {
        /// Snapshot of the filters
        criteria: FilterCriteria,
    },
    /// Cancel every in-flight image request
    CancelImages,
    /// Start one image request per recipe
    ResolveImages {
        /// Batch the results must carry back
        batch: u64,
        /// Recipes needing images
        recipes: Vec<Recipe>,
    },
}

/// Apply one event
///
/// Events that make no sense in the current phase leave the state unchanged
/// and produce no effects.
#[must_use]
pub fn transition(mut state: AppState, event: Event) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();

    match event {
        Event::AvailableInputChanged(text) => tags::on_input(
            &mut state.filters.available_ingredients,
            &mut state.available_input,
            &text,
        ),
        Event::AvailableInputSubmitted => tags::on_submit(
            &mut state.filters.available_ingredients,
            &mut state.available_input,
        ),
        Event::RemoveAvailable(index) => {
            state.filters.available_ingredients.remove(index);
        }
        Event::ExcludedInputChanged(text) => tags::on_input(
            &mut state.filters.excluded_ingredients,
            &mut state.excluded_input,
            &text,
        ),
        Event::ExcludedInputSubmitted => tags::on_submit(
            &mut state.filters.excluded_ingredients,
            &mut state.excluded_input,
        ),
        Event::RemoveExcluded(index) => {
            state.filters.excluded_ingredients.remove(index);
        }
        Event::SetTemperature(temperature) => state.filters.temperature = temperature,
        Event::SetVegan(on) => state.filters.is_vegan = on,
        Event::SetKosher(on) => state.filters.is_kosher = on,
        Event::SetMaxCookingTime(minutes) => state.filters.set_max_cooking_time(minutes),
        Event::SetRecipeCount(count) => state.filters.set_recipe_count(count),
        Event::ToggleImages(on) => toggle_images(&mut state, on, &mut effects),
        Event::StartGeneration => start_generation(&mut state, &mut effects),
        Event::ValidationCompleted(corrections) => {
            if state.phase == Phase::Validating {
                let corrections =
                    sanitize_corrections(state.filters.available_ingredients.as_slice(), corrections);
                if corrections.is_empty() {
                    begin_generating(&mut state, &mut effects);
                } else {
                    state.corrections = corrections;
                    state.phase = Phase::CorrectionPending;
                }
            }
        }
        Event::AcceptCorrection(original) => {
            if state.phase == Phase::CorrectionPending {
                if let Some(correction) = take_correction(&mut state, &original) {
                    state
                        .filters
                        .available_ingredients
                        .replace(&correction.original, &correction.suggested);
                }
            }
        }
        Event::DismissCorrection(original) => {
            if state.phase == Phase::CorrectionPending {
                take_correction(&mut state, &original);
            }
        }
        Event::Proceed => {
            if state.phase == Phase::CorrectionPending {
                state.corrections.clear();
                begin_generating(&mut state, &mut effects);
            }
        }
        Event::GenerationSucceeded(recipes) => {
            if state.phase == Phase::Generating {
                show_recipes(&mut state, recipes, &mut effects);
            }
        }
        Event::GenerationFailed(_) => {
            if state.phase == Phase::Generating {
                state.phase = Phase::Error;
                state.error = Some(messages::GENERATION_FAILED.to_owned());
            }
        }
        Event::ImageResolved {
            batch,
            recipe_id,
            image,
        } => {
            if batch == state.batch && state.filters.show_images {
                if let Some(slot) = state.images.get_mut(&recipe_id) {
                    *slot = image.map_or(ImageSlot::Empty, ImageSlot::Ready);
                }
            }
        }
    }

    (state, effects)
}

fn start_generation(state: &mut AppState, effects: &mut Vec<Effect>) {
    if state.phase.is_busy() {
        return;
    }

    tags::merge_pending(
        &mut state.filters.available_ingredients,
        &mut state.available_input,
    );
    tags::merge_pending(
        &mut state.filters.excluded_ingredients,
        &mut state.excluded_input,
    );

    if state.filters.available_ingredients.is_empty() {
        state.phase = Phase::Error;
        state.error = Some(messages::NO_INGREDIENTS.to_owned());
        return;
    }

    state.error = None;
    state.corrections.clear();
    state.phase = Phase::Validating;
    effects.push(Effect::Validate {
        ingredients: state.filters.available_ingredients.as_slice().to_vec(),
    });
}

fn begin_generating(state: &mut AppState, effects: &mut Vec<Effect>) {
    state.phase = Phase::Generating;
    effects.push(Effect::Generate {
        criteria: state.filters.clone(),
    });
}

fn take_correction(state: &mut AppState, original: &str) -> Option<IngredientCorrection> {
    let position = state
        .corrections
        .iter()
        .position(|c| c.original == original)?;
    Some(state.corrections.remove(position))
}

fn show_recipes(state: &mut AppState, recipes: Vec<Recipe>, effects: &mut Vec<Effect>) {
    state.batch += 1;
    state.recipes = rank_recipes(recipes);
    state.images.clear();
    state.error = None;
    state.phase = Phase::Displaying;

    effects.push(Effect::CancelImages);
    if state.filters.show_images {
        request_images(state, effects);
    }
}

fn toggle_images(state: &mut AppState, on: bool, effects: &mut Vec<Effect>) {
    if state.filters.show_images == on {
        return;
    }
    state.filters.show_images = on;

    if on {
        if matches!(state.phase, Phase::Displaying | Phase::Error) {
            request_images(state, effects);
        }
    } else {
        state.images.clear();
        effects.push(Effect::CancelImages);
    }
}

fn request_images(state: &mut AppState, effects: &mut Vec<Effect>) {
    if state.recipes.is_empty() {
        return;
    }
    for recipe in &state.recipes {
        state.images.insert(recipe.id.clone(), ImageSlot::Loading);
    }
    effects.push(Effect::ResolveImages {
        batch: state.batch,
        recipes: state.recipes.clone(),
    });
}
