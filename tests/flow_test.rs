// ABOUTME: Tests for the pure orchestration state machine
// ABOUTME: Validates guards, correction handling, ranking on success, and stale image suppression
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::{image, recipe};
use smartchef::constants::messages;
use smartchef::errors::AppError;
use smartchef::flow::{transition, AppState, Effect, Event, ImageSlot, Phase};
use smartchef::models::{IngredientCorrection, Recipe, RecipeId};

fn apply(state: AppState, events: Vec<Event>) -> (AppState, Vec<Effect>) {
    events
        .into_iter()
        .fold((state, Vec::new()), |(state, _), event| transition(state, event))
}

fn correction(original: &str, suggested: &str) -> IngredientCorrection {
    IngredientCorrection {
        original: original.to_owned(),
        suggested: suggested.to_owned(),
        reason: "опечатка".to_owned(),
    }
}

fn with_available(input: &str) -> AppState {
    AppState {
        available_input: input.to_owned(),
        ..AppState::default()
    }
}

fn two_recipes() -> Vec<Recipe> {
    vec![
        recipe("recipe-0-a", "Slow", 80, &["рис"], &["лук"]),
        recipe("recipe-1-a", "Fast", 10, &["рис"], &[]),
    ]
}

fn displaying() -> AppState {
    let (state, _) = apply(
        with_available("рис"),
        vec![
            Event::StartGeneration,
            Event::ValidationCompleted(Vec::new()),
            Event::GenerationSucceeded(two_recipes()),
        ],
    );
    assert_eq!(state.phase, Phase::Displaying);
    state
}

// ============================================================================
// StartGeneration
// ============================================================================

#[test]
fn test_empty_input_is_rejected_without_effects() {
    let (state, effects) = transition(with_available("  , ,"), Event::StartGeneration);

    assert_eq!(state.phase, Phase::Error);
    assert_eq!(state.error.as_deref(), Some(messages::NO_INGREDIENTS));
    assert!(effects.is_empty());
}

#[test]
fn test_pending_input_is_merged_after_existing_tags() {
    let mut state = with_available("лук, , курица,лук");
    state.filters.available_ingredients.push("рис");
    state.excluded_input = "грибы,".to_owned();

    let (state, effects) = transition(state, Event::StartGeneration);

    assert_eq!(state.phase, Phase::Validating);
    assert_eq!(
        state.filters.available_ingredients.as_slice(),
        ["рис", "лук", "курица"]
    );
    assert_eq!(state.filters.excluded_ingredients.as_slice(), ["грибы"]);
    assert!(state.available_input.is_empty());
    assert!(state.excluded_input.is_empty());
    assert_eq!(
        effects,
        vec![Effect::Validate {
            ingredients: vec!["рис".to_owned(), "лук".to_owned(), "курица".to_owned()]
        }]
    );
}

#[test]
fn test_start_is_ignored_while_busy() {
    let (state, _) = apply(
        with_available("рис"),
        vec![Event::StartGeneration, Event::ValidationCompleted(Vec::new())],
    );
    assert_eq!(state.phase, Phase::Generating);

    let (state, effects) = transition(state, Event::StartGeneration);
    assert_eq!(state.phase, Phase::Generating);
    assert!(effects.is_empty());
}

// ============================================================================
// Validation and corrections
// ============================================================================

#[test]
fn test_no_corrections_goes_straight_to_generation() {
    let (state, effects) = apply(
        with_available("рис, курица"),
        vec![Event::StartGeneration, Event::ValidationCompleted(Vec::new())],
    );

    assert_eq!(state.phase, Phase::Generating);
    match effects.as_slice() {
        [Effect::Generate { criteria }] => {
            assert_eq!(criteria.available_ingredients.as_slice(), ["рис", "курица"]);
        }
        other => panic!("unexpected effects {other:?}"),
    }
}

#[test]
fn test_accept_one_dismiss_one() {
    let (state, effects) = apply(
        with_available("лык, курица, морковка"),
        vec![
            Event::StartGeneration,
            Event::ValidationCompleted(vec![
                correction("лык", "лук"),
                correction("морковка", "морковь"),
            ]),
        ],
    );
    assert_eq!(state.phase, Phase::CorrectionPending);
    assert!(effects.is_empty());

    let (state, _) = apply(
        state,
        vec![
            Event::AcceptCorrection("лык".to_owned()),
            Event::DismissCorrection("морковка".to_owned()),
        ],
    );

    assert_eq!(
        state.filters.available_ingredients.as_slice(),
        ["лук", "курица", "морковка"]
    );
    assert!(state.corrections.is_empty());
    assert_eq!(state.phase, Phase::CorrectionPending);

    let (state, effects) = transition(state, Event::Proceed);
    assert_eq!(state.phase, Phase::Generating);
    assert!(matches!(
        effects.as_slice(),
        [Effect::Generate { criteria }] if criteria.available_ingredients.contains("лук")
    ));
}

#[test]
fn test_accepting_into_existing_entry_deduplicates() {
    let (state, _) = apply(
        with_available("лук, лык"),
        vec![
            Event::StartGeneration,
            Event::ValidationCompleted(vec![correction("лык", "лук")]),
            Event::AcceptCorrection("лык".to_owned()),
        ],
    );
    assert_eq!(state.filters.available_ingredients.as_slice(), ["лук"]);
}

#[test]
fn test_blank_suggestions_never_reach_the_ingredient_list() {
    let (state, effects) = apply(
        with_available("лык, курица"),
        vec![
            Event::StartGeneration,
            Event::ValidationCompleted(vec![
                correction("лык", "   "),
                correction("курица", " курица "),
            ]),
        ],
    );

    assert!(state.corrections.is_empty());
    assert_eq!(state.phase, Phase::Generating);
    match effects.as_slice() {
        [Effect::Generate { criteria }] => assert!(criteria
            .available_ingredients
            .iter()
            .all(|name| !name.trim().is_empty())),
        other => panic!("expected a single Generate effect, got {other:?}"),
    }

    let (state, effects) = transition(state, Event::AcceptCorrection("лык".to_owned()));
    assert!(effects.is_empty());
    assert_eq!(state.filters.available_ingredients.as_slice(), ["лык", "курица"]);
}

#[test]
fn test_padded_suggestion_is_trimmed_on_accept() {
    let (state, _) = apply(
        with_available("лык, курица"),
        vec![
            Event::StartGeneration,
            Event::ValidationCompleted(vec![correction("лык", " лук ")]),
        ],
    );
    assert_eq!(state.corrections, vec![correction("лык", "лук")]);

    let (state, _) = transition(state, Event::AcceptCorrection("лык".to_owned()));
    assert_eq!(state.filters.available_ingredients.as_slice(), ["лук", "курица"]);
}

#[test]
fn test_proceed_discards_remaining_corrections() {
    let (state, effects) = apply(
        with_available("лык"),
        vec![
            Event::StartGeneration,
            Event::ValidationCompleted(vec![correction("лык", "лук")]),
            Event::Proceed,
        ],
    );

    assert!(state.corrections.is_empty());
    assert_eq!(state.filters.available_ingredients.as_slice(), ["лык"]);
    assert_eq!(effects.len(), 1);
}

#[test]
fn test_corrections_for_unknown_entries_are_dropped() {
    let (state, effects) = apply(
        with_available("рис"),
        vec![
            Event::StartGeneration,
            Event::ValidationCompleted(vec![correction("рыс", "рис")]),
        ],
    );
    assert_eq!(state.phase, Phase::Generating);
    assert!(matches!(effects.as_slice(), [Effect::Generate { .. }]));
}

// ============================================================================
// Generation outcome
// ============================================================================

#[test]
fn test_success_ranks_and_requests_images() {
    let (state, effects) = apply(
        with_available("рис"),
        vec![
            Event::StartGeneration,
            Event::ValidationCompleted(Vec::new()),
            Event::GenerationSucceeded(two_recipes()),
        ],
    );

    assert_eq!(state.phase, Phase::Displaying);
    assert_eq!(state.recipes[0].title, "Fast");
    assert_eq!(state.batch, 1);
    assert_eq!(state.loading_images(), 2);
    assert_eq!(effects[0], Effect::CancelImages);
    match &effects[1] {
        Effect::ResolveImages { batch, recipes } => {
            assert_eq!(*batch, 1);
            assert_eq!(recipes.len(), 2);
        }
        other => panic!("unexpected effect {other:?}"),
    }
}

#[test]
fn test_success_without_images_requests_none() {
    let mut state = with_available("рис");
    state.filters.show_images = false;
    let (state, effects) = apply(
        state,
        vec![
            Event::StartGeneration,
            Event::ValidationCompleted(Vec::new()),
            Event::GenerationSucceeded(two_recipes()),
        ],
    );

    assert!(state.images.is_empty());
    assert_eq!(effects, vec![Effect::CancelImages]);
}

#[test]
fn test_failure_keeps_previous_recipes() {
    let shown = displaying();
    let previous = shown.recipes.clone();

    let (state, _) = apply(
        shown,
        vec![
            Event::StartGeneration,
            Event::ValidationCompleted(Vec::new()),
            Event::GenerationFailed(AppError::internal("boom")),
        ],
    );

    assert_eq!(state.phase, Phase::Error);
    assert_eq!(state.error.as_deref(), Some(messages::GENERATION_FAILED));
    assert_eq!(state.recipes, previous);
}

#[test]
fn test_retry_after_error_is_accepted() {
    let (state, effects) = apply(
        displaying(),
        vec![
            Event::StartGeneration,
            Event::ValidationCompleted(Vec::new()),
            Event::GenerationFailed(AppError::internal("boom")),
            Event::StartGeneration,
        ],
    );
    assert_eq!(state.phase, Phase::Validating);
    assert!(state.error.is_none());
    assert_eq!(effects.len(), 1);
}

// ============================================================================
// Images
// ============================================================================

#[test]
fn test_image_results_fill_their_own_slot() {
    let state = displaying();
    let fast = RecipeId::new("recipe-1-a");
    let slow = RecipeId::new("recipe-0-a");

    let (state, effects) = apply(
        state,
        vec![
            Event::ImageResolved {
                batch: 1,
                recipe_id: fast.clone(),
                image: Some(image("ZmFzdA")),
            },
            Event::ImageResolved {
                batch: 1,
                recipe_id: slow.clone(),
                image: None,
            },
        ],
    );

    assert!(effects.is_empty());
    assert_eq!(
        state.image_slot(&fast),
        Some(&ImageSlot::Ready(image("ZmFzdA")))
    );
    assert_eq!(state.image_slot(&slow), Some(&ImageSlot::Empty));
}

#[test]
fn test_stale_or_unknown_image_results_are_ignored() {
    let state = displaying();
    let before = state.clone();

    let (state, _) = apply(
        state,
        vec![
            Event::ImageResolved {
                batch: 0,
                recipe_id: RecipeId::new("recipe-1-a"),
                image: Some(image("b2xk")),
            },
            Event::ImageResolved {
                batch: 1,
                recipe_id: RecipeId::new("recipe-9-z"),
                image: Some(image("bmV3")),
            },
        ],
    );

    assert_eq!(state, before);
}

#[test]
fn test_toggle_images_off_and_on() {
    let (state, effects) = transition(displaying(), Event::ToggleImages(false));
    assert!(state.images.is_empty());
    assert_eq!(effects, vec![Effect::CancelImages]);

    let (state, ignored) = transition(
        state,
        Event::ImageResolved {
            batch: 1,
            recipe_id: RecipeId::new("recipe-1-a"),
            image: Some(image("bGF0ZQ")),
        },
    );
    assert!(ignored.is_empty());
    assert!(state.images.is_empty());

    let (state, effects) = transition(state, Event::ToggleImages(true));
    assert_eq!(state.loading_images(), 2);
    assert!(matches!(
        effects.as_slice(),
        [Effect::ResolveImages { batch: 1, recipes }] if recipes.len() == 2
    ));
}

// ============================================================================
// Filter edits
// ============================================================================

#[test]
fn test_filter_sliders_are_clamped() {
    let (state, _) = apply(
        AppState::default(),
        vec![Event::SetRecipeCount(12), Event::SetMaxCookingTime(33)],
    );
    assert_eq!(state.filters.recipe_count, 10);
    assert_eq!(state.filters.max_cooking_time, 35);
}
