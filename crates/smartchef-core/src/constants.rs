// ABOUTME: Recipe recommender constants: filter bounds, ranking weights, user messages
// ABOUTME: Shared by the flow state machine, the ranking step, and the terminal front-end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Values are grouped by the concern that consumes them.

/// Bounds and defaults for the user-facing filter controls
pub mod limits {
    /// Smallest number of recipes a user may request
    pub const MIN_RECIPE_COUNT: u8 = 3;
    /// Largest number of recipes a user may request
    pub const MAX_RECIPE_COUNT: u8 = 10;
    /// Recipe count selected on first launch
    pub const DEFAULT_RECIPE_COUNT: u8 = 6;

    /// Shortest selectable cooking time in minutes
    pub const MIN_COOKING_TIME: u32 = 5;
    /// Longest selectable cooking time in minutes
    pub const MAX_COOKING_TIME: u32 = 120;
    /// Cooking time selector granularity in minutes
    pub const COOKING_TIME_STEP: u32 = 5;
    /// Cooking time selected on first launch
    pub const DEFAULT_COOKING_TIME: u32 = 30;
}

/// Ranking formula weights
pub mod ranking {
    /// Upper bound of each score component
    pub const MAX_COMPONENT_SCORE: f64 = 5.0;
    /// Points lost per missing ingredient
    pub const MISSING_INGREDIENT_PENALTY: f64 = 1.5;
    /// Cooking time at which the time score reaches zero
    pub const TIME_SCORE_HORIZON_MINUTES: f64 = 90.0;
    /// Stars shown on a recipe card
    pub const MAX_STARS: u8 = 5;
}

/// Human-readable messages shown to the user
pub mod messages {
    /// Shown when generation starts without any available ingredient
    pub const NO_INGREDIENTS: &str = "Please enter at least one ingredient.";
    /// Shown when the recipe generator fails
    pub const GENERATION_FAILED: &str = "Could not generate recipes. Please try again.";
}

/// Image request defaults
pub mod images {
    /// Aspect ratio hint sent with every image request
    pub const DEFAULT_ASPECT_RATIO: &str = "4:3";
    /// MIME type assumed when the model omits one
    pub const DEFAULT_MIME_TYPE: &str = "image/png";
}
