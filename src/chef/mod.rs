// ABOUTME: Recipe collaborator capability interface and its Gemini-backed implementation
// ABOUTME: Encodes each call's failure policy in its return type (soft vs. propagate)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Collaborator
//!
//! The orchestration flow depends only on [`RecipeCollaborator`]. The three
//! operations differ in how they fail:
//!
//! | Operation  | On failure                         |
//! |------------|------------------------------------|
//! | `validate` | empty list, flow continues         |
//! | `generate` | `AppError` propagated to the flow  |
//! | `image`    | `None`, that recipe has no picture |
//!
//! [`GeminiChef`] implements the interface on top of any [`GenerativeModel`].

mod generator;
mod image;
pub mod prompts;
mod validator;

pub use generator::parse_recipes;
pub use validator::sanitize_corrections;

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use async_trait::async_trait;
use smartchef_core::errors::AppResult;
use smartchef_core::models::{FilterCriteria, IngredientCorrection, Recipe, RecipeImage};

use crate::config::ChefConfig;
use crate::llm::{GeminiProvider, GenerativeModel};

/// External AI collaborator used by the orchestration flow
#[async_trait]
pub trait RecipeCollaborator: Send + Sync {
    /// Suggest corrections for user-entered ingredient names
    ///
    /// Every returned `original` matches an entry of `names` exactly and appears
    /// at most once. Failures yield an empty list.
    async fn validate(&self, names: &[String]) -> Vec<IngredientCorrection>;

    /// Generate recipes for fully resolved criteria
    ///
    /// # Errors
    ///
    /// Any collaborator or parse failure is returned; a partial or empty
    /// success is never fabricated.
    async fn generate(&self, criteria: &FilterCriteria) -> AppResult<Vec<Recipe>>;

    /// Produce one illustrative image; `None` on any failure
    async fn image(&self, recipe: &Recipe) -> Option<RecipeImage>;
}

/// Collaborator backed by a Gemini-style generative model
pub struct GeminiChef {
    model: Arc<dyn GenerativeModel>,
    text_model: String,
    image_model: String,
    image_aspect_ratio: String,
    recipe_language: String,
}

impl GeminiChef {
    /// Create a chef on top of an arbitrary model implementation
    #[must_use]
    pub fn new(model: Arc<dyn GenerativeModel>, config: &ChefConfig) -> Self {
        Self {
            model,
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
            image_aspect_ratio: config.image_aspect_ratio.clone(),
            recipe_language: config.recipe_language.clone(),
        }
    }

    /// Create a chef talking to the Gemini REST API
    #[must_use]
    pub fn from_config(config: &ChefConfig) -> Self {
        Self::new(Arc::new(GeminiProvider::from_config(config)), config)
    }
}

#[async_trait]
impl RecipeCollaborator for GeminiChef {
    async fn validate(&self, names: &[String]) -> Vec<IngredientCorrection> {
        validator::validate_ingredients(self.model.as_ref(), &self.text_model, names).await
    }

    async fn generate(&self, criteria: &FilterCriteria) -> AppResult<Vec<Recipe>> {
        generator::generate_recipes(
            self.model.as_ref(),
            &self.text_model,
            &self.recipe_language,
            criteria,
        )
        .await
    }

    async fn image(&self, recipe: &Recipe) -> Option<RecipeImage> {
        image::resolve_image(
            self.model.as_ref(),
            &self.image_model,
            &self.image_aspect_ratio,
            recipe,
        )
        .await
    }
}

impl Debug for GeminiChef {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiChef")
            .field("provider", &self.model.name())
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .field("recipe_language", &self.recipe_language)
            .finish_non_exhaustive()
    }
}
