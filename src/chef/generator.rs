// ABOUTME: Recipe generator turning filter criteria into schema-constrained recipe lists
// ABOUTME: Fails hard: collaborator or parse failures propagate to the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Deserialize;
use smartchef_core::errors::{AppError, AppResult, ErrorCode};
use smartchef_core::models::{FilterCriteria, Ingredient, Recipe, RecipeId, Temperature};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use super::prompts;
use crate::llm::{schema, ContentRequest, GenerativeModel};

/// One recipe as returned by the model; every field is mandatory
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeDraft {
    title: String,
    description: String,
    cooking_time_minutes: u32,
    instructions: Vec<String>,
    ingredients: Vec<Ingredient>,
    is_vegan: bool,
    is_kosher: bool,
    temperature: String,
}

impl RecipeDraft {
    fn into_recipe(self, id: RecipeId) -> Recipe {
        Recipe {
            id,
            title: self.title,
            description: self.description,
            instructions: self.instructions,
            cooking_time_minutes: self.cooking_time_minutes,
            ingredients: self.ingredients,
            is_vegan: self.is_vegan,
            is_kosher: self.is_kosher,
            temperature: Temperature::from_str_or_default(&self.temperature),
            rating: None,
        }
    }
}

/// Request `criteria.recipe_count` recipes
///
/// # Errors
///
/// Propagates every collaborator failure; a missing field in any recipe or
/// ingredient fails the whole batch.
#[instrument(skip(model, criteria), fields(model = %model_name, count = criteria.recipe_count))]
pub(super) async fn generate_recipes(
    model: &dyn GenerativeModel,
    model_name: &str,
    language: &str,
    criteria: &FilterCriteria,
) -> AppResult<Vec<Recipe>> {
    if !model.capabilities(model_name).supports_json_mode() {
        return Err(AppError::new(
            ErrorCode::ConfigInvalid,
            format!("model '{model_name}' does not support structured output"),
        ));
    }

    let request = ContentRequest::new(model_name, prompts::recipe_prompt(criteria, language))
        .with_response_schema(schema::recipe_schema());
    let response = model.generate_content(&request).await?;

    let batch = Uuid::new_v4().simple().to_string();
    let recipes = parse_recipes(&response.text, &batch)?;

    if recipes.len() != usize::from(criteria.recipe_count) {
        warn!(
            requested = criteria.recipe_count,
            returned = recipes.len(),
            "Model returned a different number of recipes than requested"
        );
    }
    debug!(returned = recipes.len(), %batch, "Recipes generated");

    Ok(recipes)
}

/// Parse the model's JSON array, assigning `recipe-{index}-{batch}` identifiers
///
/// # Errors
///
/// Returns `SerializationError` if the text is not a JSON array of complete recipes.
pub fn parse_recipes(text: &str, batch: &str) -> AppResult<Vec<Recipe>> {
    let drafts: Vec<RecipeDraft> = serde_json::from_str(text)
        .map_err(|e| AppError::serialization(format!("Malformed recipe response: {e}")).with_source(e))?;

    Ok(drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| draft.into_recipe(RecipeId::new(format!("recipe-{index}-{batch}"))))
        .collect())
}
