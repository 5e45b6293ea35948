// ABOUTME: Recipe illustration request built from title and ingredient names
// ABOUTME: Any failure or missing inline data yields no image
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use smartchef_core::models::{Recipe, RecipeImage};
use tracing::{debug, instrument, warn};

use super::prompts;
use crate::llm::{ContentRequest, GenerativeModel};

#[instrument(skip(model, recipe), fields(model = %model_name, recipe_id = %recipe.id))]
pub(super) async fn resolve_image(
    model: &dyn GenerativeModel,
    model_name: &str,
    aspect_ratio: &str,
    recipe: &Recipe,
) -> Option<RecipeImage> {
    if !model.capabilities(model_name).supports_image_output() {
        debug!("Model does not produce images, skipping");
        return None;
    }

    let request =
        ContentRequest::new(model_name, prompts::image_prompt(recipe)).with_aspect_ratio(aspect_ratio);

    match model.generate_content(&request).await {
        Ok(response) => {
            let image = response
                .images
                .into_iter()
                .find(|image| !image.data.is_empty());
            if image.is_none() {
                debug!("No inline image data in response");
            }
            image
        }
        Err(e) => {
            warn!(error = %e, "Image generation failed");
            None
        }
    }
}
