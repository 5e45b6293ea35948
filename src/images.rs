// ABOUTME: Cancellable per-recipe image requests running concurrently on the tokio runtime
// ABOUTME: Tasks never report after cancellation; ready images can be saved to disk by recipe id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Image Resolver
//!
//! One task per displayed recipe. Tokens live in a registry keyed by
//! [`RecipeId`]; replacing the recipe list, switching images off, or dropping
//! the resolver cancels them. A cancelled task yields nothing, so a stale
//! image can never be committed into application state.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use smartchef_core::errors::{AppError, AppResult};
use smartchef_core::models::{Recipe, RecipeId, RecipeImage};
use tokio::fs;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::chef::RecipeCollaborator;
use crate::flow::{AppState, ImageSlot};

/// Result of one finished image request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageOutcome {
    /// Recipe batch the request was issued for
    pub batch: u64,
    /// Recipe the image belongs to
    pub recipe_id: RecipeId,
    /// The image, or `None` when the collaborator produced nothing
    pub image: Option<RecipeImage>,
}

/// Registry of in-flight image tasks
pub struct ImageResolver {
    collaborator: Arc<dyn RecipeCollaborator>,
    tokens: HashMap<RecipeId, CancellationToken>,
    tasks: JoinSet<Option<(ImageOutcome, CancellationToken)>>,
}

impl ImageResolver {
    /// Create an empty resolver
    #[must_use]
    pub fn new(collaborator: Arc<dyn RecipeCollaborator>) -> Self {
        Self {
            collaborator,
            tokens: HashMap::new(),
            tasks: JoinSet::new(),
        }
    }

    /// Start an image request for `recipe`, cancelling any earlier one for the same id
    pub fn spawn(&mut self, batch: u64, recipe: Recipe) {
        let token = CancellationToken::new();
        if let Some(previous) = self.tokens.insert(recipe.id.clone(), token.clone()) {
            previous.cancel();
        }

        let collaborator = Arc::clone(&self.collaborator);
        self.tasks.spawn(async move {
            let image = tokio::select! {
                () = token.cancelled() => return None,
                image = collaborator.image(&recipe) => image,
            };
            if token.is_cancelled() {
                return None;
            }
            let outcome = ImageOutcome {
                batch,
                recipe_id: recipe.id,
                image,
            };
            Some((outcome, token))
        });
    }

    /// Cancel every in-flight request
    pub fn cancel_all(&mut self) {
        if !self.tokens.is_empty() {
            debug!(count = self.tokens.len(), "Cancelling image requests");
        }
        for (_, token) in self.tokens.drain() {
            token.cancel();
        }
    }

    /// Number of requests not yet collected
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Wait for the next request that finished without being cancelled
    ///
    /// Returns `None` once no tasks remain.
    pub async fn next(&mut self) -> Option<ImageOutcome> {
        while let Some(joined) = self.tasks.join_next().await {
            match joined {
                Ok(Some((outcome, token))) => {
                    if token.is_cancelled() {
                        continue;
                    }
                    self.tokens.remove(&outcome.recipe_id);
                    return Some(outcome);
                }
                Ok(None) => {}
                Err(e) => warn!(error = %e, "Image task did not complete"),
            }
        }
        None
    }
}

impl Drop for ImageResolver {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// Write every ready image of the displayed recipes to `dir/<recipe-id>.<ext>`
///
/// The directory is created on first use. Recipes without an image are skipped.
///
/// # Errors
///
/// Returns `StorageError` if the directory or a file cannot be written, and
/// `SerializationError` if a payload is not valid base64.
pub async fn save_images(dir: &Path, state: &AppState) -> AppResult<Vec<(RecipeId, PathBuf)>> {
    let mut saved = Vec::new();

    for recipe in &state.recipes {
        let Some(image) = state.image_slot(&recipe.id).and_then(ImageSlot::image) else {
            continue;
        };
        let bytes = image.decode()?;
        if saved.is_empty() {
            fs::create_dir_all(dir).await.map_err(|e| {
                AppError::storage(format!("cannot create {}: {e}", dir.display())).with_source(e)
            })?;
        }

        let path = dir.join(format!("{}.{}", recipe.id, image.extension()));
        fs::write(&path, &bytes).await.map_err(|e| {
            AppError::storage(format!("cannot write {}: {e}", path.display())).with_source(e)
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "Image saved");
        saved.push((recipe.id.clone(), path));
    }

    Ok(saved)
}
