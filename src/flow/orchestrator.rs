// ABOUTME: Event loop driving the transition function and performing its effects
// ABOUTME: Awaits validation and generation in order; image requests run as background tasks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::VecDeque;
use std::mem;
use std::sync::Arc;

use tracing::{debug, error, info};

use super::state::AppState;
use super::transition::{transition, Effect, Event};
use crate::chef::RecipeCollaborator;
use crate::images::ImageResolver;

/// Owns the session state and the collaborator
pub struct Orchestrator {
    collaborator: Arc<dyn RecipeCollaborator>,
    state: AppState,
    images: ImageResolver,
}

impl Orchestrator {
    /// Start a session with default filters
    #[must_use]
    pub fn new(collaborator: Arc<dyn RecipeCollaborator>) -> Self {
        Self::with_state(collaborator, AppState::default())
    }

    /// Start a session from an existing state
    #[must_use]
    pub fn with_state(collaborator: Arc<dyn RecipeCollaborator>, state: AppState) -> Self {
        let images = ImageResolver::new(Arc::clone(&collaborator));
        Self {
            collaborator,
            state,
            images,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply `event` and every event its effects produce
    ///
    /// Returns once no validation or generation is outstanding. Image requests
    /// keep running; collect them with [`Self::next_image`] or
    /// [`Self::settle_images`].
    pub async fn dispatch(&mut self, event: Event) {
        let mut queue = VecDeque::from([event]);

        while let Some(event) = queue.pop_front() {
            let before = self.state.phase;
            let (state, effects) = transition(mem::take(&mut self.state), event);
            self.state = state;
            if before != self.state.phase {
                debug!(from = %before, to = %self.state.phase, "Phase changed");
            }

            for effect in effects {
                if let Some(next) = self.perform(effect).await {
                    queue.push_back(next);
                }
            }
        }
    }

    async fn perform(&mut self, effect: Effect) -> Option<Event> {
        match effect {
            Effect::Validate { ingredients } => {
                let corrections = self.collaborator.validate(&ingredients).await;
                Some(Event::ValidationCompleted(corrections))
            }
            Effect::Generate { criteria } => match self.collaborator.generate(&criteria).await {
                Ok(recipes) => {
                    info!(count = recipes.len(), "Recipes generated");
                    Some(Event::GenerationSucceeded(recipes))
                }
                Err(e) => {
                    error!(error = %e, code = ?e.code, "Recipe generation failed");
                    Some(Event::GenerationFailed(e))
                }
            },
            Effect::CancelImages => {
                self.images.cancel_all();
                None
            }
            Effect::ResolveImages { batch, recipes } => {
                for recipe in recipes {
                    self.images.spawn(batch, recipe);
                }
                None
            }
        }
    }

    /// Wait for one image request and apply its result
    ///
    /// Returns `false` when no request is outstanding.
    pub async fn next_image(&mut self) -> bool {
        match self.images.next().await {
            Some(outcome) => {
                self.dispatch(Event::ImageResolved {
                    batch: outcome.batch,
                    recipe_id: outcome.recipe_id,
                    image: outcome.image,
                })
                .await;
                true
            }
            None => false,
        }
    }

    /// Wait until every outstanding image request has been applied
    pub async fn settle_images(&mut self) {
        while self.next_image().await {}
    }

    /// Number of image requests not yet collected
    #[must_use]
    pub fn images_in_flight(&self) -> usize {
        self.images.in_flight()
    }
}
