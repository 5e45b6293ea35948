// ABOUTME: Scripted RecipeCollaborator replaying canned corrections, recipes, and images
// ABOUTME: Counts calls and can hold image requests open to exercise cancellation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use smartchef::chef::RecipeCollaborator;
use smartchef::errors::AppResult;
use smartchef::models::{FilterCriteria, IngredientCorrection, Recipe, RecipeImage};
use tokio::sync::Semaphore;

#[derive(Default)]
pub struct ScriptedCollaborator {
    corrections: Mutex<Vec<IngredientCorrection>>,
    generations: Mutex<VecDeque<AppResult<Vec<Recipe>>>>,
    images: Mutex<HashMap<String, RecipeImage>>,
    image_gate: Option<Arc<Semaphore>>,
    pub validate_calls: AtomicUsize,
    pub generate_calls: AtomicUsize,
    pub image_calls: AtomicUsize,
    pub last_criteria: Mutex<Option<FilterCriteria>>,
}

impl ScriptedCollaborator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_corrections(self, corrections: Vec<IngredientCorrection>) -> Self {
        *self.corrections.lock().unwrap() = corrections;
        self
    }

    pub fn with_generation(self, result: AppResult<Vec<Recipe>>) -> Self {
        self.generations.lock().unwrap().push_back(result);
        self
    }

    /// Image returned for the recipe with this title; other titles get none
    pub fn with_image(self, title: &str, image: RecipeImage) -> Self {
        self.images.lock().unwrap().insert(title.to_owned(), image);
        self
    }

    /// Image requests wait for a permit from `gate` before answering
    pub fn with_image_gate(mut self, gate: Arc<Semaphore>) -> Self {
        self.image_gate = Some(gate);
        self
    }

    pub fn validations(&self) -> usize {
        self.validate_calls.load(Ordering::SeqCst)
    }

    pub fn generations(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
    }

    pub fn image_requests(&self) -> usize {
        self.image_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeCollaborator for ScriptedCollaborator {
    async fn validate(&self, _names: &[String]) -> Vec<IngredientCorrection> {
        self.validate_calls.fetch_add(1, Ordering::SeqCst);
        self.corrections.lock().unwrap().clone()
    }

    async fn generate(&self, criteria: &FilterCriteria) -> AppResult<Vec<Recipe>> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_criteria.lock().unwrap() = Some(criteria.clone());
        self.generations
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted generation left")
    }

    async fn image(&self, recipe: &Recipe) -> Option<RecipeImage> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.image_gate {
            gate.acquire().await.ok()?.forget();
        }
        self.images.lock().unwrap().get(&recipe.title).cloned()
    }
}
