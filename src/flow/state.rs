// ABOUTME: Application state of one recommender session: filters, phase, corrections, recipes, images
// ABOUTME: Mutated only through the pure transition function
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use smartchef_core::models::{FilterCriteria, IngredientCorrection, Recipe, RecipeId, RecipeImage};

/// Where the session is in the validate, correct, generate, display cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Waiting for ingredient corrections
    Validating,
    /// Corrections shown, waiting for the user
    CorrectionPending,
    /// Waiting for recipes
    Generating,
    /// Ranked recipes shown
    Displaying,
    /// A user-visible error is shown
    Error,
}

impl Phase {
    /// Whether a collaborator round-trip or a user decision is outstanding
    #[must_use]
    pub const fn is_busy(self) -> bool {
        matches!(
            self,
            Self::Validating | Self::CorrectionPending | Self::Generating
        )
    }

    /// Lowercase name for logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::CorrectionPending => "correction_pending",
            Self::Generating => "generating",
            Self::Displaying => "displaying",
            Self::Error => "error",
        }
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Image state of a single displayed recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSlot {
    /// Request in flight
    Loading,
    /// Image available
    Ready(RecipeImage),
    /// Request finished without an image
    Empty,
}

impl ImageSlot {
    /// The image, if one arrived
    #[must_use]
    pub const fn image(&self) -> Option<&RecipeImage> {
        match self {
            Self::Ready(image) => Some(image),
            Self::Loading | Self::Empty => None,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Current filter selection
    pub filters: FilterCriteria,
    /// Uncommitted text of the available-ingredients field
    pub available_input: String,
    /// Uncommitted text of the excluded-ingredients field
    pub excluded_input: String,
    /// Current phase
    pub phase: Phase,
    /// Corrections awaiting a user decision
    pub corrections: Vec<IngredientCorrection>,
    /// Ranked recipes of the latest successful generation
    pub recipes: Vec<Recipe>,
    /// Image slot per displayed recipe
    pub images: HashMap<RecipeId, ImageSlot>,
    /// User-facing error message
    pub error: Option<String>,
    /// Counter of recipe batches; image results from older batches are ignored
    pub batch: u64,
}

impl AppState {
    /// Fresh state with the given filters
    #[must_use]
    pub fn with_filters(filters: FilterCriteria) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    /// Image slot of a recipe
    #[must_use]
    pub fn image_slot(&self, id: &RecipeId) -> Option<&ImageSlot> {
        self.images.get(id)
    }

    /// Number of image requests still in flight
    #[must_use]
    pub fn loading_images(&self) -> usize {
        self.images
            .values()
            .filter(|slot| matches!(slot, ImageSlot::Loading))
            .count()
    }
}
