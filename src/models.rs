// ABOUTME: Core data models re-exported from smartchef-core
// ABOUTME: Re-exports FilterCriteria, Recipe, IngredientCorrection and other domain structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use smartchef_core::models::*;
