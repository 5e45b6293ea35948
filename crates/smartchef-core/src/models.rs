// ABOUTME: Domain models for the recipe recommender: filters, recipes, corrections, images
// ABOUTME: All entities are request-scoped and replaced on the next generation cycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::constants::limits;
use crate::errors::{AppError, AppResult};

/// Serving temperature preference and recipe category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    /// Served warm
    Warm,
    /// Served cold
    Cold,
    /// No preference
    #[default]
    Any,
}

impl Temperature {
    /// All variants in selector order
    pub const ALL: [Self; 3] = [Self::Warm, Self::Cold, Self::Any];

    /// Wire representation used in prompts and responses
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Warm => "warm",
            Self::Cold => "cold",
            Self::Any => "any",
        }
    }

    /// Lenient parse used for model output; unknown values fall back to `Any`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl Display for Temperature {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Temperature {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "warm" | "hot" => Ok(Self::Warm),
            "cold" => Ok(Self::Cold),
            "any" => Ok(Self::Any),
            other => Err(AppError::invalid_input(format!(
                "unknown temperature '{other}', expected warm, cold or any"
            ))),
        }
    }
}

/// Ordered list of unique ingredient names, in the order the user entered them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagList(Vec<String>);

impl TagList {
    /// Create an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Add a tag unless it is blank or already present; returns whether it was added
    pub fn push(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        let tag = tag.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.0.push(tag.to_owned());
        true
    }

    /// Add every tag in order, skipping blanks and duplicates
    pub fn extend<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            self.push(tag);
        }
    }

    /// Remove the tag at `index`, if any
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    /// Rewrite every entry equal to `original` into `replacement`, keeping its position
    ///
    /// The replacement is trimmed; a blank replacement is refused. If the
    /// replacement already exists earlier in the list the rewritten entry
    /// collapses into it. Returns whether anything changed.
    pub fn replace(&mut self, original: &str, replacement: &str) -> bool {
        let replacement = replacement.trim();
        if replacement.is_empty() {
            return false;
        }
        let mut changed = false;
        for tag in &mut self.0 {
            if tag == original {
                replacement.clone_into(tag);
                changed = true;
            }
        }
        if changed {
            let mut seen = Vec::with_capacity(self.0.len());
            self.0.retain(|tag| {
                if seen.contains(tag) {
                    false
                } else {
                    seen.push(tag.clone());
                    true
                }
            });
        }
        changed
    }

    /// Whether `tag` is present (exact match)
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    /// Number of tags
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tags as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterate over tags
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for TagList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a> IntoIterator for &'a TagList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Everything the user selected before starting a generation cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct FilterCriteria {
    /// Ingredients the user has
    pub available_ingredients: TagList,
    /// Ingredients that must not appear
    pub excluded_ingredients: TagList,
    /// Serving temperature preference
    pub temperature: Temperature,
    /// Only vegan recipes
    pub is_vegan: bool,
    /// Only kosher recipes
    pub is_kosher: bool,
    /// Upper bound on cooking time in minutes
    pub max_cooking_time: u32,
    /// How many recipes to request
    pub recipe_count: u8,
    /// Whether illustrative images are requested
    pub show_images: bool,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            available_ingredients: TagList::new(),
            excluded_ingredients: TagList::new(),
            temperature: Temperature::Any,
            is_vegan: false,
            is_kosher: false,
            max_cooking_time: limits::DEFAULT_COOKING_TIME,
            recipe_count: limits::DEFAULT_RECIPE_COUNT,
            show_images: true,
        }
    }
}

impl FilterCriteria {
    /// Set the recipe count, clamped to the selector range
    pub fn set_recipe_count(&mut self, count: u8) {
        self.recipe_count = count.clamp(limits::MIN_RECIPE_COUNT, limits::MAX_RECIPE_COUNT);
    }

    /// Set the maximum cooking time, clamped to the selector range and snapped to its step
    pub fn set_max_cooking_time(&mut self, minutes: u32) {
        let clamped = minutes.clamp(limits::MIN_COOKING_TIME, limits::MAX_COOKING_TIME);
        let step = limits::COOKING_TIME_STEP;
        self.max_cooking_time = ((clamped + step / 2) / step) * step;
    }

    /// Check that a recipe count is selectable
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when `count` is outside 3..=10.
    pub fn check_recipe_count(count: u8) -> AppResult<u8> {
        if (limits::MIN_RECIPE_COUNT..=limits::MAX_RECIPE_COUNT).contains(&count) {
            Ok(count)
        } else {
            Err(AppError::out_of_range(format!(
                "recipe count must be between {} and {}, got {count}",
                limits::MIN_RECIPE_COUNT,
                limits::MAX_RECIPE_COUNT
            )))
        }
    }

    /// Check that a cooking time is selectable
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when `minutes` is outside 5..=120 or not a multiple of 5.
    pub fn check_cooking_time(minutes: u32) -> AppResult<u32> {
        let in_range = (limits::MIN_COOKING_TIME..=limits::MAX_COOKING_TIME).contains(&minutes);
        if in_range && minutes % limits::COOKING_TIME_STEP == 0 {
            Ok(minutes)
        } else {
            Err(AppError::out_of_range(format!(
                "cooking time must be between {} and {} minutes in steps of {}, got {minutes}",
                limits::MIN_COOKING_TIME,
                limits::MAX_COOKING_TIME,
                limits::COOKING_TIME_STEP
            )))
        }
    }
}

/// One ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Ingredient name
    pub name: String,
    /// Required amount, free-form
    pub amount: String,
    /// Whether the user has it, as classified by the collaborator
    pub is_available: bool,
}

/// Identifier of a recipe, unique within one generation batch
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    /// Wrap an identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RecipeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// A generated recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct Recipe {
    /// Batch-unique identifier
    pub id: RecipeId,
    /// Dish name
    pub title: String,
    /// Short description
    pub description: String,
    /// Ordered preparation steps
    pub instructions: Vec<String>,
    /// Cooking time in minutes
    pub cooking_time_minutes: u32,
    /// Ordered ingredient list
    pub ingredients: Vec<Ingredient>,
    /// Vegan dish
    pub is_vegan: bool,
    /// Kosher dish
    pub is_kosher: bool,
    /// Serving temperature
    pub temperature: Temperature,
    /// Display score, set once by the ranking step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl Recipe {
    /// Ingredients the user still needs to buy
    pub fn missing_ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter().filter(|i| !i.is_available)
    }

    /// Number of ingredients marked unavailable
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.missing_ingredients().count()
    }

    /// Ingredient names in recipe order
    #[must_use]
    pub fn ingredient_names(&self) -> Vec<&str> {
        self.ingredients.iter().map(|i| i.name.as_str()).collect()
    }
}

/// A suggested fix for one user-entered ingredient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientCorrection {
    /// Ingredient as the user typed it
    pub original: String,
    /// Proposed replacement
    pub suggested: String,
    /// Why the replacement is proposed
    pub reason: String,
}

/// Illustrative image returned by the collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeImage {
    /// MIME type of the payload
    pub mime_type: String,
    /// Base64-encoded image bytes
    pub data: String,
}

impl RecipeImage {
    /// Render as a `data:` URI suitable for an `<img>` tag
    #[must_use]
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Decode the payload into raw bytes
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` when the payload is not valid base64.
    pub fn decode(&self) -> AppResult<Vec<u8>> {
        BASE64
            .decode(self.data.as_bytes())
            .map_err(|e| AppError::serialization(format!("invalid image payload: {e}")).with_source(e))
    }

    /// File extension matching the MIME type
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/jpeg" | "image/jpg" => "jpg",
            "image/webp" => "webp",
            _ => "png",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_list_dedups_on_push() {
        let mut tags = TagList::new();
        assert!(tags.push("лук"));
        assert!(!tags.push(" лук "));
        assert!(!tags.push("   "));
        assert_eq!(tags.as_slice(), ["лук"]);
    }

    #[test]
    fn test_tag_list_replace_in_place() {
        let mut tags: TagList = ["лык", "курица", "рис"].into_iter().collect();
        assert!(tags.replace("лык", "лук"));
        assert_eq!(tags.as_slice(), ["лук", "курица", "рис"]);
    }

    #[test]
    fn test_tag_list_replace_collapses_duplicate() {
        let mut tags: TagList = ["курица", "лук", "лык"].into_iter().collect();
        tags.replace("лык", "лук");
        assert_eq!(tags.as_slice(), ["курица", "лук"]);
    }

    #[test]
    fn test_tag_list_replace_trims_and_refuses_blank() {
        let mut tags: TagList = ["лык", "курица"].into_iter().collect();
        assert!(!tags.replace("лык", "   "));
        assert_eq!(tags.as_slice(), ["лык", "курица"]);
        assert!(tags.replace("лык", " лук "));
        assert_eq!(tags.as_slice(), ["лук", "курица"]);
    }

    #[test]
    fn test_recipe_count_clamped() {
        let mut filters = FilterCriteria::default();
        filters.set_recipe_count(42);
        assert_eq!(filters.recipe_count, 10);
        filters.set_recipe_count(0);
        assert_eq!(filters.recipe_count, 3);
    }

    #[test]
    fn test_cooking_time_snapped() {
        let mut filters = FilterCriteria::default();
        filters.set_max_cooking_time(42);
        assert_eq!(filters.max_cooking_time, 40);
        filters.set_max_cooking_time(500);
        assert_eq!(filters.max_cooking_time, 120);
        filters.set_max_cooking_time(1);
        assert_eq!(filters.max_cooking_time, 5);
    }

    #[test]
    fn test_check_cooking_time_rejects_off_step() {
        assert!(FilterCriteria::check_cooking_time(35).is_ok());
        assert!(FilterCriteria::check_cooking_time(37).is_err());
        assert!(FilterCriteria::check_cooking_time(125).is_err());
    }

    #[test]
    fn test_temperature_parse() {
        assert_eq!("Warm".parse::<Temperature>().unwrap(), Temperature::Warm);
        assert!("lukewarm".parse::<Temperature>().is_err());
        assert_eq!(Temperature::from_str_or_default("lukewarm"), Temperature::Any);
    }

    #[test]
    fn test_recipe_image_data_uri_and_decode() {
        let image = RecipeImage {
            mime_type: "image/png".to_owned(),
            data: BASE64.encode(b"png-bytes"),
        };
        assert!(image.to_data_uri().starts_with("data:image/png;base64,"));
        assert_eq!(image.decode().unwrap(), b"png-bytes");
        assert_eq!(image.extension(), "png");
    }
}
