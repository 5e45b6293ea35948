// ABOUTME: Environment configuration for the Gemini-backed recipe collaborator
// ABOUTME: Reads API key, model names, endpoint, and recipe language from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration. There is no config file; every setting is
//! an environment variable with a default, except the API key.

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use smartchef_core::constants::images;
use smartchef_core::errors::{AppError, AppResult, ErrorCode};
use tracing::info;

use super::types::Environment;
use crate::llm::API_BASE_URL;

/// Primary API key variable
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Fallback API key variable
pub const API_KEY_ENV: &str = "API_KEY";
/// Model used for validation and recipe generation
pub const TEXT_MODEL_ENV: &str = "SMARTCHEF_TEXT_MODEL";
/// Model used for recipe images
pub const IMAGE_MODEL_ENV: &str = "SMARTCHEF_IMAGE_MODEL";
/// Override for the Gemini REST endpoint
pub const BASE_URL_ENV: &str = "SMARTCHEF_GEMINI_BASE_URL";
/// Aspect ratio hint for recipe images
pub const ASPECT_RATIO_ENV: &str = "SMARTCHEF_IMAGE_ASPECT_RATIO";
/// Language recipes are written in
pub const RECIPE_LANGUAGE_ENV: &str = "SMARTCHEF_RECIPE_LANGUAGE";

/// Default structured-output model
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";
/// Default image model
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
/// Default recipe language
pub const DEFAULT_RECIPE_LANGUAGE: &str = "Russian";

/// Settings for the Gemini-backed collaborator
#[derive(Clone)]
pub struct ChefConfig {
    /// Gemini API key
    pub api_key: String,
    /// Model for ingredient validation and recipe generation
    pub text_model: String,
    /// Model for recipe images
    pub image_model: String,
    /// REST endpoint base
    pub base_url: String,
    /// Aspect ratio hint for images
    pub image_aspect_ratio: String,
    /// Language generated recipes are written in
    pub recipe_language: String,
    /// Deployment environment
    pub environment: Environment,
}

impl ChefConfig {
    /// Create a configuration with defaults for everything but the API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            text_model: DEFAULT_TEXT_MODEL.to_owned(),
            image_model: DEFAULT_IMAGE_MODEL.to_owned(),
            base_url: API_BASE_URL.to_owned(),
            image_aspect_ratio: images::DEFAULT_ASPECT_RATIO.to_owned(),
            recipe_language: DEFAULT_RECIPE_LANGUAGE.to_owned(),
            environment: Environment::default(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when neither `GEMINI_API_KEY` nor `API_KEY` is set,
    /// and `ConfigInvalid` when the base URL is not an http(s) URL.
    pub fn from_env() -> AppResult<Self> {
        let api_key = non_empty_var(GEMINI_API_KEY_ENV)
            .or_else(|| non_empty_var(API_KEY_ENV))
            .ok_or_else(|| {
                AppError::config_missing(format!(
                    "{GEMINI_API_KEY_ENV} environment variable not set"
                ))
            })?;

        let base_url = non_empty_var(BASE_URL_ENV).unwrap_or_else(|| API_BASE_URL.to_owned());
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("{BASE_URL_ENV} must be an http(s) URL, got '{base_url}'"),
            ));
        }

        let config = Self {
            api_key,
            text_model: non_empty_var(TEXT_MODEL_ENV)
                .unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_owned()),
            image_model: non_empty_var(IMAGE_MODEL_ENV)
                .unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_owned()),
            base_url: base_url.trim_end_matches('/').to_owned(),
            image_aspect_ratio: non_empty_var(ASPECT_RATIO_ENV)
                .unwrap_or_else(|| images::DEFAULT_ASPECT_RATIO.to_owned()),
            recipe_language: non_empty_var(RECIPE_LANGUAGE_ENV)
                .unwrap_or_else(|| DEFAULT_RECIPE_LANGUAGE.to_owned()),
            environment: Environment::from_env(),
        };

        info!(
            text_model = %config.text_model,
            image_model = %config.image_model,
            environment = %config.environment,
            "Chef configuration loaded"
        );

        Ok(config)
    }

    /// Point the client at a different endpoint
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Debug for ChefConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ChefConfig")
            .field("api_key", &"[REDACTED]")
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .field("base_url", &self.base_url)
            .field("image_aspect_ratio", &self.image_aspect_ratio)
            .field("recipe_language", &self.recipe_language)
            .field("environment", &self.environment)
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
