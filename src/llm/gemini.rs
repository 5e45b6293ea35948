// ABOUTME: Google Gemini provider implementation for structured JSON and image generation
// ABOUTME: Calls the generateContent REST endpoint with response schemas and image config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Gemini Provider
//!
//! Implementation of the `GenerativeModel` trait for Google's Gemini models.
//!
//! ## Configuration
//!
//! Set the `GEMINI_API_KEY` environment variable with your API key from
//! Google AI Studio. The key is sent in the `x-goog-api-key` header.
//!
//! ## Models
//!
//! - `gemini-3-flash-preview`: structured output for validation and recipes
//! - `gemini-2.5-flash-image`: recipe illustrations
//!
//! ## Example
//!
//! ```rust,no_run
//! use smartchef::config::ChefConfig;
//! use smartchef::llm::{ContentRequest, GeminiProvider, GenerativeModel};
//! use smartchef::errors::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let provider = GeminiProvider::from_config(&ChefConfig::from_env()?);
//!     let request = ContentRequest::new("gemini-3-flash-preview", "Name a soup");
//!     let response = provider.generate_content(&request).await?;
//!     println!("{}", response.text);
//!     Ok(())
//! }
//! ```

use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use smartchef_core::constants::images;
use smartchef_core::errors::{AppError, AppResult, ErrorCode};
use smartchef_core::models::RecipeImage;
use tracing::{debug, error, instrument};

use super::{ContentRequest, ContentResponse, GenerativeModel, LlmCapabilities};
use crate::config::ChefConfig;

/// Base URL for the Gemini API
pub const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Gemini API request structure
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

/// Content structure for Gemini API
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

/// Part of content (text, inline binary data, or something we do not use)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum ContentPart {
    /// Text content
    Text { text: String },
    /// Inline binary data such as an image
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    /// Any other part kind (thoughts, function calls)
    Other(serde_json::Value),
}

/// Inline binary payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: Option<String>,
    data: String,
}

/// Generation configuration
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_config: Option<ImageConfig>,
}

/// Image output configuration
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: String,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<GeminiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

/// API error response from Gemini
#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Google Gemini provider
pub struct GeminiProvider {
    api_key: String,
    client: Client,
    base_url: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider with an API key against the public endpoint
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: Client::new(),
            base_url: API_BASE_URL.to_owned(),
        }
    }

    /// Create a provider from loaded configuration
    #[must_use]
    pub fn from_config(config: &ChefConfig) -> Self {
        Self::new(config.api_key.clone()).with_base_url(config.base_url.clone())
    }

    /// Point the provider at a different endpoint
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Build the API URL for a model and method
    fn build_url(&self, model: &str, method: &str) -> String {
        format!("{}/models/{model}:{method}", self.base_url)
    }

    /// Build a Gemini API request from a `ContentRequest`
    fn build_gemini_request(request: &ContentRequest) -> GeminiRequest {
        let generation_config =
            if request.response_schema.is_some() || request.aspect_ratio.is_some() {
                Some(GenerationConfig {
                    response_mime_type: request
                        .response_schema
                        .as_ref()
                        .map(|_| "application/json".to_owned()),
                    response_schema: request.response_schema.clone(),
                    image_config: request.aspect_ratio.as_ref().map(|ratio| ImageConfig {
                        aspect_ratio: ratio.clone(),
                    }),
                })
            } else {
                None
            };

        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_owned()),
                parts: vec![ContentPart::Text {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config,
        }
    }

    /// Collect text and inline images from the first candidate
    fn extract_content(response: GeminiResponse, model: &str) -> AppResult<ContentResponse> {
        let candidate = response
            .candidates
            .and_then(|c| c.into_iter().next())
            .ok_or_else(|| {
                AppError::new(ErrorCode::ExternalServiceError, "No candidates in Gemini response")
            })?;

        let mut content = ContentResponse {
            model: model.to_owned(),
            finish_reason: candidate.finish_reason,
            ..ContentResponse::default()
        };

        for part in candidate.content.map(|c| c.parts).unwrap_or_default() {
            match part {
                ContentPart::Text { text } => content.text.push_str(&text),
                ContentPart::InlineData { inline_data } => content.images.push(RecipeImage {
                    mime_type: inline_data
                        .mime_type
                        .unwrap_or_else(|| images::DEFAULT_MIME_TYPE.to_owned()),
                    data: inline_data.data,
                }),
                ContentPart::Other(_) => {}
            }
        }

        Ok(content)
    }

    /// Map API error status to appropriate error type
    ///
    /// For rate limit (429) errors, returns a user-friendly error exposing the
    /// retry hint from Gemini.
    fn map_api_error(status: u16, response_text: &str) -> AppError {
        let message = serde_json::from_str::<GeminiResponse>(response_text)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| response_text.to_owned(), |e| e.message);

        match status {
            429 => AppError::new(
                ErrorCode::ExternalRateLimited,
                Self::extract_quota_message(&message),
            ),
            401 | 403 => AppError::new(
                ErrorCode::ExternalAuthFailed,
                format!("Gemini rejected the API key ({status}): {message}"),
            ),
            500..=599 => AppError::new(
                ErrorCode::ExternalServiceUnavailable,
                format!("Gemini API unavailable ({status}): {message}"),
            ),
            _ => AppError::external_service("Gemini", format!("API error ({status}): {message}")),
        }
    }

    /// Extract a user-friendly quota/rate limit message from Gemini error
    fn extract_quota_message(message: &str) -> String {
        // Example: "Please retry in 6.406453963s."
        const RETRY_PREFIX: &str = "Please retry in ";
        if let Some(retry_pos) = message.find(RETRY_PREFIX) {
            let after_prefix = &message[retry_pos + RETRY_PREFIX.len()..];
            if let Some(s_pos) = after_prefix.find('s') {
                if let Ok(seconds) = after_prefix[..s_pos].parse::<f64>() {
                    let seconds_int = seconds.ceil() as u64;
                    return format!(
                        "AI service quota exceeded. Please try again in {seconds_int} seconds."
                    );
                }
            }
        }
        "AI service quota exceeded. Please wait a moment and try again.".to_owned()
    }
}

#[async_trait]
impl GenerativeModel for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn capabilities(&self, model: &str) -> LlmCapabilities {
        if model.contains("image") {
            LlmCapabilities::image()
        } else {
            LlmCapabilities::structured_text()
        }
    }

    #[instrument(skip(self, request), fields(model = %request.model, structured = request.is_structured()))]
    async fn generate_content(&self, request: &ContentRequest) -> AppResult<ContentResponse> {
        let url = self.build_url(&request.model, "generateContent");
        let gemini_request = Self::build_gemini_request(request);

        debug!("Sending request to Gemini API");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| {
                AppError::new(
                    ErrorCode::ExternalServiceUnavailable,
                    format!("HTTP request failed: {e}"),
                )
                .with_source(e)
            })?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            AppError::new(
                ErrorCode::ExternalServiceError,
                format!("Failed to read response: {e}"),
            )
            .with_source(e)
        })?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &response_text));
        }

        let gemini_response: GeminiResponse = serde_json::from_str(&response_text).map_err(|e| {
            error!(error = %e, "Failed to parse Gemini response");
            AppError::serialization(format!("Failed to parse Gemini response: {e}"))
        })?;

        if let Some(error) = gemini_response.error {
            return Err(AppError::external_service("Gemini", error.message));
        }

        let content = Self::extract_content(gemini_response, &request.model)?;

        debug!(
            text_len = content.text.len(),
            images = content.images.len(),
            "Received Gemini response"
        );

        Ok(content)
    }
}

impl Debug for GeminiProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiProvider")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
