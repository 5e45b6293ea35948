// ABOUTME: Generative model abstraction for schema-constrained text and image generation
// ABOUTME: Defines the contract the Gemini provider implements and the request/response types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Generative Model Interface
//!
//! The recipe collaborator never talks HTTP directly. It builds a
//! [`ContentRequest`] (a prompt, optionally a JSON response schema or an image
//! aspect ratio) and hands it to a [`GenerativeModel`].
//!
//! ## Key Concepts
//!
//! - **`LlmCapabilities`**: Bitflags describing what a model can return
//! - **`GenerativeModel`**: Async trait for a single content-generation call
//! - **`ContentRequest`**: Prompt plus output constraints
//! - **`ContentResponse`**: Text parts and inline images from the first candidate
//!
//! ## Example
//!
//! ```rust,no_run
//! use smartchef::llm::{ContentRequest, GenerativeModel};
//!
//! async fn example(model: &dyn GenerativeModel) {
//!     let request = ContentRequest::new("gemini-3-flash-preview", "Name a soup")
//!         .with_response_schema(serde_json::json!({ "type": "STRING" }));
//!     let response = model.generate_content(&request).await;
//! }
//! ```

mod gemini;
pub mod schema;

pub use gemini::{GeminiProvider, API_BASE_URL};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use smartchef_core::errors::AppResult;
use smartchef_core::models::RecipeImage;

// ============================================================================
// Capability Flags
// ============================================================================

bitflags::bitflags! {
    /// Generative model capability flags
    ///
    /// The collaborator checks these before issuing a structured or image request.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct LlmCapabilities: u8 {
        /// Model produces free text
        const TEXT = 0b0000_0001;
        /// Model honours a JSON response schema
        const JSON_MODE = 0b0000_0010;
        /// Model returns inline images
        const IMAGE_OUTPUT = 0b0000_0100;
    }
}

impl LlmCapabilities {
    /// Capabilities of a structured-output text model
    #[must_use]
    pub const fn structured_text() -> Self {
        Self::TEXT.union(Self::JSON_MODE)
    }

    /// Capabilities of an image model
    #[must_use]
    pub const fn image() -> Self {
        Self::TEXT.union(Self::IMAGE_OUTPUT)
    }

    /// Check if JSON mode is supported
    #[must_use]
    pub const fn supports_json_mode(&self) -> bool {
        self.contains(Self::JSON_MODE)
    }

    /// Check if image output is supported
    #[must_use]
    pub const fn supports_image_output(&self) -> bool {
        self.contains(Self::IMAGE_OUTPUT)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// A single content-generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRequest {
    /// Model identifier
    pub model: String,
    /// User prompt
    pub prompt: String,
    /// JSON schema the response must follow; enables JSON mode
    pub response_schema: Option<serde_json::Value>,
    /// Aspect ratio hint for image output
    pub aspect_ratio: Option<String>,
}

impl ContentRequest {
    /// Create a plain text request
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            response_schema: None,
            aspect_ratio: None,
        }
    }

    /// Constrain the response to a JSON schema
    #[must_use]
    pub fn with_response_schema(mut self, schema: serde_json::Value) -> Self {
        self.response_schema = Some(schema);
        self
    }

    /// Request image output with an aspect ratio hint
    #[must_use]
    pub fn with_aspect_ratio(mut self, aspect_ratio: impl Into<String>) -> Self {
        self.aspect_ratio = Some(aspect_ratio.into());
        self
    }

    /// Whether the request asks for JSON output
    #[must_use]
    pub const fn is_structured(&self) -> bool {
        self.response_schema.is_some()
    }
}

/// Output of the first response candidate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentResponse {
    /// Concatenated text parts
    pub text: String,
    /// Inline images in part order
    pub images: Vec<RecipeImage>,
    /// Model used for generation
    pub model: String,
    /// Finish reason (STOP, MAX_TOKENS, SAFETY, ...)
    pub finish_reason: Option<String>,
}

// ============================================================================
// Model Trait
// ============================================================================

/// A generative model reachable over the network
///
/// Implementations report failures as `AppError`; whether a failure is
/// surfaced or absorbed is the caller's decision.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Unique provider identifier (e.g., "gemini")
    fn name(&self) -> &'static str;

    /// Capabilities of `model` as served by this provider
    fn capabilities(&self, model: &str) -> LlmCapabilities;

    /// Perform one generation call
    async fn generate_content(&self, request: &ContentRequest) -> AppResult<ContentResponse>;
}
