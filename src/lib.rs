// ABOUTME: Main library entry point for the SmartChef recipe recommender
// ABOUTME: Validates ingredients, generates and ranks recipes, and resolves recipe images
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # SmartChef
//!
//! Turns a list of ingredients the user has into a ranked set of recipes.
//!
//! ## Flow
//!
//! 1. The user's ingredient names are checked for typos and non-food entries
//! 2. Suggested corrections are accepted, dismissed, or skipped
//! 3. A generative model proposes recipes, tagging each ingredient as available or not
//! 4. Recipes are ranked by ingredient completeness and cooking time
//! 5. An illustrative image is requested per recipe in the background
//!
//! ## Architecture
//!
//! - **Flow**: Pure state machine plus an orchestrator performing its effects
//! - **Chef**: `RecipeCollaborator` trait and its Gemini-backed implementation
//! - **LLM**: Generative model abstraction and the Gemini REST client
//! - **Images**: Cancellable per-recipe image tasks
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use smartchef::chef::GeminiChef;
//! use smartchef::config::ChefConfig;
//! use smartchef::errors::AppResult;
//! use smartchef::flow::{Event, Orchestrator};
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ChefConfig::from_env()?;
//!     let mut session = Orchestrator::new(Arc::new(GeminiChef::from_config(&config)));
//!
//!     session.dispatch(Event::AvailableInputChanged("лук, курица".into())).await;
//!     session.dispatch(Event::StartGeneration).await;
//!     session.settle_images().await;
//!
//!     println!("{} recipes", session.state().recipes.len());
//!     Ok(())
//! }
//! ```

/// Recipe collaborator interface and Gemini-backed implementation
pub mod chef;

/// Environment-based configuration
pub mod config;

/// Filter bounds, ranking weights, and user-facing messages
pub mod constants;

/// Unified error handling system with standard error codes
pub mod errors;

/// Orchestration state machine and its driver
pub mod flow;

/// Cancellable per-recipe image requests
pub mod images;

/// Generative model abstraction and Gemini REST client
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Request-scoped domain models
pub mod models;

/// Recipe scoring and ordering
pub mod ranking;

/// Comma-delimited ingredient entry
pub mod tags;
