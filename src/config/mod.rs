// ABOUTME: Configuration management module for the recipe recommender
// ABOUTME: Environment-only settings for the Gemini collaborator and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for `SmartChef`
//!
//! - **Environment**: collaborator settings read from environment variables
//! - **Types**: log level and deployment environment enums

/// Environment-driven collaborator configuration
pub mod environment;
/// Shared configuration enums
pub mod types;

pub use environment::ChefConfig;
pub use types::{Environment, LogLevel};
