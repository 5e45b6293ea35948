// ABOUTME: Core types and constants for the SmartChef recipe recommender
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # SmartChef Core
//!
//! Foundation crate providing shared types for the recipe recommender. It has
//! no I/O and changes infrequently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Filter bounds, ranking weights, user-facing messages
//! - **models**: Filter criteria, recipes, ingredient corrections, images

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by concern
pub mod constants;

/// Request-scoped domain models
pub mod models;
