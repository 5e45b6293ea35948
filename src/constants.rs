// ABOUTME: Re-exports recommender constants from smartchef-core
// ABOUTME: Filter bounds, ranking weights, user messages, and image defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use smartchef_core::constants::*;
