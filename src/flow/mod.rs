// ABOUTME: Orchestration flow of a recommender session as an explicit state machine
// ABOUTME: Re-exports state, events, effects, the transition function, and the orchestrator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Orchestration Flow
//!
//! ```text
//! Idle ──StartGeneration──▶ Validating ──corrections──▶ CorrectionPending ──Proceed──▶ Generating
//!  │                            └──────────── no corrections ─────────────────────────────┘  │
//!  └── no ingredients ──▶ Error ◀── failure ──────────────────────────────────────────────── ┤
//!                                                                          Displaying ◀─ success
//! ```
//!
//! [`transition`] is pure: it returns the next [`AppState`] together with the
//! [`Effect`]s to perform. [`Orchestrator`] performs them against a
//! [`RecipeCollaborator`](crate::chef::RecipeCollaborator) and feeds the
//! results back as [`Event`]s.

mod orchestrator;
mod state;
mod transition;

pub use orchestrator::Orchestrator;
pub use state::{AppState, ImageSlot, Phase};
pub use transition::{transition, Effect, Event};
