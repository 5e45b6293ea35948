// ABOUTME: SmartChef CLI - ingredient-driven recipe recommendations in the terminal
// ABOUTME: Maps flags onto filter criteria, walks the correction dialog, prints ranked recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Three quick dinners from what is in the fridge
//! smartchef --have "лук, курица, рис" --count 3 --max-time 40
//!
//! # Cold vegan dishes without mushrooms, keeping the generated images
//! smartchef --have "огурец, помидор" --exclude грибы --temperature cold --vegan --image-dir ./images
//!
//! # Accept every suggested spelling fix without asking
//! smartchef --have "лык, морковка" --corrections accept --no-images
//! ```

mod render;

use std::io::Stderr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use smartchef::chef::GeminiChef;
use smartchef::config::ChefConfig;
use smartchef::constants::limits;
use smartchef::errors::{AppError, AppResult};
use smartchef::flow::{AppState, Event, Orchestrator, Phase};
use smartchef::images;
use smartchef::logging::LoggingConfig;
use smartchef::models::{FilterCriteria, IngredientCorrection, Temperature};
use tokio::io::{stdin, AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::info;

use render::Dialog;

#[derive(Parser)]
#[command(
    name = "smartchef",
    about = "Recipe recommendations from the ingredients you have",
    long_about = "Checks your ingredient list for typos, asks Gemini for recipes matching your filters, \
                  ranks them by how few ingredients are missing and how quickly they cook, and \
                  optionally fetches an illustration per recipe."
)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// Ingredients you have (comma separated, repeatable)
    #[arg(long, value_name = "INGREDIENTS")]
    have: Vec<String>,

    /// Ingredients that must not appear (comma separated, repeatable)
    #[arg(long, value_name = "INGREDIENTS")]
    exclude: Vec<String>,

    /// Number of recipes to generate
    #[arg(
        long,
        default_value_t = limits::DEFAULT_RECIPE_COUNT,
        value_parser = clap::value_parser!(u8).range(
            i64::from(limits::MIN_RECIPE_COUNT)..=i64::from(limits::MAX_RECIPE_COUNT)
        )
    )]
    count: u8,

    /// Maximum cooking time in minutes (5-120, multiple of 5)
    #[arg(long, default_value_t = limits::DEFAULT_COOKING_TIME, value_parser = parse_cooking_time)]
    max_time: u32,

    /// Serving temperature: warm, cold or any
    #[arg(long, default_value = "any")]
    temperature: Temperature,

    /// Only vegan recipes
    #[arg(long)]
    vegan: bool,

    /// Only kosher recipes
    #[arg(long)]
    kosher: bool,

    /// Do not request recipe images
    #[arg(long)]
    no_images: bool,

    /// Directory where generated images are saved as <recipe-id>.png
    #[arg(long, value_name = "DIR")]
    image_dir: Option<PathBuf>,

    /// How to handle suggested ingredient corrections
    #[arg(long, value_enum, default_value_t = CorrectionMode::Ask)]
    corrections: CorrectionMode,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CorrectionMode {
    /// Ask about each correction
    Ask,
    /// Accept every correction
    Accept,
    /// Dismiss every correction
    Dismiss,
    /// Keep the ingredients exactly as typed
    Proceed,
}

fn parse_cooking_time(value: &str) -> Result<u32, String> {
    let minutes: u32 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid number '{value}': {e}"))?;
    FilterCriteria::check_cooking_time(minutes).map_err(|e| e.message)
}

impl Cli {
    fn initial_state(&self) -> AppState {
        let mut filters = FilterCriteria {
            temperature: self.temperature,
            is_vegan: self.vegan,
            is_kosher: self.kosher,
            show_images: !self.no_images,
            ..FilterCriteria::default()
        };
        filters.set_recipe_count(self.count);
        filters.set_max_cooking_time(self.max_time);

        AppState {
            filters,
            available_input: self.have.join(","),
            excluded_input: self.exclude.join(","),
            ..AppState::default()
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> AppResult<ExitCode> {
    let cli = Cli::parse();

    LoggingConfig::from_env().verbose(cli.verbose).init()?;

    let config = ChefConfig::from_env()?;
    info!(?config, "Configuration loaded");

    let chef = Arc::new(GeminiChef::from_config(&config));
    let mut session = Orchestrator::with_state(chef, cli.initial_state());
    let mut dialog = Dialog::stderr();

    dialog.progress("Checking ingredients...");
    session.dispatch(Event::StartGeneration).await;

    if session.state().phase == Phase::CorrectionPending {
        resolve_corrections(&mut session, &mut dialog, cli.corrections).await?;
    }

    let state = session.state();
    if state.phase == Phase::Error {
        dialog.error(state.error.as_deref().unwrap_or_default());
        return Ok(ExitCode::FAILURE);
    }

    if session.images_in_flight() > 0 {
        dialog.progress("Generating images...");
        session.settle_images().await;
    }

    let state = session.state();
    let saved = match &cli.image_dir {
        Some(dir) => images::save_images(dir, state).await?,
        None => Vec::new(),
    };
    render::recipes(state, &saved);

    Ok(ExitCode::SUCCESS)
}

/// Walk the correction dialog, then continue to generation
async fn resolve_corrections(
    session: &mut Orchestrator,
    dialog: &mut Dialog<Stderr>,
    mode: CorrectionMode,
) -> AppResult<()> {
    let corrections = session.state().corrections.clone();
    dialog.corrections(&corrections);

    match mode {
        CorrectionMode::Accept => {
            for correction in corrections {
                session
                    .dispatch(Event::AcceptCorrection(correction.original))
                    .await;
            }
        }
        CorrectionMode::Dismiss => {
            for correction in corrections {
                session
                    .dispatch(Event::DismissCorrection(correction.original))
                    .await;
            }
        }
        CorrectionMode::Proceed => {}
        CorrectionMode::Ask => {
            let mut lines = BufReader::new(stdin()).lines();
            for correction in corrections {
                match ask(&mut lines, dialog, &correction).await? {
                    Answer::Accept => {
                        session
                            .dispatch(Event::AcceptCorrection(correction.original))
                            .await;
                    }
                    Answer::Dismiss => {
                        session
                            .dispatch(Event::DismissCorrection(correction.original))
                            .await;
                    }
                    Answer::Proceed => break,
                }
            }
        }
    }

    dialog.progress("Generating recipes...");
    session.dispatch(Event::Proceed).await;
    Ok(())
}

enum Answer {
    Accept,
    Dismiss,
    Proceed,
}

async fn ask(
    lines: &mut Lines<BufReader<Stdin>>,
    dialog: &mut Dialog<Stderr>,
    correction: &IngredientCorrection,
) -> AppResult<Answer> {
    loop {
        dialog.question(correction);
        let line = lines
            .next_line()
            .await
            .map_err(|e| AppError::internal(format!("failed to read answer: {e}")).with_source(e))?;

        // End of input keeps the remaining entries as typed
        let Some(line) = line else {
            return Ok(Answer::Proceed);
        };

        match line.trim().to_lowercase().as_str() {
            "a" | "accept" | "y" | "yes" => return Ok(Answer::Accept),
            "d" | "dismiss" | "n" | "no" => return Ok(Answer::Dismiss),
            "p" | "proceed" => return Ok(Answer::Proceed),
            _ => dialog.hint("Please answer a (accept), d (dismiss) or p (proceed)."),
        }
    }
}
