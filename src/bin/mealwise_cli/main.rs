// ABOUTME: Mealwise CLI - resolve intake targets, total a meal, and recommend foods
// ABOUTME: Loads the reference dataset once and dispatches profile, meal, and recommend commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Daily targets for a 30 year old woman
//! mealwise-cli profile --age 30 --sex F
//!
//! # Totals of a meal (food id : grams)
//! mealwise-cli meal --food 170567:150 --food 173944:200
//!
//! # Five best additions for a lactating 28 year old, as JSON
//! mealwise-cli recommend --age 28 --sex F --lactating --food 170567:150 --top-k 5 --json
//! ```

mod commands;
mod display;

use clap::{Args, Parser, Subcommand};
use mealwise::config::{DatasetPaths, EngineConfig};
use mealwise::engine::NutritionEngine;
use mealwise::errors::{AppError, AppResult};
use mealwise::logging::LoggingConfig;
use mealwise::models::Sex;
use mealwise_intelligence::{DemographicQuery, FoodLogEntry};
use std::path::PathBuf;
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "mealwise-cli",
    about = "Mealwise nutrient gap CLI",
    long_about = "Resolve daily nutrient targets, total a meal, and rank foods that close the remaining gap."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding the reference JSON documents (default: $MEALWISE_DATA_DIR or ./data)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved daily targets and upper limits
    Profile {
        #[command(flatten)]
        person: PersonArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the combined nutrients of a meal
    Meal {
        /// Food eaten as ID:GRAMS (repeatable)
        #[arg(long = "food", value_parser = parse_food_entry)]
        foods: Vec<FoodLogEntry>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Score a meal and rank foods that would close the gap
    Recommend {
        #[command(flatten)]
        person: PersonArgs,

        /// Food eaten as ID:GRAMS (repeatable)
        #[arg(long = "food", value_parser = parse_food_entry)]
        foods: Vec<FoodLogEntry>,

        /// Number of recommendations (default from configuration)
        #[arg(long)]
        top_k: Option<usize>,

        /// Grams of each candidate added in the lookahead (default from configuration)
        #[arg(long)]
        amount: Option<f64>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Demographic inputs shared by profile-dependent commands
#[derive(Args)]
struct PersonArgs {
    /// Age in years
    #[arg(long)]
    age: f64,

    /// Sex (M or F)
    #[arg(long)]
    sex: Sex,

    /// Pregnant (requires --sex F)
    #[arg(long)]
    pregnant: bool,

    /// Lactating (requires --sex F)
    #[arg(long)]
    lactating: bool,
}

impl PersonArgs {
    const fn query(&self) -> DemographicQuery {
        DemographicQuery::new(self.age, self.sex)
            .pregnant(self.pregnant)
            .lactating(self.lactating)
    }
}

fn parse_food_entry(raw: &str) -> Result<FoodLogEntry> {
    let invalid = |reason: String| {
        AppError::invalid_input(format!("Expected ID:GRAMS, got '{raw}': {reason}"))
    };
    let (id, grams) = raw
        .split_once(':')
        .ok_or_else(|| invalid("missing ':'".into()))?;
    let fdc_id = id.trim().parse().map_err(|e| invalid(format!("{e}")))?;
    let amount = grams.trim().parse().map_err(|e| invalid(format!("{e}")))?;
    Ok(FoodLogEntry { fdc_id, amount })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose)
        .init()
        .map_err(|e| AppError::internal(format!("Logging initialization failed: {e}")))?;

    let paths = DatasetPaths::resolve(cli.data_dir);
    let config = EngineConfig::load()?;
    let engine = NutritionEngine::load(&paths, config)?;
    debug!(data_dir = %paths.data_dir().display(), "Engine ready");

    match cli.command {
        Command::Profile { person, json } => commands::profile(&engine, &person.query(), json),
        Command::Meal { foods, json } => commands::meal(&engine, &foods, json),
        Command::Recommend {
            person,
            foods,
            top_k,
            amount,
            json,
        } => commands::recommend(&engine, &person.query(), &foods, top_k, amount, json),
    }
}
