// ABOUTME: Nutrient gap engine: intake resolution, meal aggregation, scoring, and ranking
// ABOUTME: Extracted from the root crate for parallel compilation and modularity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mealwise Intelligence
//!
//! Synchronous, allocation-light algorithms over the shared reference data
//! from `mealwise-core`. Every component borrows the catalogs it needs; none
//! of them holds global state.
//!
//! - **`intake_resolver`**: demographic inputs to target and upper-limit vectors
//! - **`meal`**: portions of catalog foods and their summed nutrients
//! - **`gap_scorer`**: per-nutrient ratios and the two scalar scoring modes
//! - **`recommendation_engine`**: one-step lookahead ranking of catalog foods
//! - **`food_search`**: combination of external relevance scores
//! - **`config`**: engine configuration with environment overrides

/// Engine configuration with environment overrides and validation
pub mod config;

/// Search result combiner over external relevance sources
pub mod food_search;

/// Per-nutrient ratios and scalar meal scores
pub mod gap_scorer;

/// Intake profile resolution from demographic inputs
pub mod intake_resolver;

/// Meal aggregation
pub mod meal;

/// Gap-closing food recommendations
pub mod recommendation_engine;

pub use config::EngineConfig;
pub use food_search::{FoodSearch, RelevanceSource, SearchHit};
pub use gap_scorer::{GapScore, ScoringMode};
pub use intake_resolver::{DemographicQuery, IntakeProfileResolver};
pub use meal::{CombinedNutrient, Food, FoodLogEntry, Meal};
pub use recommendation_engine::{FoodRecommender, Recommendation, RecommendationRequest};
