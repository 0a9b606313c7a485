// ABOUTME: Main library entry point for the mealwise nutrient gap engine
// ABOUTME: Dataset loading, engine facade, and logging over the core and intelligence crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mealwise
//!
//! Resolves a person's daily nutrient targets and upper limits from
//! demographic reference tables, aggregates the foods they have eaten, scores
//! how far the meal is from the targets, and ranks catalog foods by how much a
//! single portion would close the gap.
//!
//! ## Architecture
//!
//! - **`mealwise-core`**: error type, nutrient ids, and the catalog data model
//! - **`mealwise-intelligence`**: resolver, aggregator, scorer, ranker, search
//! - **this crate**: JSON dataset loading, the [`engine::NutritionEngine`]
//!   facade, logging, and the `mealwise-cli` binary

/// Dataset location and re-exported engine configuration
pub mod config;

/// Reference dataset loading and validation
pub mod dataset;

/// Engine facade over the loaded dataset
pub mod engine;

/// Unified error type
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Catalog and intake data model
pub mod models;
