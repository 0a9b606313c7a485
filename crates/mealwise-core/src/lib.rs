// ABOUTME: Core types and constants for the mealwise nutrient gap engine
// ABOUTME: Foundation crate with error handling, nutrient ids, and the catalog data model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mealwise Core
//!
//! Foundation crate providing shared types for nutrient target resolution and
//! gap-based food recommendation. Everything here is immutable reference data
//! or plain value types; the algorithms live in `mealwise-intelligence`.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Nutrient ids and reference values
//! - **models**: Nutrient catalog, food nutrient matrix, and intake profiles

/// Unified error handling system with standard error codes
pub mod errors;

/// Nutrient ids and reference values organized by domain
pub mod constants;

/// Nutrient catalog, food matrix, and intake profile models
pub mod models;
