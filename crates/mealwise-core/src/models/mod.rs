// ABOUTME: Data model for the nutrient gap engine
// ABOUTME: Re-exports nutrient catalog, food matrix, and intake profile types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Food records and the food nutrient matrix
pub mod food;
/// Demographic reference tables and resolved intake profiles
pub mod intake;
/// Nutrient catalog and axis-aligned vectors
pub mod nutrient;

pub use food::{FoodCatalog, FoodId, FoodRecord, FoodTags, MacroComposition};
pub use intake::{
    AgeBracket, DemographicProfile, GlobalUpperLimit, IntakeProfile, LifeStageGroup,
    ReferenceTables, Sex, TargetSummaryRow,
};
pub use nutrient::{ensure_same_axis, NutrientCatalog, NutrientDefinition, NutrientId, NutrientVector};
