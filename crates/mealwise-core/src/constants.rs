// ABOUTME: Nutrient identifiers and reference values shared across the engine
// ABOUTME: Ids follow the USDA FoodData Central legacy nutrient numbering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application-wide constants organized by domain

use crate::models::NutrientId;

/// Nutrient ids (USDA legacy nutrient numbers)
pub mod nutrient_ids {
    use super::NutrientId;

    /// Protein (g)
    pub const PROTEIN: NutrientId = 203;
    /// Total lipid / fat (g)
    pub const FAT: NutrientId = 204;
    /// Carbohydrate, by difference (g)
    pub const CARBOHYDRATE: NutrientId = 205;
    /// Energy (kcal)
    pub const ENERGY: NutrientId = 208;
    /// Water (g); reference tables express it in litres
    pub const WATER: NutrientId = 255;
    /// Sugars, total (g)
    pub const SUGARS: NutrientId = 269;
    /// Copper (mg); reference tables express it in micrograms
    pub const COPPER: NutrientId = 312;
}

/// Energy reference values applied regardless of demographic profile
pub mod energy {
    /// Daily energy target (kcal)
    pub const REFERENCE_TARGET_KCAL: f64 = 2000.0;
    /// Daily energy ceiling (kcal)
    pub const REFERENCE_UPPER_LIMIT_KCAL: f64 = 3000.0;
}

/// Nutrients listed in the target summary even when no target or limit exists
pub const ALWAYS_LISTED_NUTRIENTS: [NutrientId; 2] =
    [nutrient_ids::FAT, nutrient_ids::SUGARS];

/// Decimal places kept in presentation-level nutrient views
pub const DISPLAY_DECIMALS: i32 = 2;
