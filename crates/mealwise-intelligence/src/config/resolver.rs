// ABOUTME: Intake profile resolver configuration
// ABOUTME: Energy reference values and per-nutrient unit scale corrections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intake Profile Resolver Configuration
//!
//! The demographic reference tables publish a few nutrients in a different
//! unit than the food nutrient matrix, and energy is not taken from the
//! tables at all. Both corrections are configured here.

use mealwise_core::constants::{energy, nutrient_ids};
use mealwise_core::models::NutrientId;
use serde::{Deserialize, Serialize};

/// Intake profile resolver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Nutrient id whose target and limit come from the energy reference values
    pub energy_nutrient_id: NutrientId,
    /// Daily energy target (kcal)
    pub energy_target: f64,
    /// Daily energy ceiling (kcal)
    pub energy_upper_limit: f64,
    /// Multipliers converting reference-table units into catalog units
    pub unit_scales: Vec<UnitScale>,
}

/// Unit conversion applied to a nutrient's RDI and UL before storing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitScale {
    /// Nutrient id the factor applies to
    pub nutrient_id: NutrientId,
    /// Multiplier from reference-table unit to catalog unit
    pub factor: f64,
}

impl ResolverConfig {
    /// Multiplier for a nutrient, `1.0` when no correction is configured
    #[must_use]
    pub fn unit_scale(&self, nutrient_id: NutrientId) -> f64 {
        self.unit_scales
            .iter()
            .find(|scale| scale.nutrient_id == nutrient_id)
            .map_or(1.0, |scale| scale.factor)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            energy_nutrient_id: nutrient_ids::ENERGY,
            energy_target: energy::REFERENCE_TARGET_KCAL,
            energy_upper_limit: energy::REFERENCE_UPPER_LIMIT_KCAL,
            unit_scales: vec![
                // litres -> grams
                UnitScale {
                    nutrient_id: nutrient_ids::WATER,
                    factor: 1000.0,
                },
                // micrograms -> milligrams
                UnitScale {
                    nutrient_id: nutrient_ids::COPPER,
                    factor: 0.001,
                },
            ],
        }
    }
}
