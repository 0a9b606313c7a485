// ABOUTME: Meal aggregation of scaled per-food nutrient vectors
// ABOUTME: Food portions, add/remove, full-precision totals, and the rounded combined view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealwise_core::constants::DISPLAY_DECIMALS;
use mealwise_core::errors::{AppError, AppResult};
use mealwise_core::models::{
    ensure_same_axis, FoodId, FoodRecord, NutrientCatalog, NutrientId, NutrientVector,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// A portion of a catalog food inside a meal
#[derive(Debug, Clone)]
pub struct Food {
    record: Arc<FoodRecord>,
    amount_grams: f64,
    nutrients: NutrientVector,
}

impl Food {
    /// Portion `amount_grams` of `record`
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error unless the amount is a positive number
    pub fn new(record: Arc<FoodRecord>, amount_grams: f64) -> AppResult<Self> {
        if !amount_grams.is_finite() || amount_grams <= 0.0 {
            return Err(AppError::invalid_input("Food amount must be positive grams")
                .with_details(json!({ "food_id": record.id, "amount_grams": amount_grams })));
        }
        let nutrients = record.nutrients_for(amount_grams);
        Ok(Self {
            record,
            amount_grams,
            nutrients,
        })
    }

    /// Catalog record
    #[must_use]
    pub fn record(&self) -> &Arc<FoodRecord> {
        &self.record
    }

    /// Portion size in grams
    #[must_use]
    pub const fn amount_grams(&self) -> f64 {
        self.amount_grams
    }

    /// Nutrients contained in this portion
    #[must_use]
    pub const fn nutrients(&self) -> &NutrientVector {
        &self.nutrients
    }
}

/// Summed amount of one nutrient across a meal, rounded for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedNutrient {
    /// Nutrient id
    pub id: NutrientId,
    /// Nutrient name
    pub name: String,
    /// Unit
    pub unit: String,
    /// Amount rounded to two decimals
    pub amount: f64,
}

/// Food log line: a food id and the grams eaten
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodLogEntry {
    /// Food id
    pub fdc_id: FoodId,
    /// Grams eaten
    pub amount: f64,
}

/// Ordered foods eaten together
///
/// Order is for display only; totals do not depend on it.
#[derive(Debug, Clone)]
pub struct Meal {
    foods: Vec<Food>,
    axis_len: usize,
}

impl Meal {
    /// Empty meal over a catalog axis of `axis_len` nutrients
    #[must_use]
    pub const fn new(axis_len: usize) -> Self {
        Self {
            foods: Vec::new(),
            axis_len,
        }
    }

    /// Add `amount_grams` of `record`
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for a non-positive amount and a
    /// data-integrity error if the record is not on this meal's axis
    pub fn add_food(&mut self, record: Arc<FoodRecord>, amount_grams: f64) -> AppResult<()> {
        ensure_same_axis(self.axis_len, record.nutrients_per_100g.len())
            .map_err(|e| e.with_details(json!({ "food_id": record.id })))?;
        self.foods.push(Food::new(record, amount_grams)?);
        Ok(())
    }

    /// Remove and return the food at `index`
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an index past the end
    pub fn remove_food(&mut self, index: usize) -> AppResult<Food> {
        if index >= self.foods.len() {
            return Err(AppError::not_found(format!("Meal entry {index}"))
                .with_details(json!({ "index": index, "len": self.foods.len() })));
        }
        Ok(self.foods.remove(index))
    }

    /// Foods in insertion order
    #[must_use]
    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    /// Number of foods
    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Whether the meal has no foods
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Element-wise sum of every portion's nutrients, full precision
    #[must_use]
    pub fn totals(&self) -> NutrientVector {
        let mut totals = NutrientVector::zeros(self.axis_len);
        for food in &self.foods {
            totals += food.nutrients();
        }
        totals
    }

    /// Per-nutrient sums in catalog order, rounded for display
    ///
    /// An empty meal yields an empty view.
    ///
    /// # Errors
    ///
    /// Returns a data-integrity error if `catalog` is not this meal's axis
    pub fn combined_nutrients(&self, catalog: &NutrientCatalog) -> AppResult<Vec<CombinedNutrient>> {
        ensure_same_axis(self.axis_len, catalog.len())?;
        if self.foods.is_empty() {
            return Ok(Vec::new());
        }

        let totals = self.totals();
        Ok(catalog
            .definitions()
            .iter()
            .zip(totals.iter())
            .map(|(definition, amount)| CombinedNutrient {
                id: definition.id,
                name: definition.name.clone(),
                unit: definition.unit.clone(),
                amount: round_for_display(*amount),
            })
            .collect())
    }
}

fn round_for_display(amount: f64) -> f64 {
    let factor = 10_f64.powi(DISPLAY_DECIMALS);
    (amount * factor).round() / factor
}
