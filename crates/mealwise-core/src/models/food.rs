// ABOUTME: Food records and the food nutrient matrix aligned to the nutrient catalog
// ABOUTME: FoodRecord, FoodTags, FoodCatalog lookup, and per-100g macro composition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::nutrient::{ensure_same_axis, NutrientCatalog, NutrientVector};
use crate::constants::nutrient_ids;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

/// Identifier of a food (USDA `FoodData` Central id)
pub type FoodId = u64;

/// Dietary tags attached to a food
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodTags {
    /// Contains no meat or fish
    pub is_vegetarian: bool,
}

/// A catalog food with its nutrient amounts per 100 g
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    /// Food id
    pub id: FoodId,
    /// Display name
    pub name: String,
    /// Dietary tags
    pub tags: FoodTags,
    /// Popularity signal used to weight search relevance
    pub popularity: f64,
    /// Nutrient amounts per 100 g, aligned to the nutrient catalog axis
    pub nutrients_per_100g: NutrientVector,
}

/// Percentage split of the four bulk components of a food
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroComposition {
    /// Water share (%)
    pub water_percent: f64,
    /// Protein share (%)
    pub protein_percent: f64,
    /// Fat share (%)
    pub fat_percent: f64,
    /// Carbohydrate share (%)
    pub carbohydrate_percent: f64,
}

impl FoodRecord {
    /// Nutrient amounts contained in `amount_grams` of this food
    #[must_use]
    pub fn nutrients_for(&self, amount_grams: f64) -> NutrientVector {
        self.nutrients_per_100g.scaled(amount_grams / 100.0)
    }

    /// Water / protein / fat / carbohydrate split of 100 g of this food
    ///
    /// Returns `None` when one of the four nutrients is not on the catalog axis
    /// or when they sum to zero.
    #[must_use]
    pub fn macro_composition(&self, catalog: &NutrientCatalog) -> Option<MacroComposition> {
        let amount = |id| {
            catalog
                .position(id)
                .and_then(|position| self.nutrients_per_100g.as_slice().get(position).copied())
        };
        let water = amount(nutrient_ids::WATER)?;
        let protein = amount(nutrient_ids::PROTEIN)?;
        let fat = amount(nutrient_ids::FAT)?;
        let carbohydrate = amount(nutrient_ids::CARBOHYDRATE)?;

        let total = water + protein + fat + carbohydrate;
        if total <= 0.0 {
            return None;
        }
        Some(MacroComposition {
            water_percent: water / total * 100.0,
            protein_percent: protein / total * 100.0,
            fat_percent: fat / total * 100.0,
            carbohydrate_percent: carbohydrate / total * 100.0,
        })
    }
}

/// Food nutrient matrix: every catalog food, ordered by id
///
/// Loaded once and shared read-only; records are handed out as `Arc` so meals
/// can hold them without copying nutrient vectors.
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    records: Vec<Arc<FoodRecord>>,
    by_id: HashMap<FoodId, usize>,
    axis_len: usize,
}

impl FoodCatalog {
    /// Build the matrix, validating that every record sits on an axis of `axis_len`
    ///
    /// # Errors
    ///
    /// Returns a data-integrity error for a misaligned vector or a duplicate food id
    pub fn new(axis_len: usize, mut records: Vec<FoodRecord>) -> AppResult<Self> {
        records.sort_by_key(|record| record.id);

        let mut by_id = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            ensure_same_axis(axis_len, record.nutrients_per_100g.len())
                .map_err(|e| e.with_details(json!({ "food_id": record.id })))?;
            if by_id.insert(record.id, position).is_some() {
                return Err(AppError::data_integrity(format!(
                    "Food id {} appears more than once",
                    record.id
                ))
                .with_details(json!({ "food_id": record.id })));
            }
        }

        Ok(Self {
            records: records.into_iter().map(Arc::new).collect(),
            by_id,
            axis_len,
        })
    }

    /// Axis length every record is aligned to
    #[must_use]
    pub fn axis_len(&self) -> usize {
        self.axis_len
    }

    /// Number of foods
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog has no foods
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records ordered by ascending id
    #[must_use]
    pub fn records(&self) -> &[Arc<FoodRecord>] {
        &self.records
    }

    /// Look up a food by id
    #[must_use]
    pub fn get(&self, id: FoodId) -> Option<&Arc<FoodRecord>> {
        self.by_id.get(&id).map(|position| &self.records[*position])
    }

    /// Look up a food by id, reporting absence as an error
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown id
    pub fn require(&self, id: FoodId) -> AppResult<Arc<FoodRecord>> {
        self.get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Food {id}")))
    }
}
