// ABOUTME: Nutrient catalog defining the canonical vector axis of the engine
// ABOUTME: NutrientDefinition, NutrientCatalog with validated projection, and NutrientVector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use std::ops::{AddAssign, Index};

/// Identifier of a nutrient in the reference tables
pub type NutrientId = u32;

/// A single nutrient on the catalog axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientDefinition {
    /// Nutrient id
    pub id: NutrientId,
    /// Display name (e.g. "Protein")
    pub name: String,
    /// Unit of amounts on this axis slot (g, mg, µg, kcal)
    #[serde(rename = "unitName", alias = "unit")]
    pub unit: String,
}

/// Ordered, immutable list of nutrient definitions
///
/// Position `i` of every [`NutrientVector`] and every target or limit vector
/// refers to `definitions()[i]` for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct NutrientCatalog {
    definitions: Vec<NutrientDefinition>,
    positions: HashMap<NutrientId, usize>,
}

impl NutrientCatalog {
    /// Build a catalog whose axis order is the order of `definitions`
    ///
    /// # Errors
    ///
    /// Returns a data-integrity error if a nutrient id appears twice
    pub fn new(definitions: Vec<NutrientDefinition>) -> AppResult<Self> {
        let mut positions = HashMap::with_capacity(definitions.len());
        for (position, definition) in definitions.iter().enumerate() {
            if positions.insert(definition.id, position).is_some() {
                return Err(AppError::data_integrity(format!(
                    "Nutrient id {} is defined more than once",
                    definition.id
                ))
                .with_details(json!({ "nutrient_id": definition.id })));
            }
        }
        Ok(Self {
            definitions,
            positions,
        })
    }

    /// Number of nutrients on the axis
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the catalog has no nutrients
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Definitions in axis order
    #[must_use]
    pub fn definitions(&self) -> &[NutrientDefinition] {
        &self.definitions
    }

    /// Axis position of a nutrient id
    #[must_use]
    pub fn position(&self, id: NutrientId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Definition for a nutrient id
    #[must_use]
    pub fn get(&self, id: NutrientId) -> Option<&NutrientDefinition> {
        self.position(id).map(|position| &self.definitions[position])
    }

    /// Materialize a keyed `nutrient id -> amount` mapping into an axis-aligned vector
    ///
    /// Every catalog nutrient must be present and every key must belong to the
    /// catalog; a partial or foreign mapping would silently misattribute amounts.
    ///
    /// # Errors
    ///
    /// Returns a data-integrity error naming the first uncovered or unknown nutrient
    pub fn project(&self, amounts: &HashMap<NutrientId, f64>) -> AppResult<NutrientVector> {
        if let Some(unknown) = amounts.keys().find(|id| !self.positions.contains_key(id)) {
            return Err(AppError::data_integrity(format!(
                "Nutrient id {unknown} is not part of the catalog"
            ))
            .with_details(json!({ "nutrient_id": unknown })));
        }

        let mut values = Vec::with_capacity(self.definitions.len());
        for definition in &self.definitions {
            let amount = amounts.get(&definition.id).ok_or_else(|| {
                AppError::data_integrity(format!(
                    "Missing amount for nutrient {} ({})",
                    definition.id, definition.name
                ))
                .with_details(json!({ "nutrient_id": definition.id }))
            })?;
            values.push(*amount);
        }
        Ok(NutrientVector::from(values))
    }
}

/// Amounts aligned to a [`NutrientCatalog`] axis
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutrientVector(Vec<f64>);

impl NutrientVector {
    /// All-zero vector of the given axis length
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self(vec![0.0; len])
    }

    /// Axis length
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the vector has no slots
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Amounts in axis order
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Iterate amounts in axis order
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.0.iter()
    }

    /// New vector with every amount multiplied by `factor`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self(self.0.iter().map(|amount| amount * factor).collect())
    }
}

impl From<Vec<f64>> for NutrientVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl Index<usize> for NutrientVector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl AddAssign<&Self> for NutrientVector {
    /// Element-wise sum; callers guarantee equal axis length
    fn add_assign(&mut self, rhs: &Self) {
        debug_assert_eq!(self.len(), rhs.len(), "nutrient axis mismatch");
        for (total, amount) in self.0.iter_mut().zip(&rhs.0) {
            *total += amount;
        }
    }
}

/// Reject two vectors that are not on the same axis
///
/// # Errors
///
/// Returns a data-integrity error when `left != right`
pub fn ensure_same_axis(left: usize, right: usize) -> AppResult<()> {
    if left == right {
        Ok(())
    } else {
        Err(AppError::data_integrity(format!(
            "Nutrient vector length {right} does not match axis length {left}"
        ))
        .with_details(json!({ "expected": left, "actual": right })))
    }
}
