// ABOUTME: Loads the nutrient catalog, food matrix, and intake reference tables from JSON
// ABOUTME: Orders the catalog axis, projects keyed food rows onto it, and rejects integrity faults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Reference dataset loading
//!
//! The catalog axis is fixed by sorting nutrient definitions by id, and foods
//! are kept sorted by id. Every food row goes through
//! [`NutrientCatalog::project`], so a food missing a catalog nutrient, naming a
//! foreign nutrient, or naming one twice aborts the load.

use crate::config::DatasetPaths;
use mealwise_core::errors::{AppError, AppResult};
use mealwise_core::models::{
    DemographicProfile, FoodCatalog, FoodId, FoodRecord, FoodTags, GlobalUpperLimit,
    NutrientCatalog, NutrientDefinition, NutrientId, ReferenceTables,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// One nutrient amount of a food document
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodNutrientRow {
    /// Nutrient id
    pub nutrient_id: NutrientId,
    /// Amount per 100 g in the catalog unit
    pub amount_per_100g: f64,
}

/// A food as stored in `foods.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodDocument {
    /// Food id
    pub fdc_id: FoodId,
    /// Display name
    pub name: String,
    /// Vegetarian flag
    #[serde(default)]
    pub is_vegetarian: bool,
    /// Popularity signal
    #[serde(default)]
    pub popular_score: f64,
    /// Keyed nutrient amounts per 100 g
    pub nutrients: Vec<FoodNutrientRow>,
}

/// The five reference documents, parsed but not yet validated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetDocuments {
    /// Nutrient definitions in any order
    pub nutrient_definitions: Vec<NutrientDefinition>,
    /// Foods in any order
    pub foods: Vec<FoodDocument>,
    /// Demographic rows in table order
    pub intake_profiles: Vec<DemographicProfile>,
    /// Fallback upper limits
    pub global_upper_limits: Vec<GlobalUpperLimit>,
    /// Reference-table nutrient name to id
    pub intake_profile_mapping: BTreeMap<String, NutrientId>,
}

impl DatasetDocuments {
    /// Read and parse every document under `paths`
    ///
    /// # Errors
    ///
    /// Returns a storage error for an unreadable file and a serialization
    /// error for a malformed one
    pub fn read(paths: &DatasetPaths) -> AppResult<Self> {
        Ok(Self {
            nutrient_definitions: read_document(&paths.nutrient_definitions())?,
            foods: read_document(&paths.foods())?,
            intake_profiles: read_document(&paths.intake_profiles())?,
            global_upper_limits: read_document(&paths.global_upper_limits())?,
            intake_profile_mapping: read_document(&paths.intake_profile_mapping())?,
        })
    }
}

/// Validated, immutable reference data shared by every engine component
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Nutrient catalog (the vector axis)
    pub catalog: NutrientCatalog,
    /// Food nutrient matrix
    pub foods: FoodCatalog,
    /// Demographic reference tables
    pub tables: ReferenceTables,
}

impl Dataset {
    /// Read and validate the dataset under `paths`
    ///
    /// # Errors
    ///
    /// Returns the first storage, serialization, or data-integrity fault
    pub fn load(paths: &DatasetPaths) -> AppResult<Self> {
        info!(data_dir = %paths.data_dir().display(), "Loading reference dataset");
        Self::from_documents(DatasetDocuments::read(paths)?)
    }

    /// Validate parsed documents into a dataset
    ///
    /// # Errors
    ///
    /// Returns a data-integrity error for duplicate ids or a food whose
    /// nutrients do not cover the catalog exactly
    pub fn from_documents(documents: DatasetDocuments) -> AppResult<Self> {
        let DatasetDocuments {
            mut nutrient_definitions,
            foods,
            intake_profiles,
            global_upper_limits,
            intake_profile_mapping,
        } = documents;

        nutrient_definitions.sort_by_key(|definition| definition.id);
        let catalog = NutrientCatalog::new(nutrient_definitions)?;

        let records = foods
            .into_iter()
            .map(|food| project_food(&catalog, food))
            .collect::<AppResult<Vec<_>>>()?;
        let foods = FoodCatalog::new(catalog.len(), records)?;

        let tables =
            ReferenceTables::new(intake_profiles, intake_profile_mapping, global_upper_limits)?;

        info!(
            nutrients = catalog.len(),
            foods = foods.len(),
            intake_profiles = tables.profiles().len(),
            "Reference dataset loaded"
        );
        Ok(Self {
            catalog,
            foods,
            tables,
        })
    }
}

fn project_food(catalog: &NutrientCatalog, food: FoodDocument) -> AppResult<FoodRecord> {
    let mut amounts = HashMap::with_capacity(food.nutrients.len());
    for row in &food.nutrients {
        match amounts.entry(row.nutrient_id) {
            Entry::Occupied(_) => {
                return Err(AppError::data_integrity(format!(
                    "Food {} lists nutrient {} more than once",
                    food.fdc_id, row.nutrient_id
                ))
                .with_details(json!({ "food_id": food.fdc_id, "nutrient_id": row.nutrient_id })));
            }
            Entry::Vacant(slot) => {
                slot.insert(row.amount_per_100g);
            }
        }
    }

    let nutrients_per_100g = catalog
        .project(&amounts)
        .map_err(|e| e.with_details(json!({ "food_id": food.fdc_id })))?;

    Ok(FoodRecord {
        id: food.fdc_id,
        name: food.name,
        tags: FoodTags {
            is_vegetarian: food.is_vegetarian,
        },
        popularity: food.popular_score,
        nutrients_per_100g,
    })
}

fn read_document<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    debug!(path = %path.display(), "Reading dataset document");
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("Cannot read {}", path.display()))
            .with_details(json!({ "path": path.display().to_string() }))
            .with_source(e)
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        AppError::serialization(format!("Malformed document {}", path.display()))
            .with_details(json!({ "path": path.display().to_string() }))
            .with_source(e)
    })
}
