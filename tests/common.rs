// ABOUTME: Shared test utilities and synthetic reference data for integration tests
// ABOUTME: Provides a small nutrient catalog, food matrix, intake tables, and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
//! Shared test utilities for `mealwise`
//!
//! The synthetic catalog has seven nutrients, six foods, and eight demographic
//! rows. Reference values use the source units of the intake tables (water in
//! litres, copper in micrograms) so the unit corrections are exercised.

use mealwise::config::{DatasetPaths, EngineConfig};
use mealwise::dataset::{Dataset, DatasetDocuments, FoodDocument, FoodNutrientRow};
use mealwise::engine::NutritionEngine;
use mealwise_core::models::{
    DemographicProfile, GlobalUpperLimit, IntakeProfile, LifeStageGroup, NutrientCatalog,
    NutrientDefinition, NutrientId,
};
use serde_json::json;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Absolute tolerance for floating-point assertions
pub const TOLERANCE: f64 = 1e-9;

/// Assert two floats agree within [`TOLERANCE`]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

/// Assert two optional floats are both unset or agree within [`TOLERANCE`]
pub fn assert_option_close(actual: Option<f64>, expected: Option<f64>) {
    match (actual, expected) {
        (Some(a), Some(e)) => assert_close(a, e),
        (None, None) => {}
        _ => panic!("expected {expected:?}, got {actual:?}"),
    }
}

/// Catalog axis of the synthetic dataset, ascending id
pub const NUTRIENT_IDS: [NutrientId; 7] = [203, 204, 208, 255, 269, 301, 312];

/// Axis positions
pub mod axis {
    pub const PROTEIN: usize = 0;
    pub const FAT: usize = 1;
    pub const ENERGY: usize = 2;
    pub const WATER: usize = 3;
    pub const SUGARS: usize = 4;
    pub const CALCIUM: usize = 5;
    pub const COPPER: usize = 6;
}

/// Synthetic food ids
pub mod foods {
    pub const LENTILS: u64 = 1001;
    pub const CHICKEN: u64 = 1002;
    pub const MILK: u64 = 1003;
    pub const ALMONDS: u64 = 1004;
    pub const SPINACH: u64 = 1005;
    pub const SALMON: u64 = 1006;
}

fn definition(id: NutrientId, name: &str, unit: &str) -> NutrientDefinition {
    NutrientDefinition {
        id,
        name: name.to_owned(),
        unit: unit.to_owned(),
    }
}

/// Nutrient definitions in document order (deliberately unsorted)
pub fn nutrient_definitions() -> Vec<NutrientDefinition> {
    vec![
        definition(301, "Calcium, Ca", "mg"),
        definition(203, "Protein", "g"),
        definition(255, "Water", "g"),
        definition(208, "Energy", "kcal"),
        definition(312, "Copper, Cu", "mg"),
        definition(204, "Total lipid (fat)", "g"),
        definition(269, "Sugars, total", "g"),
    ]
}

/// Catalog built from [`nutrient_definitions`] in ascending id order
pub fn nutrient_catalog() -> NutrientCatalog {
    let mut definitions = nutrient_definitions();
    definitions.sort_by_key(|d| d.id);
    NutrientCatalog::new(definitions).unwrap()
}

/// Food document with amounts given in [`NUTRIENT_IDS`] order
pub fn food_document(
    fdc_id: u64,
    name: &str,
    is_vegetarian: bool,
    popular_score: f64,
    amounts: [f64; 7],
) -> FoodDocument {
    FoodDocument {
        fdc_id,
        name: name.to_owned(),
        is_vegetarian,
        popular_score,
        nutrients: NUTRIENT_IDS
            .iter()
            .zip(amounts)
            .rev()
            .map(|(nutrient_id, amount_per_100g)| FoodNutrientRow {
                nutrient_id: *nutrient_id,
                amount_per_100g,
            })
            .collect(),
    }
}

/// Six foods in document order (deliberately unsorted)
pub fn food_documents() -> Vec<FoodDocument> {
    vec![
        food_document(foods::ALMONDS, "Almonds", true, 6.0, [21.2, 49.9, 579.0, 4.4, 4.4, 269.0, 1.03]),
        food_document(foods::LENTILS, "Lentils, boiled", true, 8.0, [9.0, 0.4, 116.0, 69.6, 1.8, 19.0, 0.25]),
        food_document(foods::SALMON, "Salmon, Atlantic", false, 5.0, [20.4, 13.4, 208.0, 64.9, 0.0, 9.0, 0.25]),
        food_document(foods::CHICKEN, "Chicken breast, roasted", false, 9.0, [31.0, 3.6, 165.0, 65.3, 0.0, 15.0, 0.05]),
        food_document(foods::SPINACH, "Spinach, raw", true, 4.0, [2.9, 0.4, 23.0, 91.4, 0.4, 99.0, 0.13]),
        food_document(foods::MILK, "Milk, whole", true, 7.0, [3.2, 3.3, 61.0, 88.1, 5.1, 113.0, 0.01]),
    ]
}

/// Demographic rows in table order, parsed from their JSON document form
pub fn intake_profiles() -> Vec<DemographicProfile> {
    serde_json::from_value(json!([
        {
            "profile": { "minAgeMonths": 0, "minAgeYears": 0, "maxAgeMonths": 12, "maxAgeYears": 0, "lifeStageGroup": "infant" },
            "RDI": { "Protein": 9.1, "Total Water": 0.7, "Calcium": 260, "Copper": 200 },
            "UL": { "Calcium": 1500 }
        },
        {
            "profile": { "minAgeYears": 1, "maxAgeYears": 9, "lifeStageGroup": "child" },
            "RDI": { "Protein": 19, "Total Water": 1.7, "Calcium": 1000, "Copper": 440 },
            "UL": { "Calcium": 2500, "Copper": 3000 }
        },
        {
            "profile": { "minAgeYears": 9, "maxAgeYears": 51, "lifeStageGroup": "male" },
            "RDI": { "Protein": 56, "Total Fat": null, "Energy": 2600, "Total Water": 3.7, "Calcium": 1000, "Copper": 900, "Fiber": 38 },
            "UL": { "Energy": 9999, "Calcium": 2500, "Copper": 10000 }
        },
        {
            "profile": { "minAgeYears": 9, "maxAgeYears": 51, "lifeStageGroup": "female" },
            "RDI": { "Protein": 46, "Total Water": 2.7, "Calcium": 1000, "Copper": 900 },
            "UL": { "Calcium": null }
        },
        {
            "profile": { "minAgeYears": 51, "maxAgeYears": null, "lifeStageGroup": "male" },
            "RDI": { "Protein": 56, "Total Water": 3.7, "Calcium": 1200, "Copper": 900 },
            "UL": { "Calcium": 2000, "Copper": 10000 }
        },
        {
            "profile": { "minAgeYears": 51, "maxAgeYears": null, "lifeStageGroup": "female" },
            "RDI": { "Protein": 46, "Total Water": 2.7, "Calcium": 1200, "Copper": 900 },
            "UL": { "Calcium": 2000 }
        },
        {
            "profile": { "minAgeYears": 14, "maxAgeYears": 51, "lifeStageGroup": "pregnant" },
            "RDI": { "Protein": 71, "Total Water": 3.0, "Calcium": 1000, "Copper": 1000 },
            "UL": { "Calcium": 2500, "Copper": 10000 }
        },
        {
            "profile": { "minAgeYears": 14, "maxAgeYears": 51, "lifeStageGroup": "lactating" },
            "RDI": { "Protein": 71, "Total Water": 3.8, "Calcium": 1000, "Copper": 1300 },
            "UL": { "Calcium": 2500, "Copper": 10000 }
        }
    ]))
    .unwrap()
}

/// Fallback upper limits: calcium (mg) and copper (µg)
pub fn global_upper_limits() -> Vec<GlobalUpperLimit> {
    vec![
        GlobalUpperLimit { id: 301, value: 2500.0 },
        GlobalUpperLimit { id: 312, value: 10000.0 },
    ]
}

/// Reference-table names to nutrient ids
pub fn name_mapping() -> BTreeMap<String, NutrientId> {
    [
        ("Protein", 203),
        ("Total Fat", 204),
        ("Energy", 208),
        ("Total Water", 255),
        ("Calcium", 301),
        ("Copper", 312),
    ]
    .into_iter()
    .map(|(name, id)| (name.to_owned(), id))
    .collect()
}

/// The complete synthetic document set
pub fn documents() -> DatasetDocuments {
    DatasetDocuments {
        nutrient_definitions: nutrient_definitions(),
        foods: food_documents(),
        intake_profiles: intake_profiles(),
        global_upper_limits: global_upper_limits(),
        intake_profile_mapping: name_mapping(),
    }
}

/// Validated synthetic dataset
pub fn dataset() -> Dataset {
    Dataset::from_documents(documents()).unwrap()
}

/// Engine over the synthetic dataset with default configuration
pub fn engine() -> NutritionEngine {
    init_test_logging();
    NutritionEngine::new(dataset(), EngineConfig::default()).unwrap()
}

/// Write `documents` as the five JSON files under `dir`
pub fn write_documents(dir: &Path, documents: &DatasetDocuments) -> DatasetPaths {
    let paths = DatasetPaths::new(dir);
    let write = |path: &Path, value: serde_json::Value| {
        fs::write(path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
    };
    write(&paths.nutrient_definitions(), json!(documents.nutrient_definitions));
    write(&paths.foods(), json!(documents.foods));
    write(&paths.intake_profiles(), json!(documents.intake_profiles));
    write(&paths.global_upper_limits(), json!(documents.global_upper_limits));
    write(&paths.intake_profile_mapping(), json!(documents.intake_profile_mapping));
    paths
}

/// Three-nutrient catalog with targets `[100, 50, 0]` and limits `[200, 100, unset]`
pub fn three_nutrient_profile() -> (NutrientCatalog, IntakeProfile) {
    let catalog = NutrientCatalog::new(vec![
        definition(1, "A", "g"),
        definition(2, "B", "g"),
        definition(3, "C", "g"),
    ])
    .unwrap();
    let profile = IntakeProfile::new(
        LifeStageGroup::Female,
        vec![Some(100.0), Some(50.0), Some(0.0)],
        vec![Some(200.0), Some(100.0), None],
    )
    .unwrap();
    (catalog, profile)
}
