// ABOUTME: Locates the reference data documents the engine loads at startup
// ABOUTME: Data directory from CLI override, MEALWISE_DATA_DIR, or ./data with fixed file names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dataset location
//!
//! Engine tuning lives in [`mealwise_intelligence::config::EngineConfig`]; this
//! module only answers where the JSON documents are.

use std::env;
use std::path::{Path, PathBuf};

pub use mealwise_intelligence::config::{ConfigError, EngineConfig};

/// Environment variable naming the data directory
pub const DATA_DIR_ENV: &str = "MEALWISE_DATA_DIR";

/// Data directory used when nothing else is configured
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Fixed document names inside the data directory
pub mod file_names {
    /// Nutrient catalog
    pub const NUTRIENT_DEFINITIONS: &str = "nutrient_definitions.json";
    /// Food nutrient matrix
    pub const FOODS: &str = "foods.json";
    /// Demographic reference rows
    pub const INTAKE_PROFILES: &str = "intake_profiles.json";
    /// Fallback upper limits
    pub const GLOBAL_UPPER_LIMITS: &str = "global_upper_limits.json";
    /// Reference-table nutrient name to id mapping
    pub const INTAKE_PROFILE_MAPPING: &str = "intake_profile_mapping.json";
}

/// Paths of the five reference documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    data_dir: PathBuf,
}

impl DatasetPaths {
    /// Documents inside `data_dir`
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Explicit override first, then `MEALWISE_DATA_DIR`, then `./data`
    #[must_use]
    pub fn resolve(data_dir_override: Option<PathBuf>) -> Self {
        let data_dir = data_dir_override
            .or_else(|| env::var_os(DATA_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        Self::new(data_dir)
    }

    /// Data directory
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Nutrient catalog document
    #[must_use]
    pub fn nutrient_definitions(&self) -> PathBuf {
        self.data_dir.join(file_names::NUTRIENT_DEFINITIONS)
    }

    /// Food matrix document
    #[must_use]
    pub fn foods(&self) -> PathBuf {
        self.data_dir.join(file_names::FOODS)
    }

    /// Demographic reference rows document
    #[must_use]
    pub fn intake_profiles(&self) -> PathBuf {
        self.data_dir.join(file_names::INTAKE_PROFILES)
    }

    /// Global upper limits document
    #[must_use]
    pub fn global_upper_limits(&self) -> PathBuf {
        self.data_dir.join(file_names::GLOBAL_UPPER_LIMITS)
    }

    /// Name mapping document
    #[must_use]
    pub fn intake_profile_mapping(&self) -> PathBuf {
        self.data_dir.join(file_names::INTAKE_PROFILE_MAPPING)
    }
}

impl Default for DatasetPaths {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}
