// ABOUTME: Engine configuration for intake resolution, ranking, and search
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `resolver` - Energy reference values and unit corrections
//! - `recommendation` - Default result count and lookahead portion
//! - `search` - Relevance weighting and result filtering
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export MEALWISE_DEFAULT_TOP_K=5
//!    export MEALWISE_DEFAULT_ADD_GRAMS=150
//!    ```
//!
//! 2. Default values (if env vars not set)
//!
//! The loaded configuration is passed by reference into each component; there
//! is no process-wide instance.

pub mod error;
pub mod recommendation;
pub mod resolver;
pub mod search;

pub use error::ConfigError;
pub use recommendation::RecommendationConfig;
pub use resolver::{ResolverConfig, UnitScale};
pub use search::SearchConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Configuration for intake profile resolution
    pub resolver: ResolverConfig,
    /// Configuration for the recommendation ranker
    pub recommendation: RecommendationConfig,
    /// Configuration for the search result combiner
    pub search: SearchConfig,
}

impl EngineConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first rule the configuration violates
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_resolver()?;

        let recommendation = &self.recommendation;
        if recommendation.default_top_k == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_top_k must be at least 1",
            ));
        }
        if !recommendation.default_add_amount_grams.is_finite()
            || recommendation.default_add_amount_grams <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "default_add_amount_grams must be a positive number",
            ));
        }

        self.validate_search()
    }

    fn validate_resolver(&self) -> Result<(), ConfigError> {
        let resolver = &self.resolver;
        if !resolver.energy_target.is_finite() || resolver.energy_target <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "energy_target must be a positive number",
            ));
        }
        if !resolver.energy_upper_limit.is_finite()
            || resolver.energy_target >= resolver.energy_upper_limit
        {
            return Err(ConfigError::InvalidRange(
                "energy_target must be < energy_upper_limit",
            ));
        }
        if resolver
            .unit_scales
            .iter()
            .any(|scale| !scale.factor.is_finite() || scale.factor <= 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "unit scale factors must be positive numbers",
            ));
        }
        Ok(())
    }

    fn validate_search(&self) -> Result<(), ConfigError> {
        let search = &self.search;
        if search.max_results == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "search max_results must be at least 1",
            ));
        }
        if search.candidate_multiplier == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "search candidate_multiplier must be at least 1",
            ));
        }
        if !search.popularity_scale.is_finite() || search.popularity_scale <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "search popularity_scale must be a positive number",
            ));
        }
        if !search.fuzzy_weight.is_finite()
            || !search.min_combined_score.is_finite()
            || !search.popularity_offset.is_finite()
        {
            return Err(ConfigError::ValueOutOfRange(
                "search weights and thresholds must be finite",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Resolver overrides
        Self::apply_env_var("MEALWISE_ENERGY_TARGET", &mut self.resolver.energy_target)?;
        Self::apply_env_var(
            "MEALWISE_ENERGY_UPPER_LIMIT",
            &mut self.resolver.energy_upper_limit,
        )?;

        // Recommendation overrides
        Self::apply_env_var(
            "MEALWISE_DEFAULT_TOP_K",
            &mut self.recommendation.default_top_k,
        )?;
        Self::apply_env_var(
            "MEALWISE_DEFAULT_ADD_GRAMS",
            &mut self.recommendation.default_add_amount_grams,
        )?;

        // Search overrides
        Self::apply_env_var("MEALWISE_SEARCH_MAX_RESULTS", &mut self.search.max_results)?;
        Self::apply_env_var(
            "MEALWISE_SEARCH_MIN_SCORE",
            &mut self.search.min_combined_score,
        )?;

        Ok(self)
    }
}
