// ABOUTME: Engine facade wiring the loaded dataset and configuration into every component
// ABOUTME: Profile resolution, meal building from food logs, scoring, ranking, and search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Engine
//!
//! [`NutritionEngine`] owns the immutable [`Dataset`] and [`EngineConfig`] and
//! hands borrowed views of them to the components on each call. Nothing is
//! cached between calls, so one engine can serve any number of callers.
//!
//! ```rust,no_run
//! use mealwise::config::{DatasetPaths, EngineConfig};
//! use mealwise::engine::NutritionEngine;
//! use mealwise::errors::AppResult;
//! use mealwise_core::models::Sex;
//! use mealwise_intelligence::DemographicQuery;
//!
//! fn main() -> AppResult<()> {
//!     let engine = NutritionEngine::load(&DatasetPaths::resolve(None), EngineConfig::default())?;
//!     let profile = engine.resolve_profile(&DemographicQuery::new(30.0, Sex::Female))?;
//!     let mut meal = engine.new_meal();
//!     engine.add_to_meal(&mut meal, 170_567, 150.0)?;
//!     let picks = engine.recommend(&meal, &profile, &engine.default_request())?;
//!     println!("{} suggestions", picks.len());
//!     Ok(())
//! }
//! ```

use crate::config::{DatasetPaths, EngineConfig};
use crate::dataset::Dataset;
use mealwise_core::errors::AppResult;
use mealwise_core::models::{
    FoodCatalog, FoodId, IntakeProfile, MacroComposition, NutrientCatalog, TargetSummaryRow,
};
use mealwise_intelligence::gap_scorer::{self, GapScore};
use mealwise_intelligence::{
    CombinedNutrient, DemographicQuery, FoodLogEntry, FoodRecommender, FoodSearch,
    IntakeProfileResolver, Meal, Recommendation, RecommendationRequest, RelevanceSource,
    SearchHit,
};
use tracing::{debug, warn};

/// Entry point for every nutrient-gap operation
#[derive(Debug, Clone)]
pub struct NutritionEngine {
    dataset: Dataset,
    config: EngineConfig,
}

impl NutritionEngine {
    /// Engine over an already validated dataset
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` fails validation
    pub fn new(dataset: Dataset, config: EngineConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self { dataset, config })
    }

    /// Load the dataset under `paths` and build an engine over it
    ///
    /// # Errors
    ///
    /// Returns the first dataset fault or a configuration error
    pub fn load(paths: &DatasetPaths, config: EngineConfig) -> AppResult<Self> {
        Self::new(Dataset::load(paths)?, config)
    }

    /// Loaded reference data
    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Nutrient catalog
    #[must_use]
    pub const fn catalog(&self) -> &NutrientCatalog {
        &self.dataset.catalog
    }

    /// Food nutrient matrix
    #[must_use]
    pub const fn foods(&self) -> &FoodCatalog {
        &self.dataset.foods
    }

    /// Target and upper-limit vectors for a person
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for a rejected query and a not-found
    /// error when no reference row matches
    pub fn resolve_profile(&self, query: &DemographicQuery) -> AppResult<IntakeProfile> {
        IntakeProfileResolver::new(
            &self.dataset.catalog,
            &self.dataset.tables,
            &self.config.resolver,
        )
        .resolve(query)
    }

    /// Display rows of a resolved profile
    #[must_use]
    pub fn target_summary(&self, profile: &IntakeProfile) -> Vec<TargetSummaryRow> {
        profile.summary(&self.dataset.catalog)
    }

    /// Empty meal on this engine's axis
    #[must_use]
    pub fn new_meal(&self) -> Meal {
        Meal::new(self.dataset.catalog.len())
    }

    /// Add `amount_grams` of catalog food `food_id` to `meal`
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown food and an invalid-input
    /// error for a non-positive amount
    pub fn add_to_meal(&self, meal: &mut Meal, food_id: FoodId, amount_grams: f64) -> AppResult<()> {
        let record = self.dataset.foods.require(food_id)?;
        meal.add_food(record, amount_grams)
    }

    /// Build a meal from a day's food log
    ///
    /// Entries with a zero or negative amount stand for "amount not entered"
    /// and are skipped.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown food id
    pub fn meal_from_log(&self, log: &[FoodLogEntry]) -> AppResult<Meal> {
        let mut meal = self.new_meal();
        for entry in log {
            if entry.amount <= 0.0 || !entry.amount.is_finite() {
                warn!(
                    fdc_id = entry.fdc_id,
                    amount = entry.amount,
                    "Skipping food log entry without a positive amount"
                );
                continue;
            }
            self.add_to_meal(&mut meal, entry.fdc_id, entry.amount)?;
        }
        debug!(entries = log.len(), foods = meal.len(), "Built meal from food log");
        Ok(meal)
    }

    /// Rounded per-nutrient sums of a meal
    ///
    /// # Errors
    ///
    /// Returns a data-integrity error if the meal was built on another axis
    pub fn combined_nutrients(&self, meal: &Meal) -> AppResult<Vec<CombinedNutrient>> {
        meal.combined_nutrients(&self.dataset.catalog)
    }

    /// Per-nutrient ratios with the adequacy and breadth scores of a meal
    ///
    /// # Errors
    ///
    /// Returns a data-integrity error if meal and profile disagree on axis length
    pub fn score_meal(&self, meal: &Meal, profile: &IntakeProfile) -> AppResult<GapScore> {
        gap_scorer::score(&meal.totals(), profile)
    }

    /// Request built from the configured defaults
    #[must_use]
    pub const fn default_request(&self) -> RecommendationRequest {
        RecommendationRequest::from_config(&self.config.recommendation)
    }

    /// Best single-food additions to `meal`
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for a rejected request and a
    /// data-integrity error on axis mismatch
    pub fn recommend(
        &self,
        meal: &Meal,
        profile: &IntakeProfile,
        request: &RecommendationRequest,
    ) -> AppResult<Vec<Recommendation>> {
        FoodRecommender::new(&self.dataset.foods).recommend(&meal.totals(), profile, request)
    }

    /// Foods matching `query`, scored by the given relevance sources
    #[must_use]
    pub fn search(
        &self,
        semantic: &dyn RelevanceSource,
        fuzzy: &dyn RelevanceSource,
        query: &str,
        vegetarian_only: bool,
    ) -> Vec<SearchHit> {
        FoodSearch::new(&self.dataset.foods, semantic, fuzzy, &self.config.search)
            .search(query, vegetarian_only)
    }

    /// Water / protein / fat / carbohydrate split of a catalog food
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown food id
    pub fn macro_composition(&self, food_id: FoodId) -> AppResult<Option<MacroComposition>> {
        let record = self.dataset.foods.require(food_id)?;
        Ok(record.macro_composition(&self.dataset.catalog))
    }
}

