// ABOUTME: Ranks catalog foods by how well adding a fixed portion closes the nutrient gap
// ABOUTME: One-step lookahead over the whole food matrix with clamped-squared scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Ranker
//!
//! Every food in the catalog is tried as a single addition of
//! `add_amount_grams` to the current meal. The hypothetical totals are scored
//! with [`ScoringMode::ClampedSquared`]: ratios past the upper limit count as
//! 0, and squaring rewards foods that bring many nutrients close to target
//! over foods that spike one.
//!
//! Foods with equal scores are ordered by ascending food id.
//!
//! Cost is `foods x nutrients` per call.

use crate::config::RecommendationConfig;
use crate::gap_scorer::{nutrient_ratio, ScoringMode};
use mealwise_core::errors::{AppError, AppResult};
use mealwise_core::models::{ensure_same_axis, FoodCatalog, FoodRecord, IntakeProfile, NutrientVector};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::debug;

/// Parameters of a recommendation call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Maximum number of foods returned
    pub top_k: usize,
    /// Portion of each candidate added in the lookahead (grams)
    pub add_amount_grams: f64,
}

impl RecommendationRequest {
    /// Request using the configured defaults
    #[must_use]
    pub const fn from_config(config: &RecommendationConfig) -> Self {
        Self {
            top_k: config.default_top_k,
            add_amount_grams: config.default_add_amount_grams,
        }
    }

    /// Reject a zero result count or a non-positive portion
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error naming the offending parameter
    pub fn validate(&self) -> AppResult<()> {
        if self.top_k == 0 {
            return Err(AppError::invalid_input("top_k must be at least 1"));
        }
        if !self.add_amount_grams.is_finite() || self.add_amount_grams <= 0.0 {
            return Err(AppError::invalid_input("add_amount_grams must be positive")
                .with_details(json!({ "add_amount_grams": self.add_amount_grams })));
        }
        Ok(())
    }
}

/// A recommended food and the score of the meal after adding it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Catalog record
    pub food: Arc<FoodRecord>,
    /// Clamped-squared score of the hypothetical meal
    pub score: f64,
}

/// Ranks the food nutrient matrix against a running meal
#[derive(Debug, Clone, Copy)]
pub struct FoodRecommender<'a> {
    foods: &'a FoodCatalog,
}

impl<'a> FoodRecommender<'a> {
    /// Create a ranker over the shared food catalog
    #[must_use]
    pub const fn new(foods: &'a FoodCatalog) -> Self {
        Self { foods }
    }

    /// Score of `totals` after adding `add_amount_grams` of `food`
    ///
    /// Callers guarantee `totals`, `food` and `profile` share one axis.
    #[must_use]
    pub fn candidate_score(
        totals: &NutrientVector,
        food: &FoodRecord,
        profile: &IntakeProfile,
        add_amount_grams: f64,
    ) -> f64 {
        let factor = add_amount_grams / 100.0;
        let ratios: Vec<f64> = totals
            .iter()
            .zip(food.nutrients_per_100g.iter())
            .zip(profile.target().iter().zip(profile.upper_limit()))
            .map(|((current, per_100g), (target, upper_limit))| {
                nutrient_ratio(per_100g.mul_add(factor, *current), *target, *upper_limit)
            })
            .collect();
        ScoringMode::ClampedSquared.aggregate(&ratios)
    }

    /// Best `top_k` single-food additions, most recommended first
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for a rejected request and a
    /// data-integrity error if `totals`, `profile` and the catalog disagree on
    /// axis length
    pub fn recommend(
        &self,
        totals: &NutrientVector,
        profile: &IntakeProfile,
        request: &RecommendationRequest,
    ) -> AppResult<Vec<Recommendation>> {
        request.validate()?;
        ensure_same_axis(self.foods.axis_len(), totals.len())?;
        ensure_same_axis(self.foods.axis_len(), profile.len())?;

        let mut scored: Vec<Recommendation> = self
            .foods
            .records()
            .iter()
            .map(|food| Recommendation {
                score: Self::candidate_score(totals, food, profile, request.add_amount_grams),
                food: Arc::clone(food),
            })
            .collect();

        scored.sort_by(rank_order);
        scored.truncate(request.top_k);

        debug!(
            candidates = self.foods.len(),
            returned = scored.len(),
            top_score = ?scored.first().map(|r| r.score),
            "Ranked food additions"
        );
        Ok(scored)
    }
}

/// Descending score, then ascending food id
fn rank_order(a: &Recommendation, b: &Recommendation) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.food.id.cmp(&b.food.id))
}
