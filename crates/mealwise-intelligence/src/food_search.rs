// ABOUTME: Combines external relevance scores into ranked, filtered food search results
// ABOUTME: RelevanceSource seam for semantic and fuzzy scorers plus popularity weighting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food Search
//!
//! The text models that judge how well a food name matches a query live
//! outside the engine and plug in through [`RelevanceSource`]. This module
//! only combines their scores:
//!
//! ```text
//! combined = (semantic + fuzzy_weight * fuzzy) * ((popularity + offset) / scale)
//! ```
//!
//! Results are sorted by combined score (ties by ascending food id), cut to
//! `candidate_multiplier * max_results`, filtered to vegetarian foods when
//! asked, cut to `max_results`, and finally stripped of hits that do not score
//! strictly above `min_combined_score`.

use crate::config::SearchConfig;
use mealwise_core::models::{FoodCatalog, FoodRecord};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Produces a relevance score of a food for a free-text query
pub trait RelevanceSource {
    /// Relevance of `food` to `query`, higher is better
    fn relevance(&self, query: &str, food: &FoodRecord) -> f64;
}

/// A food matched by a search and its combined score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Catalog record
    pub food: Arc<FoodRecord>,
    /// Combined relevance score
    pub score: f64,
}

/// Search over the food catalog driven by two external relevance sources
pub struct FoodSearch<'a> {
    foods: &'a FoodCatalog,
    semantic: &'a dyn RelevanceSource,
    fuzzy: &'a dyn RelevanceSource,
    config: &'a SearchConfig,
}

impl<'a> FoodSearch<'a> {
    /// Create a search over `foods` using the given relevance sources
    #[must_use]
    pub fn new(
        foods: &'a FoodCatalog,
        semantic: &'a dyn RelevanceSource,
        fuzzy: &'a dyn RelevanceSource,
        config: &'a SearchConfig,
    ) -> Self {
        Self {
            foods,
            semantic,
            fuzzy,
            config,
        }
    }

    /// Combined score of one food
    #[must_use]
    pub fn combined_score(&self, query: &str, food: &FoodRecord) -> f64 {
        let relevance = self
            .config
            .fuzzy_weight
            .mul_add(self.fuzzy.relevance(query, food), self.semantic.relevance(query, food));
        let popularity =
            (food.popularity + self.config.popularity_offset) / self.config.popularity_scale;
        relevance * popularity
    }

    /// Up to `max_results` foods for `query`, best first
    #[must_use]
    pub fn search(&self, query: &str, vegetarian_only: bool) -> Vec<SearchHit> {
        let mut hits: Vec<SearchHit> = self
            .foods
            .records()
            .iter()
            .map(|food| SearchHit {
                score: self.combined_score(query, food),
                food: Arc::clone(food),
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.food.id.cmp(&b.food.id))
        });
        hits.truncate(
            self.config
                .max_results
                .saturating_mul(self.config.candidate_multiplier),
        );
        if vegetarian_only {
            hits.retain(|hit| hit.food.tags.is_vegetarian);
        }
        hits.truncate(self.config.max_results);
        hits.retain(|hit| hit.score > self.config.min_combined_score);

        debug!(
            query,
            vegetarian_only,
            hits = hits.len(),
            "Food search completed"
        );
        hits
    }
}
