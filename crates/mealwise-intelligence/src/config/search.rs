// ABOUTME: Food search result combiner configuration
// ABOUTME: Relevance weighting, popularity scaling, result count, and score threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food Search Configuration
//!
//! Combined score = `(semantic + fuzzy_weight * fuzzy) * ((popularity + popularity_offset) / popularity_scale)`

use serde::{Deserialize, Serialize};

/// Food search result combiner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum hits returned
    pub max_results: usize,
    /// Hits must score strictly above this value
    pub min_combined_score: f64,
    /// Weight of the fuzzy string-match score relative to the semantic score
    pub fuzzy_weight: f64,
    /// Added to popularity before scaling
    pub popularity_offset: f64,
    /// Divisor applied to the offset popularity
    pub popularity_scale: f64,
    /// Candidates kept before dietary filtering, as a multiple of `max_results`
    pub candidate_multiplier: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 16,
            min_combined_score: 0.4,
            fuzzy_weight: 0.5,
            popularity_offset: 10.0,
            popularity_scale: 20.0,
            candidate_multiplier: 2,
        }
    }
}
