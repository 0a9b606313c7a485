// ABOUTME: Recommendation ranker configuration
// ABOUTME: Default result count and candidate portion size for one-step lookahead
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Recommendation ranker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Number of foods returned when the caller does not ask for a count
    pub default_top_k: usize,
    /// Portion (grams) of each candidate food added in the lookahead
    pub default_add_amount_grams: f64,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            default_top_k: 3,
            default_add_amount_grams: 100.0,
        }
    }
}
