// ABOUTME: Per-nutrient adequacy/excess ratios and scalar meal scores
// ABOUTME: Deficiency ratio below target, linear decay from target to upper limit, two scoring modes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Gap Scorer
//!
//! For each nutrient with amount `x`, target `t` (unset = 0) and upper limit
//! `u` (unset = +inf):
//!
//! - `x < t`: ratio is `x / t`
//! - `x >= t`: ratio is `1 - (x - t) / (u - t)`, 1 at the target, 0 at the
//!   limit and negative past it
//! - `u <= t` (no room between target and limit) and `x >= t`: ratio is 0
//! - `t == 0` with no limit: ratio is 0, the nutrient constrains nothing
//!
//! A nutrient with only an upper limit therefore scores 1 at zero intake and
//! falls to 0 at the limit, so overshooting it is penalised like any other.
//!
//! Two scalar aggregates exist and are kept apart on purpose:
//! [`ScoringMode::CappedLinear`] sums `min(ratio, 1)` and rates a single meal;
//! [`ScoringMode::ClampedSquared`] sums `max(ratio, 0)^2` and ranks candidate
//! additions.

use mealwise_core::errors::AppResult;
use mealwise_core::models::{ensure_same_axis, IntakeProfile, NutrientVector};
use serde::{Deserialize, Serialize};

/// How per-nutrient ratios are folded into one number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// `sum(min(ratio, 1))`: overall adequacy of a meal
    CappedLinear,
    /// `sum(max(ratio, 0)^2)`: favours broad improvement when ranking foods
    ClampedSquared,
}

impl ScoringMode {
    /// Fold ratios into a scalar
    #[must_use]
    pub fn aggregate(self, ratios: &[f64]) -> f64 {
        match self {
            Self::CappedLinear => ratios.iter().map(|ratio| ratio.min(1.0)).sum(),
            Self::ClampedSquared => ratios
                .iter()
                .map(|ratio| {
                    let clamped = ratio.max(0.0);
                    clamped * clamped
                })
                .sum(),
        }
    }
}

/// Per-nutrient ratios plus both scalar aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapScore {
    /// Ratio per nutrient, catalog order
    pub ratios: Vec<f64>,
    /// Capped-linear adequacy score
    pub adequacy: f64,
    /// Clamped-squared breadth score
    pub breadth: f64,
}

/// Ratio of a single nutrient amount against its target and upper limit
#[must_use]
pub fn nutrient_ratio(amount: f64, target: Option<f64>, upper_limit: Option<f64>) -> f64 {
    let target = target.unwrap_or(0.0);
    if amount < target {
        return amount / target;
    }

    let Some(upper_limit) = upper_limit else {
        return if target == 0.0 { 0.0 } else { 1.0 };
    };
    let span = upper_limit - target;
    if span <= 0.0 {
        return 0.0;
    }
    1.0 - (amount - target) / span
}

/// Ratios for every nutrient of `totals` against `profile`
///
/// # Errors
///
/// Returns a data-integrity error when `totals` and `profile` are on different axes
pub fn nutrient_ratios(totals: &NutrientVector, profile: &IntakeProfile) -> AppResult<Vec<f64>> {
    ensure_same_axis(profile.len(), totals.len())?;
    Ok(totals
        .iter()
        .zip(profile.target().iter().zip(profile.upper_limit()))
        .map(|(amount, (target, upper_limit))| nutrient_ratio(*amount, *target, *upper_limit))
        .collect())
}

/// Score a meal's totals: ratios plus both scalar aggregates
///
/// # Errors
///
/// Returns a data-integrity error when `totals` and `profile` are on different axes
pub fn score(totals: &NutrientVector, profile: &IntakeProfile) -> AppResult<GapScore> {
    let ratios = nutrient_ratios(totals, profile)?;
    let adequacy = ScoringMode::CappedLinear.aggregate(&ratios);
    let breadth = ScoringMode::ClampedSquared.aggregate(&ratios);
    Ok(GapScore {
        ratios,
        adequacy,
        breadth,
    })
}
