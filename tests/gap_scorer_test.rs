// ABOUTME: Integration tests for per-nutrient gap ratios and the two scalar scoring modes
// ABOUTME: Covers deficiency, target, limit, excess, unset slots, and zero spans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use mealwise::errors::ErrorCode;
use mealwise_core::models::{IntakeProfile, LifeStageGroup, NutrientVector, Sex};
use mealwise_intelligence::gap_scorer::{nutrient_ratio, nutrient_ratios, score};
use mealwise_intelligence::{DemographicQuery, ScoringMode};

mod common;

use common::{assert_close, axis, foods};

// ============================================================================
// SINGLE RATIOS
// ============================================================================

#[test]
fn test_ratio_below_target_is_fraction_of_target() {
    assert_close(nutrient_ratio(25.0, Some(100.0), Some(200.0)), 0.25);
    assert_close(nutrient_ratio(0.0, Some(100.0), None), 0.0);
}

#[test]
fn test_ratio_at_target_is_one() {
    assert_close(nutrient_ratio(100.0, Some(100.0), Some(200.0)), 1.0);
    assert_close(nutrient_ratio(100.0, Some(100.0), None), 1.0);
}

#[test]
fn test_ratio_at_upper_limit_is_zero() {
    assert_close(nutrient_ratio(200.0, Some(100.0), Some(200.0)), 0.0);
}

#[test]
fn test_ratio_interpolates_between_target_and_limit() {
    assert_close(nutrient_ratio(150.0, Some(100.0), Some(200.0)), 0.5);
}

#[test]
fn test_ratio_goes_negative_past_limit() {
    assert_close(nutrient_ratio(300.0, Some(100.0), Some(200.0)), -1.0);
}

#[test]
fn test_unset_limit_never_penalises_excess() {
    assert_close(nutrient_ratio(1.0e9, Some(100.0), None), 1.0);
}

#[test]
fn test_zero_or_unset_target_without_limit_yields_zero() {
    assert_close(nutrient_ratio(10.0, Some(0.0), None), 0.0);
    assert_close(nutrient_ratio(10.0, None, None), 0.0);
    assert_close(nutrient_ratio(0.0, None, None), 0.0);
}

#[test]
fn test_limit_only_nutrient_decays_towards_limit() {
    assert_close(nutrient_ratio(0.0, None, Some(50.0)), 1.0);
    assert_close(nutrient_ratio(10.0, None, Some(50.0)), 0.8);
    assert_close(nutrient_ratio(50.0, Some(0.0), Some(50.0)), 0.0);
}

#[test]
fn test_limit_only_nutrient_goes_negative_past_limit() {
    assert_close(nutrient_ratio(60.0, None, Some(50.0)), -0.2);
    assert_close(nutrient_ratio(500.0, None, Some(50.0)), -9.0);
}

#[test]
fn test_zero_span_between_target_and_limit_yields_zero() {
    assert_close(nutrient_ratio(100.0, Some(100.0), Some(100.0)), 0.0);
    assert_close(nutrient_ratio(120.0, Some(100.0), Some(80.0)), 0.0);
    // Below target the span is irrelevant
    assert_close(nutrient_ratio(50.0, Some(100.0), Some(100.0)), 0.5);
}

// ============================================================================
// VECTORS AND SCALARS
// ============================================================================

#[test]
fn test_three_nutrient_scenario() {
    let (_, profile) = common::three_nutrient_profile();
    let totals = NutrientVector::from(vec![50.0, 50.0, 10.0]);

    let gap = score(&totals, &profile).unwrap();
    assert_eq!(gap.ratios.len(), 3);
    assert_close(gap.ratios[0], 0.5);
    assert_close(gap.ratios[1], 1.0);
    assert_close(gap.ratios[2], 0.0);
    assert_close(gap.adequacy, 1.5);
    assert_close(gap.breadth, 0.25 + 1.0);
}

#[test]
fn test_capped_linear_caps_at_one_and_keeps_negatives() {
    let ratios = [0.5, 1.0, -0.5, 0.0];
    assert_close(ScoringMode::CappedLinear.aggregate(&ratios), 1.0);
}

#[test]
fn test_clamped_squared_drops_negatives() {
    let ratios = [0.5, 1.0, -0.5, 0.0];
    assert_close(ScoringMode::ClampedSquared.aggregate(&ratios), 1.25);
}

#[test]
fn test_modes_disagree_on_excess() {
    // Same nutrient 50% past its limit
    let (_, profile) = common::three_nutrient_profile();
    let totals = NutrientVector::from(vec![250.0, 50.0, 0.0]);

    let gap = score(&totals, &profile).unwrap();
    assert_close(gap.ratios[0], -0.5);
    assert_close(gap.adequacy, 0.5);
    assert_close(gap.breadth, 1.0);
}

#[test]
fn test_ratios_follow_catalog_order() {
    let profile = IntakeProfile::new(
        LifeStageGroup::Male,
        vec![Some(10.0), None, Some(4.0)],
        vec![None, None, Some(8.0)],
    )
    .unwrap();
    let totals = NutrientVector::from(vec![5.0, 100.0, 6.0]);

    let ratios = nutrient_ratios(&totals, &profile).unwrap();
    assert_close(ratios[0], 0.5);
    assert_close(ratios[1], 0.0);
    assert_close(ratios[2], 0.5);
}

#[test]
fn test_axis_mismatch_is_data_integrity_fault() {
    let (_, profile) = common::three_nutrient_profile();
    let totals = NutrientVector::from(vec![1.0, 2.0]);

    let error = score(&totals, &profile).unwrap_err();
    assert_eq!(error.code, ErrorCode::DataIntegrity);
}

#[test]
fn test_engine_scores_meal_against_resolved_profile() {
    let engine = common::engine();
    let profile = engine
        .resolve_profile(&DemographicQuery::new(30.0, Sex::Female))
        .unwrap();
    let mut meal = engine.new_meal();
    engine.add_to_meal(&mut meal, foods::CHICKEN, 100.0).unwrap();

    let gap = engine.score_meal(&meal, &profile).unwrap();
    assert_eq!(gap.ratios.len(), common::NUTRIENT_IDS.len());
    // Protein 31 g of a 46 g target
    assert_close(gap.ratios[axis::PROTEIN], 31.0 / 46.0);
    // Fat and sugars have no target
    assert_close(gap.ratios[axis::FAT], 0.0);
    assert_close(gap.ratios[axis::SUGARS], 0.0);
    assert!(gap.adequacy <= common::NUTRIENT_IDS.len() as f64);
}
