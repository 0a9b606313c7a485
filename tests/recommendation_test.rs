// ABOUTME: Integration tests for ranking catalog foods by gap closure after a fixed portion
// ABOUTME: Covers clamped-squared scoring, top-k bounds, deterministic ties, and request validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use mealwise::errors::ErrorCode;
use mealwise_core::models::{
    FoodCatalog, FoodRecord, FoodTags, IntakeProfile, LifeStageGroup, NutrientVector, Sex,
};
use mealwise_intelligence::{DemographicQuery, FoodRecommender, Recommendation, RecommendationRequest};

mod common;

use common::{assert_close, foods};

fn record(id: u64, per_100g: [f64; 3]) -> FoodRecord {
    FoodRecord {
        id,
        name: format!("Food {id}"),
        tags: FoodTags::default(),
        popularity: 0.0,
        nutrients_per_100g: NutrientVector::from(per_100g.to_vec()),
    }
}

fn request(top_k: usize, add_amount_grams: f64) -> RecommendationRequest {
    RecommendationRequest {
        top_k,
        add_amount_grams,
    }
}

fn ids(recommendations: &[Recommendation]) -> Vec<u64> {
    recommendations.iter().map(|r| r.food.id).collect()
}

// ============================================================================
// SCORING
// ============================================================================

#[test]
fn test_candidate_score_uses_hypothetical_totals() {
    let (_, profile) = common::three_nutrient_profile();
    let totals = NutrientVector::from(vec![0.0, 50.0, 0.0]);
    let food = record(1, [100.0, 0.0, 0.0]);

    // 50 g brings nutrient A to 50 of 100: ratios [0.5, 1.0, 0.0]
    let score = FoodRecommender::candidate_score(&totals, &food, &profile, 50.0);
    assert_close(score, 0.25 + 1.0);
}

#[test]
fn test_excess_is_clamped_to_zero_not_negative() {
    let (_, profile) = common::three_nutrient_profile();
    let totals = NutrientVector::zeros(3);
    let overshoot = record(1, [1000.0, 0.0, 0.0]);

    let score = FoodRecommender::candidate_score(&totals, &overshoot, &profile, 100.0);
    assert_close(score, 0.0);
}

#[test]
fn test_broad_improvement_beats_single_spike() {
    let (_, profile) = common::three_nutrient_profile();
    let catalog = FoodCatalog::new(
        3,
        vec![record(1, [100.0, 0.0, 0.0]), record(2, [75.0, 37.5, 0.0])],
    )
    .unwrap();

    let ranked = FoodRecommender::new(&catalog)
        .recommend(&NutrientVector::zeros(3), &profile, &request(2, 100.0))
        .unwrap();

    assert_eq!(ids(&ranked), vec![2, 1]);
    assert_close(ranked[0].score, 0.5625 * 2.0);
    assert_close(ranked[1].score, 1.0);
}

#[test]
fn test_overshooting_limit_only_nutrient_is_demoted() {
    // Nutrient 0 has a 100 g target; nutrient 1 has only a 50 g ceiling
    let profile = IntakeProfile::new(
        LifeStageGroup::Female,
        vec![Some(100.0), None],
        vec![None, Some(50.0)],
    )
    .unwrap();
    let catalog = FoodCatalog::new(
        2,
        vec![
            FoodRecord {
                nutrients_per_100g: NutrientVector::from(vec![100.0, 500.0]),
                ..record(1, [0.0; 3])
            },
            FoodRecord {
                nutrients_per_100g: NutrientVector::from(vec![100.0, 0.0]),
                ..record(2, [0.0; 3])
            },
        ],
    )
    .unwrap();

    let ranked = FoodRecommender::new(&catalog)
        .recommend(&NutrientVector::zeros(2), &profile, &request(2, 100.0))
        .unwrap();

    assert_eq!(ids(&ranked), vec![2, 1]);
    assert_close(ranked[0].score, 2.0);
    assert_close(ranked[1].score, 1.0);
}

#[test]
fn test_equal_scores_rank_by_ascending_food_id() {
    let (_, profile) = common::three_nutrient_profile();
    let catalog = FoodCatalog::new(
        3,
        vec![
            record(30, [10.0, 5.0, 0.0]),
            record(10, [10.0, 5.0, 0.0]),
            record(20, [10.0, 5.0, 0.0]),
        ],
    )
    .unwrap();

    let recommender = FoodRecommender::new(&catalog);
    let totals = NutrientVector::zeros(3);
    let first = recommender.recommend(&totals, &profile, &request(3, 100.0)).unwrap();
    let second = recommender.recommend(&totals, &profile, &request(3, 100.0)).unwrap();

    assert_eq!(ids(&first), vec![10, 20, 30]);
    assert_eq!(ids(&first), ids(&second));
}

// ============================================================================
// RESULT BOUNDS
// ============================================================================

#[test]
fn test_never_returns_more_than_top_k() {
    let engine = common::engine();
    let profile = engine
        .resolve_profile(&DemographicQuery::new(30.0, Sex::Female))
        .unwrap();
    let meal = engine.new_meal();

    for top_k in 1..=4 {
        let ranked = engine
            .recommend(&meal, &profile, &request(top_k, 100.0))
            .unwrap();
        assert_eq!(ranked.len(), top_k);
    }
}

#[test]
fn test_top_k_larger_than_catalog_returns_whole_catalog() {
    let engine = common::engine();
    let profile = engine
        .resolve_profile(&DemographicQuery::new(30.0, Sex::Male))
        .unwrap();
    let meal = engine.new_meal();

    let ranked = engine.recommend(&meal, &profile, &request(50, 100.0)).unwrap();
    assert_eq!(ranked.len(), engine.foods().len());
}

#[test]
fn test_recommendations_come_from_catalog_in_score_order() {
    let engine = common::engine();
    let profile = engine
        .resolve_profile(&DemographicQuery::new(35.0, Sex::Female).pregnant(true))
        .unwrap();
    let mut meal = engine.new_meal();
    engine.add_to_meal(&mut meal, foods::LENTILS, 200.0).unwrap();

    let ranked = engine.recommend(&meal, &profile, &request(6, 150.0)).unwrap();
    for recommendation in &ranked {
        assert!(engine.foods().get(recommendation.food.id).is_some());
    }
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_default_request_comes_from_config() {
    let engine = common::engine();
    let request = engine.default_request();
    assert_eq!(request.top_k, 3);
    assert_close(request.add_amount_grams, 100.0);

    let profile = engine
        .resolve_profile(&DemographicQuery::new(30.0, Sex::Female))
        .unwrap();
    let ranked = engine.recommend(&engine.new_meal(), &profile, &request).unwrap();
    assert_eq!(ranked.len(), 3);
}

// ============================================================================
// VALIDATION
// ============================================================================

#[test]
fn test_zero_top_k_is_rejected() {
    let (_, profile) = common::three_nutrient_profile();
    let catalog = FoodCatalog::new(3, vec![record(1, [1.0, 1.0, 1.0])]).unwrap();

    let error = FoodRecommender::new(&catalog)
        .recommend(&NutrientVector::zeros(3), &profile, &request(0, 100.0))
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_non_positive_portion_is_rejected() {
    let (_, profile) = common::three_nutrient_profile();
    let catalog = FoodCatalog::new(3, vec![record(1, [1.0, 1.0, 1.0])]).unwrap();
    let recommender = FoodRecommender::new(&catalog);

    for grams in [0.0, -10.0, f64::INFINITY] {
        let error = recommender
            .recommend(&NutrientVector::zeros(3), &profile, &request(1, grams))
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }
}

#[test]
fn test_totals_on_another_axis_are_rejected() {
    let (_, profile) = common::three_nutrient_profile();
    let catalog = FoodCatalog::new(3, vec![record(1, [1.0, 1.0, 1.0])]).unwrap();

    let error = FoodRecommender::new(&catalog)
        .recommend(&NutrientVector::zeros(4), &profile, &request(1, 100.0))
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::DataIntegrity);
}
