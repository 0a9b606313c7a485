// ABOUTME: Output formatting helpers for mealwise-cli
// ABOUTME: Plain-text tables for targets, meal totals, and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealwise::models::{LifeStageGroup, TargetSummaryRow};
use mealwise_intelligence::{CombinedNutrient, GapScore, Meal, Recommendation, RecommendationRequest};

fn format_amount(value: Option<f64>) -> String {
    value.map_or_else(|| "-".into(), |v| format!("{v:.2}"))
}

/// Display the target table of a resolved profile
pub fn display_target_summary(life_stage: LifeStageGroup, rows: &[TargetSummaryRow]) {
    println!("\nDaily targets ({life_stage:?})");
    println!("{}", "=".repeat(72));
    println!("{:<8} {:<36} {:>10} {:>10}  unit", "id", "nutrient", "target", "limit");
    for row in rows {
        println!(
            "{:<8} {:<36} {:>10} {:>10}  {}",
            row.id,
            row.name,
            format_amount(row.target),
            format_amount(row.upper_limit),
            row.unit
        );
    }
}

fn display_meal_foods(meal: &Meal) {
    println!("\nMeal ({} foods)", meal.len());
    println!("{}", "=".repeat(72));
    for food in meal.foods() {
        println!(
            "   {:>8}  {:<48} {:>8.1} g",
            food.record().id,
            food.record().name,
            food.amount_grams()
        );
    }
}

/// Display the foods of a meal and its combined nutrients
pub fn display_meal(meal: &Meal, combined: &[CombinedNutrient]) {
    display_meal_foods(meal);
    if combined.is_empty() {
        println!("\nNo foods logged.");
        return;
    }
    println!("\nCombined nutrients");
    println!("{}", "=".repeat(72));
    for nutrient in combined {
        println!(
            "{:<8} {:<36} {:>12.2}  {}",
            nutrient.id, nutrient.name, nutrient.amount, nutrient.unit
        );
    }
}

/// Display the meal score and the ranked additions
pub fn display_recommendations(
    meal: &Meal,
    score: &GapScore,
    request: &RecommendationRequest,
    recommendations: &[Recommendation],
) {
    display_meal_foods(meal);
    println!("\nAdequacy score: {:.3}", score.adequacy);
    println!("Breadth score:  {:.3}", score.breadth);

    println!(
        "\nTop {} additions of {:.0} g",
        recommendations.len(),
        request.add_amount_grams
    );
    println!("{}", "=".repeat(72));
    for (rank, recommendation) in recommendations.iter().enumerate() {
        println!(
            "{:>3}. {:>8}  {:<48} {:>8.3}",
            rank + 1,
            recommendation.food.id,
            recommendation.food.name,
            recommendation.score
        );
    }
}
