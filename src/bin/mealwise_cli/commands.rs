// ABOUTME: Command handlers for mealwise-cli
// ABOUTME: Profile summary, meal totals, and gap-closing recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealwise::engine::NutritionEngine;
use mealwise::errors::{AppError, AppResult};
use mealwise_intelligence::{DemographicQuery, FoodLogEntry, Meal};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::display;

type Result<T> = AppResult<T>;

/// Print the resolved targets and upper limits
pub fn profile(engine: &NutritionEngine, query: &DemographicQuery, json: bool) -> Result<()> {
    let profile = engine.resolve_profile(query)?;
    let rows = engine.target_summary(&profile);
    info!(life_stage = ?profile.life_stage, rows = rows.len(), "Resolved intake profile");

    if json {
        return print_json(&json!({
            "life_stage": profile.life_stage,
            "nutrients": rows,
        }));
    }
    display::display_target_summary(profile.life_stage, &rows);
    Ok(())
}

/// Print the combined nutrients of a meal
pub fn meal(engine: &NutritionEngine, foods: &[FoodLogEntry], json: bool) -> Result<()> {
    let meal = engine.meal_from_log(foods)?;
    let combined = engine.combined_nutrients(&meal)?;

    if json {
        return print_json(&json!({
            "foods": meal_foods(&meal),
            "combined": combined,
        }));
    }
    display::display_meal(&meal, &combined);
    Ok(())
}

/// Score a meal and print the best single-food additions
pub fn recommend(
    engine: &NutritionEngine,
    query: &DemographicQuery,
    foods: &[FoodLogEntry],
    top_k: Option<usize>,
    amount: Option<f64>,
    json: bool,
) -> Result<()> {
    let profile = engine.resolve_profile(query)?;
    let meal = engine.meal_from_log(foods)?;
    let score = engine.score_meal(&meal, &profile)?;

    let mut request = engine.default_request();
    if let Some(top_k) = top_k {
        request.top_k = top_k;
    }
    if let Some(amount) = amount {
        request.add_amount_grams = amount;
    }
    let recommendations = engine.recommend(&meal, &profile, &request)?;

    if json {
        return print_json(&json!({
            "foods": meal_foods(&meal),
            "adequacy": score.adequacy,
            "breadth": score.breadth,
            "add_amount_grams": request.add_amount_grams,
            "recommendations": recommendations
                .iter()
                .map(|r| json!({ "fdc_id": r.food.id, "name": r.food.name, "score": r.score }))
                .collect::<Vec<_>>(),
        }));
    }
    display::display_recommendations(&meal, &score, &request, &recommendations);
    Ok(())
}

fn meal_foods(meal: &Meal) -> Vec<serde_json::Value> {
    meal.foods()
        .iter()
        .map(|food| {
            json!({
                "fdc_id": food.record().id,
                "name": food.record().name,
                "amount": food.amount_grams(),
            })
        })
        .collect()
}

fn print_json(value: &impl Serialize) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::serialization(format!("Cannot render output: {e}")).with_source(e))?;
    println!("{rendered}");
    Ok(())
}
