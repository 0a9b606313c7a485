// ABOUTME: Re-exports the catalog and intake data model from the mealwise-core crate
// ABOUTME: Nutrient catalog, food matrix, and demographic reference types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use mealwise_core::models::*;
