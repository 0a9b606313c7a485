// ABOUTME: Re-exports the unified error type from the mealwise-core crate
// ABOUTME: Keeps `mealwise::errors` as the stable path for binaries and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use mealwise_core::errors::*;
