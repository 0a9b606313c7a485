// ABOUTME: Resolves per-person daily targets and upper limits from demographic inputs
// ABOUTME: Age-bracket and life-stage selection, unit corrections, and global UL fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intake Profile Resolver
//!
//! Maps `(age, sex, pregnancy, lactation)` to an [`IntakeProfile`]: one target
//! slot and one upper-limit slot per catalog nutrient.
//!
//! # Selection
//!
//! The first reference row whose `[min, max)` age bracket contains the age and
//! whose life stage matches wins:
//! - lactating callers match only `lactating` rows
//! - otherwise pregnant callers match only `pregnant` rows
//! - otherwise males match `infant`, `child`, `male` and females match
//!   `infant`, `child`, `female`
//!
//! # Vector construction
//!
//! - Energy always takes the configured reference target and ceiling.
//! - Named RDI/UL entries are mapped to nutrient ids; names outside the
//!   mapping table are ignored.
//! - A missing or `null` UL falls back to the global upper limit table.
//! - Configured unit scales are applied to both values.
//! - Anything still missing stays unset.

use crate::config::ResolverConfig;
use mealwise_core::errors::{AppError, AppResult};
use mealwise_core::models::{
    DemographicProfile, IntakeProfile, LifeStageGroup, NutrientCatalog, NutrientId,
    ReferenceTables, Sex,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

/// Demographic inputs of a profile lookup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemographicQuery {
    /// Age in years (fractional for infants)
    pub age_years: f64,
    /// Biological sex
    pub sex: Sex,
    /// Currently pregnant
    #[serde(default)]
    pub is_pregnant: bool,
    /// Currently lactating
    #[serde(default)]
    pub is_lactating: bool,
}

impl DemographicQuery {
    /// Query for a person who is neither pregnant nor lactating
    #[must_use]
    pub const fn new(age_years: f64, sex: Sex) -> Self {
        Self {
            age_years,
            sex,
            is_pregnant: false,
            is_lactating: false,
        }
    }

    /// Mark the person as pregnant
    #[must_use]
    pub const fn pregnant(mut self, is_pregnant: bool) -> Self {
        self.is_pregnant = is_pregnant;
        self
    }

    /// Mark the person as lactating
    #[must_use]
    pub const fn lactating(mut self, is_lactating: bool) -> Self {
        self.is_lactating = is_lactating;
        self
    }

    /// Reject impossible inputs before any lookup
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for a negative or non-finite age, or for
    /// pregnancy/lactation combined with `Sex::Male`
    pub fn validate(&self) -> AppResult<()> {
        if !self.age_years.is_finite() || self.age_years < 0.0 {
            return Err(AppError::invalid_input(
                "Age must be a non-negative number of years",
            )
            .with_details(json!({ "age_years": self.age_years })));
        }
        if (self.is_pregnant || self.is_lactating) && self.sex != Sex::Female {
            return Err(AppError::invalid_input(
                "Pregnancy and lactation require sex F",
            )
            .with_details(json!({
                "sex": self.sex.to_string(),
                "is_pregnant": self.is_pregnant,
                "is_lactating": self.is_lactating,
            })));
        }
        Ok(())
    }

    /// Whether a reference row's life stage applies to this person
    #[must_use]
    pub fn accepts(&self, group: LifeStageGroup) -> bool {
        if self.is_lactating {
            group == LifeStageGroup::Lactating
        } else if self.is_pregnant {
            group == LifeStageGroup::Pregnant
        } else {
            match self.sex {
                Sex::Male => matches!(
                    group,
                    LifeStageGroup::Infant | LifeStageGroup::Child | LifeStageGroup::Male
                ),
                Sex::Female => matches!(
                    group,
                    LifeStageGroup::Infant | LifeStageGroup::Child | LifeStageGroup::Female
                ),
            }
        }
    }
}

/// Resolves intake profiles against shared reference data
#[derive(Debug, Clone, Copy)]
pub struct IntakeProfileResolver<'a> {
    catalog: &'a NutrientCatalog,
    tables: &'a ReferenceTables,
    config: &'a ResolverConfig,
}

impl<'a> IntakeProfileResolver<'a> {
    /// Create a resolver over loaded reference data
    #[must_use]
    pub const fn new(
        catalog: &'a NutrientCatalog,
        tables: &'a ReferenceTables,
        config: &'a ResolverConfig,
    ) -> Self {
        Self {
            catalog,
            tables,
            config,
        }
    }

    /// First reference row matching the query, if any
    #[must_use]
    pub fn select_profile(&self, query: &DemographicQuery) -> Option<&'a DemographicProfile> {
        self.tables.profiles().iter().find(|entry| {
            entry.profile.contains(query.age_years)
                && query.accepts(entry.profile.life_stage_group)
        })
    }

    /// Resolve the target and upper-limit vectors for a person
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for a rejected query and a not-found
    /// error when no reference row covers the age and life stage
    pub fn resolve(&self, query: &DemographicQuery) -> AppResult<IntakeProfile> {
        query.validate()?;

        let entry = self.select_profile(query).ok_or_else(|| {
            AppError::not_found("Intake profile").with_details(json!({
                "age_years": query.age_years,
                "sex": query.sex.to_string(),
                "is_pregnant": query.is_pregnant,
                "is_lactating": query.is_lactating,
            }))
        })?;

        let rdis = self.named_values(&entry.rdi);
        let uls = self.named_values(&entry.ul);

        let mut target = Vec::with_capacity(self.catalog.len());
        let mut upper_limit = Vec::with_capacity(self.catalog.len());
        for definition in self.catalog.definitions() {
            if definition.id == self.config.energy_nutrient_id {
                target.push(Some(self.config.energy_target));
                upper_limit.push(Some(self.config.energy_upper_limit));
                continue;
            }

            let scale = self.config.unit_scale(definition.id);
            let rdi = rdis.get(&definition.id).copied().flatten();
            let ul = match uls.get(&definition.id) {
                Some(Some(value)) => Some(*value),
                _ => self.tables.global_upper_limit(definition.id),
            };

            if ul.is_none() {
                debug!(
                    nutrient_id = definition.id,
                    nutrient = %definition.name,
                    "No upper limit after global merge"
                );
            }

            target.push(rdi.map(|value| value * scale));
            upper_limit.push(ul.map(|value| value * scale));
        }

        info!(
            life_stage = ?entry.profile.life_stage_group,
            age_years = query.age_years,
            targets = target.iter().flatten().count(),
            upper_limits = upper_limit.iter().flatten().count(),
            "Resolved intake profile"
        );

        IntakeProfile::new(entry.profile.life_stage_group, target, upper_limit)
    }

    /// Map name-keyed reference values to nutrient ids
    ///
    /// Names outside the mapping table are dropped. When two names map to the
    /// same id the alphabetically first name wins.
    fn named_values(
        &self,
        entries: &BTreeMap<String, Option<f64>>,
    ) -> HashMap<NutrientId, Option<f64>> {
        let mut values = HashMap::with_capacity(entries.len());
        for (name, value) in entries {
            if let Some(id) = self.tables.nutrient_id_for(name) {
                values.entry(id).or_insert(*value);
            }
        }
        values
    }
}
