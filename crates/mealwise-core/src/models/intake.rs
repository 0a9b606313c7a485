// ABOUTME: Demographic reference tables and resolved per-person intake profiles
// ABOUTME: Sex, LifeStageGroup, age brackets, global upper limits, and IntakeProfile vectors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::nutrient::{ensure_same_axis, NutrientCatalog, NutrientId};
use crate::constants::ALWAYS_LISTED_NUTRIENTS;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// Biological sex used to select a demographic profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Male
    #[serde(rename = "M")]
    Male,
    /// Female
    #[serde(rename = "F")]
    Female,
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "m" | "male" => Ok(Self::Male),
            "f" | "female" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Sex must be M or F, got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => f.write_str("M"),
            Self::Female => f.write_str("F"),
        }
    }
}

/// Demographic bucket a reference profile applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeStageGroup {
    /// Infants
    Infant,
    /// Children of either sex
    Child,
    /// Males
    Male,
    /// Non-pregnant, non-lactating females
    Female,
    /// Pregnant females
    Pregnant,
    /// Lactating females
    Lactating,
}

/// Age interval and life stage covered by a reference profile
///
/// The interval is half-open, `[min, max)`, with each bound combining a month
/// part and a year part. An unset maximum year means no upper bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeBracket {
    /// Month component of the lower bound
    #[serde(default)]
    pub min_age_months: f64,
    /// Year component of the lower bound
    #[serde(default)]
    pub min_age_years: f64,
    /// Month component of the upper bound
    #[serde(default)]
    pub max_age_months: f64,
    /// Year component of the upper bound; `None` leaves the interval open-ended
    #[serde(default)]
    pub max_age_years: Option<f64>,
    /// Life stage this bracket belongs to
    pub life_stage_group: LifeStageGroup,
}

impl AgeBracket {
    /// Inclusive lower bound in years
    #[must_use]
    pub fn min_years(&self) -> f64 {
        self.min_age_months / 12.0 + self.min_age_years
    }

    /// Exclusive upper bound in years, `None` when unbounded
    #[must_use]
    pub fn max_years(&self) -> Option<f64> {
        self.max_age_years
            .map(|years| self.max_age_months / 12.0 + years)
    }

    /// Whether `age_years` falls inside `[min, max)`
    #[must_use]
    pub fn contains(&self, age_years: f64) -> bool {
        age_years >= self.min_years() && self.max_years().is_none_or(|max| age_years < max)
    }
}

/// One row of the demographic reference table
///
/// RDI and UL entries are keyed by reference-table nutrient names; a `null`
/// value means the source publishes no figure for that nutrient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicProfile {
    /// Age interval and life stage
    pub profile: AgeBracket,
    /// Recommended daily intakes by nutrient name
    #[serde(rename = "RDI", default)]
    pub rdi: BTreeMap<String, Option<f64>>,
    /// Upper limits by nutrient name
    #[serde(rename = "UL", default)]
    pub ul: BTreeMap<String, Option<f64>>,
}

/// Fallback upper limit for a nutrient, independent of demographics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalUpperLimit {
    /// Nutrient id
    pub id: NutrientId,
    /// Upper limit in catalog units
    pub value: f64,
}

/// Reference tables consumed by the intake profile resolver
///
/// Built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    profiles: Vec<DemographicProfile>,
    name_mapping: BTreeMap<String, NutrientId>,
    global_upper_limits: HashMap<NutrientId, f64>,
}

impl ReferenceTables {
    /// Assemble the tables
    ///
    /// # Errors
    ///
    /// Returns a data-integrity error if a global upper limit is listed twice
    pub fn new(
        profiles: Vec<DemographicProfile>,
        name_mapping: BTreeMap<String, NutrientId>,
        global_upper_limits: Vec<GlobalUpperLimit>,
    ) -> AppResult<Self> {
        let mut limits = HashMap::with_capacity(global_upper_limits.len());
        for limit in global_upper_limits {
            if limits.insert(limit.id, limit.value).is_some() {
                return Err(AppError::data_integrity(format!(
                    "Global upper limit for nutrient {} is listed more than once",
                    limit.id
                ))
                .with_details(json!({ "nutrient_id": limit.id })));
            }
        }
        Ok(Self {
            profiles,
            name_mapping,
            global_upper_limits: limits,
        })
    }

    /// Demographic rows in table order
    #[must_use]
    pub fn profiles(&self) -> &[DemographicProfile] {
        &self.profiles
    }

    /// Nutrient id for a reference-table nutrient name
    #[must_use]
    pub fn nutrient_id_for(&self, name: &str) -> Option<NutrientId> {
        self.name_mapping.get(name).copied()
    }

    /// Fallback upper limit for a nutrient
    #[must_use]
    pub fn global_upper_limit(&self, id: NutrientId) -> Option<f64> {
        self.global_upper_limits.get(&id).copied()
    }
}

/// Resolved daily targets and upper limits over the catalog axis
///
/// `None` slots mean "no constraint", never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeProfile {
    /// Life stage of the reference row the profile was resolved from
    pub life_stage: LifeStageGroup,
    target: Vec<Option<f64>>,
    upper_limit: Vec<Option<f64>>,
}

/// One line of the human-readable target table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSummaryRow {
    /// Nutrient id
    pub id: NutrientId,
    /// Nutrient name
    pub name: String,
    /// Unit of both values
    pub unit: String,
    /// Daily target, if any
    pub target: Option<f64>,
    /// Daily upper limit, if any
    pub upper_limit: Option<f64>,
}

impl IntakeProfile {
    /// Build a profile from axis-aligned target and limit slots
    ///
    /// # Errors
    ///
    /// Returns a data-integrity error if the two vectors differ in length
    pub fn new(
        life_stage: LifeStageGroup,
        target: Vec<Option<f64>>,
        upper_limit: Vec<Option<f64>>,
    ) -> AppResult<Self> {
        ensure_same_axis(target.len(), upper_limit.len())?;
        Ok(Self {
            life_stage,
            target,
            upper_limit,
        })
    }

    /// Axis length
    #[must_use]
    pub fn len(&self) -> usize {
        self.target.len()
    }

    /// Whether the profile covers no nutrients
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    /// Daily targets in axis order
    #[must_use]
    pub fn target(&self) -> &[Option<f64>] {
        &self.target
    }

    /// Upper limits in axis order
    #[must_use]
    pub fn upper_limit(&self) -> &[Option<f64>] {
        &self.upper_limit
    }

    /// Target table in catalog order
    ///
    /// Nutrients with neither a target nor a limit are left out, except those
    /// in [`ALWAYS_LISTED_NUTRIENTS`].
    #[must_use]
    pub fn summary(&self, catalog: &NutrientCatalog) -> Vec<TargetSummaryRow> {
        catalog
            .definitions()
            .iter()
            .zip(self.target.iter().zip(&self.upper_limit))
            .filter(|(definition, (target, upper_limit))| {
                target.is_some()
                    || upper_limit.is_some()
                    || ALWAYS_LISTED_NUTRIENTS.contains(&definition.id)
            })
            .map(|(definition, (target, upper_limit))| TargetSummaryRow {
                id: definition.id,
                name: definition.name.clone(),
                unit: definition.unit.clone(),
                target: *target,
                upper_limit: *upper_limit,
            })
            .collect()
    }
}
