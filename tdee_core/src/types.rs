//! Core domain types for the TDEE projection engine.
//!
//! This module defines the fundamental types used throughout the system:
//! - Profile enums (gender, units, activity level)
//! - Raw and validated profile input
//! - Derived estimates, targets and trajectories
//! - The aggregated calculation result

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Profile Enums
// ============================================================================

/// Biological sex used by the Mifflin-St Jeor equation
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

/// Unit the user enters (and reads back) body weight in
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    #[default]
    Kg,
    #[serde(alias = "lbs")]
    Lb,
}

/// Unit the user enters height in
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum HeightUnit {
    #[default]
    Cm,
    In,
    Ft,
}

/// Habitual activity level, mapped to a TDEE multiplier by configuration
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    #[serde(alias = "very_active")]
    VeryActive,
}

impl ActivityLevel {
    /// All levels, least to most active
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Short human description of the level
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Active => "Hard exercise 6-7 days/week",
            ActivityLevel::VeryActive => "Very hard exercise & physical job or 2x training",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very-active",
        }
    }
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lb => "lb",
        }
    }
}

impl HeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeightUnit::Cm => "cm",
            HeightUnit::In => "in",
            HeightUnit::Ft => "ft",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(Gender, WeightUnit, HeightUnit, ActivityLevel);

fn unknown(field: &'static str, value: &str) -> ValidationError {
    ValidationError::UnknownValue {
        field,
        value: value.to_string(),
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(unknown("gender", s)),
        }
    }
}

impl FromStr for WeightUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" => Ok(WeightUnit::Kg),
            "lb" | "lbs" => Ok(WeightUnit::Lb),
            _ => Err(unknown("weight unit", s)),
        }
    }
}

impl FromStr for HeightUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cm" => Ok(HeightUnit::Cm),
            "in" => Ok(HeightUnit::In),
            "ft" => Ok(HeightUnit::Ft),
            _ => Err(unknown("height unit", s)),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very-active" | "very_active" => Ok(ActivityLevel::VeryActive),
            _ => Err(unknown("activity level", s)),
        }
    }
}

// ============================================================================
// Profile Input
// ============================================================================

/// Height as entered, in exactly one representation
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "unit", rename_all = "snake_case")]
pub enum Height {
    Cm { value: f64 },
    In { value: f64 },
    Ft { feet: f64, inches: f64 },
}

/// A form submission as it arrives, before validation.
///
/// Every height field is optional; which one is required depends on
/// `height_unit`. Convert with `ProfileInput::try_from`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct RawProfile {
    pub gender: Option<Gender>,
    pub age: Option<u32>,
    pub weight: Option<f64>,
    #[serde(default)]
    pub weight_unit: WeightUnit,
    #[serde(default)]
    pub height_unit: HeightUnit,
    pub height_cm: Option<f64>,
    pub height_in: Option<f64>,
    pub height_ft: Option<f64>,
    pub height_ft_in: Option<f64>,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    pub target_weight: Option<f64>,
}

/// A validated profile.
///
/// Normally built with `ProfileInput::try_from(RawProfile)`; building one
/// directly skips the range checks.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ProfileInput {
    pub gender: Gender,
    pub age: u32,
    pub weight: f64,
    pub weight_unit: WeightUnit,
    pub height: Height,
    pub activity_level: ActivityLevel,
    pub target_weight: Option<f64>,
}

/// Canonical-unit view of a profile used by the energy estimator
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub gender: Gender,
    pub activity_multiplier: f64,
}

// ============================================================================
// Derived Results
// ============================================================================

/// Daily calorie figures, rounded to whole calories
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnergyEstimate {
    pub bmr: i64,
    pub tdee: i64,
    pub cutting: i64,
    pub maintenance: i64,
    pub bulking: i64,
}

/// Target weight, either user-supplied or a healthy-weight estimate
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ResolvedTarget {
    /// Target in the display unit
    pub weight: f64,
    pub weight_kg: f64,
    pub is_healthy_estimate: bool,
}

/// A single projected weight, in the display unit
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrajectoryPoint {
    pub week: u32,
    pub weight: f64,
}

/// Week-by-week weight lines for each calorie regime
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Trajectory {
    pub cutting: Vec<TrajectoryPoint>,
    pub maintenance: Vec<TrajectoryPoint>,
    pub bulking: Vec<TrajectoryPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Vec<TrajectoryPoint>>,
}

impl Trajectory {
    /// Last week index in the projection
    pub fn horizon(&self) -> u32 {
        self.maintenance.last().map(|p| p.week).unwrap_or(0)
    }

    /// The first `weeks + 1` points of every line (weeks 0..=weeks)
    pub fn window(&self, weeks: u32) -> Trajectory {
        let take = weeks as usize + 1;
        let cut = |line: &[TrajectoryPoint]| -> Vec<TrajectoryPoint> {
            line.iter().take(take).copied().collect()
        };

        Trajectory {
            cutting: cut(&self.cutting),
            maintenance: cut(&self.maintenance),
            bulking: cut(&self.bulking),
            target: self.target.as_deref().map(cut),
        }
    }
}

/// Estimated weeks needed to reach the target. At most one is set.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct WeeksToTarget {
    pub cutting: Option<u32>,
    pub bulking: Option<u32>,
}

impl WeeksToTarget {
    /// Whichever estimate is populated
    pub fn weeks(&self) -> Option<u32> {
        self.cutting.or(self.bulking)
    }

    /// True when the estimate lies past the given projection window
    pub fn extends_beyond(&self, weeks: u32) -> bool {
        self.weeks().is_some_and(|w| w > weeks)
    }
}

/// Change from the starting weight after a number of weeks, per regime
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct PeriodSummary {
    pub week: u32,
    pub cutting: f64,
    pub maintenance: f64,
    pub bulking: f64,
}

/// Calorie regime a projection line follows
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    Cutting,
    Maintenance,
    Bulking,
}

impl Regime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Regime::Cutting => "cutting",
            Regime::Maintenance => "maintenance",
            Regime::Bulking => "bulking",
        }
    }
}

display_as_str!(Regime);

/// Rough split of a regime's week-12 change into fat and lean mass
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct CompositionEstimate {
    pub plan: Regime,
    pub fat: f64,
    pub lean: f64,
}

/// Everything computed for one profile submission
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Calculation {
    pub starting_weight: f64,
    pub weight_unit: WeightUnit,
    pub energy: EnergyEstimate,
    pub target: ResolvedTarget,
    pub trajectory: Trajectory,
    pub weeks_to_target: WeeksToTarget,
    pub summaries: Vec<PeriodSummary>,
    pub composition: Vec<CompositionEstimate>,
}
