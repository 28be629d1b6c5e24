//! Target weight resolution.
//!
//! Uses the user's target when given. Otherwise estimates a healthy weight
//! from a reference BMI, scaled per gender, rounded to a whole number in the
//! display unit.

use crate::config::TargetConfig;
use crate::types::{Gender, ResolvedTarget, WeightUnit};
use crate::units::{to_kg, LB_PER_KG};

/// Healthy-weight estimate in the display unit, rounded to a whole number
pub fn healthy_weight(
    height_cm: f64,
    gender: Gender,
    unit: WeightUnit,
    params: &TargetConfig,
) -> f64 {
    let height_m = height_cm / 100.0;
    let reference_kg = params.reference_bmi * height_m * height_m;
    let healthy_kg = match gender {
        Gender::Male => reference_kg * params.male_factor,
        Gender::Female => reference_kg * params.female_factor,
    };

    match unit {
        WeightUnit::Kg => healthy_kg.round(),
        WeightUnit::Lb => (healthy_kg * LB_PER_KG).round(),
    }
}

/// Resolve the target weight for a projection
pub fn resolve(
    height_cm: f64,
    gender: Gender,
    unit: WeightUnit,
    user_target: Option<f64>,
    params: &TargetConfig,
) -> ResolvedTarget {
    let (weight, is_healthy_estimate) = match user_target {
        Some(target) => (target, false),
        None => (healthy_weight(height_cm, gender, unit, params), true),
    };

    tracing::debug!(weight, is_healthy_estimate, "Resolved target weight");

    ResolvedTarget {
        weight,
        weight_kg: to_kg(weight, unit),
        is_healthy_estimate,
    }
}
