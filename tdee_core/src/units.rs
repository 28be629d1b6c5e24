//! Unit normalization.
//!
//! Converts entered measurements into kilograms and centimeters, and back
//! into the display unit for projected weights.

use crate::config::ActivityConfig;
use crate::types::{Height, NormalizedProfile, ProfileInput, WeightUnit};

/// Kilograms in one pound
pub const KG_PER_LB: f64 = 0.453592;

/// Pounds in one kilogram, used when presenting the healthy-weight estimate
pub const LB_PER_KG: f64 = 2.20462;

/// Centimeters in one inch
pub const CM_PER_IN: f64 = 2.54;

/// Convert a weight in `unit` to kilograms
pub fn to_kg(weight: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kg => weight,
        WeightUnit::Lb => weight * KG_PER_LB,
    }
}

/// Convert kilograms back to `unit`.
///
/// Exact inverse of `to_kg`, so a kilogram round trip stays on the entered value.
pub fn from_kg(kg: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kg => kg,
        WeightUnit::Lb => kg / KG_PER_LB,
    }
}

/// Height in centimeters
pub fn height_cm(height: &Height) -> f64 {
    match *height {
        Height::Cm { value } => value,
        Height::In { value } => value * CM_PER_IN,
        Height::Ft { feet, inches } => (feet * 12.0 + inches) * CM_PER_IN,
    }
}

/// Round to one decimal place, half away from zero
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Produce the canonical-unit profile for the energy estimator
pub fn normalize(profile: &ProfileInput, activity: &ActivityConfig) -> NormalizedProfile {
    let normalized = NormalizedProfile {
        weight_kg: to_kg(profile.weight, profile.weight_unit),
        height_cm: height_cm(&profile.height),
        age: profile.age,
        gender: profile.gender,
        activity_multiplier: activity.multiplier(profile.activity_level),
    };

    tracing::debug!(
        weight_kg = normalized.weight_kg,
        height_cm = normalized.height_cm,
        multiplier = normalized.activity_multiplier,
        "Normalized profile"
    );

    normalized
}
