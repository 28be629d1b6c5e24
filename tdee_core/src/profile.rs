//! Profile validation.
//!
//! Turns a `RawProfile` form submission into a `ProfileInput`, rejecting
//! missing height fields and out-of-range numbers before any computation.

use crate::error::ValidationError;
use crate::types::{Height, HeightUnit, ProfileInput, RawProfile};

const AGE_RANGE: (f64, f64) = (15.0, 100.0);
const WEIGHT_RANGE: (f64, f64) = (30.0, 300.0);
const HEIGHT_CM_RANGE: (f64, f64) = (100.0, 250.0);
const HEIGHT_IN_RANGE: (f64, f64) = (1.0, 120.0);
const HEIGHT_FT_RANGE: (f64, f64) = (1.0, 8.0);
const HEIGHT_FT_IN_RANGE: (f64, f64) = (0.0, 11.0);

fn check(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { field });
    }
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Missing { field })
}

fn resolve_height(raw: &RawProfile) -> Result<Height, ValidationError> {
    let unit = raw.height_unit;
    let missing = || ValidationError::MissingHeight { unit };

    let height = match unit {
        HeightUnit::Cm => Height::Cm {
            value: check("height_cm", raw.height_cm.ok_or_else(missing)?, HEIGHT_CM_RANGE)?,
        },
        HeightUnit::In => Height::In {
            value: check("height_in", raw.height_in.ok_or_else(missing)?, HEIGHT_IN_RANGE)?,
        },
        HeightUnit::Ft => {
            let feet = check("height_ft", raw.height_ft.ok_or_else(missing)?, HEIGHT_FT_RANGE)?;
            // Only the feet field is mandatory; an empty inches field means 0.
            let inches = check(
                "height_ft_in",
                raw.height_ft_in.unwrap_or(0.0),
                HEIGHT_FT_IN_RANGE,
            )?;
            Height::Ft { feet, inches }
        }
    };

    Ok(height)
}

impl TryFrom<RawProfile> for ProfileInput {
    type Error = ValidationError;

    fn try_from(raw: RawProfile) -> Result<Self, Self::Error> {
        let gender = required("gender", raw.gender)?;
        let age = required("age", raw.age)?;
        check("age", f64::from(age), AGE_RANGE)?;
        let weight = check("weight", required("weight", raw.weight)?, WEIGHT_RANGE)?;
        let height = resolve_height(&raw)?;
        let target_weight = raw
            .target_weight
            .map(|t| check("target_weight", t, WEIGHT_RANGE))
            .transpose()?;

        Ok(ProfileInput {
            gender,
            age,
            weight,
            weight_unit: raw.weight_unit,
            height,
            activity_level: raw.activity_level,
            target_weight,
        })
    }
}

impl ProfileInput {
    /// Validate a raw submission
    pub fn from_raw(raw: RawProfile) -> crate::Result<Self> {
        Ok(Self::try_from(raw)?)
    }
}
