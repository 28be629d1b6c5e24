//! Energy estimation (BMR and TDEE).
//!
//! BMR follows the Mifflin-St Jeor equation. TDEE multiplies the unrounded
//! BMR by the activity multiplier, and the cutting and bulking regimes scale
//! the unrounded TDEE. Rounding to whole calories happens only on output,
//! half away from zero.

use crate::config::RegimeConfig;
use crate::types::{EnergyEstimate, Gender, NormalizedProfile};

/// Basal metabolic rate in kcal/day, unrounded
pub fn basal_metabolic_rate(profile: &NormalizedProfile) -> f64 {
    let base = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age);
    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

fn whole_calories(kcal: f64) -> i64 {
    kcal.round() as i64
}

/// Compute the daily energy figures for a normalized profile
pub fn estimate(profile: &NormalizedProfile, regimes: &RegimeConfig) -> EnergyEstimate {
    let bmr = basal_metabolic_rate(profile);
    let tdee = bmr * profile.activity_multiplier;

    let estimate = EnergyEstimate {
        bmr: whole_calories(bmr),
        tdee: whole_calories(tdee),
        cutting: whole_calories(tdee * regimes.cutting_factor),
        maintenance: whole_calories(tdee),
        bulking: whole_calories(tdee * regimes.bulking_factor),
    };

    tracing::debug!(bmr, tdee, "Estimated energy expenditure");
    estimate
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(gender: Gender, weight_kg: f64, height_cm: f64, age: u32, multiplier: f64) -> NormalizedProfile {
        NormalizedProfile {
            weight_kg,
            height_cm,
            age,
            gender,
            activity_multiplier: multiplier,
        }
    }

    #[test]
    fn test_mifflin_st_jeor_male() {
        let p = profile(Gender::Male, 70.0, 170.0, 30, 1.55);
        assert_eq!(basal_metabolic_rate(&p), 1617.5);
    }

    #[test]
    fn test_mifflin_st_jeor_female() {
        let p = profile(Gender::Female, 60.0, 165.0, 25, 1.2);
        assert_eq!(basal_metabolic_rate(&p), 1345.25);
    }

    #[test]
    fn test_tdee_uses_unrounded_bmr() {
        // 1617.5 * 1.55 = 2507.125; rounding BMR first would give 1618 * 1.55 = 2507.9 -> 2508
        let p = profile(Gender::Male, 70.0, 170.0, 30, 1.55);
        let e = estimate(&p, &RegimeConfig::default());

        assert_eq!(e.bmr, 1618);
        assert_eq!(e.tdee, 2507);
        assert_eq!(e.maintenance, 2507);
        assert_eq!(e.cutting, 2006);
        assert_eq!(e.bulking, 2758);
    }

    #[test]
    fn test_female_sedentary_estimate() {
        let p = profile(Gender::Female, 60.0, 165.0, 25, 1.2);
        let e = estimate(&p, &RegimeConfig::default());

        assert_eq!(e.bmr, 1345);
        assert_eq!(e.tdee, 1614);
        assert_eq!(e.cutting, 1291);
        assert_eq!(e.bulking, 1776);
    }

    #[test]
    fn test_regimes_strictly_ordered() {
        let regimes = RegimeConfig::default();
        for gender in [Gender::Male, Gender::Female] {
            for age in [15, 45, 100] {
                for multiplier in [1.2, 1.375, 1.55, 1.725, 1.9] {
                    let e = estimate(&profile(gender, 30.0, 100.0, age, multiplier), &regimes);
                    assert!(e.tdee > 0);
                    assert!(e.cutting < e.maintenance, "{:?}", e);
                    assert!(e.maintenance < e.bulking, "{:?}", e);
                }
            }
        }
    }
}
