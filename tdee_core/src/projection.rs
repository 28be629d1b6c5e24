//! Weight trajectory projection.
//!
//! Projects body weight week by week under the cutting, maintenance and
//! bulking regimes, using a fixed energy density for body mass change.
//!
//! ## Horizon
//!
//! The projection always covers at least `default_weeks` (12) weeks. With a
//! target set, weeks-to-target is estimated from both the cutting and the
//! bulking rate and the horizon is extended to the larger estimate, rounded
//! up, so at least one line visibly reaches the target. The horizon is
//! capped at `max_weeks`.
//!
//! ## Weeks to target
//!
//! Measured from the projected (rounded) points rather than the theoretical
//! rate: the week 0 to week 1 change of whichever regime moves toward the
//! target. A rate of zero or less leaves the estimate unset.

use crate::config::{CompositionConfig, ProjectionConfig, MIN_PROJECTION_WEEKS};
use crate::types::{
    CompositionEstimate, EnergyEstimate, PeriodSummary, Regime, Trajectory, TrajectoryPoint,
    WeeksToTarget, WeightUnit,
};
use crate::units::{from_kg, round_to_tenth, to_kg};

/// Weeks reported in period summaries
pub const SUMMARY_WEEKS: [u32; 3] = [4, 8, 12];

const DAYS_PER_WEEK: f64 = 7.0;

/// Weekly mass change in kg for a daily calorie difference
fn weekly_change_kg(daily_kcal: i64, kcal_per_kg: f64) -> f64 {
    daily_kcal as f64 * DAYS_PER_WEEK / kcal_per_kg
}

fn horizon(start_kg: f64, target_kg: Option<f64>, rates: [f64; 2], params: &ProjectionConfig) -> u32 {
    let mut weeks = f64::from(params.default_weeks);

    if let Some(target_kg) = target_kg {
        let distance = (start_kg - target_kg).abs();
        for rate in rates.into_iter().filter(|r| *r > 0.0) {
            weeks = weeks.max(distance / rate);
        }
    }

    let weeks = weeks.ceil();
    if weeks > f64::from(params.max_weeks) {
        tracing::warn!(
            "Projection of {} weeks exceeds limit, capping at {}",
            weeks,
            params.max_weeks
        );
        return params.max_weeks;
    }

    weeks as u32
}

/// Project the three regime lines plus the optional target line
pub fn project(
    starting_weight: f64,
    unit: WeightUnit,
    energy: &EnergyEstimate,
    target_weight: Option<f64>,
    params: &ProjectionConfig,
) -> Trajectory {
    let start_kg = to_kg(starting_weight, unit);
    let target_kg = target_weight.map(|t| to_kg(t, unit));

    let weekly_loss = weekly_change_kg(energy.tdee - energy.cutting, params.kcal_per_kg);
    let weekly_gain = weekly_change_kg(energy.bulking - energy.tdee, params.kcal_per_kg);

    let weeks = horizon(start_kg, target_kg, [weekly_loss, weekly_gain], params);
    tracing::debug!(weekly_loss, weekly_gain, weeks, "Projecting trajectory");

    let point = |week: u32, kg: f64| TrajectoryPoint {
        week,
        weight: round_to_tenth(from_kg(kg, unit)),
    };

    let mut trajectory = Trajectory {
        cutting: Vec::with_capacity(weeks as usize + 1),
        maintenance: Vec::with_capacity(weeks as usize + 1),
        bulking: Vec::with_capacity(weeks as usize + 1),
        target: target_weight.map(|_| Vec::with_capacity(weeks as usize + 1)),
    };

    for week in 0..=weeks {
        let elapsed = f64::from(week);
        trajectory.cutting.push(point(week, start_kg - weekly_loss * elapsed));
        trajectory.maintenance.push(point(week, start_kg));
        trajectory.bulking.push(point(week, start_kg + weekly_gain * elapsed));

        if let (Some(line), Some(weight)) = (trajectory.target.as_mut(), target_weight) {
            line.push(TrajectoryPoint { week, weight });
        }
    }

    trajectory
}

/// Change between the first two points of a line, rounded like the points
fn first_week_change(line: &[TrajectoryPoint]) -> Option<f64> {
    match line {
        [first, second, ..] => Some(round_to_tenth(second.weight - first.weight)),
        _ => None,
    }
}

fn weeks_needed(distance: f64, weekly_change: Option<f64>, regime: &str) -> Option<u32> {
    match weekly_change {
        Some(change) if change > 0.0 => Some((distance / change).ceil() as u32),
        _ => {
            tracing::warn!(
                "{} regime does not move toward the target; no weeks-to-target estimate",
                regime
            );
            None
        }
    }
}

/// Estimate how many weeks the relevant regime needs to reach the target
pub fn weeks_to_target(
    starting_weight: f64,
    target_weight: Option<f64>,
    trajectory: &Trajectory,
) -> WeeksToTarget {
    let Some(target) = target_weight else {
        return WeeksToTarget::default();
    };
    let distance = (starting_weight - target).abs();

    if target < starting_weight {
        let loss = first_week_change(&trajectory.cutting).map(|c| -c);
        WeeksToTarget {
            cutting: weeks_needed(distance, loss, "cutting"),
            bulking: None,
        }
    } else if target > starting_weight {
        let gain = first_week_change(&trajectory.bulking);
        WeeksToTarget {
            cutting: None,
            bulking: weeks_needed(distance, gain, "bulking"),
        }
    } else {
        WeeksToTarget::default()
    }
}

/// Difference from the starting weight at the summary weeks
pub fn period_summaries(starting_weight: f64, trajectory: &Trajectory) -> Vec<PeriodSummary> {
    let delta = |line: &[TrajectoryPoint], week: u32| {
        line.get(week as usize)
            .map(|p| round_to_tenth(p.weight - starting_weight))
    };

    SUMMARY_WEEKS
        .iter()
        .filter_map(|&week| {
            Some(PeriodSummary {
                week,
                cutting: delta(&trajectory.cutting, week)?,
                maintenance: delta(&trajectory.maintenance, week)?,
                bulking: delta(&trajectory.bulking, week)?,
            })
        })
        .collect()
}

/// Split the week-12 change of each regime into fat and lean mass.
///
/// Maintenance is reported as no change. Returns nothing when the
/// trajectory is shorter than 12 weeks.
pub fn composition_breakdown(
    starting_weight: f64,
    trajectory: &Trajectory,
    shares: &CompositionConfig,
) -> Vec<CompositionEstimate> {
    let week = MIN_PROJECTION_WEEKS as usize;
    let (Some(cut), Some(bulk)) = (trajectory.cutting.get(week), trajectory.bulking.get(week)) else {
        return Vec::new();
    };

    let split = |plan: Regime, change: f64, fat: f64, lean: f64| CompositionEstimate {
        plan,
        fat: round_to_tenth(change * fat),
        lean: round_to_tenth(change * lean),
    };

    vec![
        split(
            Regime::Cutting,
            cut.weight - starting_weight,
            shares.cutting_fat,
            shares.cutting_lean,
        ),
        split(Regime::Maintenance, 0.0, 0.0, 0.0),
        split(
            Regime::Bulking,
            bulk.weight - starting_weight,
            shares.bulking_fat,
            shares.bulking_lean,
        ),
    ]
}
