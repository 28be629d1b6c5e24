//! Projection engine.
//!
//! Runs the four stages in order for one profile:
//! 1. Normalize units (kg, cm)
//! 2. Estimate BMR, TDEE and the calorie regimes
//! 3. Resolve the target weight (user-supplied or healthy estimate)
//! 4. Project trajectories and weeks-to-target
//!
//! The engine holds only immutable configuration, so one instance can serve
//! any number of threads.

use crate::config::{default_config, Config};
use crate::types::{Calculation, ProfileInput, RawProfile};
use crate::{energy, projection, target, units, Result};

/// A configured projection engine
#[derive(Clone, Debug)]
pub struct Engine {
    config: Config,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            config: default_config().clone(),
        }
    }
}

impl Engine {
    /// Build an engine from a configuration, rejecting unusable factors
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate a raw submission and calculate it
    pub fn calculate_raw(&self, raw: RawProfile) -> Result<Calculation> {
        let profile = ProfileInput::from_raw(raw)?;
        Ok(self.calculate(&profile))
    }

    /// Calculate energy figures, target and projections for a valid profile
    pub fn calculate(&self, profile: &ProfileInput) -> Calculation {
        let normalized = units::normalize(profile, &self.config.activity);
        let energy = energy::estimate(&normalized, &self.config.regimes);

        let target = target::resolve(
            normalized.height_cm,
            profile.gender,
            profile.weight_unit,
            profile.target_weight,
            &self.config.target,
        );

        let trajectory = projection::project(
            profile.weight,
            profile.weight_unit,
            &energy,
            Some(target.weight),
            &self.config.projection,
        );
        let weeks_to_target =
            projection::weeks_to_target(profile.weight, Some(target.weight), &trajectory);
        let summaries = projection::period_summaries(profile.weight, &trajectory);
        let composition = projection::composition_breakdown(
            profile.weight,
            &trajectory,
            &self.config.composition,
        );

        tracing::info!(
            bmr = energy.bmr,
            tdee = energy.tdee,
            weeks = trajectory.horizon(),
            "Calculated projection"
        );

        Calculation {
            starting_weight: profile.weight,
            weight_unit: profile.weight_unit,
            energy,
            target,
            trajectory,
            weeks_to_target,
            summaries,
            composition,
        }
    }
}

/// Calculate with the default configuration
pub fn calculate(profile: &ProfileInput) -> Calculation {
    Engine::default().calculate(profile)
}
