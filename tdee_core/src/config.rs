//! Configuration file support for the TDEE engine.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/tdee/config.toml`.
//! Every section falls back to the built-in tables, so partial files work.

use crate::{ActivityLevel, Error, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Shortest projection the engine may produce; summaries read weeks 4, 8, 12
pub const MIN_PROJECTION_WEEKS: u32 = 12;

/// Cached default configuration, shared by every default-built engine
static DEFAULT_CONFIG: Lazy<Config> = Lazy::new(Config::default);

/// Get a reference to the cached default configuration
pub fn default_config() -> &'static Config {
    &DEFAULT_CONFIG
}

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub activity: ActivityConfig,

    #[serde(default)]
    pub regimes: RegimeConfig,

    #[serde(default)]
    pub projection: ProjectionConfig,

    #[serde(default)]
    pub target: TargetConfig,

    #[serde(default)]
    pub composition: CompositionConfig,
}

/// TDEE multiplier per activity level
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ActivityConfig {
    #[serde(default = "default_sedentary")]
    pub sedentary: f64,

    #[serde(default = "default_light")]
    pub light: f64,

    #[serde(default = "default_moderate")]
    pub moderate: f64,

    #[serde(default = "default_active")]
    pub active: f64,

    #[serde(default = "default_very_active")]
    pub very_active: f64,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            sedentary: default_sedentary(),
            light: default_light(),
            moderate: default_moderate(),
            active: default_active(),
            very_active: default_very_active(),
        }
    }
}

impl ActivityConfig {
    pub fn multiplier(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }
}

/// Calorie regimes relative to TDEE
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RegimeConfig {
    #[serde(default = "default_cutting_factor")]
    pub cutting_factor: f64,

    #[serde(default = "default_bulking_factor")]
    pub bulking_factor: f64,
}

impl Default for RegimeConfig {
    fn default() -> Self {
        Self {
            cutting_factor: default_cutting_factor(),
            bulking_factor: default_bulking_factor(),
        }
    }
}

/// Trajectory projection parameters
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProjectionConfig {
    #[serde(default = "default_weeks")]
    pub default_weeks: u32,

    #[serde(default = "default_max_weeks")]
    pub max_weeks: u32,

    /// Energy density of body mass change
    #[serde(default = "default_kcal_per_kg")]
    pub kcal_per_kg: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            default_weeks: default_weeks(),
            max_weeks: default_max_weeks(),
            kcal_per_kg: default_kcal_per_kg(),
        }
    }
}

/// Healthy-weight estimate parameters
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TargetConfig {
    #[serde(default = "default_reference_bmi")]
    pub reference_bmi: f64,

    #[serde(default = "default_male_factor")]
    pub male_factor: f64,

    #[serde(default = "default_female_factor")]
    pub female_factor: f64,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            reference_bmi: default_reference_bmi(),
            male_factor: default_male_factor(),
            female_factor: default_female_factor(),
        }
    }
}

/// Share of a weight change attributed to fat versus lean mass
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CompositionConfig {
    #[serde(default = "default_cutting_fat")]
    pub cutting_fat: f64,

    #[serde(default = "default_cutting_lean")]
    pub cutting_lean: f64,

    #[serde(default = "default_bulking_fat")]
    pub bulking_fat: f64,

    #[serde(default = "default_bulking_lean")]
    pub bulking_lean: f64,
}

impl Default for CompositionConfig {
    fn default() -> Self {
        Self {
            cutting_fat: default_cutting_fat(),
            cutting_lean: default_cutting_lean(),
            bulking_fat: default_bulking_fat(),
            bulking_lean: default_bulking_lean(),
        }
    }
}

// Default value functions
fn default_sedentary() -> f64 {
    1.2
}

fn default_light() -> f64 {
    1.375
}

fn default_moderate() -> f64 {
    1.55
}

fn default_active() -> f64 {
    1.725
}

fn default_very_active() -> f64 {
    1.9
}

fn default_cutting_factor() -> f64 {
    0.8
}

fn default_bulking_factor() -> f64 {
    1.1
}

fn default_weeks() -> u32 {
    MIN_PROJECTION_WEEKS
}

fn default_max_weeks() -> u32 {
    520
}

fn default_kcal_per_kg() -> f64 {
    7700.0
}

fn default_reference_bmi() -> f64 {
    22.0
}

fn default_male_factor() -> f64 {
    1.07
}

fn default_female_factor() -> f64 {
    0.95
}

fn default_cutting_fat() -> f64 {
    0.8
}

fn default_cutting_lean() -> f64 {
    0.2
}

fn default_bulking_fat() -> f64 {
    0.3
}

fn default_bulking_lean() -> f64 {
    0.7
}

fn home_dir_fallback(relative: &str) -> PathBuf {
    // HOME can be unset in service environments; fall back to the cwd.
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(relative)
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path and validate it
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| home_dir_fallback(".config"));
        base.join("tdee").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Render as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Check that every factor is usable by the engine
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("activity.sedentary", self.activity.sedentary),
            ("activity.light", self.activity.light),
            ("activity.moderate", self.activity.moderate),
            ("activity.active", self.activity.active),
            ("activity.very_active", self.activity.very_active),
            ("regimes.cutting_factor", self.regimes.cutting_factor),
            ("regimes.bulking_factor", self.regimes.bulking_factor),
            ("projection.kcal_per_kg", self.projection.kcal_per_kg),
            ("target.reference_bmi", self.target.reference_bmi),
            ("target.male_factor", self.target.male_factor),
            ("target.female_factor", self.target.female_factor),
        ];

        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::Config(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        let shares = [
            ("composition.cutting_fat", self.composition.cutting_fat),
            ("composition.cutting_lean", self.composition.cutting_lean),
            ("composition.bulking_fat", self.composition.bulking_fat),
            ("composition.bulking_lean", self.composition.bulking_lean),
        ];

        for (name, value) in shares {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::Config(format!(
                    "{} must be between 0 and 1, got {}",
                    name, value
                )));
            }
        }

        if self.projection.default_weeks < MIN_PROJECTION_WEEKS {
            return Err(Error::Config(format!(
                "projection.default_weeks must be at least {}, got {}",
                MIN_PROJECTION_WEEKS, self.projection.default_weeks
            )));
        }

        if self.projection.max_weeks < self.projection.default_weeks {
            return Err(Error::Config(format!(
                "projection.max_weeks ({}) must not be below default_weeks ({})",
                self.projection.max_weeks, self.projection.default_weeks
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.activity.moderate, 1.55);
        assert_eq!(config.regimes.cutting_factor, 0.8);
        assert_eq!(config.projection.default_weeks, 12);
        assert_eq!(config.projection.kcal_per_kg, 7700.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_multiplier_table() {
        let activity = ActivityConfig::default();
        assert_eq!(activity.multiplier(ActivityLevel::Sedentary), 1.2);
        assert_eq!(activity.multiplier(ActivityLevel::Light), 1.375);
        assert_eq!(activity.multiplier(ActivityLevel::Moderate), 1.55);
        assert_eq!(activity.multiplier(ActivityLevel::Active), 1.725);
        assert_eq!(activity.multiplier(ActivityLevel::VeryActive), 1.9);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[activity]
very_active = 2.0

[projection]
max_weeks = 104
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.activity.very_active, 2.0);
        assert_eq!(config.activity.sedentary, 1.2); // default
        assert_eq!(config.projection.max_weeks, 104);
        assert_eq!(config.projection.default_weeks, 12); // default
    }

    #[test]
    fn test_rejects_short_default_window() {
        let mut config = Config::default();
        config.projection.default_weeks = 8;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_composition_shares() {
        let config = Config::default();
        assert_eq!(config.composition.cutting_fat, 0.8);
        assert_eq!(config.composition.cutting_lean, 0.2);
        assert_eq!(config.composition.bulking_fat, 0.3);
        assert_eq!(config.composition.bulking_lean, 0.7);

        let mut config = Config::default();
        config.composition.bulking_lean = 1.5;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("composition.bulking_lean"));
    }

    #[test]
    fn test_rejects_non_positive_multiplier() {
        let mut config = Config::default();
        config.activity.light = 0.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("activity.light"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.target.reference_bmi = 23.0;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.target.reference_bmi, 23.0);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[regimes]\ncutting_factor = -1.0\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
