#![forbid(unsafe_code)]

//! Core domain model and projection engine for the TDEE calculator.
//!
//! This crate provides:
//! - Domain types (profile input, energy estimates, trajectories)
//! - Profile validation
//! - Unit normalization, energy estimation, target resolution
//! - Weight trajectory projection
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod profile;
pub mod units;
pub mod energy;
pub mod target;
pub mod projection;
pub mod engine;

// Re-export commonly used types
pub use error::{Error, Result, ValidationError};
pub use types::*;
pub use config::Config;
pub use engine::{calculate, Engine};
