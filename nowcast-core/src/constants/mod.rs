//! Constants for Nowcast Core
//!
//! All numeric values used by the engine live here, grouped by domain, so the
//! barometric model and the rule thresholds are never duplicated across
//! modules.
//!
//! ## Organization
//!
//! - **Physics**: International Standard Atmosphere constants and the
//!   cloud-base approximation
//! - **Thresholds**: default rule thresholds and the ETA windows of the
//!   decision table
//! - **Time**: unit conversions for timestamps and rates
//!
//! Names carry their units. Anything a deployment may want to tune is also
//! exposed through [`crate::config::EngineConfig`] or
//! [`crate::config::AtmosphereConstants`]; the values here are only defaults.

/// Physical constants of the standard atmosphere and moist-air approximations.
pub mod physics;

/// Default rule thresholds and decision-table outcomes.
pub mod thresholds;

/// Time-related conversion factors.
pub mod time;

pub use physics::{
    STANDARD_TEMPERATURE_K, STANDARD_LAPSE_RATE_K_PER_M, STANDARD_GRAVITY_M_PER_S2,
    MOLAR_MASS_DRY_AIR_KG_PER_MOL, UNIVERSAL_GAS_CONSTANT_J_PER_MOL_K,
    SEA_LEVEL_PRESSURE_PA, PA_PER_HPA, LCL_METERS_PER_DEGREE_C,
};

pub use time::{SECONDS_PER_HOUR, MIN_ELAPSED_HOURS};
