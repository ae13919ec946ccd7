//! Engine configuration
//!
//! Two independent groups, both fixed for the engine's lifetime:
//!
//! - [`EngineConfig`]: the seven rule thresholds and the trend window
//! - [`AtmosphereConstants`]: the barometric model
//!
//! Loading either from a file is the job of a configuration provider (see the
//! `nowcast-config` crate); this module only defines the values and checks
//! that the engine can work with them.

use crate::constants::{physics, thresholds, time};
use crate::errors::{NowcastError, NowcastResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rule thresholds, one field per named threshold
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Span of retained samples (s)
    pub trend_window_s: f64,

    /// Pressure fall rate that counts as rapid (hPa/h)
    pub rapid_fall_hpa_per_h: f64,

    /// Pressure drop across the window that counts as a 3-hour drop (hPa)
    pub three_hour_drop_hpa: f64,

    /// Dew-point depression at or below which air is near saturation (°C)
    pub dewpoint_depression_close_c: f64,

    /// Dew-point rise over 3 hours signalling moisture loading (°C)
    pub td_rise_c_over_3h: f64,

    /// Cloud base within this height above the sensor is low (m)
    pub lcl_low_above_m: f64,

    /// Cloud base beyond this height above the sensor is far (m)
    pub lcl_far_above_m: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            trend_window_s: time::DEFAULT_TREND_WINDOW_S,
            rapid_fall_hpa_per_h: thresholds::RAPID_FALL_HPA_PER_H,
            three_hour_drop_hpa: thresholds::THREE_HOUR_DROP_HPA,
            dewpoint_depression_close_c: thresholds::NEAR_SATURATION_DEPRESSION_C,
            td_rise_c_over_3h: thresholds::DEW_POINT_RISE_C_PER_3H,
            lcl_low_above_m: thresholds::LCL_LOW_ABOVE_SENSOR_M,
            lcl_far_above_m: thresholds::LCL_FAR_ABOVE_SENSOR_M,
        }
    }
}

impl EngineConfig {
    /// Name/value pairs in declaration order
    pub fn named(&self) -> [(&'static str, f64); 7] {
        [
            ("trend_window_s", self.trend_window_s),
            ("rapid_fall_hpa_per_h", self.rapid_fall_hpa_per_h),
            ("three_hour_drop_hpa", self.three_hour_drop_hpa),
            ("dewpoint_depression_close_c", self.dewpoint_depression_close_c),
            ("td_rise_c_over_3h", self.td_rise_c_over_3h),
            ("lcl_low_above_m", self.lcl_low_above_m),
            ("lcl_far_above_m", self.lcl_far_above_m),
        ]
    }

    /// Check every threshold is finite and non-negative, and the window positive
    pub fn validate(&self) -> NowcastResult<()> {
        for (name, value) in self.named() {
            if !value.is_finite() || value < 0.0 {
                return Err(NowcastError::InvalidThreshold { name, value });
            }
        }

        if self.trend_window_s == 0.0 {
            return Err(NowcastError::InvalidThreshold {
                name: "trend_window_s",
                value: self.trend_window_s,
            });
        }

        Ok(())
    }

    /// Dew-point rise threshold converted to an hourly rate (°C/h)
    pub fn td_rise_c_per_h(&self) -> f64 {
        self.td_rise_c_over_3h / thresholds::DEW_POINT_RISE_SPAN_HOURS
    }
}

/// Constants of the tropospheric barometric formula, in SI units
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AtmosphereConstants {
    /// Sea-level standard temperature T0 (K)
    pub t0_k: f64,

    /// Lapse rate L0 (K/m), negative in the troposphere
    pub l0_k_per_m: f64,

    /// Gravitational acceleration g (m/s²)
    pub g_m_per_s2: f64,

    /// Molar mass of air M0 (kg/mol)
    pub m0_kg_per_mol: f64,

    /// Universal gas constant R (J/(mol·K))
    pub r_j_per_mol_k: f64,

    /// Sea-level pressure P0 (Pa)
    pub p0_pa: f64,
}

impl Default for AtmosphereConstants {
    fn default() -> Self {
        Self::standard()
    }
}

impl AtmosphereConstants {
    /// International Standard Atmosphere
    pub const fn standard() -> Self {
        Self {
            t0_k: physics::STANDARD_TEMPERATURE_K,
            l0_k_per_m: physics::STANDARD_LAPSE_RATE_K_PER_M,
            g_m_per_s2: physics::STANDARD_GRAVITY_M_PER_S2,
            m0_kg_per_mol: physics::MOLAR_MASS_DRY_AIR_KG_PER_MOL,
            r_j_per_mol_k: physics::UNIVERSAL_GAS_CONSTANT_J_PER_MOL_K,
            p0_pa: physics::SEA_LEVEL_PRESSURE_PA,
        }
    }

    /// Reject values that would make the barometric formula undefined
    pub fn validate(&self) -> NowcastResult<()> {
        let positive = [
            ("t0_k", self.t0_k),
            ("g_m_per_s2", self.g_m_per_s2),
            ("m0_kg_per_mol", self.m0_kg_per_mol),
            ("r_j_per_mol_k", self.r_j_per_mol_k),
            ("p0_pa", self.p0_pa),
        ];

        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(NowcastError::InvalidConstant { name, value });
            }
        }

        // The exponent divides by L0
        if !self.l0_k_per_m.is_finite() || self.l0_k_per_m == 0.0 {
            return Err(NowcastError::InvalidConstant {
                name: "l0_k_per_m",
                value: self.l0_k_per_m,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.trend_window_s, 10_800.0);
        assert_eq!(config.rapid_fall_hpa_per_h, 2.0);
        assert_eq!(config.three_hour_drop_hpa, 3.0);
        assert_eq!(config.dewpoint_depression_close_c, 3.0);
        assert_eq!(config.td_rise_c_over_3h, 1.0);
        assert_eq!(config.lcl_low_above_m, 500.0);
        assert_eq!(config.lcl_far_above_m, 1500.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_nan_threshold() {
        let config = EngineConfig {
            rapid_fall_hpa_per_h: f64::NAN,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(NowcastError::InvalidThreshold { name: "rapid_fall_hpa_per_h", .. })
        ));
    }

    #[test]
    fn rejects_empty_window() {
        let config = EngineConfig {
            trend_window_s: 0.0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn hourly_dew_point_rise() {
        let config = EngineConfig::default();
        assert!((config.td_rise_c_per_h() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn standard_atmosphere_is_valid() {
        assert!(AtmosphereConstants::standard().validate().is_ok());
    }

    #[test]
    fn zero_lapse_rate_rejected() {
        let constants = AtmosphereConstants {
            l0_k_per_m: 0.0,
            ..AtmosphereConstants::standard()
        };
        assert_eq!(
            constants.validate(),
            Err(NowcastError::InvalidConstant { name: "l0_k_per_m", value: 0.0 })
        );
    }
}
