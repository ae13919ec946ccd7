//! Altitude Compensation with the Barometric Formula
//!
//! ## Physics Background
//!
//! Pressure falls roughly exponentially with height. In the troposphere, where
//! temperature decreases linearly with altitude, the hydrostatic equation and
//! the ideal gas law integrate to:
//!
//! ```text
//! P(H) = P₀ × [ T₀ / (T₀ + L₀·H) ]^( g·M₀ / (R·L₀) )
//!
//! Where:
//! - P₀ = static pressure at sea level (Pa)
//! - T₀ = standard temperature at sea level (288.15 K)
//! - L₀ = lapse rate (−0.0065 K/m, negative)
//! - g  = 9.80665 m/s²
//! - M₀ = 0.0289644 kg/mol
//! - R  = 8.3144598 J/(mol·K)
//! ```
//!
//! With the standard constants the exponent is ≈ −5.256.
//!
//! ## Why Normalize?
//!
//! A hiker climbing 300 m sees the barometer drop by ~30 hPa with no change
//! in the weather at all. Moving every reading to one fixed reference altitude
//! before differencing leaves only the atmospheric part of the tendency:
//!
//! ```text
//! P_ref = P_meas × [ T₀ / (T₀ + L₀·(H_ref − H_meas)) ]^( g·M₀ / (R·L₀) )
//! ```
//!
//! Readings arrive in hPa; the conversion to Pa happens at the boundary and all
//! exponentiation is done in Pa.
//!
//! ## Validity
//!
//! For `T₀ + L₀·H ≤ 0` (above ~44 km with the standard lapse rate, or with an
//! unphysical lapse rate) the formula is undefined. The denominator is then
//! clamped to a tiny positive value so the result stays a finite number.
//!
//! ```rust
//! use nowcast_core::physics::BarometricModel;
//!
//! let model = BarometricModel::standard();
//!
//! // Same altitude, same pressure
//! assert!((model.adjust_to_reference(780.0, 2000.0, 2000.0) - 780.0).abs() < 1e-9);
//!
//! // Reading taken 300 m higher reads higher once brought down to the reference
//! assert!(model.adjust_to_reference(755.0, 2300.0, 2000.0) > 755.0);
//! ```

use crate::config::AtmosphereConstants;
use crate::constants::physics::{BAROMETRIC_DENOMINATOR_EPSILON_K, PA_PER_HPA};

/// Barometric formula bound to one set of atmosphere constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarometricModel {
    constants: AtmosphereConstants,
    exponent: f64,
}

impl Default for BarometricModel {
    fn default() -> Self {
        Self::standard()
    }
}

impl BarometricModel {
    /// Model for the given constants
    ///
    /// The constants are expected to have passed
    /// [`AtmosphereConstants::validate`]; a zero lapse rate yields an infinite
    /// exponent.
    pub fn new(constants: AtmosphereConstants) -> Self {
        let exponent = (constants.g_m_per_s2 * constants.m0_kg_per_mol)
            / (constants.r_j_per_mol_k * constants.l0_k_per_m);

        Self { constants, exponent }
    }

    /// International Standard Atmosphere model
    pub fn standard() -> Self {
        Self::new(AtmosphereConstants::standard())
    }

    /// Constants this model was built from
    pub fn constants(&self) -> &AtmosphereConstants {
        &self.constants
    }

    /// The exponent g·M₀ / (R·L₀)
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Static pressure at `altitude_m` for sea-level pressure `p0_pa` (Pa)
    pub fn pressure_at_altitude(&self, p0_pa: f64, altitude_m: f64) -> f64 {
        p0_pa * self.ratio(altitude_m)
    }

    /// Standard-atmosphere pressure at `altitude_m`, using the configured P₀ (Pa)
    pub fn standard_pressure_at(&self, altitude_m: f64) -> f64 {
        self.pressure_at_altitude(self.constants.p0_pa, altitude_m)
    }

    /// Express a pressure measured at `measured_altitude_m` as the equivalent
    /// pressure at `reference_altitude_m` (hPa in, hPa out)
    pub fn adjust_to_reference(
        &self,
        pressure_hpa: f64,
        measured_altitude_m: f64,
        reference_altitude_m: f64,
    ) -> f64 {
        let delta_m = reference_altitude_m - measured_altitude_m;
        let pressure_pa = pressure_hpa * PA_PER_HPA;

        pressure_pa * self.ratio(delta_m) / PA_PER_HPA
    }

    /// `[T₀ / (T₀ + L₀·h)]^exponent` with the denominator clamp
    fn ratio(&self, height_m: f64) -> f64 {
        let t0 = self.constants.t0_k;
        let mut denominator = t0 + self.constants.l0_k_per_m * height_m;

        if denominator <= 0.0 {
            log_warn!(
                "Barometric denominator {} K outside model at h={} m, clamped",
                denominator, height_m
            );
            denominator = BAROMETRIC_DENOMINATOR_EPSILON_K;
        }

        // libm keeps this usable without std
        libm::pow(t0 / denominator, self.exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_exponent() {
        let model = BarometricModel::standard();
        assert!((model.exponent() + 5.2559).abs() < 1e-3);
    }

    #[test]
    fn sea_level_is_p0() {
        let model = BarometricModel::standard();
        assert!((model.pressure_at_altitude(101_325.0, 0.0) - 101_325.0).abs() < 1e-9);
    }

    #[test]
    fn pressure_at_1600m() {
        // Denver, ~835 hPa in the standard atmosphere
        let model = BarometricModel::standard();
        let p = model.standard_pressure_at(1600.0) / 100.0;
        assert!((p - 835.0).abs() < 2.0, "got {}", p);
    }

    #[test]
    fn identity_at_reference() {
        let model = BarometricModel::standard();
        for h in [-400.0, 0.0, 2000.0, 8848.0] {
            let p = model.adjust_to_reference(812.3, h, h);
            assert!((p - 812.3).abs() < 1e-9);
        }
    }

    #[test]
    fn descent_raises_pressure() {
        let model = BarometricModel::standard();
        let p = model.adjust_to_reference(755.0, 2300.0, 2000.0);
        assert!((p - 782.243).abs() < 0.01, "got {}", p);
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(expected > 0.0 && expected.is_finite());
        let rel = ((actual - expected) / expected).abs();
        assert!(rel < 1e-12, "got {}, expected {}", actual, expected);
    }

    #[test]
    fn negative_denominator_is_clamped() {
        let model = BarometricModel::standard();
        let clamped = libm::pow(288.15 / BAROMETRIC_DENOMINATOR_EPSILON_K, model.exponent());

        // T0 + L0·H < 0 above ~44.3 km
        let p = model.pressure_at_altitude(101_325.0, 60_000.0);
        assert_close(p, 101_325.0 * clamped);

        let adjusted = model.adjust_to_reference(500.0, 0.0, 60_000.0);
        assert_close(adjusted, 500.0 * clamped);
    }

    #[test]
    fn zero_denominator_is_clamped() {
        // -0.0625 K/m × 4608 m is exactly -288 K
        let model = BarometricModel::new(AtmosphereConstants {
            t0_k: 288.0,
            l0_k_per_m: -0.0625,
            ..AtmosphereConstants::standard()
        });
        let clamped = libm::pow(288.0 / BAROMETRIC_DENOMINATOR_EPSILON_K, model.exponent());

        assert_close(model.pressure_at_altitude(101_325.0, 4608.0), 101_325.0 * clamped);
        assert_close(model.adjust_to_reference(500.0, 1000.0, 5608.0), 500.0 * clamped);
    }

    #[test]
    fn custom_constants_change_exponent() {
        let constants = AtmosphereConstants {
            l0_k_per_m: -0.0098,
            ..AtmosphereConstants::standard()
        };
        let model = BarometricModel::new(constants);
        assert!(model.exponent() > BarometricModel::standard().exponent());
    }
}
