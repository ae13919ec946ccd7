//! Cloud-Base Estimation from Dew-Point Depression
//!
//! ## Physics Background
//!
//! A parcel of air lifted from the sensor cools at the dry adiabatic rate
//! (~9.8 K/km) while its dew point falls by only ~1.8 K/km. The two meet at the
//! lifting condensation level (LCL), which is where the cloud base forms:
//!
//! ```text
//! LCL above sensor ≈ 125 m/°C × (T − Td)
//! LCL AMSL         = H + LCL above sensor
//! ```
//!
//! Sensor noise can report a dew point slightly above the air temperature; the
//! height above the sensor is clamped at zero rather than going negative.

use crate::constants::physics::LCL_METERS_PER_DEGREE_C;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Estimated cloud-base height above the sensor (m), never negative
pub fn estimate_above_sensor(temperature_c: f64, dew_point_c: f64) -> f64 {
    (LCL_METERS_PER_DEGREE_C * (temperature_c - dew_point_c)).max(0.0)
}

/// Estimated cloud-base altitude above mean sea level (m)
pub fn estimate_amsl(temperature_c: f64, dew_point_c: f64, altitude_m: f64) -> f64 {
    altitude_m + estimate_above_sensor(temperature_c, dew_point_c)
}

/// Shorthand for [`CloudBaseComparison::new`]
pub fn compare(
    temperature_c: f64,
    dew_point_c: f64,
    altitude_m: f64,
    measured_m_amsl: Option<f64>,
) -> CloudBaseComparison {
    CloudBaseComparison::new(temperature_c, dew_point_c, altitude_m, measured_m_amsl)
}

/// Estimated cloud base next to a measured one, when it exists
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CloudBaseComparison {
    /// Estimated cloud base (m AMSL)
    pub estimated_m_amsl: f64,
    /// Estimated cloud base above the sensor (m)
    pub estimated_above_sensor_m: f64,
    /// Measured cloud base (m AMSL), if supplied
    pub measured_m_amsl: Option<f64>,
    /// Estimate minus measurement (m), if a measurement was supplied
    pub estimate_minus_measured_m: Option<f64>,
}

impl CloudBaseComparison {
    /// Compare the estimate for (T, Td, H) with an optional measurement
    pub fn new(
        temperature_c: f64,
        dew_point_c: f64,
        altitude_m: f64,
        measured_m_amsl: Option<f64>,
    ) -> Self {
        let estimated_above_sensor_m = estimate_above_sensor(temperature_c, dew_point_c);
        let estimated_m_amsl = altitude_m + estimated_above_sensor_m;

        Self {
            estimated_m_amsl,
            estimated_above_sensor_m,
            measured_m_amsl,
            estimate_minus_measured_m: measured_m_amsl.map(|m| estimated_m_amsl - m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_degree_spread() {
        assert_eq!(estimate_above_sensor(12.0, 7.0), 625.0);
        assert_eq!(estimate_amsl(12.0, 7.0, 2000.0), 2625.0);
    }

    #[test]
    fn saturated_air_is_at_sensor() {
        assert_eq!(estimate_above_sensor(4.0, 4.0), 0.0);
    }

    #[test]
    fn dew_point_above_temperature_clamps() {
        // Noisy hygrometer
        assert_eq!(estimate_above_sensor(10.0, 10.6), 0.0);
        assert_eq!(estimate_amsl(10.0, 10.6, 1500.0), 1500.0);
    }

    #[test]
    fn comparison_with_measurement() {
        let cmp = CloudBaseComparison::new(11.0, 9.5, 2300.0, Some(2400.0));
        assert_eq!(cmp.estimated_above_sensor_m, 187.5);
        assert_eq!(cmp.estimated_m_amsl, 2487.5);
        assert_eq!(cmp.estimate_minus_measured_m, Some(87.5));
    }

    #[test]
    fn comparison_without_measurement() {
        let cmp = compare(11.0, 9.5, 2300.0, None);
        assert!(cmp.measured_m_amsl.is_none());
        assert!(cmp.estimate_minus_measured_m.is_none());
    }
}
