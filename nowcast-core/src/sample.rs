//! Observation samples

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Timestamp in seconds (Unix time, or any monotonic origin used consistently)
pub type Timestamp = f64;

/// One set of readings, as the caller collects them
///
/// No plausibility checks are made: a negative humidity is accepted and simply
/// flows through the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reading {
    /// Air temperature (°C)
    pub temperature_c: f64,
    /// Dew point (°C)
    pub dew_point_c: f64,
    /// Relative humidity (%)
    pub humidity_pct: f64,
    /// Sensor altitude (m)
    pub altitude_m: f64,
    /// Measured (station) pressure (hPa)
    pub pressure_hpa: f64,
    /// Measured cloud base (m AMSL), e.g. from a ceilometer or a pilot report
    #[cfg_attr(feature = "serde", serde(default))]
    pub lcl_measured_m_amsl: Option<f64>,
}

impl Reading {
    /// Reading without a measured cloud base
    pub fn new(
        temperature_c: f64,
        dew_point_c: f64,
        humidity_pct: f64,
        altitude_m: f64,
        pressure_hpa: f64,
    ) -> Self {
        Self {
            temperature_c,
            dew_point_c,
            humidity_pct,
            altitude_m,
            pressure_hpa,
            lcl_measured_m_amsl: None,
        }
    }

    /// Attach a measured cloud base (m AMSL)
    pub fn with_measured_lcl(mut self, lcl_m_amsl: f64) -> Self {
        self.lcl_measured_m_amsl = Some(lcl_m_amsl);
        self
    }

    /// Temperature minus dew point (°C)
    pub fn dew_point_depression_c(&self) -> f64 {
        self.temperature_c - self.dew_point_c
    }
}

/// A reading stamped with the time it was taken
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample {
    /// Time of the observation (s)
    pub timestamp_s: Timestamp,
    /// The observed values
    pub reading: Reading,
}

impl Sample {
    /// Stamp a reading
    pub fn new(timestamp_s: Timestamp, reading: Reading) -> Self {
        Self { timestamp_s, reading }
    }
}

impl core::ops::Deref for Sample {
    type Target = Reading;

    fn deref(&self) -> &Reading {
        &self.reading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depression() {
        let reading = Reading::new(11.0, 9.5, 80.0, 2300.0, 755.0);
        assert_eq!(reading.dew_point_depression_c(), 1.5);
    }

    #[test]
    fn sample_derefs_to_reading() {
        let sample = Sample::new(60.0, Reading::new(12.0, 7.0, 70.0, 2000.0, 780.0));
        assert_eq!(sample.altitude_m, 2000.0);
        assert!(sample.lcl_measured_m_amsl.is_none());
    }
}
