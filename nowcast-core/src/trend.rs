//! Endpoint-Difference Trends
//!
//! ## Method
//!
//! Only the oldest (`s0`) and newest (`s1`) retained samples are used. The
//! samples in between do not enter the computation; this is an endpoint
//! difference over the window, not a regression.
//!
//! ```text
//! hours  = max(1e-6, (t1 − t0) / 3600)
//! ΔP     = P_ref(s1) − P_ref(s0)          both normalized to H_ref
//! ΔP/h   = ΔP / hours
//! δ      = T − Td                          at each end
//! δ/h    = (δ1 − δ0) / hours
//! Td/h   = (Td1 − Td0) / hours
//! LCL/h  = (LCL_amsl(s1) − LCL_amsl(s0)) / hours
//! ```
//!
//! Normalizing both pressures to the session's reference altitude before
//! differencing is what removes the elevation gained or lost between the two
//! readings from the tendency.
//!
//! ## Insufficient Data
//!
//! With fewer than two samples the trend is degenerate: zero hours and no
//! endpoint quantities. The accessors on [`Trend`] read absent quantities as
//! zero, which is what the rule evaluator compares against.

use crate::constants::time::{MIN_ELAPSED_HOURS, SECONDS_PER_HOUR};
use crate::physics::{cloud_base, BarometricModel};
use crate::sample::Sample;
use crate::window::ObservationWindow;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Quantities derived from the two window endpoints
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EndpointTrend {
    /// Oldest pressure normalized to the reference altitude (hPa)
    pub pressure_ref0_hpa: f64,
    /// Newest pressure normalized to the reference altitude (hPa)
    pub pressure_ref1_hpa: f64,
    /// Normalized pressure change across the window (hPa)
    pub pressure_delta_hpa: f64,
    /// Normalized pressure tendency (hPa/h)
    pub pressure_rate_hpa_per_h: f64,

    /// Dew-point depression at the oldest sample (°C)
    pub depression0_c: f64,
    /// Dew-point depression at the newest sample (°C)
    pub depression1_c: f64,
    /// Dew-point depression tendency (°C/h)
    pub depression_rate_c_per_h: f64,

    /// Dew-point tendency (°C/h)
    pub dew_point_rate_c_per_h: f64,

    /// Estimated cloud base at the oldest sample (m AMSL)
    pub lcl0_m_amsl: f64,
    /// Estimated cloud base at the newest sample (m AMSL)
    pub lcl1_m_amsl: f64,
    /// Cloud-base tendency (m/h)
    pub lcl_rate_m_per_h: f64,
}

/// Trend over the current window
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Trend {
    /// Hours between the endpoints, 0 when degenerate
    pub hours: f64,
    /// Endpoint quantities, absent with fewer than two samples
    pub endpoints: Option<EndpointTrend>,
}

impl Trend {
    /// Trend of a window with fewer than two samples
    pub const fn degenerate() -> Self {
        Self {
            hours: 0.0,
            endpoints: None,
        }
    }

    /// Check if the trend was computed from two endpoints
    pub fn is_degenerate(&self) -> bool {
        self.endpoints.is_none()
    }

    /// Normalized pressure change (hPa), 0 when degenerate
    pub fn pressure_delta_hpa(&self) -> f64 {
        self.endpoints.map_or(0.0, |e| e.pressure_delta_hpa)
    }

    /// Pressure tendency (hPa/h), 0 when degenerate
    pub fn pressure_rate_hpa_per_h(&self) -> f64 {
        self.endpoints.map_or(0.0, |e| e.pressure_rate_hpa_per_h)
    }

    /// Dew-point depression tendency (°C/h), 0 when degenerate
    pub fn depression_rate_c_per_h(&self) -> f64 {
        self.endpoints.map_or(0.0, |e| e.depression_rate_c_per_h)
    }

    /// Dew-point tendency (°C/h), 0 when degenerate
    pub fn dew_point_rate_c_per_h(&self) -> f64 {
        self.endpoints.map_or(0.0, |e| e.dew_point_rate_c_per_h)
    }

    /// Cloud-base tendency (m/h), 0 when degenerate
    pub fn lcl_rate_m_per_h(&self) -> f64 {
        self.endpoints.map_or(0.0, |e| e.lcl_rate_m_per_h)
    }
}

/// Computes [`Trend`]s for one reference altitude
#[derive(Debug, Clone, Copy)]
pub struct TrendCalculator<'a> {
    model: &'a BarometricModel,
    reference_altitude_m: f64,
}

impl<'a> TrendCalculator<'a> {
    /// Calculator normalizing pressures to `reference_altitude_m`
    pub fn new(model: &'a BarometricModel, reference_altitude_m: f64) -> Self {
        Self {
            model,
            reference_altitude_m,
        }
    }

    /// Trend between the oldest and newest sample of `window`
    pub fn compute(&self, window: &ObservationWindow) -> Trend {
        match window.endpoints() {
            Some((oldest, newest)) => self.between(oldest, newest),
            None => Trend::degenerate(),
        }
    }

    /// Trend between two samples, `s0` taken before `s1`
    pub fn between(&self, s0: &Sample, s1: &Sample) -> Trend {
        let hours = ((s1.timestamp_s - s0.timestamp_s) / SECONDS_PER_HOUR).max(MIN_ELAPSED_HOURS);

        let pressure_ref0_hpa = self.normalized_pressure_hpa(s0);
        let pressure_ref1_hpa = self.normalized_pressure_hpa(s1);
        let pressure_delta_hpa = pressure_ref1_hpa - pressure_ref0_hpa;

        let depression0_c = s0.dew_point_depression_c();
        let depression1_c = s1.dew_point_depression_c();

        let lcl0_m_amsl = cloud_base::estimate_amsl(s0.temperature_c, s0.dew_point_c, s0.altitude_m);
        let lcl1_m_amsl = cloud_base::estimate_amsl(s1.temperature_c, s1.dew_point_c, s1.altitude_m);

        Trend {
            hours,
            endpoints: Some(EndpointTrend {
                pressure_ref0_hpa,
                pressure_ref1_hpa,
                pressure_delta_hpa,
                pressure_rate_hpa_per_h: pressure_delta_hpa / hours,
                depression0_c,
                depression1_c,
                depression_rate_c_per_h: (depression1_c - depression0_c) / hours,
                dew_point_rate_c_per_h: (s1.dew_point_c - s0.dew_point_c) / hours,
                lcl0_m_amsl,
                lcl1_m_amsl,
                lcl_rate_m_per_h: (lcl1_m_amsl - lcl0_m_amsl) / hours,
            }),
        }
    }

    /// Pressure of `sample` expressed at the reference altitude (hPa)
    pub fn normalized_pressure_hpa(&self, sample: &Sample) -> f64 {
        self.model
            .adjust_to_reference(sample.pressure_hpa, sample.altitude_m, self.reference_altitude_m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Reading;

    fn sample(t: f64, temp: f64, dew: f64, alt: f64, p: f64) -> Sample {
        Sample::new(t, Reading::new(temp, dew, 70.0, alt, p))
    }

    #[test]
    fn degenerate_reads_as_zero() {
        let trend = Trend::degenerate();
        assert!(trend.is_degenerate());
        assert_eq!(trend.hours, 0.0);
        assert_eq!(trend.pressure_rate_hpa_per_h(), 0.0);
        assert_eq!(trend.pressure_delta_hpa(), 0.0);
        assert_eq!(trend.dew_point_rate_c_per_h(), 0.0);
        assert_eq!(trend.depression_rate_c_per_h(), 0.0);
        assert_eq!(trend.lcl_rate_m_per_h(), 0.0);
    }

    #[test]
    fn single_sample_window_is_degenerate() {
        let model = BarometricModel::standard();
        let mut window = ObservationWindow::new(10_800.0);
        window.push(sample(0.0, 12.0, 7.0, 2000.0, 780.0));

        let trend = TrendCalculator::new(&model, 2000.0).compute(&window);
        assert!(trend.is_degenerate());
    }

    #[test]
    fn level_station_pressure_fall() {
        let model = BarometricModel::standard();
        let calc = TrendCalculator::new(&model, 500.0);

        let trend = calc.between(
            &sample(0.0, 15.0, 10.0, 500.0, 955.0),
            &sample(7200.0, 14.0, 11.0, 500.0, 949.0),
        );

        let e = trend.endpoints.unwrap();
        assert!((trend.hours - 2.0).abs() < 1e-12);
        assert!((e.pressure_delta_hpa + 6.0).abs() < 1e-9);
        assert!((e.pressure_rate_hpa_per_h + 3.0).abs() < 1e-9);
        assert!((e.depression_rate_c_per_h + 1.0).abs() < 1e-12);
        assert!((e.dew_point_rate_c_per_h - 0.5).abs() < 1e-12);
        // 625 m -> 375 m above a 500 m station over two hours
        assert!((e.lcl_rate_m_per_h + 125.0).abs() < 1e-9);
    }

    #[test]
    fn coincident_timestamps_stay_finite() {
        let model = BarometricModel::standard();
        let calc = TrendCalculator::new(&model, 0.0);

        let trend = calc.between(
            &sample(100.0, 10.0, 5.0, 0.0, 1013.0),
            &sample(100.0, 10.0, 5.0, 0.0, 1012.0),
        );

        assert_eq!(trend.hours, MIN_ELAPSED_HOURS);
        assert!(trend.pressure_rate_hpa_per_h().is_finite());
    }

    #[test]
    fn climb_is_removed_from_tendency() {
        // Standard atmosphere, no weather change: 300 m of climb only
        let model = BarometricModel::standard();
        let p0 = model.standard_pressure_at(1000.0) / 100.0;
        let p1 = model.standard_pressure_at(1300.0) / 100.0;

        let trend = TrendCalculator::new(&model, 1000.0).between(
            &sample(0.0, 10.0, 5.0, 1000.0, p0),
            &sample(3600.0, 10.0, 5.0, 1300.0, p1),
        );

        // Raw readings differ by ~32 hPa; the sea-level-anchored ratio leaves
        // under 1 hPa of it at this height
        assert!(p0 - p1 > 30.0);
        assert!(trend.pressure_delta_hpa().abs() < 1.0);
    }
}
