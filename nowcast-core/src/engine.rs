//! The nowcasting engine
//!
//! [`NowcastEngine`] owns the whole mutable state of a session: the window of
//! recent samples and the reference altitude. It is mutated only through
//! [`NowcastEngine::add_sample`]; [`NowcastEngine::evaluate`] takes `&self` and
//! is a pure function of the window contents. The reference altitude is fixed
//! once for the engine's lifetime, so a new session is a new engine.
//!
//! ```text
//! add_sample ──► set H_ref (first sample) ──► window.push ──► prune
//!
//! evaluate ──► 0 samples ─────────────────────────────► Stable 6-12 h, "No samples yet."
//!          └─► ≥1 sample ─► TrendCalculator ─► RuleEvaluator ─► first matching row
//! ```
//!
//! The engine is a plain owned value with no locking. Callers that share one
//! between threads serialize `add_sample` and `evaluate` themselves.
//!
//! ```rust
//! use nowcast_core::{NowcastEngine, EngineConfig, Reading, Verdict};
//!
//! let mut engine = NowcastEngine::new(None, EngineConfig::default());
//!
//! engine.add_sample(Reading::new(12.0, 7.0, 70.0, 2000.0, 780.0), Some(0.0));
//! engine.add_sample(Reading::new(11.0, 9.5, 80.0, 2300.0, 755.0), Some(10_800.0));
//!
//! let result = engine.evaluate();
//! assert_eq!(engine.reference_altitude_m(), Some(2000.0));
//! assert_eq!(result.verdict, Verdict::Worse);
//! assert_eq!(result.eta_hours.as_pair(), (3, 12));
//! ```

use alloc::boxed::Box;
use core::fmt;

use crate::config::{AtmosphereConstants, EngineConfig};
use crate::constants::thresholds::ETA_STABLE_H;
use crate::errors::NowcastResult;
use crate::physics::{BarometricModel, CloudBaseComparison};
use crate::result::{CurrentSnapshot, Details, EtaHours, RuleResult, Verdict};
use crate::rules::RuleEvaluator;
use crate::sample::{Reading, Sample, Timestamp};
use crate::time::TimeSource;
use crate::trend::TrendCalculator;
use crate::window::ObservationWindow;

/// Note attached to the result of an empty window
pub const NO_DATA_NOTE: &str = "No samples yet.";

/// Sliding-window nowcasting engine
pub struct NowcastEngine {
    config: EngineConfig,
    model: BarometricModel,
    reference_altitude_m: Option<f64>,
    window: ObservationWindow,
    clock: Box<dyn TimeSource>,
}

#[cfg(feature = "std")]
impl NowcastEngine {
    /// Engine with the standard atmosphere and the system clock
    ///
    /// Without `reference_altitude_m` the first sample's altitude becomes the
    /// reference. `config` is used as given; use [`NowcastEngine::builder`] to
    /// have it validated.
    pub fn new(reference_altitude_m: Option<f64>, config: EngineConfig) -> Self {
        Self::with_parts(
            reference_altitude_m,
            config,
            BarometricModel::standard(),
            Box::new(crate::time::SystemClock),
        )
    }
}

impl NowcastEngine {
    /// Start configuring an engine
    pub fn builder() -> NowcastEngineBuilder {
        NowcastEngineBuilder::default()
    }

    fn with_parts(
        reference_altitude_m: Option<f64>,
        config: EngineConfig,
        model: BarometricModel,
        clock: Box<dyn TimeSource>,
    ) -> Self {
        Self {
            window: ObservationWindow::new(config.trend_window_s),
            config,
            model,
            reference_altitude_m,
            clock,
        }
    }

    /// Add a reading, stamped with `timestamp_s` or the engine clock's time
    ///
    /// The first reading fixes the reference altitude unless one was given at
    /// construction. Samples older than the trend window behind this one are
    /// dropped.
    pub fn add_sample(&mut self, reading: Reading, timestamp_s: Option<Timestamp>) {
        let timestamp_s = timestamp_s.unwrap_or_else(|| self.clock.now());
        self.push_sample(Sample::new(timestamp_s, reading));
    }

    /// Add an already stamped sample
    pub fn push_sample(&mut self, sample: Sample) {
        if self.reference_altitude_m.is_none() {
            log_debug!("Reference altitude set to {} m", sample.altitude_m);
            self.reference_altitude_m = Some(sample.altitude_m);
        }

        self.window.push(sample);
    }

    /// Verdict, ETA and details for the current window
    pub fn evaluate(&self) -> RuleResult {
        let current = match self.window.newest() {
            Some(sample) => sample,
            None => return Self::no_data(),
        };

        // Set by the first push at the latest
        let reference_m = self.reference_altitude_m.unwrap_or(current.altitude_m);

        let calculator = TrendCalculator::new(&self.model, reference_m);
        let trend = calculator.compute(&self.window);

        let evaluator = RuleEvaluator::new(&self.config);
        let signals = evaluator.signals(&trend, current);
        let row = RuleEvaluator::decide(&signals);

        log_debug!(
            "Nowcast {} ({}-{} h) via {} over {} samples, {:.2} h",
            row.verdict, row.eta.lower, row.eta.upper, row.name, self.window.len(), trend.hours
        );

        let snapshot = CurrentSnapshot {
            temperature_c: current.temperature_c,
            dew_point_c: current.dew_point_c,
            humidity_pct: current.humidity_pct,
            altitude_m: current.altitude_m,
            pressure_hpa: current.pressure_hpa,
            pressure_ref_hpa: calculator.normalized_pressure_hpa(current),
            dewpoint_depression_c: current.dew_point_depression_c(),
        };

        let cloud_base = CloudBaseComparison::new(
            current.temperature_c,
            current.dew_point_c,
            current.altitude_m,
            current.lcl_measured_m_amsl,
        );

        RuleResult {
            verdict: row.verdict,
            eta_hours: row.eta,
            details: Details {
                note: None,
                trend: Some(trend),
                cloud_base: Some(cloud_base),
                flags: Some(signals.flags),
                current: Some(snapshot),
                rule: Some(row.name),
            },
        }
    }

    fn no_data() -> RuleResult {
        RuleResult {
            verdict: Verdict::Stable,
            eta_hours: EtaHours::from_pair(ETA_STABLE_H),
            details: Details {
                note: Some(NO_DATA_NOTE),
                ..Details::default()
            },
        }
    }

    /// Altitude all pressures are normalized to, once known (m)
    pub fn reference_altitude_m(&self) -> Option<f64> {
        self.reference_altitude_m
    }

    /// Retained samples
    pub fn window(&self) -> &ObservationWindow {
        &self.window
    }

    /// Rule thresholds
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Barometric model
    pub fn model(&self) -> &BarometricModel {
        &self.model
    }
}

impl fmt::Debug for NowcastEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NowcastEngine")
            .field("config", &self.config)
            .field("model", &self.model)
            .field("reference_altitude_m", &self.reference_altitude_m)
            .field("samples", &self.window.len())
            .field("wall_clock", &self.clock.is_wall_clock())
            .finish()
    }
}

/// Builder for [`NowcastEngine`]
///
/// ```rust
/// use nowcast_core::{NowcastEngine, EngineConfig, AtmosphereConstants};
/// use nowcast_core::time::FixedClock;
///
/// let engine = NowcastEngine::builder()
///     .reference_altitude_m(1450.0)
///     .config(EngineConfig { trend_window_s: 7200.0, ..EngineConfig::default() })
///     .atmosphere(AtmosphereConstants::standard())
///     .clock(FixedClock::new(0.0))
///     .build()?;
///
/// assert_eq!(engine.reference_altitude_m(), Some(1450.0));
/// # Ok::<(), nowcast_core::NowcastError>(())
/// ```
#[derive(Default)]
pub struct NowcastEngineBuilder {
    reference_altitude_m: Option<f64>,
    config: EngineConfig,
    atmosphere: AtmosphereConstants,
    clock: Option<Box<dyn TimeSource>>,
}

impl NowcastEngineBuilder {
    /// Fix the reference altitude instead of taking the first sample's (m)
    pub fn reference_altitude_m(mut self, altitude_m: f64) -> Self {
        self.reference_altitude_m = Some(altitude_m);
        self
    }

    /// Rule thresholds
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Barometric constants
    pub fn atmosphere(mut self, constants: AtmosphereConstants) -> Self {
        self.atmosphere = constants;
        self
    }

    /// Clock used for readings added without a timestamp
    pub fn clock<C: TimeSource + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Validate the configuration and build the engine
    ///
    /// Without an explicit clock the system clock is used; builds without
    /// `std` fall back to a clock fixed at 0.
    pub fn build(self) -> NowcastResult<NowcastEngine> {
        self.config.validate()?;
        self.atmosphere.validate()?;

        let clock = match self.clock {
            Some(clock) => clock,
            None => default_clock(),
        };

        Ok(NowcastEngine::with_parts(
            self.reference_altitude_m,
            self.config,
            BarometricModel::new(self.atmosphere),
            clock,
        ))
    }
}

#[cfg(feature = "std")]
fn default_clock() -> Box<dyn TimeSource> {
    Box::new(crate::time::SystemClock)
}

#[cfg(not(feature = "std"))]
fn default_clock() -> Box<dyn TimeSource> {
    Box::new(crate::time::FixedClock::new(0.0))
}
