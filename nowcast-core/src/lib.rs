//! Core nowcasting engine for alpine weather
//!
//! Turns a stream of readings from a carried or mounted sensor (temperature,
//! dew point, humidity, altitude, pressure) into a three-way verdict on the
//! next hours: `Better`, `Stable` or `Worse`, with an ETA window.
//!
//! The sensor moves, so raw pressure mixes weather with elevation change.
//! Every pressure is first normalized to one reference altitude with the
//! barometric formula; the tendency is taken between the oldest and newest
//! sample of a sliding window; cloud base is estimated from the dew-point
//! depression; a fixed decision table turns the resulting flags into a
//! verdict.
//!
//! Key constraints:
//! - `no_std` + `alloc` capable, all math through `libm`
//! - Evaluation is a pure function of the window
//! - Replaying recorded timestamps reproduces the same results
//!
//! ```rust
//! use nowcast_core::{NowcastEngine, EngineConfig, Reading, Verdict};
//!
//! let mut engine = NowcastEngine::new(None, EngineConfig::default());
//! engine.add_sample(Reading::new(12.0, 7.0, 70.0, 2000.0, 780.0), Some(0.0));
//!
//! // One sample carries no trend
//! assert_eq!(engine.evaluate().verdict, Verdict::Stable);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod logging;

pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod physics;
pub mod result;
pub mod rules;
pub mod sample;
pub mod time;
pub mod trend;
pub mod window;

// Public API
pub use config::{AtmosphereConstants, EngineConfig};
pub use engine::{NowcastEngine, NowcastEngineBuilder};
pub use errors::{NowcastError, NowcastResult};
pub use physics::{BarometricModel, CloudBaseComparison};
pub use result::{CurrentSnapshot, Details, EtaHours, RuleResult, Verdict};
pub use rules::{RuleEvaluator, RuleFlags, DECISION_TABLE};
pub use sample::{Reading, Sample, Timestamp};
pub use time::TimeSource;
pub use trend::{Trend, TrendCalculator};
pub use window::ObservationWindow;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
