//! Error Types for Engine Configuration
//!
//! ## Design Philosophy
//!
//! The nowcasting arithmetic itself never fails. Every numeric edge case has a
//! defined result:
//!
//! - A non-physical altitude/lapse-rate combination clamps the barometric
//!   denominator to a small epsilon
//! - Coincident timestamps clamp the elapsed time to a small epsilon
//! - A missing measured cloud base omits the comparison fields
//! - Too few samples produce a labelled result, not an error
//!
//! Errors therefore only exist at construction time, when a caller supplies
//! thresholds or atmosphere constants the engine cannot work with (NaN, a
//! negative window, a zero lapse rate).
//!
//! Like the rest of the crate the errors are `Copy`, carry only
//! `&'static str` names and allocate nothing.
//!
//! ```rust
//! use nowcast_core::{EngineConfig, NowcastError};
//!
//! let config = EngineConfig {
//!     trend_window_s: -1.0,
//!     ..EngineConfig::default()
//! };
//!
//! match config.validate() {
//!     Err(NowcastError::InvalidThreshold { name, .. }) => assert_eq!(name, "trend_window_s"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for engine construction
pub type NowcastResult<T> = Result<T, NowcastError>;

/// Configuration errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum NowcastError {
    /// A rule threshold is not finite or outside its admissible range
    #[error("Invalid threshold {name}: {value}")]
    InvalidThreshold {
        /// Field name of the offending threshold
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A barometric constant is not finite or would make the model undefined
    #[error("Invalid atmosphere constant {name}: {value}")]
    InvalidConstant {
        /// Field name of the offending constant
        name: &'static str,
        /// The rejected value
        value: f64,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for NowcastError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidThreshold { name, value } =>
                defmt::write!(fmt, "Invalid threshold {}: {}", name, value),
            Self::InvalidConstant { name, value } =>
                defmt::write!(fmt, "Invalid constant {}: {}", name, value),
        }
    }
}
