//! Configuration Provider for the Nowcast Engine
//!
//! ## Overview
//!
//! The engine takes its thresholds and barometric constants as plain values
//! ([`EngineConfig`], [`AtmosphereConstants`]). This crate supplies them from a
//! JSON document on disk, so a deployment can tune the rules without
//! recompiling.
//!
//! ## Explicit Units
//!
//! Every entry carries its unit next to its value:
//!
//! ```json
//! { "atmosphere": { "M0": { "value": 28.9644, "unit": "kg/kmol", "desc": "Molar mass of dry air" } } }
//! ```
//!
//! Values are converted to the engine's units on load (see [`units`]). A
//! document copied from a table in per-kilomole units therefore works as is,
//! and a unit that does not fit the key is an error instead of a silently
//! wrong model.
//!
//! ## Defaults
//!
//! Missing sections and missing keys take the engine defaults.
//! [`ConfigStore::load_or_create`] writes a complete default document the
//! first time it is pointed at a path that does not exist yet, so there is
//! always a file to edit.
//!
//! ## Usage Example
//!
//! ```rust
//! use nowcast_config::ConfigStore;
//!
//! let store = ConfigStore::from_json(r#"{
//!     "thresholds": { "trend_window_s": { "value": 2, "unit": "h" } }
//! }"#)?;
//!
//! let config = store.engine_config()?;
//! assert_eq!(config.trend_window_s, 7200.0);
//! assert_eq!(config.rapid_fall_hpa_per_h, 2.0);
//! # Ok::<(), nowcast_config::ConfigError>(())
//! ```

pub mod document;
pub mod store;
pub mod units;

pub use document::{ConfigDocument, Entry};
pub use store::ConfigStore;
pub use units::Quantity;

use nowcast_core::NowcastError;

#[doc(no_inline)]
pub use nowcast_core::{AtmosphereConstants, EngineConfig};

/// Configuration loading errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum ConfigError {
    /// Reading or writing the document failed
    #[error("Config file error: {0}")]
    Io(std::io::Error),

    /// The document is not valid JSON or does not have the expected shape
    #[error("Failed to parse config: {0}")]
    Parse(serde_json::Error),

    /// A dotted path does not resolve to a value
    #[error("Config key not found: {0}")]
    MissingKey(String),

    /// The unit of an entry is not accepted for its key
    #[error("Unsupported unit {unit:?} for {key}")]
    UnsupportedUnit {
        /// Key of the entry
        key: String,
        /// Unit as found in the document, normalized
        unit: String,
    },

    /// The converted values are rejected by the engine
    #[error("Invalid config: {0}")]
    Invalid(NowcastError),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<NowcastError> for ConfigError {
    fn from(err: NowcastError) -> Self {
        ConfigError::Invalid(err)
    }
}
