//! Time-Related Constants
//!
//! Timestamps in the engine are seconds (f64), rates are per hour.

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Seconds per hour.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Lower bound for the elapsed time between trend endpoints (hours).
///
/// Coincident timestamps would otherwise divide by zero.
pub const MIN_ELAPSED_HOURS: f64 = 1e-6;

/// Default trend window (seconds).
///
/// Three hours, the span of the classic synoptic pressure tendency.
///
/// Source: WMO No. 306, Manual on Codes (3-hourly pressure tendency)
pub const DEFAULT_TREND_WINDOW_S: f64 = 3.0 * SECONDS_PER_HOUR;
