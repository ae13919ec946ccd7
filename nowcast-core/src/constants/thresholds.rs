//! Rule Thresholds and Decision Outcomes
//!
//! Defaults for [`crate::config::EngineConfig`] and the fixed constants of the
//! decision table.

// ===== PRESSURE TENDENCY =====

/// Pressure fall rate regarded as "falling rapidly" (hPa/h).
///
/// Source: Federal Meteorological Handbook No. 1 (PRESFR, 0.06 inHg/h ≈ 2 hPa/h)
pub const RAPID_FALL_HPA_PER_H: f64 = 2.0;

/// Minimal pressure drop flagging deterioration across the window (hPa).
///
/// Roughly 3 hPa over 3 hours.
pub const THREE_HOUR_DROP_HPA: f64 = 3.0;

/// Minimum elapsed hours before the window drop counts as a 3-hour drop.
pub const THREE_HOUR_DROP_MIN_HOURS: f64 = 2.0;

/// Pressure rise rate required before an improving verdict (hPa/h).
pub const IMPROVING_MIN_RISE_HPA_PER_H: f64 = 0.2;

// ===== MOISTURE =====

/// Dew-point depression at or below which air counts as near saturation (°C).
pub const NEAR_SATURATION_DEPRESSION_C: f64 = 3.0;

/// Dew-point rise over three hours that signals moisture loading (°C).
pub const DEW_POINT_RISE_C_PER_3H: f64 = 1.0;

/// Hours the dew-point rise threshold is expressed over.
pub const DEW_POINT_RISE_SPAN_HOURS: f64 = 3.0;

// ===== CLOUD BASE =====

/// Cloud base within this height above the sensor counts as low (m).
pub const LCL_LOW_ABOVE_SENSOR_M: f64 = 500.0;

/// Cloud base beyond this height above the sensor counts as far (m).
pub const LCL_FAR_ABOVE_SENSOR_M: f64 = 1500.0;

// ===== ETA WINDOWS (hours) =====

/// ETA of the strong worsening row.
pub const ETA_STRONG_WORSENING_H: (u32, u32) = (1, 6);

/// ETA of the moderate worsening row.
pub const ETA_MODERATE_WORSENING_H: (u32, u32) = (3, 12);

/// ETA of the improving row.
pub const ETA_IMPROVING_H: (u32, u32) = (3, 12);

/// ETA of the stable fallback, also used when there is no data.
pub const ETA_STABLE_H: (u32, u32) = (6, 12);
