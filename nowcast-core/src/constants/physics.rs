//! Physical Constants for the Barometric Model
//!
//! International Standard Atmosphere values for the troposphere (0-11 km).
//! These are the defaults of [`crate::config::AtmosphereConstants`]; the
//! model never reads them directly so a deployment can override any of them.

// ===== STANDARD ATMOSPHERE =====

/// Sea-level standard temperature (K).
///
/// 15°C, the ISA reference used in aviation and meteorology.
///
/// Source: ISO 2533:1975 (International Standard Atmosphere)
pub const STANDARD_TEMPERATURE_K: f64 = 288.15;

/// Temperature lapse rate in the troposphere (K/m).
///
/// Negative: temperature decreases by 6.5 K per kilometre of ascent.
/// The sign matters, the barometric exponent is divided by this value.
///
/// Source: ISO 2533:1975
pub const STANDARD_LAPSE_RATE_K_PER_M: f64 = -0.0065;

/// Standard gravitational acceleration (m/s²).
///
/// Source: CGPM 1901, 3rd General Conference on Weights and Measures
pub const STANDARD_GRAVITY_M_PER_S2: f64 = 9.80665;

/// Molar mass of dry air (kg/mol).
///
/// 78% N₂ + 21% O₂ + 1% Ar weighted average.
///
/// Source: U.S. Standard Atmosphere, 1976
pub const MOLAR_MASS_DRY_AIR_KG_PER_MOL: f64 = 0.0289644;

/// Universal gas constant (J/(mol·K)).
///
/// Source: CODATA 2014
pub const UNIVERSAL_GAS_CONSTANT_J_PER_MOL_K: f64 = 8.3144598;

/// Standard static pressure at sea level (Pa).
///
/// Source: ISO 2533:1975
pub const SEA_LEVEL_PRESSURE_PA: f64 = 101_325.0;

// ===== UNIT CONVERSIONS =====

/// Pascals per hectopascal.
///
/// Pressures enter and leave the engine in hPa; all exponentiation is in Pa.
pub const PA_PER_HPA: f64 = 100.0;

/// Replacement denominator when `T0 + L0·H` is not positive (K).
///
/// Such altitude/lapse-rate combinations are outside the model. The
/// denominator is clamped to this value so the result stays a finite number.
pub const BAROMETRIC_DENOMINATOR_EPSILON_K: f64 = 1e-6;

// ===== CLOUD BASE =====

/// Lifting condensation level rise per degree of dew-point depression (m/°C).
///
/// The common approximation `LCL ≈ 125 · (T − Td)` metres above the sensor.
///
/// Source: Lawrence (2005), BAMS 86(2), "The relationship between relative
/// humidity and the dewpoint temperature in moist air"
pub const LCL_METERS_PER_DEGREE_C: f64 = 125.0;
