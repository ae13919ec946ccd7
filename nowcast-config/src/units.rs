//! Unit Conversion to Engine Units
//!
//! Every entry of a configuration document states its unit. Each key has one
//! physical quantity, and each quantity a short list of accepted spellings
//! with the factor (and offset) to the unit the engine works in:
//!
//! | quantity | engine unit | accepted |
//! |---|---|---|
//! | duration | s | s, min, h |
//! | pressure rate | hPa/h | hPa/h, Pa/h |
//! | pressure difference | hPa | hPa, Pa |
//! | temperature difference | °C | °C, C, K |
//! | height | m | m, km, ft |
//! | temperature | K | K, °C, C |
//! | lapse rate | K/m | K/m, K/km |
//! | acceleration | m/s² | m/s², m/s2 |
//! | molar mass | kg/mol | kg/mol, kg/kmol, g/mol |
//! | gas constant | J/(mol·K) | J/(mol·K), J/(kmol·K), N·m/(mol·K), N·m/(kmol·K) |
//! | absolute pressure | Pa | Pa, hPa, kPa |
//!
//! A differential temperature in K equals the same value in °C; an absolute
//! temperature in °C is offset by 273.15.

use nowcast_core::constants::time::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use nowcast_core::constants::PA_PER_HPA;

use crate::ConfigError;

/// Physical quantity of a configuration entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Time span, to seconds
    Duration,
    /// Pressure tendency, to hPa/h
    PressureRate,
    /// Pressure difference, to hPa
    PressureDelta,
    /// Temperature difference, to °C
    TemperatureDelta,
    /// Height, to meters
    Height,
    /// Absolute temperature, to kelvin
    Temperature,
    /// Temperature lapse rate, to K/m
    LapseRate,
    /// Gravitational acceleration, to m/s²
    Acceleration,
    /// Molar mass, to kg/mol
    MolarMass,
    /// Molar gas constant, to J/(mol·K)
    GasConstant,
    /// Absolute pressure, to pascal
    Pressure,
}

impl Quantity {
    /// Unit the engine expects for this quantity
    pub fn engine_unit(&self) -> &'static str {
        match self {
            Quantity::Duration => "s",
            Quantity::PressureRate => "hPa/h",
            Quantity::PressureDelta => "hPa",
            Quantity::TemperatureDelta => "°C",
            Quantity::Height => "m",
            Quantity::Temperature => "K",
            Quantity::LapseRate => "K/m",
            Quantity::Acceleration => "m/s²",
            Quantity::MolarMass => "kg/mol",
            Quantity::GasConstant => "J/(mol·K)",
            Quantity::Pressure => "Pa",
        }
    }

    /// `(scale, offset)` such that `engine = value * scale + offset`
    fn factor(&self, unit: &str) -> Option<(f64, f64)> {
        let factor = match (*self, unit) {
            (Quantity::Duration, "s") => (1.0, 0.0),
            (Quantity::Duration, "min") => (SECONDS_PER_MINUTE, 0.0),
            (Quantity::Duration, "h") => (SECONDS_PER_HOUR, 0.0),

            (Quantity::PressureRate, "hPa/h") => (1.0, 0.0),
            (Quantity::PressureRate, "Pa/h") => (0.01, 0.0),

            (Quantity::PressureDelta, "hPa") => (1.0, 0.0),
            (Quantity::PressureDelta, "Pa") => (0.01, 0.0),

            (Quantity::TemperatureDelta, "°C" | "C" | "K") => (1.0, 0.0),

            (Quantity::Height, "m") => (1.0, 0.0),
            (Quantity::Height, "km") => (1000.0, 0.0),
            (Quantity::Height, "ft") => (0.3048, 0.0),

            (Quantity::Temperature, "K") => (1.0, 0.0),
            (Quantity::Temperature, "°C" | "C") => (1.0, 273.15),

            (Quantity::LapseRate, "K/m") => (1.0, 0.0),
            (Quantity::LapseRate, "K/km") => (1e-3, 0.0),

            (Quantity::Acceleration, "m/s²" | "m/s2" | "m/s^2") => (1.0, 0.0),

            (Quantity::MolarMass, "kg/mol") => (1.0, 0.0),
            (Quantity::MolarMass, "kg/kmol" | "g/mol") => (1e-3, 0.0),

            (Quantity::GasConstant, "J/(mol·K)" | "N·m/(mol·K)") => (1.0, 0.0),
            (Quantity::GasConstant, "J/(kmol·K)" | "N·m/(kmol·K)") => (1e-3, 0.0),

            (Quantity::Pressure, "Pa") => (1.0, 0.0),
            (Quantity::Pressure, "hPa") => (PA_PER_HPA, 0.0),
            (Quantity::Pressure, "kPa") => (1000.0, 0.0),

            _ => return None,
        };
        Some(factor)
    }
}

/// Convert `value` in `unit` to the engine unit of `quantity`
///
/// `key` only labels the error.
pub fn to_engine_unit(key: &str, quantity: Quantity, value: f64, unit: &str) -> Result<f64, ConfigError> {
    let unit = normalize(unit);

    quantity
        .factor(&unit)
        .map(|(scale, offset)| value * scale + offset)
        .ok_or_else(|| ConfigError::UnsupportedUnit {
            key: key.to_string(),
            unit,
        })
}

// Accept the ASCII spellings of "·" and "°"
fn normalize(unit: &str) -> String {
    unit.trim()
        .replace("degC", "°C")
        .replace('*', "·")
        .replace(' ', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations() {
        assert_eq!(to_engine_unit("w", Quantity::Duration, 3.0, "h").unwrap(), 10_800.0);
        assert_eq!(to_engine_unit("w", Quantity::Duration, 90.0, "min").unwrap(), 5400.0);
        assert_eq!(
            to_engine_unit("w", Quantity::Duration, 1.0, "min").unwrap(),
            SECONDS_PER_MINUTE
        );
        assert_eq!(to_engine_unit("w", Quantity::Duration, 1.0, "h").unwrap(), SECONDS_PER_HOUR);
    }

    #[test]
    fn per_kmol_values_scale_down() {
        let m0 = to_engine_unit("M0", Quantity::MolarMass, 28.9644, "kg/kmol").unwrap();
        assert!((m0 - 0.0289644).abs() < 1e-12);

        let r = to_engine_unit("R", Quantity::GasConstant, 8.31432e3, "N·m/(kmol·K)").unwrap();
        assert!((r - 8.31432).abs() < 1e-9);
    }

    #[test]
    fn ascii_spellings() {
        let r = to_engine_unit("R", Quantity::GasConstant, 8.3144598, "J/(mol*K)").unwrap();
        assert_eq!(r, 8.3144598);

        let t0 = to_engine_unit("T0", Quantity::Temperature, 15.0, "degC").unwrap();
        assert!((t0 - 288.15).abs() < 1e-9);
    }

    #[test]
    fn temperature_difference_has_no_offset() {
        assert_eq!(to_engine_unit("d", Quantity::TemperatureDelta, 3.0, "K").unwrap(), 3.0);
    }

    #[test]
    fn lapse_rate_per_km() {
        let l0 = to_engine_unit("L0", Quantity::LapseRate, -6.5, "K/km").unwrap();
        assert!((l0 + 0.0065).abs() < 1e-15);
    }

    #[test]
    fn rejects_mismatched_unit() {
        let err = to_engine_unit("P0", Quantity::Pressure, 1.0, "m").unwrap_err();
        match err {
            ConfigError::UnsupportedUnit { key, unit } => {
                assert_eq!(key, "P0");
                assert_eq!(unit, "m");
            }
            other => panic!("unexpected: {other}"),
        }
    }
}
