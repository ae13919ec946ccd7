//! The configuration document
//!
//! ```json
//! {
//!   "thresholds": {
//!     "rapid_fall_hpa_per_h": { "value": 2.0, "unit": "hPa/h", "desc": "..." }
//!   },
//!   "atmosphere": {
//!     "L0": { "value": -6.5, "unit": "K/km", "desc": "..." }
//!   }
//! }
//! ```
//!
//! Both sections and every key are optional. Keys are the field names of
//! [`EngineConfig`] for thresholds and the usual symbols for the atmosphere.

use std::collections::BTreeMap;

use nowcast_core::{AtmosphereConstants, EngineConfig};
use serde::{Deserialize, Serialize};

use crate::units::Quantity;

/// One configured value with its unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Numeric value, in `unit`
    pub value: f64,
    /// Unit of `value`
    pub unit: String,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

impl Entry {
    fn new(value: f64, unit: &str, desc: &str) -> Self {
        Self {
            value,
            unit: unit.to_string(),
            desc: Some(desc.to_string()),
        }
    }
}

/// Threshold keys: name, quantity, description
pub const THRESHOLD_KEYS: [(&str, Quantity, &str); 7] = [
    ("trend_window_s", Quantity::Duration, "Span of samples the trend is computed over"),
    ("rapid_fall_hpa_per_h", Quantity::PressureRate, "Pressure fall rate that counts as rapid"),
    ("three_hour_drop_hpa", Quantity::PressureDelta, "Pressure drop over the window that signals worsening"),
    ("dewpoint_depression_close_c", Quantity::TemperatureDelta, "Dew-point depression at or below which air is near saturation"),
    ("td_rise_c_over_3h", Quantity::TemperatureDelta, "Dew-point rise over 3 hours that signals moistening"),
    ("lcl_low_above_m", Quantity::Height, "Cloud base height above the sensor that counts as low"),
    ("lcl_far_above_m", Quantity::Height, "Cloud base height above the sensor that counts as far"),
];

/// Atmosphere keys: symbol, quantity, description
pub const ATMOSPHERE_KEYS: [(&str, Quantity, &str); 6] = [
    ("T0", Quantity::Temperature, "Reference temperature at sea level"),
    ("L0", Quantity::LapseRate, "Temperature lapse rate in the troposphere"),
    ("g", Quantity::Acceleration, "Standard gravity"),
    ("M0", Quantity::MolarMass, "Molar mass of dry air"),
    ("R", Quantity::GasConstant, "Universal gas constant"),
    ("P0", Quantity::Pressure, "Reference pressure at sea level"),
];

/// Parsed configuration document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigDocument {
    /// Rule thresholds by field name
    pub thresholds: BTreeMap<String, Entry>,
    /// Barometric constants by symbol
    pub atmosphere: BTreeMap<String, Entry>,
}

impl ConfigDocument {
    /// Document holding the engine defaults
    ///
    /// Thresholds are written in engine units. The atmosphere uses the units
    /// of the U.S. Standard Atmosphere tables (per km, per kmol).
    pub fn defaults() -> Self {
        let config = EngineConfig::default();
        let thresholds = THRESHOLD_KEYS
            .iter()
            .zip(config.named())
            .map(|(&(key, quantity, desc), (_, value))| {
                (key.to_string(), Entry::new(value, quantity.engine_unit(), desc))
            })
            .collect();

        let atm = AtmosphereConstants::standard();
        let values = [
            (atm.t0_k, "K"),
            (atm.l0_k_per_m * 1e3, "K/km"),
            (atm.g_m_per_s2, "m/s²"),
            (atm.m0_kg_per_mol * 1e3, "kg/kmol"),
            (atm.r_j_per_mol_k * 1e3, "J/(kmol·K)"),
            (atm.p0_pa, "Pa"),
        ];
        let atmosphere = ATMOSPHERE_KEYS
            .iter()
            .zip(values)
            .map(|(&(key, _, desc), (value, unit))| (key.to_string(), Entry::new(value, unit, desc)))
            .collect();

        Self {
            thresholds,
            atmosphere,
        }
    }
}
