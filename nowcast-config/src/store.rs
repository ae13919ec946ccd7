//! Loaded configuration with typed and dotted-path access

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use nowcast_core::{AtmosphereConstants, EngineConfig};
use serde_json::Value;

use crate::document::{ConfigDocument, Entry, ATMOSPHERE_KEYS, THRESHOLD_KEYS};
use crate::units::{to_engine_unit, Quantity};
use crate::ConfigError;

/// A parsed configuration document
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: Option<PathBuf>,
    raw: Value,
    document: ConfigDocument,
}

impl ConfigStore {
    /// Store holding the engine defaults, not backed by a file
    pub fn defaults() -> Self {
        let document = ConfigDocument::defaults();
        Self {
            path: None,
            // Serializing plain maps of numbers and strings cannot fail
            raw: serde_json::to_value(&document).unwrap_or(Value::Null),
            document,
        }
    }

    /// Parse a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: Value = serde_json::from_str(json)?;
        let document: ConfigDocument = serde_json::from_value(raw.clone())?;
        Ok(Self {
            path: None,
            raw,
            document,
        })
    }

    /// Load the document at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;

        let mut store = Self::from_json(&json)?;
        store.path = Some(path.to_path_buf());
        debug!("Loaded config from {}", path.display());
        Ok(store)
    }

    /// Load the document at `path`, writing the defaults there first if it
    /// does not exist
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            Self::defaults().save(path)?;
            info!("Wrote default config to {}", path.display());
        }
        Self::load(path)
    }

    /// Write the document to `path` as pretty-printed JSON
    ///
    /// Top-level keys the engine does not read are written back unchanged.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let mut out = self.raw.clone();
        match out.as_object_mut() {
            Some(map) => {
                map.insert(
                    "thresholds".to_string(),
                    serde_json::to_value(&self.document.thresholds)?,
                );
                map.insert(
                    "atmosphere".to_string(),
                    serde_json::to_value(&self.document.atmosphere)?,
                );
            }
            None => out = serde_json::to_value(&self.document)?,
        }
        fs::write(path, serde_json::to_string_pretty(&out)?)?;
        Ok(())
    }

    /// File the store was loaded from
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The typed document
    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }

    /// Raw value at a dotted path, e.g. `"atmosphere.L0.unit"`
    ///
    /// Any key of the document can be reached, including ones the engine does
    /// not use.
    pub fn get(&self, dotted: &str) -> Option<&Value> {
        dotted
            .split('.')
            .try_fold(&self.raw, |current, part| current.as_object()?.get(part))
    }

    /// Number at a dotted path
    pub fn get_f64(&self, dotted: &str) -> Result<f64, ConfigError> {
        self.get(dotted)
            .and_then(Value::as_f64)
            .ok_or_else(|| ConfigError::MissingKey(dotted.to_string()))
    }

    /// Rule thresholds in engine units, validated
    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        let mut config = EngineConfig::default();
        warn_unknown("thresholds", &self.document.thresholds, &THRESHOLD_KEYS);

        for (key, quantity, _) in THRESHOLD_KEYS {
            let value = match convert(&self.document.thresholds, key, quantity)? {
                Some(value) => value,
                None => continue,
            };
            debug!("Config {} = {}", key, value);

            let field = match key {
                "trend_window_s" => &mut config.trend_window_s,
                "rapid_fall_hpa_per_h" => &mut config.rapid_fall_hpa_per_h,
                "three_hour_drop_hpa" => &mut config.three_hour_drop_hpa,
                "dewpoint_depression_close_c" => &mut config.dewpoint_depression_close_c,
                "td_rise_c_over_3h" => &mut config.td_rise_c_over_3h,
                "lcl_low_above_m" => &mut config.lcl_low_above_m,
                _ => &mut config.lcl_far_above_m,
            };
            *field = value;
        }

        config.validate()?;
        Ok(config)
    }

    /// Barometric constants in SI units, validated
    pub fn atmosphere(&self) -> Result<AtmosphereConstants, ConfigError> {
        let mut constants = AtmosphereConstants::standard();
        warn_unknown("atmosphere", &self.document.atmosphere, &ATMOSPHERE_KEYS);

        for (key, quantity, _) in ATMOSPHERE_KEYS {
            let value = match convert(&self.document.atmosphere, key, quantity)? {
                Some(value) => value,
                None => continue,
            };
            debug!("Config {} = {}", key, value);

            let field = match key {
                "T0" => &mut constants.t0_k,
                "L0" => &mut constants.l0_k_per_m,
                "g" => &mut constants.g_m_per_s2,
                "M0" => &mut constants.m0_kg_per_mol,
                "R" => &mut constants.r_j_per_mol_k,
                _ => &mut constants.p0_pa,
            };
            *field = value;
        }

        constants.validate()?;
        Ok(constants)
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::defaults()
    }
}

fn convert(
    section: &BTreeMap<String, Entry>,
    key: &str,
    quantity: Quantity,
) -> Result<Option<f64>, ConfigError> {
    section
        .get(key)
        .map(|entry| to_engine_unit(key, quantity, entry.value, &entry.unit))
        .transpose()
}

fn warn_unknown(
    section: &str,
    entries: &BTreeMap<String, Entry>,
    known: &[(&str, Quantity, &str)],
) {
    for key in entries.keys() {
        if !known.iter().any(|(k, _, _)| *k == key.as_str()) {
            warn!("Ignoring unknown config key {}.{}", section, key);
        }
    }
}
