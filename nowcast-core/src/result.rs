//! Evaluation output
//!
//! A [`RuleResult`] is created fresh on every evaluation and never touched by
//! the engine again. A presentation layer only needs [`RuleResult::verdict`]
//! and [`RuleResult::eta_hours`]; [`Details`] carries everything that went
//! into the decision for diagnostics.

use core::fmt;

use crate::physics::CloudBaseComparison;
use crate::rules::RuleFlags;
use crate::trend::Trend;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Three-way trend verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Verdict {
    /// Conditions improving
    Better,
    /// No significant change expected
    Stable,
    /// Conditions deteriorating
    Worse,
}

impl Verdict {
    /// Fixed label of the verdict
    pub const fn label(&self) -> &'static str {
        match self {
            Verdict::Better => "Better",
            Verdict::Stable => "Stable",
            Verdict::Worse => "Worse",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Window in which the predicted change is expected, whole hours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EtaHours {
    /// Earliest expected change (h)
    pub lower: u32,
    /// Latest expected change (h)
    pub upper: u32,
}

impl EtaHours {
    /// ETA window from a `(lower, upper)` pair
    pub const fn from_pair(pair: (u32, u32)) -> Self {
        Self {
            lower: pair.0,
            upper: pair.1,
        }
    }

    /// `(lower, upper)` pair
    pub const fn as_pair(&self) -> (u32, u32) {
        (self.lower, self.upper)
    }
}

/// The most recent sample, with its pressure at the reference altitude
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CurrentSnapshot {
    /// Air temperature (°C)
    pub temperature_c: f64,
    /// Dew point (°C)
    pub dew_point_c: f64,
    /// Relative humidity (%)
    pub humidity_pct: f64,
    /// Sensor altitude (m)
    pub altitude_m: f64,
    /// Measured pressure (hPa)
    pub pressure_hpa: f64,
    /// Pressure normalized to the reference altitude (hPa)
    pub pressure_ref_hpa: f64,
    /// Temperature minus dew point (°C)
    pub dewpoint_depression_c: f64,
}

/// Everything the verdict was derived from
///
/// With an empty window only `note` is set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Details {
    /// Explanation when the verdict could not be derived from data
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub note: Option<&'static str>,

    /// Trend between the window endpoints
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub trend: Option<Trend>,

    /// Estimated vs. measured cloud base at the latest sample
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub cloud_base: Option<CloudBaseComparison>,

    /// Rule flags computed for this evaluation
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub flags: Option<RuleFlags>,

    /// Latest sample
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub current: Option<CurrentSnapshot>,

    /// Name of the decision-table row that matched
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub rule: Option<&'static str>,
}

/// Verdict, ETA and explanation of one evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RuleResult {
    /// Trend verdict
    pub verdict: Verdict,
    /// Expected time to change
    pub eta_hours: EtaHours,
    /// Diagnostic record
    pub details: Details,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_labels() {
        assert_eq!(Verdict::Better.label(), "Better");
        assert_eq!(Verdict::Stable.label(), "Stable");
        assert_eq!(Verdict::Worse.label(), "Worse");
    }

    #[cfg(feature = "std")]
    #[test]
    fn verdict_displays_label() {
        assert_eq!(Verdict::Worse.to_string(), "Worse");
    }

    #[test]
    fn eta_pair_round_trip() {
        let eta = EtaHours::from_pair((3, 12));
        assert_eq!(eta.lower, 3);
        assert_eq!(eta.upper, 12);
        assert_eq!(eta.as_pair(), (3, 12));
    }
}
