//! Rule Evaluation
//!
//! ## Flags
//!
//! Seven booleans are derived from the trend, the latest sample and the
//! thresholds of [`EngineConfig`]:
//!
//! | flag | condition |
//! |---|---|
//! | `rapid_fall` | ΔP/h ≤ −rapid fall |
//! | `three_hr_drop` | ΔP ≤ −3 h drop and hours ≥ 2 |
//! | `near_sat` | current T − Td ≤ near saturation |
//! | `td_rising` | Td/h ≥ rise over 3 h ÷ 3 |
//! | `delta_decreasing` | (T − Td)/h < 0 |
//! | `lcl_low_now` | current cloud base above sensor ≤ low |
//! | `lcl_rising_far` | LCL/h > 0 and current cloud base above sensor ≥ far |
//!
//! The dew-point check assumes a 3-hour span while the drop check accepts
//! anything from 2 hours on. Both conventions are kept as they are.
//!
//! ## Decision Table
//!
//! Rows are tried top to bottom and the first match wins. The order is part of
//! the contract: a strong worsening also satisfies the moderate row and must
//! still be reported as strong.
//!
//! ```text
//! row                 predicate                                                            verdict  ETA
//! strong_worsening    (rapid_fall ∨ three_hr_drop) ∧ (near_sat ∨ td_rising ∨ lcl_low_now)  Worse    1-6 h
//! moderate_worsening  (rapid_fall ∨ three_hr_drop) ∨ (delta_decreasing ∧ td_rising)        Worse    3-12 h
//! improving           ΔP/h ≥ 0.2 ∧ (T − Td)/h > 0 ∧ lcl_rising_far                         Better   3-12 h
//! stable              always                                                               Stable   6-12 h
//! ```
//!
//! With a degenerate trend every tendency reads as zero, so neither pressure
//! flag can fire and a single sample always lands on `stable`.

use crate::config::EngineConfig;
use crate::constants::thresholds::{
    ETA_IMPROVING_H, ETA_MODERATE_WORSENING_H, ETA_STABLE_H, ETA_STRONG_WORSENING_H,
    IMPROVING_MIN_RISE_HPA_PER_H, THREE_HOUR_DROP_MIN_HOURS,
};
use crate::physics::cloud_base;
use crate::result::{EtaHours, Verdict};
use crate::sample::Sample;
use crate::trend::Trend;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Boolean rule flags of one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RuleFlags {
    /// Pressure falling at least at the rapid-fall rate
    pub rapid_fall: bool,
    /// Pressure dropped at least the 3-hour drop over two or more hours
    pub three_hr_drop: bool,
    /// Current dew-point depression within the near-saturation limit
    pub near_sat: bool,
    /// Dew point rising at least at the hourly share of the 3-hour rise
    pub td_rising: bool,
    /// Dew-point depression shrinking
    pub delta_decreasing: bool,
    /// Cloud base low above the sensor now
    pub lcl_low_now: bool,
    /// Cloud base rising and already far above the sensor
    pub lcl_rising_far: bool,
}

impl RuleFlags {
    /// Either pressure-fall flag
    pub fn pressure_falling(&self) -> bool {
        self.rapid_fall || self.three_hr_drop
    }
}

/// Inputs of the decision table
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Signals {
    /// Rule flags
    pub flags: RuleFlags,
    /// Pressure tendency (hPa/h)
    pub pressure_rate_hpa_per_h: f64,
    /// Dew-point depression tendency (°C/h)
    pub depression_rate_c_per_h: f64,
}

/// One row of the decision table
#[derive(Clone, Copy)]
pub struct DecisionRow {
    /// Row name, reported in the result details
    pub name: &'static str,
    /// Condition for this row to match
    pub predicate: fn(&Signals) -> bool,
    /// Verdict when matched
    pub verdict: Verdict,
    /// ETA when matched
    pub eta: EtaHours,
}

impl core::fmt::Debug for DecisionRow {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DecisionRow")
            .field("name", &self.name)
            .field("verdict", &self.verdict)
            .field("eta", &self.eta)
            .finish()
    }
}

fn strong_worsening(s: &Signals) -> bool {
    let f = &s.flags;
    f.pressure_falling() && (f.near_sat || f.td_rising || f.lcl_low_now)
}

fn moderate_worsening(s: &Signals) -> bool {
    let f = &s.flags;
    f.pressure_falling() || (f.delta_decreasing && f.td_rising)
}

fn improving(s: &Signals) -> bool {
    s.pressure_rate_hpa_per_h >= IMPROVING_MIN_RISE_HPA_PER_H
        && s.depression_rate_c_per_h > 0.0
        && s.flags.lcl_rising_far
}

fn always(_: &Signals) -> bool {
    true
}

/// The decision table, in precedence order
pub static DECISION_TABLE: [DecisionRow; 4] = [
    DecisionRow {
        name: "strong_worsening",
        predicate: strong_worsening,
        verdict: Verdict::Worse,
        eta: EtaHours::from_pair(ETA_STRONG_WORSENING_H),
    },
    DecisionRow {
        name: "moderate_worsening",
        predicate: moderate_worsening,
        verdict: Verdict::Worse,
        eta: EtaHours::from_pair(ETA_MODERATE_WORSENING_H),
    },
    DecisionRow {
        name: "improving",
        predicate: improving,
        verdict: Verdict::Better,
        eta: EtaHours::from_pair(ETA_IMPROVING_H),
    },
    DecisionRow {
        name: "stable",
        predicate: always,
        verdict: Verdict::Stable,
        eta: EtaHours::from_pair(ETA_STABLE_H),
    },
];

/// Maps trends and thresholds to a verdict
#[derive(Debug, Clone, Copy)]
pub struct RuleEvaluator<'a> {
    config: &'a EngineConfig,
}

impl<'a> RuleEvaluator<'a> {
    /// Evaluator using the thresholds of `config`
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Compute the rule flags for a trend and the latest sample
    pub fn flags(&self, trend: &Trend, current: &Sample) -> RuleFlags {
        let cfg = self.config;
        let depression_c = current.dew_point_depression_c();
        let lcl_above_m = cloud_base::estimate_above_sensor(current.temperature_c, current.dew_point_c);

        RuleFlags {
            rapid_fall: trend.pressure_rate_hpa_per_h() <= -cfg.rapid_fall_hpa_per_h,
            three_hr_drop: trend.pressure_delta_hpa() <= -cfg.three_hour_drop_hpa
                && trend.hours >= THREE_HOUR_DROP_MIN_HOURS,
            near_sat: depression_c <= cfg.dewpoint_depression_close_c,
            td_rising: trend.dew_point_rate_c_per_h() >= cfg.td_rise_c_per_h(),
            delta_decreasing: trend.depression_rate_c_per_h() < 0.0,
            lcl_low_now: lcl_above_m <= cfg.lcl_low_above_m,
            lcl_rising_far: trend.lcl_rate_m_per_h() > 0.0 && lcl_above_m >= cfg.lcl_far_above_m,
        }
    }

    /// Signals for the decision table
    pub fn signals(&self, trend: &Trend, current: &Sample) -> Signals {
        Signals {
            flags: self.flags(trend, current),
            pressure_rate_hpa_per_h: trend.pressure_rate_hpa_per_h(),
            depression_rate_c_per_h: trend.depression_rate_c_per_h(),
        }
    }

    /// First matching row of the decision table
    pub fn decide(signals: &Signals) -> &'static DecisionRow {
        DECISION_TABLE
            .iter()
            .find(|row| (row.predicate)(signals))
            .unwrap_or(&DECISION_TABLE[DECISION_TABLE.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Reading;

    fn flags() -> RuleFlags {
        RuleFlags::default()
    }

    fn decide(signals: Signals) -> (&'static str, Verdict, (u32, u32)) {
        let row = RuleEvaluator::decide(&signals);
        (row.name, row.verdict, row.eta.as_pair())
    }

    #[test]
    fn table_order_is_fixed() {
        let names: Vec<&str> = DECISION_TABLE.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["strong_worsening", "moderate_worsening", "improving", "stable"]
        );
    }

    #[test]
    fn strong_beats_moderate() {
        let signals = Signals {
            flags: RuleFlags { rapid_fall: true, near_sat: true, ..flags() },
            ..Signals::default()
        };

        // Both rows match, the first one wins
        assert!(moderate_worsening(&signals));
        assert_eq!(decide(signals), ("strong_worsening", Verdict::Worse, (1, 6)));
    }

    #[test]
    fn pressure_fall_alone_is_moderate() {
        let signals = Signals {
            flags: RuleFlags { three_hr_drop: true, ..flags() },
            ..Signals::default()
        };
        assert_eq!(decide(signals), ("moderate_worsening", Verdict::Worse, (3, 12)));
    }

    #[test]
    fn moistening_without_pressure_fall_is_moderate() {
        let signals = Signals {
            flags: RuleFlags { delta_decreasing: true, td_rising: true, ..flags() },
            ..Signals::default()
        };
        assert_eq!(decide(signals).1, Verdict::Worse);
        assert_eq!(decide(signals).2, (3, 12));
    }

    #[test]
    fn drying_rising_pressure_high_base_is_better() {
        let signals = Signals {
            flags: RuleFlags { lcl_rising_far: true, ..flags() },
            pressure_rate_hpa_per_h: 0.2,
            depression_rate_c_per_h: 0.5,
        };
        assert_eq!(decide(signals), ("improving", Verdict::Better, (3, 12)));
    }

    #[test]
    fn improving_needs_all_three() {
        let signals = Signals {
            flags: RuleFlags { lcl_rising_far: true, ..flags() },
            pressure_rate_hpa_per_h: 0.19,
            depression_rate_c_per_h: 0.5,
        };
        assert_eq!(decide(signals).0, "stable");
    }

    #[test]
    fn worsening_outranks_improving() {
        let signals = Signals {
            flags: RuleFlags {
                lcl_rising_far: true,
                delta_decreasing: true,
                td_rising: true,
                ..flags()
            },
            pressure_rate_hpa_per_h: 1.0,
            depression_rate_c_per_h: 0.5,
        };
        assert_eq!(decide(signals).0, "moderate_worsening");
    }

    #[test]
    fn nothing_fires_is_stable() {
        assert_eq!(decide(Signals::default()), ("stable", Verdict::Stable, (6, 12)));
    }

    #[test]
    fn near_saturation_alone_cannot_worsen() {
        let signals = Signals {
            flags: RuleFlags { near_sat: true, lcl_low_now: true, ..flags() },
            ..Signals::default()
        };
        assert_eq!(decide(signals).0, "stable");
    }

    #[test]
    fn degenerate_trend_flags() {
        let config = EngineConfig::default();
        let evaluator = RuleEvaluator::new(&config);
        // Saturated and low cloud, but no tendency
        let current = Sample::new(0.0, Reading::new(5.0, 4.5, 97.0, 1800.0, 820.0));

        let f = evaluator.flags(&Trend::degenerate(), &current);
        assert!(!f.rapid_fall);
        assert!(!f.three_hr_drop);
        assert!(!f.td_rising);
        assert!(!f.delta_decreasing);
        assert!(!f.lcl_rising_far);
        assert!(f.near_sat);
        assert!(f.lcl_low_now);
    }

    #[test]
    fn three_hour_drop_needs_two_hours() {
        use crate::trend::EndpointTrend;

        let config = EngineConfig::default();
        let evaluator = RuleEvaluator::new(&config);
        let current = Sample::new(0.0, Reading::new(15.0, 5.0, 50.0, 500.0, 950.0));

        let endpoints = EndpointTrend {
            pressure_ref0_hpa: 954.0,
            pressure_ref1_hpa: 950.0,
            pressure_delta_hpa: -4.0,
            pressure_rate_hpa_per_h: -4.0 / 1.5,
            depression0_c: 10.0,
            depression1_c: 10.0,
            depression_rate_c_per_h: 0.0,
            dew_point_rate_c_per_h: 0.0,
            lcl0_m_amsl: 1750.0,
            lcl1_m_amsl: 1750.0,
            lcl_rate_m_per_h: 0.0,
        };

        let short = Trend { hours: 1.5, endpoints: Some(endpoints) };
        assert!(!evaluator.flags(&short, &current).three_hr_drop);

        let long = Trend {
            hours: 2.0,
            endpoints: Some(EndpointTrend { pressure_rate_hpa_per_h: -2.0, ..endpoints }),
        };
        let f = evaluator.flags(&long, &current);
        assert!(f.three_hr_drop);
        assert!(f.rapid_fall);
    }
}
