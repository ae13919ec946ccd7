//! Alpine Ascent Example
//!
//! A hiker carries the sensor from 2000 m to 2300 m over three hours. The raw
//! pressure drops by 25 hPa, almost all of it from the climb. The engine
//! normalizes both readings to the starting altitude before looking at the
//! tendency, then finds the air moistening and the cloud base coming down.
//!
//! ## What You'll Learn
//!
//! - Creating an engine that takes its reference altitude from the first sample
//! - Adding timestamped readings
//! - Reading the verdict, ETA and the details behind them
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_alpine_ascent
//! ```

use nowcast_core::{EngineConfig, NowcastEngine, Reading};

fn main() {
    println!("Nowcast Alpine Ascent Example");
    println!("=============================\n");

    let mut engine = NowcastEngine::new(None, EngineConfig::default());

    // (t in s, T °C, Td °C, RH %, altitude m, pressure hPa)
    let readings = [
        (0.0, 12.0, 7.0, 70.0, 2000.0, 780.0),
        (10_800.0, 11.0, 9.5, 80.0, 2300.0, 755.0),
    ];

    println!("Readings:");
    for (t, temp, dew, rh, alt, p) in readings {
        engine.add_sample(Reading::new(temp, dew, rh, alt, p), Some(t));
        println!(
            "  t={:>6.0}s  T={:>5.1}°C  Td={:>5.1}°C  RH={:>3.0}%  H={:>5.0} m  P={:>6.1} hPa",
            t, temp, dew, rh, alt, p
        );
    }

    if let Some(reference) = engine.reference_altitude_m() {
        println!("\nReference altitude: {:.0} m", reference);
    }

    let result = engine.evaluate();
    println!(
        "\nVerdict: {} in {}-{} h",
        result.verdict, result.eta_hours.lower, result.eta_hours.upper
    );

    if let Some(rule) = result.details.rule {
        println!("Matched rule: {}", rule);
    }

    if let Some(e) = result.details.trend.and_then(|t| t.endpoints) {
        println!("\nTrend:");
        println!("  P at reference    {:.1} -> {:.1} hPa", e.pressure_ref0_hpa, e.pressure_ref1_hpa);
        println!("  pressure rate     {:+.2} hPa/h", e.pressure_rate_hpa_per_h);
        println!("  depression rate   {:+.2} °C/h", e.depression_rate_c_per_h);
        println!("  dew point rate    {:+.2} °C/h", e.dew_point_rate_c_per_h);
        println!("  cloud base rate   {:+.1} m/h", e.lcl_rate_m_per_h);
    }

    if let Some(flags) = result.details.flags {
        println!("\nFlags:");
        println!("  rapid_fall       {}", flags.rapid_fall);
        println!("  three_hr_drop    {}", flags.three_hr_drop);
        println!("  near_sat         {}", flags.near_sat);
        println!("  td_rising        {}", flags.td_rising);
        println!("  delta_decreasing {}", flags.delta_decreasing);
        println!("  lcl_low_now      {}", flags.lcl_low_now);
        println!("  lcl_rising_far   {}", flags.lcl_rising_far);
    }

    if let Some(cloud_base) = result.details.cloud_base {
        println!(
            "\nEstimated cloud base: {:.0} m AMSL ({:.0} m above the sensor)",
            cloud_base.estimated_m_amsl, cloud_base.estimated_above_sensor_m
        );
    }
}
