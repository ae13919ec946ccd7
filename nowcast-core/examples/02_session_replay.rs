//! Session Replay Example
//!
//! Replays a recorded session, one JSON sample per line, and prints the
//! verdict after every sample. Because pruning only looks at sample
//! timestamps, a replay produces exactly the verdicts of the live session.
//!
//! The session below is a morning at a 1450 m hut: steady at first, then a
//! front moves in.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_session_replay
//! ```

use nowcast_core::{time::FixedClock, NowcastEngine, Sample};

const SESSION: &str = r#"
{"timestamp_s":0,"reading":{"temperature_c":6.0,"dew_point_c":-1.0,"humidity_pct":60,"altitude_m":1450,"pressure_hpa":853.2}}
{"timestamp_s":1800,"reading":{"temperature_c":7.5,"dew_point_c":-0.5,"humidity_pct":57,"altitude_m":1450,"pressure_hpa":853.0}}
{"timestamp_s":3600,"reading":{"temperature_c":8.5,"dew_point_c":0.5,"humidity_pct":57,"altitude_m":1450,"pressure_hpa":852.5}}
{"timestamp_s":5400,"reading":{"temperature_c":9.0,"dew_point_c":2.5,"humidity_pct":64,"altitude_m":1450,"pressure_hpa":851.4}}
{"timestamp_s":7200,"reading":{"temperature_c":8.5,"dew_point_c":4.0,"humidity_pct":73,"altitude_m":1450,"pressure_hpa":850.1}}
{"timestamp_s":9000,"reading":{"temperature_c":7.5,"dew_point_c":5.0,"humidity_pct":84,"altitude_m":1450,"pressure_hpa":848.9}}
{"timestamp_s":10800,"reading":{"temperature_c":6.5,"dew_point_c":5.5,"humidity_pct":93,"altitude_m":1450,"pressure_hpa":847.6,"lcl_measured_m_amsl":1600}}
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Nowcast Session Replay ===\n");

    let mut engine = NowcastEngine::builder()
        .clock(FixedClock::new(0.0))
        .build()?;

    for line in SESSION.lines().filter(|l| !l.trim().is_empty()) {
        let sample: Sample = serde_json::from_str(line)?;
        engine.push_sample(sample);

        let result = engine.evaluate();
        let rate = result
            .details
            .trend
            .map_or(0.0, |t| t.pressure_rate_hpa_per_h());

        println!(
            "t={:>5.0}s  P={:>6.1} hPa  ΔP/h={:+.2}  -> {:<6} {:>2}-{:<2} h  ({})",
            sample.timestamp_s,
            sample.pressure_hpa,
            rate,
            result.verdict,
            result.eta_hours.lower,
            result.eta_hours.upper,
            result.details.rule.unwrap_or("-"),
        );
    }

    println!("\nFinal result:");
    println!("{}", serde_json::to_string_pretty(&engine.evaluate())?);

    Ok(())
}
