//! Fire Drill Example
//!
//! Enables fire-drill telemetry and drives the full escalation:
//! breach detection, the staged smartphone capture, a (stubbed)
//! classification call, and the confirmed-fire terminal state, printing
//! the operator log as it grows.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_fire_drill
//! ```

use pyroguard_core::{
    analysis::{AnalysisRequest, AnalysisResult, Classifier},
    errors::AnalysisError,
    time::{FixedTime, TimeSource},
    Station, SystemStatus, TelemetryGenerator,
};

/// Offline stand-in for the AI service
struct DrillClassifier;

impl Classifier for DrillClassifier {
    fn classify(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        Ok(AnalysisResult {
            is_fire: true,
            confidence: 0.93,
            reasoning: format!(
                "{:.1}°C with smoke density {:.0} matches an open-flame signature.",
                request.reading.temperature, request.reading.smoke_level
            ),
        })
    }
}

fn main() {
    println!("PyroGuard Fire Drill Example");
    println!("============================\n");

    let mut station = Station::with_generator(TelemetryGenerator::with_seed(7));
    let mut clock = FixedTime::new(0);
    let classifier = DrillClassifier;

    station.set_fire_drill(true);
    println!("Fire drill enabled, sampling...\n");

    let mut printed = 0;
    for _ in 0..12 {
        clock.advance(1000);
        station.tick(clock.now());
        station.service(&classifier, clock.now());

        // Print any new operator log entries
        for entry in &station.logbook().entries()[printed..] {
            println!("[{:7}] {:8} {}", entry.timestamp, entry.level.name(), entry.message);
        }
        printed = station.logbook().len();

        if station.status() == SystemStatus::Confirmed {
            break;
        }
    }

    println!("\nFinal status: {}", station.status());
    if let Some(reasoning) = station.analysis_reasoning() {
        println!("AI reasoning: {reasoning}");
    }

    println!("\nResetting...");
    clock.advance(1000);
    station.reset(clock.now());
    println!("Status: {}, fire drill: {}", station.status(), station.fire_drill());
}
