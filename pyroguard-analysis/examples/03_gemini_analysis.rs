//! Gemini Analysis Example
//!
//! Runs a fire drill against the Gemini classifier. With `GEMINI_API_KEY`
//! set this makes a live `generateContent` call; without it the client
//! degrades to the built-in mock verdict, so the example always completes.
//!
//! ## Running the Example
//!
//! ```bash
//! GEMINI_API_KEY=... cargo run --example 03_gemini_analysis
//! # or offline:
//! cargo run --example 03_gemini_analysis
//! ```

use pyroguard_analysis::{GeminiClassifier, GeminiConfig};
use pyroguard_core::{
    time::{FixedTime, TimeSource},
    Station, SystemStatus, TelemetryGenerator,
};

fn main() {
    println!("PyroGuard Gemini Analysis Example");
    println!("=================================\n");

    let classifier = GeminiClassifier::new(GeminiConfig::from_env());
    println!(
        "Classifier mode: {}\n",
        if classifier.is_live() { "live Gemini API" } else { "mock (no API key)" }
    );

    let mut station = Station::with_generator(TelemetryGenerator::with_seed(11));
    let mut clock = FixedTime::new(0);

    station.set_fire_drill(true);

    for _ in 0..10 {
        clock.advance(1000);
        station.tick(clock.now());
        if station.service(&classifier, clock.now()) {
            break;
        }
    }

    for entry in station.logbook().entries() {
        println!("[{:6}] {:8} {}", entry.timestamp, entry.level.name(), entry.message);
    }

    println!("\nFinal status: {}", station.status());
    match station.status() {
        SystemStatus::Confirmed => {
            if let Some(reasoning) = station.analysis_reasoning() {
                println!("Reasoning: {reasoning}");
            }
        }
        SystemStatus::Normal => println!("Analysis came back negative; system recovered."),
        other => println!("Workflow still in {other}"),
    }
}
