//! Basic Monitoring Loop Example
//!
//! Runs the station through thirty quiet-room sampling ticks and prints
//! the sliding reading history, demonstrating generation, buffering, and
//! the Normal-status evaluation path.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_monitoring_loop
//! ```

use pyroguard_core::{
    time::{FixedTime, TimeSource},
    Station, TelemetryGenerator,
};

fn main() {
    println!("PyroGuard Monitoring Loop Example");
    println!("=================================\n");

    let mut station = Station::with_generator(TelemetryGenerator::with_seed(2024));
    let mut clock = FixedTime::new(0);

    println!("Thresholds: >{:.0}°C temperature, >{:.0} smoke\n",
        station.thresholds().temperature(),
        station.thresholds().smoke_level());

    for _ in 0..30 {
        clock.advance(1000);
        station.tick(clock.now());
    }

    println!("After 30 ticks: {} readings buffered (capacity {})",
        station.history().len(),
        station.history().capacity());

    if let Some(latest) = station.latest_reading() {
        println!("Latest: {:.1}°C, smoke {:.0}", latest.temperature, latest.smoke_level);
    }

    println!("\nLast five readings:");
    for reading in station.history().iter().skip(25) {
        println!("  t={:6}ms  {:5.1}°C  smoke {:4.1}",
            reading.timestamp, reading.temperature, reading.smoke_level);
    }

    println!("\nStatus: {} ({} log entries)", station.status(), station.logbook().len());
}
