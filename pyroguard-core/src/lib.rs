//! Core detection engine for PyroGuard
//!
//! Simulates a hybrid fire-detection rig: synthetic temperature/smoke
//! telemetry, threshold-breach evaluation, a staged smartphone-capture
//! workflow, and an AI classification step that confirms or clears a
//! detected risk.
//!
//! The engine is fully synchronous and single-threaded by design. Delayed
//! workflow transitions are deadlines checked against a [`TimeSource`] on
//! each poll, never background timers, so a manual reset can always cancel
//! a pending transition before it fires.
//!
//! ```no_run
//! use pyroguard_core::{Station, time::{SystemTime, TimeSource}};
//!
//! let mut station = Station::new();
//! let clock = SystemTime;
//!
//! // One sampling tick: generate, buffer, evaluate
//! station.tick(clock.now());
//!
//! // Fire any due workflow deadlines
//! if let Some(request) = station.poll(clock.now()) {
//!     // hand the request to a Classifier implementation
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod analysis;
pub mod buffer;
pub mod constants;
pub mod errors;
pub mod evaluator;
pub mod logbook;
pub mod reading;
pub mod station;
pub mod telemetry;
pub mod thresholds;
pub mod time;
pub mod workflow;

// Public API
pub use analysis::{AnalysisRequest, AnalysisResult, Classifier};
pub use errors::AnalysisError;
pub use evaluator::{Breach, ThresholdEvaluator};
pub use logbook::{LogEntry, LogLevel, Logbook};
pub use reading::Reading;
pub use station::Station;
pub use telemetry::{GeneratorMode, TelemetryGenerator};
pub use thresholds::Thresholds;
pub use workflow::{RiskWorkflow, SystemStatus};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
