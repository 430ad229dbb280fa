//! Trigger threshold configuration
//!
//! Thresholds are live configuration: the evaluator reads them on every
//! sampling tick, so an adjustment takes effect on the next tick without
//! any snapshotting. An escalation already in flight keeps the reading
//! captured at trigger time and is not re-checked.

use serde::Serialize;

use crate::constants::{
    DEFAULT_SMOKE_THRESHOLD, DEFAULT_TEMP_THRESHOLD, SMOKE_THRESHOLD_MAX, SMOKE_THRESHOLD_MIN,
    SMOKE_THRESHOLD_STEP, TEMP_THRESHOLD_MAX, TEMP_THRESHOLD_MIN,
};

/// Operator-adjustable trigger thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    temperature: f32,
    smoke_level: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMP_THRESHOLD,
            smoke_level: DEFAULT_SMOKE_THRESHOLD,
        }
    }
}

impl Thresholds {
    /// Create thresholds, applying the same clamping as the setters
    pub fn new(temperature: f32, smoke_level: f32) -> Self {
        let mut thresholds = Self::default();
        thresholds.set_temperature(temperature);
        thresholds.set_smoke_level(smoke_level);
        thresholds
    }

    /// Temperature trigger in Celsius
    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Smoke density trigger (0-100)
    pub fn smoke_level(&self) -> f32 {
        self.smoke_level
    }

    /// Set the temperature trigger, clamped to the adjustable range
    pub fn set_temperature(&mut self, celsius: f32) {
        self.temperature = celsius.clamp(TEMP_THRESHOLD_MIN, TEMP_THRESHOLD_MAX);
    }

    /// Set the smoke trigger, clamped and quantized to the slider step
    pub fn set_smoke_level(&mut self, level: f32) {
        let clamped = level.clamp(SMOKE_THRESHOLD_MIN, SMOKE_THRESHOLD_MAX);
        self.smoke_level = (clamped / SMOKE_THRESHOLD_STEP).round() * SMOKE_THRESHOLD_STEP;
    }
}
