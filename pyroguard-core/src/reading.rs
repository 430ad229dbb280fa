//! Sensor reading data type
//!
//! One `Reading` is produced per sampling tick and owned by the history
//! buffer afterwards. Readings are never mutated once created.

use serde::Serialize;

use crate::time::Timestamp;

/// One sampled temperature/smoke data point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reading {
    /// Sample time in milliseconds
    pub timestamp: Timestamp,
    /// Temperature in Celsius
    pub temperature: f32,
    /// Smoke density on a 0-100 arbitrary scale
    pub smoke_level: f32,
}

impl Reading {
    /// Create a new reading
    pub fn new(timestamp: Timestamp, temperature: f32, smoke_level: f32) -> Self {
        Self {
            timestamp,
            temperature,
            smoke_level,
        }
    }
}
