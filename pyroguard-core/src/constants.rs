//! Engine constants: timing, capacities, telemetry ranges, defaults
//!
//! Everything time-valued is in milliseconds to match [`crate::time::Timestamp`].

/// Sampling period of the telemetry loop
pub const SAMPLE_PERIOD_MS: u64 = 1000;

/// Delay between risk detection and the smartphone capture request
pub const CAPTURE_REQUEST_DELAY_MS: u64 = 1000;

/// Simulated capture and media transfer time
pub const CAPTURE_DURATION_MS: u64 = 3000;

/// Maximum readings retained for charting and rate display
///
/// At one reading per second this is a 30 second sliding window.
pub const MAX_HISTORY_POINTS: usize = 30;

// Default trigger thresholds

/// Default temperature trigger in Celsius
pub const DEFAULT_TEMP_THRESHOLD: f32 = 50.0;

/// Default smoke density trigger (0-100 arbitrary unit)
pub const DEFAULT_SMOKE_THRESHOLD: f32 = 40.0;

// Threshold adjustment bounds (operator-facing sliders)

/// Lowest configurable temperature trigger
pub const TEMP_THRESHOLD_MIN: f32 = 30.0;

/// Highest configurable temperature trigger
pub const TEMP_THRESHOLD_MAX: f32 = 100.0;

/// Lowest configurable smoke trigger
pub const SMOKE_THRESHOLD_MIN: f32 = 0.0;

/// Highest configurable smoke trigger
pub const SMOKE_THRESHOLD_MAX: f32 = 100.0;

/// Smoke trigger adjustment granularity
pub const SMOKE_THRESHOLD_STEP: f32 = 5.0;

// Synthetic telemetry distributions
//
// Normal mode models a quiet room; fire-drill mode models an open flame
// close to the rig. Ranges are half-open: [min, max).

/// Normal mode temperature range in Celsius
pub const NORMAL_TEMP_RANGE: (f32, f32) = (20.0, 25.0);

/// Normal mode smoke density range
pub const NORMAL_SMOKE_RANGE: (f32, f32) = (0.0, 15.0);

/// Fire-drill temperature range in Celsius
pub const FIRE_TEMP_RANGE: (f32, f32) = (60.0, 90.0);

/// Fire-drill smoke density range
pub const FIRE_SMOKE_RANGE: (f32, f32) = (60.0, 100.0);
