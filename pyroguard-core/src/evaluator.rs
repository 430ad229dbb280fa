//! Threshold breach evaluation
//!
//! Compares the latest reading against the current thresholds and reports
//! the breaching cause. The rule is a plain OR: either metric exceeding
//! its trigger escalates. When both breach on the same tick, temperature
//! takes reporting priority and its cause string is used.
//!
//! Evaluation only runs while the workflow is in `Normal` status: the
//! station enforces that guard so an in-flight escalation is never
//! re-triggered by subsequent hot readings.

use core::fmt;

use crate::reading::Reading;
use crate::thresholds::Thresholds;

/// Which metric tripped its trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachCause {
    /// Temperature exceeded its trigger (reporting priority)
    Temperature,
    /// Smoke density exceeded its trigger
    Smoke,
}

/// A threshold breach with the offending value and its trigger
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breach {
    /// Breaching metric
    pub cause: BreachCause,
    /// Value that tripped the trigger
    pub value: f32,
    /// Trigger level that was exceeded
    pub threshold: f32,
}

impl fmt::Display for Breach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cause {
            BreachCause::Temperature => write!(f, "Temp High ({:.1}°C)", self.value),
            BreachCause::Smoke => write!(f, "Smoke Detected ({:.0})", self.value),
        }
    }
}

/// Stateless threshold evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdEvaluator;

impl ThresholdEvaluator {
    /// Check a reading against the current thresholds
    ///
    /// Returns `None` when neither metric exceeds its trigger. Comparison
    /// is strictly greater-than: a reading exactly at the trigger does not
    /// escalate.
    pub fn evaluate(&self, reading: &Reading, thresholds: &Thresholds) -> Option<Breach> {
        if reading.temperature > thresholds.temperature() {
            return Some(Breach {
                cause: BreachCause::Temperature,
                value: reading.temperature,
                threshold: thresholds.temperature(),
            });
        }

        if reading.smoke_level > thresholds.smoke_level() {
            return Some(Breach {
                cause: BreachCause::Smoke,
                value: reading.smoke_level,
                threshold: thresholds.smoke_level(),
            });
        }

        None
    }
}
