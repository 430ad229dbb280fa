//! Synthetic telemetry generation
//!
//! There is no hardware behind this rig: every reading is drawn from one
//! of two uniform distributions, selected by the fire-drill flag. Normal
//! mode models a quiet room, fire-drill mode an open flame next to the
//! sensors. Ranges are half-open `[min, max)`.
//!
//! The generator is deliberately not reproducible in live use (entropy
//! seed); tests use [`TelemetryGenerator::with_seed`] for determinism.

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::constants::{FIRE_SMOKE_RANGE, FIRE_TEMP_RANGE, NORMAL_SMOKE_RANGE, NORMAL_TEMP_RANGE};
use crate::reading::Reading;
use crate::time::Timestamp;

/// Which distribution the generator draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorMode {
    /// Quiet-room telemetry: temp 20-25°C, smoke 0-15
    Normal,
    /// Simulated fire: temp 60-90°C, smoke 60-100
    FireDrill,
}

/// Produces one synthetic reading per sampling tick
pub struct TelemetryGenerator {
    rng: SmallRng,
}

impl TelemetryGenerator {
    /// Create a generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create a deterministic generator for tests
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Draw one reading for the given mode and timestamp
    pub fn sample(&mut self, mode: GeneratorMode, timestamp: Timestamp) -> Reading {
        let (temp_range, smoke_range) = match mode {
            GeneratorMode::Normal => (NORMAL_TEMP_RANGE, NORMAL_SMOKE_RANGE),
            GeneratorMode::FireDrill => (FIRE_TEMP_RANGE, FIRE_SMOKE_RANGE),
        };

        Reading {
            timestamp,
            temperature: self.rng.gen_range(temp_range.0..temp_range.1),
            smoke_level: self.rng.gen_range(smoke_range.0..smoke_range.1),
        }
    }
}

impl Default for TelemetryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_mode_ranges() {
        let mut generator = TelemetryGenerator::with_seed(42);

        for i in 0..1000 {
            let reading = generator.sample(GeneratorMode::Normal, i);
            assert!((20.0..25.0).contains(&reading.temperature), "temp {}", reading.temperature);
            assert!((0.0..15.0).contains(&reading.smoke_level), "smoke {}", reading.smoke_level);
            assert_eq!(reading.timestamp, i);
        }
    }

    #[test]
    fn fire_drill_ranges() {
        let mut generator = TelemetryGenerator::with_seed(7);

        for i in 0..1000 {
            let reading = generator.sample(GeneratorMode::FireDrill, i);
            assert!((60.0..90.0).contains(&reading.temperature), "temp {}", reading.temperature);
            assert!((60.0..100.0).contains(&reading.smoke_level), "smoke {}", reading.smoke_level);
        }
    }

    #[test]
    fn seeded_generators_agree() {
        let mut a = TelemetryGenerator::with_seed(1);
        let mut b = TelemetryGenerator::with_seed(1);

        for i in 0..10 {
            assert_eq!(a.sample(GeneratorMode::Normal, i), b.sample(GeneratorMode::Normal, i));
        }
    }

    #[test]
    fn fire_drill_always_breaches_defaults() {
        // Fire-drill floor (60, 60) sits above the default thresholds
        // (50, 40), so a drill reading must always trip at least one.
        let mut generator = TelemetryGenerator::with_seed(99);
        let reading = generator.sample(GeneratorMode::FireDrill, 0);
        assert!(reading.temperature > 50.0 || reading.smoke_level > 40.0);
    }
}
