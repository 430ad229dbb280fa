//! Station: single owner of all mutable detection state
//!
//! The station wires the components together and is the only writer of
//! history, thresholds, logbook, and workflow state. Display consumers
//! get read-only accessors; drivers call [`Station::tick`] once per
//! sampling period and [`Station::poll`] (or [`Station::service`])
//! afterwards.
//!
//! Sampling never stops: readings are buffered on every tick regardless
//! of workflow state, but threshold evaluation is suppressed outside
//! `Normal` so an in-flight escalation cannot be re-triggered.

use crate::analysis::{AnalysisRequest, AnalysisResult, Classifier};
use crate::buffer::HistoryBuffer;
use crate::constants::MAX_HISTORY_POINTS;
use crate::errors::AnalysisError;
use crate::evaluator::ThresholdEvaluator;
use crate::logbook::Logbook;
use crate::reading::Reading;
use crate::telemetry::{GeneratorMode, TelemetryGenerator};
use crate::thresholds::Thresholds;
use crate::time::Timestamp;
use crate::workflow::{RiskWorkflow, SystemStatus};

/// The complete detection rig
pub struct Station {
    generator: TelemetryGenerator,
    history: HistoryBuffer<MAX_HISTORY_POINTS>,
    thresholds: Thresholds,
    evaluator: ThresholdEvaluator,
    workflow: RiskWorkflow,
    logbook: Logbook,
    fire_drill: bool,
}

impl Station {
    /// Create a station with default thresholds and an entropy-seeded generator
    pub fn new() -> Self {
        Self::with_generator(TelemetryGenerator::new())
    }

    /// Create a station with a caller-supplied generator (seeded, in tests)
    pub fn with_generator(generator: TelemetryGenerator) -> Self {
        Self {
            generator,
            history: HistoryBuffer::new(),
            thresholds: Thresholds::default(),
            evaluator: ThresholdEvaluator,
            workflow: RiskWorkflow::new(),
            logbook: Logbook::new(),
            fire_drill: false,
        }
    }

    /// One sampling tick: generate a reading, buffer it, evaluate thresholds
    ///
    /// Evaluation only runs while the workflow is `Normal`; a breach hands
    /// the triggering reading to the workflow.
    pub fn tick(&mut self, now: Timestamp) {
        let mode = if self.fire_drill {
            GeneratorMode::FireDrill
        } else {
            GeneratorMode::Normal
        };
        let reading = self.generator.sample(mode, now);
        self.observe(reading);
    }

    /// Inject an externally produced reading (tests, replay)
    ///
    /// Same buffering and evaluation path as [`Self::tick`], without the
    /// generator.
    pub fn ingest(&mut self, reading: Reading) {
        self.observe(reading);
    }

    /// Buffer a reading and evaluate it while `Normal`
    fn observe(&mut self, reading: Reading) {
        self.history.push(reading);

        if self.workflow.status() == SystemStatus::Normal {
            if let Some(breach) = self.evaluator.evaluate(&reading, &self.thresholds) {
                log::debug!(
                    "{:?} reading {:.1} exceeded trigger {:.1}",
                    breach.cause,
                    breach.value,
                    breach.threshold
                );
                self.workflow
                    .trigger(reading, &breach, reading.timestamp, &mut self.logbook);
            }
        }
    }

    /// Fire any due workflow deadlines
    ///
    /// Returns a classification request when the capture stage completes.
    /// The caller runs the classifier (inline or on a helper thread) and
    /// feeds the outcome back through [`Self::complete_analysis`].
    pub fn poll(&mut self, now: Timestamp) -> Option<AnalysisRequest> {
        self.workflow.poll(now, &mut self.logbook)
    }

    /// Apply a classification outcome
    ///
    /// A failed call is substituted with the negative fallback verdict so
    /// the workflow always leaves `Analyzing`. Stale generations are
    /// discarded by the workflow.
    pub fn complete_analysis(
        &mut self,
        generation: u32,
        outcome: Result<AnalysisResult, AnalysisError>,
        now: Timestamp,
    ) {
        let result = outcome.unwrap_or_else(|err| {
            log::warn!("analysis service failure: {err}");
            AnalysisResult::service_failure()
        });
        self.workflow.complete_analysis(generation, result, now, &mut self.logbook);
    }

    /// Poll and, if a request is due, classify inline
    ///
    /// Convenience for single-threaded drivers. Returns true when an
    /// analysis ran.
    pub fn service(&mut self, classifier: &dyn Classifier, now: Timestamp) -> bool {
        match self.poll(now) {
            Some(request) => {
                let generation = request.generation;
                let outcome = classifier.classify(&request);
                self.complete_analysis(generation, outcome, now);
                true
            }
            None => false,
        }
    }

    /// Manual reset: back to `Normal`, fire-drill mode off
    pub fn reset(&mut self, now: Timestamp) {
        self.fire_drill = false;
        self.workflow.reset(now, &mut self.logbook);
    }

    /// Enable or disable fire-drill telemetry
    pub fn set_fire_drill(&mut self, enabled: bool) {
        self.fire_drill = enabled;
    }

    /// Whether fire-drill telemetry is active
    pub fn fire_drill(&self) -> bool {
        self.fire_drill
    }

    /// Adjust the temperature trigger (clamped)
    pub fn set_temperature_threshold(&mut self, celsius: f32) {
        self.thresholds.set_temperature(celsius);
    }

    /// Adjust the smoke trigger (clamped and quantized)
    pub fn set_smoke_threshold(&mut self, level: f32) {
        self.thresholds.set_smoke_level(level);
    }

    // Read-only exposure for display consumers

    /// Current workflow status
    pub fn status(&self) -> SystemStatus {
        self.workflow.status()
    }

    /// Current thresholds
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Reading history, oldest to newest
    pub fn history(&self) -> &HistoryBuffer<MAX_HISTORY_POINTS> {
        &self.history
    }

    /// Most recent reading
    pub fn latest_reading(&self) -> Option<&Reading> {
        self.history.latest()
    }

    /// Operator log
    pub fn logbook(&self) -> &Logbook {
        &self.logbook
    }

    /// Whether the simulated capture is in progress
    pub fn is_capturing(&self) -> bool {
        self.workflow.is_capturing()
    }

    /// Reasoning from the most recent analysis
    pub fn analysis_reasoning(&self) -> Option<&str> {
        self.workflow.reasoning()
    }
}

impl Default for Station {
    fn default() -> Self {
        Self::new()
    }
}
