//! Risk escalation workflow state machine
//!
//! ## Overview
//!
//! This module sequences the escalation from a threshold breach to a
//! confirmed or cleared fire:
//!
//! ```text
//! Normal ──breach──▶ Risk ──1s──▶ Risk (capturing) ──3s──▶ Analyzing
//!    ▲                                                        │
//!    │◀──────────────── verdict negative ─────────────────────┤
//!    │                                                        ▼
//!    └◀───────────── manual reset ─────────────────────── Confirmed
//! ```
//!
//! ## Design
//!
//! The two fixed delays are not background timers. Each is a pending
//! `(deadline, step)` pair fired by [`RiskWorkflow::poll`] when the
//! caller's clock passes the deadline. This keeps the whole machine on a
//! single thread and makes cancellation trivial: a manual reset clears the
//! pending step and bumps a generation counter, so nothing can fire later.
//!
//! The analysis call is asynchronous from the machine's point of view:
//! `poll` hands out an [`AnalysisRequest`] when capture completes, and the
//! verdict re-enters through [`RiskWorkflow::complete_analysis`]. The
//! request carries the generation at emission time; a completion with a
//! stale generation (reset happened in between) is discarded instead of
//! resurrecting Risk or Confirmed state.
//!
//! At most one escalation is in flight: the station only evaluates
//! breaches while the status is `Normal`, and `trigger` ignores calls in
//! any other state. Confirmed persists until a manual reset; there is no
//! auto-recovery from a confirmed fire.

use core::fmt;

use crate::analysis::{AnalysisRequest, AnalysisResult};
use crate::constants::{CAPTURE_DURATION_MS, CAPTURE_REQUEST_DELAY_MS};
use crate::evaluator::Breach;
use crate::logbook::Logbook;
use crate::reading::Reading;
use crate::time::Timestamp;

/// Authoritative system status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemStatus {
    /// Monitoring, no escalation in flight
    Normal,
    /// Breach detected, capture being staged
    Risk,
    /// Media received, awaiting the classification verdict
    Analyzing,
    /// Fire confirmed; persists until manual reset
    Confirmed,
}

impl fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SystemStatus::Normal => "NORMAL",
            SystemStatus::Risk => "RISK",
            SystemStatus::Analyzing => "ANALYZING",
            SystemStatus::Confirmed => "CONFIRMED",
        };
        f.write_str(name)
    }
}

/// Delayed transition steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingStep {
    /// Request the smartphone capture (1s after trigger)
    RequestCapture,
    /// Capture finished, move to analysis (3s after the request)
    CompleteCapture,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    deadline: Timestamp,
    step: PendingStep,
}

/// The escalation state machine
pub struct RiskWorkflow {
    status: SystemStatus,
    /// Bumped on every reset; stale delayed completions are discarded
    generation: u32,
    pending: Option<Pending>,
    /// Reading captured at trigger time; analysis uses this snapshot even
    /// if thresholds are loosened mid-flight
    trigger_reading: Option<Reading>,
    capturing: bool,
    reasoning: Option<String>,
}

impl RiskWorkflow {
    /// Create a workflow in `Normal` status
    pub fn new() -> Self {
        Self {
            status: SystemStatus::Normal,
            generation: 0,
            pending: None,
            trigger_reading: None,
            capturing: false,
            reasoning: None,
        }
    }

    /// Current status
    pub fn status(&self) -> SystemStatus {
        self.status
    }

    /// Current generation counter
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Whether the simulated smartphone capture is in progress
    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    /// Reasoning from the most recent analysis, if any
    pub fn reasoning(&self) -> Option<&str> {
        self.reasoning.as_deref()
    }

    /// Start an escalation from a threshold breach
    ///
    /// Only honored while `Normal`; any other state means an escalation is
    /// already in flight and the call is ignored.
    pub fn trigger(&mut self, reading: Reading, breach: &Breach, now: Timestamp, logbook: &mut Logbook) {
        if self.status != SystemStatus::Normal {
            log::debug!("breach ignored, escalation already in flight ({})", self.status);
            return;
        }

        self.status = SystemStatus::Risk;
        self.trigger_reading = Some(reading);
        logbook.warning(now, format!("RISK DETECTED: {breach}"));

        self.pending = Some(Pending {
            deadline: now + CAPTURE_REQUEST_DELAY_MS,
            step: PendingStep::RequestCapture,
        });
    }

    /// Fire any due delayed transitions
    ///
    /// Returns an [`AnalysisRequest`] when the capture stage completes and
    /// the machine enters `Analyzing`. The caller owns the classification
    /// call and feeds the verdict back via [`Self::complete_analysis`].
    pub fn poll(&mut self, now: Timestamp, logbook: &mut Logbook) -> Option<AnalysisRequest> {
        while let Some(pending) = self.pending {
            if now < pending.deadline {
                return None;
            }
            self.pending = None;

            match pending.step {
                PendingStep::RequestCapture => {
                    logbook.info(now, "Requesting Smartphone Capture (Photo + Audio)...");
                    self.capturing = true;
                    self.pending = Some(Pending {
                        deadline: now + CAPTURE_DURATION_MS,
                        step: PendingStep::CompleteCapture,
                    });
                }
                PendingStep::CompleteCapture => {
                    self.capturing = false;
                    logbook.info(now, "Media Received. Initiating Deep Learning Analysis...");
                    self.status = SystemStatus::Analyzing;

                    let reading = self.trigger_reading?;
                    return Some(AnalysisRequest {
                        reading,
                        generation: self.generation,
                        has_audio: true,
                        has_image: true,
                    });
                }
            }
        }

        None
    }

    /// Apply a classification verdict
    ///
    /// `generation` must match the value carried by the request; a
    /// mismatch means a reset happened while the call was in flight and
    /// the verdict is dropped without touching the current state.
    pub fn complete_analysis(
        &mut self,
        generation: u32,
        result: AnalysisResult,
        now: Timestamp,
        logbook: &mut Logbook,
    ) {
        if generation != self.generation || self.status != SystemStatus::Analyzing {
            log::debug!("stale analysis verdict discarded (generation {generation})");
            return;
        }

        self.reasoning = Some(result.reasoning.clone());

        if result.is_fire {
            self.status = SystemStatus::Confirmed;
            logbook.alert(now, format!("FIRE CONFIRMED: {}", result.reasoning));
            logbook.success(now, "Alerts sent to WhatsApp, Telegram, Email.");
        } else {
            self.status = SystemStatus::Normal;
            logbook.success(now, format!("Analysis Negative: {}", result.reasoning));
        }
    }

    /// Force the machine back to `Normal`
    ///
    /// Clears the pending step and stored reasoning, and bumps the
    /// generation so any in-flight analysis completion becomes stale.
    /// Idempotent apart from the log entry.
    pub fn reset(&mut self, now: Timestamp, logbook: &mut Logbook) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
        self.trigger_reading = None;
        self.capturing = false;
        self.reasoning = None;
        self.status = SystemStatus::Normal;
        logbook.info(now, "System manually reset.");
    }
}

impl Default for RiskWorkflow {
    fn default() -> Self {
        Self::new()
    }
}
