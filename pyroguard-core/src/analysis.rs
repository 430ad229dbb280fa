//! Classification collaborator boundary
//!
//! During the `Analyzing` stage the workflow consults an external
//! classifier with the reading captured at trigger time plus capability
//! flags for the simulated media. The seam is a plain trait so the
//! live-service / mock split is a swappable implementation, not a
//! conditional inside the workflow.
//!
//! Implementations live outside this crate (see `pyroguard-analysis`);
//! tests implement the trait inline.

use serde::{Deserialize, Serialize};

use crate::errors::AnalysisError;
use crate::reading::Reading;

/// Verdict returned by the classification collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResult {
    /// Whether the evidence indicates fire
    pub is_fire: bool,
    /// Classifier confidence in [0, 1]
    pub confidence: f32,
    /// Free-text reasoning, displayed to the operator as-is
    pub reasoning: String,
}

impl Default for AnalysisResult {
    // Safe defaults for responses with missing fields: never a positive
    // verdict by accident.
    fn default() -> Self {
        Self {
            is_fire: false,
            confidence: 0.0,
            reasoning: "Analysis failed to produce reasoning.".into(),
        }
    }
}

impl AnalysisResult {
    /// Substitute verdict when the collaborator call fails outright
    ///
    /// The workflow must resume to `Normal` on service failure rather than
    /// stay stuck in `Analyzing`, so this is a negative verdict with an
    /// explanatory message, not an error.
    pub fn service_failure() -> Self {
        Self {
            is_fire: false,
            confidence: 0.0,
            reasoning: "Error connecting to AI analysis service.".into(),
        }
    }
}

/// One classification request, emitted when capture completes
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    /// The reading that triggered the escalation
    pub reading: Reading,
    /// Workflow generation at emission time; completions carrying a stale
    /// generation are discarded
    pub generation: u32,
    /// Audio recording available for analysis
    pub has_audio: bool,
    /// Image capture available for analysis
    pub has_image: bool,
}

/// Classification collaborator seam
pub trait Classifier {
    /// Classify captured evidence, returning a fire verdict
    fn classify(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError>;
}
