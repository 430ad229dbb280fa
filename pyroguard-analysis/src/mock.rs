//! Deterministic classification collaborators
//!
//! Offline stand-ins for the live service: demos that must work without a
//! network, and tests that need a known verdict or a reproducible failure.

use pyroguard_core::{AnalysisError, AnalysisRequest, AnalysisResult, Classifier};

/// Classifier that always returns the same verdict
#[derive(Debug, Clone)]
pub struct FixedVerdict {
    result: AnalysisResult,
}

impl FixedVerdict {
    /// Verdict with explicit fields
    pub fn new(result: AnalysisResult) -> Self {
        Self { result }
    }

    /// Positive fire verdict
    pub fn fire(confidence: f32, reasoning: impl Into<String>) -> Self {
        Self::new(AnalysisResult {
            is_fire: true,
            confidence,
            reasoning: reasoning.into(),
        })
    }

    /// Negative verdict
    pub fn negative(confidence: f32, reasoning: impl Into<String>) -> Self {
        Self::new(AnalysisResult {
            is_fire: false,
            confidence,
            reasoning: reasoning.into(),
        })
    }
}

impl Classifier for FixedVerdict {
    fn classify(&self, _request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        Ok(self.result.clone())
    }
}

/// Classifier that always fails, for exercising the fallback path
#[derive(Debug, Clone, Default)]
pub struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn classify(&self, _request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        Err(AnalysisError::Request("simulated connection failure".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyroguard_core::Reading;

    fn request() -> AnalysisRequest {
        AnalysisRequest {
            reading: Reading::new(0, 65.0, 70.0),
            generation: 0,
            has_audio: true,
            has_image: true,
        }
    }

    #[test]
    fn fixed_verdict_is_stable() {
        let classifier = FixedVerdict::fire(0.9, "test");

        let first = classifier.classify(&request()).unwrap();
        let second = classifier.classify(&request()).unwrap();
        assert_eq!(first, second);
        assert!(first.is_fire);
    }

    #[test]
    fn failing_classifier_errors() {
        let classifier = FailingClassifier;
        assert!(classifier.classify(&request()).is_err());
    }
}
