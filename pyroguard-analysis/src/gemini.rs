//! Gemini REST client for fire classification
//!
//! ## Overview
//!
//! Sends the triggering reading plus the capture manifest to the Gemini
//! `generateContent` endpoint and asks for a schema-constrained JSON
//! verdict. The implementation is intentionally lightweight: a blocking
//! `ureq` agent, JSON via `serde_json`, and a small retry loop with
//! exponential backoff.
//!
//! ## Degradation policy
//!
//! - No API key configured: return a fixed mock verdict instead of
//!   failing, since the rig must be demonstrable offline.
//! - Transport error, error status, or unparseable response: return a
//!   [`GeminiError`], surfaced to callers as an [`AnalysisError`]; the
//!   station converts it into the negative fallback verdict.
//! - Response parsed but fields missing: `serde` defaults fill in a safe
//!   negative verdict.

use std::time::Duration;

use serde_json::{json, Value};
use thiserror::Error;

use pyroguard_core::{AnalysisError, AnalysisRequest, AnalysisResult, Classifier};

/// Default Gemini API endpoint
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model for reasoning over telemetry
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Backoff exponents above this are clamped to keep the shift in range
const MAX_BACKOFF_EXPONENT: u32 = 10;

/// Errors from the Gemini transport and response parsing
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Request could not be sent or its response body not read
    #[error("transport failure: {0}")]
    Transport(String),

    /// Service answered with an error status
    #[error("service returned status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Error body, or a placeholder when unreadable
        message: String,
    },

    /// Response envelope or verdict JSON did not parse
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<GeminiError> for AnalysisError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::Transport(message) => AnalysisError::Request(message),
            GeminiError::Status { status, message } => AnalysisError::Service { status, message },
            GeminiError::Malformed(message) => AnalysisError::Malformed(message),
        }
    }
}

/// Gemini client configuration
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Model name used in the request path
    pub model: String,
    /// API key; `None` selects the mock verdict path
    pub api_key: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Retry attempts after the first failure
    pub max_retries: u32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            model: DEFAULT_MODEL.into(),
            api_key: None,
            timeout: Duration::from_secs(30),
            max_retries: 2,
        }
    }
}

impl GeminiConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the API key from `GEMINI_API_KEY` (falling back to `API_KEY`)
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok()
            .filter(|key| !key.is_empty());
        Self {
            api_key,
            ..Self::default()
        }
    }

    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the base URL (test servers)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the model name
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the request timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Set the retry count
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }
}

/// Classifier backed by the Gemini `generateContent` API
pub struct GeminiClassifier {
    config: GeminiConfig,
    agent: ureq::Agent,
}

impl GeminiClassifier {
    /// Create a classifier from the given configuration
    pub fn new(config: GeminiConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(&format!("PyroGuard/{}", env!("CARGO_PKG_VERSION")))
            .build();

        Self { config, agent }
    }

    /// Whether a live service call will be made (an API key is present)
    pub fn is_live(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn mock_verdict() -> AnalysisResult {
        AnalysisResult {
            is_fire: true,
            confidence: 0.85,
            reasoning: "Simulated analysis (No API Key): High temperature and significant \
                        smoke levels detected consistent with fire signature."
                .into(),
        }
    }

    fn build_prompt(request: &AnalysisRequest) -> String {
        format!(
            "You are an AI Fire Detection System. Analyze the following IoT sensor telemetry \
             and available media metadata.\n\
             \n\
             Telemetry:\n\
             - Temperature: {:.1}°C\n\
             - Smoke Sensor Level: {:.0} (Scale 0-100)\n\
             \n\
             Media Available:\n\
             - Image Capture: {}\n\
             - Audio Recording: {}\n\
             \n\
             Determine if there is a high probability of fire.\n\
             Note: High temperatures coupled with high smoke density often indicate fire.\n\
             \n\
             Return JSON.",
            request.reading.temperature,
            request.reading.smoke_level,
            if request.has_image { "Received" } else { "None" },
            if request.has_audio {
                "Received (Crackling sounds detected)"
            } else {
                "None"
            },
        )
    }

    fn build_body(request: &AnalysisRequest) -> Value {
        json!({
            "contents": [{
                "parts": [{ "text": Self::build_prompt(request) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "isFire": { "type": "BOOLEAN" },
                        "confidence": { "type": "NUMBER", "description": "Number between 0 and 1" },
                        "reasoning": { "type": "STRING" }
                    },
                    "required": ["isFire", "confidence", "reasoning"]
                }
            }
        })
    }

    /// Extract the verdict JSON from the `generateContent` envelope
    fn parse_response(body: &str) -> Result<AnalysisResult, GeminiError> {
        let envelope: Value =
            serde_json::from_str(body).map_err(|e| GeminiError::Malformed(e.to_string()))?;

        let text = envelope
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .ok_or_else(|| GeminiError::Malformed("no candidate text in response".into()))?;

        // Missing verdict fields fall back to serde defaults (negative)
        serde_json::from_str(text).map_err(|e| GeminiError::Malformed(e.to_string()))
    }

    /// Delay before retry `attempt`, doubling per attempt with a capped exponent
    fn backoff_delay(attempt: u32) -> Duration {
        Duration::from_millis(100 * (1u64 << attempt.min(MAX_BACKOFF_EXPONENT)))
    }

    /// Execute the request with retry and exponential backoff
    fn call_with_retry(&self, key: &str, body: &str) -> Result<String, GeminiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        let mut last_error = GeminiError::Transport("no attempts made".into());

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                let delay = Self::backoff_delay(attempt);
                log::debug!("retrying analysis request (attempt {attempt}) after {delay:?}");
                std::thread::sleep(delay);
            }

            let response = self
                .agent
                .post(&url)
                .set("x-goog-api-key", key)
                .set("Content-Type", "application/json")
                .send_string(body);

            match response {
                Ok(resp) => {
                    return resp
                        .into_string()
                        .map_err(|e| GeminiError::Transport(e.to_string()));
                }
                Err(ureq::Error::Status(status, resp)) => {
                    let message = resp
                        .into_string()
                        .unwrap_or_else(|_| "unreadable error body".into());
                    last_error = GeminiError::Status { status, message };
                }
                Err(e) => {
                    last_error = GeminiError::Transport(e.to_string());
                }
            }
        }

        Err(last_error)
    }
}

impl Classifier for GeminiClassifier {
    fn classify(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        let Some(key) = self.config.api_key.as_deref() else {
            log::warn!("no API key configured, returning mock analysis");
            return Ok(Self::mock_verdict());
        };

        let body = Self::build_body(request).to_string();
        let response = self.call_with_retry(key, &body)?;
        Ok(Self::parse_response(&response)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyroguard_core::Reading;

    fn request() -> AnalysisRequest {
        AnalysisRequest {
            reading: Reading::new(1000, 72.3, 85.0),
            generation: 0,
            has_audio: true,
            has_image: true,
        }
    }

    #[test]
    fn missing_key_returns_mock_verdict() {
        let classifier = GeminiClassifier::new(GeminiConfig::new());
        assert!(!classifier.is_live());

        let result = classifier.classify(&request()).unwrap();
        assert!(result.is_fire);
        assert_eq!(result.confidence, 0.85);
        assert!(result.reasoning.starts_with("Simulated analysis (No API Key)"));
    }

    #[test]
    fn prompt_includes_telemetry_and_media() {
        let prompt = GeminiClassifier::build_prompt(&request());
        assert!(prompt.contains("Temperature: 72.3°C"));
        assert!(prompt.contains("Smoke Sensor Level: 85"));
        assert!(prompt.contains("Image Capture: Received"));
        assert!(prompt.contains("Crackling sounds detected"));
    }

    #[test]
    fn body_requests_schema_constrained_json() {
        let body = GeminiClassifier::build_body(&request());
        assert_eq!(
            body.pointer("/generationConfig/responseMimeType").unwrap(),
            "application/json"
        );
        assert!(body
            .pointer("/generationConfig/responseSchema/required")
            .unwrap()
            .as_array()
            .unwrap()
            .iter()
            .any(|v| v == "isFire"));
    }

    #[test]
    fn parses_verdict_from_envelope() {
        let envelope = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{
                        "text": r#"{"isFire": true, "confidence": 0.92, "reasoning": "flame visible"}"#
                    }]
                }
            }]
        })
        .to_string();

        let result = GeminiClassifier::parse_response(&envelope).unwrap();
        assert!(result.is_fire);
        assert_eq!(result.confidence, 0.92);
        assert_eq!(result.reasoning, "flame visible");
    }

    #[test]
    fn partial_verdict_takes_safe_defaults() {
        let envelope = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": r#"{"confidence": 0.5}"# }] }
            }]
        })
        .to_string();

        let result = GeminiClassifier::parse_response(&envelope).unwrap();
        assert!(!result.is_fire);
        assert_eq!(result.reasoning, "Analysis failed to produce reasoning.");
    }

    #[test]
    fn empty_envelope_is_malformed() {
        let err = GeminiClassifier::parse_response("{}").unwrap_err();
        assert!(matches!(err, GeminiError::Malformed(_)));
    }

    #[test]
    fn errors_map_to_analysis_boundary() {
        let err: AnalysisError = GeminiError::Status {
            status: 503,
            message: "overloaded".into(),
        }
        .into();
        assert!(matches!(err, AnalysisError::Service { status: 503, .. }));

        let err: AnalysisError = GeminiError::Transport("connection refused".into()).into();
        assert!(matches!(err, AnalysisError::Request(_)));

        let err: AnalysisError = GeminiError::Malformed("not json".into()).into();
        assert!(matches!(err, AnalysisError::Malformed(_)));
    }

    #[test]
    fn backoff_doubles_then_caps() {
        assert_eq!(GeminiClassifier::backoff_delay(1), Duration::from_millis(200));
        assert_eq!(GeminiClassifier::backoff_delay(2), Duration::from_millis(400));

        // Exponent is clamped, so absurd retry counts never overflow the shift
        let capped = GeminiClassifier::backoff_delay(MAX_BACKOFF_EXPONENT);
        assert_eq!(GeminiClassifier::backoff_delay(64), capped);
        assert_eq!(GeminiClassifier::backoff_delay(u32::MAX), capped);
    }
}
