//! Error types for the analysis boundary
//!
//! The detection engine itself has no fallible operations: sampling,
//! evaluation, and workflow transitions cannot fail. Errors only arise at
//! the classification collaborator boundary, and they are always recovered
//! locally: the station substitutes a negative verdict and the workflow
//! resumes to `Normal`. Nothing here is fatal to the sampling loop.

use thiserror::Error;

/// Classification collaborator failures
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Request never reached the service (network, DNS, timeout)
    #[error("analysis request failed: {0}")]
    Request(String),

    /// Service answered with an error status
    #[error("analysis service returned status {status}: {message}")]
    Service {
        /// HTTP status code
        status: u16,
        /// Response body or status text
        message: String,
    },

    /// Response arrived but could not be interpreted
    #[error("malformed analysis response: {0}")]
    Malformed(String),
}
