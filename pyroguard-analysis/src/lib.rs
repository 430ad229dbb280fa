//! Classification collaborators for PyroGuard
//!
//! Implementations of the [`pyroguard_core::Classifier`] seam:
//!
//! - [`GeminiClassifier`]: calls the Gemini `generateContent` REST API
//!   with the rig's telemetry and capture manifest, asking for a
//!   JSON-schema-constrained fire verdict. Degrades to a fixed mock
//!   verdict when no API key is configured; a missing credential is a
//!   supported configuration, not an error.
//! - [`mock`]: deterministic collaborators for demos and tests.
//!
//! Call failures surface as [`pyroguard_core::AnalysisError`]; the station
//! substitutes the negative fallback verdict so the workflow never gets
//! stuck in `Analyzing` because of this crate.
//!
//! ```no_run
//! use pyroguard_analysis::{GeminiClassifier, GeminiConfig};
//!
//! let classifier = GeminiClassifier::new(GeminiConfig::from_env());
//! // hand &classifier to Station::service
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod gemini;
pub mod mock;

pub use gemini::{GeminiClassifier, GeminiConfig, GeminiError};
pub use mock::{FailingClassifier, FixedVerdict};
