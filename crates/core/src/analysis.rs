//! Coercion of free-form model text into a strict analysis result.
//!
//! The model is asked for a specific JSON shape but only loosely follows
//! formatting instructions, so the result type is an explicit two-variant
//! enum rather than an error path: a reply either parses as JSON and is
//! passed through unchanged, or the request degrades to a fixed-shape
//! fallback that preserves the raw model text for the user. Parsing never
//! fails a request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::sanitize::sanitize_model_response;

/// Sign label used in the degraded result.
pub const UNKNOWN_SIGN: &str = "Unknown";

/// Feedback placeholder used when no model text is available at all.
pub const FALLBACK_FEEDBACK: &str = "Error processing feedback";

/// Fixed summary attached to every degraded result.
pub const FALLBACK_SUMMARY: &str = "Please try again with clearer signing.";

/// One sign identified by the model within the frame sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignDetection {
    /// Name of the sign, letter, or gesture.
    pub sign: String,
    /// Free-form ordinal label, e.g. `"first sign"` or `"only sign detected"`.
    pub sequence_position: String,
    /// Per-sign feedback on form, hand position, and movement.
    pub feedback: String,
}

/// The schema the prompt asks the model to produce.
///
/// This is a *view*, not a gate: a structured result is accepted whenever
/// the reply is valid JSON, even if fields from this shape are missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// All signs identified across the sequence, in performance order.
    pub signs_detected: Vec<SignDetection>,
    /// Comprehensive narrative feedback covering all signs (advisory
    /// 150-200 words; length is requested, never enforced).
    pub detailed_feedback: String,
    /// Brief summary highlighting key points.
    pub summary: String,
}

/// Outcome of interpreting one model reply.
///
/// Serializes untagged: the transport layer does not distinguish the two
/// variants structurally, but every caller in code must handle both.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    /// The sanitized reply parsed as JSON; passed through unchanged.
    ///
    /// No schema validation is applied beyond JSON syntax: a reply with
    /// missing fields, extra fields, or an empty `signs_detected` array is
    /// still structured output and reaches the client as-is.
    Structured(Value),

    /// The reply was not machine-parseable; the raw text is preserved so
    /// the user still sees whatever the model said.
    Degraded {
        identified_sign: &'static str,
        detailed_feedback: String,
        summary: &'static str,
    },
}

impl AnalysisResult {
    /// Interpret a raw model reply. Never fails.
    ///
    /// The reply is sanitized (fence stripping, edge trims) and parsed as
    /// JSON. On parse failure the *unsanitized* text is embedded in the
    /// degraded variant -- sanitization exists to help parsing succeed,
    /// not to rewrite what the user gets to see.
    pub fn from_model_text(raw: &str) -> Self {
        let candidate = sanitize_model_response(raw);

        match serde_json::from_str::<Value>(candidate) {
            Ok(value) => AnalysisResult::Structured(value),
            Err(err) => {
                tracing::warn!(error = %err, "Model reply was not valid JSON, degrading");
                AnalysisResult::Degraded {
                    identified_sign: UNKNOWN_SIGN,
                    detailed_feedback: if raw.is_empty() {
                        FALLBACK_FEEDBACK.to_string()
                    } else {
                        raw.to_string()
                    },
                    summary: FALLBACK_SUMMARY,
                }
            }
        }
    }

    /// Typed view of the structured variant.
    ///
    /// Returns `None` for degraded results and for structured results that
    /// do not conform to [`AnalysisReport`].
    pub fn report(&self) -> Option<AnalysisReport> {
        match self {
            AnalysisResult::Structured(value) => serde_json::from_value(value.clone()).ok(),
            AnalysisResult::Degraded { .. } => None,
        }
    }
}
