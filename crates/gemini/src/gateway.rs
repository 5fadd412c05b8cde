//! The vision-gateway seam between the HTTP layer and the model backend.

use async_trait::async_trait;
use signcoach_core::DecodedFrame;

/// A single synchronous call into a multimodal vision-language capability.
///
/// Implementations take the ordered image set and one instruction and
/// return raw model text. No retries, no local timeout, no circuit
/// breaker: the caller treats this boundary as unreliable and handles
/// degradation itself. The handle is stateless and shared across requests.
#[async_trait]
pub trait VisionGateway: Send + Sync {
    /// Invoke the model with `frames` in order followed by `instruction`.
    ///
    /// A successful return is *text*, nothing more -- possibly empty,
    /// possibly prose, possibly partial JSON.
    async fn generate_content(
        &self,
        frames: &[DecodedFrame],
        instruction: &str,
    ) -> Result<String, GatewayError>;
}

/// Errors from the gateway layer.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("Gemini API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The backend answered 2xx but produced no candidates at all
    /// (e.g. the prompt was blocked by a safety filter).
    #[error("Gemini returned no candidates")]
    EmptyResponse,
}
