//! REST client for the Gemini `generateContent` endpoint.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use signcoach_core::DecodedFrame;

use crate::gateway::{GatewayError, VisionGateway};
use crate::types::{Content, GenerateContentRequest, GenerateContentResponse, InlineData, Part};

/// Default model used for frame analysis.
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// Default Gemini REST API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration for a [`GeminiClient`], loaded from the environment.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key sent as the `x-goog-api-key` header.
    pub api_key: String,
    /// Model identifier (default: `gemini-2.5-pro`).
    pub model: String,
    /// API base URL (default: the public Gemini endpoint; overridable
    /// so tests can point the client at a local stub).
    pub base_url: String,
}

impl GeminiConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var           | Default                                          |
    /// |-------------------|--------------------------------------------------|
    /// | `GEMINI_API_KEY`  | (required)                                       |
    /// | `GEMINI_MODEL`    | `gemini-2.5-pro`                                 |
    /// | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com/v1beta` |
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set");

        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        let base_url = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        Self {
            api_key,
            model,
            base_url,
        }
    }
}

/// HTTP client for the Gemini API.
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new client with its own connection pool.
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }

    /// Build the request body: images first, in input order, then the
    /// instruction as the final text part.
    fn build_request(frames: &[DecodedFrame], instruction: &str) -> GenerateContentRequest {
        let mut parts: Vec<Part> = frames
            .iter()
            .map(|frame| Part::InlineData {
                inline_data: InlineData {
                    mime_type: frame.mime_type.to_string(),
                    data: BASE64.encode(&frame.data),
                },
            })
            .collect();

        parts.push(Part::Text {
            text: instruction.to_string(),
        });

        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
        }
    }
}

#[async_trait]
impl VisionGateway for GeminiClient {
    async fn generate_content(
        &self,
        frames: &[DecodedFrame],
        instruction: &str,
    ) -> Result<String, GatewayError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        let body = Self::build_request(frames, instruction);

        tracing::debug!(
            model = %self.config.model,
            frame_count = frames.len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        parsed.into_text().ok_or(GatewayError::EmptyResponse)
    }
}
