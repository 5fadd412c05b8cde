//! Handler for the `/analyze` endpoint.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use signcoach_core::{decode_frames, AnalysisResult, ANALYSIS_PROMPT};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Data-URL-encoded stills (`data:image/...;base64,<payload>`),
    /// in capture order. Only the first 30 are considered.
    pub frames: Vec<String>,
}

/// POST /analyze
///
/// Orchestration per request: decode frames (dropping failures), reject
/// the request if none survive, run one inference call, then coerce the
/// reply into a structured or degraded [`AnalysisResult`]. The gateway
/// call is the sole await point; everything else is synchronous. All
/// branches are terminal -- no retries.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> AppResult<Json<AnalysisResult>> {
    let frames = decode_frames(&request.frames);

    if frames.is_empty() {
        return Err(AppError::NoValidFrames);
    }

    tracing::info!(
        received = request.frames.len(),
        decoded = frames.len(),
        "Analyzing frame sequence"
    );

    let reply = state
        .gateway
        .generate_content(&frames, ANALYSIS_PROMPT)
        .await
        .map_err(|err| AppError::Analysis(err.to_string()))?;

    Ok(Json(AnalysisResult::from_model_text(&reply)))
}
