//! Domain logic for the signcoach analysis service.
//!
//! Everything here is pure, synchronous, and transport-free: decoding
//! transport-encoded frames, sanitizing model replies, and coercing
//! free-form model text into a strict result shape. The HTTP layer and
//! the Gemini client live in their own crates.

pub mod analysis;
pub mod frame;
pub mod prompt;
pub mod sanitize;

pub use analysis::{AnalysisReport, AnalysisResult, SignDetection};
pub use frame::{decode_frame, decode_frames, DecodedFrame, FrameError, MAX_FRAMES};
pub use prompt::ANALYSIS_PROMPT;
pub use sanitize::sanitize_model_response;
