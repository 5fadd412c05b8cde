//! Gemini inference gateway for the signcoach analysis service.
//!
//! Wraps the Gemini `generateContent` REST endpoint behind the
//! [`VisionGateway`] trait: one opaque call that takes an ordered image
//! set plus an instruction and returns whatever text the model produced.
//! The reply is best-effort by design -- it may be empty, garbled, or
//! prose -- and all robustness lives downstream in `signcoach-core`.

pub mod client;
pub mod gateway;
pub mod types;

pub use client::{GeminiClient, GeminiConfig};
pub use gateway::{GatewayError, VisionGateway};
