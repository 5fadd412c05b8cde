//! Decoding of transport-encoded webcam frames.
//!
//! Clients send frames as data URLs (`data:image/jpeg;base64,<payload>`),
//! one string per captured still. Each frame is decoded independently:
//! a frame that fails to decode is dropped and the rest of the request
//! proceeds. Only a fully empty result is treated as an error, and that
//! decision belongs to the caller.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

/// Maximum number of frames accepted per analysis request.
///
/// Frames past this cap are silently ignored before any decoding work
/// happens. This is a throughput/cost guard against oversized uploads,
/// not a correctness rule.
pub const MAX_FRAMES: usize = 30;

/// A validated still image extracted from one transport frame string.
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    /// Ordinal position of this frame in the original input sequence.
    pub index: usize,
    /// MIME type inferred from the image byte header (e.g. `image/jpeg`).
    pub mime_type: &'static str,
    /// Raw image bytes, exactly as carried in the data URL payload.
    pub data: Vec<u8>,
}

/// Errors that can occur while decoding a single frame.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The string has no `,` separating the data URL header from the payload.
    #[error("Missing data URL separator")]
    MissingSeparator,

    /// The payload after the separator is not valid base64.
    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded bytes are not a recognizable image.
    #[error("Invalid image data: {0}")]
    Image(#[from] image::ImageError),
}

/// Decode a single data-URL frame string into a validated image.
///
/// Splits at the first `,` (everything before it is the data URL header),
/// base64-decodes the payload, and fully decodes the bytes as an image to
/// reject garbage that merely looks like base64. The decoded pixels are
/// discarded; only the validated raw bytes and inferred MIME type are kept,
/// so the frame can be forwarded upstream without re-encoding.
pub fn decode_frame(index: usize, raw: &str) -> Result<DecodedFrame, FrameError> {
    let (_header, payload) = raw.split_once(',').ok_or(FrameError::MissingSeparator)?;

    let data = BASE64.decode(payload.trim())?;

    let format = image::guess_format(&data)?;
    image::load_from_memory(&data)?;

    Ok(DecodedFrame {
        index,
        mime_type: format.to_mime_type(),
        data,
    })
}

/// Decode at most [`MAX_FRAMES`] frame strings, dropping failures.
///
/// Surviving frames keep their relative order; gaps left by dropped
/// frames are simply omitted. An empty return value means no usable
/// input was provided -- callers decide whether that is fatal.
pub fn decode_frames(raw_frames: &[String]) -> Vec<DecodedFrame> {
    raw_frames
        .iter()
        .take(MAX_FRAMES)
        .enumerate()
        .filter_map(|(index, raw)| match decode_frame(index, raw) {
            Ok(frame) => Some(frame),
            Err(err) => {
                tracing::debug!(index, error = %err, "Dropping undecodable frame");
                None
            }
        })
        .collect()
}
