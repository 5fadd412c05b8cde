//! Sanitization of raw model replies.
//!
//! Vision-language models asked for JSON routinely wrap the payload in a
//! fenced markdown block, sometimes with a language tag, and pad it with
//! blank lines. [`sanitize_model_response`] strips exactly that wrapping
//! and nothing else -- it is a best-effort edge trim, not a forgiving
//! parser, and does not attempt to repair truncated or invalid JSON.

/// Fence openers recognized at the start of a reply, longest first so the
/// bare ``` marker only matches when no tagged variant does.
const FENCE_OPENERS: [&str; 5] = [
    "```javascript",
    "```typescript",
    "```python",
    "```json",
    "```",
];

/// Strip markdown code fences and surrounding whitespace from a model reply.
///
/// Applied once, in order: trim outer whitespace, remove one opening fence
/// marker (tagged or bare), remove one closing ``` marker, trim again, then
/// strip any remaining run of leading/trailing newlines. Idempotent:
/// `sanitize_model_response(sanitize_model_response(x))` equals
/// `sanitize_model_response(x)`.
pub fn sanitize_model_response(raw: &str) -> &str {
    let mut text = raw.trim();

    for opener in FENCE_OPENERS {
        if let Some(rest) = text.strip_prefix(opener) {
            text = rest;
            break;
        }
    }

    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }

    text.trim().trim_matches('\n')
}
