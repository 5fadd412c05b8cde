//! The fixed analysis instruction sent with every frame sequence.

/// Instruction text appended after the ordered frames in each inference
/// request. Constant by design: there is no per-request customization.
///
/// The target JSON schema is embedded as a literal example because it
/// materially raises the rate at which the model produces parseable
/// output; the sanitizer and parser downstream still tolerate near-misses.
pub const ANALYSIS_PROMPT: &str = r#"Analyze the ASL signing shown in these sequential video frames carefully. The user may be performing ONE sign/gesture OR MULTIPLE signs/gestures in sequence.

Your task:
1. Carefully examine the frame sequence to identify ALL distinct signs, letters, or gestures performed
2. For EACH identified sign, provide:
   - What sign/letter/gesture it is
   - Timing/position in the sequence (e.g., "first sign", "second sign")
   - Specific feedback on form, hand position, orientation, and movement quality
   - What they did well
   - Specific improvements needed

IMPORTANT:
- If you see multiple distinct signs/gestures, list ALL of them
- Look for transitions between signs (hand repositioning, pauses, changes in hand shape)
- Each sign in fingerspelling or a sequence should be identified separately
- Pay attention to the ENTIRE video sequence, not just one moment

Provide your response in the following JSON format:
{
    "signs_detected": [
        {
            "sign": "name of the sign/letter/gesture",
            "sequence_position": "first/second/third/etc or 'only sign detected'",
            "feedback": "specific feedback for this sign including hand position, movement, orientation"
        }
    ],
    "detailed_feedback": "comprehensive overall feedback (150-200 words) covering all signs detected, flow between signs, and general technique",
    "summary": "brief 2-3 sentence summary highlighting key points across all signs performed"
}

Be encouraging, specific, and constructive. Analyze the COMPLETE sequence."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_the_target_schema_fields() {
        for field in ["signs_detected", "sequence_position", "detailed_feedback", "summary"] {
            assert!(
                ANALYSIS_PROMPT.contains(field),
                "prompt is missing schema field {field}"
            );
        }
    }

    #[test]
    fn prompt_asks_for_all_signs() {
        assert!(ANALYSIS_PROMPT.contains("ALL distinct signs"));
    }
}
