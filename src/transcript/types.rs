use serde::{Deserialize, Serialize};

/// One candidate text recognized from an utterance.
///
/// Engine-reported ordering is not trusted; the normalizer re-ranks the
/// whole batch before picking a winner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptAlternative {
    pub text: String,
    pub confidence: f32, // 0.0 - 1.0
}

impl TranscriptAlternative {
    pub fn new(text: &str, confidence: f32) -> Self {
        Self {
            text: text.to_string(),
            confidence,
        }
    }
}
