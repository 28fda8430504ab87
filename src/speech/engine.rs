use anyhow::Result;
use async_trait::async_trait;

use crate::transcript::types::TranscriptAlternative;

/// The speech recognition engine, consumed at its interface boundary.
/// One active session at a time; each recognized utterance arrives as a
/// batch of alternatives. Engine-level errors (no permission, no device)
/// surface from `start` to the caller; they are not handled inside the
/// pipeline.
#[async_trait]
pub trait SpeechEngine: Send {
    async fn start(&mut self) -> Result<()>;

    async fn stop(&mut self) -> Result<()>;

    /// Next utterance batch, `None` once the session has ended.
    async fn next_utterance(&mut self) -> Option<Vec<TranscriptAlternative>>;
}
