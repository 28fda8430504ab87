use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::speech::engine::SpeechEngine;
use crate::transcript::types::TranscriptAlternative;

/// Engine fed from an mpsc channel. The capture layer (or a test, or the
/// demo driver's stdin task) pushes utterance batches in.
pub struct ChannelEngine {
    rx: mpsc::Receiver<Vec<TranscriptAlternative>>,
    running: bool,
}

pub fn pair(buffer: usize) -> (mpsc::Sender<Vec<TranscriptAlternative>>, ChannelEngine) {
    let (tx, rx) = mpsc::channel(buffer);
    (tx, ChannelEngine { rx, running: false })
}

#[async_trait]
impl SpeechEngine for ChannelEngine {
    async fn start(&mut self) -> Result<()> {
        self.running = true;
        Ok(())
    }

    async fn stop(&mut self) -> Result<()> {
        self.running = false;
        Ok(())
    }

    async fn next_utterance(&mut self) -> Option<Vec<TranscriptAlternative>> {
        if !self.running {
            return None;
        }
        self.rx.recv().await
    }
}
