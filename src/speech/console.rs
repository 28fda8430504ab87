use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::speech::voice::{Tone, VoiceOutput};

/// Console-backed voice for the demo driver. Utterances print a tone tag
/// and simulate playback time so cancellation is observable.
pub struct ConsoleVoice {
    current: Mutex<CancellationToken>,
}

impl ConsoleVoice {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(CancellationToken::new()),
        }
    }
}

impl Default for ConsoleVoice {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VoiceOutput for ConsoleVoice {
    async fn speak(&self, text: &str, tone: Tone) -> Result<()> {
        let token = self
            .current
            .lock()
            .expect("voice token lock poisoned")
            .clone();

        let tag = match tone {
            Tone::Confirmation => "OK",
            Tone::Announcement => "INFO",
            Tone::Error => "ERROR",
        };
        println!("[VOZ-{tag}] {text}");

        // Rough playback simulation, long enough to be cancellable.
        let playback = Duration::from_millis((text.len() as u64 * 2).min(300));
        tokio::select! {
            _ = tokio::time::sleep(playback) => {}
            _ = token.cancelled() => {
                debug!("utterance cancelled mid-playback");
            }
        }
        Ok(())
    }

    fn cancel(&self) {
        let mut guard = self.current.lock().expect("voice token lock poisoned");
        guard.cancel();
        *guard = CancellationToken::new();
    }
}
