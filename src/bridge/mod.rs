pub mod auth;
pub mod cart;

use std::time::Duration;

use tracing::warn;

use crate::speech::voice::{Tone, VoiceOutput};
use crate::store::StateStore;
use crate::ui::tree::UiTree;

/// Pause between consecutive sentences of a multi-utterance summary.
/// Each `speak` is awaited, so sentences never interleave; the pacing
/// keeps them intelligible.
pub const SENTENCE_PACING: Duration = Duration::from_millis(150);

/// Access to the host application on behalf of the dispatcher: reads the
/// store, issues interface actions, drives the speech channel. Every
/// operation is best-effort and never lets an error escape its boundary.
pub struct Bridge<'a> {
    pub ui: &'a dyn UiTree,
    pub voice: &'a dyn VoiceOutput,
    pub store: Option<&'a dyn StateStore>,
}

impl<'a> Bridge<'a> {
    pub fn new(
        ui: &'a dyn UiTree,
        voice: &'a dyn VoiceOutput,
        store: Option<&'a dyn StateStore>,
    ) -> Self {
        Self { ui, voice, store }
    }

    /// Speak, swallowing channel errors: feedback must never take the
    /// pipeline down.
    pub async fn say(&self, text: &str, tone: Tone) {
        if let Err(e) = self.voice.speak(text, tone).await {
            warn!(error = %e, "speech output failed");
        }
    }

    pub async fn confirm(&self, text: &str) {
        self.say(text, Tone::Confirmation).await;
    }

    pub async fn announce(&self, text: &str) {
        self.say(text, Tone::Announcement).await;
    }

    pub async fn apologize(&self, text: &str) {
        self.say(text, Tone::Error).await;
    }

    pub async fn pace(&self) {
        tokio::time::sleep(SENTENCE_PACING).await;
    }
}
