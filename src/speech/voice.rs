use anyhow::Result;
use async_trait::async_trait;

/// Tonal preset for an utterance, expressed as rate/pitch deltas over the
/// synthesizer's neutral voice. Three distinguishable presets minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Action succeeded; slightly brighter and quicker.
    Confirmation,
    /// Neutral information (summaries, read-alouds).
    Announcement,
    /// Something went wrong; slower and lower.
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeakStyle {
    pub rate: f32,
    pub pitch: f32,
}

impl Tone {
    pub fn style(self) -> SpeakStyle {
        match self {
            Tone::Confirmation => SpeakStyle { rate: 1.05, pitch: 1.10 },
            Tone::Announcement => SpeakStyle { rate: 1.0, pitch: 1.0 },
            Tone::Error => SpeakStyle { rate: 0.95, pitch: 0.90 },
        }
    }
}

/// The speech-output channel. `speak` resolves only once the utterance
/// has finished (or was cancelled), which is what makes multi-sentence
/// feedback strictly sequential.
#[async_trait]
pub trait VoiceOutput: Send + Sync {
    async fn speak(&self, text: &str, tone: Tone) -> Result<()>;

    /// Abort the current and any queued utterances immediately.
    fn cancel(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_distinguishable() {
        let styles = [
            Tone::Confirmation.style(),
            Tone::Announcement.style(),
            Tone::Error.style(),
        ];
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
