pub mod channel;
pub mod console;
pub mod engine;
pub mod voice;

pub use engine::SpeechEngine;
pub use voice::{Tone, VoiceOutput};
