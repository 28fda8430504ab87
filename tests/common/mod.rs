use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;

use vocera::speech::voice::{Tone, VoiceOutput};
use vocera::ui::tree::{UiElement, UiTree};

/// Voice that records instead of speaking.
#[derive(Default)]
pub struct RecordingVoice {
    utterances: Arc<Mutex<Vec<(String, Tone)>>>,
    cancellations: Arc<Mutex<u32>>,
}

impl RecordingVoice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spoken(&self) -> Vec<String> {
        self.utterances
            .lock()
            .unwrap()
            .iter()
            .map(|(text, _)| text.clone())
            .collect()
    }

    pub fn spoken_with_tones(&self) -> Vec<(String, Tone)> {
        self.utterances.lock().unwrap().clone()
    }

    pub fn cancellations(&self) -> u32 {
        *self.cancellations.lock().unwrap()
    }

    pub fn clear(&self) {
        self.utterances.lock().unwrap().clear();
    }
}

#[async_trait]
impl VoiceOutput for RecordingVoice {
    async fn speak(&self, text: &str, tone: Tone) -> Result<()> {
        self.utterances.lock().unwrap().push((text.to_string(), tone));
        Ok(())
    }

    fn cancel(&self) {
        *self.cancellations.lock().unwrap() += 1;
    }
}

/// Interface tree over a fixed set of single-candidate selectors. Probes
/// split fallback chains before reaching `find`, so keys here are the
/// individual candidates from the tables.
pub struct FakeTree {
    elements: HashMap<String, String>,
    clicks: Arc<Mutex<Vec<String>>>,
    values: Arc<Mutex<Vec<(String, String)>>>,
    page_text: String,
}

impl FakeTree {
    pub fn with(selectors: &[(&str, &str)]) -> Self {
        Self {
            elements: selectors
                .iter()
                .map(|(sel, text)| (sel.to_string(), text.to_string()))
                .collect(),
            clicks: Arc::new(Mutex::new(Vec::new())),
            values: Arc::new(Mutex::new(Vec::new())),
            page_text: String::new(),
        }
    }

    pub fn empty() -> Self {
        Self::with(&[])
    }

    pub fn with_page_text(mut self, text: &str) -> Self {
        self.page_text = text.to_string();
        self
    }

    pub fn clicks(&self) -> Vec<String> {
        self.clicks.lock().unwrap().clone()
    }

    pub fn values(&self) -> Vec<(String, String)> {
        self.values.lock().unwrap().clone()
    }
}

struct FakeElement {
    selector: String,
    text: String,
    clicks: Arc<Mutex<Vec<String>>>,
    values: Arc<Mutex<Vec<(String, String)>>>,
}

#[async_trait]
impl UiTree for FakeTree {
    async fn find(&self, selector: &str) -> Option<Box<dyn UiElement>> {
        let text = self.elements.get(selector)?;
        Some(Box::new(FakeElement {
            selector: selector.to_string(),
            text: text.clone(),
            clicks: Arc::clone(&self.clicks),
            values: Arc::clone(&self.values),
        }))
    }

    async fn page_text(&self) -> String {
        self.page_text.clone()
    }
}

#[async_trait]
impl UiElement for FakeElement {
    fn text(&self) -> String {
        self.text.clone()
    }

    async fn click(&self) -> Result<()> {
        self.clicks.lock().unwrap().push(self.selector.clone());
        Ok(())
    }

    async fn set_value(&self, text: &str) -> Result<()> {
        self.values
            .lock()
            .unwrap()
            .push((self.selector.clone(), text.to_string()));
        Ok(())
    }

    async fn focus(&self) -> Result<()> {
        Ok(())
    }

    async fn scroll_into_view(&self) -> Result<()> {
        Ok(())
    }
}
