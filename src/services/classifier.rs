use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::context::PageContext;

const DEFAULT_URL: &str = "http://localhost:8080";
const TIMEOUT_SECS: u64 = 4; // Hard timeout enforcement (network level)

/// HTTP client for the generative intent classifier.
///
/// Request is a one-shot completion; the response content is free text
/// expected to contain one JSON object, possibly wrapped in code fences.
#[derive(Clone)]
pub struct ClassifierClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct CompletionRequest {
    prompt: String,
    stream: bool,
    n_predict: usize,
    temperature: f32,
    stop: Vec<String>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    content: String,
}

impl ClassifierClient {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Endpoint from `VOCERA_CLASSIFIER_URL`, key from
    /// `VOCERA_CLASSIFIER_KEY`. `None` when no endpoint is configured;
    /// the resolver then runs without an AI tier and degrades instead.
    pub fn from_env() -> Option<Self> {
        let url = std::env::var("VOCERA_CLASSIFIER_URL").ok()?;
        let key = std::env::var("VOCERA_CLASSIFIER_KEY").ok();
        Some(Self::new(&url, key))
    }

    /// POST the prompt and return the raw completion content. Errors here
    /// are the caller's to degrade on; this client never retries.
    pub async fn complete(&self, prompt: String) -> Result<String> {
        let body = CompletionRequest {
            prompt,
            stream: false,
            n_predict: 256,
            temperature: 0.2,
            stop: vec!["Usuario:".to_string(), "Sistema:".to_string()],
        };

        let mut request = self
            .client
            .post(format!("{}/completion", self.base_url))
            .json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(anyhow!("classifier server error: {}", response.status()));
        }

        let parsed: CompletionResponse = response.json().await?;
        Ok(parsed.content.trim().to_string())
    }
}

/// Prompt for structured classification: page, auth state, role, and the
/// actions currently available, followed by the transcript.
pub fn build_prompt(transcript: &str, ctx: &PageContext, available: &[&str]) -> String {
    format!(
        "Sistema: Eres el clasificador de comandos de voz de una tienda en línea. \
Responde únicamente con un objeto JSON con las claves intent, target, method \
(byName|byIndex|byId|direct|complex), params, confidence, requiresAuth y fallbackToAI.\n\
Página actual: {}\nSesión iniciada: {}\nRol: {:?}\n\
Acciones disponibles: {}\n\
Usuario: {}\nSistema:",
        ctx.pathname,
        if ctx.is_authenticated { "sí" } else { "no" },
        ctx.role,
        available.join(", "),
        transcript,
    )
}

/// Strip markdown code fences so the JSON inside can be parsed. Tolerant
/// of a language tag after the opening fence and of absent fences.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop an optional language tag ("json", "javascript", ...).
    let rest = match rest.find('\n') {
        Some(i) => &rest[i + 1..],
        None => rest,
    };
    rest.trim().trim_end_matches("```").trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::UserRole;

    #[test]
    fn fences_are_stripped() {
        let fenced = "```json\n{\"intent\":\"help\"}\n```";
        assert_eq!(strip_code_fences(fenced), "{\"intent\":\"help\"}");

        let bare = "  {\"intent\":\"help\"} ";
        assert_eq!(strip_code_fences(bare), "{\"intent\":\"help\"}");

        let tagless = "```\n{\"a\":1}\n```";
        assert_eq!(strip_code_fences(tagless), "{\"a\":1}");
    }

    #[test]
    fn prompt_embeds_page_and_actions() {
        let ctx = PageContext::authenticated("/cart", UserRole::Customer);
        let prompt = build_prompt("vacía el carrito", &ctx, &["clear_cart", "read_cart"]);
        assert!(prompt.contains("/cart"));
        assert!(prompt.contains("clear_cart, read_cart"));
        assert!(prompt.contains("vacía el carrito"));
        assert!(prompt.contains("Sesión iniciada: sí"));
    }
}
