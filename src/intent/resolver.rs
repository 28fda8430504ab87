use tracing::{debug, warn};

use crate::context::PageContext;
use crate::intent::dictionary;
use crate::intent::types::{ActionCatalog, ResolvedIntent};
use crate::services::classifier::{build_prompt, strip_code_fences, ClassifierClient};

/// Two-tier intent classifier.
///
/// Fast path: static dictionary (exact, verb+noun override, longest
/// substring). Fallback: the generative classifier, with every failure
/// mode degraded to an `unknown` intent; nothing above this boundary
/// ever sees a classifier exception.
pub struct IntentResolver {
    classifier: Option<ClassifierClient>,
    catalog: ActionCatalog,
}

impl IntentResolver {
    pub fn new(classifier: Option<ClassifierClient>, catalog: ActionCatalog) -> Self {
        Self { classifier, catalog }
    }

    pub fn from_env(catalog: ActionCatalog) -> Self {
        Self::new(ClassifierClient::from_env(), catalog)
    }

    /// Resolve a normalized transcript. Dictionary first; on a miss the
    /// AI tier runs when configured, otherwise the result is degraded.
    pub async fn resolve(&self, transcript: &str, ctx: &PageContext) -> ResolvedIntent {
        if let Some(hit) = dictionary::lookup(transcript) {
            debug!(intent = %hit.intent, confidence = hit.confidence, "fast path hit");
            return hit;
        }

        self.resolve_rich(transcript, ctx).await
    }

    /// AI-only path for callers that need slot filling (free-form
    /// targets, quantities, categories) regardless of dictionary hits.
    pub async fn resolve_rich(&self, transcript: &str, ctx: &PageContext) -> ResolvedIntent {
        let Some(classifier) = &self.classifier else {
            return ResolvedIntent::degraded("no classifier configured");
        };

        let available = self.catalog.available_for(&ctx.pathname);
        let prompt = build_prompt(transcript, ctx, &available);

        let content = match classifier.complete(prompt).await {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, "classifier call failed");
                return ResolvedIntent::degraded(e.to_string());
            }
        };

        match serde_json::from_str::<ResolvedIntent>(strip_code_fences(&content)) {
            Ok(mut intent) => {
                intent.fallback_to_ai = true;
                debug!(intent = %intent.intent, confidence = intent.confidence, "AI path hit");
                intent
            }
            Err(e) => {
                warn!(error = %e, "classifier returned unparseable JSON");
                ResolvedIntent::degraded(format!("unparseable classifier response: {e}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::types::CatalogEntry;

    fn resolver_without_ai() -> IntentResolver {
        IntentResolver::new(
            None,
            ActionCatalog {
                entries: vec![CatalogEntry {
                    intent: "help",
                    routes: &[],
                }],
            },
        )
    }

    #[tokio::test]
    async fn fast_path_does_not_need_classifier() {
        let resolver = resolver_without_ai();
        let ctx = PageContext::new("/");
        let intent = resolver.resolve("quiénes somos", &ctx).await;
        assert_eq!(intent.intent, "about");
        assert!(!intent.fallback_to_ai);
    }

    #[tokio::test]
    async fn miss_without_classifier_degrades() {
        let resolver = resolver_without_ai();
        let ctx = PageContext::new("/");
        let intent = resolver.resolve("háblame del clima", &ctx).await;
        assert_eq!(intent.intent, "unknown");
        assert_eq!(intent.confidence, 0.0);
        assert!(intent.fallback_to_ai);
        assert!(intent.error.is_some());
    }

    #[tokio::test]
    async fn unreachable_classifier_degrades_instead_of_raising() {
        // Nothing listens here; the call errors and must degrade.
        let classifier = ClassifierClient::new("http://127.0.0.1:9", None);
        let resolver = IntentResolver::new(Some(classifier), ActionCatalog::default());
        let ctx = PageContext::new("/catalog");
        let intent = resolver.resolve("háblame del clima", &ctx).await;
        assert_eq!(intent.intent, "unknown");
        assert!(intent.fallback_to_ai);
        assert!(intent.error.is_some());
    }
}
