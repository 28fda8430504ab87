use tracing::{debug, info};
use uuid::Uuid;

use crate::bridge::Bridge;
use crate::context::PageContext;
use crate::dispatch::dispatcher::Dispatcher;
use crate::dispatch::session::DispatchSession;
use crate::dispatch::types::DispatchOutcome;
use crate::intent::resolver::IntentResolver;
use crate::transcript::normalizer::normalize;
use crate::transcript::types::TranscriptAlternative;

/// The full utterance pipeline: normalize → resolve → dispatch.
///
/// Single-flight by construction: `handle_utterance` takes `&mut self`
/// and runs to completion (including all speech it triggers) before the
/// next utterance can be considered current for error-counter purposes.
pub struct VoicePipeline {
    resolver: IntentResolver,
    dispatcher: Dispatcher,
    session: DispatchSession,
}

impl VoicePipeline {
    /// Dispatcher over the standard command table; classifier endpoint
    /// from the environment when configured.
    pub fn new() -> Self {
        let dispatcher = Dispatcher::new();
        let resolver = IntentResolver::from_env(dispatcher.table().catalog());
        Self {
            resolver,
            dispatcher,
            session: DispatchSession::new(),
        }
    }

    pub fn with_parts(resolver: IntentResolver, dispatcher: Dispatcher) -> Self {
        Self {
            resolver,
            dispatcher,
            session: DispatchSession::new(),
        }
    }

    pub fn session(&self) -> &DispatchSession {
        &self.session
    }

    /// The user restarted listening: fresh session, error counter at 0.
    pub fn reset_session(&mut self) {
        self.session = DispatchSession::new();
    }

    /// Run one recognized utterance end to end. Returns `None` for an
    /// empty utterance (nothing recognized; a no-op, not an error).
    pub async fn handle_utterance(
        &mut self,
        alternatives: &[TranscriptAlternative],
        page: &PageContext,
        bridge: &Bridge<'_>,
    ) -> Option<DispatchOutcome> {
        let trace = Uuid::new_v4();
        let transcript = normalize(alternatives, page);
        if transcript.is_empty() {
            debug!(%trace, "empty utterance, nothing to do");
            return None;
        }
        info!(%trace, %transcript, "utterance normalized");

        let intent = self.resolver.resolve(&transcript, page).await;
        info!(%trace, intent = %intent.intent, confidence = intent.confidence, "intent resolved");

        let outcome = self
            .dispatcher
            .dispatch(&intent, page, bridge, &mut self.session)
            .await;
        info!(%trace, executed = outcome.is_executed(), action = %outcome.result().action, "dispatch finished");
        Some(outcome)
    }
}

impl Default for VoicePipeline {
    fn default() -> Self {
        Self::new()
    }
}
