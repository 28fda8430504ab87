use anyhow::anyhow;
use async_trait::async_trait;
use tracing::{info, warn};

use crate::bridge::Bridge;
use crate::context::PageContext;
use crate::dispatch::commands::{self, CommandCtx};
use crate::dispatch::session::DispatchSession;
use crate::dispatch::table::{CommandTable, STANDARD};
use crate::dispatch::types::{DispatchError, DispatchOutcome, HandlerResult};
use crate::intent::types::ResolvedIntent;
use crate::selector;
use crate::speech::voice::Tone;
use crate::ui::probe::first_match;

const RETRY_HINT: &str = "Intenta de nuevo.";
const HELP_HINT: &str = "Parece que hay problemas. Di ayuda para escuchar los comandos disponibles.";

/// Invoked instead of the handler when an auth-gated intent arrives on an
/// unauthenticated session. Must speak exactly once.
#[async_trait]
pub trait AuthChallenge: Send + Sync {
    async fn challenge(&self, bridge: &Bridge<'_>, ctx: &PageContext, intent: &ResolvedIntent);
}

/// Default challenge: explain, then surface the login control.
pub struct LoginRedirect;

#[async_trait]
impl AuthChallenge for LoginRedirect {
    async fn challenge(&self, bridge: &Bridge<'_>, ctx: &PageContext, _intent: &ResolvedIntent) {
        bridge
            .say("Para eso necesitas iniciar sesión. Te llevo al acceso.", Tone::Error)
            .await;
        if let Some(chain) = selector::resolve("header.auth.login", ctx) {
            if let Some(button) = first_match(bridge.ui, &chain).await {
                if let Err(e) = button.click().await {
                    warn!(error = %e, "login redirect click failed");
                }
            }
        }
    }
}

/// Routes resolved intents to handlers. Per dispatch the states run
/// strictly Received → Gated → Routed → Executed | Rejected | Errored;
/// gating always precedes routing, routing precedes execution, and the
/// error counter moves only after the outcome is known.
pub struct Dispatcher {
    table: &'static CommandTable,
    auth: Box<dyn AuthChallenge>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            table: &STANDARD,
            auth: Box::new(LoginRedirect),
        }
    }

    pub fn with_auth_challenge(mut self, auth: Box<dyn AuthChallenge>) -> Self {
        self.auth = auth;
        self
    }

    pub fn table(&self) -> &'static CommandTable {
        self.table
    }

    pub async fn dispatch(
        &self,
        intent: &ResolvedIntent,
        page: &PageContext,
        bridge: &Bridge<'_>,
        session: &mut DispatchSession,
    ) -> DispatchOutcome {
        info!(intent = %intent.intent, page = %page.pathname, "dispatch received");

        // Cut off any feedback still playing before this dispatch speaks.
        bridge.voice.cancel();

        // Gate: shape, before any side effect.
        if let Err(violation) = intent.validate_shape() {
            return self
                .reject(
                    DispatchError::InvalidIntentShape(violation),
                    "El comando llegó incompleto.",
                    "invalid_intent",
                    bridge,
                    session,
                )
                .await;
        }

        let Some(spec) = self.table.get(&intent.intent) else {
            return self
                .errored(
                    DispatchError::UnknownIntent(intent.intent.clone()),
                    "No entendí el comando.",
                    "unknown_intent",
                    bridge,
                    session,
                )
                .await;
        };

        // Gate: page availability.
        if !spec.pages.allows(&page.pathname) {
            return self
                .reject(
                    DispatchError::PageRestricted {
                        intent: intent.intent.clone(),
                        route: page.pathname.clone(),
                    },
                    "Ese comando no está disponible en esta página.",
                    "unavailable",
                    bridge,
                    session,
                )
                .await;
        }

        // Gate: authentication. The handler never runs unauthenticated.
        if (spec.requires_auth || intent.requires_auth) && !bridge.is_authenticated(page).await {
            self.auth.challenge(bridge, page, intent).await;
            let escalate = session.record_failure();
            if escalate {
                bridge.pace().await;
                bridge.say(HELP_HINT, Tone::Error).await;
            }
            info!(intent = %intent.intent, "dispatch rejected: auth required");
            return DispatchOutcome::Rejected {
                error: DispatchError::AuthRequired(intent.intent.clone()),
                result: HandlerResult::failed("auth_required"),
            };
        }

        // Routed: run the handler, catching once at this boundary.
        let handler_result = {
            let mut ctx = CommandCtx {
                bridge,
                page,
                session: &mut *session,
            };
            commands::run(spec.kind, &mut ctx, intent).await
        };
        match handler_result {
            Ok(result) if result.success => {
                session.record_success();
                info!(intent = %intent.intent, action = %result.action, "dispatch executed");
                DispatchOutcome::Executed(result)
            }
            Ok(result) => {
                // The handler (or the bridge under it) already apologized;
                // only the escalation upgrade may add a sentence here.
                let escalate = session.record_failure();
                if escalate {
                    bridge.pace().await;
                    bridge.say(HELP_HINT, Tone::Error).await;
                }
                info!(intent = %intent.intent, action = %result.action, "dispatch failed in handler");
                DispatchOutcome::Errored {
                    error: DispatchError::Handler(anyhow!(
                        "handler reported failure: {}",
                        result.action
                    )),
                    result,
                }
            }
            Err(error) => {
                let message = error.to_string();
                let spoken = classify_handler_error(&message);
                let lowered = message.to_lowercase();
                let error = if lowered.contains("no encontr") || lowered.contains("not found") {
                    DispatchError::TargetNotFound(message)
                } else {
                    DispatchError::Handler(error)
                };
                self.errored(error, spoken, "handler_error", bridge, session).await
            }
        }
    }

    async fn reject(
        &self,
        error: DispatchError,
        message: &str,
        action: &str,
        bridge: &Bridge<'_>,
        session: &mut DispatchSession,
    ) -> DispatchOutcome {
        let result = self.speak_failure(message, action, bridge, session).await;
        info!(%error, "dispatch rejected");
        DispatchOutcome::Rejected { error, result }
    }

    async fn errored(
        &self,
        error: DispatchError,
        message: &str,
        action: &str,
        bridge: &Bridge<'_>,
        session: &mut DispatchSession,
    ) -> DispatchOutcome {
        let result = self.speak_failure(message, action, bridge, session).await;
        info!(%error, "dispatch errored");
        DispatchOutcome::Errored { error, result }
    }

    /// One utterance per failure: the diagnosis plus either the retry
    /// prompt or, on the third consecutive failure, the help prompt.
    async fn speak_failure(
        &self,
        message: &str,
        action: &str,
        bridge: &Bridge<'_>,
        session: &mut DispatchSession,
    ) -> HandlerResult {
        let escalate = session.record_failure();
        let hint = if escalate { HELP_HINT } else { RETRY_HINT };
        bridge.say(&format!("{message} {hint}"), Tone::Error).await;
        HandlerResult::failed(action)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a handler error by message substring into what to tell the
/// user. Handler messages are written to land in these buckets.
fn classify_handler_error(message: &str) -> &'static str {
    let lowered = message.to_lowercase();
    if lowered.contains("no encontr") || lowered.contains("not found") {
        "No encontré ese elemento en la página."
    } else if lowered.contains("página") || lowered.contains("page") {
        "Eso no está disponible aquí."
    } else if lowered.contains("navegar") || lowered.contains("navigate") {
        "No puedo navegar hasta ahí."
    } else {
        "No entendí el comando."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_classify_by_substring() {
        assert_eq!(
            classify_handler_error("no encontré el elemento cart.vaciar"),
            "No encontré ese elemento en la página."
        );
        assert_eq!(
            classify_handler_error("esta página no se puede desplazar"),
            "Eso no está disponible aquí."
        );
        assert_eq!(
            classify_handler_error("no puedo navegar hacia atrás aquí"),
            "No puedo navegar hasta ahí."
        );
        assert_eq!(classify_handler_error("algo raro pasó"), "No entendí el comando.");
    }
}
