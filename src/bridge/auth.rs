use tracing::warn;

use crate::bridge::Bridge;
use crate::context::PageContext;
use crate::selector;
use crate::store::AuthState;
use crate::ui::probe::first_match;

impl Bridge<'_> {
    /// Store preferred; without one, a visible logout control counts as
    /// an authenticated session, and the page context is the last word.
    pub async fn is_authenticated(&self, ctx: &PageContext) -> bool {
        if let Some(store) = self.store {
            return store.snapshot().auth.authenticated;
        }
        if let Some(chain) = selector::resolve("header.auth.logout", ctx) {
            if first_match(self.ui, &chain).await.is_some() {
                return true;
            }
        }
        ctx.is_authenticated
    }

    pub fn user_info(&self) -> Option<AuthState> {
        let auth = self.store?.snapshot().auth;
        auth.authenticated.then_some(auth)
    }

    /// Trigger the host's logout control. The host's own handler clears
    /// the session; this core never mutates auth state directly.
    pub async fn logout_user(&self, ctx: &PageContext) -> bool {
        let Some(chain) = selector::resolve("header.auth.logout", ctx) else {
            self.apologize("Lo siento, no encontré cómo cerrar la sesión.").await;
            return false;
        };
        let Some(button) = first_match(self.ui, &chain).await else {
            self.apologize("Lo siento, no encontré el botón de cerrar sesión.")
                .await;
            return false;
        };
        if let Err(e) = button.click().await {
            warn!(error = %e, "logout click failed");
            self.apologize("Lo siento, no pude cerrar la sesión.").await;
            return false;
        }
        self.confirm("Cerré tu sesión.").await;
        true
    }
}
