pub mod admin;
pub mod cart;
pub mod forms;
pub mod home;
pub mod lists;
pub mod modals;
pub mod navigation;
pub mod profile;
pub mod reading;
pub mod scroll;
pub mod search;
pub mod system;
pub mod testpage;

use anyhow::{bail, Result};

use crate::bridge::Bridge;
use crate::context::PageContext;
use crate::dispatch::session::DispatchSession;
use crate::dispatch::table::CommandKind;
use crate::dispatch::types::HandlerResult;
use crate::intent::types::ResolvedIntent;
use crate::selector;
use crate::speech::voice::Tone;
use crate::ui::probe::first_match;
use crate::ui::tree::UiElement;

/// Everything a handler may touch. Handlers speak their own success
/// feedback through the helpers below so the repeat command always has
/// the latest sentence.
pub struct CommandCtx<'a, 'b> {
    pub bridge: &'a Bridge<'b>,
    pub page: &'a PageContext,
    pub session: &'a mut DispatchSession,
}

impl CommandCtx<'_, '_> {
    pub async fn confirm(&mut self, text: &str) {
        self.session.last_spoken = Some(text.to_string());
        self.bridge.say(text, Tone::Confirmation).await;
    }

    pub async fn announce(&mut self, text: &str) {
        self.session.last_spoken = Some(text.to_string());
        self.bridge.say(text, Tone::Announcement).await;
    }
}

/// Resolve a semantic key against the current page and probe for it.
/// Misses bail with a "no encontré" message that error classification
/// understands.
pub(crate) async fn find_semantic(
    ctx: &CommandCtx<'_, '_>,
    key: &str,
) -> Result<Box<dyn UiElement>> {
    let Some(chain) = selector::resolve(key, ctx.page) else {
        bail!("no encontré el control {key} en esta página");
    };
    match first_match(ctx.bridge.ui, &chain).await {
        Some(element) => Ok(element),
        None => bail!("no encontré el elemento {key}"),
    }
}

pub(crate) async fn click_semantic(ctx: &CommandCtx<'_, '_>, key: &str) -> Result<()> {
    find_semantic(ctx, key).await?.click().await
}

/// Cap spoken read-alouds; long page text becomes unlistenable.
pub(crate) fn truncate_utterance(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

/// Route a gated command to its domain module.
pub(crate) async fn run(
    kind: CommandKind,
    ctx: &mut CommandCtx<'_, '_>,
    intent: &ResolvedIntent,
) -> Result<HandlerResult> {
    match kind {
        CommandKind::Nav(target) => navigation::run(target, ctx, intent).await,
        CommandKind::Search(op) => search::run(op, ctx, intent).await,
        CommandKind::Cart(op) => cart::run(op, ctx, intent).await,
        CommandKind::Read(op) => reading::run(op, ctx, intent).await,
        CommandKind::List(op) => lists::run(op, ctx, intent).await,
        CommandKind::Scroll(op) => scroll::run(op, ctx, intent).await,
        CommandKind::Form(op) => forms::run(op, ctx, intent).await,
        CommandKind::Modal(op) => modals::run(op, ctx, intent).await,
        CommandKind::System(op) => system::run(op, ctx, intent).await,
        CommandKind::Home(op) => home::run(op, ctx, intent).await,
        CommandKind::Profile(op) => profile::run(op, ctx, intent).await,
        CommandKind::Admin(op) => admin::run(op, ctx, intent).await,
        CommandKind::Test(op) => testpage::run(op, ctx, intent).await,
    }
}
