use anyhow::{bail, Result};

use crate::dispatch::commands::{click_semantic, find_semantic, truncate_utterance, CommandCtx};
use crate::dispatch::table::{CommandKind, CommandTable, PageScope};
use crate::dispatch::types::HandlerResult;
use crate::intent::types::ResolvedIntent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileOp {
    ReadProfile,
    ReadOrders,
    EditProfile,
}

const PROFILE_ROUTES: &[&str] = &["/profile"];

pub(crate) fn register(table: &mut CommandTable) {
    use CommandKind::Profile;
    table.add("read_profile", Profile(ProfileOp::ReadProfile), PageScope::Only(PROFILE_ROUTES), true);
    table.add("read_orders", Profile(ProfileOp::ReadOrders), PageScope::Only(PROFILE_ROUTES), true);
    table.add("edit_profile", Profile(ProfileOp::EditProfile), PageScope::Only(PROFILE_ROUTES), true);
}

pub(crate) async fn run(
    op: ProfileOp,
    ctx: &mut CommandCtx<'_, '_>,
    _intent: &ResolvedIntent,
) -> Result<HandlerResult> {
    match op {
        ProfileOp::ReadProfile => read_profile(ctx).await,
        ProfileOp::ReadOrders => read_orders(ctx).await,
        ProfileOp::EditProfile => edit_profile(ctx).await,
    }
}

async fn read_profile(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    // Store first; visible profile fields as fallback.
    if let Some(auth) = ctx.bridge.user_info() {
        let name = auth.display_name.unwrap_or_else(|| "cliente".to_string());
        let text = match auth.email {
            Some(email) => format!("Tu perfil: {name}, correo {email}."),
            None => format!("Tu perfil: {name}."),
        };
        ctx.announce(&text).await;
        return Ok(HandlerResult::ok("read_profile"));
    }

    let mut parts = Vec::new();
    if let Ok(name) = find_semantic(ctx, "profile.nombre").await {
        let text = name.text();
        if !text.trim().is_empty() {
            parts.push(text.trim().to_string());
        }
    }
    if let Ok(email) = find_semantic(ctx, "profile.correo").await {
        let text = email.text();
        if !text.trim().is_empty() {
            parts.push(text.trim().to_string());
        }
    }
    if parts.is_empty() {
        bail!("no encontré los datos del perfil");
    }
    ctx.announce(&format!("Tu perfil: {}.", parts.join(", "))).await;
    Ok(HandlerResult::ok("read_profile"))
}

async fn read_orders(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    let orders = find_semantic(ctx, "profile.pedidos").await?;
    let text = orders.text();
    if text.trim().is_empty() {
        ctx.announce("No tienes pedidos todavía.").await;
    } else {
        let summary = truncate_utterance(&text, 250);
        ctx.announce(&format!("Tus pedidos: {summary}")).await;
    }
    Ok(HandlerResult::ok("read_orders"))
}

async fn edit_profile(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    click_semantic(ctx, "profile.editar").await?;
    ctx.confirm("Abrí la edición de tu perfil.").await;
    Ok(HandlerResult::ok("edit_profile"))
}
