use anyhow::Result;
use serde_json::json;

use crate::dispatch::commands::{click_semantic, CommandCtx};
use crate::dispatch::table::{CommandKind, CommandTable, PageScope, STANDARD};
use crate::dispatch::types::HandlerResult;
use crate::intent::dictionary;
use crate::intent::types::ResolvedIntent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemOp {
    Help,
    WhereAmI,
    ReadUser,
    Login,
    Logout,
    Register,
}

pub(crate) fn register(table: &mut CommandTable) {
    use CommandKind::System;
    table.add("help", System(SystemOp::Help), PageScope::Anywhere, false);
    table.add("where_am_i", System(SystemOp::WhereAmI), PageScope::Anywhere, false);
    table.add("read_user", System(SystemOp::ReadUser), PageScope::Anywhere, false);
    table.add("login", System(SystemOp::Login), PageScope::Anywhere, false);
    table.add("logout", System(SystemOp::Logout), PageScope::Anywhere, true);
    table.add("register", System(SystemOp::Register), PageScope::Anywhere, false);
}

pub(crate) async fn run(
    op: SystemOp,
    ctx: &mut CommandCtx<'_, '_>,
    _intent: &ResolvedIntent,
) -> Result<HandlerResult> {
    match op {
        SystemOp::Help => help(ctx).await,
        SystemOp::WhereAmI => where_am_i(ctx).await,
        SystemOp::ReadUser => read_user(ctx).await,
        SystemOp::Login => login(ctx).await,
        SystemOp::Logout => logout(ctx).await,
        SystemOp::Register => register_account(ctx).await,
    }
}

/// Page-aware help, derived from the same command table the dispatcher
/// gates on.
async fn help(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    let available = STANDARD.available_for(&ctx.page.pathname);
    let examples: Vec<&str> = available
        .iter()
        .filter_map(|name| dictionary::example_phrase(name))
        .take(8)
        .collect();

    let text = format!(
        "Puedes decir, por ejemplo: {}. Hay {} comandos disponibles en esta página.",
        examples.join(", "),
        available.len(),
    );
    ctx.announce(&text).await;
    Ok(HandlerResult::ok("help").with("available", json!(available.len())))
}

async fn where_am_i(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    let name = if ctx.page.is_home() {
        "la página de inicio"
    } else if ctx.page.route_contains("catalog") {
        "el catálogo"
    } else if ctx.page.route_contains("cart") {
        "el carrito"
    } else if ctx.page.route_contains("payment") {
        "la página de pago"
    } else if ctx.page.route_contains("profile") {
        "tu perfil"
    } else if ctx.page.route_contains("admin") {
        "el panel de administración"
    } else if ctx.page.route_contains("test") {
        "la página de prueba"
    } else {
        "una página de la tienda"
    };
    ctx.announce(&format!("Estás en {name}.")).await;
    Ok(HandlerResult::ok("where_am_i"))
}

async fn read_user(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    match ctx.bridge.user_info() {
        Some(auth) => {
            let name = auth.display_name.unwrap_or_else(|| "cliente".to_string());
            let text = match auth.email {
                Some(email) => format!("Eres {name}, con el correo {email}."),
                None => format!("Eres {name}."),
            };
            ctx.announce(&text).await;
        }
        None => {
            ctx.announce("No has iniciado sesión.").await;
        }
    }
    Ok(HandlerResult::ok("read_user"))
}

async fn login(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    click_semantic(ctx, "header.auth.login").await?;
    ctx.confirm("Abrí el inicio de sesión.").await;
    Ok(HandlerResult::ok("login"))
}

async fn logout(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    let logged_out = ctx.bridge.logout_user(ctx.page).await;
    if logged_out {
        ctx.session.last_spoken = Some("Cerré tu sesión.".to_string());
    }
    Ok(if logged_out {
        HandlerResult::ok("logout")
    } else {
        HandlerResult::failed("logout")
    })
}

async fn register_account(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    click_semantic(ctx, "header.auth.register").await?;
    ctx.confirm("Abrí el registro de cuenta.").await;
    Ok(HandlerResult::ok("register"))
}
