use anyhow::{bail, Result};
use serde_json::json;

use crate::dispatch::commands::{click_semantic, CommandCtx};
use crate::dispatch::table::{CommandKind, CommandTable, PageScope};
use crate::dispatch::types::HandlerResult;
use crate::intent::types::ResolvedIntent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Catalog,
    Cart,
    Payment,
    Profile,
    Admin,
    Test,
    Back,
    Forward,
    Reload,
    About,
    Contact,
}

pub(crate) fn register(table: &mut CommandTable) {
    use CommandKind::Nav;
    table.add("go_home", Nav(NavTarget::Home), PageScope::Anywhere, false);
    table.add("go_catalog", Nav(NavTarget::Catalog), PageScope::Anywhere, false);
    table.add("go_cart", Nav(NavTarget::Cart), PageScope::Anywhere, false);
    table.add("go_payment", Nav(NavTarget::Payment), PageScope::Only(&["/cart"]), false);
    table.add("go_profile", Nav(NavTarget::Profile), PageScope::Anywhere, true);
    table.add("go_admin", Nav(NavTarget::Admin), PageScope::Anywhere, true);
    table.add("go_test", Nav(NavTarget::Test), PageScope::Anywhere, false);
    table.add("go_back", Nav(NavTarget::Back), PageScope::Anywhere, false);
    table.add("go_forward", Nav(NavTarget::Forward), PageScope::Anywhere, false);
    table.add("reload_page", Nav(NavTarget::Reload), PageScope::Anywhere, false);
    table.add("about", Nav(NavTarget::About), PageScope::Anywhere, false);
    table.add("contact", Nav(NavTarget::Contact), PageScope::Anywhere, false);
}

pub(crate) async fn run(
    target: NavTarget,
    ctx: &mut CommandCtx<'_, '_>,
    _intent: &ResolvedIntent,
) -> Result<HandlerResult> {
    match target {
        NavTarget::Home => go(ctx, "header.nav.home", "/", "Vamos al inicio.").await,
        NavTarget::Catalog => go(ctx, "header.nav.catalog", "/catalog", "Vamos al catálogo.").await,
        NavTarget::Cart => go(ctx, "header.nav.cart", "/cart", "Vamos al carrito.").await,
        NavTarget::Payment => go_payment(ctx).await,
        NavTarget::Profile => go(ctx, "header.nav.profile", "/profile", "Vamos a tu perfil.").await,
        NavTarget::Admin => {
            go(ctx, "header.nav.admin", "/admin", "Vamos al panel de administración.").await
        }
        NavTarget::Test => go(ctx, "header.nav.test", "/test", "Vamos a la página de prueba.").await,
        NavTarget::Back => go_back(ctx).await,
        NavTarget::Forward => go_forward(ctx).await,
        NavTarget::Reload => reload(ctx).await,
        NavTarget::About => about(ctx).await,
        NavTarget::Contact => contact(ctx).await,
    }
}

/// Click a navigation link and confirm. The host router does the actual
/// route change; this core only triggers it.
async fn go(
    ctx: &mut CommandCtx<'_, '_>,
    key: &str,
    route: &str,
    feedback: &str,
) -> Result<HandlerResult> {
    click_semantic(ctx, key).await?;
    ctx.confirm(feedback).await;
    Ok(HandlerResult::ok("navigate").with("route", json!(route)))
}

async fn go_payment(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    if click_semantic(ctx, "cart.pagar").await.is_err() {
        bail!("no puedo navegar al pago desde esta página");
    }
    ctx.confirm("Vamos a pagar.").await;
    Ok(HandlerResult::ok("navigate").with("route", json!("/payment")))
}

async fn go_back(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    ctx.bridge.ui.history_back().await?;
    ctx.confirm("Volvimos a la página anterior.").await;
    Ok(HandlerResult::ok("history_back"))
}

async fn go_forward(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    ctx.bridge.ui.history_forward().await?;
    ctx.confirm("Fuimos a la página siguiente.").await;
    Ok(HandlerResult::ok("history_forward"))
}

async fn reload(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    ctx.bridge.ui.reload().await?;
    ctx.confirm("Recargué la página.").await;
    Ok(HandlerResult::ok("reload"))
}

async fn about(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    click_semantic(ctx, "footer.about").await?;
    ctx.confirm("Claro, vamos a quiénes somos.").await;
    Ok(HandlerResult::ok("navigate").with("route", json!("/about")))
}

async fn contact(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    click_semantic(ctx, "footer.contact").await?;
    ctx.confirm("Aquí está la información de contacto.").await;
    Ok(HandlerResult::ok("navigate").with("route", json!("/contact")))
}
