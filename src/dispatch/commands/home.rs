use anyhow::{bail, Result};

use crate::dispatch::commands::{find_semantic, CommandCtx};
use crate::dispatch::table::{CommandKind, CommandTable, PageScope};
use crate::dispatch::types::HandlerResult;
use crate::intent::types::ResolvedIntent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeOp {
    ShowOffers,
    ShowFeatured,
}

pub(crate) fn register(table: &mut CommandTable) {
    use CommandKind::Home;
    table.add("show_offers", Home(HomeOp::ShowOffers), PageScope::Only(&["/"]), false);
    table.add("show_featured", Home(HomeOp::ShowFeatured), PageScope::Only(&["/"]), false);
}

pub(crate) async fn run(
    op: HomeOp,
    ctx: &mut CommandCtx<'_, '_>,
    _intent: &ResolvedIntent,
) -> Result<HandlerResult> {
    match op {
        HomeOp::ShowOffers => show(ctx, "home.offers", "Aquí están las ofertas.").await,
        HomeOp::ShowFeatured => {
            show(ctx, "home.featured", "Estos son los productos destacados.").await
        }
    }
}

async fn show(ctx: &mut CommandCtx<'_, '_>, key: &str, feedback: &str) -> Result<HandlerResult> {
    let Ok(section) = find_semantic(ctx, key).await else {
        bail!("no encontré esa sección en la página");
    };
    section.scroll_into_view().await?;
    ctx.announce(feedback).await;
    Ok(HandlerResult::ok("show_section"))
}
