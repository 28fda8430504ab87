use anyhow::{bail, Result};
use serde_json::json;

use crate::dispatch::commands::{truncate_utterance, CommandCtx};
use crate::dispatch::table::{CommandKind, CommandTable, PageScope};
use crate::dispatch::types::HandlerResult;
use crate::intent::types::ResolvedIntent;
use crate::selector::generators;
use crate::ui::probe::first_match;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOp {
    Page,
    Cart,
    CartTotal,
    CartCount,
    Product,
    Price,
    Silence,
    Repeat,
}

const PRODUCT_ROUTES: &[&str] = &["/", "/catalog", "/product"];

pub(crate) fn register(table: &mut CommandTable) {
    use CommandKind::Read;
    table.add("read_page", Read(ReadOp::Page), PageScope::Anywhere, false);
    table.add("read_cart", Read(ReadOp::Cart), PageScope::Only(&["/cart"]), false);
    table.add("read_cart_total", Read(ReadOp::CartTotal), PageScope::Only(&["/cart", "/payment"]), false);
    table.add("read_cart_count", Read(ReadOp::CartCount), PageScope::Anywhere, false);
    table.add("read_product", Read(ReadOp::Product), PageScope::Only(PRODUCT_ROUTES), false);
    table.add("read_price", Read(ReadOp::Price), PageScope::Only(PRODUCT_ROUTES), false);
    table.add("silence", Read(ReadOp::Silence), PageScope::Anywhere, false);
    table.add("repeat", Read(ReadOp::Repeat), PageScope::Anywhere, false);
}

pub(crate) async fn run(
    op: ReadOp,
    ctx: &mut CommandCtx<'_, '_>,
    intent: &ResolvedIntent,
) -> Result<HandlerResult> {
    match op {
        ReadOp::Page => read_page(ctx).await,
        ReadOp::Cart => read_cart(ctx).await,
        ReadOp::CartTotal => read_cart_total(ctx).await,
        ReadOp::CartCount => read_cart_count(ctx).await,
        ReadOp::Product => read_product(ctx, intent).await,
        ReadOp::Price => read_price(ctx, intent).await,
        ReadOp::Silence => silence(ctx).await,
        ReadOp::Repeat => repeat(ctx).await,
    }
}

async fn read_page(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    let text = ctx.bridge.ui.page_text().await;
    if text.trim().is_empty() {
        bail!("no encontré texto para leer en esta página");
    }
    let summary = truncate_utterance(&text, 300);
    ctx.announce(&summary).await;
    Ok(HandlerResult::ok("read_page"))
}

async fn read_cart(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    let read = ctx.bridge.read_cart(ctx.page).await;
    Ok(if read {
        HandlerResult::ok("read_cart")
    } else {
        HandlerResult::failed("read_cart")
    })
}

async fn read_cart_total(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    match ctx.bridge.read_cart_total(ctx.page).await {
        Some(total) => Ok(HandlerResult::ok("read_cart_total").with("total", json!(total))),
        None => Ok(HandlerResult::failed("read_cart_total")),
    }
}

async fn read_cart_count(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    match ctx.bridge.read_cart_item_count(ctx.page).await {
        Some(count) => Ok(HandlerResult::ok("read_cart_count").with("count", json!(count))),
        None => Ok(HandlerResult::failed("read_cart_count")),
    }
}

fn item_index(intent: &ResolvedIntent, ctx: &CommandCtx<'_, '_>) -> usize {
    intent.param_index("index").unwrap_or(ctx.session.list_cursor)
}

async fn read_product(ctx: &mut CommandCtx<'_, '_>, intent: &ResolvedIntent) -> Result<HandlerResult> {
    let index = item_index(intent, ctx);
    let chain = generators::by_index(index);
    let Some(card) = first_match(ctx.bridge.ui, &chain).await else {
        bail!("no encontré el producto número {}", index + 1);
    };
    let text = card.text();
    if text.trim().is_empty() {
        bail!("no encontré la descripción del producto");
    }
    let summary = truncate_utterance(&text, 200);
    ctx.announce(&summary).await;
    Ok(HandlerResult::ok("read_product").with("index", json!(index)))
}

async fn read_price(ctx: &mut CommandCtx<'_, '_>, intent: &ResolvedIntent) -> Result<HandlerResult> {
    let index = item_index(intent, ctx);
    let nth = index + 1;
    let chain = format!(
        ".product-card:nth-of-type({nth}) .price, .producto:nth-of-type({nth}) .precio"
    );
    let Some(price) = first_match(ctx.bridge.ui, &chain).await else {
        bail!("no encontré el precio de ese producto");
    };
    let text = price.text();
    if text.trim().is_empty() {
        bail!("no encontré el precio de ese producto");
    }
    ctx.announce(&format!("Cuesta {}.", text.trim())).await;
    Ok(HandlerResult::ok("read_price").with("index", json!(index)))
}

/// Cut off current and queued utterances, then acknowledge briefly.
async fn silence(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    ctx.bridge.voice.cancel();
    ctx.confirm("Listo.").await;
    Ok(HandlerResult::ok("silence"))
}

async fn repeat(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    let Some(last) = ctx.session.last_spoken.clone() else {
        bail!("no encontré nada que repetir todavía");
    };
    ctx.announce(&last).await;
    Ok(HandlerResult::ok("repeat"))
}
