use anyhow::{bail, Result};
use serde_json::json;

use crate::dispatch::commands::{truncate_utterance, CommandCtx};
use crate::dispatch::table::{CommandKind, CommandTable, PageScope};
use crate::dispatch::types::HandlerResult;
use crate::intent::types::ResolvedIntent;
use crate::selector::generators;
use crate::ui::probe::first_match;
use crate::ui::tree::UiElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOp {
    Next,
    Previous,
    First,
    Last,
    Select,
    Open,
}

/// Upper bound when scanning for the last list item; real product grids
/// paginate well below this.
const SCAN_LIMIT: usize = 50;

const LIST_ROUTES: &[&str] = &["/", "/catalog", "/cart", "/admin"];

pub(crate) fn register(table: &mut CommandTable) {
    use CommandKind::List;
    table.add("next_item", List(ListOp::Next), PageScope::Only(LIST_ROUTES), false);
    table.add("previous_item", List(ListOp::Previous), PageScope::Only(LIST_ROUTES), false);
    table.add("first_item", List(ListOp::First), PageScope::Only(LIST_ROUTES), false);
    table.add("last_item", List(ListOp::Last), PageScope::Only(LIST_ROUTES), false);
    table.add("select_item", List(ListOp::Select), PageScope::Only(LIST_ROUTES), false);
    table.add("open_item", List(ListOp::Open), PageScope::Only(LIST_ROUTES), false);
}

pub(crate) async fn run(
    op: ListOp,
    ctx: &mut CommandCtx<'_, '_>,
    intent: &ResolvedIntent,
) -> Result<HandlerResult> {
    match op {
        ListOp::Next => {
            let next = ctx.session.list_cursor + 1;
            step(ctx, next).await
        }
        ListOp::Previous => previous(ctx).await,
        ListOp::First => step(ctx, 0).await,
        ListOp::Last => last(ctx).await,
        ListOp::Select => select(ctx, intent).await,
        ListOp::Open => open(ctx, intent).await,
    }
}

async fn item_at(ctx: &CommandCtx<'_, '_>, index: usize) -> Option<Box<dyn UiElement>> {
    first_match(ctx.bridge.ui, &generators::by_index(index)).await
}

/// Move the cursor to `index`, bring the item into view and describe it.
async fn step(ctx: &mut CommandCtx<'_, '_>, index: usize) -> Result<HandlerResult> {
    let Some(item) = item_at(ctx, index).await else {
        bail!("no encontré más artículos en la lista");
    };
    item.scroll_into_view().await?;
    item.focus().await?;
    ctx.session.list_cursor = index;

    let label = truncate_utterance(&item.text(), 120);
    if label.is_empty() {
        ctx.announce(&format!("Artículo {}.", index + 1)).await;
    } else {
        ctx.announce(&format!("Artículo {}: {label}", index + 1)).await;
    }
    Ok(HandlerResult::ok("list_step").with("index", json!(index)))
}

async fn previous(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    if ctx.session.list_cursor == 0 {
        ctx.announce("Ya estás en el primer artículo.").await;
        return Ok(HandlerResult::ok("list_step").with("index", json!(0)));
    }
    let target = ctx.session.list_cursor - 1;
    step(ctx, target).await
}

async fn last(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    let mut last_found = None;
    for index in 0..SCAN_LIMIT {
        if item_at(ctx, index).await.is_some() {
            last_found = Some(index);
        } else if last_found.is_some() {
            break;
        }
    }
    let Some(index) = last_found else {
        bail!("no encontré artículos en la lista");
    };
    step(ctx, index).await
}

async fn select(ctx: &mut CommandCtx<'_, '_>, intent: &ResolvedIntent) -> Result<HandlerResult> {
    // Shape validation guarantees params.index for byIndex intents.
    let Some(index) = intent.param_index("index") else {
        bail!("falta el número del artículo");
    };
    step(ctx, index).await
}

async fn open(ctx: &mut CommandCtx<'_, '_>, intent: &ResolvedIntent) -> Result<HandlerResult> {
    let index = intent.param_index("index").unwrap_or(ctx.session.list_cursor);
    let Some(item) = item_at(ctx, index).await else {
        bail!("no encontré el artículo número {}", index + 1);
    };
    item.click().await?;
    ctx.session.list_cursor = index;
    ctx.confirm(&format!("Abrí el artículo {}.", index + 1)).await;
    Ok(HandlerResult::ok("open_item").with("index", json!(index)))
}
