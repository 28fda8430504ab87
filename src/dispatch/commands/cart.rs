use anyhow::{bail, Result};
use serde_json::json;

use crate::dispatch::commands::CommandCtx;
use crate::dispatch::table::{CommandKind, CommandTable, PageScope};
use crate::dispatch::types::HandlerResult;
use crate::intent::types::ResolvedIntent;
use crate::selector::generators;
use crate::ui::probe::first_match;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOp {
    Add,
    Remove,
    IncreaseQty,
    DecreaseQty,
    UpdateQty,
    Clear,
}

/// Adding happens where products are listed; the rest only makes sense
/// on the cart page.
const ADD_ROUTES: &[&str] = &["/", "/catalog", "/product"];
const CART_ROUTES: &[&str] = &["/cart"];

pub(crate) fn register(table: &mut CommandTable) {
    use CommandKind::Cart;
    table.add("addToCart", Cart(CartOp::Add), PageScope::Only(ADD_ROUTES), false);
    table.add("remove_from_cart", Cart(CartOp::Remove), PageScope::Only(CART_ROUTES), false);
    table.add("increase_quantity", Cart(CartOp::IncreaseQty), PageScope::Only(CART_ROUTES), false);
    table.add("decrease_quantity", Cart(CartOp::DecreaseQty), PageScope::Only(CART_ROUTES), false);
    table.add("update_quantity", Cart(CartOp::UpdateQty), PageScope::Only(CART_ROUTES), false);
    table.add("clear_cart", Cart(CartOp::Clear), PageScope::Only(CART_ROUTES), false);
}

pub(crate) async fn run(
    op: CartOp,
    ctx: &mut CommandCtx<'_, '_>,
    intent: &ResolvedIntent,
) -> Result<HandlerResult> {
    match op {
        CartOp::Add => add(ctx, intent).await,
        CartOp::Remove => remove(ctx, intent).await,
        CartOp::IncreaseQty => bump_quantity(ctx, intent, true).await,
        CartOp::DecreaseQty => bump_quantity(ctx, intent, false).await,
        CartOp::UpdateQty => update_quantity(ctx, intent).await,
        CartOp::Clear => clear(ctx).await,
    }
}

fn quantity_of(intent: &ResolvedIntent) -> u32 {
    intent
        .params
        .get("quantity")
        .and_then(serde_json::Value::as_u64)
        .map(|q| q as u32)
        .unwrap_or(1)
}

fn index_of(intent: &ResolvedIntent, ctx: &CommandCtx<'_, '_>) -> usize {
    intent.param_index("index").unwrap_or(ctx.session.list_cursor)
}

async fn add(ctx: &mut CommandCtx<'_, '_>, intent: &ResolvedIntent) -> Result<HandlerResult> {
    let quantity = quantity_of(intent);
    let name = intent
        .target
        .as_deref()
        .or(intent.param_str("name"))
        .or(intent.param_str("product"))
        .map(str::to_string);

    if let Some(name) = name {
        let added = ctx
            .bridge
            .add_to_cart_by_name(ctx.page, &name, quantity)
            .await;
        if let Some(text) = last_bridge_feedback(&name, quantity, added) {
            ctx.session.last_spoken = Some(text);
        }
        return Ok(if added {
            HandlerResult::ok("add_to_cart").with("product", json!(name))
        } else {
            HandlerResult::failed("add_to_cart")
        });
    }

    // No name slot: add whatever item the list cursor is on.
    let cursor = ctx.session.list_cursor;
    let chain: String = generators::by_index(cursor)
        .split(',')
        .map(|c| format!("{} .add-to-cart, {} .btn-agregar", c.trim(), c.trim()))
        .collect::<Vec<_>>()
        .join(", ");
    let Some(button) = first_match(ctx.bridge.ui, &chain).await else {
        bail!("no encontré un producto que agregar");
    };
    for _ in 0..quantity.max(1) {
        button.click().await?;
    }
    ctx.confirm("Agregué el producto al carrito.").await;
    Ok(HandlerResult::ok("add_to_cart").with("index", json!(cursor)))
}

/// Mirror of the sentence the cart bridge just spoke, so "repite" works
/// after bridge-voiced feedback too.
fn last_bridge_feedback(name: &str, quantity: u32, added: bool) -> Option<String> {
    if !added {
        return None;
    }
    Some(if quantity <= 1 {
        format!("Agregué {name} al carrito.")
    } else {
        format!("Agregué {quantity} unidades de {name} al carrito.")
    })
}

async fn remove(ctx: &mut CommandCtx<'_, '_>, intent: &ResolvedIntent) -> Result<HandlerResult> {
    let index = index_of(intent, ctx);
    let removed = ctx.bridge.remove_from_cart_by_index(ctx.page, index).await;
    Ok(if removed {
        HandlerResult::ok("remove_from_cart").with("index", json!(index))
    } else {
        HandlerResult::failed("remove_from_cart")
    })
}

async fn bump_quantity(
    ctx: &mut CommandCtx<'_, '_>,
    intent: &ResolvedIntent,
    up: bool,
) -> Result<HandlerResult> {
    let index = index_of(intent, ctx);
    let nth = index + 1;
    let chain = if up {
        format!(
            ".cart-item:nth-of-type({nth}) .qty-increase, .carrito-item:nth-of-type({nth}) .btn-mas"
        )
    } else {
        format!(
            ".cart-item:nth-of-type({nth}) .qty-decrease, .carrito-item:nth-of-type({nth}) .btn-menos"
        )
    };

    let Some(button) = first_match(ctx.bridge.ui, &chain).await else {
        bail!("no encontré ese artículo en el carrito");
    };
    button.click().await?;

    if up {
        ctx.confirm("Aumenté la cantidad.").await;
    } else {
        ctx.confirm("Disminuí la cantidad.").await;
    }
    Ok(HandlerResult::ok(if up { "increase_quantity" } else { "decrease_quantity" })
        .with("index", json!(index)))
}

async fn update_quantity(
    ctx: &mut CommandCtx<'_, '_>,
    intent: &ResolvedIntent,
) -> Result<HandlerResult> {
    let Some(quantity) = intent
        .params
        .get("quantity")
        .and_then(serde_json::Value::as_u64)
    else {
        bail!("falta la cantidad nueva");
    };
    let index = index_of(intent, ctx);

    let updated = ctx
        .bridge
        .update_cart_quantity(ctx.page, index, quantity as u32)
        .await;
    Ok(if updated {
        HandlerResult::ok("update_quantity")
            .with("index", json!(index))
            .with("quantity", json!(quantity))
    } else {
        HandlerResult::failed("update_quantity")
    })
}

async fn clear(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    let cleared = ctx.bridge.clear_cart(ctx.page).await;
    if cleared {
        ctx.session.last_spoken = Some("Vacié el carrito.".to_string());
    }
    Ok(if cleared {
        HandlerResult::ok("clear_cart")
    } else {
        HandlerResult::failed("clear_cart")
    })
}
