use anyhow::{bail, Result};
use serde_json::json;

use crate::dispatch::commands::{click_semantic, find_semantic, truncate_utterance, CommandCtx};
use crate::dispatch::table::{CommandKind, CommandTable, PageScope};
use crate::dispatch::types::HandlerResult;
use crate::intent::types::ResolvedIntent;
use crate::ui::probe::first_match;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminOp {
    AddProduct,
    EditProduct,
    DeleteProduct,
    ReadInventory,
}

const ADMIN_ROUTES: &[&str] = &["/admin"];

pub(crate) fn register(table: &mut CommandTable) {
    use CommandKind::Admin;
    table.add("admin_add_product", Admin(AdminOp::AddProduct), PageScope::Only(ADMIN_ROUTES), true);
    table.add("admin_edit_product", Admin(AdminOp::EditProduct), PageScope::Only(ADMIN_ROUTES), true);
    table.add("admin_delete_product", Admin(AdminOp::DeleteProduct), PageScope::Only(ADMIN_ROUTES), true);
    table.add("read_inventory", Admin(AdminOp::ReadInventory), PageScope::Only(ADMIN_ROUTES), true);
}

pub(crate) async fn run(
    op: AdminOp,
    ctx: &mut CommandCtx<'_, '_>,
    intent: &ResolvedIntent,
) -> Result<HandlerResult> {
    match op {
        AdminOp::AddProduct => add_product(ctx).await,
        AdminOp::EditProduct => row_action(ctx, intent, true).await,
        AdminOp::DeleteProduct => row_action(ctx, intent, false).await,
        AdminOp::ReadInventory => read_inventory(ctx).await,
    }
}

async fn add_product(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    click_semantic(ctx, "admin.nuevo").await?;
    ctx.confirm("Abrí el formulario de nuevo producto.").await;
    Ok(HandlerResult::ok("admin_add_product"))
}

/// Edit/delete the n-th inventory row (spoken index or list cursor).
async fn row_action(
    ctx: &mut CommandCtx<'_, '_>,
    intent: &ResolvedIntent,
    edit: bool,
) -> Result<HandlerResult> {
    let index = intent.param_index("index").unwrap_or(ctx.session.list_cursor);
    let nth = index + 1;
    let chain = if edit {
        format!(
            ".inventory-table tr:nth-of-type({nth}) .edit-btn, table.inventario tr:nth-of-type({nth}) .btn-editar"
        )
    } else {
        format!(
            ".inventory-table tr:nth-of-type({nth}) .delete-btn, table.inventario tr:nth-of-type({nth}) .btn-borrar"
        )
    };

    let Some(button) = first_match(ctx.bridge.ui, &chain).await else {
        bail!("no encontré el producto número {nth} en el inventario");
    };
    button.click().await?;

    if edit {
        ctx.confirm(&format!("Abrí la edición del producto {nth}.")).await;
        Ok(HandlerResult::ok("admin_edit_product").with("index", json!(index)))
    } else {
        ctx.confirm(&format!("Eliminé el producto {nth} del inventario.")).await;
        Ok(HandlerResult::ok("admin_delete_product").with("index", json!(index)))
    }
}

async fn read_inventory(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    let table_el = find_semantic(ctx, "admin.tabla").await?;
    let text = table_el.text();
    if text.trim().is_empty() {
        ctx.announce("El inventario está vacío.").await;
    } else {
        let summary = truncate_utterance(&text, 250);
        ctx.announce(&format!("Inventario: {summary}")).await;
    }
    Ok(HandlerResult::ok("read_inventory"))
}
