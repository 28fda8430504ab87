use anyhow::{bail, Result};
use serde_json::json;

use crate::dispatch::commands::{find_semantic, CommandCtx};
use crate::dispatch::table::{CommandKind, CommandTable, PageScope};
use crate::dispatch::types::HandlerResult;
use crate::intent::types::ResolvedIntent;
use crate::selector;
use crate::ui::probe::first_match;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOp {
    Search,
    OpenSearch,
    ClearSearch,
    FilterCategory,
    ClearFilters,
    SortPriceAsc,
    SortPriceDesc,
    SortName,
    ReadCategories,
}

const CATALOG_ROUTES: &[&str] = &["/catalog"];

pub(crate) fn register(table: &mut CommandTable) {
    use CommandKind::Search;
    table.add("search_product", Search(SearchOp::Search), PageScope::Anywhere, false);
    table.add("open_search", Search(SearchOp::OpenSearch), PageScope::Anywhere, false);
    table.add("clear_search", Search(SearchOp::ClearSearch), PageScope::Only(CATALOG_ROUTES), false);
    table.add("filter_category", Search(SearchOp::FilterCategory), PageScope::Only(CATALOG_ROUTES), false);
    table.add("clear_filters", Search(SearchOp::ClearFilters), PageScope::Only(CATALOG_ROUTES), false);
    table.add("sort_price_asc", Search(SearchOp::SortPriceAsc), PageScope::Only(CATALOG_ROUTES), false);
    table.add("sort_price_desc", Search(SearchOp::SortPriceDesc), PageScope::Only(CATALOG_ROUTES), false);
    table.add("sort_name", Search(SearchOp::SortName), PageScope::Only(CATALOG_ROUTES), false);
    table.add("read_categories", Search(SearchOp::ReadCategories), PageScope::Only(CATALOG_ROUTES), false);
}

pub(crate) async fn run(
    op: SearchOp,
    ctx: &mut CommandCtx<'_, '_>,
    intent: &ResolvedIntent,
) -> Result<HandlerResult> {
    match op {
        SearchOp::Search => search(ctx, intent).await,
        SearchOp::OpenSearch => open_search(ctx).await,
        SearchOp::ClearSearch => clear_search(ctx).await,
        SearchOp::FilterCategory => filter_category(ctx, intent).await,
        SearchOp::ClearFilters => clear_filters(ctx).await,
        SearchOp::SortPriceAsc => sort(ctx, "price-asc", "Ordené del más barato al más caro.").await,
        SearchOp::SortPriceDesc => sort(ctx, "price-desc", "Ordené del más caro al más barato.").await,
        SearchOp::SortName => sort(ctx, "name", "Ordené por nombre.").await,
        SearchOp::ReadCategories => read_categories(ctx).await,
    }
}

/// The catalog search box when the page has one, the header box anywhere
/// else.
async fn search_input(ctx: &CommandCtx<'_, '_>) -> Result<Box<dyn crate::ui::tree::UiElement>> {
    let mut chains = Vec::new();
    if let Some(chain) = selector::resolve("catalog.busqueda.input", ctx.page) {
        chains.push(chain);
    }
    if let Some(chain) = selector::resolve("header.search.input", ctx.page) {
        chains.push(chain);
    }
    match first_match(ctx.bridge.ui, &chains.join(", ")).await {
        Some(element) => Ok(element),
        None => bail!("no encontré el campo de búsqueda"),
    }
}

async fn search(ctx: &mut CommandCtx<'_, '_>, intent: &ResolvedIntent) -> Result<HandlerResult> {
    let query = intent
        .param_str("query")
        .or(intent.target.as_deref())
        .map(str::to_string);

    let input = search_input(ctx).await?;

    let Some(query) = query else {
        // No slot: leave the cursor in the box and prompt for dictation.
        input.focus().await?;
        ctx.announce("Te escucho, ¿qué producto buscas?").await;
        return Ok(HandlerResult::ok("search_prompt"));
    };

    input.set_value(&query).await?;
    if let Ok(button) = find_semantic(ctx, "header.search.button").await {
        button.click().await?;
    }
    ctx.confirm(&format!("Busqué {query}.")).await;
    Ok(HandlerResult::ok("search").with("query", json!(query)))
}

async fn open_search(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    let input = search_input(ctx).await?;
    input.focus().await?;
    ctx.confirm("Abrí la búsqueda.").await;
    Ok(HandlerResult::ok("open_search"))
}

async fn clear_search(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    if let Ok(button) = find_semantic(ctx, "catalog.busqueda.limpiar").await {
        button.click().await?;
    } else {
        let input = search_input(ctx).await?;
        input.set_value("").await?;
    }
    ctx.confirm("Limpié la búsqueda.").await;
    Ok(HandlerResult::ok("clear_search"))
}

async fn filter_category(
    ctx: &mut CommandCtx<'_, '_>,
    intent: &ResolvedIntent,
) -> Result<HandlerResult> {
    let Some(category) = intent
        .param_str("category")
        .or(intent.target.as_deref())
        .map(str::to_string)
    else {
        bail!("falta la categoría para filtrar");
    };

    let filter = find_semantic(ctx, "catalog.filtro.categoria").await?;
    filter.set_value(&category).await?;
    ctx.confirm(&format!("Filtré por {category}.")).await;
    Ok(HandlerResult::ok("filter_category").with("category", json!(category)))
}

async fn clear_filters(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    find_semantic(ctx, "catalog.filtro.limpiar").await?.click().await?;
    ctx.confirm("Quité los filtros.").await;
    Ok(HandlerResult::ok("clear_filters"))
}

async fn sort(ctx: &mut CommandCtx<'_, '_>, value: &str, feedback: &str) -> Result<HandlerResult> {
    let selector_el = find_semantic(ctx, "catalog.orden.selector").await?;
    selector_el.set_value(value).await?;
    ctx.confirm(feedback).await;
    Ok(HandlerResult::ok("sort").with("by", json!(value)))
}

async fn read_categories(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    ctx.announce("Las categorías son: chocolates, flores, peluches, globos y vinos.")
        .await;
    Ok(HandlerResult::ok("read_categories"))
}
