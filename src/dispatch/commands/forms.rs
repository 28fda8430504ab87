use anyhow::{bail, Result};
use serde_json::json;

use crate::dispatch::commands::CommandCtx;
use crate::dispatch::table::{CommandKind, CommandTable, PageScope};
use crate::dispatch::types::HandlerResult;
use crate::intent::types::ResolvedIntent;
use crate::selector;
use crate::selector::generators;
use crate::ui::probe::first_match;
use crate::ui::tree::UiElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOp {
    FocusField,
    FillField,
    ClearField,
    SubmitForm,
    NextField,
}

const FORM_ROUTES: &[&str] = &["/payment", "/profile", "/admin"];

pub(crate) fn register(table: &mut CommandTable) {
    use CommandKind::Form;
    table.add("focus_field", Form(FormOp::FocusField), PageScope::Only(FORM_ROUTES), false);
    table.add("fill_field", Form(FormOp::FillField), PageScope::Only(FORM_ROUTES), false);
    table.add("clear_field", Form(FormOp::ClearField), PageScope::Only(FORM_ROUTES), false);
    table.add("submit_form", Form(FormOp::SubmitForm), PageScope::Only(FORM_ROUTES), false);
    table.add("next_field", Form(FormOp::NextField), PageScope::Only(FORM_ROUTES), false);
}

pub(crate) async fn run(
    op: FormOp,
    ctx: &mut CommandCtx<'_, '_>,
    intent: &ResolvedIntent,
) -> Result<HandlerResult> {
    match op {
        FormOp::FocusField => focus_field(ctx, intent).await,
        FormOp::FillField => fill_field(ctx, intent).await,
        FormOp::ClearField => clear_field(ctx, intent).await,
        FormOp::SubmitForm => submit_form(ctx).await,
        FormOp::NextField => next_field(ctx).await,
    }
}

/// A field named by a semantic key ("payment.campo.tarjeta") or by the
/// visible label the user spoke.
async fn field_for(
    ctx: &CommandCtx<'_, '_>,
    intent: &ResolvedIntent,
) -> Result<Box<dyn UiElement>> {
    let Some(target) = intent.target.as_deref().or(intent.param_str("field")) else {
        bail!("falta el nombre del campo");
    };

    let mut chains = Vec::new();
    if target.contains('.') {
        if let Some(chain) = selector::resolve(target, ctx.page) {
            chains.push(chain);
        }
    }
    chains.push(generators::by_name(target));

    match first_match(ctx.bridge.ui, &chains.join(", ")).await {
        Some(element) => Ok(element),
        None => bail!("no encontré el campo {target}"),
    }
}

async fn focus_field(ctx: &mut CommandCtx<'_, '_>, intent: &ResolvedIntent) -> Result<HandlerResult> {
    let field = field_for(ctx, intent).await?;
    field.focus().await?;
    ctx.announce("Campo listo, te escucho.").await;
    Ok(HandlerResult::ok("focus_field"))
}

async fn fill_field(ctx: &mut CommandCtx<'_, '_>, intent: &ResolvedIntent) -> Result<HandlerResult> {
    let Some(value) = intent
        .param_str("value")
        .or(intent.param_str("text"))
        .map(str::to_string)
    else {
        bail!("falta el texto para escribir");
    };

    let field = field_for(ctx, intent).await?;
    field.set_value(&value).await?;
    ctx.confirm(&format!("Escribí {value}.")).await;
    Ok(HandlerResult::ok("fill_field").with("value", json!(value)))
}

async fn clear_field(ctx: &mut CommandCtx<'_, '_>, intent: &ResolvedIntent) -> Result<HandlerResult> {
    let field = field_for(ctx, intent).await?;
    field.set_value("").await?;
    ctx.confirm("Borré el campo.").await;
    Ok(HandlerResult::ok("clear_field"))
}

async fn submit_form(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    // Whichever submit control the current page's table resolves.
    let chains: Vec<String> = ["payment.enviar", "admin.formulario.guardar", "profile.guardar"]
        .iter()
        .filter_map(|key| selector::resolve(key, ctx.page))
        .collect();
    if chains.is_empty() {
        bail!("no encontré un formulario en esta página");
    }
    let Some(button) = first_match(ctx.bridge.ui, &chains.join(", ")).await else {
        bail!("no encontré el botón de enviar");
    };
    button.click().await?;
    ctx.confirm("Envié el formulario.").await;
    Ok(HandlerResult::ok("submit_form"))
}

async fn next_field(ctx: &mut CommandCtx<'_, '_>) -> Result<HandlerResult> {
    let Some(field) =
        first_match(ctx.bridge.ui, "form input, form select, form textarea").await
    else {
        bail!("no encontré campos en esta página");
    };
    field.focus().await?;
    ctx.announce("Siguiente campo.").await;
    Ok(HandlerResult::ok("next_field"))
}
