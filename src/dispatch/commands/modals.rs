use anyhow::Result;

use crate::dispatch::commands::{click_semantic, CommandCtx};
use crate::dispatch::table::{CommandKind, CommandTable, PageScope};
use crate::dispatch::types::HandlerResult;
use crate::intent::types::ResolvedIntent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalOp {
    Close,
    Confirm,
    Cancel,
}

pub(crate) fn register(table: &mut CommandTable) {
    use CommandKind::Modal;
    table.add("close_modal", Modal(ModalOp::Close), PageScope::Anywhere, false);
    table.add("confirm_dialog", Modal(ModalOp::Confirm), PageScope::Anywhere, false);
    table.add("cancel_dialog", Modal(ModalOp::Cancel), PageScope::Anywhere, false);
}

pub(crate) async fn run(
    op: ModalOp,
    ctx: &mut CommandCtx<'_, '_>,
    _intent: &ResolvedIntent,
) -> Result<HandlerResult> {
    match op {
        ModalOp::Close => {
            click_semantic(ctx, "modal.cerrar").await?;
            ctx.confirm("Cerré la ventana.").await;
            Ok(HandlerResult::ok("close_modal"))
        }
        ModalOp::Confirm => {
            click_semantic(ctx, "modal.confirmar").await?;
            ctx.confirm("Confirmado.").await;
            Ok(HandlerResult::ok("confirm_dialog"))
        }
        ModalOp::Cancel => {
            click_semantic(ctx, "modal.cancelar").await?;
            ctx.confirm("Cancelado.").await;
            Ok(HandlerResult::ok("cancel_dialog"))
        }
    }
}
