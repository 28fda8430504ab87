use anyhow::Result;

use crate::dispatch::commands::{find_semantic, CommandCtx};
use crate::dispatch::table::{CommandKind, CommandTable, PageScope};
use crate::dispatch::types::HandlerResult;
use crate::intent::types::ResolvedIntent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOp {
    Up,
    Down,
    Top,
    Bottom,
}

const STEP_PX: i32 = 600;

pub(crate) fn register(table: &mut CommandTable) {
    use CommandKind::Scroll;
    table.add("scroll_up", Scroll(ScrollOp::Up), PageScope::Anywhere, false);
    table.add("scroll_down", Scroll(ScrollOp::Down), PageScope::Anywhere, false);
    table.add("scroll_top", Scroll(ScrollOp::Top), PageScope::Anywhere, false);
    table.add("scroll_bottom", Scroll(ScrollOp::Bottom), PageScope::Anywhere, false);
}

pub(crate) async fn run(
    op: ScrollOp,
    ctx: &mut CommandCtx<'_, '_>,
    _intent: &ResolvedIntent,
) -> Result<HandlerResult> {
    match op {
        ScrollOp::Up => {
            ctx.bridge.ui.scroll_by(-STEP_PX).await?;
            ctx.confirm("Subí.").await;
            Ok(HandlerResult::ok("scroll_up"))
        }
        ScrollOp::Down => {
            ctx.bridge.ui.scroll_by(STEP_PX).await?;
            ctx.confirm("Bajé.").await;
            Ok(HandlerResult::ok("scroll_down"))
        }
        ScrollOp::Top => {
            // Prefer snapping to the header; fall back to a big delta.
            match find_semantic(ctx, "header.logo").await {
                Ok(element) => element.scroll_into_view().await?,
                Err(_) => ctx.bridge.ui.scroll_by(i32::MIN / 2).await?,
            }
            ctx.confirm("Al principio de la página.").await;
            Ok(HandlerResult::ok("scroll_top"))
        }
        ScrollOp::Bottom => {
            match find_semantic(ctx, "footer.contact").await {
                Ok(element) => element.scroll_into_view().await?,
                Err(_) => ctx.bridge.ui.scroll_by(i32::MAX / 2).await?,
            }
            ctx.confirm("Al final de la página.").await;
            Ok(HandlerResult::ok("scroll_bottom"))
        }
    }
}
