use anyhow::Result;

use crate::dispatch::commands::{click_semantic, find_semantic, CommandCtx};
use crate::dispatch::table::{CommandKind, CommandTable, PageScope};
use crate::dispatch::types::HandlerResult;
use crate::intent::types::ResolvedIntent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestOp {
    RunVoiceTest,
    MicStatus,
}

const TEST_ROUTES: &[&str] = &["/test"];

pub(crate) fn register(table: &mut CommandTable) {
    use CommandKind::Test;
    table.add("run_voice_test", Test(TestOp::RunVoiceTest), PageScope::Only(TEST_ROUTES), false);
    table.add("mic_status", Test(TestOp::MicStatus), PageScope::Only(TEST_ROUTES), false);
}

pub(crate) async fn run(
    op: TestOp,
    ctx: &mut CommandCtx<'_, '_>,
    _intent: &ResolvedIntent,
) -> Result<HandlerResult> {
    match op {
        TestOp::RunVoiceTest => {
            click_semantic(ctx, "test.iniciar").await?;
            ctx.confirm("Inicié la prueba de voz.").await;
            Ok(HandlerResult::ok("run_voice_test"))
        }
        TestOp::MicStatus => {
            let status = find_semantic(ctx, "test.microfono").await?;
            let text = status.text();
            if text.trim().is_empty() {
                ctx.announce("El micrófono está listo.").await;
            } else {
                ctx.announce(&format!("El micrófono dice: {}.", text.trim())).await;
            }
            Ok(HandlerResult::ok("mic_status"))
        }
    }
}
