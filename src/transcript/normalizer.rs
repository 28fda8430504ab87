use tracing::debug;

use crate::context::PageContext;
use crate::transcript::rewrite::correct;
use crate::transcript::scoring::score_alternative;
use crate::transcript::types::TranscriptAlternative;

/// Pick the best alternative and clean it up.
///
/// Pure given its static tables: no I/O, no await points. Empty input
/// yields an empty string, which callers treat as a no-op utterance.
pub fn normalize(alternatives: &[TranscriptAlternative], ctx: &PageContext) -> String {
    let winner = match alternatives {
        [] => return String::new(),
        [only] => only.text.clone(),
        many => select(many, ctx),
    };

    correct(&winner)
}

/// Score every candidate and keep the best. Ties break to the lower
/// engine index (strict `>` while scanning in order).
fn select(alternatives: &[TranscriptAlternative], ctx: &PageContext) -> String {
    let mut best_index = 0;
    let mut best_score = f32::MIN;

    for (i, alt) in alternatives.iter().enumerate() {
        let lowered = alt.text.to_lowercase();
        let score = score_alternative(&lowered, i, alt.confidence, ctx);
        debug!(candidate = %alt.text, index = i, score, "scored alternative");
        if score > best_score {
            best_score = score;
            best_index = i;
        }
    }

    alternatives[best_index].text.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_output() {
        let ctx = PageContext::new("/");
        assert_eq!(normalize(&[], &ctx), "");
    }

    #[test]
    fn single_alternative_is_corrected() {
        let ctx = PageContext::new("/");
        let alts = [TranscriptAlternative::new("a quién estamos", 0.9)];
        assert_eq!(normalize(&alts, &ctx), "a quiénes somos");
    }

    #[test]
    fn context_bonus_can_overturn_engine_ranking() {
        let ctx = PageContext::new("/cart");
        let alts = [
            TranscriptAlternative::new("que niño tan alto", 0.82),
            TranscriptAlternative::new("vacía el carrito", 0.70),
        ];
        assert_eq!(normalize(&alts, &ctx), "vacía el carrito");
    }

    #[test]
    fn ties_break_to_engine_order() {
        let ctx = PageContext::new("/");
        let alts = [
            TranscriptAlternative::new("hola hola", 0.5),
            TranscriptAlternative::new("hola hola", 0.5),
        ];
        // Same text, same confidence; index decay makes the first win,
        // and even with zero decay the strict comparison keeps index 0.
        assert_eq!(normalize(&alts, &ctx), "hola hola");
    }
}
