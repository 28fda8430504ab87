use vocera::context::PageContext;
use vocera::transcript::normalize;
use vocera::transcript::types::TranscriptAlternative;

#[test]
fn normalization_is_idempotent() {
    let ctx = PageContext::new("/catalog");
    let samples = [
        "haz clic en agregar al carrito",
        "llévame al carrito con dos chocolates",
        "a quién estamos",
        "presiona   el  botón   de pagar",
        "busca flores baratas",
    ];
    for sample in samples {
        let once = normalize(&[TranscriptAlternative::new(sample, 0.9)], &ctx);
        let twice = normalize(&[TranscriptAlternative::new(&once, 0.9)], &ctx);
        assert_eq!(once, twice, "correction must be stable for {sample:?}");
    }
}

#[test]
fn empty_batch_is_a_noop() {
    let ctx = PageContext::new("/");
    assert_eq!(normalize(&[], &ctx), "");
}

#[test]
fn about_utterance_selected_and_corrected() {
    // The higher-confidence mis-transcription wins the ranking, then the
    // correction table canonicalizes it.
    let ctx = PageContext::new("/");
    let alternatives = [
        TranscriptAlternative::new("a quién estamos", 0.85),
        TranscriptAlternative::new("quiénes somos", 0.72),
    ];
    assert_eq!(normalize(&alternatives, &ctx), "a quiénes somos");
}

#[test]
fn page_context_changes_the_winner() {
    // Identical confidences; on the cart page the cart-flavored
    // candidate picks up keyword and verb bonuses.
    let cart = PageContext::new("/cart");
    let alternatives = [
        TranscriptAlternative::new("bacía el armario", 0.75),
        TranscriptAlternative::new("vacía el carrito", 0.75),
    ];
    assert_eq!(normalize(&alternatives, &cart), "vacía el carrito");
}

#[test]
fn rewrites_canonicalize_verbs_and_digits() {
    let ctx = PageContext::new("/catalog");
    let text = normalize(
        &[TranscriptAlternative::new(
            "hazme clic en agregar dos chocolates",
            0.9,
        )],
        &ctx,
    );
    assert_eq!(text, "clic en agregar 2 chocolates");
}
