mod common;

use common::{FakeTree, RecordingVoice};
use vocera::bridge::Bridge;
use vocera::context::PageContext;
use vocera::dispatch::Dispatcher;
use vocera::intent::types::ActionCatalog;
use vocera::intent::IntentResolver;
use vocera::speech::voice::Tone;
use vocera::transcript::types::TranscriptAlternative;
use vocera::VoicePipeline;

fn offline_pipeline() -> VoicePipeline {
    let dispatcher = Dispatcher::new();
    let resolver = IntentResolver::new(None, dispatcher.table().catalog());
    VoicePipeline::with_parts(resolver, dispatcher)
}

#[tokio::test]
async fn about_scenario_end_to_end() {
    let tree = FakeTree::with(&[("footer a[href*=\"about\"]", "Quiénes somos")]);
    let voice = RecordingVoice::new();
    let bridge = Bridge::new(&tree, &voice, None);
    let mut pipeline = offline_pipeline();
    let page = PageContext::new("/");

    let alternatives = [
        TranscriptAlternative::new("a quién estamos", 0.85),
        TranscriptAlternative::new("quiénes somos", 0.72),
    ];
    let outcome = pipeline
        .handle_utterance(&alternatives, &page, &bridge)
        .await
        .expect("utterance must dispatch");

    assert!(outcome.is_executed());
    assert_eq!(tree.clicks(), vec!["footer a[href*=\"about\"]".to_string()]);

    let spoken = voice.spoken_with_tones();
    assert_eq!(spoken.len(), 1, "exactly one confirmation");
    assert!(
        spoken[0].0.contains("quiénes somos"),
        "confirmation must reference the destination, got {:?}",
        spoken[0].0
    );
    assert_eq!(spoken[0].1, Tone::Confirmation);
}

#[tokio::test]
async fn empty_utterance_is_a_noop() {
    let tree = FakeTree::empty();
    let voice = RecordingVoice::new();
    let bridge = Bridge::new(&tree, &voice, None);
    let mut pipeline = offline_pipeline();
    let page = PageContext::new("/");

    let outcome = pipeline.handle_utterance(&[], &page, &bridge).await;
    assert!(outcome.is_none());
    assert!(voice.spoken().is_empty());
    assert_eq!(voice.cancellations(), 0, "no dispatch, no cancel");
}

#[tokio::test]
async fn misheard_cart_command_still_clears_the_cart() {
    // "vasea el carrito" is in the correction table; after cleanup the
    // fast path maps it and the dispatcher clicks the real control.
    let tree = FakeTree::with(&[(".btn-vaciar-carrito", "Vaciar carrito")]);
    let voice = RecordingVoice::new();
    let bridge = Bridge::new(&tree, &voice, None);
    let mut pipeline = offline_pipeline();
    let page = PageContext::new("/cart");

    let alternatives = [TranscriptAlternative::new("vasea el carrito", 0.8)];
    let outcome = pipeline
        .handle_utterance(&alternatives, &page, &bridge)
        .await
        .unwrap();

    assert!(outcome.is_executed());
    assert_eq!(tree.clicks(), vec![".btn-vaciar-carrito".to_string()]);
    assert_eq!(voice.spoken(), vec!["Vacié el carrito.".to_string()]);
}

#[tokio::test]
async fn gated_command_travels_the_whole_pipeline() {
    let tree = FakeTree::empty();
    let voice = RecordingVoice::new();
    let bridge = Bridge::new(&tree, &voice, None);
    let mut pipeline = offline_pipeline();
    let page = PageContext::new("/cart");

    let alternatives = [TranscriptAlternative::new("filtrar por categoría", 0.9)];
    let outcome = pipeline
        .handle_utterance(&alternatives, &page, &bridge)
        .await
        .unwrap();

    assert!(!outcome.is_executed());
    assert_eq!(outcome.result().action, "unavailable");
    assert!(tree.clicks().is_empty());
}

#[tokio::test]
async fn engine_batches_flow_through_the_pipeline() {
    use vocera::speech::channel;
    use vocera::speech::engine::SpeechEngine;

    let tree = FakeTree::with(&[("footer a[href*=\"about\"]", "Quiénes somos")]);
    let voice = RecordingVoice::new();
    let bridge = Bridge::new(&tree, &voice, None);
    let mut pipeline = offline_pipeline();
    let page = PageContext::new("/");

    let (tx, mut engine) = channel::pair(4);
    engine.start().await.unwrap();
    tx.send(vec![TranscriptAlternative::new("quiénes somos", 0.9)])
        .await
        .unwrap();
    drop(tx);

    let batch = engine.next_utterance().await.expect("one utterance queued");
    let outcome = pipeline
        .handle_utterance(&batch, &page, &bridge)
        .await
        .unwrap();
    assert!(outcome.is_executed());

    assert!(engine.next_utterance().await.is_none(), "sender gone, session over");
    engine.stop().await.unwrap();
}

#[tokio::test]
async fn session_reset_clears_the_error_run() {
    let tree = FakeTree::empty();
    let voice = RecordingVoice::new();
    let bridge = Bridge::new(&tree, &voice, None);
    let mut pipeline = offline_pipeline();
    let page = PageContext::new("/");

    // Two consecutive misses.
    for _ in 0..2 {
        let alts = [TranscriptAlternative::new("háblame del clima de hoy", 0.9)];
        pipeline.handle_utterance(&alts, &page, &bridge).await;
    }
    assert_eq!(pipeline.session().consecutive_errors(), 2);

    // Restarting listening rebuilds the session.
    pipeline.reset_session();
    assert_eq!(pipeline.session().consecutive_errors(), 0);

    voice.clear();
    let alts = [TranscriptAlternative::new("otra frase sin sentido", 0.9)];
    pipeline.handle_utterance(&alts, &page, &bridge).await;
    let spoken = voice.spoken();
    assert!(
        spoken.iter().all(|s| !s.contains("ayuda")),
        "fresh session must not inherit the escalation run: {spoken:?}"
    );
}
