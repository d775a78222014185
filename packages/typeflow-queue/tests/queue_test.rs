use tokio::time::{Duration, Instant};
use typeflow_core::{ConfigError, EngineError, Settings, Theme, Typewriter, TypewriterConfig};
use typeflow_queue::{EventQueue, Op, QueueError, Repeat};

fn typewriter() -> Typewriter {
    Typewriter::new(TypewriterConfig::default()).unwrap()
}

#[test]
fn test_enqueue_is_side_effect_free() {
    let mut tw = typewriter();
    tw.drain_mutations(); // discard construction mutations

    let mut queue = EventQueue::new(tw);
    queue
        .type_text("abc")
        .standby(100.0)
        .repeat(Repeat::Times(2));

    assert_eq!(queue.typewriter().content(), "");
    assert!(queue.typewriter_mut().drain_mutations().is_empty());
    assert_eq!(queue.pending_len(), 3);
    assert!(queue.history().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_instant_ops_drain_without_delay() {
    let mut queue = EventQueue::new(typewriter());
    queue
        .put_text("hello")
        .clear_text()
        .put_text("re")
        .put_text("do")
        .settings(Settings {
            type_cps: Some(50.0),
            ..Settings::default()
        })
        .preset_theme("dark");

    let start = Instant::now();
    queue.start().await.unwrap();

    assert_eq!(start.elapsed(), Duration::ZERO);
    assert_eq!(queue.typewriter().content(), "redo");
    assert_eq!(queue.typewriter().theme(), Theme::Dark);
    assert_eq!(queue.typewriter().type_ms_per_char(), 20.0);
}

#[tokio::test(start_paused = true)]
async fn test_ops_execute_in_enqueue_order() {
    let mut queue = EventQueue::new(typewriter());
    queue
        .put_text("a")
        .type_text("b")
        .delete_chars(1)
        .put_text("c");

    let start = Instant::now();
    queue.start().await.unwrap();

    // put "a" -> type "b" -> delete "b" -> put "c", strictly in order.
    assert_eq!(queue.typewriter().content(), "ac");
    assert_eq!(start.elapsed(), Duration::from_millis(200));
}

#[tokio::test(start_paused = true)]
async fn test_standby_suspends_and_is_recorded() {
    let mut queue = EventQueue::new(typewriter());
    queue.standby(25.0);

    let start = Instant::now();
    queue.start().await.unwrap();

    assert_eq!(start.elapsed(), Duration::from_millis(25));
    assert_eq!(queue.history(), &[Op::Standby(25.0)]);
}

#[tokio::test(start_paused = true)]
async fn test_start_is_reentrant_and_history_accumulates() {
    let mut queue = EventQueue::new(typewriter());

    queue.put_text("a");
    queue.start().await.unwrap();

    queue.put_text("b");
    queue.start().await.unwrap();

    assert_eq!(
        queue.history(),
        &[Op::PutText("a".to_string()), Op::PutText("b".to_string())]
    );

    queue.repeat(Repeat::Times(1));
    queue.start().await.unwrap();

    assert_eq!(queue.typewriter().content(), "abab");
    assert!(queue.history().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_failure_preserves_pending_and_history() {
    let mut queue = EventQueue::new(typewriter());
    queue.put_text("a").preset_theme("neon").put_text("b");

    let err = queue.start().await.unwrap_err();

    assert!(matches!(
        err,
        QueueError::Engine(EngineError::Config(ConfigError::UnknownTheme(_)))
    ));
    assert_eq!(queue.typewriter().content(), "a");
    assert_eq!(queue.pending_len(), 1, "unconsumed tail must stay queued");
    assert_eq!(queue.history(), &[Op::PutText("a".to_string())]);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_standby_duration_fails_drain() {
    let mut queue = EventQueue::new(typewriter());
    queue.standby(-5.0);

    let err = queue.start().await.unwrap_err();
    assert!(matches!(err, QueueError::Delay(_)));
}

#[tokio::test(start_paused = true)]
async fn test_invalid_settings_surface_at_execution() {
    let mut queue = EventQueue::new(typewriter());

    // Enqueueing the bad rate is fine; only the drain rejects it.
    queue.settings(Settings {
        type_cps: Some(0.0),
        ..Settings::default()
    });
    assert_eq!(queue.pending_len(), 1);

    let err = queue.start().await.unwrap_err();
    assert!(matches!(
        err,
        QueueError::Engine(EngineError::Config(ConfigError::InvalidCps(_)))
    ));
}
