use std::cell::Cell;
use std::rc::Rc;

use tokio::time::{Duration, Instant};
use typeflow_timing::{DelayError, Phase, delayed};

#[tokio::test(start_paused = true)]
async fn test_before_phase_runs_action_then_waits() {
    let start = Instant::now();
    let fired_at = Rc::new(Cell::new(None));

    let fired = fired_at.clone();
    delayed(50.0, Phase::BeforeDelay, move || {
        fired.set(Some(Instant::now()));
    })
    .await
    .unwrap();

    // Action ran at entry, completion came 50ms later.
    assert_eq!(fired_at.get(), Some(start));
    assert_eq!(start.elapsed(), Duration::from_millis(50));
}

#[tokio::test(start_paused = true)]
async fn test_after_phase_waits_then_runs_action() {
    let start = Instant::now();
    let fired_at = Rc::new(Cell::new(None));

    let fired = fired_at.clone();
    delayed(50.0, Phase::AfterDelay, move || {
        fired.set(Some(Instant::now()));
    })
    .await
    .unwrap();

    assert_eq!(fired_at.get(), Some(start + Duration::from_millis(50)));
}

#[tokio::test(start_paused = true)]
async fn test_return_value_is_preserved() {
    let result = delayed(10.0, Phase::BeforeDelay, || 42).await.unwrap();
    assert_eq!(result, 42);

    let result = delayed(10.0, Phase::AfterDelay, || "done").await.unwrap();
    assert_eq!(result, "done");
}

#[tokio::test(start_paused = true)]
async fn test_zero_delay_completes_immediately() {
    let start = Instant::now();
    delayed(0.0, Phase::BeforeDelay, || {}).await.unwrap();
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_duration_rejected_without_running_action() {
    let ran = Rc::new(Cell::new(false));

    for bad in [-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let flag = ran.clone();
        let result = delayed(bad, Phase::BeforeDelay, move || flag.set(true)).await;
        assert!(matches!(result, Err(DelayError::InvalidDuration(_))));
    }

    assert!(!ran.get(), "action must not run for an invalid duration");
}
