use std::time::Duration;

use thiserror::Error;
use tokio::time::sleep;

/// When the side effect runs relative to the delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Run the action first, then wait out the delay.
    #[default]
    BeforeDelay,
    /// Wait out the delay first, then run the action.
    AfterDelay,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DelayError {
    #[error("invalid delay duration: {0} ms")]
    InvalidDuration(f64),
}

/// Runs `action` around a delay of `ms` milliseconds and resolves with the
/// action's return value once both have completed.
///
/// The duration is validated before anything runs: a negative or non-finite
/// `ms` returns [`DelayError::InvalidDuration`] and the action is never
/// invoked. If the action itself is fallible, return a `Result` from it and
/// inspect the inner value at the call site.
pub async fn delayed<T>(ms: f64, phase: Phase, action: impl FnOnce() -> T) -> Result<T, DelayError> {
    if !ms.is_finite() || ms < 0.0 {
        return Err(DelayError::InvalidDuration(ms));
    }

    let duration = Duration::from_secs_f64(ms / 1000.0);
    match phase {
        Phase::BeforeDelay => {
            let result = action();
            sleep(duration).await;
            Ok(result)
        }
        Phase::AfterDelay => {
            sleep(duration).await;
            Ok(action())
        }
    }
}
