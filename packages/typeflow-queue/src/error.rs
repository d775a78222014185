use thiserror::Error;
use typeflow_core::{ConfigError, EngineError};
use typeflow_timing::DelayError;

/// Any failure surfaced while draining the queue. The drain does not catch
/// or retry: the first failure aborts `start()`, leaving the pending queue
/// and history log in their last-consistent state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueueError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Delay(#[from] DelayError),
}

impl From<ConfigError> for QueueError {
    fn from(err: ConfigError) -> Self {
        QueueError::Engine(EngineError::Config(err))
    }
}
