use thiserror::Error;
use typeflow_timing::DelayError;

/// Invalid values caught at the point of use: construction, a settings
/// update, or a theme application. Never raised at enqueue time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid characters-per-second rate: {0}")]
    InvalidCps(f64),
    #[error("invalid cursor blink period: {0} ms")]
    InvalidBlinkPeriod(f64),
    #[error("unknown preset theme: {0:?}")]
    UnknownTheme(String),
}

/// Any failure surfaced by an engine operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Delay(#[from] DelayError),
}
