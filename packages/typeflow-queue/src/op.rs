use serde::{Deserialize, Serialize};
use typeflow_core::Settings;

/// How many times the looper replays the history log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Repeat {
    /// Replay the history a fixed number of times. `Times(0)` only clears
    /// the history, replaying nothing.
    Times(usize),
    /// Complete immediately without replaying anything. An unbounded replay
    /// would never return control to the caller, so this is a safety valve
    /// rather than a true infinite loop.
    #[default]
    Forever,
}

/// One queued operation. Immutable once enqueued; the drain executes
/// descriptors strictly in enqueue order. Values are validated when the
/// descriptor executes, not when it is enqueued, so an invalid theme name
/// or rate only surfaces once the drain reaches it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Op {
    TypeText(String),
    PutText(String),
    /// `None` deletes until the content is empty.
    DeleteChars(Option<usize>),
    ClearText,
    Settings(Settings),
    PresetTheme(String),
    /// Wait the given number of milliseconds.
    Standby(f64),
    Repeat(Repeat),
    ClearHistory,
}
