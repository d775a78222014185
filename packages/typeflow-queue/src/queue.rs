use std::collections::VecDeque;

use typeflow_core::{Settings, Typewriter};
use typeflow_timing::{Phase, delayed};

use crate::error::QueueError;
use crate::op::{Op, Repeat};

/// A sequential event queue bound to one [`Typewriter`].
///
/// Enqueue methods are pure appends: nothing executes until [`start`] drains
/// the queue, one descriptor at a time, each operation's completion gating
/// the next. Executed descriptors are recorded into a history log that
/// [`Repeat`] replays; the control descriptors themselves (`Repeat`,
/// `ClearHistory`) are never recorded.
///
/// The queue may be reused: a later `start` continues appending to the same
/// history until it is cleared.
///
/// [`start`]: EventQueue::start
pub struct EventQueue {
    typewriter: Typewriter,
    pending: VecDeque<Op>,
    history: Vec<Op>,
}

impl EventQueue {
    pub fn new(typewriter: Typewriter) -> Self {
        Self {
            typewriter,
            pending: VecDeque::new(),
            history: Vec::new(),
        }
    }

    /// Appends a raw descriptor to the pending queue.
    pub fn push(&mut self, op: Op) -> &mut Self {
        self.pending.push_back(op);
        self
    }

    /// Appends a batch of descriptors, preserving their order.
    pub fn extend(&mut self, ops: impl IntoIterator<Item = Op>) -> &mut Self {
        self.pending.extend(ops);
        self
    }

    /// Queues typing `text` one character at a time.
    pub fn type_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Op::TypeText(text.into()))
    }

    /// Queues putting `text` immediately, with no per-character delay.
    pub fn put_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Op::PutText(text.into()))
    }

    /// Queues deleting `count` characters from the end of the content.
    pub fn delete_chars(&mut self, count: usize) -> &mut Self {
        self.push(Op::DeleteChars(Some(count)))
    }

    /// Queues deleting characters until the content is empty.
    pub fn delete_all(&mut self) -> &mut Self {
        self.push(Op::DeleteChars(None))
    }

    /// Queues clearing the content immediately.
    pub fn clear_text(&mut self) -> &mut Self {
        self.push(Op::ClearText)
    }

    /// Queues a settings update on the bound typewriter.
    pub fn settings(&mut self, settings: Settings) -> &mut Self {
        self.push(Op::Settings(settings))
    }

    /// Queues applying a preset theme by name. The name is resolved when the
    /// descriptor executes, not here.
    pub fn preset_theme(&mut self, name: impl Into<String>) -> &mut Self {
        self.push(Op::PresetTheme(name.into()))
    }

    /// Queues waiting `ms` milliseconds before the next operation.
    pub fn standby(&mut self, ms: f64) -> &mut Self {
        self.push(Op::Standby(ms))
    }

    /// Queues replaying everything executed so far, per [`Repeat`].
    pub fn repeat(&mut self, count: Repeat) -> &mut Self {
        self.push(Op::Repeat(count))
    }

    /// Queues clearing the history log, so earlier operations are not
    /// replayed by a later `repeat`. Equivalent to `repeat(Repeat::Times(0))`.
    pub fn clear_history(&mut self) -> &mut Self {
        self.push(Op::ClearHistory)
    }

    /// Drains the pending queue in one pass, returning once every queued
    /// operation (including all nested replays) has completed. A failure
    /// aborts the drain: the pending queue keeps its unconsumed tail and the
    /// history keeps everything executed before the failure.
    pub async fn start(&mut self) -> Result<(), QueueError> {
        tracing::info!("draining {} queued operations", self.pending.len());

        while let Some(op) = self.pending.pop_front() {
            self.execute(op).await?;
        }

        tracing::info!("drain complete, {} operations in history", self.history.len());
        Ok(())
    }

    async fn execute(&mut self, op: Op) -> Result<(), QueueError> {
        tracing::debug!("executing {:?}", op);
        match op {
            Op::Repeat(count) => self.replay_history(count).await,
            Op::ClearHistory => {
                self.history.clear();
                Ok(())
            }
            op => {
                self.apply(&op).await?;
                self.history.push(op);
                Ok(())
            }
        }
    }

    /// Runs one descriptor against the bound typewriter, suspending until it
    /// completes. Both the main drain and the looper go through here, so a
    /// replayed descriptor gets exactly the execution a fresh one would.
    async fn apply(&mut self, op: &Op) -> Result<(), QueueError> {
        match op {
            Op::TypeText(text) => self.typewriter.type_text(text).await?,
            Op::PutText(text) => self.typewriter.put_text(text),
            Op::DeleteChars(count) => self.typewriter.delete_chars(*count).await?,
            Op::ClearText => self.typewriter.clear_text(),
            Op::Settings(settings) => self.typewriter.apply_settings(*settings)?,
            Op::PresetTheme(name) => self.typewriter.preset_theme(name)?,
            Op::Standby(ms) => {
                delayed(*ms, Phase::BeforeDelay, || {}).await?;
            }
            // Control descriptors are handled before recording and the
            // history log never contains them.
            Op::Repeat(_) | Op::ClearHistory => {}
        }
        Ok(())
    }

    async fn replay_history(&mut self, count: Repeat) -> Result<(), QueueError> {
        let times = match count {
            // Completes immediately, leaving the history untouched.
            Repeat::Forever => return Ok(()),
            Repeat::Times(times) => times,
        };

        if times == 0 {
            self.history.clear();
            return Ok(());
        }

        tracing::debug!("replaying {} history entries {} times", self.history.len(), times);
        for _ in 0..times {
            for index in 0..self.history.len() {
                let op = self.history[index].clone();
                self.apply(&op).await?;
            }
        }

        // Replays are not re-recorded, so the history is exactly what the
        // main drain appended; it is spent once the full replay succeeds.
        self.history.clear();
        Ok(())
    }

    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    pub fn typewriter_mut(&mut self) -> &mut Typewriter {
        &mut self.typewriter
    }

    pub fn into_typewriter(self) -> Typewriter {
        self.typewriter
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn history(&self) -> &[Op] {
        &self.history
    }
}
