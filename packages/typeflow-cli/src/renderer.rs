use std::io::{self, Write};

use typeflow_core::Typewriter;

/// Live single-line renderer driven by the engine's character hooks: redraws
/// the whole line with a block cursor on every character step.
pub struct LineRenderer;

impl LineRenderer {
    pub fn draw(typewriter: &Typewriter) {
        let mut out = io::stdout();
        let _ = write!(out, "\r\x1b[2K{}\u{258c}", typewriter.content());
        let _ = out.flush();
    }

    /// Final redraw without the cursor once the queue has drained.
    pub fn finish(typewriter: &Typewriter) {
        let mut out = io::stdout();
        let _ = writeln!(out, "\r\x1b[2K{}", typewriter.content());
        let _ = out.flush();
    }
}
