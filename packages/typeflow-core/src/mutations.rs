use serde::{Deserialize, Serialize};

use crate::cursor::CursorSettings;
use crate::theme::Theme;

/// One change to the rendered surface. The engine appends these to its
/// buffer as state changes happen; renderers drain and apply them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mutation {
    AppendText { text: String },
    DeleteLast,
    ClearText,
    SetTheme { theme: Theme },
    SetCursorBlinking { on: bool },
    ConfigureCursor { settings: CursorSettings },
}
