use crate::cursor::{BlinkMode, CursorStyle};
use crate::theme::Theme;

// Values used when a Typewriter first initializes.
pub const DEFAULT_TYPE_CPS: f64 = 10.0;
pub const DEFAULT_DELETE_CPS: f64 = 10.0;
pub const DEFAULT_THEME: Theme = Theme::Default;

// Values used when a Cursor first initializes.
pub const DEFAULT_BLINK_MODE: BlinkMode = BlinkMode::Linear;
pub const DEFAULT_BLINK_PERIOD_MS: f64 = 1000.0;
pub const DEFAULT_CURSOR_STYLE: CursorStyle = CursorStyle::Vert;
