pub mod cursor;
pub mod defaults;
pub mod error;
pub mod mutations;
pub mod theme;
pub mod typewriter;

pub use cursor::{BlinkMode, Cursor, CursorSettings, CursorStyle};
pub use error::{ConfigError, EngineError};
pub use mutations::Mutation;
pub use theme::Theme;
pub use typewriter::{Settings, Typewriter, TypewriterConfig};
