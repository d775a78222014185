use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use typeflow_timing::{Phase, delayed};

use crate::cursor::{Cursor, CursorSettings};
use crate::defaults;
use crate::error::{ConfigError, EngineError};
use crate::mutations::Mutation;
use crate::theme::Theme;

/// Hook invoked for every single character typed or deleted. Hooks run
/// before the character is applied, so they observe the intermediate
/// content; they receive the engine immutably and cannot re-enter the
/// operation in flight.
pub type CharHook = Rc<RefCell<dyn FnMut(&Typewriter)>>;

/// Construction-time configuration for a [`Typewriter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypewriterConfig {
    pub type_cps: f64,
    pub delete_cps: f64,
    pub cursor: CursorSettings,
    pub theme: Theme,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_cps: defaults::DEFAULT_TYPE_CPS,
            delete_cps: defaults::DEFAULT_DELETE_CPS,
            cursor: CursorSettings::default(),
            theme: defaults::DEFAULT_THEME,
        }
    }
}

/// A runtime settings update. Absent fields are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Settings {
    pub type_cps: Option<f64>,
    pub delete_cps: Option<f64>,
    pub cursor: Option<CursorSettings>,
}

/// The typed-surface engine: owns the text content, the per-character
/// rates, one cursor indicator and the theme tag, and emits a [`Mutation`]
/// for every surface change. Renderers drain the buffer at their own pace.
pub struct Typewriter {
    content: String,
    type_ms_per_char: f64,
    delete_ms_per_char: f64,
    cursor: Cursor,
    theme: Theme,
    type_hooks: SmallVec<[CharHook; 2]>,
    delete_hooks: SmallVec<[CharHook; 2]>,
    mutations: Vec<Mutation>,
}

fn ms_per_char(cps: f64) -> Result<f64, ConfigError> {
    if !cps.is_finite() || cps <= 0.0 {
        return Err(ConfigError::InvalidCps(cps));
    }
    Ok(1000.0 / cps)
}

impl Typewriter {
    pub fn new(config: TypewriterConfig) -> Result<Self, ConfigError> {
        let mut typewriter = Self {
            content: String::new(),
            type_ms_per_char: ms_per_char(config.type_cps)?,
            delete_ms_per_char: ms_per_char(config.delete_cps)?,
            cursor: Cursor::new(config.cursor)?,
            theme: config.theme,
            type_hooks: SmallVec::new(),
            delete_hooks: SmallVec::new(),
            mutations: Vec::new(),
        };
        typewriter.mutations.push(Mutation::SetTheme {
            theme: config.theme,
        });
        typewriter.mutations.push(Mutation::ConfigureCursor {
            settings: config.cursor,
        });
        Ok(typewriter)
    }

    /// Registers a hook run before every single character typed.
    /// Hooks are per instance and run in registration order.
    pub fn on_char_typed(&mut self, hook: impl FnMut(&Typewriter) + 'static) {
        self.type_hooks.push(Rc::new(RefCell::new(hook)));
    }

    /// Registers a hook run before every single character deleted.
    pub fn on_char_deleted(&mut self, hook: impl FnMut(&Typewriter) + 'static) {
        self.delete_hooks.push(Rc::new(RefCell::new(hook)));
    }

    /// Types `text` into the surface one character at a time, suspending for
    /// the configured per-character delay after each one. Characters are
    /// processed strictly one at a time so hooks can observe the
    /// intermediate content.
    pub async fn type_text(&mut self, text: &str) -> Result<(), EngineError> {
        tracing::debug!("typing {} characters", text.chars().count());
        self.set_blinking(false);

        for ch in text.chars() {
            let ms = self.type_ms_per_char;
            delayed(ms, Phase::BeforeDelay, || {
                self.run_hooks(HookKind::Type);
                self.content.push(ch);
                self.mutations.push(Mutation::AppendText {
                    text: ch.to_string(),
                });
            })
            .await?;
        }

        self.set_blinking(true);
        Ok(())
    }

    /// Puts `text` into the surface immediately, as a single atomic append.
    pub fn put_text(&mut self, text: &str) {
        self.set_blinking(false);
        self.content.push_str(text);
        self.mutations.push(Mutation::AppendText {
            text: text.to_string(),
        });
        self.set_blinking(true);
    }

    /// Deletes up to `count` characters from the end of the content,
    /// suspending for the configured per-character delay after each removal.
    /// `None` deletes until the content is empty; running out of characters
    /// is a stop condition, not an error.
    pub async fn delete_chars(&mut self, count: Option<usize>) -> Result<(), EngineError> {
        tracing::debug!("deleting up to {:?} characters", count);
        self.set_blinking(false);

        let mut remaining = count;
        loop {
            if remaining == Some(0) || self.content.is_empty() {
                break;
            }
            if let Some(n) = remaining.as_mut() {
                *n -= 1;
            }

            let ms = self.delete_ms_per_char;
            delayed(ms, Phase::BeforeDelay, || {
                self.run_hooks(HookKind::Delete);
                self.content.pop();
                self.mutations.push(Mutation::DeleteLast);
            })
            .await?;
        }

        self.set_blinking(true);
        Ok(())
    }

    /// Empties the surface immediately.
    pub fn clear_text(&mut self) {
        self.content.clear();
        self.mutations.push(Mutation::ClearText);
    }

    /// Applies the provided settings fields in order. A failing field leaves
    /// the fields before it applied; there is no rollback.
    pub fn apply_settings(&mut self, settings: Settings) -> Result<(), ConfigError> {
        if let Some(cps) = settings.type_cps {
            self.type_ms_per_char = ms_per_char(cps)?;
        }
        if let Some(cps) = settings.delete_cps {
            self.delete_ms_per_char = ms_per_char(cps)?;
        }
        if let Some(cursor) = settings.cursor {
            self.cursor.configure(cursor)?;
            self.mutations.push(Mutation::ConfigureCursor { settings: cursor });
        }
        Ok(())
    }

    /// Replaces the theme tag with the named preset. Unknown names fail and
    /// leave the current theme untouched.
    pub fn preset_theme(&mut self, name: &str) -> Result<(), ConfigError> {
        let theme = Theme::from_name(name)?;
        self.theme = theme;
        self.mutations.push(Mutation::SetTheme { theme });
        Ok(())
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn type_ms_per_char(&self) -> f64 {
        self.type_ms_per_char
    }

    pub fn delete_ms_per_char(&self) -> f64 {
        self.delete_ms_per_char
    }

    /// Takes the buffered mutations, leaving the buffer empty.
    pub fn drain_mutations(&mut self) -> Vec<Mutation> {
        std::mem::take(&mut self.mutations)
    }

    fn set_blinking(&mut self, on: bool) {
        if self.cursor.set_blinking(on) {
            self.mutations.push(Mutation::SetCursorBlinking { on });
        }
    }

    fn run_hooks(&self, kind: HookKind) {
        // The list is cloned out first so a hook only ever sees an immutable
        // engine, never an aliased borrow of the hook storage.
        let hooks = match kind {
            HookKind::Type => self.type_hooks.clone(),
            HookKind::Delete => self.delete_hooks.clone(),
        };
        for hook in &hooks {
            (&mut *hook.borrow_mut())(self);
        }
    }
}

#[derive(Clone, Copy)]
enum HookKind {
    Type,
    Delete,
}
