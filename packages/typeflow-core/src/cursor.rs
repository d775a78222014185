use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlinkMode {
    None,
    Flash,
    Linear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorStyle {
    Vert,
    I,
    Y,
    Underscore,
    Block,
    LeftArrow,
    None,
}

/// Cursor options. Every field is optional so the same struct serves both
/// construction and later settings updates; absent fields are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CursorSettings {
    pub style: Option<CursorStyle>,
    pub blink_period: Option<f64>,
    pub blink_mode: Option<BlinkMode>,
}

/// The cursor indicator tracking the end of the text. Purely cosmetic state;
/// the engine suppresses blinking while an operation is mutating the text.
#[derive(Debug, Clone, PartialEq)]
pub struct Cursor {
    blinking: bool,
    style: CursorStyle,
    blink_period: f64,
    blink_mode: BlinkMode,
}

impl Cursor {
    pub(crate) fn new(settings: CursorSettings) -> Result<Self, ConfigError> {
        let mut cursor = Self {
            blinking: true,
            style: defaults::DEFAULT_CURSOR_STYLE,
            blink_period: defaults::DEFAULT_BLINK_PERIOD_MS,
            blink_mode: defaults::DEFAULT_BLINK_MODE,
        };
        cursor.configure(settings)?;
        Ok(cursor)
    }

    /// Applies the provided fields in order. A failing field leaves the
    /// fields before it applied; there is no rollback.
    pub fn configure(&mut self, settings: CursorSettings) -> Result<(), ConfigError> {
        if let Some(style) = settings.style {
            self.style = style;
        }
        if let Some(period) = settings.blink_period {
            if !period.is_finite() || period < 0.0 {
                return Err(ConfigError::InvalidBlinkPeriod(period));
            }
            self.blink_period = period;
        }
        if let Some(mode) = settings.blink_mode {
            self.blink_mode = mode;
        }
        Ok(())
    }

    /// Switches blinking on or off. Returns whether the state changed.
    pub(crate) fn set_blinking(&mut self, on: bool) -> bool {
        if self.blinking == on {
            return false;
        }
        self.blinking = on;
        true
    }

    pub fn blinking(&self) -> bool {
        self.blinking
    }

    pub fn style(&self) -> CursorStyle {
        self.style
    }

    pub fn blink_period(&self) -> f64 {
        self.blink_period
    }

    pub fn blink_mode(&self) -> BlinkMode {
        self.blink_mode
    }
}
