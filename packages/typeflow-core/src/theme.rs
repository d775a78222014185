use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Preset themes for the text surface. The registry is closed: renderers map
/// each variant to their own styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Dark,
}

impl Theme {
    /// Resolves a theme by its canonical name. Unknown names are a
    /// configuration error; the lookup has no side effects.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "default" => Ok(Theme::Default),
            "dark" => Ok(Theme::Dark),
            _ => Err(ConfigError::UnknownTheme(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Dark => "dark",
        }
    }
}
