//! Theme preference persistence
//!
//! The one piece of persisted state: a light/dark theme flag stored in a
//! small TOML file. A missing file yields defaults; a malformed file is an
//! error rather than a silent reset.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::PrefsResult;

/// Display theme for the reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Persisted reader preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
}

impl Preferences {
    /// Loads preferences from the given path
    ///
    /// A missing file is not an error: it yields the defaults, the same way a
    /// first launch would.
    pub fn load(path: &Path) -> PrefsResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let prefs = toml::from_str(&content)?;
        Ok(prefs)
    }

    /// Saves preferences to the given path
    pub fn save(&self, path: &Path) -> PrefsResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Flips the theme and returns the new value
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}
