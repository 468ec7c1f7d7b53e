//! Light/dark display mode and its persisted string form.
//!
//! DESIGN
//! ======
//! `ThemeMode` is the only piece of page state that survives a reload. It is
//! stored as `"light"` / `"dark"`; anything else read back from storage is a
//! `ThemeError::MalformedStoredValue` and callers treat it as absent.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

/// Errors raised by theme resolution primitives.
///
/// None of these are surfaced to the page; `ThemePreference` swallows them and
/// falls back to the default mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("color scheme query is unavailable")]
    EnvironmentUnavailable,
    #[error("document root is unavailable")]
    DocumentUnavailable,
    #[error("unrecognized stored theme value: {0:?}")]
    MalformedStoredValue(String),
}

/// Binary display mode applied to the document root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Canonical storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The opposite mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Glyph shown on the toggle button: the mode a click switches to.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::MalformedStoredValue(other.to_owned())),
        }
    }
}
