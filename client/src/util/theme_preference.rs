//! Theme preference resolution, application and toggle.
//!
//! Reads the user's choice from `localStorage`, falls back to the
//! `prefers-color-scheme` media query, and mirrors the result onto the `dark`
//! class of the `<html>` element. Every change (including the initially
//! resolved mode) is written back so storage and DOM agree before any click.
//!
//! TRADE-OFFS
//! ==========
//! Every browser primitive sits behind `ThemeHost` and may fail on its own.
//! A failed read resolves to the next source in line (stored value, then
//! color scheme, then light); a failed write or marker update is logged and
//! the in-memory mode still changes. `DetachedThemeHost` fails every
//! primitive, so a server render always resolves to light.

#[cfg(test)]
#[path = "theme_preference_test.rs"]
mod theme_preference_test;

use crate::state::theme::{ThemeError, ThemeMode};

/// `localStorage` key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "portfolio-theme";
/// Class present on `<html>` exactly when dark mode is applied.
pub const DARK_CLASS: &str = "dark";
#[cfg(feature = "hydrate")]
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Environment primitives the preference logic needs.
pub trait ThemeHost {
    /// Raw stored value, `None` when nothing has been stored yet.
    fn read_stored(&self) -> Result<Option<String>, ThemeError>;
    fn write_stored(&self, value: &str) -> Result<(), ThemeError>;
    /// Whether the operating environment prefers a dark color scheme.
    fn prefers_dark(&self) -> Result<bool, ThemeError>;
    /// Add or remove the document-level dark marker.
    fn set_dark_marker(&self, enabled: bool) -> Result<(), ThemeError>;
}

impl<T: ThemeHost + ?Sized> ThemeHost for &T {
    fn read_stored(&self) -> Result<Option<String>, ThemeError> {
        (**self).read_stored()
    }

    fn write_stored(&self, value: &str) -> Result<(), ThemeError> {
        (**self).write_stored(value)
    }

    fn prefers_dark(&self) -> Result<bool, ThemeError> {
        (**self).prefers_dark()
    }

    fn set_dark_marker(&self, enabled: bool) -> Result<(), ThemeError> {
        (**self).set_dark_marker(enabled)
    }
}

/// Host for non-browser contexts: nothing is available.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedThemeHost;

impl ThemeHost for DetachedThemeHost {
    fn read_stored(&self) -> Result<Option<String>, ThemeError> {
        Err(ThemeError::StorageUnavailable)
    }

    fn write_stored(&self, _value: &str) -> Result<(), ThemeError> {
        Err(ThemeError::StorageUnavailable)
    }

    fn prefers_dark(&self) -> Result<bool, ThemeError> {
        Err(ThemeError::EnvironmentUnavailable)
    }

    fn set_dark_marker(&self, _enabled: bool) -> Result<(), ThemeError> {
        Err(ThemeError::DocumentUnavailable)
    }
}

/// `web-sys` backed host for the hydrated page.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserThemeHost;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, ThemeError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(ThemeError::StorageUnavailable)
}

#[cfg(feature = "hydrate")]
impl ThemeHost for BrowserThemeHost {
    fn read_stored(&self) -> Result<Option<String>, ThemeError> {
        local_storage()?
            .get_item(STORAGE_KEY)
            .map_err(|_| ThemeError::StorageUnavailable)
    }

    fn write_stored(&self, value: &str) -> Result<(), ThemeError> {
        local_storage()?
            .set_item(STORAGE_KEY, value)
            .map_err(|_| ThemeError::StorageUnavailable)
    }

    fn prefers_dark(&self) -> Result<bool, ThemeError> {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
            .map(|mq| mq.matches())
            .ok_or(ThemeError::EnvironmentUnavailable)
    }

    fn set_dark_marker(&self, enabled: bool) -> Result<(), ThemeError> {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
            .ok_or(ThemeError::DocumentUnavailable)?;
        root.class_list()
            .toggle_with_force(DARK_CLASS, enabled)
            .map(|_| ())
            .map_err(|_| ThemeError::DocumentUnavailable)
    }
}

/// Host used by components for the current build target.
#[cfg(feature = "hydrate")]
pub type PlatformThemeHost = BrowserThemeHost;
/// Host used by components for the current build target.
#[cfg(not(feature = "hydrate"))]
pub type PlatformThemeHost = DetachedThemeHost;

/// Resolves, applies and toggles the persisted display mode.
#[derive(Debug)]
pub struct ThemePreference<H> {
    host: H,
    current: ThemeMode,
}

impl<H: ThemeHost> ThemePreference<H> {
    /// Wrap `host` without touching it. The current mode starts as light.
    pub fn new(host: H) -> Self {
        Self::with_mode(host, ThemeMode::default())
    }

    /// Wrap `host` with a mode already known to be applied.
    pub fn with_mode(host: H, current: ThemeMode) -> Self {
        Self { host, current }
    }

    /// Startup sequence: resolve the initial mode and apply it.
    pub fn load(host: H) -> Self {
        let mut preference = Self::new(host);
        let initial = preference.resolve_initial();
        preference.apply(initial);
        preference
    }

    pub fn current(&self) -> ThemeMode {
        self.current
    }

    /// Stored choice, else environment preference, else light. No side effects.
    pub fn resolve_initial(&self) -> ThemeMode {
        if let Some(stored) = self.stored_mode() {
            return stored;
        }
        match self.host.prefers_dark() {
            Ok(prefers_dark) => ThemeMode::from_prefers_dark(prefers_dark),
            Err(e) => {
                log::debug!("theme: {e}; defaulting to light");
                ThemeMode::Light
            }
        }
    }

    fn stored_mode(&self) -> Option<ThemeMode> {
        let raw = match self.host.read_stored() {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::debug!("theme: {e}; ignoring stored preference");
                return None;
            }
        };
        match raw.parse::<ThemeMode>() {
            Ok(mode) => Some(mode),
            Err(e) => {
                log::warn!("theme: {e}; treating as unset");
                None
            }
        }
    }

    /// Mirror `mode` onto the document root and persist it.
    pub fn apply(&mut self, mode: ThemeMode) {
        self.current = mode;
        if let Err(e) = self.host.set_dark_marker(mode.is_dark()) {
            log::debug!("theme: {e}; dark marker not updated");
        }
        if let Err(e) = self.host.write_stored(mode.as_str()) {
            log::debug!("theme: {e}; preference not persisted");
        }
    }

    /// Flip the current mode, apply it, and return the new mode.
    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.current.toggled();
        self.apply(next);
        next
    }
}
