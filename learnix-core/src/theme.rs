//! Light/dark theme preference and its persistence seam.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// Two-valued visual mode written to `<html data-theme>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Map a `(prefers-color-scheme: dark)` match onto a theme.
    #[must_use]
    pub const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(SiteError::UnknownTheme(other.to_string())),
        }
    }
}

/// Key/value persistence used for the theme preference.
///
/// The browser build backs this with `localStorage`; tests use [`MemoryStore`].
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// In-memory [`PreferenceStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Owns the active theme and the store it is persisted to.
#[derive(Debug, Clone)]
pub struct ThemeController<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Resolve the startup theme: stored value, then the system preference
    /// when one is known, then `fallback`.
    ///
    /// Nothing is written at startup, so a visitor who never toggles keeps
    /// following the system preference.
    pub fn new(store: S, key: impl Into<String>, system: Option<Theme>, fallback: Theme) -> Self {
        let key = key.into();
        let current = Self::read_stored(&store, &key)
            .or(system)
            .unwrap_or(fallback);
        Self {
            store,
            key,
            current,
        }
    }

    fn read_stored(store: &S, key: &str) -> Option<Theme> {
        let raw = store.load(key)?;
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(err) => {
                log::warn!("ignoring stored theme preference: {err}");
                None
            }
        }
    }

    #[must_use]
    pub const fn current(&self) -> Theme {
        self.current
    }

    /// The persisted preference, if the visitor ever chose one.
    #[must_use]
    pub fn stored(&self) -> Option<Theme> {
        Self::read_stored(&self.store, &self.key)
    }

    /// Set and persist an explicit choice.
    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.store.save(&self.key, theme.as_str());
    }

    /// Flip between light and dark, persisting the result.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set(next);
        log::debug!("theme toggled to {next}");
        next
    }

    /// Follow a system colour-scheme change unless the visitor chose a theme.
    ///
    /// Returns the new theme when it changed.
    pub fn apply_system_change(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.stored().is_some() {
            return None;
        }
        let next = Theme::from_prefers_dark(prefers_dark);
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(next)
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}
