//! Dark/light theme preference.

use super::storage::{KeyValueStore, PreferenceStore};

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Dark,
    #[default]
    Light,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Only an exact `"dark"` selects the dark theme.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn flipped(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Theme state plus the store it is persisted to.
#[derive(Debug, Clone)]
pub struct ThemeStore<S: KeyValueStore = PreferenceStore> {
    store: S,
    key: String,
    current: ThemePreference,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Read the saved preference once. Read failures fall back to light.
    pub fn load_on_startup(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let stored = match store.get(&key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("couldn't read theme preference: {err}");
                None
            }
        };
        let current = ThemePreference::from_stored(stored.as_deref());
        tracing::debug!(theme = current.as_str(), "theme loaded");
        Self {
            store,
            key,
            current,
        }
    }

    /// Flip the theme and persist it. Write failures are logged, not surfaced.
    pub fn toggle(&mut self) -> ThemePreference {
        self.current = self.current.flipped();
        if let Err(err) = self.store.set(&self.key, self.current.as_str()) {
            tracing::warn!("couldn't persist theme preference: {err}");
        }
        tracing::info!(theme = self.current.as_str(), "theme toggled");
        self.current
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    pub fn is_dark(&self) -> bool {
        self.current.is_dark()
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}
