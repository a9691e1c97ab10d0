//! Theme preference persistence and application.
//!
//! [`PreferenceStore`] reads and writes the raw preference through a
//! [`PreferenceBackend`]; [`ThemeController`] owns the applied theme and
//! pushes it to a [`ThemeSurface`]. Persistence is best-effort: failures are
//! logged and the in-page theme stays as applied.

use leptos::logging::warn;

use crate::config::THEME_KEY;
use crate::core::error::StorageError;
use crate::models::ThemePreference;

/// Key-value storage for small string preferences.
pub trait PreferenceBackend {
    /// Read the raw value stored under `key`.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the raw value stored under `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Where the applied theme becomes visible.
pub trait ThemeSurface {
    fn apply(&self, theme: ThemePreference);
}

/// Loads and saves the theme preference under [`THEME_KEY`].
#[derive(Clone, Debug, Default)]
pub struct PreferenceStore<B> {
    backend: B,
}

impl<B: PreferenceBackend> PreferenceStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Persisted preference, or the default when absent or unreadable.
    pub fn load(&self) -> ThemePreference {
        match self.backend.read(THEME_KEY) {
            Ok(Some(raw)) => ThemePreference::parse(&raw).unwrap_or_default(),
            Ok(None) => ThemePreference::default(),
            Err(e) => {
                warn!("theme preference not loaded: {e}");
                ThemePreference::default()
            }
        }
    }

    /// Overwrite the persisted preference. Failures are logged and dropped.
    pub fn save(&self, theme: ThemePreference) {
        if let Err(e) = self.backend.write(THEME_KEY, theme.as_str()) {
            warn!("theme preference not saved: {e}");
        }
    }
}

/// Holds the applied theme for the lifetime of the page.
#[derive(Clone, Debug)]
pub struct ThemeController<B, S> {
    store: PreferenceStore<B>,
    surface: S,
    applied: ThemePreference,
}

impl<B: PreferenceBackend, S: ThemeSurface> ThemeController<B, S> {
    /// Load the saved preference and apply it.
    pub fn init(store: PreferenceStore<B>, surface: S) -> Self {
        let applied = store.load();
        surface.apply(applied);
        Self {
            store,
            surface,
            applied,
        }
    }

    pub fn applied(&self) -> ThemePreference {
        self.applied
    }

    /// Flip the applied theme, apply it and persist it.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.applied.toggled();
        self.surface.apply(next);
        self.applied = next;
        self.store.save(next);
        next
    }
}
