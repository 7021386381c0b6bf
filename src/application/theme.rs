//! Theme preference handling.
//!
//! The preference is read once when the manager is created and written
//! through to the store on every change.

use crate::domain::{Result, ThemePreference};
use crate::infrastructure::PreferenceStore;

/// Preference store key holding `"light"` or `"dark"`.
pub const THEME_KEY: &str = "theme";

pub struct ThemeManager<P> {
    store: P,
    current: ThemePreference,
}

impl<P: PreferenceStore> ThemeManager<P> {
    /// Read the stored preference.
    pub fn load(store: P) -> Self {
        let stored = store.get(THEME_KEY);
        let current = ThemePreference::from_stored(stored.as_deref());
        tracing::debug!(stored = ?stored, theme = %current, "Theme preference loaded");
        Self { store, current }
    }

    #[must_use]
    pub const fn current(&self) -> ThemePreference {
        self.current
    }

    /// Flip the theme and persist it.
    ///
    /// # Errors
    /// Returns error if the store write fails. The in-memory theme has
    /// already flipped by then.
    pub fn toggle(&mut self) -> Result<ThemePreference> {
        self.set(self.current.toggled())?;
        Ok(self.current)
    }

    /// Set the theme and persist it.
    ///
    /// # Errors
    /// Returns error if the store write fails.
    pub fn set(&mut self, theme: ThemePreference) -> Result<()> {
        self.current = theme;
        self.store.set(THEME_KEY, theme.as_str())?;
        tracing::info!(theme = %theme, "Theme preference saved");
        Ok(())
    }

    #[cfg(test)]
    pub const fn store(&self) -> &P {
        &self.store
    }
}
