//! Key-value preference storage.
//!
//! The file store keeps string keys in a small TOML table, read once when
//! opened and rewritten in full on every `set`.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Result};

/// Persistent string key-value store.
pub trait PreferenceStore {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    ///
    /// # Errors
    /// Returns error if the value cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preference store backed by a TOML file.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Opens the store, loading existing values. A missing file is an empty store.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn open(path: &Path) -> Result<Self> {
        let values = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                AppError::io(format!("Failed to read preferences: {}", path.display()), e)
            })?;
            toml::from_str(&content).map_err(|e| {
                AppError::preference(format!("Failed to parse {}: {e}", path.display()))
            })?
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %path.display(), keys = values.len(), "Preferences loaded");

        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::io("Failed to create preferences directory", e))?;
        }

        let content = toml::to_string(&self.values)
            .map_err(|e| AppError::preference(format!("Failed to serialize preferences: {e}")))?;

        fs::write(&self.path, content).map_err(|e| {
            AppError::io(
                format!("Failed to write preferences: {}", self.path.display()),
                e,
            )
        })
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.write()?;
        tracing::debug!(key, value, path = %self.path.display(), "Preference saved");
        Ok(())
    }
}

/// Preference store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
