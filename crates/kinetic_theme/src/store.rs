//! Preference persistence
//!
//! A single named slot: the `theme` key holds `"light"` or `"dark"`, and an
//! absent value means "follow the system". Storage failures are reported to
//! the manager, which logs and degrades to the default rather than failing
//! the behavior.

use crate::scheme::ColorScheme;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;

/// Storage failure; recoverable by treating the preference as absent
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("preference io: {0}")]
    Io(#[from] io::Error),
    #[error("preference parse: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("preference encode: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Durable slot for the explicit theme override
pub trait PreferenceStore: Send {
    /// `Ok(None)` means no override stored (follow the system)
    fn load(&self) -> Result<Option<ColorScheme>, StoreError>;
    fn save(&mut self, scheme: ColorScheme) -> Result<(), StoreError>;
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// On-disk TOML document with a single `theme` key
#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferenceFile {
    theme: Option<ColorScheme>,
}

/// File-backed store, the production implementation
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Result<Option<ColorScheme>, StoreError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let file: PreferenceFile = toml::from_str(&text)?;
        Ok(file.theme)
    }

    fn save(&mut self, scheme: ColorScheme) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let text = toml::to_string(&PreferenceFile {
            theme: Some(scheme),
        })?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory store for tests and embedded hosts
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Option<ColorScheme>,
}

impl MemoryStore {
    pub fn with_value(scheme: ColorScheme) -> Self {
        Self {
            value: Some(scheme),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<ColorScheme>, StoreError> {
        Ok(self.value)
    }

    fn save(&mut self, scheme: ColorScheme) -> Result<(), StoreError> {
        self.value = Some(scheme);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.value = None;
        Ok(())
    }
}

/// No storage available: loads nothing, persists nothing
///
/// The degraded-environment store; the manager still works, preferences
/// just do not survive the session.
#[derive(Debug, Default)]
pub struct NullStore;

impl PreferenceStore for NullStore {
    fn load(&self) -> Result<Option<ColorScheme>, StoreError> {
        Ok(None)
    }

    fn save(&mut self, _scheme: ColorScheme) -> Result<(), StoreError> {
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        Ok(())
    }
}
