use super::defaults::default_settings_path;
use super::types::SettingsSnapshot;
use crate::debug_println;
use crate::error::{PersistenceError, SettingsError};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store for the last-used readings and tariffs
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Store at `UTILCALC_SETTINGS` or `utility_settings.json`
    pub fn from_env() -> Self {
        Self::new(default_settings_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot, falling back to defaults on any failure.
    ///
    /// A missing or broken file is normal on first run and is never reported.
    pub fn load(&self) -> SettingsSnapshot {
        match self.try_load() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                debug_println!("settings: using defaults, {}", e);
                SettingsSnapshot::default()
            }
        }
    }

    /// Load the snapshot, reporting unreadable or corrupted files
    pub fn try_load(&self) -> Result<SettingsSnapshot, SettingsError> {
        if !self.path.exists() {
            debug_println!("settings: {} not found", self.path.display());
            return Ok(SettingsSnapshot::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(SettingsSnapshot::default());
        }

        let value: Value = serde_json::from_str(&content)?;
        if !value.is_object() {
            return Err(SettingsError::Corrupted(
                "expected a JSON object".to_string(),
            ));
        }

        Ok(SettingsSnapshot::from_json(&value))
    }

    /// Write the snapshot, replacing whatever the file held before
    pub fn save(&self, snapshot: &SettingsSnapshot) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, content)?;
        debug_println!("settings: saved to {}", self.path.display());

        Ok(())
    }
}
