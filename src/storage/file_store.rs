//! File-based durable storage
//!
//! Persists the key/value store to a TOML file with owner-only permissions
//! (0600 on Unix), rewriting the whole file on every write.
//!
//! # File Location
//!
//! - Windows: `~/.jewel/storage.toml`
//! - Linux/macOS: `~/.config/jewel/storage.toml`
//!
//! # File Format
//!
//! ```toml
//! [entries]
//! access_token = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
//! tenantId = "aurora-gems"
//! onboarding_step = "3"
//! ```

use super::KeyValueStore;
use crate::error::{JewelLinkError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct FileStore {
    file_path: PathBuf,

    /// In-memory copy of the file contents
    cache: BTreeMap<String, String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StorageFile {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Default storage file path
    pub fn default_path() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".jewel").join("storage.toml")
            } else {
                PathBuf::from(".jewel").join("storage.toml")
            }
        }

        #[cfg(not(target_os = "windows"))]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("jewel").join("storage.toml")
            } else if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("jewel").join("storage.toml")
            } else {
                PathBuf::from(".jewel").join("storage.toml")
            }
        }
    }

    /// Open the store at the default location
    pub fn new() -> Result<Self> {
        Self::with_path(Self::default_path())
    }

    /// Open the store at a custom location. A missing file is an empty store.
    pub fn with_path(file_path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self {
            file_path: file_path.into(),
            cache: BTreeMap::new(),
        };
        store.load_from_disk()?;
        Ok(store)
    }

    fn load_from_disk(&mut self) -> Result<()> {
        if !self.file_path.exists() {
            self.cache.clear();
            return Ok(());
        }

        let contents = fs::read_to_string(&self.file_path).map_err(|e| {
            JewelLinkError::StorageError(format!(
                "Cannot read storage file '{}': {}",
                self.file_path.display(),
                e
            ))
        })?;

        let file: StorageFile = toml::from_str(&contents).map_err(|e| {
            JewelLinkError::StorageError(format!(
                "Corrupted storage file '{}': {}. Delete it to start over.",
                self.file_path.display(),
                e.message()
            ))
        })?;

        self.cache = file.entries;
        log::debug!(
            "[STORE] Loaded {} entries from {}",
            self.cache.len(),
            self.file_path.display()
        );
        Ok(())
    }

    fn save_to_disk(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let file = StorageFile {
            entries: entries.clone(),
        };

        let contents = toml::to_string_pretty(&file).map_err(|e| {
            JewelLinkError::StorageError(format!("Failed to serialize storage: {}", e))
        })?;

        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                JewelLinkError::StorageError(format!(
                    "Failed to create storage directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        fs::write(&self.file_path, contents).map_err(|e| {
            JewelLinkError::StorageError(format!(
                "Failed to write storage file '{}': {}",
                self.file_path.display(),
                e
            ))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&self.file_path, permissions).map_err(|e| {
                JewelLinkError::StorageError(format!(
                    "Failed to set file permissions for '{}': {}",
                    self.file_path.display(),
                    e
                ))
            })?;
        }

        Ok(())
    }

    /// Get the file path used by this store
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.cache.get(key).cloned())
    }

    // The cache only changes once the file write has succeeded.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.cache.clone();
        entries.insert(key.to_string(), value.to_string());
        self.save_to_disk(&entries)?;
        self.cache = entries;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        if !self.cache.contains_key(key) {
            return Ok(());
        }
        let mut entries = self.cache.clone();
        entries.remove(key);
        self.save_to_disk(&entries)?;
        self.cache = entries;
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.cache.keys().cloned().collect())
    }
}
