//! Client configuration file
//!
//! # Configuration Format
//!
//! ```toml
//! [server]
//! url = "https://crm.example.com"   # Backend base URL (without /api)
//! timeout = 30                       # Request timeout in seconds
//! connect_timeout = 10               # Connection timeout in seconds
//!
//! [storage]
//! path = "~/.config/jewel/storage.toml"
//!
//! [branding]
//! default_tenant = "aurora-gems"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::BrandingSource;
use crate::branding::BrandingContext;
use crate::client::{JewelLinkClient, JewelLinkClientBuilder};
use crate::error::{JewelLinkError, Result};
use crate::storage::{FileStore, KeyValueStore};
use crate::timeouts::ClientTimeouts;

/// Client configuration loaded from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfiguration {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub branding: BrandingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Backend base URL (e.g. http://localhost:8000)
    #[serde(default = "default_url")]
    pub url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage file; platform default when unset
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandingConfig {
    /// Tenant used when neither storage nor the URL names one
    pub default_tenant: Option<String>,
}

fn default_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

/// Expand a leading `~/` to the home directory. Other paths, including
/// non-UTF-8 ones, are returned as given.
pub fn expand_config_path(path: &Path) -> PathBuf {
    let Some(path_str) = path.to_str() else {
        return path.to_path_buf();
    };
    if let Some(rest) = path_str.strip_prefix("~/") {
        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(rest);
        }
    }
    path.to_path_buf()
}

pub fn default_config_path() -> PathBuf {
    expand_config_path(Path::new("~/.jewel/config.toml"))
}

impl ClientConfiguration {
    /// Load configuration from file
    ///
    /// Returns default configuration if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        let path = expand_config_path(path);
        if !path.exists() {
            log::debug!("[CONFIG] {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| {
            JewelLinkError::ConfigurationError(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let path = expand_config_path(path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| JewelLinkError::ConfigurationError(format!("Failed to serialize: {}", e)))?;
        std::fs::write(&path, contents)?;
        Ok(())
    }

    pub fn timeouts(&self) -> ClientTimeouts {
        ClientTimeouts::default()
            .with_request_timeout(Duration::from_secs(self.server.timeout))
            .with_connection_timeout(Duration::from_secs(self.server.connect_timeout))
    }

    /// Client builder preconfigured with the server settings.
    pub fn to_client_builder(&self) -> JewelLinkClientBuilder {
        JewelLinkClient::builder()
            .base_url(self.server.url.clone())
            .timeouts(self.timeouts())
    }

    pub fn storage_path(&self) -> PathBuf {
        match &self.storage.path {
            Some(path) => expand_config_path(path),
            None => FileStore::default_path(),
        }
    }

    /// Open the configured storage file.
    pub fn open_store(&self) -> Result<FileStore> {
        FileStore::with_path(self.storage_path())
    }

    /// Branding context with the configured default tenant as last resort.
    ///
    /// The default is never written to storage, so a `tenant` URL parameter
    /// still wins over it.
    pub fn branding_context<B, S>(&self, source: B, store: S) -> BrandingContext<B, S>
    where
        B: BrandingSource,
        S: KeyValueStore,
    {
        let context = BrandingContext::new(source, store);
        match &self.branding.default_tenant {
            Some(tenant) => context.with_default_tenant(tenant.clone()),
            None => context,
        }
    }
}
