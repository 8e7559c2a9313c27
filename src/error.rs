//! Error types for jewel-link.
//!
//! All fallible operations in the crate return [`Result<T>`]. Failures are
//! terminal for the action that produced them: nothing in the crate retries.

use std::collections::BTreeMap;
use thiserror::Error;

/// Result type for jewel-link operations
pub type Result<T> = std::result::Result<T, JewelLinkError>;

/// Errors that can occur while talking to the CRM backend or managing
/// client-side state.
#[derive(Debug, Clone, Error)]
pub enum JewelLinkError {
    /// Transport failure (connection refused, DNS, TLS, timeout)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Credentials rejected or session no longer valid (401/403)
    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    /// Invalid client or file configuration
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request or response body could not be (de)serialized
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Durable client storage could not be read or written
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Server answered with a non-2xx status
    #[error("Server error ({status_code}): {message}")]
    ServerError { status_code: u16, message: String },

    /// Server rejected the payload with per-field messages (HTTP 400)
    #[error("Validation failed: {message}")]
    ValidationError {
        message: String,
        fields: BTreeMap<String, Vec<String>>,
    },

    /// Operation requires an authenticated session
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Onboarding step index outside the step sequence
    #[error("Invalid onboarding step {index} (wizard has {len} steps)")]
    InvalidStep { index: usize, len: usize },
}

impl JewelLinkError {
    /// `true` when the error means the stored session can no longer be used.
    pub fn is_auth_failure(&self) -> bool {
        match self {
            Self::AuthenticationError(_) | Self::NotAuthenticated => true,
            Self::ServerError { status_code, .. } => matches!(status_code, 401 | 403),
            _ => false,
        }
    }

    /// Field-level messages carried by a validation error, if any.
    pub fn field_errors(&self) -> Option<&BTreeMap<String, Vec<String>>> {
        match self {
            Self::ValidationError { fields, .. } => Some(fields),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for JewelLinkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            JewelLinkError::SerializationError(err.to_string())
        } else if err.is_builder() {
            JewelLinkError::ConfigurationError(err.to_string())
        } else {
            JewelLinkError::NetworkError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for JewelLinkError {
    fn from(err: serde_json::Error) -> Self {
        JewelLinkError::SerializationError(err.to_string())
    }
}

impl From<toml::de::Error> for JewelLinkError {
    fn from(err: toml::de::Error) -> Self {
        JewelLinkError::ConfigurationError(format!("TOML parse error: {}", err))
    }
}

impl From<std::io::Error> for JewelLinkError {
    fn from(err: std::io::Error) -> Self {
        JewelLinkError::StorageError(err.to_string())
    }
}
