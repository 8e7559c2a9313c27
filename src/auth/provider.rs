//! Authentication providers for the CRM API client.
//!
//! ## Dynamic Auth Provider
//!
//! Use [`DynamicAuthProvider`] to supply credentials lazily, called before
//! every request. The session context relies on this to pick up the token it
//! just stored.
//!
//! ```rust,no_run
//! use jewel_link::{AuthProvider, DynamicAuthProvider};
//!
//! struct MyTokenSource;
//!
//! #[async_trait::async_trait]
//! impl DynamicAuthProvider for MyTokenSource {
//!     async fn get_auth(&self) -> jewel_link::Result<AuthProvider> {
//!         Ok(AuthProvider::bearer_token("fresh-token".into()))
//!     }
//! }
//! ```

use crate::error::Result;
use std::sync::Arc;

/// Credentials attached to a single request.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthProvider {
    /// `Authorization: Bearer <access token>`
    BearerToken(String),

    /// Anonymous request (login, register, public branding)
    None,
}

impl AuthProvider {
    pub fn bearer_token(token: String) -> Self {
        Self::BearerToken(token)
    }

    pub fn none() -> Self {
        Self::None
    }

    /// Attach authentication headers to an HTTP request builder
    pub fn apply_to_request(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Self::BearerToken(token) => request.bearer_auth(token),
            Self::None => request,
        }
    }

    /// Check if authentication is configured
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::None)
    }
}

// Tokens never reach logs through Debug.
impl std::fmt::Debug for AuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BearerToken(_) => write!(f, "AuthProvider::BearerToken(<redacted>)"),
            Self::None => write!(f, "AuthProvider::None"),
        }
    }
}

// ── Dynamic (async) auth provider ────────────────────────────────────────────

/// Async authentication provider called before every request.
#[async_trait::async_trait]
pub trait DynamicAuthProvider: Send + Sync + 'static {
    /// Return the credentials to use for the next request.
    async fn get_auth(&self) -> Result<AuthProvider>;
}

/// A boxed, reference-counted [`DynamicAuthProvider`].
pub type ArcDynAuthProvider = Arc<dyn DynamicAuthProvider>;

/// Resolves the effective [`AuthProvider`] for a request.
///
/// Holds either a static provider or a dynamic one. Call [`resolve`] before
/// each request.
///
/// [`resolve`]: ResolvedAuth::resolve
#[derive(Clone)]
pub enum ResolvedAuth {
    /// Static credentials set at construction time.
    Static(AuthProvider),
    /// Dynamic provider called on every request.
    Dynamic(ArcDynAuthProvider),
}

impl ResolvedAuth {
    /// Obtain effective credentials, calling the dynamic provider if present.
    pub async fn resolve(&self) -> Result<AuthProvider> {
        match self {
            Self::Static(p) => Ok(p.clone()),
            Self::Dynamic(provider) => provider.get_auth().await,
        }
    }

    /// `true` when no credentials of either kind are configured.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::Static(AuthProvider::None))
    }
}

impl std::fmt::Debug for ResolvedAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static(p) => write!(f, "ResolvedAuth::Static({:?})", p),
            Self::Dynamic(_) => write!(f, "ResolvedAuth::Dynamic(<fn>)"),
        }
    }
}

impl Default for ResolvedAuth {
    fn default() -> Self {
        Self::Static(AuthProvider::None)
    }
}

impl From<AuthProvider> for ResolvedAuth {
    fn from(p: AuthProvider) -> Self {
        Self::Static(p)
    }
}

impl From<ArcDynAuthProvider> for ResolvedAuth {
    fn from(p: ArcDynAuthProvider) -> Self {
        Self::Dynamic(p)
    }
}
