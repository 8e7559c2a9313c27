//! Session context: who is signed in, and the tokens that prove it.
//!
//! The session is a two-state machine, [`SessionState::Unauthenticated`] and
//! [`SessionState::Authenticated`]. The only way into the authenticated state
//! on startup is a successful profile fetch with the stored access token;
//! anything else clears the stored session (fail-closed).
//!
//! ```rust,no_run
//! use jewel_link::{shared, JewelLinkClient, LoginRequest, MemoryStore, SessionContext};
//!
//! # async fn example() -> jewel_link::Result<()> {
//! let store = shared(MemoryStore::new());
//! let client = JewelLinkClient::builder()
//!     .base_url("http://localhost:8000")
//!     .token_store(store.clone())
//!     .build()?;
//!
//! let mut session = SessionContext::new(client, store);
//! session.init().await?;
//! if !session.is_authenticated() {
//!     session.login(&LoginRequest::new("maya", "secret")).await?;
//! }
//! println!("go to {}", session.dashboard_route().unwrap_or_default());
//! # Ok(())
//! # }
//! ```

use crate::api::AuthApi;
use crate::error::{JewelLinkError, Result};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, User, UserUpdate};
use crate::storage::{keys, KeyValueStore};

/// Current authentication state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated(User),
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Unauthenticated => None,
        }
    }
}

/// Holds the signed-in user and keeps durable storage in step with it.
pub struct SessionContext<A, S> {
    api: A,
    store: S,
    state: SessionState,
}

impl<A, S> SessionContext<A, S>
where
    A: AuthApi,
    S: KeyValueStore,
{
    /// Create an unauthenticated context. Nothing is read until [`init`].
    ///
    /// [`init`]: SessionContext::init
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            state: SessionState::Unauthenticated,
        }
    }

    /// Rehydrate from storage.
    ///
    /// With a stored access token the profile is fetched; success
    /// authenticates, any failure (expired token, network) clears the stored
    /// session. Only storage failures are returned as errors.
    pub async fn init(&mut self) -> Result<&SessionState> {
        let token = self.store.get_item(keys::ACCESS_TOKEN)?;
        if token.map_or(true, |t| t.is_empty()) {
            log::debug!("[SESSION] No stored access token");
            self.state = SessionState::Unauthenticated;
            return Ok(&self.state);
        }

        match self.api.get_profile().await {
            Ok(user) => {
                log::debug!("[SESSION] Restored session for '{}'", user.username);
                self.store.set_json(keys::USER, &user)?;
                self.state = SessionState::Authenticated(user);
            },
            Err(e) => {
                log::warn!("[SESSION] Stored session rejected, signing out: {}", e);
                self.state = SessionState::Unauthenticated;
                self.clear_stored_session()?;
            },
        }
        Ok(&self.state)
    }

    /// Sign in. On failure storage and state are left as they were.
    pub async fn login(&mut self, credentials: &LoginRequest) -> Result<User> {
        let response = self.api.login(credentials).await?;
        self.establish(response)
    }

    /// Create an account and sign in with the issued tokens.
    pub async fn register(&mut self, user_data: &RegisterRequest) -> Result<User> {
        let response = self.api.register(user_data).await?;
        self.establish(response)
    }

    fn establish(&mut self, response: AuthResponse) -> Result<User> {
        let AuthResponse {
            user,
            access_token,
            refresh_token,
        } = response;

        self.store.set_item(keys::ACCESS_TOKEN, &access_token)?;
        self.store.set_item(keys::REFRESH_TOKEN, &refresh_token)?;
        self.store.set_json(keys::USER, &user)?;

        log::debug!("[SESSION] Signed in as '{}' ({})", user.username, user.role);
        self.state = SessionState::Authenticated(user.clone());
        Ok(user)
    }

    /// Sign out.
    ///
    /// Server-side invalidation is best effort. In-memory state and all
    /// stored session keys are cleared whatever the server says.
    pub async fn logout(&mut self) -> Result<()> {
        match self.store.get_item(keys::REFRESH_TOKEN) {
            Ok(Some(refresh)) if !refresh.is_empty() => {
                if let Err(e) = self.api.logout(&refresh).await {
                    log::warn!("[SESSION] Server-side logout failed: {}", e);
                }
            },
            Ok(_) => log::debug!("[SESSION] No refresh token to invalidate"),
            Err(e) => log::warn!("[SESSION] Could not read refresh token: {}", e),
        }

        self.state = SessionState::Unauthenticated;
        self.clear_stored_session()
    }

    /// Send a partial profile update and adopt the server's representation.
    pub async fn update_profile(&mut self, update: &UserUpdate) -> Result<User> {
        if !self.is_authenticated() {
            return Err(JewelLinkError::NotAuthenticated);
        }

        let user = self.api.update_profile(update).await?;
        self.store.set_json(keys::USER, &user)?;
        self.state = SessionState::Authenticated(user.clone());
        Ok(user)
    }

    /// Drop in-memory state; storage is left for the next `init`.
    pub fn dispose(&mut self) {
        self.state = SessionState::Unauthenticated;
    }

    fn clear_stored_session(&mut self) -> Result<()> {
        self.store.remove_items(&keys::SESSION_KEYS)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user()
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// Landing page for the signed-in user, `None` when signed out.
    pub fn dashboard_route(&self) -> Option<String> {
        self.user().map(User::dashboard_route)
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
