//! # jewel-link: jewelry CRM client library
//!
//! Client-side state for the multi-role jewelry CRM: the REST API client and
//! the three state containers every screen relies on.
//!
//! ## Features
//!
//! - **API client**: typed auth, onboarding and branding calls plus opaque
//!   CRUD groups for the backend's business resources
//! - **Session**: login/register/logout with durable tokens and fail-closed
//!   rehydration
//! - **Branding**: tenant id → white-label descriptor, default fallback
//! - **Onboarding**: linear wizard with a versioned, persisted draft
//! - **Storage**: local-storage style key/value backends (memory, TOML file)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jewel_link::{
//!     shared, BrandingContext, JewelLinkClient, LoginRequest, MemoryStore, OnboardingWizard,
//!     SessionContext,
//! };
//!
//! #[tokio::main]
//! async fn main() -> jewel_link::Result<()> {
//!     let store = shared(MemoryStore::new());
//!     let client = JewelLinkClient::builder()
//!         .base_url("http://localhost:8000")
//!         .token_store(store.clone())
//!         .build()?;
//!
//!     let mut branding = BrandingContext::new(client.clone(), store.clone())
//!         .with_location("https://crm.example.com/login?tenant=aurora-gems");
//!     println!("Welcome to {}", branding.init().await.name);
//!
//!     let mut session = SessionContext::new(client.clone(), store.clone());
//!     session.init().await?;
//!     session.login(&LoginRequest::new("maya", "secret")).await?;
//!
//!     let mut wizard = OnboardingWizard::new(store.clone());
//!     wizard.init()?;
//!     wizard.enter_step()?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod branding;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod onboarding;
pub mod routes;
pub mod session;
pub mod storage;
pub mod timeouts;

// Re-export main types for convenience
pub use api::{AuthApi, BrandingSource, OnboardingApi, Resource, StaticBrandingSource};
pub use auth::{AuthProvider, DynamicAuthProvider, StoredTokenAuth};
pub use branding::BrandingContext;
pub use client::{JewelLinkClient, JewelLinkClientBuilder};
pub use config::ClientConfiguration;
pub use error::{JewelLinkError, Result};
pub use models::{
    AuthResponse, BrandingDescriptor, BrandingUpdate, LoginRequest, OnboardingData,
    OnboardingPatch, Page, RegisterRequest, User, UserUpdate,
};
pub use onboarding::{CompletionOutcome, OnboardingStep, OnboardingWizard};
pub use routes::{dashboard_route_for, PrimaryRole, FALLBACK_DASHBOARD};
pub use session::{SessionContext, SessionState};
pub use storage::{shared, FileStore, KeyValueStore, MemoryStore, SharedStore};
pub use timeouts::ClientTimeouts;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
