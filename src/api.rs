//! Typed API surface consumed by the contexts.
//!
//! The contexts depend on these traits rather than on [`JewelLinkClient`]
//! directly, so they can be driven by any implementation: the HTTP client,
//! a preset table, or an in-process fake.
//!
//! [`JewelLinkClient`]: crate::JewelLinkClient

mod auth_api;
mod onboarding_api;
mod resources;
mod tenants_api;

pub use resources::{Resource, ResourceClient};
pub use tenants_api::StaticBrandingSource;

use crate::error::Result;
use crate::models::{
    AuthResponse, BrandingDescriptor, LoginRequest, OnboardingData, RegisterRequest, User,
    UserUpdate,
};

/// Authentication endpoints.
#[async_trait::async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse>;

    async fn register(&self, user_data: &RegisterRequest) -> Result<AuthResponse>;

    /// Invalidate the refresh token server-side.
    async fn logout(&self, refresh_token: &str) -> Result<()>;

    /// Profile of the user owning the current access token.
    async fn get_profile(&self) -> Result<User>;

    async fn update_profile(&self, update: &UserUpdate) -> Result<User>;
}

/// Onboarding submission endpoint.
#[async_trait::async_trait]
pub trait OnboardingApi: Send + Sync {
    /// Submit the complete wizard data. Returns the server's acknowledgement.
    async fn complete_onboarding(&self, data: &OnboardingData) -> Result<serde_json::Value>;
}

/// Where tenant branding comes from.
#[async_trait::async_trait]
pub trait BrandingSource: Send + Sync {
    /// Branding for a tenant; `Ok(None)` when the tenant is unknown.
    async fn fetch_branding(&self, tenant_id: &str) -> Result<Option<BrandingDescriptor>>;
}
