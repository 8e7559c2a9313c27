//! Data models for jewel-link.
//!
//! Request and response payloads for the endpoints the client speaks to, plus
//! the client-side entities (branding descriptor, onboarding data) that are
//! persisted locally.

pub mod api_error;
pub mod auth_payloads;
pub mod branding;
pub mod onboarding_data;
pub mod page;
pub mod user;


pub use api_error::ApiErrorBody;
pub use auth_payloads::{AuthResponse, LoginRequest, LogoutRequest, RegisterRequest};
pub use branding::{BrandingDescriptor, BrandingUpdate, Theme};
pub use onboarding_data::{
    FeatureToggles, OnboardingData, OnboardingPatch, StoreAssignment, StoreDetails, TeamInvitation,
};
pub use page::Page;
pub use user::{User, UserUpdate};
