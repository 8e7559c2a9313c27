use reqwest::Method;
use std::collections::HashMap;

use super::BrandingSource;
use crate::client::{JewelLinkClient, RequestAuth};
use crate::error::{JewelLinkError, Result};
use crate::models::{BrandingDescriptor, Theme};

fn is_valid_tenant_id(tenant_id: &str) -> bool {
    !tenant_id.is_empty()
        && tenant_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[async_trait::async_trait]
impl BrandingSource for JewelLinkClient {
    async fn fetch_branding(&self, tenant_id: &str) -> Result<Option<BrandingDescriptor>> {
        if !is_valid_tenant_id(tenant_id) {
            log::warn!("[BRANDING] Ignoring malformed tenant id '{}'", tenant_id);
            return Ok(None);
        }

        let path = format!("tenants/{}/branding/", tenant_id);
        match self
            .send_json(Method::GET, &path, None::<&()>, RequestAuth::Anonymous)
            .await
        {
            Ok(descriptor) => Ok(Some(descriptor)),
            Err(JewelLinkError::ServerError {
                status_code: 404, ..
            }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// In-memory branding table.
///
/// Serves tenants known ahead of time without a network round trip.
#[derive(Debug, Clone, Default)]
pub struct StaticBrandingSource {
    tenants: HashMap<String, BrandingDescriptor>,
}

impl StaticBrandingSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor; its `tenant_id` is set to `tenant_id`.
    pub fn with_tenant(mut self, tenant_id: impl Into<String>, mut brand: BrandingDescriptor) -> Self {
        let tenant_id = tenant_id.into();
        brand.tenant_id = Some(tenant_id.clone());
        self.tenants.insert(tenant_id, brand);
        self
    }

    /// Demo tenants shipped with the front-end.
    pub fn presets() -> Self {
        Self::new()
            .with_tenant(
                "aurora-gems",
                BrandingDescriptor {
                    id: "aurora-gems".to_string(),
                    name: "Aurora Gems".to_string(),
                    tagline: "Light that lasts generations".to_string(),
                    logo: "/tenants/aurora-gems/logo.svg".to_string(),
                    favicon: "/tenants/aurora-gems/favicon.ico".to_string(),
                    theme: Theme {
                        background: "#0E1A2B".to_string(),
                        text: "#F5F1E8".to_string(),
                        accent: "#E0B04C".to_string(),
                        primary: "#1D3B63".to_string(),
                        secondary: "#2E5A8C".to_string(),
                    },
                    is_custom: true,
                    tenant_id: None,
                    seasonal_enabled: true,
                    custom_splash: Some("/tenants/aurora-gems/splash.jpg".to_string()),
                },
            )
            .with_tenant(
                "rose-and-karat",
                BrandingDescriptor {
                    id: "rose-and-karat".to_string(),
                    name: "Rose & Karat".to_string(),
                    tagline: "Fine jewellery since 1962".to_string(),
                    logo: "/tenants/rose-and-karat/logo.svg".to_string(),
                    favicon: "/tenants/rose-and-karat/favicon.ico".to_string(),
                    theme: Theme {
                        background: "#FFF7F5".to_string(),
                        text: "#3A1F1D".to_string(),
                        accent: "#B76E79".to_string(),
                        primary: "#8C3B46".to_string(),
                        secondary: "#F2D4D7".to_string(),
                    },
                    is_custom: true,
                    tenant_id: None,
                    seasonal_enabled: false,
                    custom_splash: None,
                },
            )
    }

    pub fn len(&self) -> usize {
        self.tenants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tenants.is_empty()
    }
}

#[async_trait::async_trait]
impl BrandingSource for StaticBrandingSource {
    async fn fetch_branding(&self, tenant_id: &str) -> Result<Option<BrandingDescriptor>> {
        Ok(self.tenants.get(tenant_id).cloned())
    }
}
