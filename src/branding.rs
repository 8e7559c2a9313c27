//! Branding context: resolves the tenant's white-label descriptor.
//!
//! The tenant id comes from storage (`tenantId`) or, failing that, from the
//! `tenant`/`tenantId` query parameter of the page URL, then from an optional
//! configured default. Whatever goes wrong (no tenant, unknown tenant, fetch
//! error) the context ends up holding [`BrandingDescriptor::default_brand`],
//! never nothing.

use crate::api::BrandingSource;
use crate::models::{BrandingDescriptor, BrandingUpdate};
use crate::storage::{keys, KeyValueStore};

const TENANT_QUERY_PARAMS: [&str; 2] = ["tenant", "tenantId"];

/// Holds the branding descriptor for the current app load.
pub struct BrandingContext<B, S> {
    source: B,
    store: S,
    location: Option<String>,
    default_tenant: Option<String>,
    branding: BrandingDescriptor,
}

impl<B, S> BrandingContext<B, S>
where
    B: BrandingSource,
    S: KeyValueStore,
{
    /// Create a context holding the default branding. Call `init` to resolve.
    pub fn new(source: B, store: S) -> Self {
        Self {
            source,
            store,
            location: None,
            default_tenant: None,
            branding: BrandingDescriptor::default_brand(),
        }
    }

    /// URL the app was opened with, consulted for a tenant query parameter.
    pub fn with_location(mut self, url: impl Into<String>) -> Self {
        self.location = Some(url.into());
        self
    }

    /// Tenant used only when neither storage nor the URL names one.
    ///
    /// Never persisted.
    pub fn with_default_tenant(mut self, tenant_id: impl Into<String>) -> Self {
        let tenant_id = tenant_id.into();
        self.default_tenant = (!tenant_id.trim().is_empty()).then(|| tenant_id.trim().to_string());
        self
    }

    /// Resolve the tenant and load its branding.
    pub async fn init(&mut self) -> &BrandingDescriptor {
        let tenant_id = self.resolve_tenant_id();
        self.load(tenant_id).await
    }

    /// Re-run resolution for the tenant of the current descriptor.
    pub async fn refresh_branding(&mut self) -> &BrandingDescriptor {
        let tenant_id = self.branding.tenant_id.clone();
        self.load(tenant_id).await
    }

    /// Shallow-merge `update` into the current descriptor.
    ///
    /// Edits live in memory only.
    pub fn update_branding(&mut self, update: BrandingUpdate) -> &BrandingDescriptor {
        self.branding.apply(update);
        if let Some(tenant_id) = &self.branding.tenant_id {
            log::info!(
                "[BRANDING] Branding for tenant '{}' changed locally; server sync is not available",
                tenant_id
            );
        }
        &self.branding
    }

    pub fn branding(&self) -> &BrandingDescriptor {
        &self.branding
    }

    pub fn tenant_id(&self) -> Option<&str> {
        self.branding.tenant_id.as_deref()
    }

    /// Forget the resolved branding.
    pub fn dispose(&mut self) {
        self.branding = BrandingDescriptor::default_brand();
    }

    fn resolve_tenant_id(&mut self) -> Option<String> {
        match self.store.get_item(keys::TENANT_ID) {
            Ok(Some(id)) if !id.trim().is_empty() => return Some(id.trim().to_string()),
            Ok(_) => {},
            Err(e) => log::warn!("[BRANDING] Could not read stored tenant id: {}", e),
        }

        let Some(from_url) = self.location.as_deref().and_then(tenant_from_url) else {
            return self.default_tenant.clone();
        };
        // Keep the tenant across reloads that drop the query string
        if let Err(e) = self.store.set_item(keys::TENANT_ID, &from_url) {
            log::warn!("[BRANDING] Could not persist tenant id: {}", e);
        }
        Some(from_url)
    }

    async fn load(&mut self, tenant_id: Option<String>) -> &BrandingDescriptor {
        self.branding = match tenant_id {
            None => {
                log::debug!("[BRANDING] No tenant, using default branding");
                BrandingDescriptor::default_brand()
            },
            Some(id) => match self.source.fetch_branding(&id).await {
                Ok(Some(mut brand)) => {
                    log::debug!("[BRANDING] Loaded branding '{}' for tenant '{}'", brand.name, id);
                    brand.tenant_id.get_or_insert(id);
                    brand
                },
                Ok(None) => {
                    log::debug!("[BRANDING] Unknown tenant '{}', using default branding", id);
                    BrandingDescriptor::default_brand()
                },
                Err(e) => {
                    log::warn!("[BRANDING] Branding fetch for '{}' failed: {}", id, e);
                    BrandingDescriptor::default_brand()
                },
            },
        };
        &self.branding
    }
}

/// Tenant id from the `tenant` or `tenantId` query parameter.
fn tenant_from_url(location: &str) -> Option<String> {
    let url = reqwest::Url::parse(location).ok()?;
    let found = url.query_pairs().find_map(|(key, value)| {
        let value = value.trim();
        (TENANT_QUERY_PARAMS.contains(&key.as_ref()) && !value.is_empty())
            .then(|| value.to_string())
    });
    found
}
