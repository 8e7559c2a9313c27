use serde::{Deserialize, Serialize};

/// Color palette of a branding descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub background: String,
    pub text: String,
    pub accent: String,
    pub primary: String,
    pub secondary: String,
}

/// Theme, logo and copy used to white-label the UI for a tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingDescriptor {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub logo: String,
    pub favicon: String,
    pub theme: Theme,
    #[serde(default)]
    pub is_custom: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(default)]
    pub seasonal_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_splash: Option<String>,
}

impl BrandingDescriptor {
    /// Built-in branding used whenever no tenant branding can be resolved.
    pub fn default_brand() -> Self {
        Self {
            id: "default".to_string(),
            name: "Jewel CRM".to_string(),
            tagline: "Every customer, every occasion, beautifully remembered".to_string(),
            logo: "/assets/logo.svg".to_string(),
            favicon: "/assets/favicon.ico".to_string(),
            theme: Theme {
                background: "#FFFDF8".to_string(),
                text: "#1F1B16".to_string(),
                accent: "#C9A227".to_string(),
                primary: "#5B2A86".to_string(),
                secondary: "#E8D9F1".to_string(),
            },
            is_custom: false,
            tenant_id: None,
            seasonal_enabled: false,
            custom_splash: None,
        }
    }

    /// Shallow merge: every field present in `update` replaces the current one.
    pub fn apply(&mut self, update: BrandingUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(tagline) = update.tagline {
            self.tagline = tagline;
        }
        if let Some(logo) = update.logo {
            self.logo = logo;
        }
        if let Some(favicon) = update.favicon {
            self.favicon = favicon;
        }
        if let Some(theme) = update.theme {
            self.theme = theme;
        }
        if let Some(is_custom) = update.is_custom {
            self.is_custom = is_custom;
        }
        if let Some(tenant_id) = update.tenant_id {
            self.tenant_id = Some(tenant_id);
        }
        if let Some(seasonal_enabled) = update.seasonal_enabled {
            self.seasonal_enabled = seasonal_enabled;
        }
        if let Some(custom_splash) = update.custom_splash {
            self.custom_splash = Some(custom_splash);
        }
    }
}

impl Default for BrandingDescriptor {
    fn default() -> Self {
        Self::default_brand()
    }
}

/// Partial branding descriptor for `update_branding`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_custom: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasonal_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_splash: Option<String>,
}
