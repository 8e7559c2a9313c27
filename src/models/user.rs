use serde::{Deserialize, Serialize};

use crate::routes::{dashboard_route_for, PrimaryRole};

/// Signed-in user as returned by login, register and the profile endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Role slug (e.g. "business-admin", "tele_caller")
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Server-chosen landing page, takes precedence over the role table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_url: Option<String>,
    /// Tenant reference: an id, a slug, or an object with an `id` field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<serde_json::Value>,
}

impl User {
    pub fn primary_role(&self) -> Option<PrimaryRole> {
        self.role.parse().ok()
    }

    /// Where to send this user after sign-in.
    pub fn dashboard_route(&self) -> String {
        match self.dashboard_url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => dashboard_route_for(&self.role).to_string(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// Tenant identifier, whatever shape the backend used for it.
    pub fn tenant_id(&self) -> Option<String> {
        use serde_json::Value;
        match self.tenant.as_ref()? {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Object(map) => match map.get("id")? {
                Value::Number(n) => Some(n.to_string()),
                Value::String(s) if !s.is_empty() => Some(s.clone()),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Partial profile update; only present fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
