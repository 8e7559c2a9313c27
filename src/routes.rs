//! Primary roles and the role → dashboard route table.
//!
//! Used after login and at the end of onboarding to decide where to send the
//! user. Unknown roles land on [`FALLBACK_DASHBOARD`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Route used when a role is missing or not in the table.
pub const FALLBACK_DASHBOARD: &str = "/dashboard";

/// Access-control role chosen during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PrimaryRole {
    PlatformAdmin,
    BusinessAdmin,
    Manager,
    InHouseSales,
    Marketing,
    TeleCaller,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl PrimaryRole {
    pub const ALL: [PrimaryRole; 6] = [
        PrimaryRole::PlatformAdmin,
        PrimaryRole::BusinessAdmin,
        PrimaryRole::Manager,
        PrimaryRole::InHouseSales,
        PrimaryRole::Marketing,
        PrimaryRole::TeleCaller,
    ];

    /// Canonical slug, as written to storage and sent to the backend.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::PlatformAdmin => "platform-admin",
            Self::BusinessAdmin => "business-admin",
            Self::Manager => "manager",
            Self::InHouseSales => "in-house-sales",
            Self::Marketing => "marketing",
            Self::TeleCaller => "tele-caller",
        }
    }

    pub fn dashboard_route(&self) -> &'static str {
        match self {
            Self::PlatformAdmin => "/platform-admin/dashboard",
            Self::BusinessAdmin => "/business-admin/dashboard",
            Self::Manager => "/manager/dashboard",
            Self::InHouseSales => "/sales/dashboard",
            Self::Marketing => "/marketing/dashboard",
            Self::TeleCaller => "/telecaller/dashboard",
        }
    }

    /// Roles that set up the business itself: stores, team, assignments.
    pub fn manages_business(&self) -> bool {
        matches!(self, Self::PlatformAdmin | Self::BusinessAdmin | Self::Manager)
    }
}

impl FromStr for PrimaryRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "platform-admin" => Ok(Self::PlatformAdmin),
            "business-admin" => Ok(Self::BusinessAdmin),
            "manager" | "managers" => Ok(Self::Manager),
            "in-house-sales" | "inhouse-sales" | "sales" => Ok(Self::InHouseSales),
            "marketing" => Ok(Self::Marketing),
            "tele-caller" | "telecaller" => Ok(Self::TeleCaller),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

impl TryFrom<String> for PrimaryRole {
    type Error = UnknownRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PrimaryRole> for String {
    fn from(role: PrimaryRole) -> Self {
        role.slug().to_string()
    }
}

impl fmt::Display for PrimaryRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Dashboard route for a role slug as returned by the backend.
pub fn dashboard_route_for(role: &str) -> &'static str {
    role.parse::<PrimaryRole>()
        .map(|r| r.dashboard_route())
        .unwrap_or(FALLBACK_DASHBOARD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for role in PrimaryRole::ALL {
            assert_eq!(role.slug().parse::<PrimaryRole>().unwrap(), role);
        }
    }

    #[test]
    fn test_separator_and_alias_variants() {
        assert_eq!("platform_admin".parse::<PrimaryRole>().unwrap(), PrimaryRole::PlatformAdmin);
        assert_eq!("Business Admin".parse::<PrimaryRole>().unwrap(), PrimaryRole::BusinessAdmin);
        assert_eq!("managers".parse::<PrimaryRole>().unwrap(), PrimaryRole::Manager);
        assert_eq!("inhouse_sales".parse::<PrimaryRole>().unwrap(), PrimaryRole::InHouseSales);
        assert_eq!("telecaller".parse::<PrimaryRole>().unwrap(), PrimaryRole::TeleCaller);
        assert!("jeweler".parse::<PrimaryRole>().is_err());
    }

    #[test]
    fn test_dashboard_table() {
        assert_eq!(dashboard_route_for("platform-admin"), "/platform-admin/dashboard");
        assert_eq!(dashboard_route_for("tele_caller"), "/telecaller/dashboard");
        assert_eq!(dashboard_route_for("unknown"), FALLBACK_DASHBOARD);
        assert_eq!(dashboard_route_for(""), FALLBACK_DASHBOARD);
    }

    #[test]
    fn test_manages_business() {
        let managing: Vec<_> = PrimaryRole::ALL
            .into_iter()
            .filter(|r| r.manages_business())
            .collect();
        assert_eq!(
            managing,
            vec![PrimaryRole::PlatformAdmin, PrimaryRole::BusinessAdmin, PrimaryRole::Manager]
        );
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&PrimaryRole::InHouseSales).unwrap();
        assert_eq!(json, "\"in-house-sales\"");
        let parsed: PrimaryRole = serde_json::from_str("\"business_admin\"").unwrap();
        assert_eq!(parsed, PrimaryRole::BusinessAdmin);
        assert!(serde_json::from_str::<PrimaryRole>("\"owner\"").is_err());
    }
}
