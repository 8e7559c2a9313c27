use serde::{Deserialize, Serialize};

use crate::routes::PrimaryRole;

/// A store created during onboarding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDetails {
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub address: String,
}

/// A colleague invited to join the tenant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInvitation {
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<PrimaryRole>,
}

/// Which stores an invited team member works at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreAssignment {
    pub member_email: String,
    #[serde(default)]
    pub store_names: Vec<String>,
}

/// Optional CRM modules switched on at the end of onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureToggles {
    pub customer_management: bool,
    pub appointment_booking: bool,
    pub follow_up_reminders: bool,
    pub escalation_tracking: bool,
    pub feedback_collection: bool,
    pub marketing_campaigns: bool,
    pub whatsapp_integration: bool,
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self {
            customer_management: true,
            appointment_booking: true,
            follow_up_reminders: true,
            escalation_tracking: false,
            feedback_collection: false,
            marketing_campaigns: false,
            whatsapp_integration: false,
        }
    }
}

/// Everything the wizard has collected so far.
///
/// Cumulative: fields are only ever replaced by [`OnboardingData::merge`],
/// never cleared, until the wizard completes or is abandoned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_role: Option<PrimaryRole>,

    // Basic profile
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub job_title: String,

    // Business details
    pub business_name: String,
    pub business_type: String,
    pub stores: Vec<StoreDetails>,

    // Team
    pub team_members: Vec<TeamInvitation>,
    pub store_assignments: Vec<StoreAssignment>,

    pub features: FeatureToggles,
}

impl OnboardingData {
    /// Overwrite every field present in `patch`.
    ///
    /// Applying the same patch twice yields the same data.
    pub fn merge(&mut self, patch: OnboardingPatch) {
        if let Some(role) = patch.primary_role {
            self.primary_role = Some(role);
        }
        if let Some(v) = patch.first_name {
            self.first_name = v;
        }
        if let Some(v) = patch.last_name {
            self.last_name = v;
        }
        if let Some(v) = patch.phone {
            self.phone = v;
        }
        if let Some(v) = patch.job_title {
            self.job_title = v;
        }
        if let Some(v) = patch.business_name {
            self.business_name = v;
        }
        if let Some(v) = patch.business_type {
            self.business_type = v;
        }
        if let Some(v) = patch.stores {
            self.stores = v;
        }
        if let Some(v) = patch.team_members {
            self.team_members = v;
        }
        if let Some(v) = patch.store_assignments {
            self.store_assignments = v;
        }
        if let Some(v) = patch.features {
            self.features = v;
        }
    }

    /// `true` when the selected role sets up stores and a team.
    pub fn manages_business(&self) -> bool {
        self.primary_role.map(|r| r.manages_business()).unwrap_or(false)
    }
}

/// Partial onboarding data produced by a single step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_role: Option<PrimaryRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stores: Option<Vec<StoreDetails>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_members: Option<Vec<TeamInvitation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_assignments: Option<Vec<StoreAssignment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureToggles>,
}

impl OnboardingPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_primary_role(mut self, role: PrimaryRole) -> Self {
        self.primary_role = Some(role);
        self
    }

    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = Some(first.into());
        self.last_name = Some(last.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_business(mut self, name: impl Into<String>, kind: impl Into<String>) -> Self {
        self.business_name = Some(name.into());
        self.business_type = Some(kind.into());
        self
    }

    pub fn with_stores(mut self, stores: Vec<StoreDetails>) -> Self {
        self.stores = Some(stores);
        self
    }

    pub fn with_team_members(mut self, members: Vec<TeamInvitation>) -> Self {
        self.team_members = Some(members);
        self
    }

    pub fn with_store_assignments(mut self, assignments: Vec<StoreAssignment>) -> Self {
        self.store_assignments = Some(assignments);
        self
    }

    pub fn with_features(mut self, features: FeatureToggles) -> Self {
        self.features = Some(features);
        self
    }

    /// `true` when the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
