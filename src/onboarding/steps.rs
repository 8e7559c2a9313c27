use std::fmt;

use crate::models::OnboardingData;

/// One screen of the onboarding wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnboardingStep {
    Welcome,
    RoleSelection,
    BasicProfile,
    BusinessDetails,
    TeamInvitations,
    TeamAssignment,
    Features,
    Review,
}

/// The wizard's step sequence, in order.
pub const STEPS: [OnboardingStep; 8] = [
    OnboardingStep::Welcome,
    OnboardingStep::RoleSelection,
    OnboardingStep::BasicProfile,
    OnboardingStep::BusinessDetails,
    OnboardingStep::TeamInvitations,
    OnboardingStep::TeamAssignment,
    OnboardingStep::Features,
    OnboardingStep::Review,
];

impl OnboardingStep {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::RoleSelection => "role-selection",
            Self::BasicProfile => "basic-profile",
            Self::BusinessDetails => "business-details",
            Self::TeamInvitations => "team-invitations",
            Self::TeamAssignment => "team-assignment",
            Self::Features => "features",
            Self::Review => "review",
        }
    }

    pub fn index(&self) -> usize {
        STEPS
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }

    /// Business and team steps only apply to roles that run the business.
    pub fn applies_to(&self, data: &OnboardingData) -> bool {
        match self {
            Self::BusinessDetails | Self::TeamInvitations | Self::TeamAssignment => {
                data.manages_business()
            },
            _ => true,
        }
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OnboardingPatch;
    use crate::routes::PrimaryRole;

    #[test]
    fn test_indexes_follow_sequence() {
        for (i, step) in STEPS.iter().enumerate() {
            assert_eq!(step.index(), i);
        }
    }

    #[test]
    fn test_applicability_by_role() {
        let mut data = OnboardingData::default();
        assert!(!OnboardingStep::BusinessDetails.applies_to(&data));
        assert!(OnboardingStep::Features.applies_to(&data));

        data.merge(OnboardingPatch::new().with_primary_role(PrimaryRole::Marketing));
        assert!(!OnboardingStep::TeamAssignment.applies_to(&data));

        data.merge(OnboardingPatch::new().with_primary_role(PrimaryRole::BusinessAdmin));
        assert!(OnboardingStep::BusinessDetails.applies_to(&data));
        assert!(OnboardingStep::TeamAssignment.applies_to(&data));
    }
}
