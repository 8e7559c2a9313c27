//! Onboarding wizard: persistence, role-based skipping and completion.

mod common;

use common::FakeOnboardingApi;
use jewel_link::models::{FeatureToggles, StoreDetails, TeamInvitation};
use jewel_link::storage::keys;
use jewel_link::{
    shared, FileStore, KeyValueStore, MemoryStore, OnboardingPatch, OnboardingStep,
    OnboardingWizard, PrimaryRole, FALLBACK_DASHBOARD,
};
use tempfile::TempDir;

fn aurora_store() -> StoreDetails {
    StoreDetails {
        name: "Aurora MG Road".to_string(),
        city: "Bengaluru".to_string(),
        address: "12 MG Road".to_string(),
    }
}

#[test]
fn test_progress_survives_a_new_wizard_instance() {
    let store = shared(MemoryStore::new());

    let mut wizard = OnboardingWizard::new(store.clone());
    wizard.init().unwrap();
    wizard
        .save_progress(
            OnboardingPatch::new().with_primary_role(PrimaryRole::BusinessAdmin),
            Some(OnboardingStep::BasicProfile.index()),
        )
        .unwrap();
    wizard
        .save_progress(
            OnboardingPatch::new().with_name("Maya", "Iyer").with_phone("+91 98450 00000"),
            Some(OnboardingStep::BusinessDetails.index()),
        )
        .unwrap();
    let saved = wizard.data().clone();
    drop(wizard);

    let mut resumed = OnboardingWizard::new(store.clone());
    resumed.init().unwrap();

    assert_eq!(resumed.current_step(), OnboardingStep::BusinessDetails);
    assert_eq!(resumed.data(), &saved);
    assert_eq!(resumed.data().first_name, "Maya");
    assert_eq!(resumed.data().primary_role, Some(PrimaryRole::BusinessAdmin));
    assert_eq!(
        store.get_item(keys::SELECTED_ROLE).unwrap().as_deref(),
        Some("business-admin")
    );
}

#[test]
fn test_progress_survives_process_restart_with_file_store() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("storage.toml");

    {
        let mut wizard = OnboardingWizard::new(FileStore::with_path(&path).unwrap());
        wizard
            .save_progress(
                OnboardingPatch::new()
                    .with_primary_role(PrimaryRole::Manager)
                    .with_business("Aurora Gems", "retail")
                    .with_stores(vec![aurora_store()]),
                Some(OnboardingStep::TeamInvitations.index()),
            )
            .unwrap();
    }

    let mut wizard = OnboardingWizard::new(FileStore::with_path(&path).unwrap());
    wizard.init().unwrap();

    assert_eq!(wizard.current_step(), OnboardingStep::TeamInvitations);
    assert_eq!(wizard.data().business_name, "Aurora Gems");
    assert_eq!(wizard.data().stores, vec![aurora_store()]);
}

#[test]
fn test_patches_accumulate_and_reapplying_is_idempotent() {
    let mut wizard = OnboardingWizard::new(MemoryStore::new());
    let patch = OnboardingPatch::new().with_business("Rose & Karat", "boutique");

    wizard
        .save_progress(OnboardingPatch::new().with_primary_role(PrimaryRole::BusinessAdmin), None)
        .unwrap();
    wizard.save_progress(patch.clone(), None).unwrap();
    let once = wizard.data().clone();
    wizard.save_progress(patch, None).unwrap();

    assert_eq!(wizard.data(), &once);
    assert_eq!(once.primary_role, Some(PrimaryRole::BusinessAdmin));
    assert_eq!(once.business_type, "boutique");
}

#[test]
fn test_non_admin_roles_skip_business_and_team_steps() {
    for role in [PrimaryRole::InHouseSales, PrimaryRole::Marketing, PrimaryRole::TeleCaller] {
        let mut wizard = OnboardingWizard::new(MemoryStore::new());
        wizard
            .save_progress(
                OnboardingPatch::new().with_primary_role(role),
                Some(OnboardingStep::BasicProfile.index()),
            )
            .unwrap();
        assert_eq!(wizard.enter_step().unwrap(), OnboardingStep::BasicProfile);

        wizard.next_step().unwrap();
        assert_eq!(wizard.current_step(), OnboardingStep::BusinessDetails);
        assert!(!wizard.is_current_step_applicable());

        assert_eq!(
            wizard.enter_step().unwrap(),
            OnboardingStep::Features,
            "{} should skip straight to features",
            role.slug()
        );
        assert_eq!(
            wizard.store().get_item(keys::ONBOARDING_STEP).unwrap().as_deref(),
            Some("6")
        );
    }
}

#[test]
fn test_admin_roles_see_every_step() {
    for role in [PrimaryRole::PlatformAdmin, PrimaryRole::BusinessAdmin, PrimaryRole::Manager] {
        let mut wizard = OnboardingWizard::new(MemoryStore::new());
        wizard
            .save_progress(OnboardingPatch::new().with_primary_role(role), None)
            .unwrap();

        let mut visited = vec![wizard.enter_step().unwrap()];
        while wizard.next_step().unwrap() {
            visited.push(wizard.enter_step().unwrap());
        }
        assert_eq!(visited, wizard.steps().to_vec());
    }
}

#[test]
fn test_corrupt_draft_starts_over() {
    let store = shared(MemoryStore::new());
    {
        let mut raw = store.clone();
        raw.set_item(keys::ONBOARDING_DATA, "{\"schema_version\": 1, \"data\": ").unwrap();
        raw.set_item(keys::ONBOARDING_STEP, "4").unwrap();
    }

    let mut wizard = OnboardingWizard::new(store);
    wizard.init().unwrap();

    assert_eq!(wizard.current_step_index(), 0);
    assert_eq!(wizard.data().primary_role, None);
}

#[tokio::test]
async fn test_complete_submits_clears_draft_and_redirects() {
    let api = FakeOnboardingApi::accepting();
    let mut wizard = OnboardingWizard::new(MemoryStore::new());
    wizard
        .save_progress(
            OnboardingPatch::new()
                .with_primary_role(PrimaryRole::BusinessAdmin)
                .with_team_members(vec![TeamInvitation {
                    email: "ravi@aurora.example".to_string(),
                    name: "Ravi".to_string(),
                    role: Some(PrimaryRole::InHouseSales),
                }])
                .with_features(FeatureToggles {
                    whatsapp_integration: true,
                    ..FeatureToggles::default()
                }),
            Some(OnboardingStep::Review.index()),
        )
        .unwrap();

    let outcome = wizard.complete(&api).await;

    assert!(outcome.submitted);
    assert_eq!(outcome.error, None);
    assert_eq!(outcome.redirect_to, "/business-admin/dashboard");

    let submissions = api.submissions();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].team_members[0].email, "ravi@aurora.example");
    assert!(submissions[0].features.whatsapp_integration);

    assert!(!wizard.store().contains_key(keys::ONBOARDING_DATA).unwrap());
    assert!(!wizard.store().contains_key(keys::ONBOARDING_STEP).unwrap());
    assert_eq!(wizard.current_step_index(), 0);
}

#[tokio::test]
async fn test_complete_failure_still_redirects_and_clears() {
    let api = FakeOnboardingApi::failing();
    let mut wizard = OnboardingWizard::new(MemoryStore::new());
    wizard
        .save_progress(
            OnboardingPatch::new().with_primary_role(PrimaryRole::TeleCaller),
            Some(OnboardingStep::Review.index()),
        )
        .unwrap();

    let outcome = wizard.complete(&api).await;

    assert!(!outcome.submitted);
    assert!(outcome.error.unwrap().contains("connection refused"));
    assert_eq!(outcome.redirect_to, "/telecaller/dashboard");
    assert!(!wizard.store().contains_key(keys::ONBOARDING_DATA).unwrap());
    assert!(!wizard.store().contains_key(keys::ONBOARDING_STEP).unwrap());
}

#[tokio::test]
async fn test_complete_uses_stored_role_or_fallback() {
    let api = FakeOnboardingApi::accepting();

    let mut store = MemoryStore::new();
    store.set_item(keys::SELECTED_ROLE, "marketing").unwrap();
    let mut wizard = OnboardingWizard::new(store);
    assert_eq!(wizard.complete(&api).await.redirect_to, "/marketing/dashboard");

    let mut wizard = OnboardingWizard::new(MemoryStore::new());
    assert_eq!(wizard.complete(&api).await.redirect_to, FALLBACK_DASHBOARD);
}

#[test]
fn test_abandon_discards_draft() {
    let mut wizard = OnboardingWizard::new(MemoryStore::new());
    wizard
        .save_progress(OnboardingPatch::new().with_phone("123"), Some(3))
        .unwrap();

    wizard.abandon().unwrap();

    assert_eq!(wizard.current_step_index(), 0);
    assert_eq!(wizard.data().phone, "");
    assert!(wizard.store().is_empty());
}
