use super::draft::{load_progress, OnboardingDraft};
use super::steps::{OnboardingStep, STEPS};
use crate::api::OnboardingApi;
use crate::error::{JewelLinkError, Result};
use crate::models::{OnboardingData, OnboardingPatch};
use crate::routes::{PrimaryRole, FALLBACK_DASHBOARD};
use crate::storage::{keys, KeyValueStore};

/// Result of finishing the wizard.
///
/// Completion never fails: the user is always sent on to `redirect_to`,
/// whether or not the server accepted the submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionOutcome {
    pub redirect_to: String,
    pub submitted: bool,
    /// Why the submission failed, for display
    pub error: Option<String>,
}

/// State container for the onboarding wizard.
///
/// `current_step_index` always points into [`STEPS`].
pub struct OnboardingWizard<S> {
    store: S,
    current: usize,
    data: OnboardingData,
}

impl<S: KeyValueStore> OnboardingWizard<S> {
    /// Fresh wizard on the first step. Call [`init`] to resume a saved draft.
    ///
    /// [`init`]: OnboardingWizard::init
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: 0,
            data: OnboardingData::default(),
        }
    }

    /// Resume from storage. Unreadable drafts start fresh.
    pub fn init(&mut self) -> Result<()> {
        let progress = load_progress(&self.store, STEPS.len())?;
        log::debug!(
            "[ONBOARDING] Resuming at step {} ({})",
            progress.step_index,
            STEPS[progress.step_index]
        );
        self.data = progress.data;
        self.current = progress.step_index;
        Ok(())
    }

    pub fn steps(&self) -> &'static [OnboardingStep] {
        &STEPS
    }

    pub fn current_step_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> OnboardingStep {
        STEPS[self.current]
    }

    pub fn data(&self) -> &OnboardingData {
        &self.data
    }

    /// `(current step number, total steps)`, 1-based for display
    pub fn progress(&self) -> (usize, usize) {
        (self.current + 1, STEPS.len())
    }

    pub fn is_last_step(&self) -> bool {
        self.current + 1 == STEPS.len()
    }

    /// Advance one step. Returns `false` on the last step.
    pub fn next_step(&mut self) -> Result<bool> {
        if self.is_last_step() {
            return Ok(false);
        }
        self.move_to(self.current + 1)?;
        Ok(true)
    }

    /// Go back to the nearest earlier step that applies to the selected role.
    ///
    /// Returns `false` on the first step.
    pub fn prev_step(&mut self) -> Result<bool> {
        let target = (0..self.current)
            .rev()
            .find(|&i| STEPS[i].applies_to(&self.data));
        match target {
            Some(index) => {
                self.move_to(index)?;
                Ok(true)
            },
            None => Ok(false),
        }
    }

    /// Jump to `index`; out-of-range indexes are rejected.
    pub fn go_to_step(&mut self, index: usize) -> Result<()> {
        Self::check_index(index)?;
        self.move_to(index)
    }

    /// Merge `patch` into the cumulative data and persist it immediately.
    ///
    /// The merged draft (and `next_index`, when given) is written to storage
    /// before the in-memory state changes; a failed write changes nothing.
    pub fn save_progress(&mut self, patch: OnboardingPatch, next_index: Option<usize>) -> Result<()> {
        if let Some(index) = next_index {
            Self::check_index(index)?;
        }

        let selected_role = patch.primary_role;
        let mut merged = self.data.clone();
        merged.merge(patch);
        let draft = OnboardingDraft::new(merged);

        self.store.set_item(keys::ONBOARDING_DATA, &draft.encode()?)?;
        if let Some(role) = selected_role {
            self.store.set_item(keys::SELECTED_ROLE, role.slug())?;
        }
        if let Some(index) = next_index {
            self.store.set_item(keys::ONBOARDING_STEP, &index.to_string())?;
        }

        self.data = draft.data;
        if let Some(index) = next_index {
            self.current = index;
        }
        Ok(())
    }

    /// Whether the current step applies to the selected role.
    pub fn is_current_step_applicable(&self) -> bool {
        self.current_step().applies_to(&self.data)
    }

    /// Called when a step is shown.
    ///
    /// A step that does not apply to the selected role continues straight to
    /// the next one, without user interaction, until an applicable step is
    /// reached.
    pub fn enter_step(&mut self) -> Result<OnboardingStep> {
        while !self.is_current_step_applicable() && !self.is_last_step() {
            log::debug!(
                "[ONBOARDING] Skipping '{}' for role {:?}",
                self.current_step(),
                self.data.primary_role.map(|r| r.slug())
            );
            self.move_to(self.current + 1)?;
        }
        Ok(self.current_step())
    }

    /// Submit the collected data and finish the wizard.
    ///
    /// Submission is best effort: on success or failure alike the draft is
    /// cleared and the user is routed to their role's dashboard.
    pub async fn complete<A>(&mut self, api: &A) -> CompletionOutcome
    where
        A: OnboardingApi + ?Sized,
    {
        let (submitted, error) = match api.complete_onboarding(&self.data).await {
            Ok(_) => {
                log::debug!("[ONBOARDING] Onboarding submitted");
                (true, None)
            },
            Err(e) => {
                log::warn!("[ONBOARDING] Onboarding submission failed, continuing: {}", e);
                (false, Some(e.to_string()))
            },
        };

        if let Err(e) = self.store.remove_items(&keys::ONBOARDING_KEYS) {
            log::warn!("[ONBOARDING] Could not clear onboarding draft: {}", e);
        }

        let redirect_to = self.completion_role().map_or(FALLBACK_DASHBOARD, |r| r.dashboard_route());

        self.reset();
        CompletionOutcome {
            redirect_to: redirect_to.to_string(),
            submitted,
            error,
        }
    }

    /// Throw the draft away and start again from the first step.
    pub fn abandon(&mut self) -> Result<()> {
        self.store.remove_items(&keys::ONBOARDING_KEYS)?;
        self.reset();
        Ok(())
    }

    /// Drop in-memory state; the stored draft is kept.
    pub fn dispose(&mut self) {
        self.reset();
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn completion_role(&self) -> Option<PrimaryRole> {
        self.data.primary_role.or_else(|| {
            self.store
                .get_item(keys::SELECTED_ROLE)
                .ok()
                .flatten()
                .and_then(|slug| slug.parse().ok())
        })
    }

    fn move_to(&mut self, index: usize) -> Result<()> {
        self.store.set_item(keys::ONBOARDING_STEP, &index.to_string())?;
        self.current = index;
        Ok(())
    }

    fn check_index(index: usize) -> Result<()> {
        if index < STEPS.len() {
            Ok(())
        } else {
            Err(JewelLinkError::InvalidStep {
                index,
                len: STEPS.len(),
            })
        }
    }

    fn reset(&mut self) {
        self.current = 0;
        self.data = OnboardingData::default();
    }
}
