//! Onboarding wizard: the guided account setup run once per new user.
//!
//! A fixed, linear sequence of [`OnboardingStep`]s over one cumulative
//! [`OnboardingData`](crate::models::OnboardingData) record. Every change is
//! written to storage before it is applied in memory, so a reload resumes on
//! the same step with the same answers.

mod draft;
mod steps;
mod wizard;

pub use draft::{OnboardingDraft, DRAFT_SCHEMA_VERSION};
pub use steps::{OnboardingStep, STEPS};
pub use wizard::{CompletionOutcome, OnboardingWizard};
