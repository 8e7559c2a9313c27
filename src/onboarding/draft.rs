//! Persisted onboarding draft.
//!
//! Stored under `onboarding_data` as `{"schema_version": 1, "data": {...}}`.
//! Drafts written before versioning (a bare data object) load as version 0.
//! Anything unreadable means starting over, never an error.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::OnboardingData;
use crate::storage::{keys, KeyValueStore};

pub const DRAFT_SCHEMA_VERSION: u32 = 1;

/// Versioned envelope around the wizard data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingDraft {
    pub schema_version: u32,
    pub data: OnboardingData,
}

impl OnboardingDraft {
    pub fn new(data: OnboardingData) -> Self {
        Self {
            schema_version: DRAFT_SCHEMA_VERSION,
            data,
        }
    }

    /// Decode a stored draft; `None` when it should be discarded.
    pub fn decode(raw: &str) -> Option<OnboardingData> {
        let value: serde_json::Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("[ONBOARDING] Discarding malformed draft: {}", e);
                return None;
            },
        };

        let version = match value.get("schema_version") {
            None => 0,
            Some(v) => match v.as_u64() {
                Some(v) => v,
                None => {
                    log::warn!("[ONBOARDING] Discarding draft with invalid schema_version");
                    return None;
                },
            },
        };

        let decoded = match version {
            0 if value.is_object() => serde_json::from_value::<OnboardingData>(value),
            0 => {
                log::warn!("[ONBOARDING] Discarding draft that is not a JSON object");
                return None;
            },
            1 => serde_json::from_value::<OnboardingDraft>(value).map(|d| d.data),
            other => {
                log::warn!(
                    "[ONBOARDING] Discarding draft with unsupported schema_version {}",
                    other
                );
                return None;
            },
        };

        match decoded {
            Ok(data) => Some(data),
            Err(e) => {
                log::warn!("[ONBOARDING] Discarding unreadable draft: {}", e);
                None
            },
        }
    }

    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Draft and step index as found in storage.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct StoredProgress {
    pub data: OnboardingData,
    pub step_index: usize,
}

/// Read the saved progress; unreadable parts fall back to a fresh start.
pub(crate) fn load_progress<S: KeyValueStore>(store: &S, step_count: usize) -> Result<StoredProgress> {
    let data = match store.get_item(keys::ONBOARDING_DATA)? {
        Some(raw) => match OnboardingDraft::decode(&raw) {
            Some(data) => data,
            // Answers lost: do not resume midway through the wizard
            None => return Ok(StoredProgress::default()),
        },
        None => OnboardingData::default(),
    };

    let step_index = match store.get_item(keys::ONBOARDING_STEP)? {
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(index) if index < step_count => index,
            _ => {
                log::warn!("[ONBOARDING] Ignoring invalid stored step '{}'", raw);
                0
            },
        },
        None => 0,
    };

    Ok(StoredProgress { data, step_index })
}
