//! Session state store: one mutable session per page lifetime, updated
//! only through a closed set of named transitions applied by a pure
//! reducer. Consumers read point-in-time snapshots and never mutate the
//! state directly.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::domain::{EvaluationResult, JobDescription, Resume};

/// Display theme preference carried in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// Client settings. These survive a session reset; everything else in
/// the session is cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub use_mock_data: bool,
    pub api_base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_mock_data: true,
            api_base_url: "http://localhost:3001/api".to_string(),
            api_key: None,
            theme: Theme::Light,
        }
    }
}

/// Partial settings update; `None` fields leave the current value
/// untouched (shallow merge).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub use_mock_data: Option<bool>,
    pub api_base_url: Option<String>,
    pub api_key: Option<Option<String>>,
    pub theme: Option<Theme>,
}

impl Settings {
    pub fn merged(&self, patch: &SettingsPatch) -> Settings {
        Settings {
            use_mock_data: patch.use_mock_data.unwrap_or(self.use_mock_data),
            api_base_url: patch
                .api_base_url
                .clone()
                .unwrap_or_else(|| self.api_base_url.clone()),
            api_key: patch.api_key.clone().unwrap_or_else(|| self.api_key.clone()),
            theme: patch.theme.unwrap_or(self.theme),
        }
    }
}

/// The aggregate session record: the single source of truth for the
/// page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub current_job: Option<JobDescription>,
    pub uploaded_resumes: Vec<Resume>,
    pub evaluation_results: Vec<EvaluationResult>,
    /// True only between an evaluation request being issued and its
    /// response (success or failure) being applied.
    pub is_evaluating: bool,
    pub settings: Settings,
}

impl SessionState {
    pub fn new(settings: Settings) -> Self {
        Self {
            current_job: None,
            uploaded_resumes: Vec::new(),
            evaluation_results: Vec::new(),
            is_evaluating: false,
            settings,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

/// The closed transition set. No transition validates cross-field
/// consistency: setting results that reference resumes absent from
/// `uploaded_resumes` is legal.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    SetCurrentJob(Option<JobDescription>),
    SetUploadedResumes(Vec<Resume>),
    /// Appends, preserving prior order. No de-duplication by
    /// `resume_id`.
    AddUploadedResumes(Vec<Resume>),
    SetEvaluationResults(Vec<EvaluationResult>),
    SetEvaluating(bool),
    UpdateSettings(SettingsPatch),
    /// Clears everything except `settings`.
    ResetSession,
}

/// Pure transition function: returns a new snapshot, never mutates in
/// place.
pub fn reduce(state: &SessionState, action: SessionAction) -> SessionState {
    match action {
        SessionAction::SetCurrentJob(job) => SessionState {
            current_job: job,
            ..state.clone()
        },
        SessionAction::SetUploadedResumes(resumes) => SessionState {
            uploaded_resumes: resumes,
            ..state.clone()
        },
        SessionAction::AddUploadedResumes(resumes) => {
            let mut uploaded = state.uploaded_resumes.clone();
            uploaded.extend(resumes);
            SessionState {
                uploaded_resumes: uploaded,
                ..state.clone()
            }
        }
        SessionAction::SetEvaluationResults(results) => SessionState {
            evaluation_results: results,
            ..state.clone()
        },
        SessionAction::SetEvaluating(busy) => SessionState {
            is_evaluating: busy,
            ..state.clone()
        },
        SessionAction::UpdateSettings(patch) => SessionState {
            settings: state.settings.merged(&patch),
            ..state.clone()
        },
        SessionAction::ResetSession => SessionState::new(state.settings.clone()),
    }
}

/// Single-writer store around the session. Dispatches serialize behind
/// a mutex so every transition is applied atomically; readers receive a
/// cloned snapshot.
#[derive(Debug)]
pub struct SessionStore {
    state: Mutex<SessionState>,
}

impl SessionStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: Mutex::new(SessionState::new(settings)),
        }
    }

    pub fn dispatch(&self, action: SessionAction) {
        let mut state = self.state.lock().expect("session mutex poisoned");
        let next = reduce(&state, action);
        *state = next;
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.lock().expect("session mutex poisoned").clone()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Verdict;

    fn resume(id: &str) -> Resume {
        Resume {
            resume_id: id.to_string(),
            name: format!("Candidate {id}"),
            filename: format!("{id}.pdf"),
            parsed_text_snippet: "snippet".to_string(),
            email: None,
            phone: None,
            uploaded_at: None,
        }
    }

    fn result(id: &str) -> EvaluationResult {
        EvaluationResult {
            resume_id: id.to_string(),
            name: format!("Candidate {id}"),
            score: 60,
            verdict: Verdict::Medium,
            matched_skills: vec![],
            missing_skills: vec![],
            feedback: String::new(),
            email: None,
            phone: None,
        }
    }

    #[test]
    fn add_uploaded_resumes_appends_in_order() {
        let store = SessionStore::default();
        store.dispatch(SessionAction::AddUploadedResumes(vec![
            resume("r1"),
            resume("r2"),
        ]));
        store.dispatch(SessionAction::AddUploadedResumes(vec![resume("r3")]));

        let snapshot = store.snapshot();
        let ids: Vec<&str> = snapshot
            .uploaded_resumes
            .iter()
            .map(|r| r.resume_id.as_str())
            .collect();
        assert_eq!(ids, vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn add_uploaded_resumes_keeps_duplicates() {
        let store = SessionStore::default();
        store.dispatch(SessionAction::AddUploadedResumes(vec![resume("r1")]));
        store.dispatch(SessionAction::AddUploadedResumes(vec![resume("r1")]));
        assert_eq!(store.snapshot().uploaded_resumes.len(), 2);
    }

    #[test]
    fn results_may_reference_unknown_resumes() {
        let store = SessionStore::default();
        store.dispatch(SessionAction::SetEvaluationResults(vec![result("ghost")]));
        let state = store.snapshot();
        assert!(state.uploaded_resumes.is_empty());
        assert_eq!(state.evaluation_results.len(), 1);
    }

    #[test]
    fn reset_preserves_settings_only() {
        let store = SessionStore::default();
        store.dispatch(SessionAction::UpdateSettings(SettingsPatch {
            use_mock_data: Some(false),
            api_base_url: Some("https://api.example.com".to_string()),
            api_key: Some(Some("key-123".to_string())),
            theme: Some(Theme::Dark),
        }));
        store.dispatch(SessionAction::AddUploadedResumes(vec![resume("r1")]));
        store.dispatch(SessionAction::SetEvaluationResults(vec![result("r1")]));
        store.dispatch(SessionAction::SetEvaluating(true));

        let before = store.snapshot().settings;
        store.dispatch(SessionAction::ResetSession);
        let state = store.snapshot();

        assert_eq!(state.settings, before);
        assert!(state.current_job.is_none());
        assert!(state.uploaded_resumes.is_empty());
        assert!(state.evaluation_results.is_empty());
        assert!(!state.is_evaluating);
    }

    #[test]
    fn settings_patch_merges_shallowly() {
        let settings = Settings::default();
        let merged = settings.merged(&SettingsPatch {
            theme: Some(Theme::Dark),
            ..SettingsPatch::default()
        });
        assert_eq!(merged.theme, Theme::Dark);
        assert_eq!(merged.api_base_url, settings.api_base_url);
        assert_eq!(merged.use_mock_data, settings.use_mock_data);
    }

    #[test]
    fn reduce_leaves_input_untouched() {
        let state = SessionState::default();
        let next = reduce(&state, SessionAction::SetEvaluating(true));
        assert!(!state.is_evaluating);
        assert!(next.is_evaluating);
    }
}
