//! Upload/evaluate orchestration: drives the transport client and folds
//! successful payloads into the session store. Failures are terminal
//! for that attempt and leave the session exactly as it was; nothing
//! here retries.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{EvaluationRequest, EvaluationResult, JobDescription, Resume};
use crate::session::{SessionAction, SessionStore};
use crate::transport::{ApiClient, TransportError, UploadFile};

#[derive(Debug, thiserror::Error)]
pub enum OrchestrationError {
    #[error("cannot evaluate: {0}")]
    NotReady(&'static str),

    #[error("{0} upload already in flight")]
    Busy(&'static str),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Coordinates submissions against a shared session store.
///
/// Each target (job, resumes, evaluation) carries a correlation
/// sequence; a completion applies its effect only while its token is
/// still the latest issued for that target, so a superseded response
/// can never overwrite newer state.
pub struct SessionCoordinator {
    client: ApiClient,
    store: Arc<SessionStore>,
    job_guard: AtomicBool,
    resume_guard: AtomicBool,
    job_seq: AtomicU64,
    resume_seq: AtomicU64,
    eval_seq: AtomicU64,
}

/// Releases a per-target busy guard on every exit path.
struct GuardRelease<'a>(&'a AtomicBool);

impl Drop for GuardRelease<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SessionCoordinator {
    pub fn new(client: ApiClient, store: Arc<SessionStore>) -> Self {
        Self {
            client,
            store,
            job_guard: AtomicBool::new(false),
            resume_guard: AtomicBool::new(false),
            job_seq: AtomicU64::new(0),
            resume_seq: AtomicU64::new(0),
            eval_seq: AtomicU64::new(0),
        }
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Submits a job description file. On success the session's current
    /// job is replaced wholesale.
    pub async fn upload_job_file(
        &self,
        file: UploadFile,
    ) -> Result<JobDescription, OrchestrationError> {
        self.upload_job(Some(file), None).await
    }

    /// Submits pasted job description text.
    pub async fn upload_job_text(&self, text: &str) -> Result<JobDescription, OrchestrationError> {
        self.upload_job(None, Some(text)).await
    }

    async fn upload_job(
        &self,
        file: Option<UploadFile>,
        text: Option<&str>,
    ) -> Result<JobDescription, OrchestrationError> {
        acquire(&self.job_guard, "job description")?;
        let _release = GuardRelease(&self.job_guard);
        let token = issue(&self.job_seq);

        match self.client.upload_job_description(file, text).await {
            Ok(job) => {
                if is_latest(&self.job_seq, token) {
                    self.store
                        .dispatch(SessionAction::SetCurrentJob(Some(job.clone())));
                    info!(job_id = %job.job_id, title = %job.title, "job description loaded");
                } else {
                    debug!(job_id = %job.job_id, "stale job upload response dropped");
                }
                Ok(job)
            }
            Err(err) => {
                warn!(error = %err, "job description upload failed; session unchanged");
                Err(err.into())
            }
        }
    }

    /// Submits resume files; successful payloads append to the session
    /// in upload order.
    pub async fn upload_resumes(
        &self,
        files: Vec<UploadFile>,
    ) -> Result<Vec<Resume>, OrchestrationError> {
        acquire(&self.resume_guard, "resume")?;
        let _release = GuardRelease(&self.resume_guard);
        let token = issue(&self.resume_seq);

        match self.client.upload_resumes(files).await {
            Ok(response) => {
                if is_latest(&self.resume_seq, token) {
                    self.store.dispatch(SessionAction::AddUploadedResumes(
                        response.uploaded.clone(),
                    ));
                    info!(count = response.uploaded.len(), "resumes uploaded");
                } else {
                    debug!("stale resume upload response dropped");
                }
                Ok(response.uploaded)
            }
            Err(err) => {
                warn!(error = %err, "resume upload failed; session unchanged");
                Err(err.into())
            }
        }
    }

    /// Runs an evaluation of every uploaded resume against the current
    /// job. Sets the session busy flag for the call's duration; on
    /// failure the flag clears and prior results stay untouched.
    pub async fn evaluate(&self) -> Result<Vec<EvaluationResult>, OrchestrationError> {
        let snapshot = self.store.snapshot();
        let job = snapshot
            .current_job
            .ok_or(OrchestrationError::NotReady("no job description loaded"))?;
        if snapshot.uploaded_resumes.is_empty() {
            return Err(OrchestrationError::NotReady("no resumes uploaded"));
        }

        let token = issue(&self.eval_seq);
        self.store.dispatch(SessionAction::SetEvaluating(true));

        let request = EvaluationRequest {
            job_id: job.job_id.clone(),
            resume_ids: snapshot
                .uploaded_resumes
                .iter()
                .map(|resume| resume.resume_id.clone())
                .collect(),
        };

        match self.client.evaluate_resumes(&request).await {
            Ok(response) => {
                if is_latest(&self.eval_seq, token) {
                    self.store.dispatch(SessionAction::SetEvaluationResults(
                        response.results.clone(),
                    ));
                    self.store.dispatch(SessionAction::SetEvaluating(false));
                    info!(
                        job_id = %request.job_id,
                        results = response.results.len(),
                        "evaluation complete"
                    );
                } else {
                    debug!("stale evaluation response dropped");
                }
                Ok(response.results)
            }
            Err(err) => {
                if is_latest(&self.eval_seq, token) {
                    self.store.dispatch(SessionAction::SetEvaluating(false));
                }
                warn!(error = %err, "evaluation failed; prior results kept");
                Err(err.into())
            }
        }
    }
}

fn acquire(guard: &AtomicBool, target: &'static str) -> Result<(), OrchestrationError> {
    guard
        .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
        .map_err(|_| OrchestrationError::Busy(target))
        .map(|_| ())
}

fn issue(seq: &AtomicU64) -> u64 {
    seq.fetch_add(1, Ordering::Relaxed) + 1
}

fn is_latest(seq: &AtomicU64, token: u64) -> bool {
    seq.load(Ordering::Relaxed) == token
}
