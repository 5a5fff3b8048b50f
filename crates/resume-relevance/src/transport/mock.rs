//! In-memory stand-in for the remote evaluation service. Exists so the
//! rest of the system can be developed and demoed without a live
//! backend; response shapes are bit-for-bit those of the real service.

use std::time::Duration;

use chrono::Utc;
use tracing::debug;

use super::{fixtures, TransportError};
use crate::domain::{
    EvaluationRequest, EvaluationResponse, EvaluationResult, JobDescription, PaginatedResults,
    Resume, UploadResponse,
};

const JD_UPLOAD_DELAY: Duration = Duration::from_millis(800);
const RESUME_UPLOAD_DELAY: Duration = Duration::from_millis(1200);
const EVALUATE_DELAY: Duration = Duration::from_millis(2000);
const RESULTS_DELAY: Duration = Duration::from_millis(300);

/// Fixed page size for the mock `/results` query.
pub const RESULTS_PER_PAGE: usize = 10;

/// How many fixture resumes a single upload call "parses".
const UPLOAD_BATCH: usize = 5;

#[derive(Debug, Clone)]
pub struct MockBackend {
    job_descriptions: Vec<JobDescription>,
    resumes: Vec<Resume>,
    evaluation_results: Vec<EvaluationResult>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            job_descriptions: fixtures::job_descriptions(),
            resumes: fixtures::resumes(),
            evaluation_results: fixtures::evaluation_results(),
        }
    }
}

impl MockBackend {
    /// Uploaded content is ignored and the first canned job description
    /// comes back; a stand-in for real document parsing.
    pub async fn upload_job_description(&self) -> Result<JobDescription, TransportError> {
        tokio::time::sleep(JD_UPLOAD_DELAY).await;
        debug!("mock: served canned job description");
        self.job_descriptions
            .first()
            .cloned()
            .ok_or_else(Self::exhausted)
    }

    /// Ignores the submitted files and returns the first fixture
    /// resumes, stamped with a fresh upload timestamp.
    pub async fn upload_resumes(&self) -> Result<UploadResponse, TransportError> {
        tokio::time::sleep(RESUME_UPLOAD_DELAY).await;
        let stamp = Utc::now().to_rfc3339();
        let uploaded = self
            .resumes
            .iter()
            .take(UPLOAD_BATCH)
            .cloned()
            .map(|mut resume| {
                resume.uploaded_at = Some(stamp.clone());
                resume
            })
            .collect();
        Ok(UploadResponse { uploaded })
    }

    /// Filters fixture results down to the requested resume ids. No
    /// match yields an empty list, not an error.
    pub async fn evaluate_resumes(
        &self,
        request: &EvaluationRequest,
    ) -> Result<EvaluationResponse, TransportError> {
        tokio::time::sleep(EVALUATE_DELAY).await;
        let results: Vec<EvaluationResult> = self
            .evaluation_results
            .iter()
            .filter(|result| request.resume_ids.contains(&result.resume_id))
            .cloned()
            .collect();
        debug!(
            requested = request.resume_ids.len(),
            matched = results.len(),
            "mock: evaluated resumes"
        );
        Ok(EvaluationResponse { results })
    }

    /// Verdict filter, case-insensitive substring search over
    /// name/email, and page-based slicing at a fixed page size.
    pub async fn get_results(
        &self,
        _job_id: &str,
        page: usize,
        filter: Option<&str>,
        search: Option<&str>,
    ) -> Result<PaginatedResults, TransportError> {
        tokio::time::sleep(RESULTS_DELAY).await;

        let mut filtered: Vec<EvaluationResult> = self.evaluation_results.clone();

        if let Some(verdict) = filter.filter(|value| *value != "All") {
            filtered.retain(|result| result.verdict.label() == verdict);
        }

        if let Some(term) = search.filter(|value| !value.is_empty()) {
            let term = term.to_lowercase();
            filtered.retain(|result| {
                result.name.to_lowercase().contains(&term)
                    || result
                        .email
                        .as_deref()
                        .is_some_and(|email| email.to_lowercase().contains(&term))
            });
        }

        let page = page.max(1);
        let start = (page - 1) * RESULTS_PER_PAGE;
        let results = filtered
            .iter()
            .skip(start)
            .take(RESULTS_PER_PAGE)
            .cloned()
            .collect();

        Ok(PaginatedResults {
            total: filtered.len(),
            page,
            per_page: RESULTS_PER_PAGE,
            results,
        })
    }

    fn exhausted() -> TransportError {
        TransportError::UnimplementedEndpoint {
            method: "POST".to_string(),
            endpoint: "/jd/upload (no fixture data)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn job_upload_returns_first_fixture() {
        let mock = MockBackend::default();
        let job = mock.upload_job_description().await.expect("canned job");
        assert_eq!(job.job_id, "job_001");
        assert!(!job.must_have_skills.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn resume_upload_stamps_fresh_timestamp() {
        let mock = MockBackend::default();
        let response = mock.upload_resumes().await.expect("uploaded batch");
        assert_eq!(response.uploaded.len(), 5);
        assert!(response.uploaded.iter().all(|r| r.uploaded_at.is_some()));
    }

    #[tokio::test(start_paused = true)]
    async fn evaluate_filters_to_requested_ids() {
        let mock = MockBackend::default();
        let request = EvaluationRequest {
            job_id: "job_001".to_string(),
            resume_ids: vec!["resume_001".to_string(), "resume_003".to_string()],
        };
        let response = mock.evaluate_resumes(&request).await.expect("results");
        let ids: Vec<&str> = response
            .results
            .iter()
            .map(|r| r.resume_id.as_str())
            .collect();
        assert_eq!(ids, vec!["resume_001", "resume_003"]);
    }

    #[tokio::test(start_paused = true)]
    async fn evaluate_with_unknown_ids_is_empty_not_error() {
        let mock = MockBackend::default();
        let request = EvaluationRequest {
            job_id: "j1".to_string(),
            resume_ids: vec!["r1".to_string()],
        };
        let response = mock.evaluate_resumes(&request).await.expect("no error");
        assert!(response.results.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn results_query_filters_and_paginates() {
        let mock = MockBackend::default();

        let all = mock
            .get_results("job_001", 1, None, None)
            .await
            .expect("page 1");
        assert_eq!(all.per_page, RESULTS_PER_PAGE);
        assert_eq!(all.total, all.results.len());

        let high = mock
            .get_results("job_001", 1, Some("High"), None)
            .await
            .expect("high only");
        assert!(high.results.iter().all(|r| r.verdict.label() == "High"));
        assert!(high.total < all.total);

        let searched = mock
            .get_results("job_001", 1, None, Some("SARAH"))
            .await
            .expect("case-insensitive search");
        assert_eq!(searched.results.len(), 1);
        assert_eq!(searched.results[0].resume_id, "resume_001");

        let beyond = mock
            .get_results("job_001", 2, None, None)
            .await
            .expect("page past the data");
        assert!(beyond.results.is_empty());
        assert_eq!(beyond.total, all.total);
    }
}
