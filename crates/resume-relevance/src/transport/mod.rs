//! Transport client: the boundary translating domain operations into
//! wire calls against the evaluation service, with a transparent
//! in-process mock fallback. Every runtime failure is normalized into a
//! [`TransportError`] carrying a human-readable message; operations
//! never panic for network-level conditions.

use std::time::Duration;

use rand::Rng;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{
    EvaluationRequest, EvaluationResponse, JobDescription, PaginatedResults, UploadResponse,
};
use crate::session::Settings;

pub mod fixtures;
pub mod mock;
pub mod validate;

pub use mock::MockBackend;

const MOCK_JITTER_MS: std::ops::RangeInclusive<u64> = 500..=1500;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response; `message` is taken from the server body when it
    /// carries one, otherwise `HTTP error! status: N`.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("invalid upload: {0}")]
    InvalidFile(String),

    #[error("mock endpoint not implemented: {method} {endpoint}")]
    UnimplementedEndpoint { method: String, endpoint: String },
}

/// File payload submitted through an upload operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }
}

/// Explicit client configuration. There is no process-global client:
/// reconfiguration goes through [`ApiClient::update_config`] and only
/// affects calls issued afterwards, never in-flight ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub use_mock: bool,
}

impl From<&Settings> for ClientConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            base_url: settings.api_base_url.clone(),
            api_key: settings.api_key.clone(),
            use_mock: settings.use_mock_data,
        }
    }
}

pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    mock: MockBackend,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            mock: MockBackend::default(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(ClientConfig::from(settings))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Replaces the client configuration for subsequent calls.
    pub fn update_config(&mut self, config: ClientConfig) {
        debug!(use_mock = config.use_mock, base_url = %config.base_url, "client reconfigured");
        self.config = config;
    }

    /// Uploads a job description as a file or as pasted text.
    ///
    /// # Panics
    ///
    /// Panics when neither `file` nor `text` is supplied. That is
    /// caller misuse rather than a runtime failure, and the one
    /// deliberate deviation from returning `TransportError`.
    pub async fn upload_job_description(
        &self,
        file: Option<UploadFile>,
        text: Option<&str>,
    ) -> Result<JobDescription, TransportError> {
        match (file, text) {
            (Some(file), _) => {
                validate::validate_jd_file(&file)?;
                if self.config.use_mock {
                    self.mock_latency().await;
                    return self.mock.upload_job_description().await;
                }
                let form = Form::new().part(
                    "file",
                    Part::bytes(file.bytes).file_name(file.filename.clone()),
                );
                // No explicit content-type: reqwest must set the
                // multipart boundary itself.
                let request = self
                    .http
                    .post(self.endpoint("/jd/upload"))
                    .multipart(form);
                self.send(request).await
            }
            (None, Some(text)) => {
                if self.config.use_mock {
                    self.mock_latency().await;
                    return self.mock.upload_job_description().await;
                }
                let request = self
                    .http
                    .post(self.endpoint("/jd/upload"))
                    .json(&serde_json::json!({ "text": text }));
                self.send(request).await
            }
            (None, None) => panic!("upload_job_description: either file or text must be provided"),
        }
    }

    /// Uploads one or more resume files.
    pub async fn upload_resumes(
        &self,
        files: Vec<UploadFile>,
    ) -> Result<UploadResponse, TransportError> {
        for file in &files {
            validate::validate_resume_file(file)?;
        }
        if self.config.use_mock {
            self.mock_latency().await;
            return self.mock.upload_resumes().await;
        }
        let mut form = Form::new();
        for file in files {
            form = form.part(
                "files",
                Part::bytes(file.bytes).file_name(file.filename.clone()),
            );
        }
        let request = self
            .http
            .post(self.endpoint("/resumes/upload"))
            .multipart(form);
        self.send(request).await
    }

    /// Requests an evaluation of the given resumes against a job.
    pub async fn evaluate_resumes(
        &self,
        request: &EvaluationRequest,
    ) -> Result<EvaluationResponse, TransportError> {
        if self.config.use_mock {
            self.mock_latency().await;
            return self.mock.evaluate_resumes(request).await;
        }
        let request = self.http.post(self.endpoint("/evaluate")).json(request);
        self.send(request).await
    }

    /// Paginated results query. Available on the client even though the
    /// current front end drives the table from session state instead.
    pub async fn get_results(
        &self,
        job_id: &str,
        page: usize,
        filter: Option<&str>,
        search: Option<&str>,
    ) -> Result<PaginatedResults, TransportError> {
        if self.config.use_mock {
            self.mock_latency().await;
            return self.mock.get_results(job_id, page, filter, search).await;
        }
        let mut query: Vec<(&str, String)> = vec![
            ("job_id", job_id.to_string()),
            ("page", page.to_string()),
        ];
        if let Some(filter) = filter {
            query.push(("filter", filter.to_string()));
        }
        if let Some(search) = search {
            query.push(("search", search.to_string()));
        }
        let request = self.http.get(self.endpoint("/results")).query(&query);
        self.send(request).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, TransportError> {
        let request = match &self.config.api_key {
            Some(key) => request.header("x-api-key", key),
            None => request,
        };
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Api {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &body),
            });
        }
        response.json::<T>().await.map_err(TransportError::Decode)
    }

    /// Emulated network latency on the mock path, uniformly randomized.
    async fn mock_latency(&self) {
        let millis = rand::thread_rng().gen_range(MOCK_JITTER_MS);
        tokio::time::sleep(Duration::from_millis(millis)).await;
    }
}

/// Pulls a human-readable message out of an error body, preferring the
/// service's `message`/`error` fields.
fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }
    }
    format!("HTTP error! status: {status}")
}
