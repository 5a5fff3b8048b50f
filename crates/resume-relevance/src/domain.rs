use serde::{Deserialize, Serialize};

/// Job description as returned by the evaluation service. Immutable once
/// created; the session replaces it wholesale, never patches fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescription {
    pub job_id: String,
    pub title: String,
    /// Order-significant for display.
    pub must_have_skills: Vec<String>,
    pub nice_to_have: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Parsed resume record produced by a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    pub resume_id: String,
    pub name: String,
    pub filename: String,
    pub parsed_text_snippet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<String>,
}

/// Categorical match quality assigned per resume by the evaluation
/// service. The verdict always comes from the payload; it is never
/// derived client-side (see [`Verdict::from_score`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    High,
    Medium,
    Low,
}

impl Verdict {
    pub const fn label(self) -> &'static str {
        match self {
            Verdict::High => "High",
            Verdict::Medium => "Medium",
            Verdict::Low => "Low",
        }
    }

    /// Score-to-verdict mapping carried over from the service's rubric
    /// (High >= 75, Medium >= 50). Deliberately NOT used by the results
    /// pipeline: the verdict on a result trusts the payload, and wiring
    /// this in would change behavior for payloads where the two
    /// disagree.
    pub const fn from_score(score: i32) -> Self {
        if score >= SCORE_THRESHOLD_HIGH {
            Verdict::High
        } else if score >= SCORE_THRESHOLD_MEDIUM {
            Verdict::Medium
        } else {
            Verdict::Low
        }
    }
}

pub const SCORE_THRESHOLD_HIGH: i32 = 75;
pub const SCORE_THRESHOLD_MEDIUM: i32 = 50;

/// Per-resume evaluation outcome. `resume_id` is expected to reference a
/// resume uploaded in the same session, but nothing enforces it; a
/// result for an unknown resume renders with whatever fields it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub resume_id: String,
    pub name: String,
    /// Conventionally 0..=100.
    pub score: i32,
    pub verdict: Verdict,
    /// Set-like; rendered as tags, order not semantically meaningful.
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub feedback: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Request body for `POST /evaluate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub job_id: String,
    pub resume_ids: Vec<String>,
}

/// Response body for `POST /resumes/upload`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub uploaded: Vec<Resume>,
}

/// Response body for `POST /evaluate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResponse {
    pub results: Vec<EvaluationResult>,
}

/// Response body for `GET /results`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResults {
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub results: Vec<EvaluationResult>,
}

/// Human-readable file size for upload listings.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exponent = (bytes as f64).log(1024.0).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;
    // Trim trailing zeros the way a float display would.
    let text = format!("{rounded}");
    format!("{text} {}", UNITS[exponent])
}

/// Permissive syntactic email check used by upload listings; not a
/// deliverability guarantee.
pub fn looks_like_email(value: &str) -> bool {
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    if domain.contains('@') || domain.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Truncates to `max_chars` characters with a `...` marker when longer.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{truncated}...")
}
