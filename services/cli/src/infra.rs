use std::path::Path;

use resume_relevance::domain::{EvaluationResult, Verdict};
use resume_relevance::error::AppError;
use resume_relevance::results::{ExpandedRows, SortKey, VerdictFilter};
use resume_relevance::session::SessionState;
use resume_relevance::transport::UploadFile;

pub(crate) fn parse_verdict_filter(raw: &str) -> Result<VerdictFilter, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "all" => Ok(VerdictFilter::All),
        "high" => Ok(VerdictFilter::Only(Verdict::High)),
        "medium" => Ok(VerdictFilter::Only(Verdict::Medium)),
        "low" => Ok(VerdictFilter::Only(Verdict::Low)),
        _ => Err(format!("'{raw}' is not one of All/High/Medium/Low")),
    }
}

pub(crate) fn parse_sort_key(raw: &str) -> Result<SortKey, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "name" => Ok(SortKey::Name),
        "email" => Ok(SortKey::Email),
        "score" => Ok(SortKey::Score),
        "verdict" => Ok(SortKey::Verdict),
        _ => Err(format!("'{raw}' is not one of name/email/score/verdict")),
    }
}

pub(crate) fn read_upload_file(path: &Path) -> Result<UploadFile, AppError> {
    let bytes = std::fs::read(path)?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(UploadFile::new(filename, bytes))
}

pub(crate) fn render_stats(state: &SessionState) {
    let count = |verdict: Verdict| {
        state
            .evaluation_results
            .iter()
            .filter(|r| r.verdict == verdict)
            .count()
    };
    println!(
        "Session: {} resumes | {} high | {} medium | {} low",
        state.uploaded_resumes.len(),
        count(Verdict::High),
        count(Verdict::Medium),
        count(Verdict::Low),
    );
}

pub(crate) fn render_results_table(view: &[EvaluationResult], expanded: &ExpandedRows) {
    if view.is_empty() {
        println!("No results match the current filters.");
        return;
    }

    println!(
        "{:<24} {:<30} {:>5}  {:<7} {}",
        "Candidate", "Email", "Score", "Verdict", "Skills"
    );
    for row in view {
        println!(
            "{:<24} {:<30} {:>5}  {:<7} {} matched / {} missing",
            row.name,
            row.email.as_deref().unwrap_or("-"),
            row.score,
            row.verdict.label(),
            row.matched_skills.len(),
            row.missing_skills.len(),
        );
        if expanded.is_expanded(&row.resume_id) {
            println!("  matched: {}", row.matched_skills.join(", "));
            println!("  missing: {}", row.missing_skills.join(", "));
            println!("  feedback: {}", row.feedback);
        }
    }
}
