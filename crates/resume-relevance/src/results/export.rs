//! CSV export for the currently filtered and sorted results view.
//!
//! Fields are always quoted and embedded quote characters are escaped
//! by the writer; the original dashboard's hand-rolled join skipped
//! that, which broke on feedback containing quotes.

use std::io::Write;

use crate::domain::{truncate_text, EvaluationResult};

/// Maximum feedback length in the export before truncation with `...`.
pub const FEEDBACK_EXPORT_LIMIT: usize = 100;

const HEADERS: [&str; 7] = [
    "Name",
    "Email",
    "Score",
    "Verdict",
    "Matched Skills",
    "Missing Skills",
    "Feedback Summary",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("export io failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Serializes the given rows (already filtered and sorted by the
/// pipeline — the export never reaches back to the unfiltered set) to
/// `writer` in a fixed column order.
pub fn write_csv<W: Write>(rows: &[EvaluationResult], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);

    csv_writer.write_record(HEADERS)?;
    for row in rows {
        csv_writer.write_record([
            row.name.as_str(),
            row.email.as_deref().unwrap_or("N/A"),
            &row.score.to_string(),
            row.verdict.label(),
            &row.matched_skills.join("; "),
            &row.missing_skills.join("; "),
            &truncate_text(&row.feedback, FEEDBACK_EXPORT_LIMIT),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Renders the export in memory; the caller decides where it lands
/// (the CLI writes a `.csv` file).
pub fn to_csv_string(rows: &[EvaluationResult]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_csv(rows, &mut buffer)?;
    Ok(String::from_utf8(buffer).expect("csv writer emits utf-8"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Verdict;

    fn row(name: &str, email: Option<&str>, feedback: &str) -> EvaluationResult {
        EvaluationResult {
            resume_id: "r1".to_string(),
            name: name.to_string(),
            score: 88,
            verdict: Verdict::High,
            matched_skills: vec!["SQL".to_string(), "Go".to_string()],
            missing_skills: vec!["Kubernetes".to_string()],
            feedback: feedback.to_string(),
            email: email.map(str::to_string),
            phone: None,
        }
    }

    #[test]
    fn header_order_is_fixed() {
        let csv = to_csv_string(&[]).expect("empty export");
        assert_eq!(
            csv.trim_end(),
            "\"Name\",\"Email\",\"Score\",\"Verdict\",\"Matched Skills\",\"Missing Skills\",\"Feedback Summary\""
        );
    }

    #[test]
    fn skills_join_with_semicolon_space_and_long_feedback_truncates() {
        let feedback = "y".repeat(150);
        let csv = to_csv_string(&[row("Ada", Some("ada@example.com"), &feedback)])
            .expect("export");
        let data_line = csv.lines().nth(1).expect("one data row");
        assert!(data_line.contains("\"SQL; Go\""));
        let expected_feedback = format!("\"{}...\"", "y".repeat(100));
        assert!(data_line.ends_with(&expected_feedback));
    }

    #[test]
    fn missing_email_exports_as_na() {
        let csv = to_csv_string(&[row("Ada", None, "fine")]).expect("export");
        assert!(csv.lines().nth(1).expect("row").contains("\"N/A\""));
    }

    #[test]
    fn embedded_quotes_are_escaped() {
        let csv = to_csv_string(&[row("Ada", None, "called a \"perfect\" fit")])
            .expect("export");
        let data_line = csv.lines().nth(1).expect("row");
        assert!(data_line.contains("\"called a \"\"perfect\"\" fit\""));
    }

    #[test]
    fn short_feedback_is_untouched() {
        let csv = to_csv_string(&[row("Ada", None, "concise")]).expect("export");
        assert!(csv.lines().nth(1).expect("row").ends_with("\"concise\""));
    }
}
