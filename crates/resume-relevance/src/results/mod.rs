//! Results presentation pipeline: a pure, deterministic derivation of a
//! filtered and sorted view over the evaluation results held in the
//! session, plus view-local row expansion and CSV export.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::domain::{EvaluationResult, Verdict};

pub mod export;

/// Verdict filter over the results table. `All` passes everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerdictFilter {
    #[default]
    All,
    Only(Verdict),
}

impl VerdictFilter {
    fn matches(self, verdict: Verdict) -> bool {
        match self {
            VerdictFilter::All => true,
            VerdictFilter::Only(wanted) => verdict == wanted,
        }
    }
}

/// View-local filter state; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub verdict: VerdictFilter,
    pub search: String,
    /// Accepted for parity with the wire shape but not applied by the
    /// table view.
    pub score_range: Option<(i32, i32)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Email,
    Score,
    Verdict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A single active sort column. Default view: score descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: SortKey::Score,
            direction: SortDirection::Descending,
        }
    }
}

impl SortConfig {
    /// Re-selecting the active key flips the direction; selecting a
    /// different key resets to ascending.
    pub fn toggle(self, key: SortKey) -> Self {
        if self.key == key {
            let direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
            Self { key, direction }
        } else {
            Self {
                key,
                direction: SortDirection::Ascending,
            }
        }
    }
}

/// Derives the ordered view: filter, then a stable sort. Pure and
/// side-effect free; recomputed whenever any input changes.
pub fn derive_view(
    results: &[EvaluationResult],
    filters: &FilterOptions,
    sort: &SortConfig,
) -> Vec<EvaluationResult> {
    let mut view: Vec<EvaluationResult> = results
        .iter()
        .filter(|result| filters.verdict.matches(result.verdict))
        .filter(|result| matches_search(result, &filters.search))
        .cloned()
        .collect();

    view.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, sort.key);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    view
}

fn matches_search(result: &EvaluationResult, search: &str) -> bool {
    let term = search.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    result.name.to_lowercase().contains(&term)
        || result
            .email
            .as_deref()
            .is_some_and(|email| email.to_lowercase().contains(&term))
}

fn compare_by_key(a: &EvaluationResult, b: &EvaluationResult, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => compare_strings(&a.name, &b.name),
        SortKey::Email => compare_strings(
            a.email.as_deref().unwrap_or_default(),
            b.email.as_deref().unwrap_or_default(),
        ),
        SortKey::Score => a.score.cmp(&b.score),
        // Labels compare as strings, matching the table's original
        // lexicographic behavior.
        SortKey::Verdict => compare_strings(a.verdict.label(), b.verdict.label()),
    }
}

fn compare_strings(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// The set of expanded row identifiers (`resume_id`). View-local; reset
/// whenever the underlying result set changes identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedRows {
    rows: BTreeSet<String>,
}

impl ExpandedRows {
    pub fn toggle(&mut self, resume_id: &str) {
        if !self.rows.remove(resume_id) {
            self.rows.insert(resume_id.to_string());
        }
    }

    pub fn is_expanded(&self, resume_id: &str) -> bool {
        self.rows.contains(resume_id)
    }

    /// Collapse everything; called when a new evaluation run replaces
    /// the result collection.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: &str, name: &str, email: Option<&str>, score: i32, verdict: Verdict) -> EvaluationResult {
        EvaluationResult {
            resume_id: id.to_string(),
            name: name.to_string(),
            score,
            verdict,
            matched_skills: vec![],
            missing_skills: vec![],
            feedback: String::new(),
            email: email.map(str::to_string),
            phone: None,
        }
    }

    fn sample() -> Vec<EvaluationResult> {
        vec![
            result("r1", "Sarah Chen", Some("sarah.chen@example.com"), 92, Verdict::High),
            result("r2", "Marcus Johnson", Some("marcus.j@example.com"), 78, Verdict::High),
            result("r3", "Priya Patel", Some("priya.patel@example.com"), 71, Verdict::Medium),
            result("r4", "Tom Okafor", None, 41, Verdict::Low),
        ]
    }

    #[test]
    fn verdict_filter_keeps_only_exact_matches() {
        let filters = FilterOptions {
            verdict: VerdictFilter::Only(Verdict::High),
            ..FilterOptions::default()
        };
        let view = derive_view(&sample(), &filters, &SortConfig::default());
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|r| r.verdict == Verdict::High));
    }

    #[test]
    fn search_is_trimmed_and_case_folded() {
        let filters = FilterOptions {
            search: "  SARAH  ".to_string(),
            ..FilterOptions::default()
        };
        let view = derive_view(&sample(), &filters, &SortConfig::default());
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].resume_id, "r1");
    }

    #[test]
    fn search_matches_email_and_skips_missing_email() {
        let filters = FilterOptions {
            search: "example.com".to_string(),
            ..FilterOptions::default()
        };
        let view = derive_view(&sample(), &filters, &SortConfig::default());
        // Tom Okafor has no email and his name does not match.
        assert_eq!(view.len(), 3);
        assert!(view.iter().all(|r| r.resume_id != "r4"));
    }

    #[test]
    fn default_sort_is_score_descending() {
        let view = derive_view(&sample(), &FilterOptions::default(), &SortConfig::default());
        let scores: Vec<i32> = view.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![92, 78, 71, 41]);
    }

    #[test]
    fn opposite_directions_yield_reversed_orderings() {
        let ascending = derive_view(
            &sample(),
            &FilterOptions::default(),
            &SortConfig {
                key: SortKey::Score,
                direction: SortDirection::Ascending,
            },
        );
        let mut descending = derive_view(
            &sample(),
            &FilterOptions::default(),
            &SortConfig::default(),
        );
        descending.reverse();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn sorting_is_idempotent() {
        let sort = SortConfig::default();
        let once = derive_view(&sample(), &FilterOptions::default(), &sort);
        let twice = derive_view(&once, &FilterOptions::default(), &sort);
        assert_eq!(once, twice);
    }

    #[test]
    fn name_sort_is_case_insensitive() {
        let data = vec![
            result("r1", "ada", None, 10, Verdict::Low),
            result("r2", "Bram", None, 20, Verdict::Low),
            result("r3", "Celia", None, 30, Verdict::Low),
        ];
        let view = derive_view(
            &data,
            &FilterOptions::default(),
            &SortConfig {
                key: SortKey::Name,
                direction: SortDirection::Ascending,
            },
        );
        let names: Vec<&str> = view.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["ada", "Bram", "Celia"]);
    }

    #[test]
    fn toggle_flips_direction_then_resets_on_new_key() {
        let sort = SortConfig::default();
        let flipped = sort.toggle(SortKey::Score);
        assert_eq!(flipped.direction, SortDirection::Ascending);
        let flipped_back = flipped.toggle(SortKey::Score);
        assert_eq!(flipped_back.direction, SortDirection::Descending);

        let switched = flipped_back.toggle(SortKey::Name);
        assert_eq!(switched.key, SortKey::Name);
        assert_eq!(switched.direction, SortDirection::Ascending);
    }

    #[test]
    fn expansion_toggles_individually_and_clears() {
        let mut expanded = ExpandedRows::default();
        expanded.toggle("r1");
        expanded.toggle("r2");
        assert!(expanded.is_expanded("r1"));
        expanded.toggle("r1");
        assert!(!expanded.is_expanded("r1"));
        assert_eq!(expanded.len(), 1);
        expanded.clear();
        assert!(expanded.is_empty());
    }

    #[test]
    fn score_range_is_carried_but_not_applied() {
        let filters = FilterOptions {
            score_range: Some((80, 100)),
            ..FilterOptions::default()
        };
        let view = derive_view(&sample(), &filters, &SortConfig::default());
        assert_eq!(view.len(), sample().len());
    }
}
