//! Filter values and the evaluators that apply them to cells.
//!
//! Two strategies share the [`FilterEvaluator`] contract:
//!
//! - [`RangeTextEvaluator`]: inclusive range containment for numeric columns,
//!   substring containment for text columns (case-insensitive unless configured).
//! - [`FuzzyEvaluator`]: approximate matching backed by `fuzzy-matcher`'s
//!   skim algorithm. A value passes when its score is above a fixed threshold.
//!
//! The grid decides how a cell is presented to an evaluator from the column's
//! declared kind ([`Subject::Numeric`] or [`Subject::Text`]), so evaluators
//! never guess whether a column is numeric.
//!
//! Malformed filters never reject rows: a non-numeric text filter on a numeric
//! column, a range on a text column, or a range whose minimum exceeds its
//! maximum all behave as "no filter".

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::fmt;

/// Scores at or below this value are rejected by the default fuzzy evaluator.
pub const DEFAULT_FUZZY_THRESHOLD: i64 = 0;

/// The value a user filtered a column by.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Text typed into a column or global filter box.
    Text(String),
    /// Inclusive numeric bounds; `None` means unbounded on that side.
    Range {
        /// Lower bound.
        min: Option<f64>,
        /// Upper bound.
        max: Option<f64>,
    },
}

impl FilterValue {
    /// Creates a text filter.
    pub fn text(s: impl Into<String>) -> Self {
        FilterValue::Text(s.into())
    }

    /// Creates a range filter from optional bounds.
    pub fn range(min: Option<f64>, max: Option<f64>) -> Self {
        FilterValue::Range { min, max }
    }

    /// Builds a range from raw min/max input boxes.
    ///
    /// Empty or non-numeric input becomes an absent bound.
    ///
    /// ```rust
    /// use bubbletea_datagrid::filter::FilterValue;
    ///
    /// assert_eq!(
    ///     FilterValue::range_from_input("15", "abc"),
    ///     FilterValue::range(Some(15.0), None)
    /// );
    /// ```
    pub fn range_from_input(min: &str, max: &str) -> Self {
        FilterValue::Range {
            min: parse_bound(min),
            max: parse_bound(max),
        }
    }

    /// Returns true if the filter cannot exclude anything and should not be stored.
    pub fn is_unconstrained(&self) -> bool {
        match self {
            FilterValue::Text(s) => s.is_empty(),
            FilterValue::Range { min, max } => min.is_none() && max.is_none(),
        }
    }
}

impl FilterValue {
    /// Returns true if [`RangeTextEvaluator`] could reject a cell of a column
    /// of this kind with this filter.
    ///
    /// Ranges only narrow numeric columns and only when they are not inverted.
    /// Text narrows text columns when non-empty, and numeric columns only when
    /// it parses as a number.
    ///
    /// ```rust
    /// use bubbletea_datagrid::filter::FilterValue;
    ///
    /// assert!(FilterValue::range(Some(1.0), None).constrains(true));
    /// assert!(!FilterValue::range(Some(1.0), None).constrains(false));
    /// assert!(!FilterValue::range(Some(5.0), Some(1.0)).constrains(true));
    /// assert!(!FilterValue::text("abc").constrains(true));
    /// assert!(FilterValue::text("abc").constrains(false));
    /// ```
    pub fn constrains(&self, numeric: bool) -> bool {
        match self {
            FilterValue::Text(s) if numeric => parse_bound(s).is_some(),
            FilterValue::Text(s) => !s.is_empty(),
            FilterValue::Range { min, max } => {
                let inverted = matches!((min, max), (Some(lo), Some(hi)) if lo > hi);
                numeric && (min.is_some() || max.is_some()) && !inverted
            }
        }
    }
}

fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// A cell as seen by an evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Subject<'a> {
    /// The cell of a numeric column; `None` when the row has no number there.
    Numeric(Option<f64>),
    /// The rendered text of a text, date or custom column.
    Text(&'a str),
}

/// Decides whether a cell satisfies a filter.
pub trait FilterEvaluator: fmt::Debug + Send + Sync {
    /// Returns true if `subject` passes `filter`.
    fn evaluate(&self, subject: Subject<'_>, filter: &FilterValue) -> bool;

    /// Scores a passing cell; `None` means the cell does not pass.
    ///
    /// The grid keeps the best score per row as that row's rank. Evaluators
    /// without a notion of similarity score every passing cell as 0.
    fn score(&self, subject: Subject<'_>, filter: &FilterValue) -> Option<i64> {
        self.evaluate(subject, filter).then_some(0)
    }
}

fn range_contains(value: Option<f64>, min: Option<f64>, max: Option<f64>) -> bool {
    if let (Some(lo), Some(hi)) = (min, max) {
        if lo > hi {
            return true;
        }
    }
    if min.is_none() && max.is_none() {
        return true;
    }
    let Some(v) = value else {
        return false;
    };
    min.map_or(true, |lo| lo <= v) && max.map_or(true, |hi| v <= hi)
}

fn exact_number(value: Option<f64>, filter: &str) -> bool {
    match parse_bound(filter) {
        Some(wanted) => value == Some(wanted),
        None => true,
    }
}

/// Range containment for numeric cells and substring containment for text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeTextEvaluator {
    case_sensitive: bool,
}

impl RangeTextEvaluator {
    /// Case-insensitive text matching.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text case policy (builder pattern).
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Whether text matching is case-sensitive.
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

impl FilterEvaluator for RangeTextEvaluator {
    fn evaluate(&self, subject: Subject<'_>, filter: &FilterValue) -> bool {
        match (subject, filter) {
            (Subject::Numeric(v), FilterValue::Range { min, max }) => range_contains(v, *min, *max),
            (Subject::Numeric(v), FilterValue::Text(s)) => exact_number(v, s),
            (Subject::Text(t), FilterValue::Text(s)) => {
                if s.is_empty() {
                    true
                } else if self.case_sensitive {
                    t.contains(s.as_str())
                } else {
                    t.to_lowercase().contains(&s.to_lowercase())
                }
            }
            (Subject::Text(_), FilterValue::Range { .. }) => true,
        }
    }
}

/// Approximate matching with the skim V2 algorithm, case-insensitive.
///
/// Scoring rewards consecutive and word-boundary matches, so an exact or
/// contiguous match always outranks a scattered subsequence of the same query.
/// A value sharing no subsequence with the query has no score and never passes.
pub struct FuzzyEvaluator {
    matcher: SkimMatcherV2,
    threshold: i64,
}

impl fmt::Debug for FuzzyEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuzzyEvaluator")
            .field("threshold", &self.threshold)
            .finish()
    }
}

impl Default for FuzzyEvaluator {
    fn default() -> Self {
        Self::new(DEFAULT_FUZZY_THRESHOLD)
    }
}

impl FuzzyEvaluator {
    /// Creates an evaluator accepting scores strictly above `threshold`.
    pub fn new(threshold: i64) -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
            threshold,
        }
    }

    /// The acceptance threshold.
    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    /// Scores `text` against `query`, `None` when it does not match at all.
    pub fn rank(&self, text: &str, query: &str) -> Option<i64> {
        self.matcher.fuzzy_match(text, query)
    }

    /// Like [`rank`](Self::rank) but only returns scores that pass the threshold.
    pub fn passing_rank(&self, text: &str, query: &str) -> Option<i64> {
        self.rank(text, query).filter(|score| *score > self.threshold)
    }

    /// Character indices of `text` matched by `query`, for highlighting.
    pub fn indices(&self, text: &str, query: &str) -> Option<Vec<usize>> {
        self.matcher
            .fuzzy_indices(text, query)
            .map(|(_, indices)| indices)
    }
}

impl FilterEvaluator for FuzzyEvaluator {
    fn evaluate(&self, subject: Subject<'_>, filter: &FilterValue) -> bool {
        match (subject, filter) {
            (Subject::Numeric(v), FilterValue::Range { min, max }) => range_contains(v, *min, *max),
            (_, FilterValue::Range { .. }) => true,
            (_, FilterValue::Text(q)) if q.is_empty() => true,
            (Subject::Numeric(v), FilterValue::Text(q)) => {
                let text = v.map(|n| n.to_string()).unwrap_or_default();
                self.passing_rank(&text, q).is_some()
            }
            (Subject::Text(t), FilterValue::Text(q)) => self.passing_rank(t, q).is_some(),
        }
    }

    fn score(&self, subject: Subject<'_>, filter: &FilterValue) -> Option<i64> {
        match (subject, filter) {
            (_, FilterValue::Text(q)) if !q.is_empty() => match subject {
                Subject::Text(t) => self.passing_rank(t, q),
                Subject::Numeric(v) => {
                    let text = v.map(|n| n.to_string()).unwrap_or_default();
                    self.passing_rank(&text, q)
                }
            },
            _ => self.evaluate(subject, filter).then_some(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_inclusive_bounds() {
        let e = RangeTextEvaluator::new();
        let f = FilterValue::range(Some(15.0), Some(25.0));
        assert!(!e.evaluate(Subject::Numeric(Some(10.0)), &f));
        assert!(e.evaluate(Subject::Numeric(Some(15.0)), &f));
        assert!(e.evaluate(Subject::Numeric(Some(20.0)), &f));
        assert!(e.evaluate(Subject::Numeric(Some(25.0)), &f));
        assert!(!e.evaluate(Subject::Numeric(Some(30.0)), &f));
    }

    #[test]
    fn test_range_open_bounds() {
        let e = RangeTextEvaluator::new();
        assert!(e.evaluate(Subject::Numeric(Some(1e9)), &FilterValue::range(Some(5.0), None)));
        assert!(!e.evaluate(Subject::Numeric(Some(4.0)), &FilterValue::range(Some(5.0), None)));
        assert!(e.evaluate(Subject::Numeric(Some(-3.0)), &FilterValue::range(None, Some(0.0))));
        assert!(e.evaluate(Subject::Numeric(None), &FilterValue::range(None, None)));
        assert!(!e.evaluate(Subject::Numeric(None), &FilterValue::range(Some(0.0), None)));
    }

    #[test]
    fn test_malformed_filters_do_not_exclude() {
        let e = RangeTextEvaluator::new();
        // Non-numeric text on a numeric column.
        assert!(e.evaluate(Subject::Numeric(Some(3.0)), &FilterValue::text("abc")));
        // Range on a text column.
        assert!(e.evaluate(Subject::Text("Bob"), &FilterValue::range(Some(1.0), Some(2.0))));
        // Inverted range.
        assert!(e.evaluate(Subject::Numeric(Some(3.0)), &FilterValue::range(Some(9.0), Some(1.0))));
    }

    #[test]
    fn test_numeric_text_filter_matches_exactly() {
        let e = RangeTextEvaluator::new();
        assert!(e.evaluate(Subject::Numeric(Some(20.0)), &FilterValue::text(" 20 ")));
        assert!(!e.evaluate(Subject::Numeric(Some(21.0)), &FilterValue::text("20")));
    }

    #[test]
    fn test_text_case_policy() {
        let insensitive = RangeTextEvaluator::new();
        let sensitive = RangeTextEvaluator::new().with_case_sensitive(true);
        let f = FilterValue::text("ali");
        assert!(insensitive.evaluate(Subject::Text("Alice"), &f));
        assert!(!sensitive.evaluate(Subject::Text("Alice"), &f));
        assert!(sensitive.evaluate(Subject::Text("Malice"), &f));
    }

    #[test]
    fn test_range_from_input() {
        assert_eq!(
            FilterValue::range_from_input("", " 7.5"),
            FilterValue::range(None, Some(7.5))
        );
        assert!(FilterValue::range_from_input("x", "NaN").is_unconstrained());
        assert!(FilterValue::text("").is_unconstrained());
        assert!(!FilterValue::text("a").is_unconstrained());
    }

    #[test]
    fn test_fuzzy_exact_match_passes() {
        let e = FuzzyEvaluator::default();
        for word in ["Alice", "a", "bob@example.com", "Carol Danvers"] {
            assert!(e.evaluate(Subject::Text(word), &FilterValue::text(word)), "{word}");
        }
    }

    #[test]
    fn test_fuzzy_unrelated_never_passes() {
        let e = FuzzyEvaluator::default();
        assert!(!e.evaluate(Subject::Text("Bob"), &FilterValue::text("xyz")));
        assert!(e.rank("Bob", "xyz").is_none());
    }

    #[test]
    fn test_fuzzy_is_case_insensitive() {
        let e = FuzzyEvaluator::default();
        assert!(e.evaluate(Subject::Text("alice"), &FilterValue::text("ALICE")));
        assert!(e.evaluate(Subject::Text("ALICE"), &FilterValue::text("alice")));
    }

    #[test]
    fn test_fuzzy_contiguous_outranks_scattered() {
        let e = FuzzyEvaluator::default();
        let contiguous = e.rank("xxabcxx", "abc").unwrap();
        let scattered = e.rank("xaxxbxxc", "abc").unwrap();
        assert!(contiguous > scattered);
    }

    #[test]
    fn test_fuzzy_indices() {
        let e = FuzzyEvaluator::default();
        assert_eq!(e.indices("Carol", "cl"), Some(vec![0, 4]));
        assert_eq!(e.indices("Carol", "z"), None);
    }

    #[test]
    fn test_score_matches_evaluate() {
        let fuzzy = FuzzyEvaluator::default();
        let f = FilterValue::text("car");
        assert!(fuzzy.score(Subject::Text("Carol"), &f).unwrap() > 0);
        assert_eq!(fuzzy.score(Subject::Text("Bob"), &f), None);

        let plain = RangeTextEvaluator::new();
        assert_eq!(plain.score(Subject::Text("Carol"), &f), Some(0));
        assert_eq!(plain.score(Subject::Text("Bob"), &f), None);
    }

    #[test]
    fn test_fuzzy_numeric_subject() {
        let e = FuzzyEvaluator::default();
        assert!(e.evaluate(Subject::Numeric(Some(120.0)), &FilterValue::text("12")));
        assert!(!e.evaluate(Subject::Numeric(None), &FilterValue::text("12")));
        assert!(e.evaluate(Subject::Numeric(Some(5.0)), &FilterValue::range(Some(1.0), Some(9.0))));
    }
}
