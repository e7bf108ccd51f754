//! Request analysis: domain classification, clarity scoring, risk detection and
//! clarifying questions.
//!
//! Every analyzer is a pure function of the request text. Keyword patterns are
//! compiled once into process-wide statics and matched case-insensitively as
//! substrings, so `pharmacy` contains `harm` and `build` contains `ui`. Patterns
//! spell out `\b` themselves where a token only makes sense as a whole word.

/// Weighted clarity scoring
pub mod clarity;
/// Ordered first-match domain classification
pub mod domain;
/// Clarifying question generation
pub mod questions;
/// Risk flag detection
pub mod risk;

use regex::{Regex, RegexBuilder};

pub use clarity::{ClarityScorer, FactorRule, Signal};
pub use domain::{DomainClassifier, DomainRule};
pub use questions::QuestionGenerator;
pub use risk::RiskDetector;

/// Compiles a case-insensitive keyword alternation matched anywhere in the text.
///
/// `alternation` is a regex fragment such as `code|debug|create.*app`.
fn keyword_pattern(alternation: &str) -> Regex {
    let pattern = format!(r"(?:{alternation})");
    match RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
    {
        Ok(regex) => regex,
        Err(err) => panic!("Keyword pattern is invalid: {pattern}: {err}"),
    }
}

/// Whitespace-separated word count.
pub(crate) fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_pattern_matches_substrings() {
        let pattern = keyword_pattern("password|ui");
        assert!(pattern.is_match("Store PASSWORDS safely"));
        assert!(pattern.is_match("a ui mockup"));
        assert!(pattern.is_match("build it"));
        assert!(!pattern.is_match("a plain sketch"));
    }

    #[test]
    fn test_explicit_boundaries_are_kept() {
        let pattern = keyword_pattern(r"\bgo\b");
        assert!(pattern.is_match("written in Go"));
        assert!(!pattern.is_match("a good plan"));
    }

    #[test]
    fn test_keyword_pattern_spans_lines() {
        let pattern = keyword_pattern(r"create.*app");
        assert!(pattern.is_match("Create a small\nweather app"));
        assert!(!pattern.is_match("create a report"));
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("  build   a\tdashboard \n"), 3);
    }
}
