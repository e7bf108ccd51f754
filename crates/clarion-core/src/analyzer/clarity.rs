use super::{keyword_pattern, word_count};
use crate::{ClarityFactor, ClarityScore, FactorScores, ScoringConfig};
use regex::Regex;
use std::sync::LazyLock;

static ACTION_VERB: LazyLock<Regex> = LazyLock::new(|| {
    keyword_pattern(
        r"create|build|implement|analy[sz]e|design|write|calculate|develop|make|generate|fix|refactor|optimi[sz]e|explain|help\s+(?:me\s+)?with",
    )
});

static BACKGROUND_FRAGMENT: LazyLock<Regex> =
    LazyLock::new(|| keyword_pattern(r"\b(?:using|with|for|in|on|my|our|the)\s+\w+"));

static DELIVERABLE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    keyword_pattern(r"code|markdown|json|csv|list|table|document|script|function")
});

static CONSTRAINT_LANGUAGE: LazyLock<Regex> = LazyLock::new(|| {
    keyword_pattern(r"must|should|need|require|ensure|with\b.*test|accessible|secure")
});

static TECHNOLOGY: LazyLock<Regex> = LazyLock::new(|| {
    keyword_pattern(r"react|python|node|sql|api|database|framework|library|version")
});

/// A condition on the request text worth partial credit toward one factor.
#[derive(Debug, Clone, Copy)]
pub enum Signal {
    /// The text matches a keyword pattern
    Mentions(&'static Regex),
    /// The text has more than this many characters
    LongerThan(usize),
    /// The text has more than this many words
    MoreWordsThan(usize),
}

impl Signal {
    fn holds(self, text: &str) -> bool {
        match self {
            Self::Mentions(pattern) => pattern.is_match(text),
            Self::LongerThan(chars) => text.chars().count() > chars,
            Self::MoreWordsThan(words) => word_count(text) > words,
        }
    }
}

/// One row of the scoring table: a factor, its weight and its credited signals.
#[derive(Debug, Clone)]
pub struct FactorRule {
    /// Factor scored by this row
    pub factor: ClarityFactor,
    /// Share of the total contributed by a full sub-score
    pub weight: f64,
    /// Signals and the fraction of the sub-score each one earns
    pub signals: Vec<(Signal, f64)>,
}

impl FactorRule {
    /// Unweighted sub-score in `[0, 1]`.
    pub fn sub_score(&self, text: &str) -> f64 {
        self.signals
            .iter()
            .filter(|(signal, _)| signal.holds(text))
            .map(|(_, credit)| credit)
            .sum::<f64>()
            .clamp(0.0, 1.0)
    }
}

/// Computes the weighted clarity score of a request.
#[derive(Debug, Clone)]
pub struct ClarityScorer {
    rules: Vec<FactorRule>,
}

impl Default for ClarityScorer {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}

impl ClarityScorer {
    /// Builds the scoring table from configured weights and thresholds.
    pub fn new(config: &ScoringConfig) -> Self {
        let rules = vec![
            FactorRule {
                factor: ClarityFactor::Goal,
                weight: config.goal_weight,
                signals: vec![
                    (Signal::Mentions(LazyLock::force(&ACTION_VERB)), 0.8),
                    (Signal::LongerThan(config.goal_min_chars), 0.2),
                ],
            },
            FactorRule {
                factor: ClarityFactor::Context,
                weight: config.context_weight,
                signals: vec![
                    (Signal::Mentions(LazyLock::force(&BACKGROUND_FRAGMENT)), 0.5),
                    (Signal::MoreWordsThan(config.context_min_words), 0.5),
                ],
            },
            FactorRule {
                factor: ClarityFactor::Format,
                weight: config.format_weight,
                signals: vec![(Signal::Mentions(LazyLock::force(&DELIVERABLE_SHAPE)), 1.0)],
            },
            FactorRule {
                factor: ClarityFactor::Criteria,
                weight: config.criteria_weight,
                signals: vec![(Signal::Mentions(LazyLock::force(&CONSTRAINT_LANGUAGE)), 1.0)],
            },
            FactorRule {
                factor: ClarityFactor::Technical,
                weight: config.technical_weight,
                signals: vec![(Signal::Mentions(LazyLock::force(&TECHNOLOGY)), 1.0)],
            },
        ];
        Self { rules }
    }

    /// The scoring table, one row per factor.
    pub fn rules(&self) -> &[FactorRule] {
        &self.rules
    }

    /// Score a request. The total is clamped to `[0, 1]` and left unrounded.
    pub fn score(&self, text: &str) -> ClarityScore {
        let mut factors = FactorScores::default();
        let mut total = 0.0;
        for rule in &self.rules {
            let sub_score = rule.sub_score(text);
            factors.set(rule.factor, sub_score);
            total = sub_score.mul_add(rule.weight, total);
        }

        ClarityScore {
            total: total.clamp(0.0, 1.0),
            factors,
        }
    }
}
