use super::keyword_pattern;
use crate::{RiskFlag, RiskFlagSet};
use regex::Regex;
use std::sync::LazyLock;

static SECURITY: LazyLock<Regex> = LazyLock::new(|| {
    keyword_pattern(
        r"password|auth|login|token|secret|key|credential|hack|exploit|vulnerabilit",
    )
});

static PRIVACY: LazyLock<Regex> = LazyLock::new(|| {
    keyword_pattern(r"email|phone|address|ssn|personal\s+data|pii|gdpr")
});

static POLICY: LazyLock<Regex> = LazyLock::new(|| {
    keyword_pattern(r"fake|bypass|circumvent|illegal|hack\s+into|crack|steal")
});

static SAFETY: LazyLock<Regex> = LazyLock::new(|| {
    keyword_pattern(r"harm|dangerous|weapon|explosive|poison|drug")
});

static COMPLIANCE: LazyLock<Regex> = LazyLock::new(|| {
    keyword_pattern(
        r"medical\s+advice|legal\s+advice|financial\s+advice|tax|investment\s+recommendation",
    )
});

fn pattern_for(flag: RiskFlag) -> &'static Regex {
    let pattern = match flag {
        RiskFlag::Security => &SECURITY,
        RiskFlag::Privacy => &PRIVACY,
        RiskFlag::Policy => &POLICY,
        RiskFlag::Safety => &SAFETY,
        RiskFlag::Compliance => &COMPLIANCE,
    };
    LazyLock::force(pattern)
}

/// Flags concern categories in a request. Flags are independent of each other.
#[derive(Debug, Default, Clone, Copy)]
pub struct RiskDetector;

impl RiskDetector {
    /// Whether a single flag's predicate holds for the text.
    pub fn is_flagged(&self, text: &str, flag: RiskFlag) -> bool {
        pattern_for(flag).is_match(text)
    }

    /// Evaluate every flag predicate and collect the ones that hold, in detection order.
    pub fn detect(&self, text: &str) -> RiskFlagSet {
        RiskFlag::ALL
            .into_iter()
            .filter(|flag| self.is_flagged(text, *flag))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> Vec<RiskFlag> {
        RiskDetector.detect(text).as_slice().to_vec()
    }

    #[test]
    fn test_no_flags() {
        assert!(detect("").is_empty());
        assert!(detect("Write a poem about autumn").is_empty());
    }

    #[test]
    fn test_each_flag() {
        assert_eq!(detect("reset my password"), [RiskFlag::Security]);
        assert_eq!(detect("store the customer's phone number"), [RiskFlag::Privacy]);
        assert_eq!(detect("generate fake IDs for minors"), [RiskFlag::Policy]);
        assert_eq!(detect("is this mushroom dangerous"), [RiskFlag::Safety]);
        assert_eq!(detect("give me legal advice on my lease"), [RiskFlag::Compliance]);
    }

    #[test]
    fn test_flags_accumulate_in_detection_order() {
        let flags = detect(
            "Give me financial advice on how to hack into an email server, \
             steal passwords and build a weapon",
        );
        assert_eq!(
            flags,
            [
                RiskFlag::Security,
                RiskFlag::Privacy,
                RiskFlag::Policy,
                RiskFlag::Safety,
                RiskFlag::Compliance,
            ]
        );
    }

    #[test]
    fn test_case_insensitive_and_inflected() {
        assert_eq!(detect("Rotate the JWT TOKENS"), [RiskFlag::Security]);
        assert_eq!(detect("GDPR rules for our app"), [RiskFlag::Privacy]);
    }

    #[test]
    fn test_keywords_match_inside_words() {
        // "syntax" contains "tax", "pharmacy" contains "harm"
        assert_eq!(detect("explain this syntax"), [RiskFlag::Compliance]);
        assert_eq!(detect("find a pharmacy nearby"), [RiskFlag::Safety]);
    }
}
