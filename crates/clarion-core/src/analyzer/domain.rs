use super::keyword_pattern;
use crate::DomainLabel;
use regex::Regex;
use std::sync::LazyLock;

/// One guard in the classification chain.
#[derive(Debug)]
pub struct DomainRule {
    label: DomainLabel,
    pattern: Regex,
}

impl DomainRule {
    fn new(label: DomainLabel, alternation: &str) -> Self {
        Self {
            label,
            pattern: keyword_pattern(alternation),
        }
    }

    /// Label assigned when this rule matches.
    pub fn label(&self) -> DomainLabel {
        self.label
    }

    /// Whether the request text triggers this rule.
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Guards in priority order. The first match wins, so a request mentioning both
/// `debug` and `design` is `code`.
static DOMAIN_RULES: LazyLock<[DomainRule; 7]> = LazyLock::new(|| {
    [
        DomainRule::new(
            DomainLabel::Code,
            r"code|function|api|debug|error|implement|build|create.*app|deploy|test",
        ),
        DomainRule::new(
            DomainLabel::Ux,
            r"ui|ux|design|interface|user\s+experience|accessibility|usability|wireframe",
        ),
        DomainRule::new(
            DomainLabel::Data,
            r"data|analy[sz]e|statistics|metrics|chart|graph|calculate|sql|quer(?:y|ies)",
        ),
        DomainRule::new(
            DomainLabel::Writing,
            r"writ(?:e|ing|ten)|blog|article|content|copy|email|documentation|readme",
        ),
        DomainRule::new(
            DomainLabel::Research,
            r"research|study|investigate|compare|evaluate|analy[sz]e\s+(?:the\s+)?market",
        ),
        DomainRule::new(
            DomainLabel::Finance,
            r"roi|revenue|cost|budget|financ|pricing|valuation",
        ),
        DomainRule::new(
            DomainLabel::Product,
            r"product|feature|roadmap|strategy|market\s+plan|gtm",
        ),
    ]
});

/// Maps request text to exactly one [`DomainLabel`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DomainClassifier;

impl DomainClassifier {
    /// The classification chain, in evaluation order.
    pub fn rules(&self) -> &'static [DomainRule] {
        LazyLock::force(&DOMAIN_RULES).as_slice()
    }

    /// Classify a request; returns [`DomainLabel::Misc`] when no guard matches.
    pub fn classify(&self, text: &str) -> DomainLabel {
        self.rules()
            .iter()
            .find(|rule| rule.matches(text))
            .map_or(DomainLabel::Misc, DomainRule::label)
    }
}
