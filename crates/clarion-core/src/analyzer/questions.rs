use super::{keyword_pattern, word_count};
use crate::{DomainLabel, ThresholdConfig};
use regex::Regex;
use std::sync::LazyLock;

/// Product, finance and research requests shorter than this ask for more context.
const PLANNING_MIN_WORDS: usize = 15;
/// Unclassified requests shorter than this ask for more detail.
const MISC_MIN_WORDS: usize = 10;

static LANGUAGE_OR_FRAMEWORK: LazyLock<Regex> = LazyLock::new(|| {
    keyword_pattern(
        r"python|java|typescript|\brust\b|\bgo\b|golang|c\+\+|c#|ruby|\bphp\b|swift|kotlin|scala|react|\bvue\b|angular|svelte|node|django|flask|fastapi|express|spring|rails|laravel|dotnet|asp\.net",
    )
});

static COMPONENT: LazyLock<Regex> = LazyLock::new(|| {
    keyword_pattern(r"function|class|component|api|endpoint|feature|module|service|method")
});

static VERIFICATION: LazyLock<Regex> =
    LazyLock::new(|| keyword_pattern(r"test|validat|security|secure"));

static INTERFACE_AUDIENCE: LazyLock<Regex> = LazyLock::new(|| {
    keyword_pattern(r"user|audience|customer|persona|visitor|people|student|admin")
});

static PLATFORM: LazyLock<Regex> = LazyLock::new(|| {
    keyword_pattern(r"web|mobile|desktop|\bios\b|android|tablet|browser|\bapps?\b")
});

static DATA_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    keyword_pattern(
        r"csv|json|table|column|\brows?\b|schema|dataset|database|spreadsheet|excel|sql|field|record",
    )
});

static METRIC: LazyLock<Regex> = LazyLock::new(|| {
    keyword_pattern(
        r"metric|average|\bmean\b|median|\bsum\b|count|total|percent|\brate\b|growth|trend|kpi|ratio|calculat",
    )
});

static READER_AUDIENCE: LazyLock<Regex> = LazyLock::new(|| {
    keyword_pattern(
        r"audience|reader|customer|user|developer|beginner|expert|team|student|client|manager|executive",
    )
});

static LENGTH: LazyLock<Regex> = LazyLock::new(|| {
    keyword_pattern(r"word|page|paragraph|sentence|short|long|brief|concise|\d+")
});

static TONE: LazyLock<Regex> = LazyLock::new(|| {
    keyword_pattern(
        r"formal|casual|technical|friendly|professional|tone|persuasive|playful|conversational|serious|humorous",
    )
});

static TIMELINE: LazyLock<Regex> = LazyLock::new(|| {
    keyword_pattern(
        r"timeline|deadline|urgent|asap|today|tomorrow|\bdays?\b|week|month|quarter|year|\bq[1-4]\b|sprint",
    )
});

static CONTEXT_PREPOSITION: LazyLock<Regex> =
    LazyLock::new(|| keyword_pattern(r"\b(?:for|in|on|at|with|using|about|from)\b"));

/// What has to be missing from a request for a question to be asked.
#[derive(Debug, Clone, Copy)]
enum Gap {
    Lacks(&'static Regex),
    FewerWordsThan(usize),
}

impl Gap {
    fn lacks(pattern: &'static LazyLock<Regex>) -> Self {
        Self::Lacks(LazyLock::force(pattern))
    }

    fn present_in(self, text: &str) -> bool {
        match self {
            Self::Lacks(pattern) => !pattern.is_match(text),
            Self::FewerWordsThan(words) => word_count(text) < words,
        }
    }
}

fn checklist(domain: DomainLabel) -> Vec<(Gap, &'static str)> {
    match domain {
        DomainLabel::Code => vec![
            (
                Gap::lacks(&LANGUAGE_OR_FRAMEWORK),
                "What programming language or framework are you using?",
            ),
            (
                Gap::lacks(&COMPONENT),
                "What specific feature or component are you building?",
            ),
            (
                Gap::lacks(&VERIFICATION),
                "Do you need tests, validation, or specific security considerations?",
            ),
        ],
        DomainLabel::Ux => vec![
            (
                Gap::lacks(&INTERFACE_AUDIENCE),
                "Who are the target users for this interface?",
            ),
            (
                Gap::lacks(&PLATFORM),
                "What platform is this for (web, mobile, desktop)?",
            ),
        ],
        DomainLabel::Data => vec![
            (
                Gap::lacks(&DATA_SHAPE),
                "What is the shape/structure of your data?",
            ),
            (
                Gap::lacks(&METRIC),
                "What specific metrics or calculations do you need?",
            ),
        ],
        DomainLabel::Writing => vec![
            (Gap::lacks(&READER_AUDIENCE), "Who is the target audience?"),
            (
                Gap::lacks(&LENGTH),
                "What length are you targeting (word count, pages)?",
            ),
            (
                Gap::lacks(&TONE),
                "What tone should this have (formal, casual, technical)?",
            ),
        ],
        DomainLabel::Product | DomainLabel::Finance | DomainLabel::Research => vec![
            (
                Gap::FewerWordsThan(PLANNING_MIN_WORDS),
                "Can you provide more context about your goal?",
            ),
            (
                Gap::lacks(&TIMELINE),
                "What is the timeline or urgency for this?",
            ),
        ],
        DomainLabel::Misc => vec![
            (
                Gap::FewerWordsThan(MISC_MIN_WORDS),
                "Can you provide more detail about what you need?",
            ),
            (
                Gap::lacks(&CONTEXT_PREPOSITION),
                "What is the context or setting for this request?",
            ),
        ],
    }
}

/// Produces targeted clarifying questions for under-specified requests.
#[derive(Debug, Clone)]
pub struct QuestionGenerator {
    clarity_threshold: f64,
    max_questions: usize,
}

impl Default for QuestionGenerator {
    fn default() -> Self {
        Self::new(&ThresholdConfig::default())
    }
}

impl QuestionGenerator {
    /// Creates a generator using the configured clarity cutoff and question cap.
    pub fn new(config: &ThresholdConfig) -> Self {
        Self {
            clarity_threshold: config.clarity_threshold,
            max_questions: config.max_questions,
        }
    }

    /// Questions for every gap in the domain checklist, in checklist order.
    ///
    /// Returns nothing when `clarity` already meets the threshold.
    pub fn generate(&self, text: &str, domain: DomainLabel, clarity: f64) -> Vec<String> {
        if clarity >= self.clarity_threshold {
            return Vec::new();
        }

        checklist(domain)
            .into_iter()
            .filter(|(gap, _)| gap.present_in(text))
            .take(self.max_questions)
            .map(|(_, question)| question.to_owned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(text: &str, domain: DomainLabel) -> Vec<String> {
        QuestionGenerator::default().generate(text, domain, 0.2)
    }

    #[test]
    fn test_clear_requests_get_no_questions() {
        let generator = QuestionGenerator::default();
        assert!(generator.generate("build", DomainLabel::Code, 0.6).is_empty());
        assert!(generator.generate("", DomainLabel::Misc, 0.95).is_empty());
    }

    #[test]
    fn test_code_checklist_order() {
        let questions = generate("build a dashboard", DomainLabel::Code);
        assert_eq!(
            questions,
            [
                "What programming language or framework are you using?",
                "What specific feature or component are you building?",
                "Do you need tests, validation, or specific security considerations?",
            ]
        );
    }

    #[test]
    fn test_present_signals_suppress_questions() {
        let questions = generate("build a react component", DomainLabel::Code);
        assert_eq!(
            questions,
            ["Do you need tests, validation, or specific security considerations?"]
        );
    }

    #[test]
    fn test_ux_questions() {
        assert_eq!(generate("redesign the settings ui", DomainLabel::Ux).len(), 2);
        assert_eq!(
            generate("redesign the mobile settings ui for admins", DomainLabel::Ux).len(),
            0
        );
    }

    #[test]
    fn test_data_questions() {
        let questions = generate("analyze the survey", DomainLabel::Data);
        assert_eq!(questions[0], "What is the shape/structure of your data?");
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn test_writing_questions() {
        let questions = generate("write a formal blog post", DomainLabel::Writing);
        assert_eq!(
            questions,
            [
                "Who is the target audience?",
                "What length are you targeting (word count, pages)?",
            ]
        );
    }

    #[test]
    fn test_planning_domains_share_checklist() {
        for domain in [DomainLabel::Product, DomainLabel::Finance, DomainLabel::Research] {
            let questions = generate("set pricing", domain);
            assert_eq!(
                questions,
                [
                    "Can you provide more context about your goal?",
                    "What is the timeline or urgency for this?",
                ]
            );
        }
    }

    #[test]
    fn test_misc_questions() {
        assert_eq!(generate("", DomainLabel::Misc).len(), 2);
        assert_eq!(
            generate("plan a party at the lake", DomainLabel::Misc),
            ["Can you provide more detail about what you need?"]
        );
    }

    #[test]
    fn test_question_cap() {
        let config = ThresholdConfig {
            clarity_threshold: 0.6,
            max_questions: 1,
        };
        let questions = QuestionGenerator::new(&config).generate("build", DomainLabel::Code, 0.1);
        assert_eq!(
            questions,
            ["What programming language or framework are you using?"]
        );
    }
}
