use core::fmt;
use core::iter::Copied;
use core::slice::Iter;
use serde::{Deserialize, Serialize};

/// A single request handed to the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// The natural-language request text
    pub text: String,
    /// Caller-owned context, carried through to the record without inspection
    pub context: Option<String>,
}

impl AnalysisRequest {
    /// Creates a request without caller context.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            context: None,
        }
    }

    /// Attaches caller context.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// Subject area of a request. Exactly one label applies per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainLabel {
    /// Programming and software delivery
    Code,
    /// Interface and user-experience design
    #[serde(rename = "UX")]
    Ux,
    /// Data analysis and querying
    Data,
    /// Prose and documentation
    Writing,
    /// Investigation and comparison
    Research,
    /// Money, pricing and valuation
    Finance,
    /// Product planning and strategy
    Product,
    /// Anything else
    Misc,
}

impl DomainLabel {
    /// Every label, in classification priority order with the fallback last.
    pub const ALL: [Self; 8] = [
        Self::Code,
        Self::Ux,
        Self::Data,
        Self::Writing,
        Self::Research,
        Self::Finance,
        Self::Product,
        Self::Misc,
    ];

    /// Display spelling of the label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Ux => "UX",
            Self::Data => "data",
            Self::Writing => "writing",
            Self::Research => "research",
            Self::Finance => "finance",
            Self::Product => "product",
            Self::Misc => "misc",
        }
    }
}

impl fmt::Display for DomainLabel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Concern category detected in a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskFlag {
    /// Credentials, authentication or exploitation
    Security,
    /// Personal data
    Privacy,
    /// Deception or circumvention
    Policy,
    /// Physical harm
    Safety,
    /// Regulated advice
    Compliance,
}

impl RiskFlag {
    /// Every flag, in detection order.
    pub const ALL: [Self; 5] = [
        Self::Security,
        Self::Privacy,
        Self::Policy,
        Self::Safety,
        Self::Compliance,
    ];

    /// Display spelling of the flag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Security => "security",
            Self::Privacy => "privacy",
            Self::Policy => "policy",
            Self::Safety => "safety",
            Self::Compliance => "compliance",
        }
    }

    /// Flags that force clarification regardless of the clarity score.
    pub const fn blocks_action(self) -> bool {
        matches!(self, Self::Policy | Self::Safety)
    }
}

impl fmt::Display for RiskFlag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Ordered, duplicate-free set of risk flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskFlagSet(Vec<RiskFlag>);

impl RiskFlagSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a flag unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, flag: RiskFlag) -> bool {
        if self.0.contains(&flag) {
            return false;
        }
        self.0.push(flag);
        true
    }

    /// Whether the flag was detected.
    pub fn contains(&self, flag: RiskFlag) -> bool {
        self.0.contains(&flag)
    }

    /// Whether no flag was detected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates flags in detection order.
    pub fn iter(&self) -> Copied<Iter<'_, RiskFlag>> {
        self.0.iter().copied()
    }

    /// Flags as a slice, in detection order.
    pub fn as_slice(&self) -> &[RiskFlag] {
        &self.0
    }

    /// Whether any flag forces clarification.
    pub fn blocks_action(&self) -> bool {
        self.iter().any(RiskFlag::blocks_action)
    }

    /// Comma-joined flag names, or `none` for an empty set.
    pub fn summary(&self) -> String {
        if self.is_empty() {
            return "none".to_owned();
        }
        self.iter()
            .map(RiskFlag::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromIterator<RiskFlag> for RiskFlagSet {
    fn from_iter<I: IntoIterator<Item = RiskFlag>>(iter: I) -> Self {
        let mut set = Self::new();
        for flag in iter {
            set.insert(flag);
        }
        set
    }
}

impl<'set> IntoIterator for &'set RiskFlagSet {
    type Item = RiskFlag;
    type IntoIter = Copied<Iter<'set, RiskFlag>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One of the five clarity factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClarityFactor {
    /// Is there a stated action or intent
    Goal,
    /// Is there background about the situation
    Context,
    /// Is a deliverable shape named
    Format,
    /// Are constraints or quality bars stated
    Criteria,
    /// Is a concrete technology named
    Technical,
}

impl ClarityFactor {
    /// Every factor, in scoring order.
    pub const ALL: [Self; 5] = [
        Self::Goal,
        Self::Context,
        Self::Format,
        Self::Criteria,
        Self::Technical,
    ];
}

/// Unweighted factor sub-scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    /// Goal sub-score
    pub goal: f64,
    /// Context sub-score
    pub context: f64,
    /// Format sub-score
    pub format: f64,
    /// Criteria sub-score
    pub criteria: f64,
    /// Technical sub-score
    pub technical: f64,
}

impl FactorScores {
    /// Sub-score of one factor.
    pub const fn get(&self, factor: ClarityFactor) -> f64 {
        match factor {
            ClarityFactor::Goal => self.goal,
            ClarityFactor::Context => self.context,
            ClarityFactor::Format => self.format,
            ClarityFactor::Criteria => self.criteria,
            ClarityFactor::Technical => self.technical,
        }
    }

    /// Sets the sub-score of one factor.
    pub fn set(&mut self, factor: ClarityFactor, value: f64) {
        let slot = match factor {
            ClarityFactor::Goal => &mut self.goal,
            ClarityFactor::Context => &mut self.context,
            ClarityFactor::Format => &mut self.format,
            ClarityFactor::Criteria => &mut self.criteria,
            ClarityFactor::Technical => &mut self.technical,
        };
        *slot = value;
    }
}

/// Weighted completeness estimate of a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ClarityScore {
    /// Weighted total in `[0, 1]`
    pub total: f64,
    /// Unweighted sub-scores
    pub factors: FactorScores,
}

impl ClarityScore {
    /// Total as a rounded percentage, for display.
    pub fn percent(&self) -> u32 {
        (self.total * 100.0).round() as u32
    }
}

/// Finalized output of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Detected subject area
    pub domain: DomainLabel,
    /// Weighted clarity total in `[0, 1]`
    pub clarity_score: f64,
    /// Unweighted clarity sub-scores
    pub clarity_factors: FactorScores,
    /// Detected concerns, in detection order
    pub risk_flags: RiskFlagSet,
    /// Clarifying questions, empty when the request is clear enough
    pub questions: Vec<String>,
    /// Structured, domain-enhanced restatement of the request
    pub optimized_prompt: String,
    /// One-line summary of domain, clarity and risks
    pub optimization_header: String,
    /// Whether the request should be clarified before acting on it
    pub needs_clarification: bool,
    /// Caller context from the request, untouched
    pub context: Option<String>,
}
