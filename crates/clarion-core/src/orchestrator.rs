use crate::{
    AnalysisRecord, AnalysisRequest, ClarityScore, ClarityScorer, DomainClassifier, DomainLabel,
    FrameworkContext, FrameworkSource, OptimizerConfig, PromptAssembler, QuestionGenerator,
    Result, RiskDetector, RiskFlagSet,
};

/// Runs the full analysis pipeline for one request at a time.
///
/// Holds no per-request state, so a single optimizer can serve any number of
/// callers concurrently.
#[derive(Debug)]
pub struct PromptOptimizer {
    config: OptimizerConfig,
    classifier: DomainClassifier,
    scorer: ClarityScorer,
    detector: RiskDetector,
    generator: QuestionGenerator,
    assembler: PromptAssembler,
    framework: FrameworkSource,
}

impl Default for PromptOptimizer {
    fn default() -> Self {
        Self::from_valid_config(OptimizerConfig::default())
    }
}

impl PromptOptimizer {
    /// Create an optimizer from a configuration.
    ///
    /// The framework context is not read here; it loads on first use.
    ///
    /// # Errors
    /// Returns an error if the configuration fails validation
    pub fn new(config: OptimizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: OptimizerConfig) -> Self {
        Self {
            classifier: DomainClassifier,
            scorer: ClarityScorer::new(&config.scoring),
            detector: RiskDetector,
            generator: QuestionGenerator::new(&config.thresholds),
            assembler: PromptAssembler::new(config.thresholds.clarity_threshold),
            framework: FrameworkSource::new(config.framework_path()),
            config,
        }
    }

    /// Replace the framework context source.
    #[must_use]
    pub fn with_framework(mut self, framework: FrameworkSource) -> Self {
        self.framework = framework;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Framework context, read from disk on the first call only.
    pub fn framework_context(&self) -> Option<&FrameworkContext> {
        self.framework.get()
    }

    /// Analyze a request. Every field of the record is always populated.
    pub fn analyze(&self, request: &AnalysisRequest) -> AnalysisRecord {
        let text = request.text.as_str();

        let domain = self.classifier.classify(text);
        let clarity = self.scorer.score(text);
        let risk_flags = self.detector.detect(text);
        let questions = self.generator.generate(text, domain, clarity.total);
        let optimized_prompt = self.assembler.assemble(text, domain, &clarity, &risk_flags);

        let needs_clarification =
            clarity.total < self.config.thresholds.clarity_threshold || risk_flags.blocks_action();
        let optimization_header = Self::header(domain, &clarity, &risk_flags);

        tracing::debug!(
            domain = %domain,
            clarity = clarity.total,
            risks = %risk_flags.summary(),
            questions = questions.len(),
            needs_clarification,
            "Analyzed request"
        );

        AnalysisRecord {
            domain,
            clarity_score: clarity.total,
            clarity_factors: clarity.factors,
            risk_flags,
            questions,
            optimized_prompt,
            optimization_header,
            needs_clarification,
            context: request.context.clone(),
        }
    }

    /// Analyze bare text with no caller context.
    pub fn analyze_text(&self, text: &str) -> AnalysisRecord {
        self.analyze(&AnalysisRequest::new(text))
    }

    fn header(domain: DomainLabel, clarity: &ClarityScore, risk_flags: &RiskFlagSet) -> String {
        format!(
            "[OPTIMIZED] Domain: {domain} | Clarity: {}% | Risks: {}",
            clarity.percent(),
            risk_flags.summary()
        )
    }
}
