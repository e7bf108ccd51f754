//! Request analysis engine for Clarion.
//!
//! This crate classifies a short natural-language request, scores how clearly it
//! is specified, flags risky subject matter, generates clarifying questions and
//! assembles a domain-enhanced restatement of the request.

/// Request analyzers (domain, clarity, risk, questions).
pub mod analyzer;
/// Structured prompt assembly.
pub mod assembler;
/// Engine configuration loaded from TOML.
pub mod config;
/// Error types and result definitions.
pub mod error;
/// Optional read-once framework context resource.
pub mod framework;
/// Pipeline that turns a request into an analysis record.
pub mod orchestrator;
/// Core data types for requests and analysis records.
pub mod types;

pub use analyzer::{ClarityScorer, DomainClassifier, DomainRule, QuestionGenerator, RiskDetector};
pub use assembler::PromptAssembler;
pub use config::{FrameworkConfig, OptimizerConfig, ScoringConfig, ThresholdConfig};
pub use error::{Error, Result};
pub use framework::{FrameworkContext, FrameworkSource};
pub use orchestrator::PromptOptimizer;
pub use types::{
    AnalysisRecord, AnalysisRequest, ClarityFactor, ClarityScore, DomainLabel, FactorScores,
    RiskFlag, RiskFlagSet,
};
