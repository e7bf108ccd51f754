//! Command handlers for CLI operations

use anyhow::Result;
use clarion_core::{AnalysisRequest, Error, OptimizerConfig, PromptOptimizer};
use std::io::{Read, Write};
use std::path::Path;

use crate::cli::AnalyzeArgs;
use crate::render::render_text;

/// Argument value that means "read the request from stdin".
const STDIN_MARKER: &str = "-";

/// Resolve the request text, reading `input` when the argument is `-`.
///
/// # Errors
/// Returns [`Error::InvalidInput`] if stdin does not hold UTF-8 text, or an
/// I/O error if it cannot be read
pub fn read_request_text(arg: &str, mut input: impl Read) -> clarion_core::Result<String> {
    if arg != STDIN_MARKER {
        return Ok(arg.to_owned());
    }

    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    let text = String::from_utf8(bytes)
        .map_err(|error| Error::InvalidInput(format!("request is not valid UTF-8: {error}")))?;
    Ok(text.trim_end_matches(['\r', '\n']).to_owned())
}

/// Handle `clarion analyze`
///
/// # Errors
/// Returns an error if the request cannot be read or the output cannot be written
pub fn handle_analyze(
    args: &AnalyzeArgs,
    config_path: Option<&Path>,
    input: impl Read,
    out: &mut impl Write,
) -> Result<()> {
    let mut config = OptimizerConfig::load_or_default(config_path);
    if let Some(framework) = &args.framework {
        config.framework.enabled = true;
        config.framework.path = Some(framework.clone());
    }
    let optimizer = PromptOptimizer::new(config)?;
    tracing::debug!(
        "Clarity threshold {}, up to {} questions",
        optimizer.config().thresholds.clarity_threshold,
        optimizer.config().thresholds.max_questions
    );

    let text = read_request_text(&args.text, input)?;
    tracing::info!("Analyzing request ({} chars)", text.chars().count());

    let request = AnalysisRequest {
        text,
        context: args.context.clone(),
    };
    let record = optimizer.analyze(&request);

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?;
    } else {
        let framework = optimizer.framework_context();
        if let Some(context) = framework {
            tracing::debug!("Using framework context from {}", context.path().display());
        }
        writeln!(out, "{}", render_text(&record, framework, !args.no_prompt))?;
    }

    Ok(())
}

/// Handle `clarion config`. If `full` is true, prints the full TOML.
///
/// # Errors
/// Returns an error if the output cannot be written
pub fn handle_config(full: bool, config_path: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let config = OptimizerConfig::load_or_default(config_path);

    if full {
        write!(out, "{}", config.to_toml()?)?;
        return Ok(());
    }

    let scoring = &config.scoring;
    writeln!(out, "Configuration:")?;
    writeln!(
        out,
        "  Clarity threshold: {}",
        config.thresholds.clarity_threshold
    )?;
    writeln!(out, "  Max questions: {}", config.thresholds.max_questions)?;
    writeln!(
        out,
        "  Weights: goal {:.2}, context {:.2}, format {:.2}, criteria {:.2}, technical {:.2}",
        scoring.goal_weight,
        scoring.context_weight,
        scoring.format_weight,
        scoring.criteria_weight,
        scoring.technical_weight
    )?;
    writeln!(
        out,
        "  Length thresholds: goal > {} chars, context > {} words",
        scoring.goal_min_chars, scoring.context_min_words
    )?;
    let framework = config
        .framework_path()
        .map_or_else(|| "disabled".to_owned(), |path| path.display().to_string());
    writeln!(out, "  Framework context: {framework}")?;

    Ok(())
}
