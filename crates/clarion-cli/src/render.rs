use clarion_core::{AnalysisRecord, FrameworkContext};

/// Render a record for the terminal.
///
/// Layout: header line, clarification notice and numbered questions when
/// needed, then the optimized prompt (unless `show_prompt` is false), then the
/// framework guidance when one was loaded.
pub fn render_text(
    record: &AnalysisRecord,
    framework: Option<&FrameworkContext>,
    show_prompt: bool,
) -> String {
    let mut sections = vec![record.optimization_header.clone()];

    if record.needs_clarification {
        let mut notice = vec!["Clarification needed before acting on this request.".to_owned()];
        if record.risk_flags.blocks_action() {
            notice.push(format!(
                "Flagged concerns must be resolved first: {}",
                record.risk_flags.summary()
            ));
        }
        if !record.questions.is_empty() {
            notice.push("Questions:".to_owned());
            notice.extend(
                record
                    .questions
                    .iter()
                    .enumerate()
                    .map(|(index, question)| format!("  {}. {question}", index + 1)),
            );
        }
        sections.push(notice.join("\n"));
    }

    if show_prompt {
        sections.push(record.optimized_prompt.clone());
    }

    if let Some(context) = framework {
        sections.push(format!("## Framework Context\n{}", context.content().trim_end()));
    }

    sections.join("\n\n")
}
