//! Builds the structured, domain-enhanced restatement of a request.
//!
//! The document layout is fixed:
//!
//! ```text
//! # Optimized Request (Domain: <label>)
//! ## Original Request
//! ## Requirements        domain-specific bullets
//! ## Output Format       generic bullets
//! ## Risk Flags          only when flags were detected
//! ```

use crate::{ClarityScore, DomainLabel, RiskFlag, RiskFlagSet};

const CODE_REQUIREMENTS: &[&str] = &[
    "Start with a short summary of the code and note its time/space complexity",
    "Call out security considerations for inputs, secrets and dependencies",
    "Provide a test plan with example inputs and expected outputs",
    "Handle errors explicitly and describe failure modes",
];

const CODE_SECURITY_BULLET: &str = "CRITICAL: this request touches security-sensitive functionality. \
     Never hard-code credentials, hash and salt stored secrets, validate every input \
     and follow current best practice for authentication and token handling";

const UX_REQUIREMENTS: &[&str] = &[
    "Apply established usability heuristics (visibility of status, consistency, error prevention)",
    "Include a WCAG 2.1 AA accessibility checklist",
    "Describe mobile responsiveness and breakpoints",
    "Specify error, empty and loading states",
];

const DATA_REQUIREMENTS: &[&str] = &[
    "State the dataset shape: fields, types and volume",
    "Show every calculation step explicitly",
    "Cover validation rules and edge cases such as missing or outlier values",
    "Make the analysis reproducible (queries, parameters, versions)",
];

const WRITING_REQUIREMENTS: &[&str] = &[
    "Identify the target audience",
    "Set the tone and style",
    "Outline the structure before drafting",
    "Open with a strong hook and close with a clear call to action",
];

const FINANCE_REQUIREMENTS: &[&str] = &[
    "List every assumption with its source",
    "Explain the calculation methodology step by step",
    "Identify risk factors that could change the outcome",
    "Include a sensitivity analysis for the key inputs",
];

const FINANCE_DISCLAIMER_BULLET: &str = "Include a disclaimer that this is informational only \
     and not professional financial, tax or legal advice";

const GENERAL_REQUIREMENTS: &[&str] = &[
    "Provide a clearly structured answer with headings",
    "State assumptions explicitly",
    "Include concrete examples",
];

const OUTPUT_FORMAT: &[&str] = &[
    "Use clear headings and short sections",
    "Put code, data and commands in fenced blocks",
    "End with a brief summary and suggested next steps",
];

/// Produces the optimized prompt for a request.
#[derive(Debug, Clone)]
pub struct PromptAssembler {
    clarity_threshold: f64,
}

impl Default for PromptAssembler {
    fn default() -> Self {
        Self::new(0.6)
    }
}

impl PromptAssembler {
    /// Creates an assembler that notes clarity below `clarity_threshold`.
    pub fn new(clarity_threshold: f64) -> Self {
        Self { clarity_threshold }
    }

    /// Assemble the optimized prompt. Runs for every request, clear or not.
    pub fn assemble(
        &self,
        text: &str,
        domain: DomainLabel,
        clarity: &ClarityScore,
        risk_flags: &RiskFlagSet,
    ) -> String {
        let mut lines = vec![
            format!("# Optimized Request (Domain: {domain})"),
            String::new(),
            "## Original Request".to_owned(),
            text.to_owned(),
            String::new(),
        ];

        if clarity.total < self.clarity_threshold {
            lines.push(format!(
                "_Note: clarity is {}%, so state any assumptions you make about missing details._",
                clarity.percent()
            ));
            lines.push(String::new());
        }

        lines.push("## Requirements".to_owned());
        lines.extend(
            Self::requirements(domain, risk_flags)
                .into_iter()
                .map(|item| format!("- {item}")),
        );
        lines.push(String::new());

        lines.push("## Output Format".to_owned());
        lines.extend(OUTPUT_FORMAT.iter().map(|item| format!("- {item}")));

        if !risk_flags.is_empty() {
            lines.push(String::new());
            lines.push("## Risk Flags".to_owned());
            lines.push(format!("Detected: {}", risk_flags.summary()));
            lines.push(
                "Address each flagged concern explicitly before and while fulfilling the request."
                    .to_owned(),
            );
        }

        lines.join("\n")
    }

    fn requirements(domain: DomainLabel, risk_flags: &RiskFlagSet) -> Vec<&'static str> {
        let mut items = match domain {
            DomainLabel::Code => CODE_REQUIREMENTS.to_vec(),
            DomainLabel::Ux => UX_REQUIREMENTS.to_vec(),
            DomainLabel::Data => DATA_REQUIREMENTS.to_vec(),
            DomainLabel::Writing => WRITING_REQUIREMENTS.to_vec(),
            DomainLabel::Finance => FINANCE_REQUIREMENTS.to_vec(),
            DomainLabel::Research | DomainLabel::Product | DomainLabel::Misc => {
                GENERAL_REQUIREMENTS.to_vec()
            }
        };

        match domain {
            DomainLabel::Code if risk_flags.contains(RiskFlag::Security) => {
                items.push(CODE_SECURITY_BULLET);
            }
            DomainLabel::Finance if risk_flags.contains(RiskFlag::Compliance) => {
                items.push(FINANCE_DISCLAIMER_BULLET);
            }
            _ => {}
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clear() -> ClarityScore {
        ClarityScore {
            total: 0.9,
            ..ClarityScore::default()
        }
    }

    fn assemble(text: &str, domain: DomainLabel, flags: &[RiskFlag]) -> String {
        let flags: RiskFlagSet = flags.iter().copied().collect();
        PromptAssembler::default().assemble(text, domain, &clear(), &flags)
    }

    #[test]
    fn test_contains_domain_and_original_text() {
        for domain in DomainLabel::ALL {
            let prompt = assemble("Keep this verbatim: 42 & <b>", domain, &[]);
            assert!(prompt.starts_with(&format!("# Optimized Request (Domain: {domain})")));
            assert!(prompt.contains("\nKeep this verbatim: 42 & <b>\n"));
            assert!(prompt.contains("## Output Format"));
            assert!(!prompt.contains("## Risk Flags"));
        }
    }

    #[test]
    fn test_domain_specific_bullets() {
        assert!(assemble("x", DomainLabel::Ux, &[]).contains("WCAG 2.1 AA"));
        assert!(assemble("x", DomainLabel::Data, &[]).contains("reproducible"));
        assert!(assemble("x", DomainLabel::Writing, &[]).contains("call to action"));
        assert!(assemble("x", DomainLabel::Finance, &[]).contains("sensitivity analysis"));
        assert!(assemble("x", DomainLabel::Product, &[]).contains("State assumptions"));
    }

    #[test]
    fn test_code_security_bullet_only_when_flagged() {
        assert!(!assemble("x", DomainLabel::Code, &[]).contains("CRITICAL"));
        assert!(!assemble("x", DomainLabel::Ux, &[RiskFlag::Security]).contains("CRITICAL"));
        let prompt = assemble("x", DomainLabel::Code, &[RiskFlag::Security]);
        assert!(prompt.contains("- CRITICAL:"));
    }

    #[test]
    fn test_finance_disclaimer_only_with_compliance() {
        assert!(!assemble("x", DomainLabel::Finance, &[]).contains("disclaimer"));
        let prompt = assemble("x", DomainLabel::Finance, &[RiskFlag::Compliance]);
        assert!(prompt.contains("disclaimer"));
    }

    #[test]
    fn test_risk_callout_lists_flags_in_order() {
        let prompt = assemble(
            "x",
            DomainLabel::Misc,
            &[RiskFlag::Privacy, RiskFlag::Policy, RiskFlag::Privacy],
        );
        assert!(prompt.contains("## Risk Flags\nDetected: privacy, policy\n"));
    }

    #[test]
    fn test_low_clarity_note() {
        let vague = ClarityScore {
            total: 0.24,
            ..ClarityScore::default()
        };
        let prompt =
            PromptAssembler::default().assemble("x", DomainLabel::Code, &vague, &RiskFlagSet::new());
        assert!(prompt.contains("clarity is 24%"));
        assert!(!assemble("x", DomainLabel::Code, &[]).contains("clarity is"));
    }
}
