//! Human-readable output
//!
//! Consumers of the assessment contract only: nothing here affects scoring.

pub mod highlight;
pub mod portals;

pub use highlight::{highlight, Highlight};
pub use portals::{suggest, PortalLink, PortalSuggestions};

use std::fmt::Write;

use crate::engine::AssessmentRecord;
use crate::scoring::{RiskAssessment, RiskBand};

const RULE_WIDTH: usize = 56;
const SECTION_WIDTH: usize = 40;

const CONFIDENCE_BASE: usize = 70;
const CONFIDENCE_PER_SIGNAL: usize = 4;
const CONFIDENCE_PER_VERIFICATION: usize = 8;
const CONFIDENCE_CAP: usize = 98;

const RECOMMENDATIONS: [&str; 5] = [
    "Verify the company via its official website and LinkedIn",
    "Search government business registries (MCA, SEC)",
    "Never pay money upfront for a job",
    "Check reviews on Glassdoor / AmbitionBox",
    "If it sounds too good to be true, it probably is",
];

fn or_none(value: &str) -> &str {
    if value.trim().is_empty() {
        "(none)"
    } else {
        value
    }
}

/// Plain-text export of an assessment record
pub fn render_text(record: &AssessmentRecord) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let thin = "-".repeat(RULE_WIDTH);
    let section = "-".repeat(SECTION_WIDTH);
    let assessment = &record.assessment;
    let input = &record.input;

    let mut lines = vec![
        rule.clone(),
        "    Job Posting Scam Risk Report".to_string(),
        rule.clone(),
        format!(
            "  Generated : {}",
            record.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        format!(
            "  Risk Score: {}/100 ({})",
            assessment.score, assessment.band
        ),
        thin.clone(),
        String::new(),
        "JOB DESCRIPTION:".to_string(),
        section.clone(),
        or_none(&input.text).to_string(),
        String::new(),
        format!("EMAIL  : {}", or_none(&input.email)),
        format!("COMPANY: {}", or_none(&input.company)),
        format!("URL    : {}", or_none(&input.url)),
        String::new(),
        thin,
        "RED FLAGS:".to_string(),
        section.clone(),
    ];

    if assessment.signals.is_empty() {
        lines.push("  * (none)".to_string());
    }
    lines.extend(assessment.signals.iter().map(|s| format!("  * {}", s)));

    if !assessment.verifications.is_empty() {
        lines.push(String::new());
        lines.push("VERIFICATION:".to_string());
        lines.push(section);
        lines.extend(assessment.verifications.iter().map(|v| format!("  * {}", v)));
    }

    lines.push(String::new());
    lines.push(rule);
    lines.push(format!("  Report by jobscan v{}", env!("CARGO_PKG_VERSION")));
    lines.join("\n")
}

/// Confidence figure shown with an explanation, in percent
pub fn confidence(assessment: &RiskAssessment) -> usize {
    (CONFIDENCE_BASE
        + assessment.signals.len() * CONFIDENCE_PER_SIGNAL
        + assessment.verifications.len() * CONFIDENCE_PER_VERIFICATION)
        .min(CONFIDENCE_CAP)
}

fn headline(band: RiskBand) -> &'static str {
    match band {
        RiskBand::Low => {
            "Low risk: this posting appears mostly legitimate. \
             Analysis including live web verification found no major red flags."
        }
        RiskBand::Medium => {
            "Moderate risk: this posting raises concerns. \
             Some elements are commonly associated with scam listings."
        }
        RiskBand::High => {
            "High risk: this posting displays multiple strong scam indicators \
             overwhelmingly associated with known fraud patterns."
        }
    }
}

/// Narrative explanation of an assessment
pub fn explain(assessment: &RiskAssessment) -> String {
    let mut out = String::from(headline(assessment.band));

    // Writing to a String cannot fail
    if !assessment.signals.is_empty() {
        let _ = write!(out, "\n\nIssues ({}):", assessment.signals.len());
        for signal in &assessment.signals {
            let _ = write!(out, "\n  - {}", signal);
        }
    }
    if !assessment.verifications.is_empty() {
        out.push_str("\n\nVerification:");
        for note in &assessment.verifications {
            let _ = write!(out, "\n  - {}", note);
        }
    }

    out.push_str("\n\nRecommendations:");
    for tip in RECOMMENDATIONS {
        let _ = write!(out, "\n  - {}", tip);
    }
    let _ = write!(out, "\n\nConfidence: {}%", confidence(assessment));
    out
}
