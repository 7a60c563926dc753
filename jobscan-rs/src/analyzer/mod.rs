//! Text signal analyzer
//!
//! Turns free text into weighted fraud indicators. Analysis is pure: the same
//! text, email and company always produce the same signals and raw score.

mod rules;
pub mod types;

pub use types::{SignalCategory, SignalMatch, TextAnalysis};

use crate::scoring::RuleWeights;
use rules::RuleInput;
use tracing::debug;

/// Rule-based text analyzer
#[derive(Debug, Clone, Default)]
pub struct TextSignalAnalyzer {
    weights: RuleWeights,
}

impl TextSignalAnalyzer {
    pub fn new(weights: RuleWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &RuleWeights {
        &self.weights
    }

    /// Analyze posting text together with the recruiter email and company name
    pub fn analyze(&self, text: &str, email: &str, company: &str) -> TextAnalysis {
        let input = RuleInput::new(text, email, company);

        let signals: Vec<SignalMatch> = SignalCategory::ORDER
            .into_iter()
            .filter_map(|category| {
                let weight = self.weights.weight(category);
                if weight == 0 {
                    return None;
                }
                rules::evaluate(category, &input).map(|finding| SignalMatch {
                    category,
                    weight,
                    description: finding.description,
                    matched_terms: finding.terms,
                })
            })
            .collect();

        let raw_score = signals
            .iter()
            .fold(0u32, |total, s| total.saturating_add(s.weight));
        debug!(signals = signals.len(), raw_score, "text analysis complete");

        TextAnalysis { signals, raw_score }
    }
}
