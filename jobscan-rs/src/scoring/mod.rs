//! Score aggregation
//!
//! Merges text analysis and verification outcomes into a 0-100 score split
//! into two halves: a text half scaled from the raw analyzer score and a
//! company half taken from the verification outcome. Email and URL outcomes
//! then adjust the text half. The aggregator does no I/O.

pub mod config;
pub mod types;

pub use config::{CompanyScores, RuleWeights, ScoringConfig};
pub use types::{CompanyStatus, RiskAssessment, RiskBand, ScoreBreakdown};

use tracing::debug;

use crate::analyzer::TextAnalysis;
use crate::probe::{CompanyCheck, EmailCheck, UrlCheck, Verifications};

/// Upper bound of the final score
pub const MAX_SCORE: u32 = 100;

/// Ordered accumulation of signal and verification notes
#[derive(Default)]
struct Notes {
    signals: Vec<String>,
    verifications: Vec<String>,
}

/// Combines analyzer and probe outputs into a [`RiskAssessment`]
#[derive(Debug, Clone, Default)]
pub struct ScoreAggregator {
    config: ScoringConfig,
}

impl ScoreAggregator {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scale a raw analyzer score into the text budget
    pub fn scale_text_score(&self, raw: u32) -> u32 {
        if raw == 0 || self.config.normalizer == 0 {
            return 0;
        }
        let scaled = u64::from(raw) * u64::from(self.config.text_budget)
            / u64::from(self.config.normalizer);
        scaled.min(u64::from(self.config.text_budget)) as u32
    }

    pub fn aggregate(
        &self,
        analysis: &TextAnalysis,
        company: &str,
        email: &str,
        verifications: &Verifications,
    ) -> RiskAssessment {
        let mut notes = Notes {
            signals: analysis.descriptions().map(str::to_string).collect(),
            verifications: Vec::new(),
        };

        let mut text_score = self.scale_text_score(analysis.raw_score);
        let (company_score, company_status) =
            self.company_half(company, verifications.company.as_ref(), &mut notes);

        if !email.trim().is_empty() {
            if let Some(check) = &verifications.email {
                text_score = self.apply_email(text_score, check, &mut notes);
            }
        }
        if let Some(check) = &verifications.url {
            text_score = self.apply_url(text_score, check, &mut notes);
        }

        let score = company_score.saturating_add(text_score).min(MAX_SCORE);
        debug!(
            "Aggregated score {} (text {}, company {}, status {})",
            score, text_score, company_score, company_status
        );

        RiskAssessment {
            score,
            band: RiskBand::from_score(score),
            signals: notes.signals,
            verifications: notes.verifications,
            company_status,
            breakdown: ScoreBreakdown {
                raw_text_score: analysis.raw_score,
                text_score,
                company_score,
            },
        }
    }

    fn company_half(
        &self,
        company: &str,
        check: Option<&CompanyCheck>,
        notes: &mut Notes,
    ) -> (u32, CompanyStatus) {
        let scores = &self.config.company;
        let company = company.trim();

        if company.is_empty() {
            notes
                .verifications
                .push("No company name provided: cannot verify online".to_string());
            return (scores.missing, CompanyStatus::Missing);
        }

        match check {
            Some(check) if check.found && check.website_live => {
                notes.verifications.push(format!("VERIFIED: {}", check.detail));
                (scores.verified, CompanyStatus::Verified)
            }
            Some(check) if check.found => {
                notes.verifications.push(check.detail.clone());
                notes
                    .signals
                    .push("Company domain exists but website is not reachable".to_string());
                (scores.partial, CompanyStatus::Partial)
            }
            Some(check) => {
                notes.verifications.push(check.detail.clone());
                notes.signals.push(format!(
                    "Company NOT found online: '{}' has no web presence",
                    company
                ));
                (scores.not_found, CompanyStatus::NotFound)
            }
            None => {
                notes
                    .verifications
                    .push("Company verification was not performed".to_string());
                (scores.unverified, CompanyStatus::Unknown)
            }
        }
    }

    fn apply_email(&self, text_score: u32, check: &EmailCheck, notes: &mut Notes) -> u32 {
        if check.is_free_provider {
            notes
                .verifications
                .push(format!("Email uses free provider (@{})", check.domain));
            text_score
        } else if check.valid_domain {
            notes.verifications.push(format!(
                "Email domain @{} is valid (DNS verified)",
                check.domain
            ));
            text_score.saturating_sub(self.config.email_verified_bonus)
        } else {
            notes.signals.push(format!(
                "Email domain @{} does NOT exist (DNS failed)",
                check.domain
            ));
            notes
                .verifications
                .push(format!("Email domain @{} has no DNS records", check.domain));
            text_score
                .saturating_add(self.config.email_invalid_penalty)
                .min(self.config.text_budget)
        }
    }

    fn apply_url(&self, mut text_score: u32, check: &UrlCheck, notes: &mut Notes) -> u32 {
        for reason in check.reasons() {
            let text = reason.to_string();
            if reason.is_hard_failure() {
                text_score = text_score
                    .saturating_add(self.config.url_failure_penalty)
                    .min(self.config.text_budget);
                notes.signals.push(text.clone());
            }
            notes.verifications.push(text);
        }
        text_score
    }
}
