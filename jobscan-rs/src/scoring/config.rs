//! Tunable scoring constants
//!
//! The defaults are empirical values; nothing derives them, so they are kept
//! configurable rather than hard-wired into the rules.

use serde::{Deserialize, Serialize};

use crate::analyzer::SignalCategory;
use crate::corpus::KeywordCategory;

/// Weights and thresholds used by the analyzer and the aggregator
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Raw text score treated as the plausible maximum when scaling
    pub normalizer: u32,
    /// Points available to the text half of the score
    pub text_budget: u32,
    /// Company half of the score, per verification outcome
    pub company: CompanyScores,
    /// Subtracted from the text score when a custom email domain resolves
    pub email_verified_bonus: u32,
    /// Added to the text score when the email domain does not resolve
    pub email_invalid_penalty: u32,
    /// Added to the text score per hard URL failure
    pub url_failure_penalty: u32,
    /// Per-rule text weights
    pub rules: RuleWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            normalizer: 200,
            text_budget: 50,
            company: CompanyScores::default(),
            email_verified_bonus: 5,
            email_invalid_penalty: 10,
            url_failure_penalty: 5,
            rules: RuleWeights::default(),
        }
    }
}

/// Company score per verification outcome
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CompanyScores {
    pub missing: u32,
    pub verified: u32,
    pub partial: u32,
    pub not_found: u32,
    pub unverified: u32,
}

impl Default for CompanyScores {
    fn default() -> Self {
        Self {
            missing: 50,
            verified: 0,
            partial: 25,
            not_found: 50,
            unverified: 30,
        }
    }
}

/// Weight of every text rule. A weight of zero disables the rule.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RuleWeights {
    pub payment: u32,
    pub urgency: u32,
    pub personal_info: u32,
    pub too_good: u32,
    pub mlm: u32,
    pub vague_role: u32,
    pub informal_contact: u32,
    pub fresher_salary: u32,
    pub high_pay: u32,
    pub free_email: u32,
    pub excessive_caps: u32,
    pub exclamations: u32,
    pub short_description: u32,
    pub no_qualifications: u32,
    pub hiring_bypass: u32,
    pub phone_numbers: u32,
    pub commission_only: u32,
    pub missing_company: u32,
}

impl Default for RuleWeights {
    fn default() -> Self {
        Self {
            payment: KeywordCategory::Payment.default_weight(),
            urgency: KeywordCategory::Urgency.default_weight(),
            personal_info: KeywordCategory::PersonalInfo.default_weight(),
            too_good: KeywordCategory::TooGood.default_weight(),
            mlm: KeywordCategory::Mlm.default_weight(),
            vague_role: KeywordCategory::VagueRole.default_weight(),
            informal_contact: KeywordCategory::InformalContact.default_weight(),
            fresher_salary: 20,
            high_pay: 20,
            free_email: 15,
            excessive_caps: 10,
            exclamations: 8,
            short_description: 10,
            no_qualifications: 8,
            hiring_bypass: 15,
            phone_numbers: 5,
            commission_only: 12,
            missing_company: 10,
        }
    }
}

impl RuleWeights {
    pub fn weight(&self, category: SignalCategory) -> u32 {
        match category {
            SignalCategory::Payment => self.payment,
            SignalCategory::Urgency => self.urgency,
            SignalCategory::PersonalInfo => self.personal_info,
            SignalCategory::TooGood => self.too_good,
            SignalCategory::Mlm => self.mlm,
            SignalCategory::VagueRole => self.vague_role,
            SignalCategory::InformalContact => self.informal_contact,
            SignalCategory::FresherSalary => self.fresher_salary,
            SignalCategory::HighPay => self.high_pay,
            SignalCategory::FreeEmail => self.free_email,
            SignalCategory::ExcessiveCaps => self.excessive_caps,
            SignalCategory::Exclamations => self.exclamations,
            SignalCategory::ShortDescription => self.short_description,
            SignalCategory::NoQualifications => self.no_qualifications,
            SignalCategory::HiringBypass => self.hiring_bypass,
            SignalCategory::PhoneNumbers => self.phone_numbers,
            SignalCategory::CommissionOnly => self.commission_only,
            SignalCategory::MissingCompany => self.missing_company,
        }
    }
}
