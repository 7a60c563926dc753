//! Text analysis types

use serde::{Deserialize, Serialize};

use crate::corpus::KeywordCategory;

/// Every text rule, one signal category each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalCategory {
    Payment,
    Urgency,
    PersonalInfo,
    TooGood,
    Mlm,
    VagueRole,
    InformalContact,
    FresherSalary,
    HighPay,
    FreeEmail,
    ExcessiveCaps,
    Exclamations,
    ShortDescription,
    NoQualifications,
    HiringBypass,
    PhoneNumbers,
    CommissionOnly,
    MissingCompany,
}

impl SignalCategory {
    /// Rule evaluation order. Signals are emitted in this order.
    pub const ORDER: [SignalCategory; 18] = [
        SignalCategory::Payment,
        SignalCategory::Urgency,
        SignalCategory::PersonalInfo,
        SignalCategory::TooGood,
        SignalCategory::Mlm,
        SignalCategory::VagueRole,
        SignalCategory::InformalContact,
        SignalCategory::FresherSalary,
        SignalCategory::HighPay,
        SignalCategory::FreeEmail,
        SignalCategory::ExcessiveCaps,
        SignalCategory::Exclamations,
        SignalCategory::ShortDescription,
        SignalCategory::NoQualifications,
        SignalCategory::HiringBypass,
        SignalCategory::PhoneNumbers,
        SignalCategory::CommissionOnly,
        SignalCategory::MissingCompany,
    ];

    /// Keyword category backing this signal, if it is a corpus rule
    pub fn keyword_category(self) -> Option<KeywordCategory> {
        match self {
            SignalCategory::Payment => Some(KeywordCategory::Payment),
            SignalCategory::Urgency => Some(KeywordCategory::Urgency),
            SignalCategory::PersonalInfo => Some(KeywordCategory::PersonalInfo),
            SignalCategory::TooGood => Some(KeywordCategory::TooGood),
            SignalCategory::Mlm => Some(KeywordCategory::Mlm),
            SignalCategory::VagueRole => Some(KeywordCategory::VagueRole),
            SignalCategory::InformalContact => Some(KeywordCategory::InformalContact),
            _ => None,
        }
    }
}

/// A triggered text rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalMatch {
    /// Rule that fired
    pub category: SignalCategory,
    /// Score contribution, always > 0
    pub weight: u32,
    /// Human-readable explanation
    pub description: String,
    /// Phrases or fragments that triggered the rule, in corpus order
    pub matched_terms: Vec<String>,
}

/// Output of the text analyzer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAnalysis {
    /// Triggered signals in rule order
    pub signals: Vec<SignalMatch>,
    /// Unbounded sum of signal weights
    pub raw_score: u32,
}

impl TextAnalysis {
    pub fn has(&self, category: SignalCategory) -> bool {
        self.signals.iter().any(|s| s.category == category)
    }

    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.signals.iter().map(|s| s.description.as_str())
    }
}
